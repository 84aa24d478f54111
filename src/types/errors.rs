use thiserror::Error;

/// This indicates some sort of memory allocation error from the byte level
/// allocator of a strategy.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[error("A memory allocation error occurred.")]
pub struct AllocError;

/// This enum lets one figure out what kind of error occurred during
/// a `Vector` operation.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ErrorReason {
    /// The strategy could not acquire a region of the requested size.
    #[error("Out of memory.")]
    OutOfMemory = 1,
    /// The requested element count does not fit in a `usize` sized region.
    #[error("Capacity overflowed.")]
    CapacityOverflow,
    /// The region would exceed `isize::MAX` bytes.
    #[error("Failed to create layout.")]
    LayoutFailure,
    /// The element constructor reported a failure.
    #[error("Element construction failed.")]
    ConstructionFailed,
    /// A checked access was outside of `[0, len)`.
    #[error("Index out of range.")]
    IndexOutOfRange,
}

/// A type alias for `Result<T, VecErr>`
pub type VecResult<T> = Result<T, VecErr>;

/// This is used to indicate an error during a `Vector` operation.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[error(transparent)]
pub struct VecErr(ErrorReason);

impl VecErr {
    pub(crate) const fn new(reason: ErrorReason) -> Self {
        return Self(reason);
    }

    pub const fn reason(self) -> ErrorReason {
        return self.0;
    }
}

impl From<ErrorReason> for VecErr {
    fn from(reason: ErrorReason) -> Self {
        return Self(reason);
    }
}
