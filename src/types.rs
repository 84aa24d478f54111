//! The strategy trait `Vector` is generic over, the strategies this crate
//! ships, and the error types.

#[cfg(feature = "alloc_api2")]
mod alloc_api2;
mod errors;
#[cfg(feature = "std_alloc")]
mod std_alloc;
mod strategy;
mod tracked;

#[cfg(feature = "alloc_api2")]
pub use alloc_api2::Api2;
pub use errors::*;
#[cfg(feature = "std_alloc")]
pub use std_alloc::Global;
pub use strategy::AllocStrategy;
pub use tracked::Stats;
pub use tracked::Tracked;
