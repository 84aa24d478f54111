mod array;
mod iter;
mod region;

pub use array::Vector;
pub use iter::Iter;
