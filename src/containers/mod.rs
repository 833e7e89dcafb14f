//! Container types built on explicitly managed storage
//!
//! - **`DynamicVec<T>`** - growable contiguous vector with configurable growth
//!   and panic-safe bulk operations
//! - **`SingleSlot<T>`** - inline optional that holds zero or one value

mod dynamic_vec;
mod single_slot;

pub use dynamic_vec::{DynamicVec, IntoIter};
pub use single_slot::SingleSlot;
