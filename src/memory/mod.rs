//! Memory primitives backing the containers
//!
//! [`RawStorage`] owns an uninitialized block sized for a number of elements
//! and never constructs or drops values itself. The [`relocate`] module holds
//! the helpers that place values into such a block, move them between blocks,
//! and destroy them again, undoing partial work when element code panics.

mod raw_storage;
pub mod relocate;

pub use raw_storage::RawStorage;
