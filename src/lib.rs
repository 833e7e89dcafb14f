//! # advanced-vector: Explicit-Storage Containers
//!
//! This crate provides a growable vector and an inline optional built directly
//! on raw, uninitialized memory, with allocation kept separate from object
//! lifetime.
//!
//! ## Key Features
//!
//! - **Raw Storage**: Owned uninitialized blocks that release bytes but never touch values
//! - **Dynamic Vector**: Amortized O(1) appends with a configurable growth policy
//! - **Panic Safety**: Bulk construction unwinds cleanly when `Clone`, `Default` or a closure panics
//! - **Single Slot**: Zero-or-one value stored inline with checked and unchecked access
//! - **Configuration**: Growth presets, environment overrides and JSON persistence
//!
//! ## Quick Start
//!
//! ```rust
//! use advanced_vector::{DynamicVec, SingleSlot, VectorError};
//!
//! let mut vec = DynamicVec::new();
//! for i in 0..5 {
//!     vec.push_back(i).unwrap();
//! }
//! assert_eq!(vec.len(), 5);
//! assert_eq!(vec.capacity(), 8);
//!
//! vec.insert(0, 100).unwrap();
//! assert_eq!(vec[0], 100);
//! assert!(vec.insert(42, 7).is_err());
//!
//! let mut slot = SingleSlot::new();
//! assert!(matches!(slot.value(), Err(VectorError::BadOptionalAccess)));
//! slot.emplace(String::from("hello"));
//! assert_eq!(slot.value().unwrap(), "hello");
//! ```

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod config;
pub mod containers;
pub mod error;
pub mod memory;

// Re-export core types
pub use config::{Config, GrowthPolicy, VecConfig};
pub use containers::{DynamicVec, IntoIter, SingleSlot};
pub use error::{Result, VectorError};
pub use memory::RawStorage;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() {
    log::debug!("Initializing advanced-vector v{}", VERSION);
}
