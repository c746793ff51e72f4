//! Internal crate for `lqt`.
//!
//! This module is separated into its own crate so the root `lqt` package
//! stays a thin facade over `lqt_types`, matching the rest of this
//! workspace's layering, and should not be used directly.
//!
//! # Examples
//!
//! ```rust
//! use lqt_internal::prelude::*;
//!
//! let rgb = vec![0u8; 3];
//! let bitstream = image::encode(1, 1, &rgb, 0, None).unwrap();
//! ```

/// `use lqt_internal::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export lqt_types for convenience.
pub use lqt_types;
