//! Prelude module for `lqt_internal`.
//!
//! This module provides a convenient way to import commonly used types
//! and functions.
//!
//! # Examples
//!
//! ```rust
//! use lqt_internal::prelude::*;
//!
//! let rgb = vec![0u8; 3];
//! let bitstream = image::encode(1, 1, &rgb, 0, None).unwrap();
//! let (width, height, decoded) = image::decode(&bitstream).unwrap();
//! assert_eq!((width, height), (1, 1));
//! ```

// Re-export everything from lqt_types::prelude.
#[doc(inline)]
pub use lqt_types::prelude::*;

// Re-export the entire lqt_types crate for advanced usage.
#[doc(inline)]
pub use lqt_types;
