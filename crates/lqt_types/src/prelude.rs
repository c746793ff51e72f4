//! Prelude module for `lqt_types`.
//!
//! This module provides a convenient way to import the commonly used
//! pieces of the codec in one `use`.
//!
//! # Examples
//!
//! ```no_run
//! use lqt_types::prelude::*;
//!
//! let (width, height, rgb) = ppm::read("input.ppm".as_ref()).unwrap();
//! let bitstream = image::encode(width, height, &rgb, 1, None).unwrap();
//! ```

#[doc(inline)]
pub use crate::error::{LqtError, Result};

#[doc(inline)]
pub use crate::codec::{self, BitReader, BitWriter, Frame};

#[doc(inline)]
pub use crate::color;

#[doc(inline)]
pub use crate::image::{self, Geometry};

#[doc(inline)]
pub use crate::ppm;
