//! Core data types and algorithms for `lqt`, a lossless image codec built
//! on a pyramidal quadtree transform and MSB-first bit-plane coding.
//!
//! # Modules
//!
//! - [`codec`]: the bitstream primitives (bit I/O, VLI, RLE), the
//!   Hilbert reorder, the reversible pyramid transform, the bit-plane
//!   coder, and the frame header/scan driver that ties them together.
//! - [`color`]: sample centering and the reversible RGB/YCoCg-style
//!   color transform.
//! - [`image`]: frame geometry and the top-level encode/decode pipeline
//!   over packed RGB8 buffers.
//! - [`ppm`]: the binary PPM (`P6`) container this crate's CLI reads and
//!   writes.
//! - [`error`]: the shared error enum, [`LqtError`](error::LqtError).
//!
//! # Examples
//!
//! ```rust
//! use lqt_types::image;
//!
//! let rgb = vec![200u8, 150, 100];
//! let bitstream = image::encode(1, 1, &rgb, 0, None).unwrap();
//! let (width, height, decoded) = image::decode(&bitstream).unwrap();
//! assert_eq!((width, height), (1, 1));
//! assert_eq!(decoded, rgb);
//! ```

pub mod codec;
pub mod color;
pub mod error;
pub mod image;
pub mod ppm;

pub mod prelude;

pub use codec::{decode_frame, encode_frame, BitReader, BitWriter, Frame, Pyramid};
pub use error::{LqtError, Result};
