//! The lossless pyramid codec: bit I/O, VLI/RLE coding, Hilbert
//! reordering, the pyramidal transform, bit-plane coding, and the frame
//! header/scan driver that ties them together.

pub mod bitio;
pub mod bitplane;
pub mod frame;
pub mod hilbert;
pub mod pyramid;
pub mod rle;
pub mod vli;

pub use bitio::{BitReader, BitWriter};
pub use frame::{decode_frame, encode_frame, Frame};
pub use pyramid::Pyramid;
