//! Frame geometry and the top-level encode/decode pipeline (component C8,
//! minus the PPM container itself — see [`crate::ppm`]).
//!
//! This module is the glue between the external, packed-RGB8 world and
//! the internal pyramid codec: it centers samples, runs the optional
//! reversible color transform, pads to the smallest power-of-two square
//! the frame header's `depth` implies, and crops back on the way out.

use crate::codec::frame::{self, Frame};
use crate::color;
use crate::error::{LqtError, Result};

/// The square coding grid a `width x height` image is padded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
	/// Original image width, as supplied by the caller.
	pub width: u32,
	/// Original image height, as supplied by the caller.
	pub height: u32,
	/// Pyramid depth: `length = 2^depth` is the padded grid's side.
	pub depth: usize,
	/// Side length of the padded `length x length` coding grid.
	pub length: u32,
}

impl Geometry {
	/// Computes the padded square geometry for a `width x height` image.
	///
	/// `depth = ceil(log2(max(width, height)))`, so a `1x1` image has
	/// `depth = 0` and a `3x3` image pads up to a `4x4` (`depth = 2`) grid.
	pub fn for_dimensions(width: u32, height: u32) -> Result<Self> {
		if width == 0 || height == 0 {
			return Err(LqtError::MalformedHeader("width and height must be nonzero".into()));
		}
		let side_needed = u64::from(width.max(height));
		let mut depth = 0usize;
		while (1u64 << depth) < side_needed {
			depth += 1;
		}
		Ok(Self {
			width,
			height,
			depth,
			length: 1u32 << depth,
		})
	}

	/// Total samples in the padded `length x length` grid.
	pub fn pixels(&self) -> usize {
		self.length as usize * self.length as usize
	}
}

/// Encodes a packed, interleaved RGB8 buffer (`width * height * 3` bytes,
/// row-major) into a complete `.lqt` bitstream.
///
/// `mode` selects the reversible color transform: `0` codes centered RGB
/// directly, `1` codes [`color::forward`]'s `(Y, Co, Cg)` triple.
/// `capacity_bits`, if set, caps the encoded size; the bit-plane scan
/// stops early and still produces a valid, decodable prefix.
pub fn encode(width: u32, height: u32, rgb: &[u8], mode: u8, capacity_bits: Option<u64>) -> Result<Vec<u8>> {
	let expected_len = width as usize * height as usize * 3;
	if rgb.len() != expected_len {
		return Err(LqtError::UnsupportedInput(format!(
			"expected {expected_len} RGB8 bytes for a {width}x{height} image, found {}",
			rgb.len()
		)));
	}

	let geometry = Geometry::for_dimensions(width, height)?;
	let side = geometry.length as usize;
	let mut channels = [vec![0i32; side * side], vec![0i32; side * side], vec![0i32; side * side]];

	for y in 0..height as usize {
		for x in 0..width as usize {
			let src = (y * width as usize + x) * 3;
			let (mut a, mut b, mut c) = (color::center(rgb[src]), color::center(rgb[src + 1]), color::center(rgb[src + 2]));
			if mode == 1 {
				let (y_, co, cg) = color::forward(a, b, c);
				(a, b, c) = (y_, co, cg);
			}
			let dst = y * side + x;
			channels[0][dst] = a;
			channels[1][dst] = b;
			channels[2][dst] = c;
		}
	}

	log::info!(
		"encoding {width}x{height} image (mode {mode}, padded to {side}x{side}, depth {})",
		geometry.depth
	);

	frame::encode_frame(
		width,
		height,
		mode,
		[&channels[0], &channels[1], &channels[2]],
		geometry.depth,
		capacity_bits,
	)
}

/// Decodes a `.lqt` bitstream into `(width, height, rgb)`, cropping away
/// the padding and inverting the color transform if `mode == 1`.
pub fn decode(data: &[u8]) -> Result<(u32, u32, Vec<u8>)> {
	let Frame {
		width,
		height,
		mode,
		depth,
		pyramids,
	} = frame::decode_frame(data)?;

	let side = 1usize << depth;
	let (width, height) = (width as usize, height as usize);
	let channels: [Vec<i32>; 3] = pyramids.map(|p| p.inverse());

	let mut rgb = vec![0u8; width * height * 3];
	for y in 0..height {
		for x in 0..width {
			let src = y * side + x;
			let (mut a, mut b, mut c) = (channels[0][src], channels[1][src], channels[2][src]);
			if mode == 1 {
				(a, b, c) = color::inverse(a, b, c);
			}
			let dst = (y * width + x) * 3;
			rgb[dst] = color::uncenter(a);
			rgb[dst + 1] = color::uncenter(b);
			rgb[dst + 2] = color::uncenter(c);
		}
	}

	Ok((width as u32, height as u32, rgb))
}
