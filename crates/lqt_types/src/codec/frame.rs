//! Header and scan driver tying the codec components together
//! (component C7).
//!
//! Encode order:
//!
//! 1. Mode bit (0 = centered samples, 1 = raw samples — see
//!    [`crate::color`]).
//! 2. Width, height, each a [`vli::put_vli`](super::vli::put_vli).
//! 3. For each of the three channels: its root coefficient, as a signed
//!    VLI.
//! 4. For each of the three channels: its plane count, as a VLI.
//! 5. The interleaved bit-plane payload ([`bitplane`](super::bitplane)).
//! 6. A final byte-alignment flush.
//!
//! Decoding reverses the same order. A truncated payload (capacity cap
//! on encode, short read on decode) is not an error — see
//! [`bitplane::decode_payload`].

use crate::codec::bitio::{BitReader, BitWriter};
use crate::codec::bitplane::{self, planes_for};
use crate::codec::pyramid::Pyramid;
use crate::codec::vli::{get_vli, get_vli_signed, put_vli, put_vli_signed};
use crate::error::{LqtError, Result};

/// A fully decoded (or best-effort, truncated) frame: dimensions, the
/// source's sample mode, and one pyramid per channel.
#[derive(Debug, Clone)]
pub struct Frame {
	/// Original image width, as declared in the header.
	pub width: u32,
	/// Original image height, as declared in the header.
	pub height: u32,
	/// Color-transform selector: `0` = centered RGB, `1` = reversible
	/// Y/Co/Cg transform (see [`crate::color`]).
	pub mode: u8,
	/// Pyramid depth; the coded square has side `2^depth`.
	pub depth: usize,
	/// One pyramid per channel, root filled in and residuals either
	/// decoded or (past a truncation point) left at zero.
	pub pyramids: [Pyramid; 3],
}

/// Encodes three channels of leaf samples (each `side x side`, row-major,
/// `side = 2^depth`) into a complete `.lqt` bitstream.
///
/// `capacity_bits`, if set, caps the total bitstream length; the scan
/// stops early and the result is still a valid, decodable prefix.
pub fn encode_frame(width: u32, height: u32, mode: u8, leaves: [&[i32]; 3], depth: usize, capacity_bits: Option<u64>) -> Result<Vec<u8>> {
	let mut writer = match capacity_bits {
		Some(cap) => BitWriter::with_capacity_bits(cap),
		None => BitWriter::new(),
	};

	writer.put_bit(u32::from(mode))?;
	put_vli(&mut writer, u64::from(width))?;
	put_vli(&mut writer, u64::from(height))?;

	let pyramids: [Pyramid; 3] = std::array::from_fn(|c| Pyramid::forward(leaves[c], depth));

	for pyramid in &pyramids {
		put_vli_signed(&mut writer, i64::from(pyramid.root()))?;
	}

	let planes: [u32; 3] = std::array::from_fn(|c| planes_for(&pyramids[c]));
	for &p in &planes {
		put_vli(&mut writer, u64::from(p))?;
	}

	let complete = bitplane::encode_payload(&mut writer, &pyramids, planes, depth)?;
	if !complete {
		log::warn!("capacity reached; .lqt payload truncated to {} bits", writer.bits_count());
	}

	Ok(writer.into_data())
}

/// Decodes a `.lqt` bitstream produced by [`encode_frame`].
///
/// A short/truncated `data` still yields a [`Frame`]: the header must be
/// fully present (failure there is a hard error), but a payload that
/// runs out mid-scan degrades gracefully, filling in zero for every
/// residual the stream didn't reach.
pub fn decode_frame(data: &[u8]) -> Result<Frame> {
	let mut reader = BitReader::new(data);

	let truncated = |_| LqtError::MalformedHeader("truncated header".into());

	let mode = reader.get_bit().map_err(truncated)? as u8;
	let width = get_vli(&mut reader).map_err(truncated)?;
	let height = get_vli(&mut reader).map_err(truncated)?;
	if width == 0 || height == 0 {
		return Err(LqtError::MalformedHeader("width and height must be nonzero".into()));
	}

	let depth = depth_for_dimensions(width, height)?;

	let mut roots = [0i32; 3];
	for root in &mut roots {
		*root = get_vli_signed(&mut reader).map_err(truncated)? as i32;
	}

	let mut planes = [0u32; 3];
	for p in &mut planes {
		*p = get_vli(&mut reader).map_err(truncated)? as u32;
	}

	let arenas = bitplane::decode_payload(&mut reader, planes, depth);
	let pyramids: [Pyramid; 3] = std::array::from_fn(|c| {
		let mut arena = arenas[c].clone();
		arena[0] = roots[c];
		Pyramid::from_arena(depth, arena)
	});

	Ok(Frame {
		width: width as u32,
		height: height as u32,
		mode,
		depth,
		pyramids,
	})
}

/// The pyramid depth whose `2^depth x 2^depth` leaf grid is the smallest
/// power-of-two square covering `width x height`.
fn depth_for_dimensions(width: u64, height: u64) -> Result<usize> {
	let side_needed = width.max(height);
	let mut depth = 0usize;
	while (1u64 << depth) < side_needed {
		depth += 1;
		if depth > 32 {
			return Err(LqtError::MalformedHeader("width/height too large".into()));
		}
	}
	Ok(depth)
}
