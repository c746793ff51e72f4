//! MSB-first significance/refinement bit-plane coding (component C6 of
//! the codec).
//!
//! For each channel's pyramid, every coefficient below the root carries a
//! magnitude of at most `planes` bits. Coding proceeds plane by plane,
//! from the most significant bit down to the least:
//!
//! - **Significance scan**: for every coefficient not yet known to be
//!   nonzero, emit this plane's bit of its magnitude (through the
//!   zero-run coder in [`rle`](super::rle), since most of these bits are
//!   zero). The first `1` is immediately followed by a raw sign bit, and
//!   the coefficient is marked significant as of this plane.
//! - **Refinement scan**: for every coefficient that became significant
//!   on a *previous* plane, emit this plane's bit directly (no run
//!   coding — these bits are close to uniformly distributed).
//!
//! Coefficients within one level are visited in Hilbert-curve order
//! ([`hilbert`](super::hilbert)), coarsest level first. The three
//! channels share one descending plane counter but keep independent
//! zero-run state, each channel's own plane count coming from
//! [`Pyramid::max_abs_residual`].
//!
//! Truncation (see [`LqtError::CapacityExceeded`]) can only cut off the
//! lowest planes of the scan: since planes are coded high to low, bits
//! already written for any coefficient are never revisited.

use crate::codec::bitio::{BitReader, BitWriter};
use crate::codec::hilbert::hilbert_index;
use crate::codec::pyramid::Pyramid;
use crate::codec::rle::{RleDecoder, RleEncoder};
use crate::error::{LqtError, Result};

/// Number of bit-planes needed to carry every residual in `pyramid`:
/// the smallest `p` such that `2^p > max_abs_residual`.
pub fn planes_for(pyramid: &Pyramid) -> u32 {
	let max_abs = pyramid.max_abs_residual();
	let mut planes = 0u32;
	while (1u64 << planes) <= u64::from(max_abs) {
		planes += 1;
	}
	planes
}

/// `(level, position, flat_index)` for every non-root coefficient of a
/// `depth`-deep tree, coarsest level first, Hilbert order within a level.
fn scan_order(depth: usize) -> Vec<(usize, usize, usize)> {
	let mut order = Vec::new();
	for level in 1..=depth {
		let side = Pyramid::level_side(level);
		for i in 0..side * side {
			let position = hilbert_index(side, i);
			order.push((level, position, Pyramid::flat_index(level, position)));
		}
	}
	order
}

/// Encodes the interleaved bit-plane payload for all three channels.
///
/// `planes[c]` is the per-channel plane count already committed to the
/// header. Returns `Ok(true)` if the full scan completed, or `Ok(false)`
/// if the writer's capacity was reached and the scan was cut short —
/// both are successful, non-error outcomes.
pub fn encode_payload(writer: &mut BitWriter, pyramids: &[Pyramid; 3], planes: [u32; 3], depth: usize) -> Result<bool> {
	let order = scan_order(depth);
	let max_planes = planes.into_iter().max().unwrap_or(0);
	let arena_len = Pyramid::tree_size(depth);
	let mut significant_at: [Vec<i32>; 3] = std::array::from_fn(|_| vec![-1i32; arena_len]);
	let mut runs: [RleEncoder; 3] = std::array::from_fn(|_| RleEncoder::new());

	let outcome = (|| -> Result<()> {
		for p in (0..max_planes).rev() {
			for (channel, run) in runs.iter_mut().enumerate() {
				if p >= planes[channel] {
					continue;
				}
				for &(level, position, flat) in &order {
					if significant_at[channel][flat] != -1 {
						continue;
					}
					let coef = pyramids[channel].level(level)[position];
					let bit = (coef.unsigned_abs() >> p) & 1;
					run.put_bit(writer, bit)?;
					if bit == 1 {
						writer.put_bit(u32::from(coef < 0))?;
						significant_at[channel][flat] = p as i32;
					}
				}
			}
			for channel in 0..3 {
				if p >= planes[channel] {
					continue;
				}
				for &(level, position, flat) in &order {
					if significant_at[channel][flat] == -1 || significant_at[channel][flat] <= p as i32 {
						continue;
					}
					let coef = pyramids[channel].level(level)[position];
					let bit = (coef.unsigned_abs() >> p) & 1;
					writer.put_bit(bit)?;
				}
			}
		}
		for run in runs {
			run.finish(writer)?;
		}
		Ok(())
	})();

	match outcome {
		Ok(()) => Ok(true),
		Err(LqtError::CapacityExceeded { .. }) => Ok(false),
		Err(e) => Err(e),
	}
}

/// Decodes the interleaved bit-plane payload into one residual arena per
/// channel (root slot left at zero; the caller fills it in separately).
///
/// Running out of input partway through is not an error: every
/// coefficient not yet reached when the stream ends keeps its initial
/// value of zero, the best reconstruction available from a truncated
/// stream.
pub fn decode_payload(reader: &mut BitReader<'_>, planes: [u32; 3], depth: usize) -> [Vec<i32>; 3] {
	let order = scan_order(depth);
	let max_planes = planes.into_iter().max().unwrap_or(0);
	let arena_len = Pyramid::tree_size(depth);
	let mut arenas: [Vec<i32>; 3] = std::array::from_fn(|_| vec![0i32; arena_len]);
	let mut significant_at: [Vec<i32>; 3] = std::array::from_fn(|_| vec![-1i32; arena_len]);
	let mut signs: [Vec<i8>; 3] = std::array::from_fn(|_| vec![1i8; arena_len]);
	let mut runs: [RleDecoder; 3] = std::array::from_fn(|_| RleDecoder::new());

	let result = (|| -> Result<()> {
		for p in (0..max_planes).rev() {
			for (channel, run) in runs.iter_mut().enumerate() {
				if p >= planes[channel] {
					continue;
				}
				for &(_level, _position, flat) in &order {
					if significant_at[channel][flat] != -1 {
						continue;
					}
					let bit = run.get_bit(reader)?;
					if bit == 1 {
						let sign_bit = reader.get_bit()?;
						signs[channel][flat] = if sign_bit == 1 { -1 } else { 1 };
						significant_at[channel][flat] = p as i32;
						arenas[channel][flat] |= 1 << p;
					}
				}
			}
			for channel in 0..3 {
				if p >= planes[channel] {
					continue;
				}
				for &(_level, _position, flat) in &order {
					if significant_at[channel][flat] == -1 || significant_at[channel][flat] <= p as i32 {
						continue;
					}
					let bit = reader.get_bit()?;
					if bit == 1 {
						arenas[channel][flat] |= 1 << p;
					}
				}
			}
		}
		Ok(())
	})();

	if let Err(LqtError::EndOfStream) = result {
		log::debug!("bit-plane payload ended early; reconstructing from the available prefix");
	}

	for channel in 0..3 {
		for &(_level, _position, flat) in &order {
			if signs[channel][flat] < 0 {
				arenas[channel][flat] = -arenas[channel][flat];
			}
		}
	}

	arenas
}
