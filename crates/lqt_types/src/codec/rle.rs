//! Zero-run length coding over [`vli`](super::vli) (component C3 of the codec).
//!
//! A bit stream dominated by zeros is turned into a sequence of
//! "how many zeros precede the next one" counts, each written as a VLI.
//! The final, possibly-empty run is flushed on [`RleEncoder::finish`] with
//! no terminating one — decoding that tail simply yields zeros until the
//! underlying bit stream runs out.
//!
//! Bits that aren't sparse (signs, refinement bits) skip this layer
//! entirely and go straight through the bit-packer; see
//! [`bitio`](super::bitio).

use crate::codec::bitio::{BitReader, BitWriter};
use crate::codec::vli::{get_vli, put_vli};
use crate::error::Result;

/// Run-length state for one significance-bit stream.
///
/// Holds only the pending zero count; the caller supplies the
/// [`BitWriter`] each call so several of these can interleave over one
/// shared stream (one per channel, for instance).
#[derive(Debug, Default)]
pub struct RleEncoder {
	zero_run: u64,
}

impl RleEncoder {
	/// Creates an encoder with an empty pending run.
	pub fn new() -> Self {
		Self::default()
	}

	/// Feeds one bit. A zero only extends the pending run; a one flushes
	/// the run as a VLI and resets it.
	pub fn put_bit(&mut self, writer: &mut BitWriter, bit: u32) -> Result<()> {
		if bit == 0 {
			self.zero_run += 1;
		} else {
			put_vli(writer, self.zero_run)?;
			self.zero_run = 0;
		}
		Ok(())
	}

	/// Flushes the trailing run (possibly zero-length) with no terminating one.
	pub fn finish(mut self, writer: &mut BitWriter) -> Result<()> {
		put_vli(writer, self.zero_run)?;
		self.zero_run = 0;
		Ok(())
	}
}

/// Decoding counterpart of [`RleEncoder`].
#[derive(Debug, Default)]
pub struct RleDecoder {
	/// Zeros left in the run currently being emitted; `None` means the next
	/// call must read a fresh run length.
	remaining: Option<u64>,
}

impl RleDecoder {
	/// Creates a decoder with no run in progress.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the next bit, reading a new run-length VLI from `reader`
	/// whenever the previous run has been fully emitted.
	pub fn get_bit(&mut self, reader: &mut BitReader<'_>) -> Result<u32> {
		loop {
			match self.remaining {
				Some(0) => {
					self.remaining = None;
					return Ok(1);
				}
				Some(n) => {
					self.remaining = Some(n - 1);
					return Ok(0);
				}
				None => {
					let run = get_vli(reader)?;
					self.remaining = Some(run);
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trips_a_sparse_bit_pattern() {
		let bits = [0, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, 1];
		let mut w = BitWriter::new();
		let mut enc = RleEncoder::new();
		for &b in &bits {
			enc.put_bit(&mut w, b).unwrap();
		}
		enc.finish(&mut w).unwrap();
		let data = w.into_data();

		let mut r = BitReader::new(&data);
		let mut dec = RleDecoder::new();
		for &b in &bits {
			assert_eq!(dec.get_bit(&mut r).unwrap(), b);
		}
	}

	#[test]
	fn trailing_zero_run_decodes_without_a_terminating_one() {
		let bits = [1, 0, 0, 0, 0, 0];
		let mut w = BitWriter::new();
		let mut enc = RleEncoder::new();
		for &b in &bits {
			enc.put_bit(&mut w, b).unwrap();
		}
		enc.finish(&mut w).unwrap();
		let data = w.into_data();

		let mut r = BitReader::new(&data);
		let mut dec = RleDecoder::new();
		for &b in &bits {
			assert_eq!(dec.get_bit(&mut r).unwrap(), b);
		}
	}

	#[test]
	fn an_entirely_empty_stream_still_emits_one_terminator() {
		let mut w = BitWriter::new();
		let enc = RleEncoder::new();
		enc.finish(&mut w).unwrap();
		let data = w.into_data();
		assert_eq!(data, vec![0b0000_0000]);
	}

	#[test]
	fn raw_bits_interleave_with_rle_bits_on_the_same_stream() {
		let mut w = BitWriter::new();
		let mut enc = RleEncoder::new();
		enc.put_bit(&mut w, 0).unwrap();
		enc.put_bit(&mut w, 1).unwrap();
		w.put_bit(1).unwrap(); // a raw sign bit, bypassing the run coder
		enc.put_bit(&mut w, 0).unwrap();
		enc.put_bit(&mut w, 1).unwrap();
		enc.finish(&mut w).unwrap();
		let data = w.into_data();

		let mut r = BitReader::new(&data);
		let mut dec = RleDecoder::new();
		assert_eq!(dec.get_bit(&mut r).unwrap(), 0);
		assert_eq!(dec.get_bit(&mut r).unwrap(), 1);
		assert_eq!(r.get_bit().unwrap(), 1);
		assert_eq!(dec.get_bit(&mut r).unwrap(), 0);
		assert_eq!(dec.get_bit(&mut r).unwrap(), 1);
	}
}
