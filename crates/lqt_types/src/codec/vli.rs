//! Elias-gamma variable-length integers (component C2 of the codec).
//!
//! A non-negative value `n` is coded on `m = n + 1`: write `k` one-bits
//! where `k = floor(log2(m))`, a terminating zero, then the low `k` bits
//! of `m` (its leading bit, always 1, is implied by `k`). `n = 0` is the
//! single bit `0`.

use crate::codec::bitio::{BitReader, BitWriter};
use crate::error::Result;

/// Writes `n` as an Elias-gamma code on `n + 1`.
pub fn put_vli(writer: &mut BitWriter, n: u64) -> Result<()> {
	let m = n + 1;
	let k = 63 - m.leading_zeros();
	for _ in 0..k {
		writer.put_bit(1)?;
	}
	writer.put_bit(0)?;
	for i in (0..k).rev() {
		writer.put_bit(((m >> i) & 1) as u32)?;
	}
	Ok(())
}

/// Reads a value written by [`put_vli`].
pub fn get_vli(reader: &mut BitReader<'_>) -> Result<u64> {
	let mut k = 0u32;
	while reader.get_bit()? == 1 {
		k += 1;
	}
	let mut m: u64 = 1;
	for _ in 0..k {
		m = (m << 1) | u64::from(reader.get_bit()?);
	}
	Ok(m - 1)
}

/// Writes a signed value as its magnitude under [`put_vli`] followed by a
/// single sign bit, omitted when the magnitude is zero.
pub fn put_vli_signed(writer: &mut BitWriter, n: i64) -> Result<()> {
	let magnitude = n.unsigned_abs();
	put_vli(writer, magnitude)?;
	if magnitude != 0 {
		writer.put_bit(u32::from(n < 0))?;
	}
	Ok(())
}

/// Reads a value written by [`put_vli_signed`].
pub fn get_vli_signed(reader: &mut BitReader<'_>) -> Result<i64> {
	let magnitude = get_vli(reader)?;
	if magnitude == 0 {
		return Ok(0);
	}
	let negative = reader.get_bit()? == 1;
	let value = magnitude as i64;
	Ok(if negative { -value } else { value })
}
