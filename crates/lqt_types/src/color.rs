//! Reversible color transform and sample centering.
//!
//! `forward`/`inverse` implement a YCoCg-R style lifting transform: exact
//! integer arithmetic, no rounding loss, so encode-then-decode recovers
//! the original RGB triple bit for bit. Centering maps `u8` samples
//! (`0..=255`) to a signed range around zero (`-128..=127`), which keeps
//! the pyramid's root coefficient small regardless of the image's mean
//! brightness.

/// Converts an RGB triple to decorrelated `(y, co, cg)`, reversible via
/// [`inverse`]. Operates on already-centered, signed samples.
pub fn forward(r: i32, g: i32, b: i32) -> (i32, i32, i32) {
	let co = r - b;
	let tmp = b + (co >> 1);
	let cg = g - tmp;
	let y = tmp + (cg >> 1);
	(y, co, cg)
}

/// Inverts [`forward`], recovering the original `(r, g, b)` exactly.
pub fn inverse(y: i32, co: i32, cg: i32) -> (i32, i32, i32) {
	let tmp = y - (cg >> 1);
	let g = cg + tmp;
	let b = tmp - (co >> 1);
	let r = b + co;
	(r, g, b)
}

/// Centers an `0..=255` sample to `-128..=127`.
pub fn center(sample: u8) -> i32 {
	i32::from(sample) - 128
}

/// Inverts [`center`], clamping back into `0..=255` in case upstream
/// residual decoding produced an out-of-range value from a truncated
/// stream.
pub fn uncenter(sample: i32) -> u8 {
	(sample + 128).clamp(0, 255) as u8
}
