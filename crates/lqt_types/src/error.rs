//! Error types shared by every `lqt_types` module.

use thiserror::Error;

/// Errors that can occur while encoding or decoding an `.lqt` bitstream,
/// or while reading/writing its PPM container.
#[derive(Debug, Error)]
pub enum LqtError {
	/// Underlying read/write failure on the byte stream backing a `.lqt`
	/// or `.ppm` file.
	#[error("I/O error")]
	Io(#[from] std::io::Error),

	/// A read ran past the end of the bitstream outside of the bit-plane
	/// payload, where running out of bits is not recoverable (e.g. while
	/// parsing the header).
	#[error("end of bitstream")]
	EndOfStream,

	/// The header failed to parse: a VLI decoded to a value the format
	/// forbids, or width/height were zero.
	#[error("malformed header: {0}")]
	MalformedHeader(String),

	/// The encoder's configured byte cap was reached; the bit-plane scan
	/// was stopped and the caller should treat the output as a valid,
	/// truncated prefix rather than an error.
	#[error("capacity of {limit} bits exceeded")]
	CapacityExceeded {
		/// The configured capacity, in bits.
		limit: u64,
	},

	/// The PPM reader rejected the input (not a binary RGB8 `P6`, or
	/// dimensions that don't match the declared header).
	#[error("unsupported input: {0}")]
	UnsupportedInput(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LqtError>;
