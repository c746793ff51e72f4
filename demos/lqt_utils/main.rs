//! LQT Image Codec CLI Utility
//!
//! A command-line tool for encoding, decoding, and verifying `.lqt`
//! files: this codec's lossless, pyramidal-quadtree/bit-plane format.
//!
//! # Features
//!
//! - **encode**: Convert a binary PPM (`P6`) image to `.lqt`
//! - **decode**: Convert an `.lqt` file back to PPM
//! - **verify**: Round-trip an `.lqt` file and confirm pixel-perfect reconstruction
//!
//! # Usage
//!
//! ```bash
//! # Encode a PPM file to .lqt, with the reversible color transform enabled
//! cargo run --example lqt_utils -- encode input.ppm output.lqt --mode 1
//!
//! # Decode an .lqt file back to PPM
//! cargo run --example lqt_utils -- decode input.lqt output.ppm
//!
//! # Verify encoder/decoder correctness on an existing .lqt file
//! cargo run --example lqt_utils -- verify input.lqt
//! ```

use clap::{Parser, Subcommand};
use lqt::prelude::{image, ppm};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lqt_utils")]
#[command(author = "lqt project")]
#[command(version = "1.0")]
#[command(about = "lqt image codec utility - encode, decode, and verify .lqt files", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Encode a binary PPM file to .lqt format
	Encode {
		/// Input PPM file path
		#[arg(value_name = "INPUT_PPM")]
		input: PathBuf,

		/// Output .lqt file path
		#[arg(value_name = "OUTPUT_LQT")]
		output: PathBuf,

		/// Color transform mode: 0 = centered RGB, 1 = reversible Y/Co/Cg transform
		#[arg(short, long, default_value_t = 1)]
		mode: u8,

		/// Cap the encoded bitstream at this many bits, truncating gracefully
		#[arg(short, long)]
		capacity: Option<u64>,
	},

	/// Decode an .lqt file to a binary PPM file
	Decode {
		/// Input .lqt file path
		#[arg(value_name = "INPUT_LQT")]
		input: PathBuf,

		/// Output PPM file path
		#[arg(value_name = "OUTPUT_PPM")]
		output: PathBuf,
	},

	/// Round-trip an .lqt file's pixels through a fresh encode and confirm they match
	Verify {
		/// Input .lqt file path to verify
		#[arg(value_name = "INPUT_LQT")]
		input: PathBuf,
	},
}

fn handle_encode(input: PathBuf, output: PathBuf, mode: u8, capacity: Option<u64>) -> anyhow::Result<()> {
	info!("reading PPM file: {}", input.display());
	let (width, height, rgb) = ppm::read(&input)?;
	info!("loaded {width}x{height} image ({} bytes)", rgb.len());

	let bitstream = image::encode(width, height, &rgb, mode, capacity)?;
	let ratio = bitstream.len() as f64 / rgb.len() as f64 * 100.0;
	info!("encoded to {} bytes ({ratio:.2}% of raw RGB)", bitstream.len());

	std::fs::write(&output, &bitstream)?;
	println!("✓ encoded {} -> {} ({ratio:.2}% of raw RGB)", input.display(), output.display());
	Ok(())
}

fn handle_decode(input: PathBuf, output: PathBuf) -> anyhow::Result<()> {
	info!("reading .lqt file: {}", input.display());
	let data = std::fs::read(&input)?;

	let (width, height, rgb) = image::decode(&data)?;
	info!("decoded {width}x{height} image ({} bytes)", rgb.len());

	ppm::write(&output, width, height, &rgb)?;
	println!("✓ decoded {} -> {} ({width}x{height})", input.display(), output.display());
	Ok(())
}

fn handle_verify(input: PathBuf) -> anyhow::Result<()> {
	let original = std::fs::read(&input)?;
	let (width, height, decoded) = image::decode(&original)?;
	info!("decoded {width}x{height} image from {}", input.display());

	let reencoded = image::encode(width, height, &decoded, 1, None)?;
	let (_, _, redecoded) = image::decode(&reencoded)?;

	if redecoded == decoded {
		println!("✓ verification PASSED: {width}x{height}, pixel-perfect round trip");
		println!("  original size:  {} bytes", original.len());
		println!("  re-encoded size: {} bytes", reencoded.len());
	} else {
		let mismatches = decoded.iter().zip(redecoded.iter()).filter(|(a, b)| a != b).count();
		println!("✗ verification FAILED: {mismatches} / {} bytes differ", decoded.len());
		anyhow::bail!("round trip mismatch");
	}

	Ok(())
}

fn main() -> anyhow::Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

	let cli = Cli::parse();
	match cli.command {
		Commands::Encode {
			input,
			output,
			mode,
			capacity,
		} => handle_encode(input, output, mode, capacity),
		Commands::Decode { input, output } => handle_decode(input, output),
		Commands::Verify { input } => handle_verify(input),
	}
}
