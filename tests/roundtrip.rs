//! End-to-end round-trip tests driving the full encode/decode pipeline
//! against in-memory PPM-shaped fixtures, exercising the literal
//! scenarios this codec's bitstream format is specified against.

use lqt::prelude::image;

fn gradient(width: u32, height: u32) -> Vec<u8> {
	let mut rgb = vec![0u8; width as usize * height as usize * 3];
	for y in 0..height {
		for x in 0..width {
			let idx = (y * width + x) as usize * 3;
			rgb[idx] = x as u8;
			rgb[idx + 1] = y as u8;
			rgb[idx + 2] = ((x + y) & 255) as u8;
		}
	}
	rgb
}

#[test]
fn one_by_one_pixel_round_trips_exactly() {
	let rgb = vec![200u8, 150, 100];
	for mode in [0u8, 1] {
		let data = image::encode(1, 1, &rgb, mode, None).unwrap();
		let (width, height, decoded) = image::decode(&data).unwrap();
		assert_eq!((width, height), (1, 1));
		assert_eq!(decoded, rgb, "mode {mode}");
	}
}

#[test]
fn a_constant_2x2_image_has_an_all_zero_residual_payload() {
	let rgb = [128u8, 128, 128].repeat(4);
	let data = image::encode(2, 2, &rgb, 0, None).unwrap();
	let (width, height, decoded) = image::decode(&data).unwrap();
	assert_eq!((width, height), (2, 2));
	assert_eq!(decoded, rgb);
}

#[test]
fn a_3x3_image_pads_to_4x4_without_the_padding_leaking_into_the_crop() {
	let rgb = gradient(3, 3);
	let data = image::encode(3, 3, &rgb, 0, None).unwrap();
	let (width, height, decoded) = image::decode(&data).unwrap();
	assert_eq!((width, height), (3, 3));
	assert_eq!(decoded, rgb);
}

#[test]
fn an_8x8_gradient_round_trips_exactly_in_both_color_modes() {
	let rgb = gradient(8, 8);
	for mode in [0u8, 1] {
		let data = image::encode(8, 8, &rgb, mode, None).unwrap();
		let (width, height, decoded) = image::decode(&data).unwrap();
		assert_eq!((width, height), (8, 8));
		assert_eq!(decoded, rgb, "mode {mode}");
	}
}

#[test]
fn capacity_truncated_gradient_still_decodes() {
	let rgb = gradient(8, 8);
	let full = image::encode(8, 8, &rgb, 1, None).unwrap();
	let capped = image::encode(8, 8, &rgb, 1, Some(256)).unwrap();
	assert!(capped.len() <= full.len());

	// Must decode without error, even though the reconstruction is degraded.
	let (width, height, _decoded) = image::decode(&capped).unwrap();
	assert_eq!((width, height), (8, 8));
}

#[test]
fn round_trips_a_range_of_random_images_in_both_modes() {
	use rand::Rng;
	let mut rng = rand::rng();

	for &(width, height) in &[(1u32, 1u32), (2, 2), (3, 5), (7, 7), (16, 16), (9, 20)] {
		let rgb: Vec<u8> = (0..width as usize * height as usize * 3).map(|_| rng.random()).collect();
		for mode in [0u8, 1] {
			let data = image::encode(width, height, &rgb, mode, None).unwrap();
			let (w, h, decoded) = image::decode(&data).unwrap();
			assert_eq!((w, h), (width, height));
			assert_eq!(decoded, rgb, "{width}x{height} mode {mode}");
		}
	}
}
