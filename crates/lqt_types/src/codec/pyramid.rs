//! Reversible pyramidal quadtree transform (component C5 of the codec).
//!
//! Each level holds a `side x side` grid of samples, `side` doubling from
//! the root (`1x1`) down to the full-resolution leaves. A forward pass
//! replaces every `2x2` block of children with their ties-away-from-zero
//! average (stored at the parent) and the four residuals (stored in
//! place of the children). The inverse pass adds each parent back into
//! its children, level by level, recovering the original samples
//! exactly.
//!
//! All levels live in one flat arena (`Vec<i32>`), sliced by
//! [`Pyramid::level_offset`], rather than as independent per-level
//! allocations — one buffer for the whole tree, one bounds check per
//! access.

/// One channel's full quadtree: root, intermediate levels and leaves,
/// packed into a single arena.
#[derive(Debug, Clone)]
pub struct Pyramid {
	depth: usize,
	data: Vec<i32>,
}

impl Pyramid {
	/// Number of samples in the whole tree for a given `depth`
	/// (`side = 2^depth` at the leaves).
	pub fn tree_size(depth: usize) -> usize {
		// sum_{k=0}^{depth} 4^k = (4^(depth+1) - 1) / 3
		((1usize << (2 * (depth + 1))) - 1) / 3
	}

	/// Offset of level `level`'s first sample within the arena.
	pub fn level_offset(level: usize) -> usize {
		// sum_{k=0}^{level-1} 4^k = (4^level - 1) / 3
		((1usize << (2 * level)) - 1) / 3
	}

	/// Side length (in samples) of level `level`.
	pub fn level_side(level: usize) -> usize {
		1usize << level
	}

	/// Builds the pyramid from a row-major `side x side` grid of leaf
	/// samples, where `side = 2^depth`.
	pub fn forward(leaves: &[i32], depth: usize) -> Self {
		let side = Self::level_side(depth);
		assert_eq!(leaves.len(), side * side, "leaf buffer does not match depth");

		let mut data = vec![0i32; Self::tree_size(depth)];
		let leaf_off = Self::level_offset(depth);
		data[leaf_off..leaf_off + side * side].copy_from_slice(leaves);

		for level in (0..depth).rev() {
			let parent_side = Self::level_side(level);
			let child_side = parent_side * 2;
			let parent_off = Self::level_offset(level);
			let child_off = Self::level_offset(level + 1);

			for j in 0..parent_side {
				for i in 0..parent_side {
					let c00 = child_off + (2 * j) * child_side + 2 * i;
					let c01 = c00 + 1;
					let c10 = c00 + child_side;
					let c11 = c10 + 1;

					let sum = data[c00] + data[c01] + data[c10] + data[c11];
					let avg = round_away_from_zero_div4(sum);
					data[parent_off + j * parent_side + i] = avg;
					data[c00] -= avg;
					data[c01] -= avg;
					data[c10] -= avg;
					data[c11] -= avg;
				}
			}
		}

		Self { depth, data }
	}

	/// Inverts the transform, recovering the original row-major leaf grid.
	pub fn inverse(mut self) -> Vec<i32> {
		for level in 0..self.depth {
			let parent_side = Self::level_side(level);
			let child_side = parent_side * 2;
			let parent_off = Self::level_offset(level);
			let child_off = Self::level_offset(level + 1);

			for j in 0..parent_side {
				for i in 0..parent_side {
					let avg = self.data[parent_off + j * parent_side + i];
					let c00 = child_off + (2 * j) * child_side + 2 * i;
					let c01 = c00 + 1;
					let c10 = c00 + child_side;
					let c11 = c10 + 1;

					self.data[c00] += avg;
					self.data[c01] += avg;
					self.data[c10] += avg;
					self.data[c11] += avg;
				}
			}
		}

		let leaf_off = Self::level_offset(self.depth);
		self.data[leaf_off..].to_vec()
	}

	/// Wraps a fully-assembled arena (root plus every residual) as a
	/// pyramid, without running the transform. Used by the bit-plane
	/// decoder, which reconstructs residuals directly into arena layout.
	pub fn from_arena(depth: usize, data: Vec<i32>) -> Self {
		assert_eq!(data.len(), Self::tree_size(depth), "arena size does not match depth");
		Self { depth, data }
	}

	/// Depth of the tree (the leaves sit at level `depth`).
	pub fn depth(&self) -> usize {
		self.depth
	}

	/// The `side x side` samples of `level`, row-major.
	pub fn level(&self, level: usize) -> &[i32] {
		let side = Self::level_side(level);
		let off = Self::level_offset(level);
		&self.data[off..off + side * side]
	}

	/// The single root coefficient (level 0).
	pub fn root(&self) -> i32 {
		self.data[0]
	}

	/// The largest magnitude among every coefficient strictly below the
	/// root, i.e. every residual the bit-plane coder must transmit.
	pub fn max_abs_residual(&self) -> u32 {
		self.data[Self::level_offset(1)..]
			.iter()
			.map(|&c| c.unsigned_abs())
			.max()
			.unwrap_or(0)
	}

	/// Flat arena index of `(level, position)`, where `position` is the
	/// row-major offset within that level (as used by [`Pyramid::level`]).
	pub fn flat_index(level: usize, position: usize) -> usize {
		Self::level_offset(level) + position
	}
}

/// Rounds `sum / 4` to the nearest integer, ties broken away from zero.
fn round_away_from_zero_div4(sum: i32) -> i32 {
	let sign = sum.signum();
	(sum + sign * 2) / 4
}
