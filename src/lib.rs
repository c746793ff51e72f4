#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `lqt` is a lossless image codec built around a pyramidal quadtree
//! decomposition with bit-plane coding: a reversible integer
//! multiresolution transform, Hilbert-curve reordering per level, and an
//! MSB-first significance/refinement bit-plane coder laid over a
//! variable-length-integer bitstream.
//!
//! This crate is a thin facade over [`lqt_internal`]; the algorithms
//! themselves live in `lqt_types`. See [`prelude`] for the commonly used
//! entry points (`image::encode`/`image::decode`, `ppm::read`/`ppm::write`).

pub use lqt_internal::*;
