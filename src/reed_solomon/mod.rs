//! Reed-Solomon Error Correction Module
//!
//! This module provides syndrome-based Reed-Solomon decoding for blocks of
//! 8-bit symbols over GF(2^8) and 16-bit symbols over GF(2^16).
//!
//! - [`galois`]: field tables and the [`GaloisField`] capability
//! - [`berlekamp`]: error locator σ(z) and evaluator ω(z)
//! - [`chien`]: roots of σ(z), generic and fast GF(2^16) paths
//! - [`forney`]: error magnitudes
//! - [`decoder`]: the block decoder tying them together

pub mod berlekamp;
pub mod chien;
pub mod decoder;
pub mod error;
pub mod forney;
pub mod galois;

pub use berlekamp::{berlekamp_massey, ErrorLocator, Poly};
pub use chien::{chien_search, chien_search_fast, chien_search_generic, Positions};
pub use decoder::*;
pub use error::{DecodeError, DecodeResult, Uncorrectable};
pub use forney::forney;
pub use galois::*;
