//! Error magnitudes via Forney's algorithm
//!
//! For a locator `X` found by the Chien search the error value is
//!
//! ```text
//! E = X · ω(X⁻¹) / σ'(X⁻¹)
//! ```
//!
//! In characteristic 2 the formal derivative keeps only the odd terms of σ:
//! σ'(z) = σ₁ + σ₃z² + σ₅z⁴ + …

use super::galois::GaloisField;

/// Value to XOR into the symbol at locator `position`.
///
/// `position` must be a simple root of σ inside the block, as returned by the
/// Chien search. A repeated root makes σ' vanish there and the division panics.
pub fn forney<F: GaloisField + ?Sized>(
    field: &F,
    position: u16,
    sigma: &[u16],
    omega: &[u16],
) -> u16 {
    let degree = sigma.len() - 1;
    let max = field.max();
    let zlog = max - field.to_log(position);

    // ω(z) = ω0 + ω1 z + ... + ω(d-1) z^(d-1)
    let mut ov = omega[0];
    for j in 1..degree {
        ov ^= field.mul_exp(omega[j], (zlog * j) % max);
    }

    // σ'(z) = σ1 + σ3 z^2 + σ5 z^4 + ...
    let mut dv = sigma[1];
    for j in (2..degree).step_by(2) {
        dv ^= field.mul_exp(sigma[j + 1], (zlog * j) % max);
    }

    debug_assert_ne!(dv, 0, "locator derivative vanishes at a found root");
    field.mul(position, field.div(ov, dv))
}
