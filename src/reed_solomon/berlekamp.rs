//! Error locator and evaluator polynomials via modified Berlekamp-Massey
//!
//! ## Overview
//!
//! Given the syndromes `S[0..npar]` of a damaged block, find the shortest
//! polynomial σ(z) with σ\[0\] = 1 whose coefficients generate the syndrome
//! sequence. Its degree is the number of symbol errors and the inverses of its
//! roots are their locators. The evaluator ω(z) = σ(z)·S(z) mod z^(npar/2 + 1)
//! is produced alongside it for the magnitude computation.
//!
//! Two candidates are carried through the iteration: `cur`, the running
//! locator, and `prev`, the locator as it stood at the last length change,
//! divided by that step's discrepancy and pre-multiplied by z once per step.

use super::error::Uncorrectable;
use super::galois::GaloisField;
use log::trace;
use smallvec::{smallvec, SmallVec};

/// Polynomial coefficients, lowest degree first
pub type Poly = SmallVec<[u16; 32]>;

/// Locator σ(z) and evaluator ω(z) for one damaged block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLocator {
    /// σ\[0..=degree\], σ\[0\] = 1 and σ\[degree\] != 0
    pub sigma: Poly,
    /// Low-order `npar / 2 + 1` coefficients of σ·S
    pub omega: Poly,
}

impl ErrorLocator {
    /// Run Berlekamp-Massey on `syn` and derive ω from the result.
    pub fn solve<F: GaloisField + ?Sized>(field: &F, syn: &[u16]) -> Result<Self, Uncorrectable> {
        let sigma = berlekamp_massey(field, syn)?;
        let omega = evaluator(field, &sigma, syn);
        Ok(Self { sigma, omega })
    }

    /// Number of errors the locator describes
    pub fn degree(&self) -> usize {
        self.sigma.len() - 1
    }
}

/// Compute the error locator σ(z) from the syndromes.
///
/// Fails when the final locator has a zero leading coefficient or a degree
/// outside `1..=npar / 2`.
pub fn berlekamp_massey<F: GaloisField + ?Sized>(
    field: &F,
    syn: &[u16],
) -> Result<Poly, Uncorrectable> {
    let npar = syn.len();
    if npar == 0 {
        return Err(Uncorrectable::DegenerateLocator);
    }
    let mut prev: Poly = smallvec![0; npar + 1];
    let mut cur: Poly = smallvec![0; npar + 1];
    let mut next: Poly = smallvec![0; npar + 1];

    prev[1] = 1;
    cur[0] = 1;
    let mut deg_prev = 1usize;
    let mut deg_cur = 0usize;
    let mut last_gap = -1isize;

    for n in 0..npar {
        let mut d = syn[n];
        for i in 1..=deg_cur {
            d ^= field.mul(cur[i], syn[n - i]);
        }

        if d != 0 {
            let log_d = field.to_log(d);
            for i in 0..=npar {
                next[i] = cur[i] ^ field.mul_exp(prev[i], log_d);
            }

            let gap = n as isize - last_gap;
            if gap > deg_cur as isize {
                for i in 0..=npar {
                    prev[i] = field.div_exp(cur[i], log_d);
                }
                last_gap = n as isize - deg_cur as isize;
                deg_cur = gap as usize;
                deg_prev = deg_cur;
            }

            std::mem::swap(&mut cur, &mut next);
        }

        // prev := z * prev; coefficients past npar can no longer reach cur
        let top = (deg_prev + 1).min(npar);
        for i in (1..=top).rev() {
            prev[i] = prev[i - 1];
        }
        prev[0] = 0;
        deg_prev += 1;
    }

    trace!("berlekamp-massey: degree {} over {} syndromes", deg_cur, npar);

    if deg_cur == 0 || cur[deg_cur] == 0 {
        return Err(Uncorrectable::DegenerateLocator);
    }
    let capacity = npar / 2;
    if deg_cur > capacity {
        return Err(Uncorrectable::CapacityExceeded {
            degree: deg_cur,
            capacity,
        });
    }

    cur.truncate(deg_cur + 1);
    Ok(cur)
}

/// ω(z) = σ(z)·S(z), keeping the low `npar / 2 + 1` coefficients.
pub fn evaluator<F: GaloisField + ?Sized>(field: &F, sigma: &[u16], syn: &[u16]) -> Poly {
    let len = syn.len() / 2 + 1;
    let mut omega: Poly = smallvec![0; len];

    for (i, w) in omega.iter_mut().enumerate() {
        let mut acc = 0u16;
        for (j, &s) in sigma.iter().enumerate().take(i + 1) {
            if let Some(&y) = syn.get(i - j) {
                acc ^= field.mul(s, y);
            }
        }
        *w = acc;
    }

    omega
}
