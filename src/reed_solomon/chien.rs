//! Chien search for the roots of the error locator
//!
//! ## Overview
//!
//! σ(z) = (1 + X₁z)(1 + X₂z)…(1 + X_dz), so a locator `X = α^i` of an error
//! at position `i` shows up as σ(α^-i) = 0. Only positions inside the block
//! are searched; a locator with fewer than `d` roots there is uncorrectable.
//!
//! σ\[1\] is the sum of all `d` locators. Each root found is XORed out of a
//! running copy of σ\[1\], so once `d - 1` roots are known the remainder is the
//! last one and the search stops early.
//!
//! ## Paths
//!
//! - **Generic**: any field, any coefficients. Keeps `σ[j]·α^(-i·j)` per term
//!   and divides by `α^j` at every step.
//! - **Fast**: GF(2^16) with every σ\[j\] nonzero. Tracks the terms as running
//!   logs, counting `i` down from the block length, and advances them in
//!   bursts that stop before any log can run off the doubled antilog table.
//!   Degrees 2, 3 and 4 get dedicated burst loops.
//!
//! Both paths search the same range and return the same set of positions.

use super::berlekamp::Poly;
use super::error::Uncorrectable;
use super::galois::{GaloisField, GF16_LIMIT};
use log::trace;
use smallvec::{smallvec, SmallVec};

/// Error locators `α^i` found by the search
pub type Positions = SmallVec<[u16; 32]>;

/// Highest running log a fast-path burst may reach
const FAST_LIMIT: usize = 0x11000;

/// Find the `degree` error locators of σ inside a block of `length` symbols.
///
/// Picks the fast path when the field is GF(2^16) and no coefficient of σ is
/// zero, the generic path otherwise.
pub fn chien_search<F: GaloisField + ?Sized>(
    field: &F,
    length: usize,
    sigma: &[u16],
) -> Result<Positions, Uncorrectable> {
    let fast = field.max() == GF16_LIMIT && sigma.iter().skip(1).all(|&c| c != 0);
    trace!(
        "chien search: degree {}, length {}, {} path",
        sigma.len().saturating_sub(1),
        length,
        if fast { "fast" } else { "generic" }
    );

    if fast {
        chien_search_fast(field, length, sigma)
    } else {
        chien_search_generic(field, length, sigma)
    }
}

/// Chien search over any field.
pub fn chien_search_generic<F: GaloisField + ?Sized>(
    field: &F,
    length: usize,
    sigma: &[u16],
) -> Result<Positions, Uncorrectable> {
    let degree = locator_degree(sigma)?;
    let mut last = sigma[1];
    let mut positions = Positions::new();
    if degree == 1 {
        return accept_last(field, length, positions, last);
    }

    let mut sg = Poly::from_slice(sigma);
    for i in 0..length {
        let wk = sg[1..].iter().fold(1u16, |acc, &c| acc ^ c);
        for (j, c) in sg.iter_mut().enumerate().skip(1) {
            *c = field.div_exp(*c, j);
        }

        if wk == 0 {
            let pv = field.to_exp(i);
            last ^= pv;
            positions.push(pv);
            if positions.len() == degree - 1 {
                return accept_last(field, length, positions, last);
            }
        }
    }

    Err(Uncorrectable::RootsNotFound {
        found: positions.len(),
        expected: degree,
    })
}

/// Chien search specialized for GF(2^16) locators without zero coefficients.
///
/// Debug builds assert both preconditions; use [`chien_search`] to have them
/// checked and the generic path chosen otherwise.
pub fn chien_search_fast<F: GaloisField + ?Sized>(
    field: &F,
    length: usize,
    sigma: &[u16],
) -> Result<Positions, Uncorrectable> {
    let degree = locator_degree(sigma)?;
    debug_assert_eq!(field.max(), GF16_LIMIT, "fast chien search needs GF(2^16)");
    debug_assert!(
        sigma.iter().all(|&c| c != 0),
        "fast chien search needs nonzero coefficients"
    );

    let mut last = sigma[1];
    let mut positions = Positions::new();
    if degree == 1 {
        return accept_last(field, length, positions, last);
    }

    let max = field.max();
    let exp = field.exp_table();

    // sg[j] = log(σ[j]) - j * length, the log of σ[j]·α^(-j·i) with i = length
    let mut sg: SmallVec<[usize; 32]> = smallvec![0; degree + 1];
    for j in 1..=degree {
        sg[j] = fold(field.to_log(sigma[j]) + max - (j * length) % max);
    }

    let mut i = length;
    while i > 0 {
        let mut cnt = i;
        for j in 1..=degree {
            sg[j] = fold(sg[j]);
            cnt = cnt.min(FAST_LIMIT.saturating_sub(sg[j]) / j);
        }

        i -= chien_burst(&mut sg, exp, cnt, degree);

        let wk = sg[1..].iter().fold(1u16, |acc, &e| acc ^ exp[e]);
        if wk == 0 {
            let pv = exp[i];
            last ^= pv;
            positions.push(pv);
            if positions.len() == degree - 1 {
                return accept_last(field, length, positions, last);
            }
        }
    }

    Err(Uncorrectable::RootsNotFound {
        found: positions.len(),
        expected: degree,
    })
}

fn locator_degree(sigma: &[u16]) -> Result<usize, Uncorrectable> {
    match sigma.len() {
        0 | 1 => Err(Uncorrectable::DegenerateLocator),
        len => Ok(len - 1),
    }
}

/// Accept the remaining root: nonzero, inside the block, not already found.
fn accept_last<F: GaloisField + ?Sized>(
    field: &F,
    length: usize,
    mut positions: Positions,
    last: u16,
) -> Result<Positions, Uncorrectable> {
    let log = field.to_log(last);
    if last == 0 || log >= length {
        return Err(Uncorrectable::RootOutOfRange { log, length });
    }
    if positions.contains(&last) {
        return Err(Uncorrectable::RepeatedRoot);
    }
    positions.push(last);
    Ok(positions)
}

/// Reduce a running log modulo 0xFFFF without dividing.
#[inline]
fn fold(e: usize) -> usize {
    (e & 0xFFFF) + (e >> 16)
}

/// Advance every running log by its degree until σ evaluates to zero or
/// `cnt` steps are done. Always takes at least one step; returns the count.
#[inline]
fn chien_burst(sg: &mut [usize], exp: &[u16], cnt: usize, degree: usize) -> usize {
    let mut steps = 0;
    match degree {
        2 => {
            let (mut s1, mut s2) = (sg[1], sg[2]);
            loop {
                s1 += 1;
                s2 += 2;
                steps += 1;
                if steps >= cnt || (exp[s1] ^ exp[s2]) == 1 {
                    break;
                }
            }
            sg[1] = s1;
            sg[2] = s2;
        }
        3 => {
            let (mut s1, mut s2, mut s3) = (sg[1], sg[2], sg[3]);
            loop {
                s1 += 1;
                s2 += 2;
                s3 += 3;
                steps += 1;
                if steps >= cnt || (exp[s1] ^ exp[s2] ^ exp[s3]) == 1 {
                    break;
                }
            }
            sg[1] = s1;
            sg[2] = s2;
            sg[3] = s3;
        }
        4 => {
            let (mut s1, mut s2, mut s3, mut s4) = (sg[1], sg[2], sg[3], sg[4]);
            loop {
                s1 += 1;
                s2 += 2;
                s3 += 3;
                s4 += 4;
                steps += 1;
                if steps >= cnt || (exp[s1] ^ exp[s2] ^ exp[s3] ^ exp[s4]) == 1 {
                    break;
                }
            }
            sg[1] = s1;
            sg[2] = s2;
            sg[3] = s3;
            sg[4] = s4;
        }
        _ => loop {
            let mut acc = 0u16;
            for (j, e) in sg.iter_mut().enumerate().skip(1) {
                *e += j;
                acc ^= exp[*e];
            }
            steps += 1;
            if steps >= cnt || acc == 1 {
                break;
            }
        },
    }
    steps
}
