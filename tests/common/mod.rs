//! Shared helpers for integration tests: a systematic encoder and seeded corruption

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::Rng;
use rsdecode::reed_solomon::{GaloisField, Symbol};

/// g(x) = (x - α^0)(x - α^1)...(x - α^(npar-1)), highest degree first
pub fn generator<F: GaloisField>(field: &F, npar: usize) -> Vec<u16> {
    let mut g = vec![1u16];
    for i in 0..npar {
        let root = field.to_exp(i);
        let mut next = vec![0u16; g.len() + 1];
        for (j, &c) in g.iter().enumerate() {
            next[j] ^= c;
            next[j + 1] ^= field.mul(c, root);
        }
        g = next;
    }
    g
}

/// Systematic codeword: `message` followed by `npar` parity symbols
pub fn encode<F: GaloisField>(field: &F, message: &[F::Symbol], npar: usize) -> Vec<F::Symbol> {
    let g = generator(field, npar);
    let mut parity = vec![0u16; npar];

    for &m in message {
        let value: u16 = m.into();
        let feedback = value ^ parity.first().copied().unwrap_or(0);
        parity.rotate_left(1);
        if let Some(last) = parity.last_mut() {
            *last = 0;
        }
        if feedback != 0 {
            for (p, &c) in parity.iter_mut().zip(&g[1..]) {
                *p ^= field.mul(feedback, c);
            }
        }
    }

    let mut codeword = message.to_vec();
    codeword.extend(parity.into_iter().map(F::Symbol::from_element));
    codeword
}

/// Random codeword of `length` symbols carrying `npar` parity symbols
pub fn random_codeword<F: GaloisField>(
    field: &F,
    rng: &mut StdRng,
    length: usize,
    npar: usize,
) -> Vec<F::Symbol> {
    let message: Vec<F::Symbol> = (0..length - npar)
        .map(|_| F::Symbol::from_element(rng.random_range(0..=field.max() as u16)))
        .collect();
    encode(field, &message, npar)
}

/// XOR a nonzero value into `count` distinct symbols; returns the offsets, sorted
pub fn corrupt<F: GaloisField>(
    field: &F,
    rng: &mut StdRng,
    data: &mut [F::Symbol],
    count: usize,
) -> Vec<usize> {
    let mut offsets = sample(rng, data.len(), count).into_vec();
    offsets.sort_unstable();
    for &offset in &offsets {
        let flip = rng.random_range(1..=field.max() as u16);
        let value: u16 = data[offset].into();
        data[offset] = F::Symbol::from_element(value ^ flip);
    }
    offsets
}
