//! Reed-Solomon block decoder
//!
//! ## Overview
//!
//! [`RsDecoder`] checks and repairs one codeword at a time:
//!
//! ```text
//! symbols → syndromes → Berlekamp-Massey → Chien search → Forney → XOR in place
//! ```
//!
//! The decoder holds only its parity count and a field handle. All
//! polynomials live in per-call scratch, so one decoder can serve any number
//! of threads at once.
//!
//! A block is corrected only after every error position has been found and
//! validated; on any failure the buffer is left exactly as it was.

use super::berlekamp::{ErrorLocator, Poly};
use super::chien::{chien_search, Positions};
use super::error::{DecodeError, DecodeResult};
use super::forney::forney;
use super::galois::{GaloisField, Gf16, Gf8, Symbol};
use log::debug;
use smallvec::smallvec;

/// Decoder over 8-bit symbols
pub type RsDecode8 = RsDecoder<Gf8>;

/// Decoder over 16-bit symbols
pub type RsDecode16 = RsDecoder<Gf16>;

/// One corrupted symbol: where it is and what was XORed into it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolError {
    /// Index of the symbol in the block
    pub offset: usize,
    /// Error value; XOR it into the symbol to repair it
    pub magnitude: u16,
}

/// Located errors of one block, ready to be applied
struct ErrorPlan {
    locator: ErrorLocator,
    positions: Positions,
}

impl ErrorPlan {
    fn count(&self) -> usize {
        self.positions.len()
    }

    fn errors<'a, F: GaloisField + ?Sized>(
        &'a self,
        field: &'a F,
        length: usize,
    ) -> impl Iterator<Item = SymbolError> + 'a {
        self.positions.iter().map(move |&position| SymbolError {
            offset: field.to_pos(length, position),
            magnitude: forney(field, position, &self.locator.sigma, &self.locator.omega),
        })
    }
}

/// Reed-Solomon decoder for codewords carrying `npar` parity symbols
#[derive(Debug, Clone)]
pub struct RsDecoder<F: GaloisField> {
    npar: usize,
    field: F,
}

impl<F: GaloisField + Default> RsDecoder<F> {
    /// Decoder over the field's shared tables
    pub fn with_parity(npar: usize) -> Self {
        Self::new(npar, F::default())
    }
}

impl<F: GaloisField> RsDecoder<F> {
    pub fn new(npar: usize, field: F) -> Self {
        Self { npar, field }
    }

    /// Parity symbols per codeword
    pub fn npar(&self) -> usize {
        self.npar
    }

    /// Most symbol errors a codeword can have and still be repaired
    pub fn capacity(&self) -> usize {
        self.npar / 2
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    /// Detect and, unless `no_correct` is set, repair errors in `data`.
    ///
    /// Returns the number of corrupted symbols (0 for a clean block). With
    /// `no_correct` the block is only checked and never modified.
    pub fn decode(&self, data: &mut [F::Symbol], no_correct: bool) -> DecodeResult<usize> {
        let plan = match self.locate(data)? {
            Some(plan) => plan,
            None => return Ok(0),
        };

        if !no_correct {
            let length = data.len();
            for error in plan.errors(&self.field, length) {
                let symbol = &mut data[error.offset];
                let value: u16 = (*symbol).into();
                *symbol = F::Symbol::from_element(value ^ error.magnitude);
            }
            debug!("corrected {} symbols in {}-symbol block", plan.count(), length);
        }

        Ok(plan.count())
    }

    /// Count the corrupted symbols in `data` without repairing them.
    pub fn check(&self, data: &[F::Symbol]) -> DecodeResult<usize> {
        Ok(self.locate(data)?.map_or(0, |plan| plan.count()))
    }

    /// List the corrupted symbols of `data` with their error values.
    pub fn find_errors(&self, data: &[F::Symbol]) -> DecodeResult<Vec<SymbolError>> {
        Ok(match self.locate(data)? {
            Some(plan) => {
                let mut errors: Vec<SymbolError> = plan.errors(&self.field, data.len()).collect();
                errors.sort_unstable_by_key(|e| e.offset);
                errors
            }
            None => Vec::new(),
        })
    }

    fn validate_length(&self, length: usize) -> DecodeResult<()> {
        if length < self.npar || length > self.field.max() {
            return Err(DecodeError::InvalidLength {
                length,
                npar: self.npar,
                max: self.field.max(),
            });
        }
        Ok(())
    }

    /// Locate the errors of a block; `None` when the syndromes are clean.
    fn locate(&self, data: &[F::Symbol]) -> DecodeResult<Option<ErrorPlan>> {
        self.validate_length(data.len())?;

        let mut syn: Poly = smallvec![0; self.npar];
        if self.field.syndromes(data, &mut syn) {
            return Ok(None);
        }

        let locator = ErrorLocator::solve(&self.field, &syn).inspect_err(|reason| {
            debug!("locator failed for {}-symbol block: {}", data.len(), reason);
        })?;
        let positions = chien_search(&self.field, data.len(), &locator.sigma).inspect_err(
            |reason| {
                debug!(
                    "root search failed for {}-symbol block, degree {}: {}",
                    data.len(),
                    locator.degree(),
                    reason
                );
            },
        )?;

        Ok(Some(ErrorPlan { locator, positions }))
    }
}

impl RsDecoder<Gf16> {
    /// Decode a byte buffer holding little-endian 16-bit symbols.
    ///
    /// Fails with [`DecodeError::OddByteLength`] before touching anything when
    /// `data` is not a whole number of symbols.
    pub fn decode_bytes(&self, data: &mut [u8], no_correct: bool) -> DecodeResult<usize> {
        if data.len() % 2 != 0 {
            return Err(DecodeError::OddByteLength(data.len()));
        }

        if cfg!(target_endian = "little") {
            if let Ok(symbols) = bytemuck::try_cast_slice_mut::<u8, u16>(data) {
                return self.decode(symbols, no_correct);
            }
        }

        let mut symbols = symbols_from_le_bytes(data)?;
        let count = self.decode(&mut symbols, no_correct)?;
        if count > 0 && !no_correct {
            symbols_to_le_bytes(&symbols, data);
        }
        Ok(count)
    }
}

/// Read little-endian 16-bit symbols from a byte buffer.
pub fn symbols_from_le_bytes(data: &[u8]) -> DecodeResult<Vec<u16>> {
    if data.len() % 2 != 0 {
        return Err(DecodeError::OddByteLength(data.len()));
    }
    Ok(data
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}

/// Write 16-bit symbols back as little-endian bytes; `out` must hold `2 * symbols.len()` bytes.
pub fn symbols_to_le_bytes(symbols: &[u16], out: &mut [u8]) {
    for (pair, &symbol) in out.chunks_exact_mut(2).zip(symbols) {
        pair.copy_from_slice(&symbol.to_le_bytes());
    }
}
