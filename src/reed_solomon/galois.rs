//! Galois Field GF(2^8) and GF(2^16) arithmetic for Reed-Solomon decoding
//!
//! ## Generator Polynomials
//!
//! - **GF(2^16)**: 0x1100B (x¹⁶ + x¹² + x³ + x + 1) - 16-bit symbols
//! - **GF(2^8)**: 0x11D (x⁸ + x⁴ + x³ + x² + 1) - 8-bit symbols
//!
//! ## Tables
//!
//! Each field keeps a log table and a *doubled* antilog table: `antilog[k]`
//! equals `antilog[k % LIMIT]` for every `k < 2 * COUNT`. Sums of two logs
//! therefore index the table directly, and the fast Chien search can run its
//! exponents past `LIMIT` before folding them back.
//!
//! Tables are built once per field on first use and shared read-only.

use std::sync::OnceLock;

/// GF(2^16) generator polynomial: 0x1100B (x¹⁶ + x¹² + x³ + x + 1)
pub const GF16_GENERATOR: u32 = 0x1100B;

/// GF(2^8) generator polynomial: 0x11D (x⁸ + x⁴ + x³ + x² + 1)
pub const GF8_GENERATOR: u32 = 0x11D;

/// Largest discrete log + 1 of GF(2^16)
pub const GF16_LIMIT: usize = 0xFFFF;

/// Largest discrete log + 1 of GF(2^8)
pub const GF8_LIMIT: usize = 0xFF;

/// Galois Field lookup tables for fast arithmetic
pub struct GaloisTable<const BITS: usize, const GENERATOR: u32> {
    pub log: Vec<u16>,
    pub antilog: Vec<u16>,
}

impl<const BITS: usize, const GENERATOR: u32> Default for GaloisTable<BITS, GENERATOR> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const BITS: usize, const GENERATOR: u32> GaloisTable<BITS, GENERATOR> {
    const COUNT: usize = 1 << BITS;
    const LIMIT: usize = Self::COUNT - 1;

    pub fn new() -> Self {
        let mut table = GaloisTable {
            log: vec![0; Self::COUNT],
            antilog: vec![0; 2 * Self::COUNT],
        };
        table.build_tables();
        table
    }

    fn build_tables(&mut self) {
        let mut b = 1u32;

        for l in 0..Self::LIMIT {
            self.log[b as usize] = l as u16;
            self.antilog[l] = b as u16;

            b <<= 1;
            if b & Self::COUNT as u32 != 0 {
                b ^= GENERATOR;
            }
        }

        for l in Self::LIMIT..self.antilog.len() {
            self.antilog[l] = self.antilog[l - Self::LIMIT];
        }

        // Zero has no logarithm; LIMIT is out of range for every block length.
        self.log[0] = Self::LIMIT as u16;
    }
}

/// A code symbol stored in a data buffer: one byte or one 16-bit word.
pub trait Symbol: Copy + Into<u16> + Send + Sync + 'static {
    /// Narrow a field element back to the symbol width.
    fn from_element(value: u16) -> Self;
}

impl Symbol for u8 {
    #[inline]
    fn from_element(value: u16) -> Self {
        value as u8
    }
}

impl Symbol for u16 {
    #[inline]
    fn from_element(value: u16) -> Self {
        value
    }
}

/// Field arithmetic the decoder is written against.
///
/// Implementors supply the tables; every operation is derived from them.
/// Field elements are carried as `u16` regardless of the field width.
pub trait GaloisField: Send + Sync {
    /// Symbol type of data buffers over this field
    type Symbol: Symbol;

    /// Field size minus one (the multiplicative group order)
    fn max(&self) -> usize;

    /// Discrete log table, indexed by field element
    fn log_table(&self) -> &[u16];

    /// Doubled antilog table, indexed by exponent
    fn exp_table(&self) -> &[u16];

    /// Discrete log of a nonzero element
    #[inline]
    fn to_log(&self, x: u16) -> usize {
        self.log_table()[x as usize] as usize
    }

    /// Antilog of an exponent
    #[inline]
    fn to_exp(&self, log: usize) -> u16 {
        self.exp_table()[log % self.max()]
    }

    #[inline]
    fn mul(&self, a: u16, b: u16) -> u16 {
        if a == 0 || b == 0 {
            return 0;
        }
        self.exp_table()[self.to_log(a) + self.to_log(b)]
    }

    #[inline]
    fn div(&self, a: u16, b: u16) -> u16 {
        if b == 0 {
            panic!("Division by zero in Galois field");
        }
        if a == 0 {
            return 0;
        }
        self.exp_table()[self.to_log(a) + self.max() - self.to_log(b)]
    }

    /// `a * α^log`
    #[inline]
    fn mul_exp(&self, a: u16, log: usize) -> u16 {
        if a == 0 {
            return 0;
        }
        self.exp_table()[self.to_log(a) + log % self.max()]
    }

    /// `a / α^log`
    #[inline]
    fn div_exp(&self, a: u16, log: usize) -> u16 {
        if a == 0 {
            return 0;
        }
        self.exp_table()[self.to_log(a) + self.max() - log % self.max()]
    }

    /// Compute `syn[i] = Σ data[k] · α^(i · (len - 1 - k))` for every entry of `syn`.
    ///
    /// Returns `true` when all syndromes are zero. The caller guarantees
    /// `syn.len() <= self.max()`.
    fn syndromes(&self, data: &[Self::Symbol], syn: &mut [u16]) -> bool {
        let log = self.log_table();
        let exp = self.exp_table();
        let mut has_error = 0u16;

        for (i, s) in syn.iter_mut().enumerate() {
            let mut wk = 0u16;
            for &symbol in data {
                let shifted = if wk == 0 {
                    0
                } else {
                    exp[log[wk as usize] as usize + i]
                };
                let value: u16 = symbol.into();
                wk = value ^ shifted;
            }
            *s = wk;
            has_error |= wk;
        }

        has_error == 0
    }

    /// Buffer index of the symbol whose locator is `position`.
    ///
    /// The first symbol of a block carries the highest power, so locator
    /// `α^p` addresses index `length - 1 - p`.
    #[inline]
    fn to_pos(&self, length: usize, position: u16) -> usize {
        length - 1 - self.to_log(position)
    }
}

macro_rules! binary_field {
    ($(#[$meta:meta])* $name:ident, $symbol:ty, $bits:expr, $generator:expr, $limit:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy)]
        pub struct $name {
            table: &'static GaloisTable<{ $bits }, { $generator }>,
        }

        impl $name {
            /// Field handle backed by the shared tables
            pub fn new() -> Self {
                static TABLE: OnceLock<GaloisTable<{ $bits }, { $generator }>> = OnceLock::new();
                Self {
                    table: TABLE.get_or_init(GaloisTable::new),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("generator", &format_args!("{:#x}", $generator))
                    .finish()
            }
        }

        impl GaloisField for $name {
            type Symbol = $symbol;

            #[inline]
            fn max(&self) -> usize {
                $limit
            }

            #[inline]
            fn log_table(&self) -> &[u16] {
                &self.table.log
            }

            #[inline]
            fn exp_table(&self) -> &[u16] {
                &self.table.antilog
            }
        }
    };
}

binary_field!(
    /// GF(2^8) over 0x11D, 8-bit symbols
    Gf8,
    u8,
    8,
    GF8_GENERATOR,
    GF8_LIMIT
);

binary_field!(
    /// GF(2^16) over 0x1100B, 16-bit symbols
    Gf16,
    u16,
    16,
    GF16_GENERATOR,
    GF16_LIMIT
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gf16_log_antilog_inverse() {
        let gf = Gf16::new();
        for x in [1u16, 2, 3, 0x1234, 0x8000, 0xFFFF] {
            assert_eq!(gf.to_exp(gf.to_log(x)), x);
        }
        assert_eq!(gf.to_exp(0), 1);
        assert_eq!(gf.to_exp(1), 2);
    }

    #[test]
    fn test_doubled_antilog_table() {
        let gf = Gf16::new();
        let exp = gf.exp_table();
        assert_eq!(exp.len(), 2 * 65536);
        assert_eq!(exp[GF16_LIMIT], 1);
        assert_eq!(exp[GF16_LIMIT + 5], exp[5]);
        assert_eq!(exp[0x11000], exp[0x11000 - GF16_LIMIT]);
    }

    #[test]
    fn test_gf8_known_products() {
        let gf = Gf8::new();
        // 0x80 * 2 wraps through the generator: 0x100 ^ 0x11D = 0x1D
        assert_eq!(gf.mul(0x80, 2), 0x1D);
        assert_eq!(gf.mul(0, 0x53), 0);
        assert_eq!(gf.mul(1, 0x53), 0x53);
    }

    #[test]
    fn test_gf8_division_consistency() {
        let gf = Gf8::new();
        for a in 0..=255u16 {
            for b in 1..=255u16 {
                assert_eq!(gf.mul(gf.div(a, b), b), a, "a = {a}, b = {b}");
            }
        }
    }

    #[test]
    fn test_mul_exp_and_div_exp() {
        let gf = Gf16::new();
        let a = 0x4321;
        for log in [0usize, 1, 17, 0xFFFE, 0xFFFF, 0x1_2345] {
            let scaled = gf.mul_exp(a, log);
            assert_eq!(scaled, gf.mul(a, gf.to_exp(log)));
            assert_eq!(gf.div_exp(scaled, log), a);
        }
        assert_eq!(gf.mul_exp(0, 5), 0);
        assert_eq!(gf.div_exp(0, 5), 0);
    }

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn test_division_by_zero_panics() {
        let gf = Gf8::new();
        gf.div(5, 0);
    }

    #[test]
    fn test_syndromes_single_symbol() {
        let gf = Gf8::new();
        // A lone nonzero symbol at index k has S_i = v * α^(i * (len - 1 - k))
        let mut data = [0u8; 6];
        data[2] = 0x37;
        let mut syn = [0u16; 4];
        assert!(!gf.syndromes(&data, &mut syn));
        for (i, &s) in syn.iter().enumerate() {
            assert_eq!(s, gf.mul_exp(0x37, i * 3));
        }
    }

    #[test]
    fn test_syndromes_zero_block() {
        let gf = Gf16::new();
        let data = [0u16; 10];
        let mut syn = [0xAAAAu16; 4];
        assert!(gf.syndromes(&data, &mut syn));
        assert_eq!(syn, [0; 4]);
    }

    #[test]
    fn test_to_pos_reverses_index() {
        let gf = Gf8::new();
        assert_eq!(gf.to_pos(10, 1), 9);
        assert_eq!(gf.to_pos(10, gf.to_exp(9)), 0);
        assert_eq!(gf.to_pos(10, gf.to_exp(4)), 5);
    }
}
