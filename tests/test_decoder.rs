//! Integration tests for the block decoder against real codewords

mod common;

use common::{corrupt, encode, random_codeword};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rsdecode::reed_solomon::symbols_to_le_bytes;
use rsdecode::{DecodeError, RsDecode16, RsDecode8, SymbolError, Uncorrectable};

#[test]
fn test_clean_codeword_untouched() {
    let decoder = RsDecode8::with_parity(4);
    let mut codeword = encode(decoder.field(), &[1, 2, 3, 4, 5, 6], 4);
    let original = codeword.clone();

    assert_eq!(decoder.decode(&mut codeword, false), Ok(0));
    assert_eq!(codeword, original);
}

#[test]
fn test_two_flips_in_ten_symbols() {
    let decoder = RsDecode8::with_parity(4);
    let original = encode(decoder.field(), &[0x10, 0x20, 0x30, 0x40, 0x50, 0x60], 4);
    assert_eq!(original.len(), 10);

    let mut damaged = original.clone();
    damaged[2] ^= 0x5C;
    damaged[7] ^= 0x01;

    assert_eq!(
        decoder.find_errors(&damaged),
        Ok(vec![
            SymbolError {
                offset: 2,
                magnitude: 0x5C
            },
            SymbolError {
                offset: 7,
                magnitude: 0x01
            },
        ])
    );
    assert_eq!(decoder.decode(&mut damaged, false), Ok(2));
    assert_eq!(damaged, original);
}

#[test]
fn test_no_correct_reports_without_writing() {
    let decoder = RsDecode8::with_parity(6);
    let mut rng = StdRng::seed_from_u64(7);
    let mut codeword = random_codeword(decoder.field(), &mut rng, 50, 6);
    corrupt(decoder.field(), &mut rng, &mut codeword, 3);
    let damaged = codeword.clone();

    assert_eq!(decoder.decode(&mut codeword, true), Ok(3));
    assert_eq!(codeword, damaged);
    assert_eq!(decoder.check(&codeword), Ok(3));
}

#[test]
fn test_decode_is_idempotent() {
    let decoder = RsDecode16::with_parity(8);
    let mut rng = StdRng::seed_from_u64(11);
    let original = random_codeword(decoder.field(), &mut rng, 1000, 8);
    let mut codeword = original.clone();
    corrupt(decoder.field(), &mut rng, &mut codeword, 4);

    assert_eq!(decoder.decode(&mut codeword, false), Ok(4));
    assert_eq!(decoder.decode(&mut codeword, false), Ok(0));
    assert_eq!(codeword, original);
}

#[test]
fn test_length_equal_to_npar() {
    let decoder = RsDecode8::with_parity(4);
    let original = encode(decoder.field(), &[], 4);
    assert_eq!(original, vec![0u8; 4]);

    let mut damaged = original.clone();
    damaged[1] = 0xAB;
    damaged[3] = 0x01;
    assert_eq!(decoder.decode(&mut damaged, false), Ok(2));
    assert_eq!(damaged, original);
}

#[test]
fn test_full_length_gf8_codeword() {
    let decoder = RsDecode8::with_parity(16);
    let mut rng = StdRng::seed_from_u64(255);
    let original = random_codeword(decoder.field(), &mut rng, 255, 16);
    let mut codeword = original.clone();
    codeword[0] ^= 0x80;
    codeword[254] ^= 0x01;
    corrupt(decoder.field(), &mut rng, &mut codeword[1..254], 6);

    assert_eq!(decoder.decode(&mut codeword, false), Ok(8));
    assert_eq!(codeword, original);
}

#[test]
fn test_errors_in_parity_region() {
    let decoder = RsDecode16::with_parity(6);
    let mut rng = StdRng::seed_from_u64(3);
    let original = random_codeword(decoder.field(), &mut rng, 300, 6);
    let mut codeword = original.clone();
    codeword[294] ^= 0xFFFF;
    codeword[299] ^= 0x0100;

    assert_eq!(decoder.decode(&mut codeword, false), Ok(2));
    assert_eq!(codeword, original);
}

#[test]
fn test_capacity_exactly_reached() {
    let decoder = RsDecode16::with_parity(10);
    let mut rng = StdRng::seed_from_u64(99);
    let original = random_codeword(decoder.field(), &mut rng, 4000, 10);
    let mut codeword = original.clone();
    corrupt(decoder.field(), &mut rng, &mut codeword, 5);

    assert_eq!(decoder.decode(&mut codeword, false), Ok(5));
    assert_eq!(codeword, original);
}

#[test]
fn test_invalid_lengths_fail_before_decoding() {
    let decoder = RsDecode8::with_parity(8);
    let mut short = vec![1u8; 7];
    assert_eq!(
        decoder.decode(&mut short, false),
        Err(DecodeError::InvalidLength {
            length: 7,
            npar: 8,
            max: 255
        })
    );
    assert_eq!(short, vec![1u8; 7]);
}

#[test]
fn test_decode_bytes_matches_symbol_decode() {
    let decoder = RsDecode16::with_parity(4);
    let mut rng = StdRng::seed_from_u64(21);
    let original = random_codeword(decoder.field(), &mut rng, 64, 4);
    let mut symbols = original.clone();
    corrupt(decoder.field(), &mut rng, &mut symbols, 2);

    let mut bytes = vec![0u8; symbols.len() * 2];
    symbols_to_le_bytes(&symbols, &mut bytes);
    let mut expected = vec![0u8; original.len() * 2];
    symbols_to_le_bytes(&original, &mut expected);

    assert_eq!(decoder.decode_bytes(&mut bytes, false), Ok(2));
    assert_eq!(bytes, expected);
}

#[test]
fn test_beyond_capacity_never_partial() {
    let decoder = RsDecode8::with_parity(4);
    let mut rng = StdRng::seed_from_u64(5);
    let original = random_codeword(decoder.field(), &mut rng, 200, 4);

    for _ in 0..50 {
        let mut codeword = original.clone();
        corrupt(decoder.field(), &mut rng, &mut codeword, 6);
        let damaged = codeword.clone();

        match decoder.decode(&mut codeword, false) {
            Err(DecodeError::Uncorrectable(_)) => assert_eq!(codeword, damaged),
            Ok(count) => {
                // Miscorrection onto another codeword is allowed, a half-applied fix is not
                assert!(count <= decoder.capacity());
                assert_eq!(decoder.check(&codeword), Ok(0));
            }
            Err(other) => panic!("unexpected error {other}"),
        }
    }
}

#[test]
fn test_uncorrectable_reason_exposed() {
    let decoder = RsDecode8::with_parity(2);
    let mut data = vec![0u8; 10];
    data[8] = 1;
    data[9] = 1;

    let err = decoder.decode(&mut data, false).unwrap_err();
    assert!(err.is_uncorrectable());
    assert_eq!(
        err,
        DecodeError::Uncorrectable(Uncorrectable::CapacityExceeded {
            degree: 2,
            capacity: 1
        })
    );
}
