use super::*;
use crate::code::BinaryMatrix;

use proptest::prelude::*;

// ---- Binary matrix format ----

#[test]
fn three_by_three_matrix_packs_into_two_bytes() {
    let m = BinaryMatrix::from_rows(&[&[1, 1, 1], &[0, 0, 0], &[1, 0, 1]]).unwrap();
    let bytes = matrix_to_bytes(&m);
    // 9 bits -> 2 bytes: 11100010 1_______
    assert_eq!(bytes, vec![0b1110_0010, 0b1000_0000]);
    assert_eq!(bytes_to_matrix(&bytes, 3, 3).unwrap(), m);
}

#[test]
fn matrix_decode_rejects_short_buffers() {
    assert!(matches!(
        bytes_to_matrix(&[0xFF], 3, 3),
        Err(crate::Error::Length { .. })
    ));
}

#[test]
fn matrix_decode_ignores_padding_bits() {
    // Same 9 leading bits, different padding
    let a = bytes_to_matrix(&[0b1010_1010, 0b1000_0000], 3, 3).unwrap();
    let b = bytes_to_matrix(&[0b1010_1010, 0b1111_1111], 3, 3).unwrap();
    assert_eq!(a, b);
}

// ---- Fixed-width coefficient format ----

#[test]
fn coefficients_one_two_three_pack_into_one_byte() {
    let bytes = compress_coefficients(&[1, 2, 3], 4).unwrap();
    assert_eq!(bytes, vec![0b0001_1011]);
    assert_eq!(decompress_coefficients(&bytes, 4, 3).unwrap(), vec![1, 2, 3]);
}

#[test]
fn compress_rejects_out_of_range_coefficients() {
    assert!(compress_coefficients(&[4], 4).is_err());
    assert!(compress_coefficients(&[-1], 4).is_err());
    assert!(compress_coefficients(&[0], 1).is_err());
}

#[test]
fn decompress_rejects_short_buffers() {
    assert!(matches!(
        decompress_coefficients(&[0x00], 2048, 3),
        Err(crate::Error::Length { .. })
    ));
}

#[test]
fn non_power_of_two_range_uses_ceil_log2() {
    // n = 5 needs 3 bits per coefficient
    let bytes = compress_coefficients(&[4, 0, 4], 5).unwrap();
    assert_eq!(bytes.len(), 2); // 9 bits
    assert_eq!(decompress_coefficients(&bytes, 5, 3).unwrap(), vec![4, 0, 4]);
}

// ---- Textual format ----

#[test]
fn textual_format_round_trips_signed_coefficients() {
    let coeffs = vec![-1024, -1, 0, 1, 70_000];
    let encoded = coeffs_to_base64(&coeffs, false).unwrap();
    assert!(encoded.is_ascii());
    assert_eq!(base64_to_coeffs(&encoded, false).unwrap(), coeffs);
}

#[test]
fn compressed_textual_format_round_trips() {
    let coeffs: Vec<i64> = (0..512).map(|i| (i * 37) % 2048).collect();
    let encoded = coeffs_to_base64(&coeffs, true).unwrap();
    assert_eq!(base64_to_coeffs(&encoded, true).unwrap(), coeffs);
}

#[test]
fn textual_decode_rejects_garbage() {
    assert!(base64_to_coeffs("not@base64!", false).is_err());
    let not_numbers = coeffs_to_base64(&[1], false).unwrap();
    // Valid base64 of "1" parses; valid base64 of junk must not
    assert!(base64_to_coeffs(&not_numbers, true).is_err()); // wrong compression flag
}

// ---- Ternary codec ----

#[test]
fn ternary_round_trips_printable_ascii() {
    let digits = string_to_ternary("Hello, world!", 100).unwrap();
    assert_eq!(digits.len(), 100);
    assert_eq!(ternary_to_string(&digits).unwrap(), "Hello, world!");
}

#[test]
fn each_character_takes_exactly_five_digits() {
    // 'A' = 65 = 2*27 + 1*9 + 2 -> [0, 2, 1, 0, 2]
    let digits = string_to_ternary("A", 10).unwrap();
    assert_eq!(&digits[..5], &[0, 2, 1, 0, 2]);
    // terminator 3 -> [0, 0, 0, 1, 0]
    assert_eq!(&digits[5..10], &[0, 0, 0, 1, 0]);
}

#[test]
fn ternary_capacity_is_enforced() {
    // "ab" needs (2 + 1) * 5 = 15 digits
    assert!(string_to_ternary("ab", 14).is_err());
    assert!(string_to_ternary("ab", 15).is_ok());
}

#[test]
fn non_ascii_input_is_rejected() {
    assert!(string_to_ternary("héllo", 100).is_err());
}

#[test]
fn decode_length_must_be_a_multiple_of_five() {
    assert!(matches!(
        ternary_to_string(&[0, 0, 0, 1]),
        Err(crate::Error::Length { .. })
    ));
}

#[test]
fn decode_rejects_invalid_digits_and_missing_terminator() {
    assert!(ternary_to_string(&[0, 0, 0, 0, 4]).is_err());
    // All padding, no terminator chunk
    assert!(ternary_to_string(&[0; 10]).is_err());
}

// ---- Property-based round trips ----

proptest! {
    #[test]
    fn matrix_bytes_round_trip(
        (rows, cols, bits) in (1usize..6, 1usize..6)
            .prop_flat_map(|(r, c)| {
                (Just(r), Just(c), prop::collection::vec(0u8..2, r * c))
            })
    ) {
        let mut m = BinaryMatrix::zeros(rows, cols);
        for (i, &bit) in bits.iter().enumerate() {
            m.set(i / cols, i % cols, bit);
        }
        let bytes = matrix_to_bytes(&m);
        prop_assert_eq!(bytes.len(), (rows * cols).div_ceil(8));
        prop_assert_eq!(bytes_to_matrix(&bytes, rows, cols).unwrap(), m);
    }

    #[test]
    fn coefficient_bytes_round_trip(
        (n, coeffs) in (2i64..5000)
            .prop_flat_map(|n| (Just(n), prop::collection::vec(0..n, 0..64)))
    ) {
        let bytes = compress_coefficients(&coeffs, n).unwrap();
        prop_assert_eq!(
            decompress_coefficients(&bytes, n, coeffs.len()).unwrap(),
            coeffs
        );
    }

    #[test]
    fn textual_round_trip_any_coefficients(
        coeffs in prop::collection::vec(any::<i32>().prop_map(i64::from), 1..64),
        compress in any::<bool>()
    ) {
        let encoded = coeffs_to_base64(&coeffs, compress).unwrap();
        prop_assert_eq!(base64_to_coeffs(&encoded, compress).unwrap(), coeffs);
    }
}
