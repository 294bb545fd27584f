use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

/// Interpret a trit sequence as a balanced-ternary positional numeral.
///
/// Index 0 is least significant: digit `i` carries weight 3^i. A 243-trit
/// hash exceeds the native 64-bit range by a wide margin, so the result is
/// arbitrary precision. Total over any finite input.
pub fn value_from_trits(trits: &[i8]) -> BigInt {
    let mut value = BigInt::zero();
    for &trit in trits.iter().rev() {
        value = value * 3 + trit;
    }
    value
}

/// Encode a signed integer as balanced-ternary trits.
///
/// Repeated division by three with balanced rounding: a remainder of 2
/// becomes -1 with a carry into the truncated quotient. Negative inputs are
/// encoded by negating the trits of the absolute value. The result is the
/// minimal encoding, padded with trailing zero trits to `min_len`; callers
/// that need a fixed width must pass it explicitly.
pub fn trits_from_value(value: &BigInt, min_len: usize) -> Vec<i8> {
    let three = BigInt::from(3);
    let mut abs = value.abs();
    let mut trits = Vec::new();

    while !abs.is_zero() {
        let mut quotient = &abs / &three;
        let mut remainder = (&abs % &three).to_i8().unwrap_or(0);
        if remainder > 1 {
            remainder -= 3;
            quotient += 1;
        }
        trits.push(remainder);
        abs = quotient;
    }

    if value.is_negative() {
        for trit in &mut trits {
            *trit = -*trit;
        }
    }

    if trits.len() < min_len {
        trits.resize(min_len, 0);
    }
    trits
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn big(v: i64) -> BigInt {
        BigInt::from(v)
    }

    #[test]
    fn zero_is_empty_before_padding() {
        assert_eq!(trits_from_value(&big(0), 0), Vec::<i8>::new());
        assert_eq!(trits_from_value(&big(0), 3), vec![0, 0, 0]);
    }

    #[test]
    fn known_encodings() {
        assert_eq!(trits_from_value(&big(1), 0), vec![1]);
        assert_eq!(trits_from_value(&big(-1), 0), vec![-1]);
        assert_eq!(trits_from_value(&big(2), 0), vec![-1, 1]);
        assert_eq!(trits_from_value(&big(5), 0), vec![-1, -1, 1]);
        assert_eq!(trits_from_value(&big(13), 0), vec![1, 1, 1]);
        assert_eq!(trits_from_value(&big(-13), 0), vec![-1, -1, -1]);
    }

    #[test]
    fn value_of_known_trits() {
        assert_eq!(value_from_trits(&[1, 1, 1]), big(13));
        assert_eq!(value_from_trits(&[-1, -1, -1]), big(-13));
        assert_eq!(value_from_trits(&[1, 0, 0, 1, 1, 1]), big(352));
        assert_eq!(value_from_trits(&[]), big(0));
    }

    #[test]
    fn trailing_zeros_do_not_change_value() {
        assert_eq!(value_from_trits(&[1, 1, 1, 0, 0, 0]), big(13));
    }

    #[test]
    fn exceeds_native_range() {
        // 3^81 does not fit in an i128, let alone an i64.
        let trits: Vec<i8> = std::iter::repeat(0)
            .take(81)
            .chain(std::iter::once(1))
            .collect();
        let value = value_from_trits(&trits);
        assert_eq!(value, BigInt::from(3).pow(81));
        assert_eq!(trits_from_value(&value, 0), trits);
    }

    proptest! {
        #[test]
        fn numeral_round_trip(v in any::<i64>(), pad in 0usize..50) {
            let value = BigInt::from(v);
            let trits = trits_from_value(&value, pad);
            prop_assert_eq!(value_from_trits(&trits), value);
        }

        #[test]
        fn padding_reaches_min_len(v in any::<i32>(), min_len in 0usize..100) {
            let trits = trits_from_value(&BigInt::from(v), min_len);
            prop_assert!(trits.len() >= min_len);
        }

        #[test]
        fn all_trits_balanced(v in any::<i64>()) {
            for trit in trits_from_value(&BigInt::from(v), 81) {
                prop_assert!((-1..=1).contains(&trit));
            }
        }
    }
}
