//! # Modpow — Square-and-Multiply Modular Exponentiation
//!
//! Computes `base^exponent mod modulus` on arbitrary-precision integers.
//! Every intermediate value is reduced modulo `modulus`, so operands never
//! grow beyond twice the modulus width regardless of exponent size.
//!
//! ## Algorithm
//!
//! Right-to-left binary exponentiation: reduce the base, then walk the
//! exponent from its low bit. A set bit multiplies the running result by the
//! current base power; every step squares the base power and halves the
//! exponent. O(log exponent) modular multiplications.

use rug::ops::RemRounding;
use rug::Integer;

use crate::error::EngineError;

/// Compute `base^exponent mod modulus`, result in `[0, modulus - 1]`.
///
/// `base` may be negative; it is reduced with a Euclidean remainder first.
/// Returns `InvalidExponentiationInput` for a negative exponent or a modulus
/// below 1.
pub fn power(base: &Integer, exponent: &Integer, modulus: &Integer) -> Result<Integer, EngineError> {
    if *exponent < 0 || *modulus < 1 {
        return Err(EngineError::InvalidExponentiationInput {
            exponent: exponent.clone(),
            modulus: modulus.clone(),
        });
    }

    let mut result = Integer::from(1u32).rem_euc(modulus);
    let mut base_power = base.clone().rem_euc(modulus);
    let mut exp = exponent.clone();

    while exp > 0 {
        if exp.is_odd() {
            result *= &base_power;
            result = result.rem_euc(modulus);
        }
        base_power.square_mut();
        base_power = base_power.rem_euc(modulus);
        exp >>= 1u32;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rug::ops::Pow;

    fn int(v: i64) -> Integer {
        Integer::from(v)
    }

    #[test]
    fn small_known_values() {
        assert_eq!(power(&int(2), &int(10), &int(1000)).unwrap(), 24);
        assert_eq!(power(&int(3), &int(4), &int(5)).unwrap(), 1);
        assert_eq!(power(&int(4), &int(13), &int(497)).unwrap(), 445);
        assert_eq!(power(&int(7), &int(1), &int(13)).unwrap(), 7);
    }

    #[test]
    fn zero_exponent_is_one() {
        assert_eq!(power(&int(12345), &int(0), &int(17)).unwrap(), 1);
        assert_eq!(power(&int(0), &int(0), &int(17)).unwrap(), 1);
    }

    #[test]
    fn modulus_one_is_zero() {
        assert_eq!(power(&int(5), &int(3), &int(1)).unwrap(), 0);
        assert_eq!(power(&int(5), &int(0), &int(1)).unwrap(), 0);
    }

    #[test]
    fn base_larger_than_modulus_is_reduced() {
        // 1000 ≡ 6 (mod 13), 6^2 = 36 ≡ 10
        assert_eq!(power(&int(1000), &int(2), &int(13)).unwrap(), 10);
    }

    #[test]
    fn negative_base_gives_non_negative_result() {
        // -2 ≡ 5 (mod 7), 5^3 = 125 ≡ 6
        assert_eq!(power(&int(-2), &int(3), &int(7)).unwrap(), 6);
    }

    #[test]
    fn negative_exponent_rejected() {
        let err = power(&int(2), &int(-1), &int(7)).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidExponentiationInput {
                exponent: int(-1),
                modulus: int(7),
            }
        );
    }

    #[test]
    fn non_positive_modulus_rejected() {
        assert!(power(&int(2), &int(3), &int(0)).is_err());
        assert!(power(&int(2), &int(3), &int(-5)).is_err());
    }

    #[test]
    fn fermat_on_mersenne_127() {
        // M127 is prime, so 3^(M127 - 1) ≡ 1 (mod M127)
        let m127 = Integer::from(2u32).pow(127u32) - 1u32;
        let exp = Integer::from(&m127 - 1u32);
        assert_eq!(power(&int(3), &exp, &m127).unwrap(), 1);
    }

    #[test]
    fn matches_gmp_on_wide_operands() {
        let modulus = Integer::from(10u32).pow(60u32) + 7u32;
        let base = Integer::from(2u32).pow(300u32) + 12345u32;
        let exp = Integer::from(3u32).pow(150u32);
        let expected = base.clone().pow_mod(&exp, &modulus).unwrap();
        assert_eq!(power(&base, &exp, &modulus).unwrap(), expected);
    }
}
