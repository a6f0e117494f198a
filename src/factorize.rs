//! Decomposition of an even integer into `2^k * m` with `m` odd.

use rug::Integer;

/// `value = 2^k * m`, `m` odd. For `value = n - 1` with odd `n > 2`, `k >= 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition {
    pub k: u32,
    pub m: Integer,
}

impl Decomposition {
    /// Rebuild `2^k * m`.
    pub fn reconstruct(&self) -> Integer {
        Integer::from(&self.m << self.k)
    }
}

/// Halve `value` until the quotient is odd, counting the halvings.
///
/// `value` must be even and positive; the engine only ever passes `n - 1`
/// for an odd candidate `n > 2`.
pub fn factorize(value: &Integer) -> Decomposition {
    debug_assert!(*value > 0 && value.is_even());

    let mut m = value.clone();
    let mut k = 0u32;
    while m.is_even() {
        m >>= 1u32;
        k += 1;
    }
    Decomposition { k, m }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rug::ops::Pow;

    fn decompose(v: u64) -> (u32, u64) {
        let d = factorize(&Integer::from(v));
        (d.k, d.m.to_u64().unwrap())
    }

    #[test]
    fn known_decompositions() {
        assert_eq!(decompose(6), (1, 3)); // n = 7
        assert_eq!(decompose(12), (2, 3)); // n = 13
        assert_eq!(decompose(220), (2, 55)); // n = 221
        assert_eq!(decompose(560), (4, 35)); // n = 561
        assert_eq!(decompose(2), (1, 1)); // n = 3
    }

    #[test]
    fn pure_power_of_two() {
        assert_eq!(decompose(1 << 20), (20, 1));
    }

    #[test]
    fn wide_value() {
        // 2^200 * 3^40
        let m = Integer::from(3u32).pow(40u32);
        let value = Integer::from(&m << 200u32);
        let d = factorize(&value);
        assert_eq!(d.k, 200);
        assert_eq!(d.m, m);
        assert_eq!(d.reconstruct(), value);
    }
}
