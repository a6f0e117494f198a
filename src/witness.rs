//! # Witness — One Miller–Rabin Round
//!
//! Given odd `n` with `n - 1 = 2^k * m`, a base `a` is a witness to the
//! compositeness of `n` unless
//!
//! - `a^m ≡ 1 (mod n)`, or
//! - `a^(2^i * m) ≡ -1 (mod n)` for some `0 <= i < k`.
//!
//! A prime always passes, so a `false` verdict is a proof of compositeness.
//! A composite passes for at most 1/4 of the bases coprime to `n`.
//!
//! ## References
//!
//! - Gary L. Miller, "Riemann's Hypothesis and Tests for Primality",
//!   J. Computer and System Sciences, 13(3):300–317, 1976.
//! - Michael O. Rabin, "Probabilistic Algorithm for Testing Primality",
//!   J. Number Theory, 12(1):128–138, 1980.

use rug::ops::RemRounding;
use rug::Integer;
use tracing::debug;

use crate::error::EngineError;
use crate::factorize::Decomposition;
use crate::modpow::power;

/// Run one round for `witness` against `n`, with `decomposition` of `n - 1`.
///
/// Returns `true` when `n` is not proven composite by this base.
/// A witness that is a multiple of `n` says nothing about `n` and passes.
pub fn test_witness(
    n: &Integer,
    witness: u32,
    decomposition: &Decomposition,
) -> Result<bool, EngineError> {
    if *n == 2 {
        return Ok(true);
    }
    // Unreachable through the engine, which rejects even candidates up front.
    if n.is_even() {
        return Ok(false);
    }

    let base = Integer::from(witness);
    if base.is_divisible(n) {
        debug!(witness, "witness is a multiple of the candidate, skipping");
        return Ok(true);
    }

    let n_minus_1 = Integer::from(n - 1u32);
    let mut x = power(&base, &decomposition.m, n)?;

    if x == 1 || x == n_minus_1 {
        return Ok(true);
    }

    for _ in 1..decomposition.k {
        x.square_mut();
        x = x.rem_euc(n);
        if x == n_minus_1 {
            return Ok(true);
        }
    }

    Ok(false)
}
