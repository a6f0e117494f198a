//! # Engine — Miller–Rabin Orchestration
//!
//! Validates the candidate, decomposes `n - 1 = 2^k * m` once, then runs one
//! witness round per configured base in order. The first composite verdict
//! ends the run, so a `false` record is always the last in the report.
//!
//! ## Candidate policy
//!
//! `n < 2` is rejected with `InvalidCandidate`. Even `n != 2` is rejected with
//! `EvenCandidate` before decomposition, so the witness round's own even
//! check is never reached from here. `n == 2` short-circuits to a single
//! passing record without decomposing.
//!
//! ## Parallel evaluation
//!
//! `evaluate_parallel` runs rounds speculatively on the rayon pool. The
//! lowest index with a composite verdict is tracked atomically; rounds past
//! it skip their work. Results are truncated after the first composite in
//! configured order, so the report equals the sequential one.

use rayon::prelude::*;
use rug::Integer;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, warn};

use crate::config::Witnesses;
use crate::error::EngineError;
use crate::factorize::{factorize, Decomposition};
use crate::report::TestReport;
use crate::witness::test_witness;

/// Witness recorded for `n = 2` when no witnesses are configured.
const SENTINEL_WITNESS: u32 = 2;

enum Prepared {
    Two(TestReport),
    Odd(Decomposition),
}

fn prepare(n: &Integer, witnesses: &Witnesses) -> Result<Prepared, EngineError> {
    if *n < 2 {
        return Err(EngineError::InvalidCandidate {
            candidate: n.clone(),
        });
    }
    if *n == 2 {
        let mut report = TestReport::new(n.clone());
        report.push(witnesses.first().unwrap_or(SENTINEL_WITNESS), true);
        return Ok(Prepared::Two(report));
    }
    if n.is_even() {
        return Err(EngineError::EvenCandidate {
            candidate: n.clone(),
        });
    }

    let n_minus_1 = Integer::from(n - 1u32);
    let decomposition = factorize(&n_minus_1);
    debug!(
        candidate = %n,
        k = decomposition.k,
        m = %decomposition.m,
        "decomposed n-1"
    );

    if let Some(&w) = witnesses.as_slice().iter().find(|&&w| n_minus_1 <= w) {
        warn!(
            candidate = %n,
            witness = w,
            "witness is not below n-1; its round carries less information"
        );
    }

    Ok(Prepared::Odd(decomposition))
}

/// Test `n` against each witness in order, stopping at the first composite verdict.
pub fn evaluate(n: &Integer, witnesses: &Witnesses) -> Result<TestReport, EngineError> {
    let decomposition = match prepare(n, witnesses)? {
        Prepared::Two(report) => return Ok(report),
        Prepared::Odd(d) => d,
    };

    let mut report = TestReport::new(n.clone());
    for &witness in witnesses.as_slice() {
        let verdict = test_witness(n, witness, &decomposition)?;
        debug!(candidate = %n, witness, verdict, "witness round");
        if !report.push(witness, verdict) {
            break;
        }
    }
    Ok(report)
}

/// Same report as [`evaluate`], with witness rounds spread over the rayon pool.
pub fn evaluate_parallel(n: &Integer, witnesses: &Witnesses) -> Result<TestReport, EngineError> {
    let decomposition = match prepare(n, witnesses)? {
        Prepared::Two(report) => return Ok(report),
        Prepared::Odd(d) => d,
    };

    let first_composite = AtomicUsize::new(usize::MAX);
    let rounds: Vec<Option<Result<bool, EngineError>>> = witnesses
        .as_slice()
        .par_iter()
        .enumerate()
        .map(|(i, &witness)| {
            if i > first_composite.load(Ordering::Relaxed) {
                return None;
            }
            let verdict = test_witness(n, witness, &decomposition);
            debug!(candidate = %n, witness, verdict = ?verdict, "witness round");
            if let Ok(false) = verdict {
                first_composite.fetch_min(i, Ordering::Relaxed);
            }
            Some(verdict)
        })
        .collect();

    let mut report = TestReport::new(n.clone());
    for (&witness, round) in witnesses.as_slice().iter().zip(rounds) {
        // A skipped round always sits after a composite that ends the loop first.
        let verdict = match round {
            Some(verdict) => verdict?,
            None => break,
        };
        if !report.push(witness, verdict) {
            break;
        }
    }
    Ok(report)
}

/// Overall verdict only; the entry point for callers that need a yes/no answer.
pub fn is_probable_prime(n: &Integer, witnesses: &Witnesses) -> Result<bool, EngineError> {
    evaluate(n, witnesses).map(|report| report.is_probable_prime())
}
