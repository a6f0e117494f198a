//! # primewitness — Miller–Rabin Probable-Prime Engine
//!
//! Tests a candidate integer against a fixed, ordered sequence of witness
//! bases and reports, per witness, whether the candidate was proven
//! composite. Components, leaf first:
//!
//! - [`modpow`]: square-and-multiply `base^exponent mod modulus`.
//! - [`factorize`]: `n - 1 = 2^k * m` with `m` odd.
//! - [`witness`]: one Miller–Rabin round for a single base.
//! - [`engine`]: validation, decomposition, the ordered witness loop with
//!   early exit, and the rayon-backed variant.
//! - [`report`]: per-witness records, overall verdict, text and JSON output.
//! - [`config`]: witness sequences and TOML settings.
//!
//! All arithmetic runs on `rug::Integer`. The engine is a pure function of
//! `(candidate, witnesses)`: no state survives a call.
//!
//! ```
//! use primewitness::{evaluate, Witnesses};
//! use rug::Integer;
//!
//! let report = evaluate(&Integer::from(221), &Witnesses::default()).unwrap();
//! assert!(!report.is_probable_prime());
//! assert_eq!(report.records.len(), 1);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod factorize;
pub mod modpow;
pub mod report;
pub mod witness;

pub use config::{Config, OutputFormat, Witnesses, DEFAULT_WITNESSES};
pub use engine::{evaluate, evaluate_parallel, is_probable_prime};
pub use error::EngineError;
pub use report::{TestRecord, TestReport};
