//! Typed failures surfaced by the primality engine.
//!
//! All three kinds are detected at the boundary of the component that owns
//! the precondition and returned synchronously. None of them are transient:
//! the same input always produces the same error, so callers never retry.

use rug::Integer;

/// Errors from the Miller–Rabin engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Candidate is below 2 and cannot be tested.
    InvalidCandidate { candidate: Integer },
    /// Candidate is even and not 2. Rejected before decomposing n-1.
    EvenCandidate { candidate: Integer },
    /// Negative exponent or non-positive modulus reached the exponentiator.
    /// Indicates a malformed decomposition, i.e. a bug in the caller.
    InvalidExponentiationInput { exponent: Integer, modulus: Integer },
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidCandidate { candidate } => {
                write!(f, "candidate {} is below 2", candidate)
            }
            EngineError::EvenCandidate { candidate } => {
                write!(f, "candidate {} is even and not 2", candidate)
            }
            EngineError::InvalidExponentiationInput { exponent, modulus } => write!(
                f,
                "invalid modular exponentiation input (exponent {}, modulus {})",
                exponent, modulus
            ),
        }
    }
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_candidate() {
        let err = EngineError::EvenCandidate {
            candidate: Integer::from(10),
        };
        assert_eq!(err.to_string(), "candidate 10 is even and not 2");

        let err = EngineError::InvalidCandidate {
            candidate: Integer::from(-3),
        };
        assert_eq!(err.to_string(), "candidate -3 is below 2");
    }

    #[test]
    fn converts_into_anyhow() {
        let err: anyhow::Error = EngineError::InvalidExponentiationInput {
            exponent: Integer::from(-1),
            modulus: Integer::from(7),
        }
        .into();
        assert!(err.to_string().contains("exponent -1"));
        assert!(err.downcast_ref::<EngineError>().is_some());
    }
}
