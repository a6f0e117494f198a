//! Per-witness records and the aggregated report returned by the engine.
//!
//! A report is ordered by configured witness order. If any record carries a
//! `false` verdict it is the last one, since the engine stops at the first
//! composite verdict.

use rug::Integer;

/// Outcome of one witness round. `verdict` means "not proven composite".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestRecord {
    pub witness: u32,
    pub verdict: bool,
}

impl TestRecord {
    fn label(&self) -> &'static str {
        if self.verdict {
            "Provavelmente primo"
        } else {
            "Composto"
        }
    }
}

/// Ordered witness records for one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestReport {
    pub candidate: Integer,
    pub records: Vec<TestRecord>,
}

impl TestReport {
    pub fn new(candidate: Integer) -> Self {
        TestReport {
            candidate,
            records: Vec::new(),
        }
    }

    /// Append a record; returns the verdict so callers can break on `false`.
    pub fn push(&mut self, witness: u32, verdict: bool) -> bool {
        self.records.push(TestRecord { witness, verdict });
        verdict
    }

    /// Overall verdict: composite iff the last record is composite.
    /// An empty report (no witnesses configured) is vacuously probable prime.
    pub fn is_probable_prime(&self) -> bool {
        self.records.last().map_or(true, |r| r.verdict)
    }

    /// Witness that proved the candidate composite, if any.
    pub fn composite_witness(&self) -> Option<u32> {
        self.records
            .last()
            .filter(|r| !r.verdict)
            .map(|r| r.witness)
    }

    /// Machine-readable form for `--format json`.
    pub fn to_json(&self) -> serde_json::Value {
        let records: Vec<serde_json::Value> = self
            .records
            .iter()
            .map(|r| serde_json::json!({"witness": r.witness, "verdict": r.verdict}))
            .collect();
        serde_json::json!({
            "candidate": self.candidate.to_string(),
            "records": records,
            "probable_prime": self.is_probable_prime(),
        })
    }
}

impl std::fmt::Display for TestReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for record in &self.records {
            writeln!(f, "Teste a={} -> {}", record.witness, record.label())?;
        }
        let summary = if self.is_probable_prime() {
            "provavelmente primo"
        } else {
            "composto"
        };
        write!(f, "Resultado final: {} é {}", self.candidate, summary)
    }
}
