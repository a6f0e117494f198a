//! # Config — Witness Sequences and TOML Settings
//!
//! The witness sequence is the only knob the engine takes. It is an ordered,
//! duplicate-free list of bases, each at least 2. The default `[2, 3, 4, 5]`
//! is a fixed demonstration set: fine for coursework-sized inputs, not a
//! substitute for randomized bases or a deterministic proof.
//!
//! The harness can also read a TOML file. Every key is optional:
//!
//! ```toml
//! witnesses = [2, 3, 4, 5]
//! parallel = false
//! format = "text"   # or "json"
//! ```

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Witnesses used when nothing else is configured.
pub const DEFAULT_WITNESSES: [u32; 4] = [2, 3, 4, 5];

/// Ordered, duplicate-free witness sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Witnesses(Vec<u32>);

impl Witnesses {
    pub fn new(witnesses: Vec<u32>) -> Result<Self> {
        for (i, &w) in witnesses.iter().enumerate() {
            if w < 2 {
                bail!("witness {} is below 2", w);
            }
            if witnesses[..i].contains(&w) {
                bail!("witness {} is listed more than once", w);
            }
        }
        Ok(Witnesses(witnesses))
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn first(&self) -> Option<u32> {
        self.0.first().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Witnesses {
    fn default() -> Self {
        Witnesses(DEFAULT_WITNESSES.to_vec())
    }
}

/// Parses comma-separated witnesses and inclusive ranges: `"2,3,4,5"`, `"2..=5"`, `"2..=5,7"`.
impl FromStr for Witnesses {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut witnesses = Vec::new();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            if let Some((lo, hi)) = part.split_once("..=") {
                let lo: u32 = lo
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid range start in '{}'", part))?;
                let hi: u32 = hi
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid range end in '{}'", part))?;
                if lo > hi {
                    bail!("empty witness range '{}'", part);
                }
                witnesses.extend(lo..=hi);
            } else {
                let w: u32 = part
                    .parse()
                    .with_context(|| format!("invalid witness '{}'", part))?;
                witnesses.push(w);
            }
        }
        Witnesses::new(witnesses)
    }
}

impl std::fmt::Display for Witnesses {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|w| w.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

/// How the harness prints reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(anyhow!("unknown output format '{}' (expected text or json)", other)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Settings read from a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub witnesses: Option<Vec<u32>>,
    #[serde(default)]
    pub parallel: bool,
    #[serde(default)]
    pub format: OutputFormat,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)?;
        config.witnesses()?;
        Ok(config)
    }

    /// Configured witnesses, or the default sequence when the key is absent.
    pub fn witnesses(&self) -> Result<Witnesses> {
        match &self.witnesses {
            Some(list) => Witnesses::new(list.clone()),
            None => Ok(Witnesses::default()),
        }
    }
}
