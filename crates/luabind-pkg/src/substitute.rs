//! Pointer Type Substitution
//!
//! Rewrites typed pointer spellings that tolua cannot marshal into the opaque
//! `void*` so the generated bindings treat them as untyped handles.

use std::fs;
use std::path::Path;
use tracing::debug;

use luabind_core::{Config, Error, PatternRule, Result};

/// Ordered table of literal substitutions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternTable {
    rules: Vec<PatternRule>,
}

impl PatternTable {
    /// Create a table from explicit rules
    pub fn new(rules: Vec<PatternRule>) -> Result<Self> {
        let mut table = Self { rules: Vec::new() };
        for rule in rules {
            table.push(rule)?;
        }
        Ok(table)
    }

    /// Create the table a configuration describes
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.patterns.clone())
    }

    /// Append a rule, applied after all existing ones
    pub fn push(&mut self, rule: PatternRule) -> Result<()> {
        if rule.from.is_empty() {
            return Err(Error::Config(format!(
                "empty pattern (replacement {:?})",
                rule.to
            )));
        }
        self.rules.push(rule);
        Ok(())
    }

    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    /// Check whether `token` is the source side of some rule
    pub fn covers(&self, token: &str) -> bool {
        self.rules.iter().any(|r| r.from == token)
    }

    /// Apply every rule to the whole text
    pub fn apply(&self, text: &str) -> String {
        self.apply_counted(text).0
    }

    /// Apply every rule and report how many replacements were made
    ///
    /// Each rule runs once over the output of the previous one, replacing
    /// non-overlapping occurrences left to right.
    pub fn apply_counted(&self, text: &str) -> (String, usize) {
        let mut out = text.to_string();
        let mut total = 0;

        for rule in &self.rules {
            let hits = out.matches(rule.from.as_str()).count();
            if hits > 0 {
                out = out.replace(rule.from.as_str(), &rule.to);
                total += hits;
            }
        }

        (out, total)
    }
}

impl Default for PatternTable {
    fn default() -> Self {
        Self {
            rules: Config::default().patterns,
        }
    }
}

/// A header after substitution
#[derive(Debug, Clone)]
pub struct TransformedHeader {
    /// Substituted text
    pub text: String,
    /// Number of replacements made
    pub substitutions: usize,
}

/// Read a header and apply the pattern table to its contents
pub fn read_transformed(path: &Path, table: &PatternTable) -> Result<TransformedHeader> {
    let source = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let (text, substitutions) = table.apply_counted(&source);
    debug!(
        "Read {:?}: {} bytes, {} substitutions",
        path,
        source.len(),
        substitutions
    );

    Ok(TransformedHeader {
        text,
        substitutions,
    })
}
