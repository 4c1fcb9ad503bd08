//! Pointer type scanner
//!
//! Finds MoSync typed pointers (`MAEvent*`, `MAHandle*`, ...) that the pattern
//! table leaves alone, so new API types can be added to the table before
//! tolua chokes on them. Spaced spellings (`MAEvent *e`) are always reported,
//! since the table only rewrites the exact glued form.

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::substitute::PatternTable;

/// An uncovered pointer type occurrence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointerUse {
    /// Pointer spelling as written, including any space and the `*`
    pub spelling: String,
    /// 1-based line number
    pub line: usize,
}

/// Scanner for `MA<Ident>*` and `MA<Ident> *` spellings
pub struct PointerScanner {
    pattern: Regex,
}

impl PointerScanner {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"\bMA\w+[ \t]*\*").expect("valid pointer pattern"),
        }
    }

    /// Report pointer spellings the table does not rewrite
    pub fn scan(&self, text: &str, table: &PatternTable) -> Vec<PointerUse> {
        let mut uses = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            for m in self.pattern.find_iter(line) {
                if !table.covers(m.as_str()) {
                    uses.push(PointerUse {
                        spelling: m.as_str().to_string(),
                        line: idx + 1,
                    });
                }
            }
        }

        uses
    }
}

impl Default for PointerScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Scan `text` with a fresh scanner
pub fn scan_pointer_types(text: &str, table: &PatternTable) -> Vec<PointerUse> {
    PointerScanner::new().scan(text, table)
}

/// Distinct spellings, sorted
pub fn distinct_spellings(uses: &[PointerUse]) -> Vec<&str> {
    uses.iter()
        .map(|u| u.spelling.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
