//! Package Writer
//!
//! Joins transformed headers into the single package file tolua reads.

use std::fs;
use std::path::Path;
use tracing::debug;

use luabind_core::{Error, Result};

/// Join headers in order
///
/// With `ensure_newline`, every part is emitted as whole lines: a part that
/// does not already end in a newline gets one, and an empty part becomes a
/// blank line. Otherwise parts are joined exactly.
pub fn concatenate<S: AsRef<str>>(parts: &[S], ensure_newline: bool) -> String {
    let capacity = parts.iter().map(|p| p.as_ref().len() + 1).sum();
    let mut out = String::with_capacity(capacity);

    for part in parts {
        let part = part.as_ref();
        out.push_str(part);
        if ensure_newline && !part.ends_with('\n') {
            out.push('\n');
        }
    }

    out
}

/// Write the package, replacing any previous contents
pub fn write_package(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Wrote {} bytes to {:?}", contents.len(), path);
    Ok(())
}
