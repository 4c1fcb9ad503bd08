//! Configuration types

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Headers concatenated into the package, in declaration order
pub const DEFAULT_INPUTS: [&str; 3] = [
    "lua_maapi.h",
    "lua_special_bindings.h",
    "lua_systemapi.h",
];

/// Pointer types tolua cannot marshal, all passed through as `void*`
pub const DEFAULT_POINTER_TYPES: [&str; 5] = [
    "MAEvent*",
    "MAPoint2d*",
    "MARect*",
    "MACopyData*",
    "MAConnAddr*",
];

pub const OPAQUE_POINTER: &str = "void*";
pub const DEFAULT_PACKAGE: &str = "lua_maapi.pkg";
pub const DEFAULT_OUTPUT: &str = "lua_maapi.c";
pub const DEFAULT_TOOL: &str = "../../../tolua/bin/tolua.exe";

/// A single literal substitution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRule {
    /// Literal text to look for
    pub from: String,
    /// Replacement text
    pub to: String,
}

impl PatternRule {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Rule rewriting a typed pointer to the opaque pointer
    pub fn opaque(from: &str) -> Self {
        Self::new(from, OPAQUE_POINTER)
    }
}

/// luabind configuration
///
/// Every field falls back to its default when absent from a config file, so a
/// file only needs to name what differs from the stock MoSync binding run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory inputs, package and tool path are resolved against
    pub work_dir: PathBuf,

    /// Header files to concatenate, in order
    pub inputs: Vec<PathBuf>,

    /// Substitutions applied to every header, in order
    pub patterns: Vec<PatternRule>,

    /// Intermediate package file handed to the binding tool
    pub package: PathBuf,

    /// Source file the binding tool generates
    pub output: PathBuf,

    /// Path to the binding tool executable
    pub tool: PathBuf,

    /// Terminate each header with a newline before joining
    pub ensure_newline: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from("."),
            inputs: DEFAULT_INPUTS.iter().map(PathBuf::from).collect(),
            patterns: DEFAULT_POINTER_TYPES
                .iter()
                .map(|ty| PatternRule::opaque(ty))
                .collect(),
            package: PathBuf::from(DEFAULT_PACKAGE),
            output: PathBuf::from(DEFAULT_OUTPUT),
            tool: PathBuf::from(DEFAULT_TOOL),
            ensure_newline: false,
        }
    }
}

impl Config {
    /// Load a configuration file, picking the format from its extension
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let config: Config = match ext.as_deref() {
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?,
            _ => {
                return Err(Error::Config(format!(
                    "unsupported config format: {}",
                    path.display()
                )))
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the pipeline cannot run
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            return Err(Error::Config("no input headers configured".into()));
        }
        if let Some(rule) = self.patterns.iter().find(|r| r.from.is_empty()) {
            return Err(Error::Config(format!(
                "empty pattern (replacement {:?})",
                rule.to
            )));
        }
        Ok(())
    }

    /// Input header paths resolved against the working directory
    pub fn input_paths(&self) -> Vec<PathBuf> {
        self.inputs.iter().map(|p| self.work_dir.join(p)).collect()
    }

    /// Package path resolved against the working directory
    pub fn package_path(&self) -> PathBuf {
        self.work_dir.join(&self.package)
    }

    /// Generated source path resolved against the working directory
    pub fn output_path(&self) -> PathBuf {
        self.work_dir.join(&self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(
            config.inputs,
            vec![
                PathBuf::from("lua_maapi.h"),
                PathBuf::from("lua_special_bindings.h"),
                PathBuf::from("lua_systemapi.h"),
            ]
        );
        assert_eq!(config.patterns.len(), 5);
        assert!(config.patterns.iter().all(|r| r.to == "void*"));
        assert_eq!(config.package, PathBuf::from("lua_maapi.pkg"));
        assert_eq!(config.output, PathBuf::from("lua_maapi.c"));
        assert!(!config.ensure_newline);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_yaml_merges_defaults() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "tool: tolua").unwrap();
        writeln!(file, "ensure_newline: true").unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.tool, PathBuf::from("tolua"));
        assert!(config.ensure_newline);
        assert_eq!(config.inputs, Config::default().inputs);
        assert_eq!(config.patterns, Config::default().patterns);
    }

    #[test]
    fn test_load_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"inputs": ["a.h", "b.h"], "patterns": [{{"from": "Foo*", "to": "void*"}}]}}"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.inputs, vec![PathBuf::from("a.h"), PathBuf::from("b.h")]);
        assert_eq!(config.patterns, vec![PatternRule::opaque("Foo*")]);
        assert_eq!(config.package, PathBuf::from(DEFAULT_PACKAGE));
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_validate_rejects_empty_pattern() {
        let mut config = Config::default();
        config.patterns.push(PatternRule::new("", "void*"));
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let mut config = Config::default();
        config.inputs.clear();
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_resolved_paths() {
        let config = Config {
            work_dir: PathBuf::from("/tmp/bindings"),
            ..Config::default()
        };

        assert_eq!(config.package_path(), PathBuf::from("/tmp/bindings/lua_maapi.pkg"));
        assert_eq!(config.output_path(), PathBuf::from("/tmp/bindings/lua_maapi.c"));
        assert_eq!(
            config.input_paths()[0],
            PathBuf::from("/tmp/bindings/lua_maapi.h")
        );
    }
}
