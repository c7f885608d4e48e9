use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use filters::PatternConfig;

use crate::{ConfigError, Invocation, LineClassifier};

/// Program spawned when the configuration does not name one.
pub const DEFAULT_RSYNC_PROGRAM: &str = "rsync";

/// Explicit configuration for classification and runs.
///
/// ```json
/// {
///   "patterns": { "junk": ["^created directory "] },
///   "rsync": "/usr/local/bin/rsync",
///   "base_dir": "/srv/mirror"
/// }
/// ```
///
/// Every field is optional; an empty object yields the defaults.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SieveConfig {
    /// Additions to (or replacements for) the built-in filter groups.
    pub patterns: PatternConfig,
    /// Program to spawn instead of [`DEFAULT_RSYNC_PROGRAM`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsync: Option<PathBuf>,
    /// Working directory for spawned runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<PathBuf>,
}

impl SieveConfig {
    /// Loads a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it does not match the schema.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        tracing::debug!(
            target: logging::Subsystem::Run.target(),
            path = %path.display(),
            "loaded configuration"
        );
        Ok(config)
    }

    /// Parses a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `text` does not match the schema.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|source| ConfigError::Parse { source })
    }

    /// Compiles the configured filter groups.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Pattern`] naming the first invalid pattern.
    pub fn classifier(&self) -> Result<LineClassifier, ConfigError> {
        Ok(LineClassifier::from_config(&self.patterns)?)
    }

    /// Program that runs will spawn.
    #[must_use]
    pub fn program(&self) -> &Path {
        self.rsync
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_RSYNC_PROGRAM))
    }

    /// Builds an invocation of the configured program with `args` verbatim.
    #[must_use]
    pub fn invocation<I, S>(&self, args: I) -> Invocation
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut invocation = Invocation::new(self.program()).args(args);
        if let Some(dir) = &self.base_dir {
            invocation = invocation.current_dir(dir);
        }
        invocation
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::FilterGroup;

    #[test]
    fn empty_object_is_default() {
        let config = SieveConfig::from_json("{}").unwrap();
        assert_eq!(config, SieveConfig::default());
        assert_eq!(config.program(), Path::new("rsync"));
    }

    #[test]
    fn full_document() {
        let config = SieveConfig::from_json(
            r#"{
                "patterns": {
                    "excluded": ["^skipping "],
                    "stats": [{ "label": "Number of deleted files" }]
                },
                "rsync": "/opt/rsync/bin/rsync",
                "base_dir": "/srv"
            }"#,
        )
        .unwrap();
        assert_eq!(config.patterns.excluded, ["^skipping "]);
        assert_eq!(config.program(), Path::new("/opt/rsync/bin/rsync"));

        let invocation = config.invocation(["-a", "src/", "dst/"]);
        assert_eq!(invocation.program(), Path::new("/opt/rsync/bin/rsync"));
        assert_eq!(invocation.arguments().len(), 3);
        assert_eq!(invocation.working_dir(), Some(Path::new("/srv")));

        let classifier = config.classifier().unwrap();
        assert_eq!(classifier.filters().pattern_count(FilterGroup::Excluded), 2);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = SieveConfig::from_json(r#"{ "rsync_path": "x" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn invalid_pattern_is_reported_with_its_text() {
        let config = SieveConfig::from_json(r#"{ "patterns": { "junk": ["(unclosed"] } }"#)
            .unwrap();
        let err = config.classifier().unwrap_err();
        assert!(matches!(err, ConfigError::Pattern(_)));
        assert!(err.to_string().contains("(unclosed"));
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{ "base_dir": "/tmp" }"#).unwrap();
        let config = SieveConfig::from_path(file.path()).unwrap();
        assert_eq!(config.base_dir.as_deref(), Some(Path::new("/tmp")));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SieveConfig::from_path(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
