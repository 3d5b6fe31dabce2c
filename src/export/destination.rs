//! Destination naming rules.
//!
//! The suffix rule is the engine's own; where the file actually lands is a
//! policy decided by the caller (the CLI picks the home fallback on macOS,
//! where the default working directory is sandboxed).

use std::path::{MAIN_SEPARATOR, PathBuf};

/// Append `.xml` unless the name already carries it (case-insensitively).
pub fn ensure_xml_extension(destination: &str) -> String {
    if destination.to_ascii_lowercase().ends_with(".xml") {
        destination.to_string()
    } else {
        format!("{}.xml", destination)
    }
}

/// Maps the suffixed destination name to the path the engine opens.
pub trait DestinationPolicy {
    fn resolve(&self, file_name: &str) -> PathBuf;
}

/// Identity policy: relative names resolve against the working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentDirPolicy;

impl DestinationPolicy for CurrentDirPolicy {
    fn resolve(&self, file_name: &str) -> PathBuf {
        PathBuf::from(file_name)
    }
}

/// Bare names (no directory separator) resolve under the home directory;
/// anything carrying a separator passes through untouched.
#[derive(Debug, Clone)]
pub struct HomeFallbackPolicy {
    home: Option<PathBuf>,
}

impl HomeFallbackPolicy {
    /// Capture the home directory from `HOME`.
    pub fn new() -> Self {
        Self {
            home: std::env::var_os("HOME").map(PathBuf::from),
        }
    }

    /// Use an explicit home directory.
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
        }
    }
}

impl Default for HomeFallbackPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl DestinationPolicy for HomeFallbackPolicy {
    fn resolve(&self, file_name: &str) -> PathBuf {
        let bare = !file_name.contains(MAIN_SEPARATOR) && !file_name.contains('/');
        match (&self.home, bare) {
            (Some(home), true) => home.join(file_name),
            _ => PathBuf::from(file_name),
        }
    }
}
