//! Input sources for course files

use crate::error::{Error, Result};
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::warn;

/// A readable source of course JSON
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A file on disk
    Path(PathBuf),
    /// Standard input
    Stdin,
}

impl InputSource {
    /// Decide which sources to read.
    ///
    /// A glob pattern takes precedence over explicit files. Without either,
    /// standard input is read. A file named `-` also means standard input.
    pub fn resolve(files: &[PathBuf], pattern: Option<&str>) -> Result<Vec<Self>> {
        if let Some(pattern) = pattern {
            return Self::glob(pattern);
        }

        if files.is_empty() {
            return Ok(vec![Self::Stdin]);
        }

        Ok(files.iter().map(|f| Self::from_path(f)).collect())
    }

    /// Expand a glob pattern into file sources, sorted by path
    pub fn glob(pattern: &str) -> Result<Vec<Self>> {
        let mut paths = Vec::new();
        for entry in glob::glob(pattern)? {
            match entry {
                Ok(path) => paths.push(path),
                Err(e) => warn!(path = %e.path().display(), error = %e.error(), "Skipping unreadable path"),
            }
        }

        if paths.is_empty() {
            warn!(pattern, "Pattern matched no files");
        }

        paths.sort();
        Ok(paths.into_iter().map(Self::Path).collect())
    }

    fn from_path(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::Path(path.to_path_buf())
        }
    }

    /// Read the whole source as text
    pub fn read_to_string(&self) -> Result<String> {
        match self {
            Self::Path(path) => fs::read_to_string(path).map_err(Error::from),
            Self::Stdin => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                Ok(buf)
            }
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Stdin => write!(f, "<stdin>"),
        }
    }
}
