//! Structured audit findings.
//!
//! Each [`Issue`] variant carries the fields a renderer or a test needs;
//! `Display` produces the one-line human text.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::rule::Section;
use crate::scan::DelimiterPair;

/// One detected problem in the inspected project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// A required manifest path does not exist.
    MissingFile { path: String },

    /// Open and close counts differ for one delimiter pair.
    UnbalancedDelimiter {
        file: PathBuf,
        pair: DelimiterPair,
        difference: i64,
    },

    /// A relative import's expected sibling file is absent.
    UnresolvedImport { file: PathBuf, import: String },

    /// The file uses the standard library without the canonical import.
    StdWithoutImport { file: PathBuf, namespace: String },

    /// The file searched for method names does not exist.
    MissingCorpus { path: String },

    /// A required HTTP method name does not occur in its corpus.
    MissingMethod { token: String },

    /// A required endpoint fragment does not occur in its corpus.
    MissingEndpoint { token: String },
}

impl Issue {
    /// Report section this issue is listed under.
    pub fn section(&self) -> Section {
        match self {
            Self::MissingFile { .. } => Section::Structure,
            Self::UnbalancedDelimiter { .. }
            | Self::UnresolvedImport { .. }
            | Self::StdWithoutImport { .. } => Section::Syntax,
            Self::MissingCorpus { .. } | Self::MissingMethod { .. } => Section::Methods,
            Self::MissingEndpoint { .. } => Section::Endpoints,
        }
    }

    /// The scanned source file this issue is about, for syntax issues.
    pub fn file(&self) -> Option<&Path> {
        match self {
            Self::UnbalancedDelimiter { file, .. }
            | Self::UnresolvedImport { file, .. }
            | Self::StdWithoutImport { file, .. } => Some(file),
            _ => None,
        }
    }

    /// Short form used in bulleted report lists: the bare path or token
    /// where the section heading already says what is missing.
    pub fn label(&self) -> String {
        match self {
            Self::MissingFile { path } => path.clone(),
            Self::MissingMethod { token } | Self::MissingEndpoint { token } => token.clone(),
            other => other.to_string(),
        }
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFile { path } => write!(f, "Required file '{}' is missing", path),
            Self::UnbalancedDelimiter {
                pair, difference, ..
            } => write!(f, "Unbalanced {}: {:+}", pair, difference),
            Self::UnresolvedImport { import, .. } => {
                write!(f, "Import '{}' may not resolve correctly", import)
            }
            Self::StdWithoutImport { namespace, .. } => {
                write!(f, "File uses {} but doesn't import it", namespace)
            }
            Self::MissingCorpus { path } => {
                let name = Path::new(path)
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.clone());
                write!(f, "{} not found", name)
            }
            Self::MissingMethod { token } => write!(f, "HTTP method '{}' is not implemented", token),
            Self::MissingEndpoint { token } => write!(f, "Endpoint '{}' is not covered", token),
        }
    }
}
