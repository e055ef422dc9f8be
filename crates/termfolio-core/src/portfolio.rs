//! Portfolio record and its TOML/YAML loader
//!
//! The record is loaded once per process and shared read-only (behind an
//! `Arc`) by every session. Every field is optional in the document and
//! defaults to empty; the renderer treats empty values as "omit this line".

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Intro paragraph and highlight bullets shown on the Overview tab
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Overview {
    #[serde(default)]
    pub intro: String,

    #[serde(default)]
    pub bullets: Vec<String>,
}

/// One position on the Experience tab
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Experience {
    #[serde(default)]
    pub company: String,

    #[serde(default)]
    pub role: String,

    /// Free-form period, e.g. "2021 – 2023"
    #[serde(default)]
    pub period: String,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub bullets: Vec<String>,

    /// Comma separated technologies
    #[serde(default)]
    pub stack: String,
}

/// Source and demo links of a project
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProjectLinks {
    #[serde(default)]
    pub code: String,

    #[serde(default)]
    pub demo: String,
}

/// One entry on the Projects tab
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Project {
    #[serde(default)]
    pub name: String,

    /// Short description shown above the bullets
    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub bullets: Vec<String>,

    #[serde(default)]
    pub stack: String,

    /// Technology tags; used when `stack` is empty
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub links: ProjectLinks,
}

impl Project {
    /// The stack string, or the non-blank tags joined with commas
    pub fn stack_line(&self) -> String {
        if !self.stack.trim().is_empty() {
            return self.stack.clone();
        }
        self.tags
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Ways to reach the portfolio owner
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Contact {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub github: String,

    #[serde(default)]
    pub linkedin: String,
}

impl Contact {
    /// True when no contact channel is filled in
    pub fn is_empty(&self) -> bool {
        self.email.trim().is_empty()
            && self.github.trim().is_empty()
            && self.linkedin.trim().is_empty()
    }
}

/// Immutable snapshot of everything a session displays
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Portfolio {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub tagline: String,

    #[serde(default)]
    pub overview: Overview,

    #[serde(default, rename = "experience")]
    pub experiences: Vec<Experience>,

    #[serde(default)]
    pub projects: Vec<Project>,

    #[serde(default)]
    pub contact: Contact,
}

impl Portfolio {
    /// Load a portfolio document from disk.
    ///
    /// `.yaml` and `.yml` files are read as YAML, anything else as TOML.
    /// A missing file and a malformed document are both reported as errors;
    /// the caller is expected to stop before any session starts.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::portfolio_not_found(path));
        }

        let content = std::fs::read_to_string(path)?;
        let portfolio = match DocumentFormat::from_path(path) {
            DocumentFormat::Toml => Self::from_toml_str(&content, path)?,
            DocumentFormat::Yaml => Self::from_yaml_str(&content, path)?,
        };

        tracing::debug!(
            "Loaded portfolio from {:?}: {} experience entries, {} projects",
            path,
            portfolio.experiences.len(),
            portfolio.projects.len()
        );

        Ok(portfolio)
    }

    /// Parse a TOML portfolio document. `origin` is only used in error messages.
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::portfolio_parse(origin, e.to_string()))
    }

    /// Parse a YAML portfolio document. An empty document is an empty portfolio.
    pub fn from_yaml_str(content: &str, origin: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| Error::portfolio_parse(origin, e.to_string()))
    }
}

/// Serialization format of a portfolio document, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Toml,
    Yaml,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Toml,
        }
    }
}
