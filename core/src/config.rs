//! Portfolio Configuration Document
//!
//! The YAML document every command formats its output from. Loaded exactly
//! once per session and treated as immutable afterwards; the console tracks
//! whether the load has resolved and answers a "not ready" notice until it
//! has.
//!
//! # Document Layout
//!
//! ```yaml
//! personal:
//!   name: Ada Lovelace
//!   title: Software Engineer
//!   education: B.Sc. Computer Science
//!   email: ada@example.com
//!   github: github.com/ada
//!   linkedin: linkedin.com/in/ada
//! about:
//!   greeting: Hi, I'm Ada!
//!   description: I build things.
//! experience:
//!   - title: Engineer
//!     company: Analytical Engines Ltd
//!     period: 1842 - 1843
//!     description:
//!       - Wrote the first program
//! projects:
//!   - name: notes
//!     description: Translator notes
//!     technologies: [math, prose]
//! skills:
//!   languages: [Ada]
//!   ml_data_science: []
//!   cloud_backend: []
//!   hardware: []
//!   interests: []
//! ```
//!
//! # XDG Base Directory Compliance
//!
//! The default location is `$XDG_CONFIG_HOME/termfolio/config.yaml`
//! (typically `~/.config/termfolio/config.yaml`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading the portfolio document
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse the YAML document
    #[error("Failed to parse YAML config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A required field is missing or a group is empty
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

// =============================================================================
// Document Model
// =============================================================================

/// Personal details: identity, education, and contact fields
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personal {
    /// Full name; the first word becomes the prompt user
    pub name: String,
    /// Professional title shown in the banner
    pub title: String,
    /// Education line shown in the banner
    pub education: String,
    /// Contact email
    pub email: String,
    /// GitHub profile
    pub github: String,
    /// LinkedIn profile
    pub linkedin: String,
}

/// The about section
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    /// Greeting used as the section title
    pub greeting: String,
    /// Body text; may carry inline color markup
    pub description: String,
}

/// One work experience entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    /// Role title
    pub title: String,
    /// Employer
    pub company: String,
    /// Time period
    pub period: String,
    /// Bullet points
    pub description: Vec<String>,
}

/// One project entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project name
    pub name: String,
    /// Time period, if worth showing
    #[serde(default)]
    pub period: Option<String>,
    /// One-line description
    pub description: String,
    /// Technologies used
    pub technologies: Vec<String>,
    /// Repository link, if public
    #[serde(default)]
    pub github: Option<String>,
}

/// Skills grouped by category
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    /// Programming languages
    pub languages: Vec<String>,
    /// ML and data science tooling
    pub ml_data_science: Vec<String>,
    /// Cloud and backend tooling
    pub cloud_backend: Vec<String>,
    /// Hardware experience
    pub hardware: Vec<String>,
    /// Interests
    pub interests: Vec<String>,
}

/// The complete portfolio document
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Personal details
    pub personal: Personal,
    /// About section
    pub about: About,
    /// Work experience, display order
    pub experience: Vec<Experience>,
    /// Projects, display order
    pub projects: Vec<Project>,
    /// Skills grouped by category
    pub skills: Skills,
}

impl Config {
    /// Check that no required field is blank and no skill group is empty
    ///
    /// Formatters assume a validated document; a partial one never reaches
    /// them.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("personal.name", &self.personal.name),
            ("personal.title", &self.personal.title),
            ("personal.education", &self.personal.education),
            ("personal.email", &self.personal.email),
            ("personal.github", &self.personal.github),
            ("personal.linkedin", &self.personal.linkedin),
            ("about.greeting", &self.about.greeting),
            ("about.description", &self.about.description),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{field} is empty")));
            }
        }

        let groups = [
            ("skills.languages", &self.skills.languages),
            ("skills.ml_data_science", &self.skills.ml_data_science),
            ("skills.cloud_backend", &self.skills.cloud_backend),
            ("skills.hardware", &self.skills.hardware),
            ("skills.interests", &self.skills.interests),
        ];
        for (group, list) in groups {
            if list.is_empty() {
                return Err(ConfigError::Validation(format!("{group} is empty")));
            }
        }

        Ok(())
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Get the default configuration file path
///
/// Returns `$XDG_CONFIG_HOME/termfolio/config.yaml` or
/// `~/.config/termfolio/config.yaml` if `XDG_CONFIG_HOME` is not set.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("termfolio").join("config.yaml"))
}

/// Load and validate the portfolio document from a file
///
/// # Errors
///
/// Returns [`ConfigError::Read`] if the file cannot be read,
/// [`ConfigError::Parse`] if it is not valid YAML for the document model,
/// and [`ConfigError::Validation`] if a required field is blank or a skill
/// group is empty.
pub async fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

    let config: Config = serde_yaml::from_str(&text)?;
    config.validate()?;

    tracing::info!(path = %path.display(), "Loaded portfolio config");
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
