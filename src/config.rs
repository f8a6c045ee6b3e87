//! Layout configuration.
//!
//! [LayoutConfig] is built either in code through the `with_*` methods or
//! deserialized from JSON:
//!
//! ```
//! use cladogram::{DisplayLevel, LayoutConfig};
//!
//! let config = LayoutConfig::from_json_str(r#"{ "display_level": 2, "show_labels": false }"#)?;
//! assert_eq!(config, LayoutConfig::new().with_display_level(DisplayLevel::Depth(2)).with_show_labels(false));
//!
//! let config = LayoutConfig::from_json_str(r#"{ "display_level": "unlimited" }"#)?;
//! assert_eq!(config, LayoutConfig::default());
//! # Ok::<(), cladogram::Error>(())
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const UNLIMITED_KEYWORD: &str = "unlimited";

// =#========================================================================#=
// DISPLAY LEVEL
// =#========================================================================#=
/// Maximum clade depth retained for display, counted from the root (depth 0).
///
/// Clades at depth `>= n` lose their children under [DisplayLevel::Depth]`(n)`,
/// so `Depth(0)` keeps only the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "DisplayLevelRepr", into = "DisplayLevelRepr")]
pub enum DisplayLevel {
    #[default]
    Unlimited,
    Depth(usize),
}

impl DisplayLevel {
    /// Returns the depth limit, or `None` if unlimited.
    pub fn limit(&self) -> Option<usize> {
        match self {
            DisplayLevel::Unlimited => None,
            DisplayLevel::Depth(depth) => Some(*depth),
        }
    }

    /// Returns `true` if a clade at `depth` keeps its children.
    pub fn keeps_children_at(&self, depth: usize) -> bool {
        self.limit().is_none_or(|limit| depth < limit)
    }
}

impl fmt::Display for DisplayLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayLevel::Unlimited => f.write_str(UNLIMITED_KEYWORD),
            DisplayLevel::Depth(depth) => write!(f, "{depth}"),
        }
    }
}

impl FromStr for DisplayLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(UNLIMITED_KEYWORD) {
            return Ok(DisplayLevel::Unlimited);
        }
        s.parse::<usize>()
            .map(DisplayLevel::Depth)
            .map_err(|_| Error::InvalidDisplayLevel(s.to_string()))
    }
}

/// Wire form: either an integer or the keyword `"unlimited"`.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum DisplayLevelRepr {
    Depth(usize),
    Keyword(String),
}

impl TryFrom<DisplayLevelRepr> for DisplayLevel {
    type Error = Error;

    fn try_from(repr: DisplayLevelRepr) -> Result<Self> {
        match repr {
            DisplayLevelRepr::Depth(depth) => Ok(DisplayLevel::Depth(depth)),
            DisplayLevelRepr::Keyword(keyword) => keyword.parse(),
        }
    }
}

impl From<DisplayLevel> for DisplayLevelRepr {
    fn from(level: DisplayLevel) -> Self {
        match level {
            DisplayLevel::Unlimited => DisplayLevelRepr::Keyword(UNLIMITED_KEYWORD.to_string()),
            DisplayLevel::Depth(depth) => DisplayLevelRepr::Depth(depth),
        }
    }
}

// =#========================================================================#=
// LAYOUT CONFIG
// =#========================================================================#=
/// Options of the dendrogram layout.
///
/// # Configuration
/// * [`with_display_level(level)`](Self::with_display_level)
///     - Maximum depth retained from the root; default [DisplayLevel::Unlimited]
/// * [`with_show_labels(bool)`](Self::with_show_labels)
///     - Whether terminal names render as visible text (otherwise hover only); default `true`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    pub display_level: DisplayLevel,
    pub show_labels: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            display_level: DisplayLevel::Unlimited,
            show_labels: true,
        }
    }
}

impl LayoutConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum depth retained for display.
    pub fn with_display_level(mut self, display_level: DisplayLevel) -> Self {
        self.display_level = display_level;
        self
    }

    /// Sets whether terminal names render as visible text.
    pub fn with_show_labels(mut self, show_labels: bool) -> Self {
        self.show_labels = show_labels;
        self
    }

    /// Reads a configuration from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_level_from_str() {
        assert_eq!("unlimited".parse::<DisplayLevel>().unwrap(), DisplayLevel::Unlimited);
        assert_eq!(" Unlimited ".parse::<DisplayLevel>().unwrap(), DisplayLevel::Unlimited);
        assert_eq!("3".parse::<DisplayLevel>().unwrap(), DisplayLevel::Depth(3));
        assert!(matches!(
            "-1".parse::<DisplayLevel>(),
            Err(Error::InvalidDisplayLevel(s)) if s == "-1"
        ));
    }

    #[test]
    fn test_keeps_children_at() {
        assert!(DisplayLevel::Unlimited.keeps_children_at(1_000));
        assert!(!DisplayLevel::Depth(0).keeps_children_at(0));
        assert!(DisplayLevel::Depth(2).keeps_children_at(1));
        assert!(!DisplayLevel::Depth(2).keeps_children_at(2));
    }

    #[test]
    fn test_config_json() {
        let config = LayoutConfig::from_json_str("{}").unwrap();
        assert_eq!(config, LayoutConfig::default());

        let config = LayoutConfig::new().with_display_level(DisplayLevel::Depth(1));
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"display_level":1,"show_labels":true}"#);

        let json = serde_json::to_string(&LayoutConfig::default()).unwrap();
        assert_eq!(json, r#"{"display_level":"unlimited","show_labels":true}"#);
    }

    #[test]
    fn test_config_json_rejects_bad_values() {
        assert!(matches!(
            LayoutConfig::from_json_str(r#"{ "display_level": "deep" }"#),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            LayoutConfig::from_json_str(r#"{ "show_lables": true }"#),
            Err(Error::Config(_))
        ));
    }
}
