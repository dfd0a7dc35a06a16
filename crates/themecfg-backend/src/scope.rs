//! Configuration scope helpers.
//!
//! A configuration value can be saved for the default scope, one website,
//! or one store view. The scope contributes path segments that disambiguate
//! files committed for different scopes of the same field.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Scope a configuration save or load applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", content = "scope_id", rename_all = "lowercase")]
pub enum Scope {
    Default,
    Websites(u32),
    Stores(u32),
}

impl Scope {
    pub fn is_default(&self) -> bool {
        matches!(self, Scope::Default)
    }

    /// Path fragment identifying this scope: `default`, `websites/{id}`, or
    /// `stores/{id}`.
    pub fn fragment(&self) -> String {
        match self {
            Scope::Default => "default".to_string(),
            Scope::Websites(id) => format!("websites/{}", id),
            Scope::Stores(id) => format!("stores/{}", id),
        }
    }

    /// Prefix a committed filename with the scope fragment.
    pub fn prepend_to(&self, name: &str) -> String {
        format!("{}/{}", self.fragment(), name)
    }

    /// Suffix an upload directory with the scope fragment.
    pub fn append_to(&self, dir: &str) -> String {
        format!("{}/{}", dir, self.fragment())
    }
}

impl Display for Scope {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.fragment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_layout() {
        assert_eq!(Scope::Default.fragment(), "default");
        assert_eq!(Scope::Websites(3).fragment(), "websites/3");
        assert_eq!(Scope::Stores(2).fragment(), "stores/2");
    }

    #[test]
    fn test_prepend_and_append() {
        assert_eq!(Scope::Stores(2).prepend_to("logo.png"), "stores/2/logo.png");
        assert_eq!(Scope::Default.prepend_to("logo.png"), "default/logo.png");
        assert_eq!(Scope::Websites(1).append_to("logo"), "logo/websites/1");
    }

    #[test]
    fn test_is_default() {
        assert!(Scope::Default.is_default());
        assert!(!Scope::Stores(1).is_default());
    }
}
