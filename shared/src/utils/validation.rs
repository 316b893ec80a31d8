//! User identifier validation

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum length of an opaque identifier
pub const MAX_OPAQUE_IDENTIFIER_LENGTH: usize = 128;

static OPAQUE_IDENTIFIER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._:@-]{1,128}$").unwrap());

/// Accepted shape of the user identifiers tokens are issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierFormat {
    /// Hyphenated UUID strings
    #[default]
    Uuid,
    /// Stable printable identifiers such as database keys (`123`, `user@tenant`)
    Opaque,
}

impl IdentifierFormat {
    /// Check whether `identifier` conforms to this format
    pub fn validate(&self, identifier: &str) -> bool {
        match self {
            IdentifierFormat::Uuid => {
                // `Uuid::parse_str` also accepts simple and urn forms; only
                // the hyphenated form is issued
                identifier.len() == 36 && Uuid::parse_str(identifier).is_ok()
            }
            IdentifierFormat::Opaque => OPAQUE_IDENTIFIER_REGEX.is_match(identifier),
        }
    }
}

impl std::fmt::Display for IdentifierFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentifierFormat::Uuid => write!(f, "uuid"),
            IdentifierFormat::Opaque => write!(f, "opaque"),
        }
    }
}

impl std::str::FromStr for IdentifierFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uuid" => Ok(IdentifierFormat::Uuid),
            "opaque" => Ok(IdentifierFormat::Opaque),
            _ => Err(format!("Invalid identifier format: {}", s)),
        }
    }
}
