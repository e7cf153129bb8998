//! Shared type definitions for the AIStore SDK.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::error::AisError;

// ============================================================================
// Provider Enum
// ============================================================================

/// Backend provider of a bucket.
///
/// `ais` buckets live in the cluster itself; the others are remote backends
/// the cluster fronts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    #[default]
    #[serde(rename = "ais")]
    Ais,
    #[serde(rename = "aws")]
    Aws,
    #[serde(rename = "gcp")]
    Gcp,
    #[serde(rename = "azure")]
    Azure,
    #[serde(rename = "hdfs")]
    Hdfs,
    /// Plain HTTP(S) origin
    #[serde(rename = "ht")]
    Http,
}

impl Provider {
    /// Get the string representation used in query parameters and URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ais => "ais",
            Self::Aws => "aws",
            Self::Gcp => "gcp",
            Self::Azure => "azure",
            Self::Hdfs => "hdfs",
            Self::Http => "ht",
        }
    }
}

impl FromStr for Provider {
    type Err = AisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ais" => Ok(Self::Ais),
            "aws" | "s3" => Ok(Self::Aws),
            "gcp" | "gs" => Ok(Self::Gcp),
            "azure" | "az" => Ok(Self::Azure),
            "hdfs" => Ok(Self::Hdfs),
            "ht" => Ok(Self::Http),
            other => Err(AisError::InvalidParameter(format!("unknown provider '{}'", other))),
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_aliases() {
        assert_eq!("s3".parse::<Provider>().unwrap(), Provider::Aws);
        assert_eq!("GS".parse::<Provider>().unwrap(), Provider::Gcp);
        assert_eq!("az".parse::<Provider>().unwrap(), Provider::Azure);
        assert_eq!("ht".parse::<Provider>().unwrap(), Provider::Http);
        assert!("ftp".parse::<Provider>().is_err());
    }

    #[test]
    fn test_provider_serde() {
        assert_eq!(serde_json::to_string(&Provider::Http).unwrap(), r#""ht""#);
        let provider: Provider = serde_json::from_str(r#""gcp""#).unwrap();
        assert_eq!(provider, Provider::Gcp);
        assert_eq!(Provider::default(), Provider::Ais);
    }
}
