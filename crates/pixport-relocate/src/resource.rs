//! Resource locations (`namespace:path`)

use pixport_core::{PixportError, Result};
use std::fmt;
use std::str::FromStr;

/// Namespace of the base game's assets
pub const VANILLA_NAMESPACE: &str = "minecraft";

/// A game asset identifier of the form `[namespace:]path`
///
/// A missing namespace means `minecraft`. The explicit form is remembered so
/// the location prints back the way it was written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceLocation {
    namespace: Option<String>,
    path: String,
}

impl ResourceLocation {
    /// Parse `path` or `namespace:path`
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = |why: &str| PixportError::InvalidResourceLocation(format!("'{}' {}", s, why));

        let (namespace, path) = match s.split_once(':') {
            Some((ns, path)) => {
                if ns.is_empty() {
                    return Err(invalid("has an empty namespace"));
                }
                if path.contains(':') {
                    return Err(invalid("has more than one ':'"));
                }
                (Some(ns.to_string()), path)
            }
            None => (None, s),
        };

        if path.is_empty() {
            return Err(invalid("has an empty path"));
        }

        Ok(Self {
            namespace,
            path: path.to_string(),
        })
    }

    /// Namespace with the `minecraft` default applied
    pub fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or(VANILLA_NAMESPACE)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Bare paths and the literal `minecraft` namespace are vanilla
    pub fn is_vanilla(&self) -> bool {
        self.namespace() == VANILLA_NAMESPACE
    }

    /// Last `/`-separated segment of the path (`block/oak_log` -> `oak_log`)
    pub fn file_stem(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

impl FromStr for ResourceLocation {
    type Err = PixportError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{}:{}", ns, self.path),
            None => write!(f, "{}", self.path),
        }
    }
}
