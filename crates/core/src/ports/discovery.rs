use crate::domain::repo::Repository;
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::PathBuf;

/// Directory names pruned when no configuration says otherwise
pub const DEFAULT_IGNORE: &[&str] = &["node_modules", ".cache", ".cargo", ".rustup", "target", ".venv"];

/// Request for repository discovery
#[derive(Clone, Debug, Default)]
pub struct DiscoverReq {
    pub roots: Vec<PathBuf>,
}

impl DiscoverReq {
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }
}

/// Traversal policy shared read-only by every root of a scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanPolicy {
    /// Directory names that are never entered below a root
    pub ignore: BTreeSet<String>,

    /// Follow symlinked directories (cycles are detected and skipped)
    pub follow_links: bool,

    /// Maximum recursion depth below each root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

impl Default for ScanPolicy {
    fn default() -> Self {
        Self {
            ignore: DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect(),
            follow_links: false,
            max_depth: None,
        }
    }
}

impl ScanPolicy {
    pub fn is_ignored(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|name| self.ignore.contains(name))
    }

    /// Reject ignore entries that can never match a single directory name.
    pub fn validate(&self) -> Result<()> {
        for name in &self.ignore {
            let reason = if name.is_empty() {
                Some("is empty")
            } else if name == "." || name == ".." {
                Some("is a relative path component")
            } else if name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) {
                Some("contains a path separator")
            } else {
                None
            };

            if let Some(reason) = reason {
                return Err(CoreError::InvalidScanPolicy {
                    name: name.clone(),
                    reason,
                });
            }
        }
        Ok(())
    }
}

/// Port for repository discovery
pub trait DiscoveryPort: Send + Sync {
    /// Scan every root for repositories. Unreadable roots and subtrees are
    /// skipped; an error means the scan as a whole was invalid.
    fn scan(&self, req: DiscoverReq) -> anyhow::Result<Vec<Repository>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_ignores_node_modules() {
        let policy = ScanPolicy::default();
        assert!(policy.is_ignored(OsStr::new("node_modules")));
        assert!(!policy.is_ignored(OsStr::new("src")));
        assert!(!policy.follow_links);
        assert_eq!(policy.max_depth, None);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_entries() {
        for bad in ["", ".", "..", "a/b"] {
            let mut policy = ScanPolicy::default();
            policy.ignore.insert(bad.to_string());
            let err = policy.validate().unwrap_err();
            assert!(matches!(err, CoreError::InvalidScanPolicy { ref name, .. } if name == bad));
        }
    }

    #[test]
    fn test_discover_req_from_strings() {
        let req = DiscoverReq::new(["/a", "/b"]);
        assert_eq!(req.roots, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
    }
}
