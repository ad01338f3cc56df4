use anyhow::Result;
use gitfinder_core::ports::{DiscoverReq, DiscoveryPort, ScanPolicy};
use gitfinder_core::Repository;
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Name of the entry that marks a repository root
const MARKER: &str = ".git";

/// File system discovery adapter that implements DiscoveryPort
#[derive(Debug, Clone, Default)]
pub struct FsDiscoveryAdapter {
    policy: ScanPolicy,
}

impl FsDiscoveryAdapter {
    pub fn new(policy: ScanPolicy) -> Self {
        Self { policy }
    }

    /// Find all repositories below a single root, in traversal order.
    /// Deduplication across roots is left to the caller.
    fn find_repos(&self, root: &Path) -> Vec<Repository> {
        let mut repositories = Vec::new();

        if !root.is_dir() {
            debug!("Skipping root {}: not a readable directory", root.display());
            return repositories;
        }

        let mut walker = WalkDir::new(root)
            .follow_links(self.policy.follow_links)
            .sort_by_file_name();
        if let Some(depth) = self.policy.max_depth {
            walker = walker.max_depth(depth);
        }

        let policy = &self.policy;
        let mut entries = walker.into_iter().filter_entry(|e| {
            // Only directories can be repository roots; ignored names are
            // pruned at any depth, the root included
            e.file_type().is_dir() && !policy.is_ignored(e.file_name())
        });

        loop {
            let entry = match entries.next() {
                None => break,
                Some(Ok(entry)) => entry,
                Some(Err(err)) => {
                    // Unreadable subtree or a symlink loop: skip it, keep walking siblings
                    let path = err.path().map(|p| p.display().to_string()).unwrap_or_default();
                    debug!("Skipping {}: {}", path, err);
                    continue;
                }
            };

            // The marker may be a directory, a gitfile (worktrees, submodules)
            // or a symlink, dangling or not
            if has_marker(entry.path()) {
                let repo_path = entry.path().to_path_buf();
                let canonical = canonicalize(&repo_path);
                debug!("Found repository at {}", repo_path.display());
                repositories.push(Repository::new(repo_path, canonical));

                // Repositories are not expected to nest
                entries.skip_current_dir();
            }
        }

        repositories
    }
}

impl DiscoveryPort for FsDiscoveryAdapter {
    fn scan(&self, req: DiscoverReq) -> Result<Vec<Repository>> {
        self.policy.validate()?;

        // Roots are independent; walk them in parallel and merge in root order
        let per_root: Vec<Vec<Repository>> = req
            .roots
            .par_iter()
            .map(|root| self.find_repos(root))
            .collect();

        let mut seen = HashSet::new();
        let mut result = Vec::new();
        for repo in per_root.into_iter().flatten() {
            if seen.insert(repo.canonical_path().to_path_buf()) {
                result.push(repo);
            } else {
                debug!("Skipping duplicate repository {}", repo.path().display());
            }
        }

        info!("Discovered {} repositories under {} roots", result.len(), req.roots.len());
        Ok(result)
    }
}

fn has_marker(dir: &Path) -> bool {
    std::fs::symlink_metadata(dir.join(MARKER)).is_ok()
}

/// Resolve symlinks and relative components. Falls back to a lexical
/// normalization when the path cannot be resolved on disk.
fn canonicalize(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| normalize_lexically(path))
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Convenience wrapper: scan `roots` with `policy`.
pub fn scan<P: AsRef<Path>>(roots: &[P], policy: &ScanPolicy) -> Result<Vec<Repository>> {
    let req = DiscoverReq::new(roots.iter().map(|r| r.as_ref().to_path_buf()));
    FsDiscoveryAdapter::new(policy.clone()).scan(req)
}
