use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// A discovered repository root.
///
/// Identity is the canonical path: two repositories with the same name under
/// different roots are distinct, and the same directory reached through two
/// different spellings (`/a/../b`, a symlink) is the same repository.
#[derive(Debug, Clone)]
pub struct Repository {
    name: String,
    path: PathBuf,
    canonical_path: PathBuf,
}

impl Repository {
    /// `path` is kept as encountered during the scan; `canonical_path` is the
    /// deduplication key.
    pub fn new(path: PathBuf, canonical_path: PathBuf) -> Self {
        let name = path
            .file_name()
            .or_else(|| canonical_path.file_name())
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        Self {
            name,
            path,
            canonical_path,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn canonical_path(&self) -> &Path {
        &self.canonical_path
    }
}

impl PartialEq for Repository {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_path == other.canonical_path
    }
}

impl Eq for Repository {}

impl Hash for Repository {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_path.hash(state);
    }
}

impl std::fmt::Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_name_is_final_path_segment() {
        let repo = Repository::new(PathBuf::from("/base/work/api"), PathBuf::from("/base/work/api"));
        assert_eq!(repo.name(), "api");
        assert_eq!(repo.path(), Path::new("/base/work/api"));
    }

    #[test]
    fn test_name_falls_back_to_canonical_path() {
        // A root given as "." has no final segment of its own
        let repo = Repository::new(PathBuf::from("."), PathBuf::from("/home/me/project"));
        assert_eq!(repo.name(), "project");
        assert_eq!(repo.path(), Path::new("."));
    }

    #[test]
    fn test_equality_uses_canonical_path() {
        let a = Repository::new(PathBuf::from("/x/link/app"), PathBuf::from("/x/real/app"));
        let b = Repository::new(PathBuf::from("/x/real/app"), PathBuf::from("/x/real/app"));
        let c = Repository::new(PathBuf::from("/y/app"), PathBuf::from("/y/app"));

        assert_eq!(a, b);
        assert_ne!(a, c, "same name under a different root is a different repository");

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_repository_display() {
        let repo = Repository::new(PathBuf::from("/path/to/repo"), PathBuf::from("/path/to/repo"));
        let display_str = format!("{}", repo);
        assert_eq!(display_str, "repo (/path/to/repo)");
    }
}
