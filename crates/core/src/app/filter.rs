use crate::domain::repo::Repository;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Ranks repositories by how well their names match a query.
///
/// Matching is a case-insensitive subsequence match: every query character
/// has to appear in the name in order, gaps allowed. Tighter, more contiguous
/// matches score higher.
pub struct RepoFilter {
    matcher: SkimMatcherV2,
}

impl std::fmt::Debug for RepoFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepoFilter").finish_non_exhaustive()
    }
}

impl Default for RepoFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl RepoFilter {
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }

    /// Indices into `repositories`, best match first.
    ///
    /// An empty query keeps every entry in its original order. Equal scores
    /// keep discovery order since the sort is stable.
    pub fn rank(&self, query: &str, repositories: &[Repository]) -> Vec<usize> {
        if query.is_empty() {
            return (0..repositories.len()).collect();
        }

        let mut scored: Vec<(usize, i64)> = repositories
            .iter()
            .enumerate()
            .filter_map(|(i, repo)| {
                self.matcher
                    .fuzzy_match(repo.name(), query)
                    .map(|score| (i, score))
            })
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.into_iter().map(|(i, _)| i).collect()
    }

    pub fn apply(&self, query: &str, repositories: &[Repository]) -> Vec<Repository> {
        self.rank(query, repositories)
            .into_iter()
            .map(|i| repositories[i].clone())
            .collect()
    }
}

/// One-shot filter over a repository list.
pub fn filter(query: &str, repositories: &[Repository]) -> Vec<Repository> {
    RepoFilter::new().apply(query, repositories)
}
