use super::filter::RepoFilter;
use crate::domain::{Input, Outcome, Repository};
use std::ops::Range;

/// Terminal dimensions as last reported by the presentation layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

/// Interactive picker state for one session.
///
/// Every change to the query or the repository list recomputes the filtered
/// view and moves the cursor back to the top, so the cursor is always a valid
/// index into `filtered` (or 0 when nothing matches).
#[derive(Debug)]
pub struct SelectionEngine {
    all: Vec<Repository>,
    query: String,
    /// Indices into `all`, ranked
    filtered: Vec<usize>,
    cursor: usize,
    viewport: Viewport,
    outcome: Option<Outcome<Repository>>,
    filter: RepoFilter,
}

impl SelectionEngine {
    pub fn new(repositories: Vec<Repository>) -> Self {
        let filtered = (0..repositories.len()).collect();
        Self {
            all: repositories,
            query: String::new(),
            filtered,
            cursor: 0,
            viewport: Viewport::default(),
            outcome: None,
            filter: RepoFilter::new(),
        }
    }

    /// Process one input. Once the session has an outcome, inputs are ignored.
    pub fn handle(&mut self, input: Input) {
        if self.is_finished() {
            return;
        }

        match input {
            Input::Cancel => {
                self.outcome = Some(Outcome::Cancelled);
            }

            Input::Up => {
                self.cursor = self.cursor.saturating_sub(1);
            }

            Input::Down => {
                if self.cursor + 1 < self.filtered.len() {
                    self.cursor += 1;
                }
            }

            Input::Confirm => {
                if let Some(repo) = self.current() {
                    self.outcome = Some(Outcome::Selected(repo.clone()));
                }
            }

            Input::Backspace => {
                if self.query.pop().is_some() {
                    self.refilter();
                }
            }

            Input::Char(c) => {
                if !c.is_control() {
                    self.query.push(c);
                    self.refilter();
                }
            }

            Input::Resize { width, height } => {
                self.viewport = Viewport { width, height };
            }
        }
    }

    /// Replace the repository list, keeping the current query.
    pub fn set_repositories(&mut self, repositories: Vec<Repository>) {
        self.all = repositories;
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered = self.filter.rank(&self.query, &self.all);
        self.cursor = 0;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn total(&self) -> usize {
        self.all.len()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Repositories matching the current query, best match first
    pub fn filtered(&self) -> impl ExactSizeIterator<Item = &Repository> + '_ {
        self.filtered.iter().map(move |&i| &self.all[i])
    }

    /// The repository under the cursor, if any match
    pub fn current(&self) -> Option<&Repository> {
        self.filtered.get(self.cursor).map(|&i| &self.all[i])
    }

    pub fn outcome(&self) -> Option<&Outcome<Repository>> {
        self.outcome.as_ref()
    }

    pub fn into_outcome(self) -> Option<Outcome<Repository>> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Slice of `filtered` that fits in `rows` lines while keeping the cursor
    /// visible. The cursor sits on the last visible row once it scrolls past
    /// the first page.
    pub fn visible_range(&self, rows: usize) -> Range<usize> {
        let len = self.filtered.len();
        if rows == 0 || len == 0 {
            return 0..0;
        }

        let start = (self.cursor + 1).saturating_sub(rows);
        start..(start + rows).min(len)
    }
}
