/// Discrete inputs consumed by the selection engine.
///
/// The presentation layer translates raw terminal events into these; the
/// engine never sees key codes or modifier flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Abort the session without a selection
    Cancel,

    /// Move the cursor one row up
    Up,

    /// Move the cursor one row down
    Down,

    /// Pick the repository under the cursor
    Confirm,

    /// Erase the last character of the query
    Backspace,

    /// Append a character to the query
    Char(char),

    /// The terminal was resized
    Resize { width: u16, height: u16 },
}

/// Terminal result of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Selected(T),
    Cancelled,
}

impl<T> Outcome<T> {
    pub fn selected(&self) -> Option<&T> {
        match self {
            Outcome::Selected(item) => Some(item),
            Outcome::Cancelled => None,
        }
    }

    pub fn into_selected(self) -> Option<T> {
        match self {
            Outcome::Selected(item) => Some(item),
            Outcome::Cancelled => None,
        }
    }
}
