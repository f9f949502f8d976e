//! Recently used colors, most recent first.

/// Default number of entries a history keeps.
pub const CAPACITY: usize = 10;

/// Colors a fresh history starts with.
pub const SEED: [&str; 5] = ["#3b82f6", "#ef4444", "#10b981", "#f59e0b", "#8b5cf6"];

/// Return a new history with `color` moved (or added) to the front, capped at
/// [`CAPACITY`] entries. Matching is exact and case-sensitive.
///
/// ```rust
/// use chromapick::add_to_history;
/// let history = vec!["#a".to_string(), "#b".to_string(), "#c".to_string()];
/// assert_eq!(add_to_history(&history, "#b"), ["#b", "#a", "#c"]);
/// ```
pub fn add_to_history(history: &[String], color: &str) -> Vec<String> {
    add_to_history_capped(history, color, CAPACITY)
}

/// Like [`add_to_history`], with an explicit capacity.
pub fn add_to_history_capped(history: &[String], color: &str, capacity: usize) -> Vec<String> {
    std::iter::once(color)
        .chain(history.iter().map(String::as_str).filter(|c| *c != color))
        .take(capacity)
        .map(str::to_owned)
        .collect()
}

/// An owned history list with a fixed capacity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    capacity: usize,
}

impl History {
    /// Create an empty history.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity.min(CAPACITY)),
            capacity,
        }
    }

    /// Create a history holding `seed`, truncated to `capacity`. Duplicates in
    /// the seed keep their first position.
    pub fn seeded<S: AsRef<str>>(seed: &[S], capacity: usize) -> Self {
        let mut history = Self::new(capacity);
        for color in seed.iter().rev() {
            history.push(color.as_ref());
        }
        history
    }

    /// Move (or add) `color` to the front. Returns `false` if the history was
    /// already in that state.
    pub fn push(&mut self, color: &str) -> bool {
        if self.entries.first().map(String::as_str) == Some(color) {
            return false;
        }
        let entries = add_to_history_capped(&self.entries, color, self.capacity);
        if entries == self.entries {
            return false;
        }
        self.entries = entries;
        true
    }

    /// Return the entry at `index`, most recent first.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// All entries, most recent first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::seeded(&SEED, CAPACITY)
    }
}
