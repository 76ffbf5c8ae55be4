use sharchop_types::ResolvedTranslation;

/// Append-only log of accepted translations for the current session.
/// Nothing is persisted; the log dies with the session.
#[derive(Debug, Default)]
pub struct SessionHistory {
    entries: Vec<ResolvedTranslation>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: ResolvedTranslation) {
        self.entries.push(entry);
    }

    /// Irreversible
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries most-recent-first, for display
    pub fn all(&self) -> impl Iterator<Item = &ResolvedTranslation> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
