use rand::seq::IndexedRandom;
use sharchop_types::Language;

/// One translation pair, keyed by the dataset's ID column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseRow {
    pub id: String,
    pub tshangla: String,
    pub english: String,
}

impl PhraseRow {
    /// The row's text in the given column
    pub fn text(&self, language: Language) -> &str {
        match language {
            Language::Tshangla => &self.tshangla,
            Language::English => &self.english,
        }
    }
}

/// Whole dataset in memory, ordered as loaded, read-only after load
#[derive(Debug, Default)]
pub struct PhraseTable {
    rows: Vec<PhraseRow>,
}

impl PhraseTable {
    pub fn from_rows(rows: Vec<PhraseRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[PhraseRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row by ID, if present
    pub fn get(&self, id: &str) -> Option<&PhraseRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// Up to n rows chosen uniformly at random, for example display
    pub fn sample(&self, n: usize) -> Vec<&PhraseRow> {
        self.rows
            .choose_multiple(&mut rand::rng(), n.min(self.rows.len()))
            .collect()
    }
}
