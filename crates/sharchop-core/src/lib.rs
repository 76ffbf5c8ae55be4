pub mod audio;
pub mod history;
pub mod loader;
pub mod matcher;
pub mod preprocess;
pub mod table;

pub use audio::MediaLocator;
pub use history::SessionHistory;
pub use loader::{LoadError, load_table};
pub use matcher::{MatchCandidate, MatchOutcome, resolve, resolve_translation, token_sort_ratio};
pub use preprocess::{DefaultPreprocessor, Preprocessor};
pub use table::{PhraseRow, PhraseTable};
