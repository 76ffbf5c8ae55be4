pub mod types;

pub use types::{Language, ParseLanguageError, ResolvedTranslation};
