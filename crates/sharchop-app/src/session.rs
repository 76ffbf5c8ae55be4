use std::path::PathBuf;

use sharchop_config::matcher::MatcherConfig;
use sharchop_core::{
    DefaultPreprocessor, MatchOutcome, MediaLocator, PhraseTable, Preprocessor, SessionHistory,
    resolve, resolve_translation,
};
use sharchop_types::{Language, ResolvedTranslation};

/// Per-session state: current language direction plus the translation log.
/// Owned by the request loop, never global.
pub struct Session {
    source: Language,
    pub history: SessionHistory,
}

impl Session {
    pub fn new() -> Self {
        Self {
            source: Language::Tshangla,
            history: SessionHistory::new(),
        }
    }

    pub fn source(&self) -> Language {
        self.source
    }

    pub fn target(&self) -> Language {
        self.source.opposite()
    }

    /// Flip the translation direction
    pub fn swap(&mut self) {
        self.source = self.source.opposite();
    }
}

/// An alternate candidate resolved for display
#[derive(Debug, Clone)]
pub struct AlternateView {
    pub source_text: String,
    pub target_text: String,
    pub score: u8,
}

/// Everything the renderer needs for one accepted translation
#[derive(Debug, Clone)]
pub struct TranslationView {
    pub resolved: ResolvedTranslation,
    pub source_audio: Option<PathBuf>,
    pub target_audio: Option<PathBuf>,
    pub alternates: Vec<AlternateView>,
}

#[derive(Debug, Clone)]
pub enum RequestOutcome {
    Translated(TranslationView),
    /// Informational, not an error
    NoMatch,
}

/// One full request: preprocess, match, resolve the row, look up audio for
/// both directions, log to history.
pub fn handle_query(
    raw_query: &str,
    session: &mut Session,
    table: &PhraseTable,
    locator: &MediaLocator,
    params: MatcherConfig,
) -> RequestOutcome {
    let query = DefaultPreprocessor.process(raw_query);
    tracing::info!(%query, source = %session.source(), "handling translation request");

    let (best, alternates) = match resolve(&query, session.source(), table, params) {
        MatchOutcome::Matched { best, alternates } => (best, alternates),
        MatchOutcome::NoMatch => return RequestOutcome::NoMatch,
    };

    // Candidate text always originates from the table, so this lookup only
    // misses if the table changed underneath us, which it cannot
    let Some(resolved) = resolve_translation(&best, session.source(), table) else {
        return RequestOutcome::NoMatch;
    };

    let source_audio = locator.locate(resolved.source_language, &resolved.match_id);
    let target_audio = locator.locate(resolved.target_language, &resolved.match_id);

    let alternates = alternates
        .iter()
        .filter_map(|alt| {
            resolve_translation(alt, session.source(), table).map(|r| AlternateView {
                source_text: r.source_text,
                target_text: r.target_text,
                score: alt.score,
            })
        })
        .collect();

    session.history.append(resolved.clone());

    RequestOutcome::Translated(TranslationView {
        resolved,
        source_audio,
        target_audio,
        alternates,
    })
}
