use sharchop_config::matcher::MatcherConfig;
use sharchop_types::{Language, ResolvedTranslation};

use crate::table::PhraseTable;

/// One scored row from a query, ranked against the rest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCandidate {
    /// The row's source-column text that was compared
    pub text: String,
    /// Token-sort similarity to the query, 0-100
    pub score: u8,
    pub row_id: String,
}

/// Outcome of a query against the phrase table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Matched {
        best: MatchCandidate,
        alternates: Vec<MatchCandidate>,
    },
    /// Best score at or below the threshold. A normal outcome, not an error.
    NoMatch,
}

/// Token-sort similarity: lowercase, split into alphanumeric tokens, sort,
/// rejoin, then score by normalized edit distance scaled to 0-100. Phrases
/// differing only in word order score 100.
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    let (a, b) = (token_sort_key(a), token_sort_key(b));
    (strsim::normalized_levenshtein(&a, &b) * 100.0).round() as u8
}

fn token_sort_key(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut tokens: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Rank every row by similarity to `query` in the `source` column and accept
/// the top candidate if it clears the threshold. Ties keep table order.
pub fn resolve(
    query: &str,
    source: Language,
    table: &PhraseTable,
    params: MatcherConfig,
) -> MatchOutcome {
    let mut candidates: Vec<MatchCandidate> = table
        .rows()
        .iter()
        .map(|row| MatchCandidate {
            text: row.text(source).to_string(),
            score: token_sort_ratio(query, row.text(source)),
            row_id: row.id.clone(),
        })
        .collect();

    // Stable sort, so equal scores stay in table order
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates.truncate(params.candidates);

    match candidates.first() {
        Some(best) if best.score > params.threshold => {
            tracing::debug!(score = best.score, row_id = %best.row_id, "match accepted");
            MatchOutcome::Matched {
                best: best.clone(),
                alternates: candidates[1..].to_vec(),
            }
        }
        _ => {
            tracing::debug!(best = candidates.first().map(|c| c.score), "no match over threshold");
            MatchOutcome::NoMatch
        }
    }
}

/// Turn an accepted candidate into the stored translation. Lookup is by
/// source text, first row in table order when the text is duplicated.
pub fn resolve_translation(
    best: &MatchCandidate,
    source: Language,
    table: &PhraseTable,
) -> Option<ResolvedTranslation> {
    let target = source.opposite();
    let row = table.rows().iter().find(|r| r.text(source) == best.text)?;

    Some(ResolvedTranslation {
        source_language: source,
        target_language: target,
        source_text: best.text.clone(),
        target_text: row.text(target).to_string(),
        match_id: row.id.clone(),
        confidence: best.score,
    })
}
