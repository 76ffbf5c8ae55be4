use std::time::Duration;

use sharchop_config::matcher::MatcherConfig;
use sharchop_core::{MediaLocator, PhraseRow, PhraseTable};
use sharchop_voice::{DisabledTranscriber, ScriptedTranscriber, TranscribeError, Transcriber};

use crate::session::{RequestOutcome, Session, handle_query};

const LISTEN_TIMEOUT: Duration = Duration::from_secs(5);

fn table() -> PhraseTable {
    PhraseTable::from_rows(vec![PhraseRow {
        id: "1".into(),
        tshangla: "jang ga".into(),
        english: "hello".into(),
    }])
}

#[test]
fn recognized_speech_flows_through_the_pipeline() {
    let transcriber = ScriptedTranscriber::new([Ok("helo".to_string())]);
    let text = transcriber.transcribe(LISTEN_TIMEOUT).unwrap();

    let table = table();
    let tmp = tempfile::tempdir().unwrap();
    let locator = MediaLocator::new(tmp.path());
    let mut session = Session::new();
    session.swap(); // English source

    let outcome = handle_query(&text, &mut session, &table, &locator, MatcherConfig::default());
    let RequestOutcome::Translated(view) = outcome else {
        panic!("expected the transcription to match");
    };
    assert_eq!(view.resolved.match_id, "1");
    assert_eq!(session.history.len(), 1);
}

#[test]
fn capture_failures_leave_no_state_behind() {
    let transcriber = ScriptedTranscriber::new([
        Err(TranscribeError::Unrecognized),
        Err(TranscribeError::Timeout),
        Err(TranscribeError::DeviceUnavailable("no input device".into())),
    ]);

    let mut session = Session::new();
    for _ in 0..3 {
        assert!(transcriber.transcribe(LISTEN_TIMEOUT).is_err());
    }
    // Nothing reached the matcher, nothing was logged
    assert!(session.history.is_empty());
    session.swap();
    assert!(session.history.is_empty());
}

#[test]
fn failure_variants_render_distinct_messages() {
    let messages = [
        TranscribeError::DeviceUnavailable("busy".into()).to_string(),
        TranscribeError::AmbientNoise("too loud".into()).to_string(),
        TranscribeError::Timeout.to_string(),
        TranscribeError::Unrecognized.to_string(),
        TranscribeError::ServiceUnavailable.to_string(),
    ];
    for (i, a) in messages.iter().enumerate() {
        for b in &messages[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn disabled_backend_reports_service_unavailable() {
    let backend = DisabledTranscriber;
    assert_eq!(
        backend.transcribe(LISTEN_TIMEOUT),
        Err(TranscribeError::ServiceUnavailable)
    );
}
