use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Duration;

/// Speech-to-text provider interface.
///
/// A transcribed string is handed to the matching pipeline exactly as if it
/// had been typed. Capture is blocking: the implementation acquires the
/// microphone, listens for at most `listen_timeout`, and releases the device
/// before returning, on every path.
pub trait Transcriber {
    /// Capture one utterance and return its transcription
    fn transcribe(&self, listen_timeout: Duration) -> Result<String, TranscribeError>;

    /// Backend metadata
    fn metadata(&self) -> BackendMetadata;
}

#[derive(Debug, Clone)]
pub struct BackendMetadata {
    pub name: String,
    pub requires_network: bool,
}

/// Capture failures, each surfaced to the user distinctly. All of these are
/// expected outcomes; the session returns to idle with nothing retained.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranscribeError {
    #[error("microphone unavailable: {0}")]
    DeviceUnavailable(String),

    #[error("ambient noise adjustment failed: {0}")]
    AmbientNoise(String),

    #[error("listening timed out")]
    Timeout,

    #[error("could not understand audio")]
    Unrecognized,

    #[error("speech recognition service unavailable")]
    ServiceUnavailable,
}

/// Placeholder backend for builds without a speech engine linked in.
/// Every capture reports the service as unavailable.
pub struct DisabledTranscriber;

impl Transcriber for DisabledTranscriber {
    fn transcribe(&self, _listen_timeout: Duration) -> Result<String, TranscribeError> {
        tracing::debug!("voice capture requested but no backend is linked");
        Err(TranscribeError::ServiceUnavailable)
    }

    fn metadata(&self) -> BackendMetadata {
        BackendMetadata {
            name: "disabled".to_string(),
            requires_network: false,
        }
    }
}

/// Scripted backend for tests and demos: pops pre-queued outcomes, then
/// reports a timeout once the script runs dry.
#[derive(Default)]
pub struct ScriptedTranscriber {
    script: RefCell<VecDeque<Result<String, TranscribeError>>>,
}

impl ScriptedTranscriber {
    pub fn new(script: impl IntoIterator<Item = Result<String, TranscribeError>>) -> Self {
        Self {
            script: RefCell::new(script.into_iter().collect()),
        }
    }
}

impl Transcriber for ScriptedTranscriber {
    fn transcribe(&self, _listen_timeout: Duration) -> Result<String, TranscribeError> {
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(TranscribeError::Timeout))
    }

    fn metadata(&self) -> BackendMetadata {
        BackendMetadata {
            name: "scripted".to_string(),
            requires_network: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[test]
    fn disabled_backend_is_always_unavailable() {
        let backend = DisabledTranscriber;
        assert_eq!(
            backend.transcribe(TIMEOUT),
            Err(TranscribeError::ServiceUnavailable)
        );
        assert_eq!(
            backend.transcribe(TIMEOUT),
            Err(TranscribeError::ServiceUnavailable)
        );
    }

    #[test]
    fn scripted_backend_plays_outcomes_in_order() {
        let backend = ScriptedTranscriber::new([
            Ok("hello".to_string()),
            Err(TranscribeError::Unrecognized),
        ]);
        assert_eq!(backend.transcribe(TIMEOUT), Ok("hello".to_string()));
        assert_eq!(backend.transcribe(TIMEOUT), Err(TranscribeError::Unrecognized));
        // Script exhausted
        assert_eq!(backend.transcribe(TIMEOUT), Err(TranscribeError::Timeout));
    }
}
