use std::path::{Path, PathBuf};

use sharchop_types::Language;

/// Resolves audio clips for a phrase ID under `<root>/<Language>_Audio/`.
///
/// The media corpus never settled on one filename convention (spacing and
/// extension both vary), so resolution probes each historical pattern in
/// order and then falls back to scanning the directory. Keep the list as a
/// list; collapsing it to one canonical scheme loses real files.
#[derive(Debug, Clone)]
pub struct MediaLocator {
    root: PathBuf,
}

impl MediaLocator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// First existing path for this language/ID, or None when the phrase
    /// simply has no recording. Never an error.
    pub fn locate(&self, language: Language, id: &str) -> Option<PathBuf> {
        let dir = self.root.join(format!("{language}_Audio"));

        let probes = [
            dir.join(format!("Audio {id}.mp3")),
            dir.join(format!("Audio {id}")),
            dir.join(format!("{id}.mp3")),
            dir.join(format!("Audio{id}.mp3")),
        ];
        for path in probes {
            if path.exists() {
                return Some(path);
            }
        }

        self.scan_directory(&dir, id)
    }

    // Last resort: take the first directory entry that still looks like it
    // belongs to this ID. An unreadable directory means no audio.
    fn scan_directory(&self, dir: &Path, id: &str) -> Option<PathBuf> {
        let spaced = format!("Audio {id}");
        let packed = format!("Audio{id}");
        let bare = format!("{id}.mp3");

        for entry in std::fs::read_dir(dir).ok()?.flatten() {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.starts_with(&spaced) || name.starts_with(&packed) || name == bare {
                tracing::debug!(file = %name, "audio resolved via directory scan");
                return Some(entry.path());
            }
        }
        None
    }
}
