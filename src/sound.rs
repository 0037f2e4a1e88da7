//! Audio cues for study events, played fire-and-forget through rodio.

use crate::models::{Notifier, StudyEvent};
use crate::paths;
use rodio::stream::{OutputStream, OutputStreamBuilder};
use rodio::{Decoder, Sink};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub fn sound_file(event: StudyEvent) -> &'static str {
    match event {
        StudyEvent::CardCorrect => "correct.wav",
        StudyEvent::CardIncorrect => "incorrect.wav",
        StudyEvent::SessionComplete => "all_done.wav",
    }
}

/// Plays the wav file matching each event when sound is enabled.
/// Missing files or audio devices are logged and skipped.
pub struct SoundBoard {
    dir: PathBuf,
    enabled: bool,
    stream: Option<OutputStream>,
    stream_failed: bool,
}

impl Default for SoundBoard {
    fn default() -> Self {
        Self::new(paths::sounds_dir(), true)
    }
}

impl SoundBoard {
    pub fn new(dir: impl Into<PathBuf>, enabled: bool) -> Self {
        Self {
            dir: dir.into(),
            enabled,
            stream: None,
            stream_failed: false,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn play(&mut self, filename: &str) {
        let path = self.dir.join(filename);
        if !path.exists() {
            tracing::warn!("Sound file not found: {}", path.display());
            return;
        }

        let Some(stream) = self.output_stream() else {
            return;
        };

        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!("Cannot open sound {}: {}", path.display(), e);
                return;
            }
        };
        match Decoder::new(BufReader::new(file)) {
            Ok(source) => {
                let sink = Sink::connect_new(stream.mixer());
                sink.append(source);
                sink.detach();
            }
            Err(e) => tracing::warn!("Error playing sound {}: {}", path.display(), e),
        }
    }

    /// Opens the default output device on first use. A failed open is not retried.
    fn output_stream(&mut self) -> Option<&OutputStream> {
        if self.stream.is_none() && !self.stream_failed {
            match OutputStreamBuilder::open_default_stream() {
                Ok(mut stream) => {
                    stream.log_on_drop(false);
                    self.stream = Some(stream);
                }
                Err(e) => {
                    tracing::warn!("No audio output available: {}", e);
                    self.stream_failed = true;
                }
            }
        }
        self.stream.as_ref()
    }
}

impl Notifier for SoundBoard {
    fn notify(&mut self, event: StudyEvent) {
        if !self.enabled {
            return;
        }
        self.play(sound_file(event));
    }
}
