//! Accumulates streamed transcript segments from an external speech
//! recognizer and renders the texts shown while and after transcribing.

pub const DEFAULT_MAX_CHARS: usize = 4096;
pub const IN_PROGRESS_SUFFIX: &str = "...";

/// Bounded segment buffer. Once `max_chars` is exceeded the oldest
/// characters are dropped.
#[derive(Debug, Clone)]
pub struct TranscriptBuffer {
    text: String,
    max_chars: usize,
}

impl Default for TranscriptBuffer {
    fn default() -> Self {
        TranscriptBuffer::new(DEFAULT_MAX_CHARS)
    }
}

impl TranscriptBuffer {
    pub fn new(max_chars: usize) -> TranscriptBuffer {
        TranscriptBuffer {
            text: String::new(),
            max_chars,
        }
    }

    /// Appends a segment and returns the in-progress view.
    pub fn push_segment(&mut self, segment: &str) -> String {
        self.text.push_str(segment);

        let len = self.text.chars().count();
        if len > self.max_chars {
            let excess = len - self.max_chars;
            let cut = self
                .text
                .char_indices()
                .nth(excess)
                .map(|(i, _)| i)
                .unwrap_or(self.text.len());
            self.text.drain(..cut);
        }

        self.in_progress()
    }

    pub fn in_progress(&self) -> String {
        format!("{}{}", self.text, IN_PROGRESS_SUFFIX)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

/// Final transcript text, optionally tagged with the detected language.
pub fn finish(result: &str, language: &str, print_language: bool) -> String {
    if print_language {
        format!("{result}\n\nLanguage: {language}")
    } else {
        result.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TranscriptionStats {
    pub elapsed_ms: u64,
    pub audio_secs: f64,
}

impl TranscriptionStats {
    /// Seconds of audio transcribed per second of wall time.
    pub fn rate(&self) -> f64 {
        if self.elapsed_ms == 0 {
            return 0.0;
        }
        self.audio_secs / (self.elapsed_ms as f64 * 0.001)
    }

    pub fn summary(&self) -> String {
        format!("Time: {} ms\nRate: {:.1}x", self.elapsed_ms, self.rate())
    }
}
