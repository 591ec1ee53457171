use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

// @module: Caption track classification

/// Origin of a caption track.
///
/// Caption pipelines expose three kinds of tracks: subtitles uploaded by the
/// author, machine transcriptions of the original audio, and machine
/// translations of that transcription into other languages. Downstream
/// consumers care about the distinction because each kind degrades
/// differently.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    // @kind: Uploaded by the video author
    Manual,
    // @kind: Machine transcription of the original audio
    AutoGenerated,
    // @kind: Machine translation of the auto transcription
    AutoTranslated,
}

impl TrackKind {
    /// Short bracketed label shown next to a track in listings
    pub fn display_label(&self) -> &str {
        match self {
            Self::Manual => "[Original]",
            Self::AutoGenerated => "[Auto]",
            Self::AutoTranslated => "[Auto-Translate]",
        }
    }

    /// Classify a track from its language code and origin.
    ///
    /// Manually uploaded tracks carry an `-orig` suffix on their code. An
    /// automatic track matching the audio language is a transcription; any
    /// other automatic track is a translation of it.
    pub fn classify(lang_code: &str, auto_generated: bool, audio_language: &str) -> Self {
        if !auto_generated || lang_code.ends_with("-orig") {
            return Self::Manual;
        }
        if base_code(lang_code) == base_code(audio_language) {
            Self::AutoGenerated
        } else {
            Self::AutoTranslated
        }
    }
}

impl std::fmt::Display for TrackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Manual => "manual",
            Self::AutoGenerated => "auto-generated",
            Self::AutoTranslated => "auto-translated",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for TrackKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "manual" => Ok(Self::Manual),
            "auto-generated" => Ok(Self::AutoGenerated),
            "auto-translated" => Ok(Self::AutoTranslated),
            _ => Err(anyhow!("Invalid track kind: {}", s)),
        }
    }
}

/// A caption track offered for one video
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CaptionTrack {
    /// Language code as exported by the captioning pipeline (e.g. "en", "de-orig")
    pub code: String,

    /// Human-readable language name
    pub name: String,

    /// Track origin
    pub kind: TrackKind,
}

impl CaptionTrack {
    /// Create a classified caption track
    pub fn new(code: &str, name: &str, auto_generated: bool, audio_language: &str) -> Self {
        CaptionTrack {
            code: code.to_string(),
            name: name.to_string(),
            kind: TrackKind::classify(code, auto_generated, audio_language),
        }
    }
}

impl std::fmt::Display for CaptionTrack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) {}", self.code, self.name, self.kind.display_label())
    }
}

/// Strip regional and origin suffixes from a language code ("en-orig" -> "en")
fn base_code(code: &str) -> &str {
    code.split('-').next().unwrap_or(code)
}
