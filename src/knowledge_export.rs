use serde::{Deserialize, Serialize};

use crate::chunker;
use crate::errors::ChunkError;

// @module: Knowledge export records and rendering

/// How many characters of the description survive into the text document header
const DESCRIPTION_PREVIEW_CHARS: usize = 500;

/// Metadata describing one source video, as reported by the downloader.
///
/// The core never interprets these fields; they travel with the transcript
/// and are attached uniformly to every chunk derived from it.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct VideoMetadata {
    /// Video title
    #[serde(default)]
    pub title: String,

    /// Canonical video URL
    #[serde(default)]
    pub url: String,

    /// Upload date (YYYYMMDD as exported by the downloader)
    #[serde(default)]
    pub date: String,

    /// Full video description
    #[serde(default)]
    pub description: String,

    /// Channel or uploader name
    #[serde(default)]
    pub channel: String,

    /// View count at download time
    #[serde(default)]
    pub view_count: u64,
}

/// The metadata subset attached to each chunk.
///
/// Chunks repeat per video, so the bulky description and volatile view count
/// stay on the master record only.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ChunkMetadata {
    /// Video title
    #[serde(default)]
    pub title: String,

    /// Canonical video URL
    #[serde(default)]
    pub url: String,

    /// Upload date
    #[serde(default)]
    pub date: String,

    /// Channel or uploader name
    #[serde(default)]
    pub channel: String,
}

impl From<&VideoMetadata> for ChunkMetadata {
    fn from(meta: &VideoMetadata) -> Self {
        ChunkMetadata {
            title: meta.title.clone(),
            url: meta.url.clone(),
            date: meta.date.clone(),
            channel: meta.channel.clone(),
        }
    }
}

/// One chunk of a transcript with its position and carried metadata
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChunkRecord {
    /// Zero-based position within the transcript's chunk sequence
    pub index: usize,

    /// Chunk text, non-empty after trimming
    pub text: String,

    /// Metadata shared by every chunk of the transcript
    pub metadata: ChunkMetadata,
}

/// Line shape of the master JSONL export: one full transcript per line
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MasterEntry {
    /// Full normalized transcript
    pub content: String,

    /// Complete video metadata
    pub metadata: VideoMetadata,
}

/// Line shape of the chunks JSONL export: one retrieval chunk per line
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChunkEntry {
    /// Stable identifier, `"{slug}_{index}"`
    pub chunk_id: String,

    /// Chunk text
    pub content: String,

    /// Chunk metadata subset
    pub metadata: ChunkMetadata,
}

impl ChunkEntry {
    /// Build the export entry for one chunk of a video's transcript
    pub fn from_record(slug: &str, record: &ChunkRecord) -> Self {
        ChunkEntry {
            chunk_id: format!("{}_{}", slug, record.index),
            content: record.text.clone(),
            metadata: record.metadata.clone(),
        }
    }
}

/// Chunk a normalized transcript and attach metadata to every chunk.
///
/// Indices are contiguous from 0 within one call. Returns an empty sequence
/// for empty input and fails fast on an invalid chunking configuration.
pub fn chunk_records(
    text: &str,
    chunk_size: usize,
    overlap: usize,
    metadata: &VideoMetadata,
) -> Result<Vec<ChunkRecord>, ChunkError> {
    let chunk_meta = ChunkMetadata::from(metadata);
    let records = chunker::chunk(text, chunk_size, overlap)?
        .into_iter()
        .enumerate()
        .map(|(index, text)| ChunkRecord {
            index,
            text,
            metadata: chunk_meta.clone(),
        })
        .collect();
    Ok(records)
}

/// Render the per-video text document: a metadata header followed by the
/// normalized transcript.
///
/// Absent metadata fields are omitted rather than rendered empty; the
/// description is truncated to a preview and indented under its label.
pub fn render_transcript_document(text: &str, metadata: &VideoMetadata) -> String {
    let mut doc = String::new();

    doc.push_str(&format!("TITLE: {}\n", metadata.title));
    if !metadata.url.is_empty() {
        doc.push_str(&format!("URL:   {}\n", metadata.url));
    }
    if !metadata.date.is_empty() {
        doc.push_str(&format!("DATE:  {}\n", metadata.date));
    }
    if !metadata.description.is_empty() {
        let preview: String = metadata
            .description
            .chars()
            .take(DESCRIPTION_PREVIEW_CHARS)
            .collect();
        doc.push_str("DESCRIPTION:\n");
        for line in format!("{}...", preview).lines() {
            doc.push_str(&format!("  {}\n", line));
        }
    }
    doc.push_str(&"-".repeat(60));
    doc.push_str("\n\n");
    doc.push_str(text);
    doc.push('\n');

    doc
}
