/*!
 * # vttknow - Caption streams to knowledge
 *
 * A Rust library for turning noisy auto-generated caption streams into
 * clean transcripts and retrieval-ready chunks.
 *
 * ## Features
 *
 * - Strip markup and timing noise from WebVTT-style caption streams
 * - Collapse the overlapping rolling-window repetition of auto-captions
 * - Word-wrap transcripts for readability
 * - Split transcripts into bounded, overlapping chunks that prefer
 *   sentence boundaries
 * - Export per-video text documents and JSONL knowledge records
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `caption_normalizer`: Caption stream cleaning and deduplication
 * - `chunker`: Overlapping, boundary-aware text chunking
 * - `knowledge_export`: Chunk records, JSONL line shapes and document rendering
 * - `caption_track`: Caption track origin classification
 * - `app_config`: Configuration management
 * - `file_utils`: File system operations
 * - `app_controller`: Directory processing pipeline
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod caption_normalizer;
pub mod caption_track;
pub mod chunker;
pub mod errors;
pub mod file_utils;
pub mod knowledge_export;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, ProcessingReport};
pub use caption_normalizer::{normalize, normalize_with_width};
pub use caption_track::{CaptionTrack, TrackKind};
pub use chunker::chunk;
pub use errors::{AppError, ChunkError};
pub use knowledge_export::{ChunkRecord, VideoMetadata};
