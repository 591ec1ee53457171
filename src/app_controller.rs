use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::caption_normalizer;
use crate::file_utils::FileManager;
use crate::knowledge_export::{self, ChunkEntry, MasterEntry, VideoMetadata};

// @module: Application controller for caption processing

/// Master export file name (one full transcript per line)
const MASTER_EXPORT_NAME: &str = "knowledge_master.jsonl";

/// Chunk export file name (one retrieval chunk per line)
const CHUNKS_EXPORT_NAME: &str = "knowledge_chunks.jsonl";

/// Outcome of one processing run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessingReport {
    /// Caption files turned into documents and chunks
    pub processed: usize,

    /// Caption files skipped (no content, or a per-file failure)
    pub skipped: usize,
}

/// Main application controller for caption processing
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a new controller for test purposes with default configuration
    #[allow(dead_code)]
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Process every caption file in a directory into text documents and
    /// JSONL exports.
    ///
    /// Each `.vtt` file is normalized; a non-empty transcript produces one
    /// `<slug>.txt` document, one master JSONL line and one JSONL line per
    /// chunk. A failure on one file is logged and skipped, never fatal to
    /// the run.
    pub fn run(&self, input_dir: &Path, output_dir: &Path) -> Result<ProcessingReport> {
        if !FileManager::dir_exists(input_dir) {
            return Err(anyhow::anyhow!(
                "Input directory does not exist: {}",
                input_dir.display()
            ));
        }
        FileManager::ensure_dir(output_dir)?;

        let caption_files = FileManager::find_files(input_dir, "vtt")?;
        if caption_files.is_empty() {
            warn!("No caption files found in {}", input_dir.display());
            return Ok(ProcessingReport::default());
        }

        info!(
            "Processing {} caption files into {}",
            caption_files.len(),
            output_dir.display()
        );

        let master_path = output_dir.join(MASTER_EXPORT_NAME);
        let chunks_path = output_dir.join(CHUNKS_EXPORT_NAME);
        let mut master_out = BufWriter::new(
            File::create(&master_path)
                .with_context(|| format!("Failed to create {}", master_path.display()))?,
        );
        let mut chunks_out = BufWriter::new(
            File::create(&chunks_path)
                .with_context(|| format!("Failed to create {}", chunks_path.display()))?,
        );

        let mut report = ProcessingReport::default();
        for caption_path in &caption_files {
            match self.process_file(caption_path, output_dir, &mut master_out, &mut chunks_out) {
                Ok(true) => report.processed += 1,
                Ok(false) => {
                    debug!("No content in {}", caption_path.display());
                    report.skipped += 1;
                }
                Err(e) => {
                    warn!("Failed to process {}: {}", caption_path.display(), e);
                    report.skipped += 1;
                }
            }
        }

        master_out.flush()?;
        chunks_out.flush()?;

        info!(
            "Done: {} processed, {} skipped",
            report.processed, report.skipped
        );
        Ok(report)
    }

    /// Process a single caption file. Returns `Ok(false)` when the stream
    /// holds no meaningful content.
    fn process_file(
        &self,
        caption_path: &Path,
        output_dir: &Path,
        master_out: &mut impl Write,
        chunks_out: &mut impl Write,
    ) -> Result<bool> {
        let raw = FileManager::read_to_string(caption_path)?;
        let clean_text = caption_normalizer::normalize_with_width(&raw, self.config.wrap_width);
        if clean_text.is_empty() {
            return Ok(false);
        }

        let metadata = self.load_metadata(caption_path);
        let slug = self.document_slug(caption_path, &metadata);

        // 1. Per-video text document with metadata header
        let document = knowledge_export::render_transcript_document(&clean_text, &metadata);
        let doc_path = output_dir.join(format!("{}.txt", slug));
        std::fs::write(&doc_path, document)
            .with_context(|| format!("Failed to write {}", doc_path.display()))?;

        // 2. Master export line (full transcript)
        let master_entry = MasterEntry {
            content: clean_text.clone(),
            metadata: metadata.clone(),
        };
        writeln!(master_out, "{}", serde_json::to_string(&master_entry)?)?;

        // 3. Chunk export lines
        let records = knowledge_export::chunk_records(
            &clean_text,
            self.config.chunk_size,
            self.config.overlap,
            &metadata,
        )?;
        for record in &records {
            let entry = ChunkEntry::from_record(&slug, record);
            writeln!(chunks_out, "{}", serde_json::to_string(&entry)?)?;
        }

        debug!(
            "{}: {} chunks from {} characters",
            slug,
            records.len(),
            clean_text.chars().count()
        );
        Ok(true)
    }

    /// Load the metadata sidecar for a caption file, falling back to empty
    /// metadata when the sidecar is missing or unreadable.
    fn load_metadata(&self, caption_path: &Path) -> VideoMetadata {
        let Some(sidecar) = FileManager::find_info_sidecar(caption_path) else {
            debug!("No metadata sidecar for {}", caption_path.display());
            return VideoMetadata::default();
        };

        match FileManager::read_to_string(&sidecar)
            .and_then(|content| serde_json::from_str(&content).map_err(Into::into))
        {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!("Ignoring unreadable sidecar {}: {}", sidecar.display(), e);
                VideoMetadata::default()
            }
        }
    }

    /// Derive the document slug from the video title, falling back to the
    /// caption file stem.
    fn document_slug(&self, caption_path: &Path, metadata: &VideoMetadata) -> String {
        if !metadata.title.is_empty() {
            return FileManager::slugify_title(&metadata.title);
        }
        let stem = caption_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "transcript".to_string());
        FileManager::slugify_title(&FileManager::strip_language_suffix(&stem))
    }

    /// Currently configured chunk parameters - used by tests and external consumers
    #[allow(dead_code)]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Output path of the master export within an output directory
    #[allow(dead_code)]
    pub fn master_export_path(output_dir: &Path) -> PathBuf {
        output_dir.join(MASTER_EXPORT_NAME)
    }

    /// Output path of the chunk export within an output directory
    #[allow(dead_code)]
    pub fn chunks_export_path(output_dir: &Path) -> PathBuf {
        output_dir.join(CHUNKS_EXPORT_NAME)
    }
}
