use anyhow::{Result, Context};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// @module: File and directory utilities

/// Maximum length of a slugged title used in file names
const MAX_SLUG_CHARS: usize = 100;

// @const: Characters not allowed in a file-name slug
static SLUG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\w\-]").unwrap()
});

// @const: Caption language suffix on a file stem (e.g. ".en", ".en-orig")
static LANG_SUFFIX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\.[a-z]{2}(-[a-zA-Z0-9]+)?$").unwrap()
});

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        let path = path.as_ref();
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Find files with a specific extension in a directory
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        let normalized_ext = extension.trim_start_matches('.');

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case(normalized_ext) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        // WalkDir order is platform dependent; keep runs reproducible
        result.sort();
        Ok(result)
    }

    /// Turn a video title into a safe file-name slug
    pub fn slugify_title(title: &str) -> String {
        let slug = SLUG_REGEX.replace_all(title, "_");
        slug.chars().take(MAX_SLUG_CHARS).collect()
    }

    /// Strip a caption language suffix from a file stem.
    ///
    /// Downloaded caption files are named `<title>.<lang>.vtt`, while the
    /// metadata sidecar is `<title>.info.json`; matching the two requires
    /// removing the language part.
    pub fn strip_language_suffix(stem: &str) -> String {
        LANG_SUFFIX_REGEX.replace(stem, "").to_string()
    }

    /// Locate the metadata sidecar for a caption file, if present
    pub fn find_info_sidecar<P: AsRef<Path>>(caption_path: P) -> Option<PathBuf> {
        let caption_path = caption_path.as_ref();
        let stem = caption_path.file_stem()?.to_string_lossy().to_string();
        let base_name = Self::strip_language_suffix(&stem);

        let sidecar = caption_path
            .parent()?
            .join(format!("{}.info.json", base_name));
        if Self::file_exists(&sidecar) {
            Some(sidecar)
        } else {
            None
        }
    }
}
