use log::debug;

use crate::errors::ChunkError;

// @module: Overlapping text chunking for retrieval pipelines

/// Characters that end a sentence; a chunk prefers to cut just after one.
const SENTENCE_TERMINALS: [char; 4] = ['.', '!', '?', '\n'];

/// Split text into overlapping chunks, preferring sentence boundaries.
///
/// Walks the text with a cursor, cutting a candidate chunk of `chunk_size`
/// characters at a time. When the cut would land mid-text, the boundary is
/// pulled back to the nearest sentence-terminal character (`.`, `!`, `?` or a
/// line break) within a lookback window of 30% of `chunk_size`; if no
/// terminal is found there, the hard cut stands. Consecutive chunks re-share
/// `overlap` characters so context survives the cut.
///
/// All positions are counted in Unicode scalar values, so a multi-byte
/// character can never be split.
///
/// # Errors
///
/// Fails fast with [`ChunkError`] when `chunk_size` is zero or `overlap`
/// is not strictly below `chunk_size`. Empty input is not an error and
/// yields an empty sequence.
pub fn chunk(text: &str, chunk_size: usize, overlap: usize) -> Result<Vec<String>, ChunkError> {
    if chunk_size == 0 {
        return Err(ChunkError::InvalidChunkSize(chunk_size));
    }
    if overlap >= chunk_size {
        return Err(ChunkError::InvalidOverlap { overlap, chunk_size });
    }

    let chars: Vec<char> = text.chars().collect();
    let text_len = chars.len();
    if text_len == 0 {
        return Ok(Vec::new());
    }

    // Sentence lookback window: 30% of the chunk size
    let lookback = chunk_size * 3 / 10;

    let mut chunks = Vec::new();
    let mut start = 0;

    while start < text_len {
        let mut end = start + chunk_size;

        // Only snap to a sentence boundary when the cut lands strictly
        // inside the text; the final chunk takes whatever remains.
        if end < text_len {
            if let Some(split_point) = find_sentence_break(&chars, end, lookback) {
                end = split_point;
            }
        }

        let piece: String = chars[start..end.min(text_len)].iter().collect();
        let trimmed = piece.trim();
        if !trimmed.is_empty() {
            chunks.push(trimmed.to_string());
        }

        // Move the cursor forward, keeping the requested overlap. A snapped
        // cut close to `start` combined with a large overlap could otherwise
        // stall the walk, so anything short of strict progress forfeits the
        // overlap and jumps to `end`.
        let next_start = end.saturating_sub(overlap);
        start = if next_start > start { next_start } else { end };
    }

    debug!(
        "Chunked {} characters into {} chunks (size {}, overlap {})",
        text_len,
        chunks.len(),
        chunk_size,
        overlap
    );

    Ok(chunks)
}

/// Scan backward from `end` for the nearest sentence terminal within the
/// lookback window, returning the position just after it.
fn find_sentence_break(chars: &[char], end: usize, lookback: usize) -> Option<usize> {
    let floor = end.saturating_sub(lookback);
    for i in (floor + 1..=end).rev() {
        if SENTENCE_TERMINALS.contains(&chars[i]) {
            return Some(i + 1);
        }
    }
    None
}
