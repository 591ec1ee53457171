use once_cell::sync::Lazy;
use regex::Regex;

// @module: Caption stream normalization

/// Default width used when reflowing normalized text for readability
pub const DEFAULT_WRAP_WIDTH: usize = 100;

// @const: Inline markup tag regex (styling tags and per-word timestamp tags)
static TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<[^>]+>").unwrap()
});

// @const: Whitespace run regex
static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").unwrap()
});

/// Markers that identify caption-stream header, metadata and cue-timing lines.
/// A line containing any of these carries no spoken text.
const STREAM_MARKERS: [&str; 4] = ["WEBVTT", "Kind:", "Language:", "-->"];

/// Normalize a raw caption stream into a single clean, readable text block.
///
/// Removes inline markup and timing information, collapses the overlapping
/// rolling-window repetition of auto-generated captions, and word-wraps the
/// result to [`DEFAULT_WRAP_WIDTH`] columns.
///
/// Tolerates malformed or partial streams: anything that cannot be recognized
/// as markup passes through as literal text, and an input without meaningful
/// content yields an empty string.
#[allow(dead_code)]
pub fn normalize(raw: &str) -> String {
    normalize_with_width(raw, DEFAULT_WRAP_WIDTH)
}

/// Normalize a raw caption stream, reflowing the output to the given width.
///
/// Wrapping is purely cosmetic: lines break only at whitespace and word
/// content and order are never altered.
pub fn normalize_with_width(raw: &str, width: usize) -> String {
    // 1. Global tag removal (e.g. <c>, word-level timestamps <00:00:00.000>)
    let stripped = TAG_REGEX.replace_all(raw, "");

    // 2. Extract meaningful lines
    let clean_lines = stripped
        .lines()
        .filter_map(filter_caption_line)
        .collect::<Vec<String>>();

    // 3. Collapse the rolling-window repetition of auto-generated captions
    let fragments = clean_lines
        .into_iter()
        .fold(Vec::new(), fold_rolling_window);

    // 4. Join into a single block and collapse whitespace runs
    let joined = fragments.join(" ");
    let full_text = WHITESPACE_REGEX.replace_all(&joined, " ");
    let full_text = full_text.trim();

    // 5. Reflow for readability
    if full_text.is_empty() {
        return String::new();
    }
    wrap_text(full_text, width)
}

/// Filter a single caption line, returning its cleaned text when it carries
/// spoken content and `None` when it is header, timing or cue-number noise.
fn filter_caption_line(line: &str) -> Option<String> {
    let trimmed = line.trim();

    // Skip empty lines and stream header/metadata/timing lines
    if trimmed.is_empty() || STREAM_MARKERS.iter().any(|m| trimmed.contains(m)) {
        return None;
    }

    // Skip cue sequence numbers
    if trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    // Decode HTML entities, then re-trim; decoding can surface new whitespace
    let decoded = decode_entities(trimmed);
    let decoded = decoded.trim();
    if decoded.is_empty() {
        return None;
    }

    Some(decoded.to_string())
}

/// One step of the rolling-window deduplication fold.
///
/// Auto-generated captions emit cue windows that repeat and extend the
/// previous window's text (`"A"`, `"A B"`, `"B C"`, `"C D"` for one growing
/// utterance). Each step compares the incoming line against the last
/// accumulated fragment:
///
/// - the line extends the last fragment: it subsumes it, replace in place
/// - the line is a stale prefix of the last fragment: drop it
/// - anything else is genuinely new content: append it
///
/// Invariant after every step: no two adjacent fragments where one is a
/// prefix of the other.
fn fold_rolling_window(mut fragments: Vec<String>, line: String) -> Vec<String> {
    let Some(last) = fragments.last() else {
        fragments.push(line);
        return fragments;
    };

    if line.starts_with(last.as_str()) {
        let end = fragments.len() - 1;
        fragments[end] = line;
    } else if !last.starts_with(&line) {
        fragments.push(line);
    }
    fragments
}

/// Decode the HTML/XML character entities that appear in caption streams.
///
/// `&amp;` is decoded last so that double-escaped sequences such as
/// `&amp;lt;` resolve to the literal text `&lt;` rather than a tag opener.
/// Unrecognized entities pass through unchanged.
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", "\u{00A0}")
        .replace("&lrm;", "\u{200E}")
        .replace("&rlm;", "\u{200F}")
        .replace("&amp;", "&")
}

/// Greedily word-wrap text to the given width, breaking only at whitespace.
///
/// A single word longer than the width is emitted unbroken on its own line,
/// so wrapped output always rejoins to the original words in order.
pub fn wrap_text(text: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}
