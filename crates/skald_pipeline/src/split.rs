//! Segment splitting for raw narrative text.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Hard upper bound on segments, matching the mandated 3-part structure.
pub const MAX_SEGMENTS: usize = 3;

/// Minimum trimmed paragraph length for the filtered paragraph strategy.
pub const MIN_PARAGRAPH_CHARS: usize = 50;

/// Structural markers: a `Part <n>:` heading (consuming the rest of the
/// heading line when a blank line follows it), a bare `Part <n>:` label, a
/// markdown `## Part <n>` heading line, or three-plus consecutive newlines.
static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Part \d+:[^\n]*\n\s*\n|Part \d+:|##\s*Part \d+[^\n]*|\n\s*\n\s*\n")
        .expect("marker pattern is valid")
});

/// Blank-line paragraph separator.
static PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("paragraph pattern is valid"));

/// Split raw narrative text into an ordered sequence of at most
/// [`MAX_SEGMENTS`] trimmed segment texts.
///
/// Strategies are tried in order, each only when the previous one produced
/// fewer than 2 usable segments:
///
/// 1. structural markers (the marker itself is stripped),
/// 2. blank-line paragraphs longer than [`MIN_PARAGRAPH_CHARS`],
/// 3. blank-line paragraphs of any non-zero length.
///
/// An empty result means the text had no usable content at all; the caller
/// treats that like an empty completion and falls back.
pub fn split_story(raw: &str) -> Vec<String> {
    let mut parts = split_on(&MARKER, raw, 0);
    if parts.len() < 2 {
        parts = split_on(&PARAGRAPH, raw, MIN_PARAGRAPH_CHARS);
    }
    if parts.len() < 2 {
        parts = split_on(&PARAGRAPH, raw, 0);
    }
    parts.truncate(MAX_SEGMENTS);
    debug!(segments = parts.len(), "split story text");
    parts
}

fn split_on(pattern: &Regex, raw: &str, min_len: usize) -> Vec<String> {
    pattern
        .split(raw)
        .map(str::trim)
        .filter(|text| !text.is_empty() && text.chars().count() > min_len)
        .map(str::to_string)
        .collect()
}
