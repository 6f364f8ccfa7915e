//! Render pass context: markup stream, escaping, shared-asset tracking.
//!
//! One `RenderCx` lives for exactly one render pass over the tree. It owns the
//! append-only markup buffer and the set of shared assets (scripts, styles)
//! that have already been emitted this pass, so a renderer that appears many
//! times still emits its supporting asset exactly once. Because the set is
//! per-context rather than process-global, nothing leaks between requests in a
//! long-lived server.

use std::borrow::Cow;
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Escaping
// ---------------------------------------------------------------------------

/// Escape text for safe interpolation into HTML body or attribute positions.
///
/// Covers the five characters with markup meaning. Returns the input borrowed
/// when nothing needs escaping.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

// ---------------------------------------------------------------------------
// RenderCx
// ---------------------------------------------------------------------------

/// Per-render-pass context: the output markup stream plus once-per-pass flags.
///
/// The stream is write-only and ordered; callers that need the result take it
/// with [`RenderCx::finish`].
#[derive(Debug, Default)]
pub struct RenderCx {
    out: String,
    emitted_assets: HashSet<&'static str>,
}

impl RenderCx {
    /// Create a fresh context for one render pass.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append raw markup to the stream.
    pub fn write(&mut self, markup: &str) {
        self.out.push_str(markup);
    }

    /// Append text to the stream, HTML-escaped.
    pub fn write_escaped(&mut self, text: &str) {
        self.out.push_str(&escape(text));
    }

    /// Emit a shared asset exactly once per pass.
    ///
    /// The first call with a given `key` appends `markup` and returns `true`;
    /// later calls with the same key append nothing and return `false`.
    pub fn emit_asset_once(&mut self, key: &'static str, markup: &str) -> bool {
        if self.emitted_assets.insert(key) {
            self.out.push_str(markup);
            true
        } else {
            false
        }
    }

    /// Whether the asset with `key` has been emitted this pass.
    pub fn asset_emitted(&self, key: &str) -> bool {
        self.emitted_assets.contains(key)
    }

    /// Current length of the markup stream in bytes.
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Borrow the markup written so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Consume the context, returning the full markup stream.
    pub fn finish(self) -> String {
        self.out
    }
}
