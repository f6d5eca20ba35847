//! Mutable rendering state threaded through one comparison.
//!
//! [`Context`] owns the output buffer, the nesting level, the currently
//! open annotation span and the accumulated [`Difference`]. The dialects
//! and the comparison walk both write through it; the span and line-break
//! bookkeeping lives here so neither has to think about marker balance.

use crate::diff::Difference;
use crate::options::{Options, Tag};

/// The annotation span a region of output belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SpanKind {
    /// Content equal in both documents.
    Normal,
    /// Content present only in the second document.
    Added,
    /// Content present only in the first document.
    Removed,
    /// Content whose value or type differs between the documents.
    Changed,
}

fn tag(opts: &Options, kind: SpanKind) -> &Tag {
    match kind {
        SpanKind::Normal => &opts.normal,
        SpanKind::Added => &opts.added,
        SpanKind::Removed => &opts.removed,
        SpanKind::Changed => &opts.changed,
    }
}

/// Traversal state for one comparison call.
pub(crate) struct Context<'a> {
    pub(crate) opts: &'a Options,
    pub(crate) buf: String,
    pub(crate) level: usize,
    pub(crate) open: Option<SpanKind>,
    pub(crate) diff: Difference,
}

impl<'a> Context<'a> {
    pub(crate) fn new(opts: &'a Options) -> Context<'a> {
        Context {
            opts,
            buf: String::new(),
            level: 0,
            open: None,
            diff: Difference::FullMatch,
        }
    }

    /// Transition to span `kind`.
    ///
    /// A no-op when `kind` is already open; otherwise the current span's
    /// end marker is written, then the new span's begin marker.
    pub(crate) fn span(&mut self, kind: SpanKind) {
        if self.open == Some(kind) {
            return;
        }
        if let Some(open) = self.open {
            self.buf.push_str(&tag(self.opts, open).end);
        }
        self.buf.push_str(&tag(self.opts, kind).begin);
        self.open = Some(kind);
    }

    /// Break the line: append `terminator`, close the open span, write the
    /// newline followed by the prefix and one indent per level, and reopen
    /// the same span.
    ///
    /// The close/reopen keeps marker pairs balanced on every physical line
    /// without changing which span is logically open.
    pub(crate) fn newline(&mut self, terminator: &str) {
        self.buf.push_str(terminator);
        if let Some(open) = self.open {
            self.buf.push_str(&tag(self.opts, open).end);
        }
        self.buf.push('\n');
        self.buf.push_str(&self.opts.prefix);
        for _ in 0..self.level {
            self.buf.push_str(&self.opts.indent);
        }
        if let Some(open) = self.open {
            self.buf.push_str(&tag(self.opts, open).begin);
        }
    }

    /// Fold the outcome of one node into the whole-document classification.
    ///
    /// `NoMatch` is absorbing; `SupersetMatch` only downgrades `FullMatch`.
    pub(crate) fn result(&mut self, outcome: Difference) {
        match outcome {
            Difference::NoMatch => self.diff = Difference::NoMatch,
            Difference::SupersetMatch if self.diff != Difference::NoMatch => {
                self.diff = Difference::SupersetMatch;
            }
            _ => {}
        }
    }

    /// Close any span still open and yield the classification and the text.
    pub(crate) fn finish(mut self) -> (Difference, String) {
        if let Some(open) = self.open {
            self.buf.push_str(&tag(self.opts, open).end);
        }
        (self.diff, self.buf)
    }
}
