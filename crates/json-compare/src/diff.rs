//! Lock-step comparison of two JSON documents with an annotated rendering.
//!
//! One recursive walk produces both results at once: the [`Difference`]
//! classification and a human-readable picture of the comparison. Values
//! present in both documents are walked together; values present on only
//! one side are rendered whole under an added or removed span.

use std::collections::BTreeSet;
use std::fmt;

use serde_json::Value;

use crate::dialect::{Dialect, JsonDialect, YamlDialect};
use crate::options::{Options, Output};
use crate::render::{Context, SpanKind};
use crate::value::{Entries, Node, ValueKind};

// ── Classification ────────────────────────────────────────────────────────

/// The overall verdict of one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difference {
    /// The documents are deeply equal.
    FullMatch,
    /// The first document is a superset of the second: everything that does
    /// not match exactly is data the second document lacks.
    SupersetMatch,
    /// The documents differ by changed values, changed types, or data
    /// present only in the second document.
    NoMatch,
    /// The first argument could not be decoded.
    FirstArgIsInvalidJson,
    /// The second argument could not be decoded.
    SecondArgIsInvalidJson,
    /// Neither argument could be decoded.
    BothArgsAreInvalidJson,
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difference::FullMatch => "FullMatch",
            Difference::SupersetMatch => "SupersetMatch",
            Difference::NoMatch => "NoMatch",
            Difference::FirstArgIsInvalidJson => "FirstArgIsInvalidJson",
            Difference::SecondArgIsInvalidJson => "SecondArgIsInvalidJson",
            Difference::BothArgsAreInvalidJson => "BothArgsAreInvalidJson",
        })
    }
}

// ── Public API ────────────────────────────────────────────────────────────

/// Compare two raw JSON documents and render the comparison per `opts`.
///
/// Returns the classification together with the rendered text. Numbers
/// compare and render by the exact text they were written in. When either
/// input fails to decode, the text is a short fixed diagnostic instead of a
/// rendering.
///
/// The walk recurses per nesting level; guarding against stack exhaustion
/// on pathologically nested documents is left to the caller.
///
/// ```
/// use json_compare::{compare, Difference, Options};
///
/// let a = br#"{"a": 123, "b": 456, "c": [7, 8, 9]}"#;
/// let b = br#"{"a": 123, "c": [7, 8]}"#;
/// let (diff, _) = compare(a, b, &Options::default());
/// assert_eq!(diff, Difference::SupersetMatch);
/// ```
pub fn compare(a: &[u8], b: &[u8], opts: &Options) -> (Difference, String) {
    let a = Node::parse(a);
    let b = Node::parse(b);
    match (a, b) {
        (Err(_), Err(_)) => (
            Difference::BothArgsAreInvalidJson,
            "both arguments are invalid json".to_owned(),
        ),
        (Err(_), Ok(_)) => (
            Difference::FirstArgIsInvalidJson,
            "first argument is invalid json".to_owned(),
        ),
        (Ok(_), Err(_)) => (
            Difference::SecondArgIsInvalidJson,
            "second argument is invalid json".to_owned(),
        ),
        (Ok(a), Ok(b)) => diff_nodes(&a, &b, opts),
    }
}

/// Compare two already-decoded values and render the comparison per `opts`.
///
/// Numbers here carry [`Value`]'s stored decimal text: `1.0` and `1` stay
/// distinct, but spellings `serde_json` rewrites while parsing (such as
/// `1E2`) are gone before this function sees them. [`compare`] works from
/// the raw input and keeps them.
pub fn compare_values(a: &Value, b: &Value, opts: &Options) -> (Difference, String) {
    diff_nodes(&Node::from_value(a), &Node::from_value(b), opts)
}

fn diff_nodes(a: &Node<'_>, b: &Node<'_>, opts: &Options) -> (Difference, String) {
    let mut ctx = Context::new(opts);
    match opts.output {
        Output::Json => print_diff::<JsonDialect>(&mut ctx, a, b),
        Output::Yaml => print_diff::<YamlDialect>(&mut ctx, a, b),
    }
    ctx.finish()
}

fn print_diff<D: Dialect>(ctx: &mut Context<'_>, a: &Node<'_>, b: &Node<'_>) {
    D::write_first(ctx);
    diff_any::<D>(ctx, a, b);
}

// ── Core recursive differ ─────────────────────────────────────────────────

fn diff_any<D: Dialect>(ctx: &mut Context<'_>, a: &Node<'_>, b: &Node<'_>) {
    match (a, b) {
        (Node::Null, Node::Null) => {
            ctx.span(SpanKind::Normal);
            write_value::<D>(ctx, a, false);
            ctx.result(Difference::FullMatch);
        }
        // A lone null never carries a type suffix on either side:
        // `null => 1`, not `null (null) => 1 (number)`.
        (Node::Null, _) | (_, Node::Null) => {
            ctx.span(SpanKind::Changed);
            write_literal::<D>(ctx, a, false);
            ctx.buf.push_str(" => ");
            write_literal::<D>(ctx, b, false);
            ctx.result(Difference::NoMatch);
        }
        (Node::Array(x), Node::Array(y)) => diff_arr::<D>(ctx, x, y),
        (Node::Object(x), Node::Object(y)) => diff_obj::<D>(ctx, x, y),
        (Node::Bool(x), Node::Bool(y)) if x == y => write_match::<D>(ctx, a),
        // Textual equality: `1.0`, `1` and `1e0` are three different numbers.
        (Node::Number(x), Node::Number(y)) if x == y => write_match::<D>(ctx, a),
        (Node::String(x), Node::String(y)) if x == y => write_match::<D>(ctx, a),
        _ => write_mismatch::<D>(ctx, a, b),
    }
}

fn diff_arr<D: Dialect>(ctx: &mut Context<'_>, a: &[Node<'_>], b: &[Node<'_>]) {
    ctx.span(SpanKind::Normal);
    let max_len = a.len().max(b.len());
    if max_len == 0 {
        ctx.buf.push_str("[]");
        write_type_maybe(ctx, ValueKind::Array);
        return;
    }
    D::start_list(ctx);
    for i in 0..max_len {
        D::start_list_item(ctx);
        if i < a.len() && i < b.len() {
            diff_any::<D>(ctx, &a[i], &b[i]);
        } else if i < a.len() {
            ctx.span(SpanKind::Removed);
            write_value::<D>(ctx, &a[i], true);
            ctx.result(Difference::SupersetMatch);
        } else {
            ctx.span(SpanKind::Added);
            write_value::<D>(ctx, &b[i], true);
            ctx.result(Difference::NoMatch);
        }
        ctx.span(SpanKind::Normal);
        D::end_of_item(ctx, i == max_len - 1);
    }
    D::end_list(ctx);
    write_type_maybe(ctx, ValueKind::Array);
}

fn diff_obj<D: Dialect>(ctx: &mut Context<'_>, a: &Entries<'_>, b: &Entries<'_>) {
    ctx.span(SpanKind::Normal);
    // Union of both key sets, emitted in sorted order regardless of how
    // either document spelled it.
    let keys: BTreeSet<&str> = a.keys().chain(b.keys()).map(|k| k.as_ref()).collect();
    if keys.is_empty() {
        ctx.buf.push_str("{}");
        write_type_maybe(ctx, ValueKind::Object);
        return;
    }
    D::start_map(ctx);
    let last = keys.len() - 1;
    for (i, key) in keys.iter().enumerate() {
        let in_a = a.get(*key);
        let in_b = b.get(*key);
        if let (Some(x), Some(y)) = (in_a, in_b) {
            write_key::<D>(ctx, key);
            diff_any::<D>(ctx, x, y);
        } else if let Some(x) = in_a {
            ctx.span(SpanKind::Removed);
            write_key::<D>(ctx, key);
            write_value::<D>(ctx, x, true);
            ctx.result(Difference::SupersetMatch);
        } else if let Some(y) = in_b {
            ctx.span(SpanKind::Added);
            write_key::<D>(ctx, key);
            write_value::<D>(ctx, y, true);
            ctx.result(Difference::NoMatch);
        }
        ctx.span(SpanKind::Normal);
        D::end_of_item(ctx, i == last);
    }
    D::end_map(ctx);
    write_type_maybe(ctx, ValueKind::Object);
}

fn write_match<D: Dialect>(ctx: &mut Context<'_>, v: &Node<'_>) {
    ctx.span(SpanKind::Normal);
    write_value::<D>(ctx, v, true);
    ctx.result(Difference::FullMatch);
}

fn write_mismatch<D: Dialect>(ctx: &mut Context<'_>, a: &Node<'_>, b: &Node<'_>) {
    ctx.span(SpanKind::Changed);
    write_value::<D>(ctx, a, false);
    ctx.buf.push_str(" => ");
    write_value::<D>(ctx, b, false);
    ctx.result(Difference::NoMatch);
}

// ── Value rendering ───────────────────────────────────────────────────────

/// Render `v` followed by its optional type suffix.
///
/// `full` recurses into collections; otherwise they are reduced to their
/// empty token (`[]` or `{}`), which keeps mismatch lines one line long.
fn write_value<D: Dialect>(ctx: &mut Context<'_>, v: &Node<'_>, full: bool) {
    write_literal::<D>(ctx, v, full);
    write_type_maybe(ctx, v.kind());
}

fn write_literal<D: Dialect>(ctx: &mut Context<'_>, v: &Node<'_>, full: bool) {
    match v {
        Node::Null => ctx.buf.push_str("null"),
        Node::Bool(true) => ctx.buf.push_str("true"),
        Node::Bool(false) => ctx.buf.push_str("false"),
        Node::Number(text) => ctx.buf.push_str(text),
        Node::String(s) => {
            let quoted = D::quote(s);
            ctx.buf.push_str(&quoted);
        }
        Node::Array(items) if full => write_arr::<D>(ctx, items),
        Node::Array(_) => ctx.buf.push_str("[]"),
        Node::Object(entries) if full => write_obj::<D>(ctx, entries),
        Node::Object(_) => ctx.buf.push_str("{}"),
    }
}

fn write_arr<D: Dialect>(ctx: &mut Context<'_>, items: &[Node<'_>]) {
    if items.is_empty() {
        ctx.buf.push_str("[]");
        return;
    }
    D::start_list(ctx);
    let last = items.len() - 1;
    for (i, item) in items.iter().enumerate() {
        D::start_list_item(ctx);
        write_value::<D>(ctx, item, true);
        D::end_of_item(ctx, i == last);
    }
    D::end_list(ctx);
}

fn write_obj<D: Dialect>(ctx: &mut Context<'_>, entries: &Entries<'_>) {
    if entries.is_empty() {
        ctx.buf.push_str("{}");
        return;
    }
    D::start_map(ctx);
    let last = entries.len() - 1;
    for (i, (key, value)) in entries.iter().enumerate() {
        write_key::<D>(ctx, key);
        write_value::<D>(ctx, value, true);
        D::end_of_item(ctx, i == last);
    }
    D::end_map(ctx);
}

fn write_key<D: Dialect>(ctx: &mut Context<'_>, key: &str) {
    let quoted = D::quote(key);
    ctx.buf.push_str(&quoted);
    ctx.buf.push_str(": ");
}

fn write_type_maybe(ctx: &mut Context<'_>, kind: ValueKind) {
    if ctx.opts.print_types {
        ctx.buf.push_str(" (");
        ctx.buf.push_str(kind.name());
        ctx.buf.push(')');
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
