//! The two output dialects behind one structural callback contract.
//!
//! All decision logic lives in [`crate::diff`]; a dialect only decides what
//! text a structural event produces. Implementors are stateless unit types
//! called through associated functions, so the comparison walk monomorphizes
//! once per dialect.

use crate::render::Context;

/// Structural text production for one output dialect.
///
/// Level bookkeeping is part of the contract: `start_list`/`start_map` claim
/// one indentation level and `end_of_item` with `last == true` releases it,
/// so every block's opening and closing stay balanced in both dialects.
pub(crate) trait Dialect {
    /// Written once before anything else.
    fn write_first(ctx: &mut Context<'_>);

    /// Quote a key or string value the way this dialect spells strings.
    fn quote(s: &str) -> String;

    /// Open a list block.
    fn start_list(ctx: &mut Context<'_>);

    /// Close a list block.
    fn end_list(ctx: &mut Context<'_>);

    /// Written before each list item's value.
    fn start_list_item(ctx: &mut Context<'_>);

    /// Open a map block.
    fn start_map(ctx: &mut Context<'_>);

    /// Close a map block.
    fn end_map(ctx: &mut Context<'_>);

    /// Terminate one list or map item; the last item of a block releases
    /// the block's indentation level.
    fn end_of_item(ctx: &mut Context<'_>, last: bool);
}

/// Pretty-printed JSON-style output.
pub(crate) struct JsonDialect;

impl Dialect for JsonDialect {
    fn write_first(_ctx: &mut Context<'_>) {}

    fn quote(s: &str) -> String {
        serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_owned())
    }

    fn start_list(ctx: &mut Context<'_>) {
        ctx.level += 1;
        ctx.newline("[");
    }

    fn end_list(ctx: &mut Context<'_>) {
        ctx.buf.push(']');
    }

    fn start_list_item(_ctx: &mut Context<'_>) {}

    fn start_map(ctx: &mut Context<'_>) {
        ctx.level += 1;
        ctx.newline("{");
    }

    fn end_map(ctx: &mut Context<'_>) {
        ctx.buf.push('}');
    }

    fn end_of_item(ctx: &mut Context<'_>, last: bool) {
        if last {
            ctx.level -= 1;
            ctx.newline("");
        } else {
            ctx.newline(",");
        }
    }
}

/// YAML-style output: a `---` header, `- ` list items, bare keys and no
/// closing brackets. List items sit one level deeper than their parent.
pub(crate) struct YamlDialect;

impl Dialect for YamlDialect {
    fn write_first(ctx: &mut Context<'_>) {
        ctx.buf.push_str("---");
    }

    fn quote(s: &str) -> String {
        s.to_owned()
    }

    fn start_list(ctx: &mut Context<'_>) {
        ctx.level += 1;
        ctx.newline("");
    }

    fn end_list(_ctx: &mut Context<'_>) {}

    fn start_list_item(ctx: &mut Context<'_>) {
        ctx.buf.push_str("- ");
    }

    fn start_map(ctx: &mut Context<'_>) {
        ctx.level += 1;
        ctx.newline("");
    }

    fn end_map(_ctx: &mut Context<'_>) {}

    fn end_of_item(ctx: &mut Context<'_>, last: bool) {
        if last {
            ctx.level -= 1;
        } else {
            ctx.newline("");
        }
    }
}
