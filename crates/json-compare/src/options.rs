//! Rendering configuration: annotation tags, output dialect, presets.

/// A begin/end marker pair wrapped around one annotated region of output.
///
/// Either half may be empty; a fully empty tag leaves the region unmarked.
/// Markers are rebalanced at line breaks, so a multi-line region carries
/// the pair on every line it spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    pub begin: String,
    pub end: String,
}

impl Tag {
    pub fn new(begin: &str, end: &str) -> Tag {
        Tag {
            begin: begin.to_owned(),
            end: end.to_owned(),
        }
    }
}

/// The output dialect the rendering is written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Output {
    /// Pretty-printed JSON-style text: brackets, commas, quoted keys.
    #[default]
    Json,
    /// YAML-style text: a `---` header, `- ` list items, bare keys.
    Yaml,
}

/// Options controlling how a comparison is rendered.
///
/// The [`Default`] value renders unmarked, unindented JSON-style text.
/// [`Options::console`] and [`Options::html`] give ready-made tag sets for
/// terminals and web pages.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Output dialect, JSON-style unless changed.
    pub output: Output,
    /// Markers around regions equal in both documents.
    pub normal: Tag,
    /// Markers around regions present only in the second document.
    pub added: Tag,
    /// Markers around regions present only in the first document.
    pub removed: Tag,
    /// Markers around regions whose value or type differs.
    pub changed: Tag,
    /// Written after every line break, before the indentation.
    pub prefix: String,
    /// Repeated once per nesting level after every line break.
    pub indent: String,
    /// Append a ` (type)` suffix to every printed value.
    pub print_types: bool,
}

impl Options {
    /// Options for terminal output: ANSI foreground colors for the three
    /// difference spans and a four-space indent.
    pub fn console() -> Options {
        Options {
            added: Tag::new("\x1b[0;32m", "\x1b[0m"),
            removed: Tag::new("\x1b[0;31m", "\x1b[0m"),
            changed: Tag::new("\x1b[0;33m", "\x1b[0m"),
            indent: "    ".to_owned(),
            ..Options::default()
        }
    }

    /// Options for HTML output, best viewed inside a `<pre>` block:
    /// background-colored `<span>` markers, four-space indentation.
    pub fn html() -> Options {
        Options {
            added: Tag::new(r#"<span style="background-color: #8bff7f">"#, "</span>"),
            removed: Tag::new(r#"<span style="background-color: #fd7f7f">"#, "</span>"),
            changed: Tag::new(r#"<span style="background-color: #fcff7f">"#, "</span>"),
            indent: "    ".to_owned(),
            ..Options::default()
        }
    }

    /// Switch any options value to the YAML dialect with its customary
    /// two-space indentation, keeping the tags.
    pub fn with_yaml_output(self) -> Options {
        Options {
            output: Output::Yaml,
            indent: "  ".to_owned(),
            ..self
        }
    }
}
