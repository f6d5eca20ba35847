//! Decoded document model retaining each number's source text.
//!
//! `serde_json`'s own number type rewrites exponent spellings while
//! decoding (`1E2` comes back as `1e+2`), which would make textually
//! distinct numbers compare equal and render differently from the input.
//! [`Node`] decodes through [`RawValue`] instead and keeps every number
//! token exactly as written.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde_json::value::RawValue;
use serde_json::Value;

/// Object entries, sorted by key.
pub(crate) type Entries<'a> = BTreeMap<Cow<'a, str>, Node<'a>>;

/// One decoded JSON value.
///
/// Strings are unescaped; numbers hold their verbatim token text, which is
/// what the comparison and the rendering both work from.
#[derive(Debug, PartialEq)]
pub(crate) enum Node<'a> {
    Null,
    Bool(bool),
    Number(Cow<'a, str>),
    String(Cow<'a, str>),
    Array(Vec<Node<'a>>),
    Object(Entries<'a>),
}

impl<'a> Node<'a> {
    /// Decode one complete JSON document.
    pub(crate) fn parse(bytes: &'a [u8]) -> Result<Node<'a>, serde_json::Error> {
        let raw: &RawValue = serde_json::from_slice(bytes)?;
        Node::from_raw(raw)
    }

    fn from_raw(raw: &'a RawValue) -> Result<Node<'a>, serde_json::Error> {
        let text = raw.get();
        match text.as_bytes().first() {
            Some(b'n') => Ok(Node::Null),
            Some(b't') => Ok(Node::Bool(true)),
            Some(b'f') => Ok(Node::Bool(false)),
            Some(b'"') => Ok(Node::String(Cow::Owned(serde_json::from_str(text)?))),
            Some(b'[') => {
                let items: Vec<&RawValue> = serde_json::from_str(text)?;
                let mut array = Vec::with_capacity(items.len());
                for item in items {
                    array.push(Node::from_raw(item)?);
                }
                Ok(Node::Array(array))
            }
            Some(b'{') => {
                let entries: BTreeMap<String, &RawValue> = serde_json::from_str(text)?;
                let mut object = Entries::new();
                for (key, value) in entries {
                    object.insert(Cow::Owned(key), Node::from_raw(value)?);
                }
                Ok(Node::Object(object))
            }
            // Everything else is a number token, already validated by the
            // capture. Its text is the number's identity.
            _ => Ok(Node::Number(Cow::Borrowed(text))),
        }
    }

    /// Borrow an already-decoded value.
    ///
    /// The spelling a [`Value`] number had in some original document is
    /// gone; its stored decimal text stands in for it.
    pub(crate) fn from_value(value: &'a Value) -> Node<'a> {
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(*b),
            Value::Number(n) => Node::Number(Cow::Owned(n.to_string())),
            Value::String(s) => Node::String(Cow::Borrowed(s)),
            Value::Array(items) => Node::Array(items.iter().map(Node::from_value).collect()),
            Value::Object(entries) => Node::Object(
                entries
                    .iter()
                    .map(|(k, v)| (Cow::Borrowed(k.as_str()), Node::from_value(v)))
                    .collect(),
            ),
        }
    }

    pub(crate) fn kind(&self) -> ValueKind {
        match self {
            Node::Null => ValueKind::Null,
            Node::Bool(_) => ValueKind::Boolean,
            Node::Number(_) => ValueKind::Number,
            Node::String(_) => ValueKind::String,
            Node::Array(_) => ValueKind::Array,
            Node::Object(_) => ValueKind::Object,
        }
    }
}

/// The six kinds a decoded JSON value can take at runtime.
///
/// Used for the optional `(type)` suffix behind printed values; the
/// comparison itself dispatches by exhaustive pattern matching on
/// [`Node`] directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// The name used in type suffixes, e.g. `number` in `123 (number)`.
    pub(crate) fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_of_every_variant() {
        assert_eq!(Node::from_value(&json!(null)).kind(), ValueKind::Null);
        assert_eq!(Node::from_value(&json!(true)).kind(), ValueKind::Boolean);
        assert_eq!(Node::from_value(&json!(42)).kind(), ValueKind::Number);
        assert_eq!(Node::from_value(&json!("hi")).kind(), ValueKind::String);
        assert_eq!(Node::from_value(&json!([1])).kind(), ValueKind::Array);
        assert_eq!(Node::from_value(&json!({"a": 1})).kind(), ValueKind::Object);
    }

    #[test]
    fn suffix_names() {
        assert_eq!(ValueKind::Null.name(), "null");
        assert_eq!(ValueKind::Boolean.name(), "boolean");
        assert_eq!(ValueKind::Number.name(), "number");
        assert_eq!(ValueKind::String.name(), "string");
        assert_eq!(ValueKind::Array.name(), "array");
        assert_eq!(ValueKind::Object.name(), "object");
    }

    #[test]
    fn parsing_keeps_number_text_verbatim() {
        for text in ["1", "1.0", "1.50", "-0.0", "1e2", "1E2", "1e+2", "4.20e-2"] {
            match Node::parse(text.as_bytes()) {
                Ok(Node::Number(n)) => assert_eq!(n, text, "token {text:?}"),
                other => panic!("expected a number for {text:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn parsing_unescapes_strings_and_sorts_keys() {
        let node = Node::parse(br#"{"b":"A","a":[10, 2e3]}"#).unwrap();
        let expected = Node::Object(Entries::from([
            (
                Cow::Borrowed("a"),
                Node::Array(vec![
                    Node::Number(Cow::Borrowed("10")),
                    Node::Number(Cow::Borrowed("2e3")),
                ]),
            ),
            (Cow::Borrowed("b"), Node::String(Cow::Borrowed("A"))),
        ]));
        assert_eq!(node, expected);
    }

    #[test]
    fn parse_rejects_what_serde_json_rejects() {
        for bad in ["", "{", "[1,]", "01", "1.", "nul", "{}garbage"] {
            assert!(Node::parse(bad.as_bytes()).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn from_value_uses_the_stored_number_text() {
        let v: Value = serde_json::from_str("1.50").unwrap();
        assert_eq!(Node::from_value(&v), Node::Number(Cow::Borrowed("1.50")));
    }
}
