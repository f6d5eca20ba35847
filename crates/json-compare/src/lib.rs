//! json-compare — structural comparison of JSON documents with an
//! annotated, human-readable rendering of the differences.
//!
//! Two documents are compared in a single recursive walk that produces both
//! a [`Difference`] classification and a rendering of the comparison, in a
//! JSON-style or YAML-style dialect, with optional begin/end markers around
//! matching, added, removed and changed regions and optional inline type
//! annotations.
//!
//! ```
//! use json_compare::{compare, Difference, Options};
//!
//! let a = br#"{"a": 123, "b": 456, "c": [7, 8, 9]}"#;
//! let b = br#"{"a": 123, "c": [7, 8]}"#;
//!
//! let (diff, text) = compare(a, b, &Options::default());
//! assert_eq!(diff, Difference::SupersetMatch);
//! assert!(text.contains("456"));
//! ```
//!
//! The rendering is meant for people, not machines: it resembles
//! pretty-printed JSON, but with both sides of every change inlined it is
//! not itself valid JSON.
//!
//! The walk recurses per nesting level and leaves depth limits to the
//! caller: a pathologically nested document can exhaust the stack.

mod dialect;
mod render;
mod value;

pub mod diff;
pub mod options;

pub use diff::{compare, compare_values, Difference};
pub use options::{Options, Output, Tag};
