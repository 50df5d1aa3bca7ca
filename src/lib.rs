#![deny(unsafe_op_in_unsafe_fn)]
#![deny(missing_docs, missing_debug_implementations)]
//! Display width of Unicode text on fixed-width surfaces.
//!
//! Terminals and monospace layouts give every code point zero, one or two
//! columns, but what they actually draw is a grapheme cluster: a base
//! character together with its combining marks, or a whole emoji sequence.
//! This crate measures text the way such a renderer does.
//!
//! ```
//! use unicode_width_approximation::{get_codepoint_width, get_string_width};
//!
//! assert_eq!(5, get_string_width("Hello"));
//! assert_eq!(4, get_string_width("中文"));
//! assert_eq!(2, get_string_width("\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}"));
//! assert_eq!(0, get_codepoint_width(0x0300));
//! ```
//!
//! # Width rules
//!
//! A single code point is classified from static range tables:
//!
//! * zero columns for controls (C0, C1, DEL), format characters, line and
//!   paragraph separators, and nonspacing or enclosing marks;
//! * two columns for East Asian Wide and Fullwidth characters and for
//!   characters with default emoji presentation;
//! * one column for everything else, including unassigned, surrogate and
//!   out-of-range values. East Asian Ambiguous characters are one column
//!   unless [`WidthOptions::cjk`] is used.
//!
//! A string is split into extended grapheme clusters following UAX #29 and
//! each cluster is priced once:
//!
//! * a regional indicator pair (a flag) is two columns;
//! * a cluster containing a ZWJ is two columns;
//! * a pictograph followed only by modifiers, variation selectors or other
//!   extending code points is two columns;
//! * any other cluster is as wide as its first code point.
//!
//! Everything here is a pure function over immutable tables and can be
//! called from any number of threads.

pub(crate) mod tables;

pub(crate) mod width_ty;

pub(crate) mod cluster_ty;

pub(crate) mod segmenter;

pub(crate) mod emoji_seq;

pub(crate) mod aggregate;

pub(crate) mod display_width;

pub mod options;

pub use tables::grapheme::GraphemeCat;

pub use tables::width::UNICODE_VERSION;

pub use width_ty::{classify, classify_with, WidthClass};

pub use cluster_ty::GraphemeCluster;

pub use segmenter::{
    break_property, graphemes, BoundaryState, ClusterAction, Graphemes, StrGraphemes,
};

pub use emoji_seq::sequence_width;

pub use aggregate::{
    chars_width_with, codepoint_width, codepoints_width, codepoints_width_with, is_wide_char,
    is_zero_width, string_width, string_width_with,
};

pub use display_width::DisplayWidth;

pub use options::{AmbiguousWidth, AmbiguousWidthError, WidthOptions};

/// Total display width of `text` in columns.
pub fn get_string_width(text: &str) -> usize {
    string_width(text)
}

/// Display width of one code point: 0, 1 or 2.
pub fn get_codepoint_width(code: u32) -> usize {
    codepoint_width(code)
}
