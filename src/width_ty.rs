use crate::options::{AmbiguousWidth, WidthOptions};
use crate::tables::{bsearch_range_table, bsearch_range_value_table, width};
use std::fmt;

/// The number of columns a code point occupies, quantized to three classes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WidthClass {
    /// Non-printing: controls, format characters, combining marks.
    Zero,
    /// A single column. Every code point not listed otherwise.
    #[default]
    Narrow,
    /// Two columns: East Asian Wide and Fullwidth, emoji presentation.
    Wide,
}

impl WidthClass {
    /// Returns the column count of this class: 0, 1 or 2.
    #[inline]
    pub const fn width(self) -> usize {
        match self {
            WidthClass::Zero => 0,
            WidthClass::Narrow => 1,
            WidthClass::Wide => 2,
        }
    }
}

impl fmt::Display for WidthClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WidthClass::Zero => "zero",
            WidthClass::Narrow => "narrow",
            WidthClass::Wide => "wide",
        };
        f.write_str(name)
    }
}

/// Classifies a single code point.
///
/// Total over `u32`: surrogates, unassigned and out-of-range values are
/// `Narrow`. East Asian Ambiguous code points are `Narrow` as well; use
/// [`classify_with`] to widen them.
#[inline]
pub fn classify(code: u32) -> WidthClass {
    if code < 0x7F {
        if code >= 0x20 {
            return WidthClass::Narrow;
        }
        return WidthClass::Zero;
    }
    bsearch_range_value_table(code, width::WIDTH_TABLE, WidthClass::Narrow).2
}

/// Classifies a single code point under the given options.
pub fn classify_with(code: u32, options: &WidthOptions) -> WidthClass {
    let class = classify(code);
    match (class, options.ambiguous) {
        (WidthClass::Narrow, AmbiguousWidth::Wide)
            if bsearch_range_table(code, width::AMBIGUOUS_TABLE) =>
        {
            WidthClass::Wide
        }
        _ => class,
    }
}

#[cfg(test)]
mod tests {
    use super::{classify, classify_with, WidthClass};
    use crate::options::WidthOptions;
    use crate::tables::width::{AMBIGUOUS_TABLE, WIDTH_TABLE};

    fn classify_linear(code: u32) -> WidthClass {
        WIDTH_TABLE
            .iter()
            .find(|&&(lo, hi, _)| lo <= code && code <= hi)
            .map_or(WidthClass::Narrow, |&(_, _, class)| class)
    }

    #[test]
    fn test_binary_search_matches_linear_scan() {
        for code in (0..0xEFFFF).step_by(377) {
            assert_eq!(classify_linear(code), classify(code), "U+{:04X}", code);
        }
        for &(lo, hi, class) in WIDTH_TABLE {
            assert_eq!(class, classify(lo));
            assert_eq!(class, classify(hi));
        }
    }

    #[test]
    fn test_ascii() {
        assert_eq!(WidthClass::Narrow, classify('a' as u32));
        assert_eq!(WidthClass::Narrow, classify('Z' as u32));
        assert_eq!(WidthClass::Narrow, classify('0' as u32));
        assert_eq!(WidthClass::Narrow, classify(' ' as u32));
        assert_eq!(WidthClass::Narrow, classify('~' as u32));
    }

    #[test]
    fn test_controls_are_zero() {
        for code in (0x00..=0x1F).chain(0x7F..=0x9F) {
            assert_eq!(WidthClass::Zero, classify(code), "U+{:04X}", code);
        }
    }

    #[test]
    fn test_zero_width_categories() {
        assert_eq!(WidthClass::Zero, classify(0x0300)); // combining grave
        assert_eq!(WidthClass::Zero, classify(0x0301));
        assert_eq!(WidthClass::Zero, classify(0x20DD)); // enclosing circle
        assert_eq!(WidthClass::Zero, classify(0x200B));
        assert_eq!(WidthClass::Zero, classify(0x200C));
        assert_eq!(WidthClass::Zero, classify(0x200D));
        assert_eq!(WidthClass::Zero, classify(0xFEFF));
        assert_eq!(WidthClass::Zero, classify(0x2028));
        assert_eq!(WidthClass::Zero, classify(0x2029));
        assert_eq!(WidthClass::Zero, classify(0xFE0F));
    }

    #[test]
    fn test_wide() {
        assert_eq!(WidthClass::Wide, classify(0x4E00));
        assert_eq!(WidthClass::Wide, classify(0x3042)); // hiragana a
        assert_eq!(WidthClass::Wide, classify(0x30A2)); // katakana a
        assert_eq!(WidthClass::Wide, classify(0xAC00));
        assert_eq!(WidthClass::Wide, classify(0xFF01));
        assert_eq!(WidthClass::Wide, classify(0xFF21));
        assert_eq!(WidthClass::Wide, classify(0x1F600));
        assert_eq!(WidthClass::Wide, classify(0x1F4A9));
        assert_eq!(WidthClass::Wide, classify(0x1F1FA));
        assert_eq!(WidthClass::Wide, classify(0x1F1F8));
        // unassigned, but inside a default-wide plane
        assert_eq!(WidthClass::Wide, classify(0x2FFFD));
    }

    #[test]
    fn test_zero_takes_precedence_over_wide() {
        // combining marks inside East Asian Wide blocks
        assert_eq!(WidthClass::Zero, classify(0x302A));
        assert_eq!(WidthClass::Zero, classify(0x3099));
    }

    #[test]
    fn test_text_default_emoji_are_narrow() {
        assert_eq!(WidthClass::Narrow, classify(0x00A9));
        assert_eq!(WidthClass::Narrow, classify(0x2764));
    }

    #[test]
    fn test_out_of_range_is_narrow() {
        assert_eq!(WidthClass::Narrow, classify(0xD800));
        assert_eq!(WidthClass::Narrow, classify(0xDFFF));
        assert_eq!(WidthClass::Narrow, classify(0x110000));
        assert_eq!(WidthClass::Narrow, classify(u32::MAX));
    }

    #[test]
    fn test_ambiguous_follows_options() {
        let cjk = WidthOptions::cjk();
        // U+00A1 INVERTED EXCLAMATION MARK, U+2460 CIRCLED DIGIT ONE
        for code in [0x00A1, 0x2460, 0x03B1] {
            assert_eq!(WidthClass::Narrow, classify(code));
            assert_eq!(WidthClass::Narrow, classify_with(code, &WidthOptions::default()));
            assert_eq!(WidthClass::Wide, classify_with(code, &cjk));
        }
        // ambiguous combining marks stay zero
        assert_eq!(WidthClass::Zero, classify_with(0x0300, &cjk));
        assert_eq!(WidthClass::Narrow, classify_with('a' as u32, &cjk));
    }

    #[test]
    fn test_ambiguous_ranges_are_otherwise_narrow() {
        for &(lo, hi) in AMBIGUOUS_TABLE {
            assert_eq!(WidthClass::Narrow, classify(lo), "U+{:04X}", lo);
            assert_eq!(WidthClass::Narrow, classify(hi), "U+{:04X}", hi);
        }
    }

    #[test]
    fn test_class_widths() {
        assert_eq!(0, WidthClass::Zero.width());
        assert_eq!(1, WidthClass::Narrow.width());
        assert_eq!(2, WidthClass::Wide.width());
        assert_eq!("wide", WidthClass::Wide.to_string());
    }
}
