use crate::options::WidthOptions;
use crate::segmenter::Graphemes;
use crate::width_ty::{classify, WidthClass};

/// Display width of `s` in columns, with default options.
pub fn string_width(s: &str) -> usize {
    string_width_with(s, &WidthOptions::default())
}

/// Display width of `s` in columns under `options`.
pub fn string_width_with(s: &str, options: &WidthOptions) -> usize {
    // Every ASCII cluster is one char, except CR LF whose two halves are
    // both zero width, so printable bytes can be counted directly.
    if s.is_ascii() {
        return s.bytes().filter(|&b| (0x20..0x7F).contains(&b)).count();
    }
    chars_width_with(s.chars(), options)
}

/// Display width of a `char` sequence under `options`.
pub fn chars_width_with<I>(chars: I, options: &WidthOptions) -> usize
where
    I: IntoIterator<Item = char>,
{
    let (clusters, width) = Graphemes::new(chars.into_iter())
        .fold((0usize, 0usize), |(clusters, width), cluster| {
            (clusters + 1, width + cluster.width_with(options))
        });
    tracing::trace!(clusters, width, "measured text");
    width
}

/// Display width of a sequence of raw code point values.
///
/// Values that are not Unicode scalar values (surrogates, anything above
/// U+10FFFF) are measured as U+FFFD REPLACEMENT CHARACTER, width 1 each.
pub fn codepoints_width(codes: &[u32]) -> usize {
    codepoints_width_with(codes, &WidthOptions::default())
}

/// [`codepoints_width`] under `options`.
pub fn codepoints_width_with(codes: &[u32], options: &WidthOptions) -> usize {
    let chars = codes.iter().map(|&code| {
        char::from_u32(code).unwrap_or_else(|| {
            tracing::debug!(code, "invalid scalar value replaced with U+FFFD");
            char::REPLACEMENT_CHARACTER
        })
    });
    chars_width_with(chars, options)
}

/// Display width of a single code point: 0, 1 or 2. No segmentation.
#[inline]
pub fn codepoint_width(code: u32) -> usize {
    classify(code).width()
}

/// Returns `true` iff `code` occupies two columns.
#[inline]
pub fn is_wide_char(code: u32) -> bool {
    classify(code) == WidthClass::Wide
}

/// Returns `true` iff `code` occupies no columns.
#[inline]
pub fn is_zero_width(code: u32) -> bool {
    classify(code) == WidthClass::Zero
}

#[cfg(test)]
mod tests {
    use super::{
        chars_width_with, codepoint_width, codepoints_width, is_wide_char, is_zero_width,
        string_width, string_width_with,
    };
    use crate::options::WidthOptions;
    use unicode_normalization::UnicodeNormalization;

    #[test]
    fn test_ascii_fast_path_matches_segmentation() {
        let samples = ["", "Hello", "Hello, World!", "a\r\nb", "tab\there", "\x1b[0m", "\x7f\0"];
        let options = WidthOptions::default();
        for s in samples {
            assert_eq!(chars_width_with(s.chars(), &options), string_width(s), "{:?}", s);
        }
    }

    #[test]
    fn test_cjk_options_widen_ambiguous() {
        // "±" and "α" are East Asian Ambiguous
        assert_eq!(2, string_width("\u{B1}\u{3B1}"));
        assert_eq!(4, string_width_with("\u{B1}\u{3B1}", &WidthOptions::cjk()));
        assert_eq!(4, string_width_with("\u{4E2D}\u{6587}", &WidthOptions::cjk()));
    }

    #[test]
    fn test_normalization_form_does_not_matter() {
        for s in ["\u{E9}", "\u{E4}\u{F6}\u{FC}", "\u{1EC7}", "\u{AC01}\u{D55C}"] {
            let nfc: String = s.nfc().collect();
            let nfd: String = s.nfd().collect();
            assert_eq!(string_width(&nfc), string_width(&nfd), "{:?}", s);
        }
    }

    #[test]
    fn test_codepoints_width_replaces_invalid_values() {
        assert_eq!(5, codepoints_width(&[0x48, 0x65, 0x6C, 0x6C, 0x6F]));
        assert_eq!(1, codepoints_width(&[0xD800]));
        assert_eq!(3, codepoints_width(&[0x61, 0x110000, 0xDFFF]));
        assert_eq!(2, codepoints_width(&[0x1F1E8, 0x1F1F3]));
        assert_eq!(0, codepoints_width(&[]));
    }

    #[test]
    fn test_single_codepoint_entry_points_agree() {
        for code in (0..0x11_0000).step_by(97).chain([0x200D, 0x4E00, u32::MAX]) {
            let width = codepoint_width(code);
            assert!(width <= 2);
            assert_eq!(width == 2, is_wide_char(code));
            assert_eq!(width == 0, is_zero_width(code));
        }
    }

    #[test]
    fn test_codepoint_entry_points_skip_clustering() {
        // a lone regional indicator is wide on its own
        assert_eq!(2, codepoint_width(0x1F1FA));
        assert!(is_zero_width(0x0300));
        assert!(!is_wide_char('A' as u32));
    }
}
