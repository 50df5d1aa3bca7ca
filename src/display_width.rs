use crate::aggregate::string_width_with;
use crate::options::WidthOptions;
use crate::width_ty::classify_with;

/// Methods for determining the displayed width of text.
pub trait DisplayWidth {
    /// Returns the displayed width in columns, measuring East Asian
    /// Ambiguous characters as one column.
    fn display_width(&self) -> usize;

    /// Returns the displayed width in columns, measuring East Asian
    /// Ambiguous characters as two columns, as CJK terminals do.
    fn display_width_cjk(&self) -> usize;
}

impl DisplayWidth for str {
    #[inline]
    fn display_width(&self) -> usize {
        string_width_with(self, &WidthOptions::new())
    }

    #[inline]
    fn display_width_cjk(&self) -> usize {
        string_width_with(self, &WidthOptions::cjk())
    }
}

impl DisplayWidth for char {
    #[inline]
    fn display_width(&self) -> usize {
        classify_with(*self as u32, &WidthOptions::new()).width()
    }

    #[inline]
    fn display_width_cjk(&self) -> usize {
        classify_with(*self as u32, &WidthOptions::cjk()).width()
    }
}

#[cfg(test)]
mod tests {
    use super::DisplayWidth;

    #[test]
    fn test_str() {
        assert_eq!(11, "Hello, 世界".display_width());
        assert_eq!(2, "\u{1F1E8}\u{1F1F3}".display_width());
        assert_eq!(1, "\u{2460}".display_width());
        assert_eq!(2, "\u{2460}".display_width_cjk());
        assert_eq!(String::from("abc").display_width(), 3);
    }

    #[test]
    fn test_char() {
        assert_eq!(0, '\u{301}'.display_width());
        assert_eq!(1, 'a'.display_width_cjk());
        assert_eq!(2, '\u{FF21}'.display_width());
        assert_eq!(1, '\u{3B1}'.display_width());
        assert_eq!(2, '\u{3B1}'.display_width_cjk());
    }
}
