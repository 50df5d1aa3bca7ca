//! Pricing of a single grapheme cluster.
//!
//! Summing per code point is wrong for emoji sequences: a flag is two
//! regional indicators, a family is seven code points, and a text-default
//! pictograph turns wide when a presentation selector follows it. The rules
//! below are tried in order and the first one that matches decides the width.

use crate::options::WidthOptions;
use crate::tables::grapheme::GraphemeCat;
use crate::width_ty::{classify_with, WidthClass};

const ZWJ: char = '\u{200D}';

/// A cluster as seen by the sequence rules. The base is the first code point.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ClusterView<'a> {
    chars: &'a [char],
    cats: &'a [GraphemeCat],
}

impl<'a> ClusterView<'a> {
    fn new(chars: &'a [char], cats: &'a [GraphemeCat]) -> Self {
        debug_assert_eq!(chars.len(), cats.len());
        ClusterView { chars, cats }
    }

    fn base_cat(&self) -> Option<GraphemeCat> {
        self.cats.first().copied()
    }

    // Everything after the base code point.
    fn tail(&self) -> (&'a [char], &'a [GraphemeCat]) {
        let start = self.chars.len().min(1);
        (&self.chars[start..], &self.cats[start..])
    }
}

type SequenceRule = fn(&ClusterView<'_>, &WidthOptions) -> Option<WidthClass>;

/// Cluster pricing rules in priority order.
pub(crate) const SEQUENCE_RULES: &[(&str, SequenceRule)] = &[
    ("regional-indicator-pair", regional_indicator_pair),
    ("zwj-sequence", zwj_sequence),
    ("modified-pictograph", modified_pictograph),
    ("base", base_class),
];

fn regional_indicator_pair(view: &ClusterView<'_>, _: &WidthOptions) -> Option<WidthClass> {
    match view.cats {
        [GraphemeCat::GC_Regional_Indicator, GraphemeCat::GC_Regional_Indicator] => {
            Some(WidthClass::Wide)
        }
        _ => None,
    }
}

fn zwj_sequence(view: &ClusterView<'_>, _: &WidthOptions) -> Option<WidthClass> {
    if view.chars.contains(&ZWJ) {
        Some(WidthClass::Wide)
    } else {
        None
    }
}

fn modified_pictograph(view: &ClusterView<'_>, _: &WidthOptions) -> Option<WidthClass> {
    let (tail, tail_cats) = view.tail();
    if view.base_cat() == Some(GraphemeCat::GC_Extended_Pictographic)
        && !tail.is_empty()
        && tail_cats.iter().all(|&cat| cat == GraphemeCat::GC_Extend)
    {
        Some(WidthClass::Wide)
    } else {
        None
    }
}

fn base_class(view: &ClusterView<'_>, options: &WidthOptions) -> Option<WidthClass> {
    view.chars
        .first()
        .map(|&base| classify_with(base as u32, options))
}

fn first_match(view: &ClusterView<'_>, options: &WidthOptions) -> (&'static str, WidthClass) {
    for &(name, rule) in SEQUENCE_RULES {
        if let Some(class) = rule(view, options) {
            return (name, class);
        }
    }
    // only the empty cluster gets here
    ("empty", WidthClass::Zero)
}

/// Display width of one grapheme cluster, given its code points and their
/// break properties.
pub fn sequence_width(chars: &[char], cats: &[GraphemeCat], options: &WidthOptions) -> usize {
    first_match(&ClusterView::new(chars, cats), options).1.width()
}

#[cfg(test)]
pub(crate) fn matching_rule(
    chars: &[char],
    cats: &[GraphemeCat],
    options: &WidthOptions,
) -> &'static str {
    first_match(&ClusterView::new(chars, cats), options).0
}

#[cfg(test)]
mod tests {
    use super::{matching_rule, sequence_width, SEQUENCE_RULES};
    use crate::cluster_ty::ClusterCatVec;
    use crate::options::WidthOptions;
    use crate::segmenter::break_property;

    fn price(s: &str) -> (usize, &'static str) {
        let chars: Vec<char> = s.chars().collect();
        let cats: ClusterCatVec = chars.iter().map(|&ch| break_property(ch)).collect();
        let options = WidthOptions::default();
        (
            sequence_width(&chars, &cats, &options),
            matching_rule(&chars, &cats, &options),
        )
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<&str> = SEQUENCE_RULES.iter().map(|&(name, _)| name).collect();
        assert_eq!(
            vec!["regional-indicator-pair", "zwj-sequence", "modified-pictograph", "base"],
            names
        );
    }

    #[test]
    fn test_flag() {
        assert_eq!((2, "regional-indicator-pair"), price("\u{1F1E8}\u{1F1F3}"));
        // a lone indicator is priced by its own class
        assert_eq!((2, "base"), price("\u{1F1E8}"));
    }

    #[test]
    fn test_zwj_sequence() {
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}";
        assert_eq!((2, "zwj-sequence"), price(family));
        assert_eq!((2, "zwj-sequence"), price("\u{2764}\u{FE0F}\u{200D}\u{1F525}"));
        // any joiner widens the cluster, whatever the base
        assert_eq!((2, "zwj-sequence"), price("a\u{200D}"));
        assert_eq!((2, "zwj-sequence"), price("\u{915}\u{94D}\u{200D}"));
    }

    #[test]
    fn test_keycap_is_priced_by_base() {
        assert_eq!((1, "base"), price("7\u{20E3}"));
        assert_eq!((1, "base"), price("#\u{FE0F}\u{20E3}"));
        assert_eq!((1, "base"), price("7\u{FE0F}"));
    }

    #[test]
    fn test_modified_pictograph() {
        assert_eq!((2, "modified-pictograph"), price("\u{1F44B}\u{1F3FB}"));
        assert_eq!((2, "modified-pictograph"), price("\u{2764}\u{FE0F}"));
        assert_eq!((2, "modified-pictograph"), price("\u{00A9}\u{FE0F}"));
        // VS15 is an Extend code point like any other
        assert_eq!((2, "modified-pictograph"), price("\u{2764}\u{FE0E}"));
    }

    #[test]
    fn test_base_width() {
        assert_eq!((1, "base"), price("a"));
        assert_eq!((1, "base"), price("e\u{301}\u{302}"));
        assert_eq!((2, "base"), price("\u{4E2D}"));
        assert_eq!((2, "base"), price("\u{1F431}"));
        assert_eq!((1, "base"), price("\u{2764}"));
        assert_eq!((0, "base"), price("\r\n"));
        assert_eq!((0, "base"), price("\u{301}"));
        assert_eq!((2, "base"), price("\u{1100}\u{1161}\u{11A8}"));
    }

    #[test]
    fn test_prepend_base_prices_the_cluster() {
        // U+0600 is a format character, so the whole cluster is zero
        assert_eq!((0, "base"), price("\u{600}1"));
        assert_eq!((0, "base"), price("\u{600}"));
    }

    #[test]
    fn test_empty_cluster() {
        assert_eq!((0, "empty"), price(""));
    }
}
