//! Extended grapheme cluster segmentation (UAX #29).
//!
//! Segmentation is a fold over break properties: [`BoundaryState::advance`]
//! takes the state before a code point and returns the state after it, along
//! with whether a cluster boundary falls in front of it.

use crate::cluster_ty::GraphemeCluster;
use crate::tables::grapheme::{grapheme_category, GraphemeCat};

/// Returns the grapheme cluster break property of `c`.
#[inline]
pub fn break_property(c: char) -> GraphemeCat {
    grapheme_category(c).2
}

/// What to do with a code point after folding it into a [`BoundaryState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterAction {
    /// The code point extends the current cluster.
    Continue,
    /// The code point starts a new cluster.
    Split,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum PictState {
    #[default]
    None,
    /// Extended_Pictographic Extend*
    Pictographic,
    /// Extended_Pictographic Extend* ZWJ
    Joined,
}

/// Context carried between adjacent code points while segmenting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundaryState {
    prev: Option<GraphemeCat>,
    ri_odd: bool,
    pict: PictState,
}

impl BoundaryState {
    /// The start-of-text state. The first code point folded into it always
    /// yields [`ClusterAction::Split`].
    pub const fn new() -> Self {
        BoundaryState {
            prev: None,
            ri_odd: false,
            pict: PictState::None,
        }
    }

    /// Folds the next code point's break property into the state.
    pub fn advance(self, next: GraphemeCat) -> (BoundaryState, ClusterAction) {
        use GraphemeCat::*;

        let action = match self.prev {
            Some(prev) if self.joins(prev, next) => ClusterAction::Continue,
            _ => ClusterAction::Split,
        };
        let pict = match (next, self.pict) {
            (GC_Extended_Pictographic, _) => PictState::Pictographic,
            (GC_Extend, PictState::Pictographic) => PictState::Pictographic,
            (GC_ZWJ, PictState::Pictographic) => PictState::Joined,
            _ => PictState::None,
        };
        let ri_odd = next == GC_Regional_Indicator
            && !(self.prev == Some(GC_Regional_Indicator) && self.ri_odd);
        let state = BoundaryState {
            prev: Some(next),
            ri_odd,
            pict,
        };
        (state, action)
    }

    fn joins(&self, prev: GraphemeCat, next: GraphemeCat) -> bool {
        use GraphemeCat::*;

        match (prev, next) {
            (GC_CR, GC_LF) => true,                                   // GB3
            (GC_CR | GC_LF | GC_Control, _) => false,                 // GB4
            (_, GC_CR | GC_LF | GC_Control) => false,                 // GB5
            (GC_L, GC_L | GC_V | GC_LV | GC_LVT) => true,             // GB6
            (GC_LV | GC_V, GC_V | GC_T) => true,                      // GB7
            (GC_LVT | GC_T, GC_T) => true,                            // GB8
            (_, GC_Extend | GC_ZWJ) => true,                          // GB9
            (_, GC_SpacingMark) => true,                              // GB9a
            (GC_Prepend, _) => true,                                  // GB9b
            (GC_ZWJ, GC_Extended_Pictographic) => self.pict == PictState::Joined, // GB11
            (GC_Regional_Indicator, GC_Regional_Indicator) => self.ri_odd, // GB12, GB13
            _ => false,                                               // GB999
        }
    }
}

// Remembers the table range of the last lookup; runs of text from one
// script mostly stay inside a single range.
#[derive(Debug, Clone, Copy)]
struct CatCache {
    lo: u32,
    hi: u32,
    cat: GraphemeCat,
}

impl Default for CatCache {
    fn default() -> Self {
        CatCache {
            lo: 1,
            hi: 0,
            cat: GraphemeCat::GC_Any,
        }
    }
}

impl CatCache {
    #[inline]
    fn lookup(&mut self, c: char) -> GraphemeCat {
        let code = c as u32;
        if self.lo <= code && code <= self.hi {
            return self.cat;
        }
        let (lo, hi, cat) = grapheme_category(c);
        *self = CatCache { lo, hi, cat };
        cat
    }
}

/// An iterator over the grapheme clusters of a `char` sequence.
#[derive(Debug, Clone)]
pub struct Graphemes<I> {
    chars: I,
    pending: Option<(char, GraphemeCat)>,
    cache: CatCache,
}

impl<I> Graphemes<I>
where
    I: Iterator<Item = char>,
{
    /// Segments `chars` lazily.
    pub fn new(chars: I) -> Self {
        Graphemes {
            chars,
            pending: None,
            cache: CatCache::default(),
        }
    }
}

impl<I> Iterator for Graphemes<I>
where
    I: Iterator<Item = char>,
{
    type Item = GraphemeCluster;

    fn next(&mut self) -> Option<GraphemeCluster> {
        let (first, first_cat) = match self.pending.take() {
            Some(pending) => pending,
            None => {
                let ch = self.chars.next()?;
                (ch, self.cache.lookup(ch))
            }
        };
        let mut cluster = GraphemeCluster::default();
        cluster.push(first, first_cat);

        let (mut state, _) = BoundaryState::new().advance(first_cat);
        for ch in self.chars.by_ref() {
            let cat = self.cache.lookup(ch);
            let (next_state, action) = state.advance(cat);
            if action == ClusterAction::Split {
                self.pending = Some((ch, cat));
                break;
            }
            cluster.push(ch, cat);
            state = next_state;
        }
        Some(cluster)
    }
}

/// An iterator over the grapheme clusters of a string, as string slices.
#[derive(Debug, Clone)]
pub struct StrGraphemes<'a> {
    rest: &'a str,
    cache: CatCache,
}

impl<'a> Iterator for StrGraphemes<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let mut chars = self.rest.char_indices();
        let (_, first) = chars.next()?;
        let (mut state, _) = BoundaryState::new().advance(self.cache.lookup(first));
        let mut end = self.rest.len();
        for (idx, ch) in chars {
            let (next_state, action) = state.advance(self.cache.lookup(ch));
            if action == ClusterAction::Split {
                end = idx;
                break;
            }
            state = next_state;
        }
        let (cluster, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(cluster)
    }
}

/// Splits `s` into extended grapheme clusters.
pub fn graphemes(s: &str) -> StrGraphemes<'_> {
    StrGraphemes {
        rest: s,
        cache: CatCache::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::{break_property, graphemes, BoundaryState, ClusterAction, Graphemes};
    use crate::tables::grapheme::GraphemeCat::{self, *};
    use unicode_segmentation::UnicodeSegmentation;

    fn split(s: &str) -> Vec<&str> {
        graphemes(s).collect()
    }

    fn actions(cats: &[GraphemeCat]) -> Vec<ClusterAction> {
        let mut state = BoundaryState::new();
        cats.iter()
            .map(|&cat| {
                let (next, action) = state.advance(cat);
                state = next;
                action
            })
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(0, graphemes("").count());
        assert_eq!(0, Graphemes::new("".chars()).count());
    }

    #[test]
    fn test_first_code_point_always_splits() {
        for cat in [GC_Any, GC_Extend, GC_ZWJ, GC_LF, GC_Regional_Indicator] {
            assert_eq!(ClusterAction::Split, BoundaryState::new().advance(cat).1);
        }
    }

    #[test]
    fn test_crlf() {
        assert_eq!(vec!["\r\n", "\n", "\r"], split("\r\n\n\r"));
        assert_eq!(vec!["a", "\r\n", "b"], split("a\r\nb"));
    }

    #[test]
    fn test_controls_break_around() {
        assert_eq!(vec!["a", "\t", "b"], split("a\tb"));
        // a mark after a control does not attach to it
        assert_eq!(vec!["\n", "\u{301}"], split("\n\u{301}"));
        assert_eq!(vec!["a", "\0", "b"], split("a\0b"));
    }

    #[test]
    fn test_extend_attaches_to_base() {
        assert_eq!(vec!["e\u{301}\u{302}", "x"], split("e\u{301}\u{302}x"));
        assert_eq!(vec!["a\u{200D}", "b"], split("a\u{200D}b"));
    }

    #[test]
    fn test_lone_mark_is_its_own_cluster() {
        assert_eq!(vec!["\u{301}", "a"], split("\u{301}a"));
        assert_eq!(vec!["\u{301}\u{302}"], split("\u{301}\u{302}"));
    }

    #[test]
    fn test_spacing_mark_and_prepend() {
        assert_eq!(vec!["\u{E01}\u{E33}"], split("\u{E01}\u{E33}"));
        assert_eq!(vec!["\u{600}1", "2"], split("\u{600}12"));
    }

    #[test]
    fn test_zwj_sequences() {
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}";
        assert_eq!(vec![family], split(family));
        let rainbow = "\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}";
        assert_eq!(vec![rainbow, "!"], split(&format!("{rainbow}!")));
        // no pictograph before the joiner: GB11 does not apply
        assert_eq!(vec!["a\u{200D}", "\u{1F308}"], split("a\u{200D}\u{1F308}"));
    }

    #[test]
    fn test_adjacent_pictographs_split() {
        assert_eq!(
            vec!["\u{1F648}", "\u{1F649}", "\u{1F64A}"],
            split("\u{1F648}\u{1F649}\u{1F64A}")
        );
        assert_eq!(vec!["\u{1F44B}\u{1F3FB}"], split("\u{1F44B}\u{1F3FB}"));
    }

    #[test]
    fn test_regional_indicators_pair_up() {
        assert_eq!(vec!["\u{1F1E8}\u{1F1F3}"], split("\u{1F1E8}\u{1F1F3}"));
        assert_eq!(
            vec!["\u{1F1E8}\u{1F1F3}", "\u{1F1FA}\u{1F1F8}", "\u{1F1EF}"],
            split("\u{1F1E8}\u{1F1F3}\u{1F1FA}\u{1F1F8}\u{1F1EF}")
        );
        assert_eq!(
            actions(&[
                GC_Regional_Indicator,
                GC_Regional_Indicator,
                GC_Regional_Indicator,
                GC_Any,
                GC_Regional_Indicator,
            ]),
            vec![
                ClusterAction::Split,
                ClusterAction::Continue,
                ClusterAction::Split,
                ClusterAction::Split,
                ClusterAction::Split,
            ]
        );
    }

    #[test]
    fn test_hangul() {
        // L V T jamo compose one syllable
        assert_eq!(vec!["\u{1100}\u{1161}\u{11A8}"], split("\u{1100}\u{1161}\u{11A8}"));
        // LV + T, then a new syllable
        assert_eq!(vec!["\u{AC00}\u{11A8}", "\u{AC00}"], split("\u{AC00}\u{11A8}\u{AC00}"));
        assert_eq!(vec!["\u{D55C}", "\u{AD6D}", "\u{C5B4}"], split("한국어"));
        assert_eq!(
            actions(&[GC_LVT, GC_V]),
            vec![ClusterAction::Split, ClusterAction::Split]
        );
    }

    #[test]
    fn test_char_and_str_iterators_agree() {
        let text = "Hello, 世界 e\u{301} \u{1F1E8}\u{1F1F3}\r\n\u{1F44B}\u{1F3FB}";
        let owned: Vec<String> = Graphemes::new(text.chars()).map(|c| c.to_string()).collect();
        let borrowed: Vec<&str> = split(text);
        assert_eq!(borrowed, owned);
    }

    #[test]
    fn test_segmenting_is_deterministic() {
        let text = "\u{1F468}\u{200D}\u{1F469} a\u{301}\u{1F1E8}\u{1F1F3}\u{1F1FA}";
        assert_eq!(split(text), split(text));
    }

    #[test]
    fn test_categories_travel_with_clusters() {
        let clusters: Vec<_> = Graphemes::new("e\u{301}".chars()).collect();
        assert_eq!(1, clusters.len());
        assert_eq!(&[GC_Any, GC_Extend], clusters[0].categories());
        assert_eq!(GC_Extend, break_property('\u{301}'));
    }

    #[test]
    fn test_matches_unicode_segmentation() {
        let corpus = [
            "",
            "Hello, World!",
            "Hello, 世界",
            "日本語のテキスト",
            "ＡＢＣ",
            "e\u{301}\u{302}a\u{308}",
            "\u{301}leading mark",
            "line\r\nbreaks\n\r\r\n",
            "tab\tand\0nul\u{7F}",
            "\u{1F431}\u{1F648}\u{1F649}\u{1F64A}",
            "\u{1F44B}\u{1F3FB}\u{1F44B}\u{1F3FF}",
            "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}",
            "\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}",
            "\u{1F1E8}\u{1F1F3}\u{1F1FA}\u{1F1F8}\u{1F1EF}",
            "\u{2764}\u{FE0F}\u{2764}\u{FE0E}",
            "#\u{FE0F}\u{20E3}1\u{20E3}",
            "한국어 \u{1100}\u{1161}\u{11A8}\u{1100}",
            "\u{E01}\u{E33}\u{E40}\u{E01}",
            "\u{600}123",
            "a\u{200D}b\u{200C}c",
            "\u{1F9D1}\u{1F3FD}\u{200D}\u{1F52C}",
            "\u{FEFF}bom\u{200B}zwsp",
        ];
        for text in corpus {
            let expected: Vec<&str> = text.graphemes(true).collect();
            assert_eq!(expected, split(text), "segmenting {:?}", text);
        }
    }

    #[test]
    fn test_indic_conjuncts_are_not_joined() {
        // KA VIRAMA SSA: unicode-segmentation keeps the conjunct together
        // (GB9c), this engine breaks before the second consonant.
        let conjunct = "\u{915}\u{94D}\u{937}";
        assert_eq!(vec![conjunct], conjunct.graphemes(true).collect::<Vec<_>>());
        assert_eq!(vec!["\u{915}\u{94D}", "\u{937}"], split(conjunct));
    }
}
