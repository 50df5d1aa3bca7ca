use crate::emoji_seq;
use crate::options::WidthOptions;
use crate::tables::grapheme::GraphemeCat;
use smallvec::SmallVec;
use std::fmt;

pub(crate) type ClusterCharVec = SmallVec<[char; 8]>;
pub(crate) type ClusterCatVec = SmallVec<[GraphemeCat; 8]>;

/// A run of code points that display as one visual unit.
///
/// Produced by [`Graphemes`](crate::Graphemes); the chars and their break
/// properties are kept side by side so the cluster can be priced without
/// another table lookup.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct GraphemeCluster {
    chars: ClusterCharVec,
    cats: ClusterCatVec,
}

impl GraphemeCluster {
    pub(crate) fn push(&mut self, ch: char, cat: GraphemeCat) {
        self.chars.push(ch);
        self.cats.push(cat);
    }

    /// The code points of this cluster, in input order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// The break property of each code point, parallel to [`Self::chars`].
    pub fn categories(&self) -> &[GraphemeCat] {
        &self.cats
    }

    /// Number of code points in the cluster.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` for the empty cluster; the segmenter never yields one.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The base code point, which decides the width of most clusters.
    pub fn base(&self) -> Option<char> {
        self.chars.first().copied()
    }

    /// Display width of the cluster with default options.
    pub fn width(&self) -> usize {
        self.width_with(&WidthOptions::default())
    }

    /// Display width of the cluster under `options`.
    pub fn width_with(&self, options: &WidthOptions) -> usize {
        emoji_seq::sequence_width(&self.chars, &self.cats, options)
    }
}

impl fmt::Display for GraphemeCluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.chars.iter() {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

impl fmt::Debug for GraphemeCluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GraphemeCluster('")?;
        for ch in self.chars.iter() {
            write!(f, "{}", ch.escape_debug())?;
        }
        write!(f, "')")
    }
}

#[cfg(test)]
mod tests {
    use super::GraphemeCluster;
    use crate::tables::grapheme::{grapheme_category, GraphemeCat};

    fn cluster(s: &str) -> GraphemeCluster {
        let mut cluster = GraphemeCluster::default();
        for ch in s.chars() {
            cluster.push(ch, grapheme_category(ch).2);
        }
        cluster
    }

    #[test]
    fn test_display() {
        assert_eq!("e\u{301}", cluster("e\u{301}").to_string());
        assert_eq!("\r\n", cluster("\r\n").to_string());
    }

    #[test]
    fn test_debug_fmt_cluster() {
        assert_eq!("GraphemeCluster('\\r\\n')", format!("{:?}", cluster("\r\n")));
        assert_eq!("GraphemeCluster('A')", format!("{:?}", cluster("A")));
    }

    #[test]
    fn test_parallel_categories() {
        let c = cluster("e\u{301}\u{200D}");
        assert_eq!(3, c.len());
        assert!(!c.is_empty());
        assert_eq!(&['e', '\u{301}', '\u{200D}'], c.chars());
        assert_eq!(
            &[GraphemeCat::GC_Any, GraphemeCat::GC_Extend, GraphemeCat::GC_ZWJ],
            c.categories()
        );
    }

    #[test]
    fn test_base_is_first_code_point() {
        assert_eq!(Some('a'), cluster("a\u{301}").base());
        assert_eq!(Some('\u{600}'), cluster("\u{600}1").base());
        assert_eq!(None, GraphemeCluster::default().base());
        assert!(GraphemeCluster::default().is_empty());
    }
}
