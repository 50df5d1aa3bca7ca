pub(crate) mod grapheme;
pub(crate) mod width;

use std::cmp::Ordering::{Equal, Greater, Less};

/// Finds the entry of `table` containing `code`.
///
/// When no entry matches, returns the bounds of the gap between the
/// neighbouring entries together with `default`.
pub(crate) fn bsearch_range_value_table<T: Copy>(
    code: u32,
    table: &[(u32, u32, T)],
    default: T,
) -> (u32, u32, T) {
    match table.binary_search_by(|&(lo, hi, _)| {
        if lo <= code && code <= hi {
            Equal
        } else if hi < code {
            Less
        } else {
            Greater
        }
    }) {
        Ok(idx) => table[idx],
        Err(idx) => {
            let lower = if idx > 0 { table[idx - 1].1 + 1 } else { 0 };
            let upper = if idx < table.len() {
                table[idx].0 - 1
            } else {
                u32::MAX
            };
            (lower, upper, default)
        }
    }
}

pub(crate) fn bsearch_range_table(code: u32, table: &[(u32, u32)]) -> bool {
    table
        .binary_search_by(|&(lo, hi)| {
            if lo <= code && code <= hi {
                Equal
            } else if hi < code {
                Less
            } else {
                Greater
            }
        })
        .is_ok()
}

const fn value_ranges_are_disjoint<T>(table: &[(u32, u32, T)]) -> bool {
    let mut idx = 0;
    while idx < table.len() {
        if table[idx].0 > table[idx].1 {
            return false;
        }
        if idx > 0 && table[idx - 1].1 >= table[idx].0 {
            return false;
        }
        idx += 1;
    }
    true
}

const fn ranges_are_disjoint(table: &[(u32, u32)]) -> bool {
    let mut idx = 0;
    while idx < table.len() {
        if table[idx].0 > table[idx].1 {
            return false;
        }
        if idx > 0 && table[idx - 1].1 >= table[idx].0 {
            return false;
        }
        idx += 1;
    }
    true
}

// Lookups rely on sorted, non-overlapping ranges; a bad table fails the build.
const _: () = assert!(value_ranges_are_disjoint(width::WIDTH_TABLE));
const _: () = assert!(ranges_are_disjoint(width::AMBIGUOUS_TABLE));
const _: () = assert!(value_ranges_are_disjoint(grapheme::GRAPHEME_CAT_TABLE));

#[cfg(test)]
mod tests {
    use super::grapheme::{grapheme_category, GraphemeCat};
    use super::{bsearch_range_table, bsearch_range_value_table};

    const TABLE: &[(u32, u32, u8)] = &[(0x10, 0x1F, 1), (0x30, 0x30, 2), (0x40, 0x4F, 3)];

    #[test]
    fn test_hit_returns_entry() {
        assert_eq!((0x10, 0x1F, 1), bsearch_range_value_table(0x10, TABLE, 0));
        assert_eq!((0x10, 0x1F, 1), bsearch_range_value_table(0x1F, TABLE, 0));
        assert_eq!((0x30, 0x30, 2), bsearch_range_value_table(0x30, TABLE, 0));
    }

    #[test]
    fn test_miss_returns_gap() {
        assert_eq!((0x00, 0x0F, 0), bsearch_range_value_table(0x05, TABLE, 0));
        assert_eq!((0x20, 0x2F, 0), bsearch_range_value_table(0x20, TABLE, 0));
        assert_eq!((0x31, 0x3F, 0), bsearch_range_value_table(0x35, TABLE, 0));
        assert_eq!((0x50, u32::MAX, 0), bsearch_range_value_table(0x50, TABLE, 0));
        assert_eq!(
            (0x50, u32::MAX, 0),
            bsearch_range_value_table(u32::MAX, TABLE, 0)
        );
    }

    #[test]
    fn test_range_table_membership() {
        let table = &[(0x10, 0x1F), (0x40, 0x40)];
        assert!(bsearch_range_table(0x15, table));
        assert!(bsearch_range_table(0x40, table));
        assert!(!bsearch_range_table(0x20, table));
        assert!(!bsearch_range_table(0x41, table));
        assert!(!bsearch_range_table(0x0, &[]));
    }

    #[test]
    fn test_grapheme_category_samples() {
        assert_eq!(GraphemeCat::GC_Any, grapheme_category('a').2);
        assert_eq!(GraphemeCat::GC_CR, grapheme_category('\r').2);
        assert_eq!(GraphemeCat::GC_LF, grapheme_category('\n').2);
        assert_eq!(GraphemeCat::GC_Control, grapheme_category('\t').2);
        assert_eq!(GraphemeCat::GC_Extend, grapheme_category('\u{0301}').2);
        assert_eq!(GraphemeCat::GC_Extend, grapheme_category('\u{FE0F}').2);
        assert_eq!(GraphemeCat::GC_Extend, grapheme_category('\u{1F3FB}').2);
        assert_eq!(GraphemeCat::GC_ZWJ, grapheme_category('\u{200D}').2);
        assert_eq!(
            GraphemeCat::GC_Regional_Indicator,
            grapheme_category('\u{1F1E8}').2
        );
        assert_eq!(GraphemeCat::GC_Prepend, grapheme_category('\u{0600}').2);
        assert_eq!(GraphemeCat::GC_SpacingMark, grapheme_category('\u{0E33}').2);
        assert_eq!(
            GraphemeCat::GC_Extended_Pictographic,
            grapheme_category('\u{1F600}').2
        );
        assert_eq!(
            GraphemeCat::GC_Extended_Pictographic,
            grapheme_category('\u{00A9}').2
        );
        assert_eq!(GraphemeCat::GC_L, grapheme_category('\u{1100}').2);
        assert_eq!(GraphemeCat::GC_V, grapheme_category('\u{1161}').2);
        assert_eq!(GraphemeCat::GC_T, grapheme_category('\u{11A8}').2);
        assert_eq!(GraphemeCat::GC_LV, grapheme_category('\u{AC00}').2);
        assert_eq!(GraphemeCat::GC_LVT, grapheme_category('\u{AC01}').2);
    }

    #[test]
    fn test_ascii_letters_share_one_gap() {
        let (lo, hi, cat) = grapheme_category('m');
        assert_eq!(GraphemeCat::GC_Any, cat);
        assert!(lo <= 'A' as u32 && 'z' as u32 <= hi);
    }
}
