// crates/rosterfind-core/src/alphabet.rs
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Integer rank of a letter for collation. Rank 0 is reserved for
/// characters outside the table and sorts before every ranked letter.
pub type Ordinal = u32;

/// Immutable letter→ordinal map used by the [`Collator`](crate::Collator).
///
/// Built once per process and shared by reference; it is configuration,
/// not state. Several visually distinct letters deliberately share one
/// ordinal: the hamza-carrier alif forms rank with bare alif, and the
/// alif-maqsura ranks with ya. That folding is orthographic, not a bug.
#[derive(Debug, Clone)]
pub struct Alphabet {
    ranks: HashMap<char, Ordinal>,
}

/// The 28 base letters in dictionary order.
const ARABIC_LETTERS: [char; 28] = [
    'ا', 'ب', 'ت', 'ث', 'ج', 'ح', 'خ', 'د', 'ذ', 'ر',
    'ز', 'س', 'ش', 'ص', 'ض', 'ط', 'ظ', 'ع', 'غ', 'ف',
    'ق', 'ك', 'ل', 'م', 'ن', 'ه', 'و', 'ي',
];

/// Variant forms sharing a base letter's rank. ة is folded to ه by
/// normalization before collation ever sees it; its entry only matters
/// for raw, un-normalized input.
const ARABIC_VARIANTS: [(char, Ordinal); 6] = [
    ('أ', 1),
    ('إ', 1),
    ('آ', 1),
    ('ء', 1),
    ('ة', 5),
    ('ى', 28),
];

static ARABIC: Lazy<Alphabet> = Lazy::new(|| {
    let mut ranks = HashMap::new();
    for (i, c) in ARABIC_LETTERS.iter().enumerate() {
        ranks.insert(*c, (i + 1) as Ordinal);
    }
    for (c, rank) in ARABIC_VARIANTS {
        ranks.insert(c, rank);
    }
    Alphabet { ranks }
});

impl Alphabet {
    /// The shared Arabic alphabet, ranked 1..=28 in dictionary order.
    pub fn arabic() -> &'static Alphabet {
        &ARABIC
    }

    /// Rank of a single character; 0 when the character has no entry.
    #[inline]
    pub fn ordinal(&self, c: char) -> Ordinal {
        self.ranks.get(&c).copied().unwrap_or(0)
    }

    /// Number of ranked entries (base letters plus variants).
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_letters_are_ranked_in_order() {
        let a = Alphabet::arabic();
        assert_eq!(a.ordinal('ا'), 1);
        assert_eq!(a.ordinal('ب'), 2);
        assert_eq!(a.ordinal('ي'), 28);
    }

    #[test]
    fn variants_share_their_base_rank() {
        let a = Alphabet::arabic();
        for c in ['أ', 'إ', 'آ', 'ء'] {
            assert_eq!(a.ordinal(c), a.ordinal('ا'), "variant {c} must rank with alif");
        }
        assert_eq!(a.ordinal('ى'), a.ordinal('ي'));
    }

    #[test]
    fn unranked_characters_sort_first() {
        let a = Alphabet::arabic();
        assert_eq!(a.ordinal('x'), 0);
        assert_eq!(a.ordinal(' '), 0);
        assert_eq!(a.ordinal('٣'), 0);
    }
}
