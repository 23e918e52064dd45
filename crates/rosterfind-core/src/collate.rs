// crates/rosterfind-core/src/collate.rs
use crate::alphabet::Alphabet;
use crate::text::normalize;
use std::cmp::Ordering;

/// Total order over names derived from per-letter ordinals.
///
/// Word boundaries carry no ordering information: both names are
/// normalized and their spaces removed before the position-by-position
/// ordinal comparison. Ties through the shorter length fall back to
/// comparing lengths, the conventional lexicographic rule.
///
/// The search loop trusts this order to be monotonic with respect to the
/// roster's key space. Run [`audit::scan`](crate::audit::scan) against a
/// live source before relying on that.
#[derive(Debug, Clone, Copy)]
pub struct Collator<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Collator<'a> {
    pub fn new(alphabet: &'a Alphabet) -> Self {
        Collator { alphabet }
    }

    /// Compare two raw names under the alphabet's ordinal ranking.
    pub fn compare(&self, name1: &str, name2: &str) -> Ordering {
        let n1: String = normalize(name1).chars().filter(|c| *c != ' ').collect();
        let n2: String = normalize(name2).chars().filter(|c| *c != ' ').collect();

        for (c1, c2) in n1.chars().zip(n2.chars()) {
            let (v1, v2) = (self.alphabet.ordinal(c1), self.alphabet.ordinal(c2));
            if v1 != v2 {
                return v1.cmp(&v2);
            }
        }
        n1.chars().count().cmp(&n2.chars().count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collator() -> Collator<'static> {
        Collator::new(Alphabet::arabic())
    }

    #[test]
    fn orders_by_first_differing_ordinal() {
        let c = collator();
        assert_eq!(c.compare("احمد", "باسم"), Ordering::Less);
        assert_eq!(c.compare("يوسف", "سامي"), Ordering::Greater);
        assert_eq!(c.compare("ابراهيم خالد", "احمد سالم"), Ordering::Less);
    }

    #[test]
    fn compare_is_reflexive_and_diacritic_blind() {
        let c = collator();
        assert_eq!(c.compare("احمد علي", "احمد علي"), Ordering::Equal);
        assert_eq!(c.compare("أحمد", "احمد"), Ordering::Equal);
        assert_eq!(c.compare("مُحَمَّد", "محمد"), Ordering::Equal);
    }

    #[test]
    fn compare_is_antisymmetric() {
        let c = collator();
        let pairs = [("احمد", "باسم"), ("خالد يوسف", "خالد"), ("علي", "علي")];
        for (a, b) in pairs {
            assert_eq!(c.compare(a, b), c.compare(b, a).reverse());
        }
    }

    #[test]
    fn compare_is_transitive_on_distinct_ordinals() {
        let c = collator();
        let (a, b, d) = ("جمال", "حسين", "خالد");
        assert_eq!(c.compare(a, b), Ordering::Less);
        assert_eq!(c.compare(b, d), Ordering::Less);
        assert_eq!(c.compare(a, d), Ordering::Less);
    }

    #[test]
    fn shorter_prefix_sorts_first() {
        let c = collator();
        assert_eq!(c.compare("خالد", "خالد يوسف"), Ordering::Less);
    }

    #[test]
    fn spaces_are_not_significant() {
        let c = collator();
        assert_eq!(c.compare("عبد الله", "عبدالله"), Ordering::Equal);
    }
}
