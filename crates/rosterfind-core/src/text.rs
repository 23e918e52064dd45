// crates/rosterfind-core/src/text.rs
//
// Normalization and matching helpers. Everything here is pure and total:
// any input string maps to some output string, possibly empty.

use unicode_normalization::UnicodeNormalization;

/// Letter variants collapsed to one canonical form. The hamza-carrier
/// alif forms also decompose under NFD and lose their mark, so the first
/// three pairs only matter for inputs that skip decomposition.
const FOLD_PAIRS: [(char, char); 5] = [
    ('أ', 'ا'),
    ('إ', 'ا'),
    ('آ', 'ا'),
    ('ة', 'ه'),
    ('ى', 'ي'),
];

/// Combining marks stripped during normalization: the generic Latin
/// combining range plus the Arabic tashkil range and the superscript alef.
#[inline]
fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}' | '\u{064B}'..='\u{065F}' | '\u{0670}')
}

#[inline]
fn fold_variant(c: char) -> char {
    for (variant, canonical) in FOLD_PAIRS {
        if c == variant {
            return canonical;
        }
    }
    c
}

/// Canonicalize a raw name: NFD-decompose, drop combining marks, fold
/// letter variants, trim, and collapse internal whitespace runs to a
/// single space.
///
/// Idempotent: `normalize(normalize(s)) == normalize(s)`.
///
/// # Examples
/// ```rust
/// use rosterfind_core::normalize;
///
/// assert_eq!(normalize("  مُحَمَّد   أَحمد "), "محمد احمد");
/// assert_eq!(normalize("Aḥmad"), normalize("Ahmad"));
/// ```
pub fn normalize(raw: &str) -> String {
    let folded: String = raw
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(fold_variant)
        .collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract the match key: the first two whitespace-delimited tokens of a
/// normalized name (one token if that is all there is, empty if none).
///
/// Tokens past the second are discarded on purpose. A target given as
/// "first + father" name this way matches roster entries that append
/// further family-name components.
pub fn name_key(normalized: &str) -> String {
    let mut tokens = normalized.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(a), Some(b)) => format!("{a} {b}"),
        (Some(a), None) => a.to_string(),
        _ => String::new(),
    }
}

/// Decide whether two raw names denote the same person: case-folded
/// equality of their [`name_key`]s after [`normalize`].
///
/// Case folding is a no-op for Arabic; it is kept so mixed-script input
/// does not produce spurious misses. The compared keys are logged at
/// debug level so operators can inspect near-miss matches.
pub fn names_match(target: &str, candidate: &str) -> bool {
    let target_key = name_key(&normalize(target)).to_lowercase();
    let candidate_key = name_key(&normalize(candidate)).to_lowercase();
    tracing::debug!(%target_key, %candidate_key, "comparing name keys");
    target_key == candidate_key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_is_idempotent() {
        for s in [
            "مُحَمَّد أَحمد",
            "  أسامة   بن  زيد ",
            "Aḥmad",
            "",
            "   ",
            "फ़ीचर mixed العربية text",
        ] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn strips_tashkil_marks() {
        assert_eq!(normalize("مُحَمَّدٌ"), "محمد");
    }

    #[test]
    fn folds_letter_variants() {
        assert_eq!(normalize("أحمد"), "احمد");
        assert_eq!(normalize("إبراهيم"), "ابراهيم");
        assert_eq!(normalize("آمنة"), "امنه");
        assert_eq!(normalize("مصطفى"), "مصطفي");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize("  احمد \t  علي\n"), "احمد علي");
    }

    #[test]
    fn latin_diacritics_fold_too() {
        // Precomposed ḥ decomposes to h + combining dot below (U+0323),
        // which sits in the generic combining range.
        assert_eq!(normalize("Aḥmad"), "Ahmad");
    }

    #[test]
    fn name_key_takes_first_two_tokens() {
        assert_eq!(name_key("احمد علي حسن"), "احمد علي");
        assert_eq!(name_key("احمد علي"), "احمد علي");
        assert_eq!(name_key("احمد"), "احمد");
        assert_eq!(name_key(""), "");
    }

    #[test]
    fn trailing_tokens_do_not_affect_the_key() {
        assert_eq!(name_key("A B C"), name_key("A B"));
    }

    #[test]
    fn matching_ignores_diacritics_and_extra_names() {
        assert!(names_match("أحمد علي", "احمد علي حسن السيد"));
        assert!(names_match("Aḥmad Ali", "Ahmad Ali"));
        assert!(!names_match("احمد علي", "احمد حسن"));
    }

    #[test]
    fn matching_is_symmetric() {
        let pairs = [
            ("أحمد علي", "احمد علي حسن"),
            ("باسم عمر", "تامر حسن"),
            ("", "احمد"),
        ];
        for (a, b) in pairs {
            assert_eq!(names_match(a, b), names_match(b, a));
        }
    }
}
