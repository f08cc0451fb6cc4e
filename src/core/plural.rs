//! Plural normalization
//!
//! Maps a word to a best-effort singular form so that a plural and its
//! singular share one effective length and one identity. This is a heuristic
//! rule cascade, not a dictionary-backed morphology engine.
//!
//! The cascade is the ordered [`RULES`] table: each rule either claims the
//! word (returning `Some(result)`) or passes it on. The first claim wins.

use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// Known irregular plurals, exact match only
static IRREGULAR_PLURALS: LazyLock<FxHashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("children", "child"),
        ("mice", "mouse"),
        ("men", "man"),
        ("women", "woman"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("geese", "goose"),
        ("people", "person"),
        ("leaves", "leaf"),
        ("knives", "knife"),
        ("wives", "wife"),
        ("lives", "life"),
        ("halves", "half"),
        ("shelves", "shelf"),
        ("wolves", "wolf"),
        ("calves", "calf"),
        ("elves", "elf"),
        ("loaves", "loaf"),
        ("thieves", "thief"),
        ("cities", "city"),
        ("countries", "country"),
        ("stories", "story"),
        ("studies", "study"),
        ("bodies", "body"),
        ("families", "family"),
        ("parties", "party"),
        ("dictionaries", "dictionary"),
        ("universities", "university"),
    ]
    .into_iter()
    .collect()
});

/// Two-letter endings of `-s` words that are taken to be singular already
const NON_PLURAL_ENDINGS: &[&str] = &["ss", "us", "is", "as", "os"];

/// Literal forms carved out of [`NON_PLURAL_ENDINGS`]; they lose a trailing "es"
const NON_PLURAL_EXCEPTIONS: &[&str] = &["classes", "focuses"];

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// One step of the singularization cascade
///
/// `apply` receives the lower-cased word and returns `Some(singular)` when
/// the rule claims it.
#[derive(Debug, Clone, Copy)]
pub struct PluralRule {
    pub name: &'static str,
    pub apply: fn(&str) -> Option<String>,
}

/// The cascade, evaluated top to bottom
pub const RULES: &[PluralRule] = &[
    PluralRule {
        name: "too-short",
        apply: too_short,
    },
    PluralRule {
        name: "irregular",
        apply: irregular,
    },
    PluralRule {
        name: "ies",
        apply: ies_suffix,
    },
    PluralRule {
        name: "ves",
        apply: ves_suffix,
    },
    PluralRule {
        name: "es",
        apply: es_suffix,
    },
    PluralRule {
        name: "s",
        apply: s_suffix,
    },
];

#[inline]
fn char_len(word: &str) -> usize {
    word.chars().count()
}

#[inline]
fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch)
}

fn too_short(word: &str) -> Option<String> {
    (char_len(word) <= 3).then(|| word.to_string())
}

fn irregular(word: &str) -> Option<String> {
    IRREGULAR_PLURALS.get(word).map(|&singular| singular.to_string())
}

/// cities -> city; a vowel before "ies" passes the word on
fn ies_suffix(word: &str) -> Option<String> {
    if char_len(word) <= 4 {
        return None;
    }
    let stem = word.strip_suffix("ies")?;
    let last = stem.chars().last()?;
    (!is_vowel(last)).then(|| format!("{stem}y"))
}

/// wolves -> wolf, ...ieves -> ...ife, ...lfves -> ...lfe
fn ves_suffix(word: &str) -> Option<String> {
    if char_len(word) <= 4 {
        return None;
    }
    let stem = word.strip_suffix("ves")?;

    if word.ends_with("lves") || word.ends_with("rves") {
        return Some(format!("{stem}f"));
    }
    if let Some(base) = stem.strip_suffix("ie") {
        return Some(format!("{base}ife"));
    }
    if stem.ends_with("lf") || stem.ends_with("rf") {
        return Some(format!("{stem}e"));
    }
    None
}

/// boxes -> box, churches -> church, heroes -> hero
fn es_suffix(word: &str) -> Option<String> {
    if char_len(word) <= 4 {
        return None;
    }
    let stem = word.strip_suffix("es")?;
    match stem.chars().last()? {
        's' | 'x' | 'z' | 'h' | 'o' => Some(stem.to_string()),
        _ => None,
    }
}

/// Generic trailing "s". Claims every word ending in "s", including
/// vowel-final stems such as "trees".
fn s_suffix(word: &str) -> Option<String> {
    if char_len(word) <= 3 {
        return None;
    }
    let stem = word.strip_suffix('s')?;

    if NON_PLURAL_ENDINGS.iter().any(|ending| word.ends_with(ending)) {
        if NON_PLURAL_EXCEPTIONS
            .iter()
            .any(|exception| word.ends_with(exception))
        {
            return word.strip_suffix("es").map(str::to_string);
        }
        return Some(word.to_string());
    }

    if char_len(stem) < 3 {
        return Some(word.to_string());
    }
    Some(stem.to_string())
}

/// Find the rule that decides `word`, with its result
///
/// Returns `None` when no rule claims the word, in which case the singular
/// form is the lower-cased word itself.
#[must_use]
pub fn matched_rule(word: &str) -> Option<(&'static str, String)> {
    let lower = word.to_lowercase();
    RULES
        .iter()
        .find_map(|rule| (rule.apply)(&lower).map(|singular| (rule.name, singular)))
}

/// Get the singular form of a word
///
/// Always lower-cases. Words that no rule claims come back unchanged.
///
/// # Examples
/// ```
/// use wordle_filter::core::singular_form;
///
/// assert_eq!(singular_form("cities"), "city");
/// assert_eq!(singular_form("Wolves"), "wolf");
/// assert_eq!(singular_form("boxes"), "box");
/// assert_eq!(singular_form("glass"), "glass");
/// ```
#[must_use]
pub fn singular_form(word: &str) -> String {
    match matched_rule(word) {
        Some((name, singular)) => {
            log::trace!("singular_form({word}) -> {singular} [{name}]");
            singular
        }
        None => word.to_lowercase(),
    }
}

/// Character length of the singular form
///
/// # Examples
/// ```
/// use wordle_filter::core::effective_length;
///
/// assert_eq!(effective_length("cities"), 4);
/// assert_eq!(effective_length("cat"), 3);
/// ```
#[must_use]
pub fn effective_length(word: &str) -> usize {
    char_len(&singular_form(word))
}

/// Whether normalization changes the (lower-cased) word
#[must_use]
pub fn is_plural(word: &str) -> bool {
    singular_form(word) != word.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_name(word: &str) -> Option<&'static str> {
        matched_rule(word).map(|(name, _)| name)
    }

    #[test]
    fn rule_table_order() {
        let names: Vec<_> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(names, ["too-short", "irregular", "ies", "ves", "es", "s"]);
    }

    #[test]
    fn short_words_untouched() {
        assert_eq!(singular_form("bus"), "bus");
        assert_eq!(singular_form("men"), "men"); // shadowed by the length guard
        assert_eq!(singular_form("as"), "as");
        assert_eq!(singular_form(""), "");
        assert_eq!(rule_name("its"), Some("too-short"));
    }

    #[test]
    fn irregular_lookup() {
        assert_eq!(singular_form("children"), "child");
        assert_eq!(singular_form("mice"), "mouse");
        assert_eq!(singular_form("people"), "person");
        assert_eq!(singular_form("knives"), "knife");
        assert_eq!(singular_form("Universities"), "university");
        assert_eq!(rule_name("teeth"), Some("irregular"));
    }

    #[test]
    fn ies_rule() {
        assert_eq!(ies_suffix("puppies"), Some("puppy".to_string()));
        assert_eq!(ies_suffix("berries"), Some("berry".to_string()));
        // Vowel before "ies" passes on to the generic "s" rule
        assert_eq!(ies_suffix("kaies"), None);
        assert_eq!(singular_form("kaies"), "kaie");
        // Length guard
        assert_eq!(ies_suffix("ties"), None);
    }

    #[test]
    fn ves_rule() {
        assert_eq!(ves_suffix("scarves"), Some("scarf".to_string()));
        assert_eq!(ves_suffix("selves"), Some("self".to_string()));
        assert_eq!(ves_suffix("kieves"), Some("kife".to_string()));
        // Stem ending in "lf"/"rf" keeps its f and gains an e
        assert_eq!(ves_suffix("wolfves"), Some("wolfe".to_string()));
        assert_eq!(ves_suffix("dwarfves"), Some("dwarfe".to_string()));
        assert_eq!(rule_name("wolfves"), Some("ves"));
        assert_eq!(ves_suffix("caves"), None);
        assert_eq!(singular_form("caves"), "cave");
    }

    #[test]
    fn es_rule() {
        assert_eq!(es_suffix("boxes"), Some("box".to_string()));
        assert_eq!(es_suffix("churches"), Some("church".to_string()));
        assert_eq!(es_suffix("dishes"), Some("dish".to_string()));
        assert_eq!(es_suffix("buzzes"), Some("buzz".to_string()));
        assert_eq!(es_suffix("heroes"), Some("hero".to_string()));
        assert_eq!(es_suffix("classes"), Some("class".to_string()));
        assert_eq!(es_suffix("tables"), None);
        assert_eq!(singular_form("tables"), "table");
    }

    #[test]
    fn s_rule_strips() {
        assert_eq!(singular_form("cats"), "cat");
        assert_eq!(singular_form("apples"), "apple");
        assert_eq!(rule_name("cats"), Some("s"));
    }

    #[test]
    fn s_rule_exclusions() {
        for word in ["glass", "focus", "basis", "atlas", "kudos"] {
            assert_eq!(singular_form(word), word);
            assert!(!is_plural(word));
            assert_eq!(rule_name(word), Some("s"));
        }
    }

    #[test]
    fn s_rule_literal_exceptions_only_under_exclusion() {
        // "classes" ends in "es", not in an excluded ending, so the literal
        // carve-out never decides it; the "es" rule already has.
        assert_eq!(rule_name("classes"), Some("es"));
        assert_eq!(singular_form("classes"), "class");
        assert_eq!(singular_form("focuses"), "focus");
    }

    #[test]
    fn s_rule_short_stem_kept() {
        // Stem of three characters is accepted
        assert_eq!(singular_form("pens"), "pen");
    }

    #[test]
    fn s_rule_accepts_vowel_stems() {
        // Known limitation: any non-excluded trailing "s" is taken as plural,
        // whatever precedes it
        assert_eq!(singular_form("trees"), "tree");
        assert_eq!(singular_form("news"), "new");
        assert_eq!(singular_form("lens"), "len");
        assert!(is_plural("news"));
        // Endings in the exclusion set are spared
        assert_eq!(singular_form("ideas"), "ideas");
        assert_eq!(singular_form("menus"), "menus");
        assert_eq!(singular_form("yes"), "yes");
    }

    #[test]
    fn unmatched_words_lowercased() {
        assert_eq!(singular_form("CRANE"), "crane");
        assert_eq!(rule_name("crane"), None);
        assert_eq!(singular_form("a-b-c-d"), "a-b-c-d");
    }

    #[test]
    fn effective_length_uses_singular() {
        assert_eq!(effective_length("cities"), 4);
        assert_eq!(effective_length("wolves"), 4);
        assert_eq!(effective_length("crane"), 5);
        assert_eq!(effective_length(""), 0);
    }

    #[test]
    fn is_plural_ignores_case() {
        assert!(is_plural("Boxes"));
        assert!(!is_plural("BOX"));
    }
}
