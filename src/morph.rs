//! The templatic morphology engine.
//!
//! A pattern is a template over the three slot markers ف/ع/ل; generation
//! substitutes the root consonants into the slots and copies every other
//! character verbatim, then runs the word through a fixed-order pipeline of
//! irregularity rewrites keyed off the letter classes of the root. Each
//! rewrite consumes the output of the previous one and is a no-op when its
//! trigger is absent, so the rules compose sequentially.
//!
//! Validation is the inverse direction: a candidate word is compared against
//! the generated form of every supplied scheme, exactly or with the tashkeel
//! stripped from both sides, with the [`RootIndex`] acting as a cache that is
//! populated as a side effect of successful validation.

use lazy_static::lazy_static;
use regex::Regex;

use crate::catalog::Scheme;
use crate::lexicon::{Derivative, RootIndex};

// ------------- Letters -------------
pub const FIRST_SLOT: char = 'ف';
pub const SECOND_SLOT: char = 'ع';
pub const THIRD_SLOT: char = 'ل';

pub const ALIF: char = 'ا';
pub const ALIF_MADDA: char = 'آ';
pub const WAW: char = 'و';
pub const YA: char = 'ي';
pub const TA: char = 'ت';
pub const HAMZA: char = 'ء';
pub const HAMZA_ON_ALIF: char = 'أ';
pub const HAMZA_UNDER_ALIF: char = 'إ';
pub const HAMZA_ON_WAW: char = 'ؤ';
pub const HAMZA_ON_YA: char = 'ئ';

// ------------- Tashkeel -------------
pub const FATHATAN: char = '\u{064B}';
pub const DAMMATAN: char = '\u{064C}';
pub const KASRATAN: char = '\u{064D}';
pub const FATHA: char = '\u{064E}';
pub const DAMMA: char = '\u{064F}';
pub const KASRA: char = '\u{0650}';
pub const SHADDA: char = '\u{0651}';
pub const SUKUN: char = '\u{0652}';

/// The definite-article prefix.
pub const ARTICLE: &str = "ال";

// Letters that assimilate the article into a gemination mark.
const SUN_LETTERS: [char; 14] = [
    'ت', 'ث', 'د', 'ذ', 'ر', 'ز', 'س', 'ش', 'ص', 'ض', 'ط', 'ظ', 'ل', 'ن',
];

pub fn is_glide(c: char) -> bool {
    matches!(c, WAW | YA)
}
pub fn is_hamza(c: char) -> bool {
    matches!(
        c,
        HAMZA | HAMZA_ON_ALIF | HAMZA_UNDER_ALIF | HAMZA_ON_WAW | HAMZA_ON_YA | ALIF_MADDA
    )
}
pub fn is_sun_letter(c: char) -> bool {
    SUN_LETTERS.contains(&c)
}

// ------------- Templates -------------
/// The vocalized templates of the built-in schemes.
pub mod template {
    pub const ACTIVE_PARTICIPLE: &str = "فَاعِل";
    pub const PASSIVE_PARTICIPLE: &str = "مَفْعُول";
    pub const MASDAR: &str = "اِفْتِعَال";
    pub const PAST: &str = "فَعَلَ";
    pub const IMPERFECT: &str = "يَفْعَلُ";
    pub const PLACE_NOUN: &str = "مَفْعَل";
    pub const REQUEST: &str = "اِسْتِفْعَال";
}

/// Closed enumeration of the recognized pattern templates. Irregularity
/// rewrites are selected by matching on this rather than on raw strings; an
/// unrecognized template still gets slot substitution, gemination and the
/// definite article through the `Custom` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    ActiveParticiple,
    PassiveParticiple,
    Masdar,
    Past,
    Imperfect,
    PlaceNoun,
    Request,
    Custom,
}
impl PatternKind {
    pub fn of(pattern: &str) -> Self {
        match pattern {
            template::ACTIVE_PARTICIPLE => Self::ActiveParticiple,
            template::PASSIVE_PARTICIPLE => Self::PassiveParticiple,
            template::MASDAR => Self::Masdar,
            template::PAST => Self::Past,
            template::IMPERFECT => Self::Imperfect,
            template::PLACE_NOUN => Self::PlaceNoun,
            template::REQUEST => Self::Request,
            _ => Self::Custom,
        }
    }
}

lazy_static! {
    static ref TASHKEEL: Regex = Regex::new("[\u{064B}-\u{0652}]").unwrap();
}

/// Remove all combining diacritics, for loose comparison of a vocalized form
/// against an unvocalized or partially vocalized candidate.
pub fn strip_tashkeel(text: &str) -> String {
    TASHKEEL.replace_all(text, "").into_owned()
}

fn consonants(root: &str) -> Option<(char, char, char)> {
    let mut chars = root.chars();
    match (chars.next(), chars.next(), chars.next(), chars.next()) {
        (Some(c1), Some(c2), Some(c3), None) => Some((c1, c2, c3)),
        _ => None,
    }
}

// ------------- Generation -------------
/// Generate the surface word for a (root, pattern) pair. A root that is not
/// exactly three characters yields an empty string: a signaled "cannot
/// generate", never a panic.
pub fn apply_scheme(root: &str, pattern: &str, definite: bool) -> String {
    let Some((c1, c2, c3)) = consonants(root) else {
        return String::new();
    };
    let mut word = String::with_capacity(pattern.len() + 8);
    for ch in pattern.chars() {
        match ch {
            FIRST_SLOT => word.push(c1),
            SECOND_SLOT => word.push(c2),
            THIRD_SLOT => word.push(c3),
            _ => word.push(ch),
        }
    }
    let kind = PatternKind::of(pattern);
    // The order of these rewrites is fixed; each operates on the output of
    // the previous one.
    if c2 == c3 {
        word = collapse_geminate(&word, c2);
    }
    word = rewrite_hollow(word, kind, c1, c2, c3);
    word = rewrite_initial_hamza(word, kind, c1);
    word = rewrite_medial_hamza(word, kind, c2);
    word = rewrite_final_hamza(word, kind, c3);
    word = rewrite_assimilated(word, kind, c1);
    word = rewrite_defective(word, kind, c3);
    if definite {
        word = prefix_article(word);
    }
    word
}

// Collapse a doubled consonant with optional intervening diacritics into a
// single occurrence marked with a shadda, keeping the diacritics.
fn collapse_geminate(word: &str, c2: char) -> String {
    let needle = format!("{c2}([\u{064B}-\u{0652}]*){c2}");
    match Regex::new(&needle) {
        Ok(re) => re
            .replace(word, format!("{c2}{SHADDA}$1").as_str())
            .into_owned(),
        Err(_) => word.to_owned(),
    }
}

// Hollow root: the middle consonant is a glide, which surfaces as a long
// vowel or a hamza seat depending on the pattern.
fn rewrite_hollow(word: String, kind: PatternKind, c1: char, c2: char, c3: char) -> String {
    if !is_glide(c2) {
        return word;
    }
    match kind {
        PatternKind::ActiveParticiple => word.replace(
            &format!("{FATHA}{ALIF}{c2}"),
            &format!("{FATHA}{ALIF}{HAMZA_ON_YA}"),
        ),
        PatternKind::Past => format!("{c1}{FATHA}{ALIF}{c3}{FATHA}"),
        PatternKind::Imperfect => {
            word.replace(&format!("{SUKUN}{c2}{FATHA}"), &format!("{DAMMA}{WAW}"))
        }
        PatternKind::PassiveParticiple => word.replace(
            &format!("{SUKUN}{c2}{DAMMA}{WAW}"),
            &format!("{DAMMA}{WAW}"),
        ),
        PatternKind::Masdar | PatternKind::Request => {
            word.replace(&format!("{TA}{KASRA}{c2}"), &format!("{TA}{KASRA}{YA}"))
        }
        _ => word,
    }
}

// Initial hamza: a doubled glottal stop contracts to a madda, and the
// prosthetic-alif patterns reseat the hamza after their kasra.
fn rewrite_initial_hamza(word: String, kind: PatternKind, c1: char) -> String {
    if !is_hamza(c1) {
        return word;
    }
    match kind {
        PatternKind::ActiveParticiple => {
            match word.strip_prefix(&format!("{c1}{FATHA}{ALIF}")) {
                Some(rest) => format!("{ALIF_MADDA}{rest}"),
                None => word,
            }
        }
        PatternKind::Masdar => word.replace(
            &format!("{ALIF}{KASRA}{c1}"),
            &format!("{ALIF}{KASRA}{HAMZA_ON_YA}"),
        ),
        PatternKind::Request => word.replace(
            &format!("{TA}{KASRA}{c1}"),
            &format!("{TA}{KASRA}{HAMZA_ON_YA}"),
        ),
        _ => word,
    }
}

// Medial hamza: the seat follows the surrounding vowels.
fn rewrite_medial_hamza(word: String, kind: PatternKind, c2: char) -> String {
    if !is_hamza(c2) {
        return word;
    }
    match kind {
        PatternKind::ActiveParticiple => word.replace(
            &format!("{FATHA}{ALIF}{c2}"),
            &format!("{FATHA}{ALIF}{HAMZA_ON_YA}"),
        ),
        PatternKind::PassiveParticiple => word.replace(
            &format!("{SUKUN}{c2}{DAMMA}"),
            &format!("{SUKUN}{HAMZA_ON_WAW}{DAMMA}"),
        ),
        PatternKind::Masdar | PatternKind::Request => word.replace(
            &format!("{TA}{KASRA}{c2}"),
            &format!("{TA}{KASRA}{HAMZA_ON_YA}"),
        ),
        _ => word,
    }
}

// Final hamza: after a long alif the hamza loses its seat; a trailing seated
// hamza otherwise becomes the bare final form.
fn rewrite_final_hamza(word: String, kind: PatternKind, c3: char) -> String {
    if !is_hamza(c3) {
        return word;
    }
    match kind {
        PatternKind::Masdar | PatternKind::Request => {
            if let Some(stem) = word.strip_suffix(&format!("{ALIF}{c3}")) {
                return format!("{stem}{ALIF}{HAMZA}");
            }
            if c3 != HAMZA && word.ends_with(c3) {
                let mut rewritten = word;
                rewritten.pop();
                rewritten.push(HAMZA);
                return rewritten;
            }
            word
        }
        _ => word,
    }
}

// Assimilated root: the initial glide merges into the ت of the reflexive
// patterns as a gemination.
fn rewrite_assimilated(word: String, kind: PatternKind, c1: char) -> String {
    if !is_glide(c1) {
        return word;
    }
    match kind {
        PatternKind::Masdar | PatternKind::Request => {
            word.replace(&format!("{c1}{SUKUN}{TA}"), &format!("{TA}{SHADDA}"))
        }
        _ => word,
    }
}

// Defective root: the final glide is realized as nunation in the active
// participle and as a geminated glide in the passive participle.
fn rewrite_defective(word: String, kind: PatternKind, c3: char) -> String {
    if !is_glide(c3) {
        return word;
    }
    match kind {
        PatternKind::ActiveParticiple => match word.strip_suffix(&format!("{KASRA}{c3}")) {
            Some(stem) => format!("{stem}{KASRATAN}"),
            None => word,
        },
        PatternKind::PassiveParticiple => {
            if word.ends_with(&format!("{c3}{SHADDA}")) {
                return word;
            }
            match word.strip_suffix(&format!("{DAMMA}{WAW}{c3}")) {
                Some(stem) if c3 == YA => format!("{stem}{KASRA}{YA}{SHADDA}"),
                Some(stem) => format!("{stem}{DAMMA}{WAW}{SHADDA}"),
                None => word,
            }
        }
        _ => word,
    }
}

// Three-way article branch: a bare (hamzat-wasl) alif is replaced in place,
// a sun letter assimilates the lam into a shadda, moon letters take the
// plain prefix.
fn prefix_article(word: String) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return word;
    };
    if first == ALIF {
        return format!("{ARTICLE}{}", chars.as_str());
    }
    if is_sun_letter(first) {
        return format!("{ARTICLE}{first}{SHADDA}{}", chars.as_str());
    }
    format!("{ARTICLE}{word}")
}

// ------------- Validation -------------
fn forms_match(generated: &str, word: &str) -> bool {
    generated == word || strip_tashkeel(generated) == strip_tashkeel(word)
}

/// Validate a candidate word against a root by search over the supplied
/// schemes. Two phases: a fast path when the inverse index already maps the
/// word to this root, and a full generation scan otherwise. A fallback match
/// is learned into the index so the fast path answers next time. Always a
/// clean negative on failure, never an error.
pub fn validate<'a>(
    word: &str,
    root: &str,
    schemes: &'a [Scheme],
    index: &mut RootIndex,
) -> Option<&'a Scheme> {
    let definite = word.starts_with(ARTICLE);
    if index.find_root_by_word(word) == Some(root) {
        for scheme in schemes {
            let generated = apply_scheme(root, &scheme.pattern, definite);
            if !generated.is_empty() && forms_match(&generated, word) {
                return Some(scheme);
            }
        }
    }
    if consonants(root).is_none() {
        return None;
    }
    for scheme in schemes {
        let generated = apply_scheme(root, &scheme.pattern, definite);
        if !generated.is_empty() && forms_match(&generated, word) {
            index.insert(root, vec![Derivative::new(word, &scheme.name)]);
            return Some(scheme);
        }
    }
    None
}
