//! Generation coverage for every irregularity class: regular, geminate,
//! hollow, hamzated (initial/medial/final), assimilated, defective, and the
//! three definite-article branches. Expected words are assembled from the
//! exported diacritic constants so the combining-mark order is explicit.

use sarf::morph::{
    apply_scheme, strip_tashkeel, template, DAMMA, FATHA, KASRA, KASRATAN, SHADDA, SUKUN,
};

#[test]
fn regular_root_is_pure_slot_substitution() {
    let katib = format!("ك{FATHA}ات{KASRA}ب");
    assert_eq!(apply_scheme("كتب", template::ACTIVE_PARTICIPLE, false), katib);

    let maktub = format!("م{FATHA}ك{SUKUN}ت{DAMMA}وب");
    assert_eq!(
        apply_scheme("كتب", template::PASSIVE_PARTICIPLE, false),
        maktub
    );
}

#[test]
fn malformed_root_yields_empty_word() {
    assert_eq!(apply_scheme("كت", template::ACTIVE_PARTICIPLE, false), "");
    assert_eq!(apply_scheme("كتبت", template::ACTIVE_PARTICIPLE, false), "");
    assert_eq!(apply_scheme("", template::ACTIVE_PARTICIPLE, true), "");
}

#[test]
fn custom_template_gets_slot_substitution() {
    assert_eq!(apply_scheme("كتب", "فعل", false), "كتب");
    assert_eq!(apply_scheme("كتب", "مفعلة", false), "مكتبة");
}

#[test]
fn geminate_root_collapses_to_shadda() {
    // past: the doubled consonant carries its captured diacritic
    let radda = format!("ر{FATHA}د{SHADDA}{FATHA}{FATHA}");
    assert_eq!(apply_scheme("ردد", template::PAST, false), radda);

    let raadd = format!("ر{FATHA}اد{SHADDA}{KASRA}");
    assert_eq!(apply_scheme("ردد", template::ACTIVE_PARTICIPLE, false), raadd);

    // gemination is not pattern-specific
    let radd = format!("رد{SHADDA}");
    assert_eq!(apply_scheme("ردد", "فعل", false), radd);
}

#[test]
fn geminate_collapse_needs_adjacent_consonants() {
    // the long waw between the two dals blocks the collapse
    let mardud = format!("م{FATHA}ر{SUKUN}د{DAMMA}ود");
    assert_eq!(
        apply_scheme("ردد", template::PASSIVE_PARTICIPLE, false),
        mardud
    );
}

#[test]
fn hollow_root_active_participle_takes_hamza_seat() {
    let qail = format!("ق{FATHA}ائ{KASRA}ل");
    assert_eq!(apply_scheme("قول", template::ACTIVE_PARTICIPLE, false), qail);
}

#[test]
fn hollow_root_past_collapses_to_long_alif() {
    let qala = format!("ق{FATHA}ال{FATHA}");
    assert_eq!(apply_scheme("قول", template::PAST, false), qala);
}

#[test]
fn hollow_root_imperfect_and_passive_take_long_waw() {
    let yaqulu = format!("ي{FATHA}ق{DAMMA}ول{DAMMA}");
    assert_eq!(apply_scheme("قول", template::IMPERFECT, false), yaqulu);

    let maqul = format!("م{FATHA}ق{DAMMA}ول");
    assert_eq!(apply_scheme("قول", template::PASSIVE_PARTICIPLE, false), maqul);
}

#[test]
fn hollow_root_masdar_takes_long_ya() {
    let iqtiyal = format!("ا{KASRA}ق{SUKUN}ت{KASRA}ي{FATHA}ال");
    assert_eq!(apply_scheme("قول", template::MASDAR, false), iqtiyal);
}

#[test]
fn initial_hamza_contracts_to_madda_in_active_participle() {
    let akil = format!("آك{KASRA}ل");
    assert_eq!(apply_scheme("أكل", template::ACTIVE_PARTICIPLE, false), akil);
}

#[test]
fn initial_hamza_reseats_in_reflexive_patterns() {
    let itikal = format!("ا{KASRA}ئ{SUKUN}ت{KASRA}ك{FATHA}ال");
    assert_eq!(apply_scheme("أكل", template::MASDAR, false), itikal);

    let istidhan = format!("ا{KASRA}س{SUKUN}ت{KASRA}ئ{SUKUN}ذ{FATHA}ان");
    assert_eq!(apply_scheme("أذن", template::REQUEST, false), istidhan);
}

#[test]
fn medial_hamza_seats_follow_the_vowels() {
    let sail = format!("س{FATHA}ائ{KASRA}ل");
    assert_eq!(apply_scheme("سأل", template::ACTIVE_PARTICIPLE, false), sail);

    let masul = format!("م{FATHA}س{SUKUN}ؤ{DAMMA}ول");
    assert_eq!(apply_scheme("سأل", template::PASSIVE_PARTICIPLE, false), masul);
}

#[test]
fn final_hamza_after_alif_loses_its_seat() {
    let istiqra = format!("ا{KASRA}س{SUKUN}ت{KASRA}ق{SUKUN}ر{FATHA}اء");
    assert_eq!(apply_scheme("قرأ", template::REQUEST, false), istiqra);

    let iqtira = format!("ا{KASRA}ق{SUKUN}ت{KASRA}ر{FATHA}اء");
    assert_eq!(apply_scheme("قرأ", template::MASDAR, false), iqtira);
}

#[test]
fn assimilated_root_geminates_the_ta() {
    let ittisal = format!("ا{KASRA}ت{SHADDA}{KASRA}ص{FATHA}ال");
    assert_eq!(apply_scheme("وصل", template::MASDAR, false), ittisal);
}

#[test]
fn defective_root_active_participle_takes_nunation() {
    let ramin = format!("ر{FATHA}ام{KASRATAN}");
    assert_eq!(apply_scheme("رمي", template::ACTIVE_PARTICIPLE, false), ramin);
}

#[test]
fn defective_root_passive_participle_geminate_glide() {
    let marmiyy = format!("م{FATHA}ر{SUKUN}م{KASRA}ي{SHADDA}");
    assert_eq!(
        apply_scheme("رمي", template::PASSIVE_PARTICIPLE, false),
        marmiyy
    );

    let madu = format!("م{FATHA}د{SUKUN}ع{DAMMA}و{SHADDA}");
    assert_eq!(
        apply_scheme("دعو", template::PASSIVE_PARTICIPLE, false),
        madu
    );
}

#[test]
fn definite_article_moon_letter_is_plain_prefix() {
    let al_katib = format!("الك{FATHA}ات{KASRA}ب");
    assert_eq!(apply_scheme("كتب", template::ACTIVE_PARTICIPLE, true), al_katib);
}

#[test]
fn definite_article_sun_letter_assimilates() {
    let ad_daris = format!("الد{SHADDA}{FATHA}ار{KASRA}س");
    assert_eq!(apply_scheme("درس", template::ACTIVE_PARTICIPLE, true), ad_daris);
}

#[test]
fn definite_article_replaces_initial_bare_alif() {
    let al_itimal = format!("ال{KASRA}ع{SUKUN}ت{KASRA}م{FATHA}ال");
    assert_eq!(apply_scheme("عمل", template::MASDAR, true), al_itimal);
}

#[test]
fn stripping_tashkeel_leaves_the_skeleton() {
    let katib = apply_scheme("كتب", template::ACTIVE_PARTICIPLE, false);
    assert_eq!(strip_tashkeel(&katib), "كاتب");
    assert_eq!(strip_tashkeel("كاتب"), "كاتب");
    assert_eq!(strip_tashkeel(""), "");
}
