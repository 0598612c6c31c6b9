use super::*;
use crate::langlist::LanguageTable;
use std::io::Write as _;

const BASE_DIR: &str = "./src/resolve";

fn languages() -> LanguageTable {
    [
        ("be-x-old", "Belarusian (Taraškievica orthography)"),
        ("de", "German"),
        ("en", "English"),
        ("fr", "French"),
        ("nb", "Norwegian Bokmål"),
        ("zh-min-nan", "Chinese (Min Nan)"),
    ]
    .into_iter()
    .collect()
}

#[track_caller]
fn assert_resolved(dbname: &str, expected: &str) {
    let resolution = site_name(dbname, &languages());
    assert_eq!(resolution.name, expected, "{dbname}");
    assert!(resolution.is_resolved(), "{dbname} should be resolved");
}

#[track_caller]
fn assert_unresolved(dbname: &str) {
    let resolution = site_name(dbname, &languages());
    assert_eq!(resolution.name, dbname);
    assert!(!resolution.is_resolved(), "{dbname} should not be resolved");
}

#[test]
fn wikipedias() {
    assert_resolved("enwiki", "English Wikipedia");
    assert_resolved("dewiki", "German Wikipedia");
}

#[test]
fn overridden_language_names() {
    assert_resolved("be_x_oldwiki", "Belarusian Classical Wikipedia");
    assert_resolved("nbwiki", "Norwegian Bokmal Wikipedia");
    assert_resolved("zh_min_nanwikisource", "Min Nan Wikisource");
}

#[test]
fn sister_projects() {
    assert_resolved("frwiktionary", "French Wiktionary");
    assert_resolved("enwikivoyage", "English Wikivoyage");
}

#[test]
fn special_wikis() {
    assert_resolved("metawiki", "Meta-Wiki");
    assert_resolved("wikidatawiki", "Wikidata");
    assert_resolved("incubatorwiki", "Wikimedia Incubator");
    assert_resolved("simplewiki", "Simple English Wikipedia");
    assert_resolved("tenwiki", "Wikipedia 10");
    assert_resolved("betawikiversity", "Wikiversity Beta");
}

#[test]
fn wikimania() {
    assert_resolved("wikimania2012wiki", "Wikimania 2012");
    assert_resolved("wikimania2005wiki", "Wikimania 2005");
    assert_unresolved("wikimania12wiki");
    assert_unresolved("wikimaniateamwiki");
}

#[test]
fn chapters() {
    assert_resolved("nlwikimedia", "Wikimedia Netherlands");
    assert_resolved("pa_uswikimedia", "Wikimedia Pennsylvania");
    assert_unresolved("xxwikimedia");
    assert_unresolved("NLwikimedia");
}

#[test]
fn missing_language() {
    assert_unresolved("kowiki");
    assert_unresolved("x_oldwiki");
    let resolution = site_name("kowiki", &languages());
    assert_eq!(resolution.classification.language.as_deref(), Some("ko"));
}

#[test]
fn unclassified() {
    let resolution = site_name("bogusxyz", &languages());
    assert_eq!(resolution.classification.category, SiteCategory::Unclassified);
    assert_eq!(resolution.name, "bogusxyz");
    assert!(!resolution.is_resolved());
}

#[test]
fn unknown_special() {
    assert_unresolved("privatewiki");
}

#[test]
fn idempotent() {
    let languages = languages();
    for dbname in ["enwiki", "metawiki", "kowiki", "nlwikimedia", "bogusxyz"] {
        assert_eq!(site_name(dbname, &languages), site_name(dbname, &languages));
    }
}

#[test]
fn resolve_uses_given_classification() {
    let classification = Classification {
        category: SiteCategory::RegularProject("Wikinews".into()),
        language: Some("de".into()),
    };
    assert_eq!(resolve(classification, "whatever", &languages()).name, "German Wikinews");
}

#[test]
fn test_normalize_language() {
    assert_eq!(normalize_language("vo", "Volapük"), "Volapuk");
    assert_eq!(normalize_language("roa-tara", "Tarandíne"), "Tarantino");
    assert_eq!(normalize_language("en", "English"), "English");
}

#[test]
fn batch() {
    let mut mint = goldenfile::Mint::new(format!("{BASE_DIR}/goldenfiles"));
    let mut file = mint.new_goldenfile("batch.txt").unwrap();
    let languages = languages();
    for dbname in [
        "enwiki",
        "dewiktionary",
        "be_x_oldwiki",
        "nbwiki",
        "zh_min_nanwikisource",
        "metawiki",
        "simplewiki",
        "wikimania2012wiki",
        "betawikiversity",
        "tenwiki",
        "nlwikimedia",
        "xxwikimedia",
        "kowiki",
        "bogusxyz",
    ] {
        let resolution = site_name(dbname, &languages);
        let status = if resolution.is_resolved() {
            "resolved"
        } else {
            "unresolved"
        };
        let _ = writeln!(file, "{dbname}\t{}\t{status}", resolution.name);
    }
}
