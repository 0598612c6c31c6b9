//! Curated lookup tables for Wikimedia database names.
//!
//! None of these are derived from anything; they are maintained by hand
//! whenever a new special wiki or chapter shows up in the dump listings.

/// Non-Wikipedia project suffixes, in match order.
pub(crate) const PROJECT_SUFFIXES: &[&str] = &[
    "wiktionary",
    "wikibooks",
    "wikinews",
    "wikiquote",
    "wikisource",
    "wikiversity",
    "wikivoyage",
];

/// Wikipedias whose database names are longer than the usual
/// `{two or three letter code}wiki` form because the language code contains
/// underscores.
///
/// Membership is tested by containment, not equality, so a fragment like
/// `x_oldwiki` also counts as a member.
pub(crate) const IRREGULAR_WIKIPEDIAS: &[&str] = &[
    "bat_smgwiki",
    "be_x_oldwiki",
    "cbk_zamwiki",
    "fiu_vrowiki",
    "map_bmswiki",
    "nds_nlwiki",
    "roa_rupwiki",
    "roa_tarawiki",
    "zh_classicalwiki",
    "zh_min_nanwiki",
    "zh_yuewiki",
];

/// Short database names which look like a Wikipedia but are not.
pub(crate) static SHORT_SPECIALS: phf::Set<&str> = phf::phf_set! {
    "tenwiki",
    "fdcwiki",
};

/// Display names for wikis that do not follow the `{language}{project}`
/// naming scheme.
pub(crate) static SPECIAL_NAMES: phf::Map<&str, &str> = phf::phf_map! {
    "advisorywiki" => "Wikimedia Advisory Board",
    "arbcom_dewiki" => "German Wikipedia Arbitration Committee",
    "arbcom_enwiki" => "English Wikipedia Arbitration Committee",
    "arbcom_fiwiki" => "Finnish Wikipedia Arbitration Committee",
    "arbcom_nlwiki" => "Dutch Wikipedia Arbitration Committee",
    "auditcomwiki" => "Wikimedia Audit Committee",
    "boardwiki" => "Wikimedia Board",
    "chairwiki" => "Wikimedia Board Chair",
    "chapcomwiki" => "Wikimedia Chapters Committee",
    "checkuserwiki" => "CheckUser Wiki",
    "collabwiki" => "Wikimedia Collab",
    "commonswiki" => "Wikimedia Commons",
    "donatewiki" => "Donate Wiki",
    "execwiki" => "Wikimedia Executive",
    "fdcwiki" => "Wikimedia FDC",
    "foundationwiki" => "Wikimedia Foundation",
    "grantswiki" => "Wikimedia Grants",
    "incubatorwiki" => "Wikimedia Incubator",
    "internalwiki" => "Wikimedia Internal",
    "labswiki" => "Wikitech",
    "loginwiki" => "Wikimedia Login",
    "mediawikiwiki" => "MediaWiki.org",
    "metawiki" => "Meta-Wiki",
    "movementroleswiki" => "Wikimedia Movement Roles",
    "nostalgiawiki" => "Nostalgia Wikipedia",
    "officewiki" => "Wikimedia Office",
    "ombudsmenwiki" => "Wikimedia Ombudsmen",
    "otrs_wikiwiki" => "OTRS Wiki",
    "outreachwiki" => "Wikimedia Outreach",
    "qualitywiki" => "Wikimedia Quality",
    "searchcomwiki" => "Wikimedia Search Committee",
    "sep11wiki" => "September 11 Memorial Wiki",
    "simplewiki" => "Simple English Wikipedia",
    "sourceswiki" => "Multilingual Wikisource",
    "spcomwiki" => "Wikimedia Special Projects Committee",
    "specieswiki" => "Wikispecies",
    "stewardwiki" => "Wikimedia Stewards",
    "strategywiki" => "Wikimedia Strategic Planning",
    "tenwiki" => "Wikipedia 10",
    "test2wiki" => "Test2 Wikipedia",
    "testwiki" => "Test Wikipedia",
    "testwikidatawiki" => "Test Wikidata",
    "usabilitywiki" => "Wikimedia Usability Initiative",
    "votewiki" => "Wikimedia Vote",
    "wg_enwiki" => "Wikimedia Working Group",
    "wikidatawiki" => "Wikidata",
};

/// Chapter names, keyed by the prefix of a `{code}wikimedia` database name.
pub(crate) static CHAPTERS: phf::Map<&str, &str> = phf::phf_map! {
    "am" => "Wikimedia Armenia",
    "ar" => "Wikimedia Argentina",
    "bd" => "Wikimedia Bangladesh",
    "be" => "Wikimedia Belgium",
    "br" => "Wikimedia Brazil",
    "ca" => "Wikimedia Canada",
    "cn" => "Wikimedia China",
    "co" => "Wikimedia Colombia",
    "dk" => "Wikimedia Denmark",
    "ec" => "Wikimedia Ecuador",
    "et" => "Wikimedia Estonia",
    "fi" => "Wikimedia Finland",
    "il" => "Wikimedia Israel",
    "mk" => "Wikimedia Macedonia",
    "mx" => "Wikimedia Mexico",
    "nl" => "Wikimedia Netherlands",
    "no" => "Wikimedia Norway",
    "noboard_chapters" => "Wikimedia Norway Internal Board",
    "nyc" => "Wikimedia New York City",
    "nz" => "Wikimedia New Zealand",
    "pa_us" => "Wikimedia Pennsylvania",
    "pl" => "Wikimedia Poland",
    "pt" => "Wikimedia Portugal",
    "rs" => "Wikimedia Serbia",
    "ru" => "Wikimedia Russia",
    "se" => "Wikimedia Sweden",
    "tr" => "Wikimedia Turkey",
    "ua" => "Wikimedia Ukraine",
    "uk" => "Wikimedia UK",
    "ve" => "Wikimedia Venezuela",
};

/// Language names to use instead of whatever the sitematrix says.
pub(crate) static LANGUAGE_OVERRIDES: phf::Map<&str, &str> = phf::phf_map! {
    "bat-smg" => "Samogitian",
    "be-x-old" => "Belarusian Classical",
    "cbk-zam" => "Chavacano",
    "fiu-vro" => "Voro",
    "map-bms" => "Banyumasan",
    "nb" => "Norwegian Bokmal",
    "nds-nl" => "Dutch Low Saxon",
    "roa-rup" => "Aromanian",
    "roa-tara" => "Tarantino",
    "vo" => "Volapuk",
    "zh-classical" => "Classical Chinese",
    "zh-min-nan" => "Min Nan",
    "zh-yue" => "Cantonese",
};
