//! Types and functions for guessing what kind of site a database name
//! belongs to.

use crate::tables::{IRREGULAR_WIKIPEDIAS, PROJECT_SUFFIXES, SHORT_SPECIALS};

/// The length of the longest database name which can be a plain
/// `{language}wiki` Wikipedia (`angwiki`).
const MAX_SHORT_WIKIPEDIA_LEN: usize = 7;

/// The kind of site a database name belongs to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SiteCategory {
    /// A language edition of a content project. The value is the project
    /// label appended to the language name, like “Wikipedia”.
    RegularProject(String),
    /// A wiki with a curated name that cannot be derived from its database
    /// name.
    SpecialCase,
    /// A chapter wiki. The value is the country or region code.
    ChapterCountry(String),
    /// Nothing matched.
    Unclassified,
}

/// The result of classifying a database name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Classification {
    /// The category of the site.
    pub category: SiteCategory,
    /// The normalised language code, for regular projects only.
    pub language: Option<String>,
}

impl Classification {
    fn regular(project: impl Into<String>, language: &str) -> Self {
        Self {
            category: SiteCategory::RegularProject(project.into()),
            language: Some(normalize_code(language)),
        }
    }

    fn category(category: SiteCategory) -> Self {
        Self {
            category,
            language: None,
        }
    }
}

/// Converts a language code as found in a database name into the form used by
/// the language list.
pub fn normalize_code(code: &str) -> String {
    code.replace('_', "-")
}

/// Classifies the database name `dbname`.
///
/// This never fails; database names that match nothing are
/// [`SiteCategory::Unclassified`].
pub fn classify(dbname: &str) -> Classification {
    if let Some(language) = dbname.strip_suffix("wiki") {
        let regular = if dbname.len() > MAX_SHORT_WIKIPEDIA_LEN {
            IRREGULAR_WIKIPEDIAS
                .iter()
                .any(|entry| entry.contains(dbname))
        } else {
            !SHORT_SPECIALS.contains(dbname)
        };

        return if regular {
            Classification::regular("Wikipedia", language)
        } else {
            Classification::category(SiteCategory::SpecialCase)
        };
    }

    if let Some(code) = dbname.strip_suffix("wikimedia") {
        return Classification::category(SiteCategory::ChapterCountry(code.to_string()));
    }

    if dbname == "betawikiversity" {
        return Classification::category(SiteCategory::SpecialCase);
    }

    // This is a containment test, so something like `enwikinewsarchive` will
    // be treated as a Wikinews with the language code `enarchive`.
    PROJECT_SUFFIXES
        .iter()
        .find(|suffix| dbname.contains(*suffix))
        .map_or_else(
            || Classification::category(SiteCategory::Unclassified),
            |suffix| Classification::regular(title_case(suffix), &dbname.replacen(suffix, "", 1)),
        )
}

/// Uppercases the first letter of an ASCII project suffix.
fn title_case(s: &str) -> String {
    let mut out = s.to_string();
    if let Some(first) = out.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    out
}
