//! Turns a classified database name into a display name.

use crate::{
    classify::{Classification, SiteCategory, classify},
    tables::{CHAPTERS, LANGUAGE_OVERRIDES, SPECIAL_NAMES},
};
use regex::Regex;
use std::{collections::HashMap, sync::LazyLock};

#[cfg(test)]
mod tests;

/// A read-only source of language names.
pub trait LanguageSource {
    /// Returns the display name of the language with the given normalised
    /// code.
    fn language_name(&self, code: &str) -> Option<&str>;
}

impl LanguageSource for HashMap<String, String> {
    fn language_name(&self, code: &str) -> Option<&str> {
        self.get(code).map(String::as_str)
    }
}

/// The outcome of resolving one database name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Resolution {
    /// The database name that was resolved.
    pub dbname: String,
    /// How the database name was classified.
    pub classification: Classification,
    /// The display name, or the database name if nothing matched.
    pub name: String,
    resolved: bool,
}

impl Resolution {
    fn resolved(dbname: &str, classification: Classification, name: String) -> Self {
        Self {
            dbname: dbname.to_string(),
            classification,
            name,
            resolved: true,
        }
    }

    fn passthrough(dbname: &str, classification: Classification) -> Self {
        Self {
            dbname: dbname.to_string(),
            classification,
            name: dbname.to_string(),
            resolved: false,
        }
    }

    /// Returns false if every lookup failed and [`Self::name`] is just the
    /// database name.
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }
}

/// Resolves `dbname` to a display name using `languages` for regular
/// projects.
pub fn site_name(dbname: &str, languages: &impl LanguageSource) -> Resolution {
    resolve(classify(dbname), dbname, languages)
}

/// Resolves an already classified database name.
pub fn resolve(
    classification: Classification,
    dbname: &str,
    languages: &impl LanguageSource,
) -> Resolution {
    let name = match (&classification.category, classification.language.as_deref()) {
        (SiteCategory::RegularProject(project), Some(code)) => {
            let name = languages
                .language_name(code)
                .map(|provisional| format!("{} {project}", normalize_language(code, provisional)));
            if name.is_none() {
                log::warn!("No language named '{code}' for {dbname}");
            }
            name
        }
        (SiteCategory::RegularProject(_), None) => None,
        (SiteCategory::SpecialCase, _) => special_name(dbname),
        (SiteCategory::ChapterCountry(code), _) => {
            CHAPTERS.get(code.as_str()).map(|name| (*name).to_string())
        }
        (SiteCategory::Unclassified, _) => None,
    };

    match name {
        Some(name) => Resolution::resolved(dbname, classification, name),
        None => {
            log::debug!("Could not resolve {dbname} ({:?})", classification.category);
            Resolution::passthrough(dbname, classification)
        }
    }
}

/// Replaces language names which are wrong or ambiguous in the language list.
pub fn normalize_language<'a>(code: &str, provisional: &'a str) -> &'a str {
    match LANGUAGE_OVERRIDES.get(code) {
        Some(name) => *name,
        None => provisional,
    }
}

/// Finds the name of a wiki which does not follow the usual naming scheme.
fn special_name(dbname: &str) -> Option<String> {
    static WIKIMANIA: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^wikimania([0-9]{4})wiki$").unwrap());

    if let Some(name) = SPECIAL_NAMES.get(dbname) {
        Some((*name).to_string())
    } else if let Some(year) = WIKIMANIA.captures(dbname).and_then(|caps| caps.get(1)) {
        Some(format!("Wikimania {}", year.as_str()))
    } else if dbname == "betawikiversity" {
        Some("Wikiversity Beta".to_string())
    } else {
        None
    }
}
