//! The list of language names used for regular projects, as published by the
//! MediaWiki sitematrix API.
//!
//! The list changes rarely, so it is kept on disk and only refetched once the
//! cached copy is older than the configured [`Freshness`] window. A cached
//! copy that is stale is still better than nothing when the API is down.

use crate::resolve::LanguageSource;
use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::{Path, PathBuf},
    time::{Duration, Instant, SystemTime},
};

/// The default API endpoint for the sitematrix.
pub const DEFAULT_API_URL: &str = "https://meta.wikimedia.org/w/api.php";

/// The default maximum age of a cached language list.
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// The result type for language list operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors that may occur when loading the language list.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    /// An I/O error occurred reading or writing the cache.
    #[error("{1}: I/O error: {0}")]
    Io(std::io::Error, PathBuf),

    /// The response was not a sitematrix.
    #[error("invalid sitematrix: {0}")]
    Json(#[from] serde_json::Error),

    /// Fetching failed and there is no cached copy to fall back to.
    #[error("{0}: no language list available: {1}")]
    Unavailable(PathBuf, #[source] Box<Error>),
}

/// An immutable snapshot of language names keyed by language code.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LanguageTable {
    names: HashMap<String, String>,
}

impl LanguageTable {
    /// Creates a table from a sitematrix API response.
    ///
    /// The English name of a language is used if the response has one;
    /// otherwise, the native name is used.
    pub fn from_sitematrix(json: &str) -> Result<Self> {
        let response = serde_json::from_str::<api::Response>(json)?;
        let mut names = HashMap::new();
        // Languages are keyed by index; `count` and `specials` live alongside
        // them.
        for (_, value) in response
            .sitematrix
            .into_iter()
            .filter(|(key, _)| key.parse::<usize>().is_ok())
        {
            let api::Language {
                code,
                local_name,
                name,
            } = serde_json::from_value(value)?;
            if let Some(display) = local_name.or(name) {
                names.insert(code, display);
            }
        }
        Ok(Self { names })
    }

    /// The number of languages in the table.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the table has no languages.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LanguageTable {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            names: iter
                .into_iter()
                .map(|(code, name)| (code.into(), name.into()))
                .collect(),
        }
    }
}

impl LanguageSource for LanguageTable {
    fn language_name(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }
}

/// The policy deciding when a cached language list must be refetched.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Freshness {
    /// The age at which a cached copy becomes stale.
    max_age: Duration,
}

impl Freshness {
    /// Creates a policy where copies older than `max_age` are stale.
    pub const fn new(max_age: Duration) -> Self {
        Self { max_age }
    }

    /// Returns true if a copy last modified at `modified` may still be used
    /// at `now`.
    pub fn is_fresh(&self, modified: SystemTime, now: SystemTime) -> bool {
        // A timestamp from the future is clock skew, not staleness.
        now.duration_since(modified)
            .map_or(true, |age| age < self.max_age)
    }
}

impl Default for Freshness {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_AGE)
    }
}

/// A source of raw sitematrix responses.
pub trait Fetch {
    /// Fetches the sitematrix language list as JSON.
    fn fetch(&self) -> Result<String>;
}

/// Fetches the sitematrix from a MediaWiki API endpoint.
#[derive(Clone, Debug)]
pub struct SiteMatrix {
    /// The `api.php` URL.
    api_url: String,
}

impl SiteMatrix {
    /// Creates a fetcher for the `api.php` at `api_url`.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }
}

impl Default for SiteMatrix {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl Fetch for SiteMatrix {
    fn fetch(&self) -> Result<String> {
        log::info!("Fetching language list from {}", self.api_url);
        Ok(ureq::get(self.api_url.as_str())
            .query("action", "sitematrix")
            .query("smtype", "language")
            .query("smlangprop", "code|localname")
            .query("format", "json")
            .header(
                "User-Agent",
                format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            )
            .call()?
            .into_body()
            .read_to_string()?)
    }
}

/// A language list which is cached on disk.
pub struct LanguageCache<F = SiteMatrix> {
    /// Where the raw sitematrix response is kept.
    path: PathBuf,
    /// When to refetch.
    freshness: Freshness,
    /// Where to refetch from.
    fetcher: F,
}

impl<F: Fetch> LanguageCache<F> {
    /// Creates a cache at `path`.
    pub fn new(path: impl Into<PathBuf>, freshness: Freshness, fetcher: F) -> Self {
        Self {
            path: path.into(),
            freshness,
            fetcher,
        }
    }

    /// The path of the cached copy.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the language list, refetching it first if the cached copy is
    /// missing or stale.
    ///
    /// If refetching fails, a stale copy is used instead. This only fails if
    /// there is no usable copy at all.
    pub fn load(&self) -> Result<LanguageTable> {
        match fs::metadata(&self.path).and_then(|meta| meta.modified()) {
            Ok(modified) if self.freshness.is_fresh(modified, SystemTime::now()) => {
                log::debug!("Using cached language list {}", self.path.display());
                match self.read_cached() {
                    Ok(table) => return Ok(table),
                    Err(err) => log::warn!("Ignoring unusable language list: {err}"),
                }
            }
            Ok(_) => log::info!("Cached language list {} is stale", self.path.display()),
            Err(_) => log::info!("No cached language list at {}", self.path.display()),
        }

        self.refresh().or_else(|err| {
            log::warn!("Could not refresh language list: {err}");
            self.read_cached().map_err(|_| Error::Unavailable(self.path.clone(), Box::new(err)))
        })
    }

    /// Refetches the language list and replaces the cached copy.
    ///
    /// The cached copy is only replaced if the new response is a valid
    /// sitematrix.
    pub fn refresh(&self) -> Result<LanguageTable> {
        let time = Instant::now();
        let body = self.fetcher.fetch()?;
        log::trace!("Fetched language list in {:.2?}", time.elapsed());

        let table = LanguageTable::from_sitematrix(&body)?;
        fs::write(&self.path, body).map_err(|err| Error::Io(err, self.path.clone()))?;
        log::info!("Cached {} languages at {}", table.len(), self.path.display());
        Ok(table)
    }

    /// Reads the cached copy regardless of its age.
    fn read_cached(&self) -> Result<LanguageTable> {
        let json =
            fs::read_to_string(&self.path).map_err(|err| Error::Io(err, self.path.clone()))?;
        LanguageTable::from_sitematrix(&json)
    }
}

mod api {
    #[derive(serde::Deserialize)]
    pub(super) struct Response {
        pub sitematrix: super::BTreeMap<String, serde_json::Value>,
    }

    #[derive(serde::Deserialize)]
    pub(super) struct Language {
        pub code: String,
        #[serde(rename = "localname")]
        pub local_name: Option<String>,
        pub name: Option<String>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filetime::{FileTime, set_file_mtime};
    use std::cell::Cell;

    const SITEMATRIX: &str = r#"{
        "sitematrix": {
            "count": 4,
            "0": {"code": "aa", "name": "Qafár af", "localname": "Afar"},
            "1": {"code": "be-x-old", "localname": "Belarusian (Taraškievica orthography)"},
            "2": {"code": "en", "name": "English", "localname": "English"},
            "3": {"code": "nb", "name": "norsk bokmål"},
            "specials": [
                {"url": "https://meta.wikimedia.org", "dbname": "metawiki", "code": "meta"}
            ]
        }
    }"#;

    const OTHER_SITEMATRIX: &str = r#"{"sitematrix": {"count": 1, "0": {"code": "de", "localname": "German"}}}"#;

    /// A fetcher that counts calls and returns a canned response.
    struct Canned {
        body: Option<&'static str>,
        calls: Cell<usize>,
    }

    impl Canned {
        fn new(body: Option<&'static str>) -> Self {
            Self {
                body,
                calls: Cell::new(0),
            }
        }
    }

    impl Fetch for Canned {
        fn fetch(&self) -> Result<String> {
            self.calls.set(self.calls.get() + 1);
            self.body
                .map(str::to_string)
                .ok_or_else(|| Error::Io(std::io::ErrorKind::ConnectionRefused.into(), "api".into()))
        }
    }

    fn make_stale(path: &Path) {
        let old = SystemTime::now() - Duration::from_secs(30 * 24 * 60 * 60);
        set_file_mtime(path, FileTime::from_system_time(old)).unwrap();
    }

    #[test]
    fn parse_sitematrix() {
        let table = LanguageTable::from_sitematrix(SITEMATRIX).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.language_name("aa"), Some("Afar"));
        assert_eq!(
            table.language_name("be-x-old"),
            Some("Belarusian (Taraškievica orthography)")
        );
        assert_eq!(table.language_name("nb"), Some("norsk bokmål"));
        assert_eq!(table.language_name("meta"), None);
    }

    #[test]
    fn parse_garbage() {
        assert!(matches!(
            LanguageTable::from_sitematrix("<api/>"),
            Err(Error::Json(_))
        ));
        assert!(matches!(
            LanguageTable::from_sitematrix(r#"{"sitematrix": {"0": {"localname": "x"}}}"#),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn freshness() {
        let policy = Freshness::new(Duration::from_secs(60));
        let now = SystemTime::now();
        assert!(policy.is_fresh(now - Duration::from_secs(59), now));
        assert!(!policy.is_fresh(now - Duration::from_secs(60), now));
        assert!(policy.is_fresh(now + Duration::from_secs(3600), now));
    }

    #[test]
    fn fetches_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("langlist.json");
        let cache = LanguageCache::new(&path, Freshness::default(), Canned::new(Some(SITEMATRIX)));

        let table = cache.load().unwrap();
        assert_eq!(table.language_name("en"), Some("English"));
        assert_eq!(cache.fetcher.calls.get(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), SITEMATRIX);

        assert_eq!(cache.load().unwrap(), table);
        assert_eq!(cache.fetcher.calls.get(), 1, "fresh copy should be reused");
    }

    #[test]
    fn refetches_when_stale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("langlist.json");
        fs::write(&path, SITEMATRIX).unwrap();
        make_stale(&path);

        let cache = LanguageCache::new(
            &path,
            Freshness::default(),
            Canned::new(Some(OTHER_SITEMATRIX)),
        );
        let table = cache.load().unwrap();
        assert_eq!(cache.fetcher.calls.get(), 1);
        assert_eq!(table.language_name("de"), Some("German"));
        assert_eq!(table.language_name("en"), None);
    }

    #[test]
    fn stale_copy_when_offline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("langlist.json");
        fs::write(&path, SITEMATRIX).unwrap();
        make_stale(&path);

        let cache = LanguageCache::new(&path, Freshness::default(), Canned::new(None));
        let table = cache.load().unwrap();
        assert_eq!(cache.fetcher.calls.get(), 1);
        assert_eq!(table.language_name("en"), Some("English"));
    }

    #[test]
    fn unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("langlist.json");
        let cache = LanguageCache::new(&path, Freshness::default(), Canned::new(None));
        assert!(matches!(cache.load(), Err(Error::Unavailable(..))));
    }

    #[test]
    fn bad_response_keeps_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("langlist.json");
        fs::write(&path, SITEMATRIX).unwrap();

        let cache = LanguageCache::new(&path, Freshness::default(), Canned::new(Some("oops")));
        assert!(matches!(cache.refresh(), Err(Error::Json(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), SITEMATRIX);
    }

    #[test]
    fn corrupt_cache_is_refetched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("langlist.json");
        fs::write(&path, "{").unwrap();

        let cache = LanguageCache::new(&path, Freshness::default(), Canned::new(Some(SITEMATRIX)));
        assert_eq!(cache.load().unwrap().len(), 4);
        assert_eq!(cache.fetcher.calls.get(), 1);
    }
}
