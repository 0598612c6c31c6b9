//! Run-time configuration, taken from command-line options with environment
//! variable fallbacks.

use crate::langlist::{DEFAULT_API_URL, DEFAULT_MAX_AGE};
use std::{path::PathBuf, str::FromStr, time::Duration};

/// Errors that may occur when reading the configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A command-line option was malformed.
    #[error(transparent)]
    Args(#[from] pico_args::Error),

    /// An environment variable had a value that could not be parsed.
    #[error("invalid value '{1}' for {0}")]
    Env(&'static str, String),
}

/// Run-time configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// The `api.php` URL to fetch the sitematrix from.
    pub api_url: String,
    /// Where the language list is cached.
    pub cache_path: PathBuf,
    /// How old the cached language list may get before it is refetched.
    pub max_age: Duration,
    /// Where unresolved database names are recorded.
    pub problem_log: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            cache_path: "langlist.json".into(),
            max_age: DEFAULT_MAX_AGE,
            problem_log: "problems.txt".into(),
        }
    }
}

impl Config {
    /// Consumes the options from `args`, falling back to values from `env`,
    /// then to defaults.
    pub fn from_args(
        args: &mut pico_args::Arguments,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, Error> {
        let defaults = Self::default();
        Ok(Self {
            api_url: option(args, "--api", "SITENAME_API", &env)?.unwrap_or(defaults.api_url),
            cache_path: option(args, "--cache", "SITENAME_CACHE", &env)?
                .unwrap_or(defaults.cache_path),
            max_age: option::<u64>(args, "--max-age", "SITENAME_MAX_AGE", &env)?
                .map_or(defaults.max_age, Duration::from_secs),
            problem_log: option(args, "--problems", "SITENAME_PROBLEMS", &env)?
                .unwrap_or(defaults.problem_log),
        })
    }

    /// Reads the configuration from `args` and the process environment.
    pub fn from_env(args: &mut pico_args::Arguments) -> Result<Self, Error> {
        Self::from_args(args, |key| std::env::var(key).ok())
    }
}

/// Reads an option from the command line, or else from the environment.
fn option<T: FromStr>(
    args: &mut pico_args::Arguments,
    key: &'static str,
    var: &'static str,
    env: &impl Fn(&str) -> Option<String>,
) -> Result<Option<T>, Error>
where
    T::Err: core::fmt::Display,
{
    if let Some(value) = args.opt_value_from_str(key)? {
        Ok(Some(value))
    } else if let Some(value) = env(var) {
        value.parse().map(Some).map_err(|_| Error::Env(var, value))
    } else {
        Ok(None)
    }
}
