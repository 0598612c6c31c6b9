use rayon::prelude::*;
use sitename::{
    Freshness, LanguageCache, ProblemLog, Resolution, SiteMatrix, config::Config, convert_date,
    langlist, site_name,
};
use std::io::BufRead as _;

fn usage<T>(err: &'static str) -> anyhow::Result<T> {
    let exe = std::env::args().next().unwrap_or_default();
    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    println!("Usage: {exe} [options] name [<dbname>...]");
    println!("       {exe} [options] date <YYYYMMDD>");
    println!("       {exe} [options] refresh\n");
    println!("With no database names, names are read from stdin, one per line.\n");
    println!("Options (or environment variables):");
    println!("    --cache <path>: Language list cache (SITENAME_CACHE, default: langlist.json)");
    println!("    --max-age <secs>: Cache lifetime (SITENAME_MAX_AGE, default: 604800)");
    println!("    --api <url>: MediaWiki API (SITENAME_API, default: {})", langlist::DEFAULT_API_URL);
    println!("    --problems <path>: Unresolved name log (SITENAME_PROBLEMS, default: problems.txt)\n");
    Err(anyhow::Error::msg(err))
}

fn language_cache(config: &Config) -> LanguageCache {
    LanguageCache::new(
        &config.cache_path,
        Freshness::new(config.max_age),
        SiteMatrix::new(&config.api_url),
    )
}

fn name(config: &Config, mut dbnames: Vec<String>) -> anyhow::Result<()> {
    if dbnames.is_empty() {
        for line in std::io::stdin().lock().lines() {
            let line = line?;
            let line = line.trim();
            if !line.is_empty() {
                dbnames.push(line.to_string());
            }
        }
    }

    let languages = language_cache(config).load()?;
    log::debug!("Loaded {} languages", languages.len());

    let resolutions = dbnames
        .par_iter()
        .map(|dbname| site_name(dbname, &languages))
        .collect::<Vec<Resolution>>();

    let problems = ProblemLog::open(&config.problem_log)?;
    let mut unresolved = 0;
    for resolution in &resolutions {
        println!("{}\t{}", resolution.dbname, resolution.name);
        if problems.record(resolution)? {
            unresolved += 1;
        }
    }

    if unresolved != 0 {
        log::warn!(
            "{unresolved} of {} names unresolved; see {}",
            resolutions.len(),
            problems.path().display()
        );
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return usage("Help requested");
    }
    let config = Config::from_env(&mut args)?;
    let _ = args.contains("--");
    let Some(command) = args.opt_free_from_str::<String>()? else {
        return usage("Missing command");
    };
    let mut rest = args
        .finish()
        .into_iter()
        .map(|arg| {
            arg.into_string()
                .map_err(|arg| anyhow::anyhow!("Argument is not UTF-8: {}", arg.to_string_lossy()))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    match command.as_str() {
        "name" => name(&config, rest),
        "date" => {
            if rest.len() != 1 {
                return usage("Expected exactly one date");
            }
            println!("{}", convert_date(&rest.remove(0))?);
            Ok(())
        }
        "refresh" => {
            if !rest.is_empty() {
                return usage("Unknown extra arguments passed");
            }
            let table = language_cache(&config).refresh()?;
            println!("Cached {} languages at {}", table.len(), config.cache_path.display());
            Ok(())
        }
        _ => usage("Unknown command"),
    }
}
