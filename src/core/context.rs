use std::{
    cell::OnceCell,
    collections::HashMap,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context as _, Result, anyhow, bail};
use glob::Pattern;
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        data::{AllCatalogs, LocaleCatalog, MessageKey},
        file_scanner::{scan_source_files, scan_ts_files},
        id_usage::{SourceIds, collect_id_usages},
        parsers::parse_ts_file,
    },
    issues::ParseErrorIssue,
};

/// Loaded catalogs plus the configuration they were loaded with.
///
/// Catalogs are loaded eagerly; the source tree is only scanned when a rule
/// asks for [`source_ids`](Self::source_ids).
///
/// # Configuration Priority
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. CLI arguments (e.g., `--primary-locale en`)
/// 2. `.tsglotrc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory (for resolving relative paths).
    pub root_dir: PathBuf,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    /// Catalogs of every locale, keyed by locale code.
    pub catalogs: AllCatalogs,

    /// Files that could not be loaded.
    pub parse_errors: Vec<ParseErrorIssue>,

    /// Compiled `ignoreIds` patterns.
    ignore_ids: Vec<Pattern>,

    /// Id usages below the source root, `None` when it does not exist.
    source_ids: OnceCell<Option<SourceIds>>,
}

impl CheckContext {
    /// Create a new `CheckContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Config file is invalid
    /// - Translations directory doesn't exist
    /// - Primary locale catalog is not found
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        let root_dir = common_args
            .root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        if verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;

        if let Some(ref primary_locale) = common_args.primary_locale {
            config.primary_locale = primary_locale.clone();
        }

        if let Some(ref translations_root) = common_args.translations_root {
            config.translations_root = translations_root.to_string_lossy().to_string();
        }

        if let Some(ref source_root) = common_args.source_root {
            config.source_root = source_root.to_string_lossy().to_string();
        }

        let ctx = Self::load(config, root_dir, verbose)?;

        if ctx.primary_catalog().is_none() {
            return Err(anyhow!(
                "Primary locale '{}' catalog not found in '{}'",
                ctx.config.primary_locale,
                ctx.resolved_translations_dir().display()
            ));
        }

        Ok(ctx)
    }

    /// Scan and parse every catalog below the translations directory.
    ///
    /// Files are parsed in parallel; a file that fails to load becomes a
    /// [`ParseErrorIssue`] instead of aborting the run.
    pub fn load(config: Config, root_dir: PathBuf, verbose: bool) -> Result<Self> {
        let ignore_ids = config
            .ignore_ids
            .iter()
            .map(|p| {
                Pattern::new(p)
                    .with_context(|| format!("Invalid glob pattern in 'ignoreIds': \"{}\"", p))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut ctx = Self {
            config,
            root_dir,
            verbose,
            catalogs: HashMap::new(),
            parse_errors: Vec::new(),
            ignore_ids,
            source_ids: OnceCell::new(),
        };

        let translations_dir = ctx.resolved_translations_dir();
        if !translations_dir.is_dir() {
            bail!(
                "Translations directory not found: {}",
                translations_dir.display()
            );
        }

        let scan_result = scan_ts_files(
            &translations_dir.to_string_lossy(),
            &ctx.config.ignores,
            verbose,
        );

        if scan_result.skipped_count > 0 {
            eprintln!(
                "Warning: {} path(s) skipped due to access errors{}",
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        let (catalogs, parse_errors) = load_catalogs(&scan_result.files, verbose);
        ctx.catalogs = catalogs;
        ctx.parse_errors = parse_errors;
        Ok(ctx)
    }

    pub fn primary_locale(&self) -> &str {
        &self.config.primary_locale
    }

    pub fn primary_catalog(&self) -> Option<&LocaleCatalog> {
        self.catalogs.get(&self.config.primary_locale)
    }

    /// Locale codes, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.catalogs.keys().map(String::as_str).collect();
        locales.sort();
        locales
    }

    /// True if `key` matches one of the `ignoreIds` patterns.
    pub fn is_ignored(&self, key: &MessageKey) -> bool {
        is_ignored_key(&self.ignore_ids, key)
    }

    pub fn ignore_patterns(&self) -> &[Pattern] {
        &self.ignore_ids
    }

    /// Id usages found in the source tree (scanned on first call).
    ///
    /// Returns `None` when the source root is not a directory, in which case
    /// the rules comparing code and catalog have nothing to compare.
    pub fn source_ids(&self) -> Option<&SourceIds> {
        self.source_ids
            .get_or_init(|| {
                let source_dir = self.resolved_source_dir();
                if !source_dir.is_dir() {
                    if self.verbose {
                        eprintln!(
                            "Note: Source directory {} not found, skipping id usage checks",
                            source_dir.display()
                        );
                    }
                    return None;
                }

                let scan_result = scan_source_files(
                    &source_dir.to_string_lossy(),
                    &self.config.ignores,
                    self.verbose,
                );
                let sources = collect_id_usages(&scan_result.files, self.verbose);
                if self.verbose {
                    eprintln!(
                        "Note: Found {} id usage(s) in {} source file(s)",
                        sources.usages.len(),
                        sources.files_scanned
                    );
                }
                Some(sources)
            })
            .as_ref()
    }

    /// Resolve the translations directory path relative to root_dir.
    pub fn resolved_translations_dir(&self) -> PathBuf {
        self.resolve_dir(&self.config.translations_root)
    }

    /// Resolve the source directory path relative to root_dir.
    pub fn resolved_source_dir(&self) -> PathBuf {
        self.resolve_dir(&self.config.source_root)
    }

    fn resolve_dir(&self, configured: &str) -> PathBuf {
        let p = Path::new(configured);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            // Keep "./translations" as-is when running from the root itself
            let is_cur_dir = self
                .root_dir
                .components()
                .all(|c| matches!(c, Component::CurDir));
            if is_cur_dir {
                p.to_path_buf()
            } else {
                let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
                self.root_dir.join(rel)
            }
        }
    }
}

/// True if the display form of `key` matches one of `patterns`.
pub fn is_ignored_key(patterns: &[Pattern], key: &MessageKey) -> bool {
    if patterns.is_empty() {
        return false;
    }
    let key = key.to_string();
    patterns.iter().any(|p| p.matches(&key))
}

/// Parse `files` in parallel and index them by locale.
///
/// When two files declare the same locale, the first path wins and the
/// second is reported.
fn load_catalogs(files: &[String], verbose: bool) -> (AllCatalogs, Vec<ParseErrorIssue>) {
    let results: Vec<(String, Result<LocaleCatalog>)> = files
        .par_iter()
        .map(|file_path| {
            let result = parse_ts_file(Path::new(file_path)).map(LocaleCatalog::from_file);
            (file_path.clone(), result)
        })
        .collect();

    let mut catalogs: AllCatalogs = HashMap::new();
    let mut errors = Vec::new();

    for (file_path, result) in results {
        match result {
            Ok(catalog) => {
                if let Some(existing) = catalogs.get(&catalog.locale) {
                    errors.push(ParseErrorIssue {
                        error: format!(
                            "locale '{}' is already defined by {}",
                            catalog.locale,
                            existing.file_path()
                        ),
                        file_path,
                    });
                    continue;
                }
                if verbose {
                    eprintln!(
                        "Note: Loaded {} ({} messages) from {}",
                        catalog.locale,
                        catalog.file.message_count(),
                        file_path
                    );
                }
                catalogs.insert(catalog.locale.clone(), catalog);
            }
            Err(e) => {
                if verbose {
                    eprintln!("Warning: {} - {:#}", file_path, e);
                }
                errors.push(ParseErrorIssue {
                    file_path,
                    error: format!("{:#}", e),
                });
            }
        }
    }

    (catalogs, errors)
}
