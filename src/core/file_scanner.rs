use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Extensions of the files searched for message id usages.
pub const SOURCE_EXTENSIONS: &[&str] = &[
    "cpp", "cc", "cxx", "c", "h", "hpp", "hxx", "mm", "qml", "js",
];

/// Result of scanning files.
pub struct ScanResult {
    /// Matching paths, sorted.
    pub files: Vec<String>,
    pub skipped_count: usize,
}

/// Collect every `.ts` catalog below `base_dir`.
pub fn scan_ts_files(base_dir: &str, ignore_patterns: &[String], verbose: bool) -> ScanResult {
    scan_files(base_dir, ignore_patterns, verbose, is_catalog_file)
}

/// Collect every C++/QML source file below `base_dir`.
pub fn scan_source_files(base_dir: &str, ignore_patterns: &[String], verbose: bool) -> ScanResult {
    scan_files(base_dir, ignore_patterns, verbose, is_source_file)
}

fn scan_files(
    base_dir: &str,
    ignore_patterns: &[String],
    verbose: bool,
    wanted: fn(&Path) -> bool,
) -> ScanResult {
    let mut files: Vec<String> = Vec::new();
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(Path::new(base_dir).join(p));
        }
    }

    for entry in WalkDir::new(base_dir).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();
        let path_str = path.to_string_lossy();

        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            continue;
        }

        if glob_patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        if path.is_file() && wanted(path) {
            files.push(path_str.into());
        }
    }

    files.sort();
    ScanResult {
        files,
        skipped_count,
    }
}

fn is_catalog_file(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("ts"))
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}
