//! Message ids referenced from C++ and QML sources.
//!
//! Id-based catalogs are filled by `lupdate` from calls such as
//! `qtTrId("err-no-host")`, optionally preceded by `//% "No host specified"`
//! meta strings that carry the engineering English text.

use std::{
    collections::{BTreeMap, HashSet},
    fs,
    path::Path,
    sync::LazyLock,
};

use rayon::prelude::*;
use regex::Regex;

static ID_CALL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\b(?:qtTrId|qsTrId|QT_TRID_NOOP|QT_TRID_N_NOOP)\s*\(\s*"([^"\\]*)""#).unwrap()
});

static META_TEXT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*//%\s*"((?:[^"\\]|\\.)*)""#).unwrap());

/// One reference to a message id in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdUsage {
    pub id: String,
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column of the call (1-indexed, in characters).
    pub col: usize,
    /// Text of the `//%` comment right before the call, if any.
    pub meta_text: Option<String>,
}

/// Every id usage found below the source root.
#[derive(Debug, Clone, Default)]
pub struct SourceIds {
    /// Usages sorted by file, then line and column.
    pub usages: Vec<IdUsage>,
    pub files_scanned: usize,
}

impl SourceIds {
    /// Distinct ids referenced anywhere.
    pub fn ids(&self) -> HashSet<&str> {
        self.usages.iter().map(|u| u.id.as_str()).collect()
    }

    /// Usages grouped by id.
    pub fn by_id(&self) -> BTreeMap<&str, Vec<&IdUsage>> {
        let mut grouped: BTreeMap<&str, Vec<&IdUsage>> = BTreeMap::new();
        for usage in &self.usages {
            grouped.entry(usage.id.as_str()).or_default().push(usage);
        }
        grouped
    }
}

/// Extract id usages from the text of one source file.
///
/// Consecutive `//%` lines are concatenated and attached to the next call.
pub fn extract_id_usages(content: &str, file_path: &str) -> Vec<IdUsage> {
    let mut usages = Vec::new();
    let mut pending_meta: Option<String> = None;

    for (index, line) in content.lines().enumerate() {
        if let Some(caps) = META_TEXT_REGEX.captures(line) {
            pending_meta
                .get_or_insert_with(String::new)
                .push_str(&unescape(&caps[1]));
            continue;
        }

        for caps in ID_CALL_REGEX.captures_iter(line) {
            let Some(call) = caps.get(0) else {
                continue;
            };
            usages.push(IdUsage {
                id: caps[1].to_string(),
                file_path: file_path.to_string(),
                line: index + 1,
                col: line[..call.start()].chars().count() + 1,
                meta_text: pending_meta.take(),
            });
        }
    }

    usages
}

/// Read and scan `files` in parallel.
///
/// Unreadable files are skipped; invalid UTF-8 is replaced.
pub fn collect_id_usages(files: &[String], verbose: bool) -> SourceIds {
    let per_file: Vec<Option<Vec<IdUsage>>> = files
        .par_iter()
        .map(|file_path| match fs::read(Path::new(file_path)) {
            Ok(bytes) => Some(extract_id_usages(
                &String::from_utf8_lossy(&bytes),
                file_path,
            )),
            Err(e) => {
                if verbose {
                    eprintln!("Warning: Cannot read {}: {}", file_path, e);
                }
                None
            }
        })
        .collect();

    let files_scanned = per_file.iter().filter(|r| r.is_some()).count();
    let mut usages: Vec<IdUsage> = per_file.into_iter().flatten().flatten().collect();
    usages.sort_by(|a, b| {
        a.file_path
            .cmp(&b.file_path)
            .then_with(|| a.line.cmp(&b.line))
            .then_with(|| a.col.cmp(&b.col))
    });

    SourceIds {
        usages,
        files_scanned,
    }
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
