//! Hygiene: source-level checks for the inventory crate.
//!
//! Each antipattern has a budget (ideally zero). To add one you have to fix
//! an existing one first; the budget never grows. Environment reads are
//! confined to the config module.

use std::fs;
use std::path::{Path, PathBuf};

/// Pattern, budget, and what to do instead.
const BUDGETS: &[(&str, usize, &str)] = &[
    // Panics.
    (".unwrap()", 0, "propagate or fall back"),
    (".expect(", 0, "propagate or fall back"),
    ("panic!(", 0, "return an error or degrade"),
    ("unreachable!(", 0, "make the state unrepresentable"),
    ("todo!(", 0, "implement it"),
    ("unimplemented!(", 0, "implement it"),
    // Silent loss.
    ("let _ =", 0, "inspect the result"),
    // The env lookup in config maps "unset" to None.
    (".ok()", 1, "inspect the error"),
    // Output goes through tracing.
    ("println!(", 0, "use tracing"),
    ("dbg!(", 0, "use tracing"),
    // Structure.
    ("#[allow(dead_code)]", 0, "delete the code"),
];

/// The only module allowed to read process environment variables.
const ENV_MODULE: &str = "config.rs";

struct SourceFile {
    path: PathBuf,
    content: String,
}

/// Production `.rs` files under `src/`, skipping `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    walk(Path::new("src"), &mut files);
    files
}

fn walk(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            walk(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if !is_rs || is_test {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path, content });
        }
    }
}

/// Per-file line counts for `pattern`, files without a hit omitted.
fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|f| (f.path.display().to_string(), f.content.lines().filter(|l| l.contains(pattern)).count()))
        .filter(|(_, n)| *n > 0)
        .collect()
}

fn report(hits: &[(String, usize)]) -> String {
    hits.iter().map(|(path, n)| format!("  {path}: {n}")).collect::<Vec<_>>().join("\n")
}

#[test]
fn antipattern_budgets() {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");

    let mut failures = Vec::new();
    for &(pattern, max, instead) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, n)| n).sum();
        if count > max {
            failures.push(format!("{pattern} found {count}, max {max} ({instead}):\n{}", report(&found)));
        }
    }
    assert!(failures.is_empty(), "budget exceeded:\n{}", failures.join("\n"));
}

#[test]
fn env_reads_stay_in_config() {
    let files: Vec<SourceFile> = source_files().into_iter().filter(|f| !f.path.ends_with(ENV_MODULE)).collect();
    let found = hits(&files, "std::env::");
    assert!(found.is_empty(), "environment read outside {ENV_MODULE}:\n{}", report(&found));
}
