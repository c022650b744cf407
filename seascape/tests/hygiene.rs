//! Hygiene: enforces coding standards at test time.
//!
//! Scans the seascape crate's production sources for constructs that can
//! panic inside the browser's animation loop or silently swallow errors.
//! Budgets only ever shrink.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

/// Production `.rs` files under `src/`, skipping `*_test.rs`.
fn source_files() -> Vec<(String, String)> {
    let mut files = Vec::new();
    walk(Path::new("src"), &mut files);
    files
}

fn walk(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            walk(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

/// Fail when more than `max` lines contain `pattern`, listing offenders.
fn assert_budget(pattern: &str, max: usize) {
    let hits: Vec<(String, usize)> = source_files()
        .into_iter()
        .map(|(path, content)| {
            let count = content.lines().filter(|line| line.contains(pattern)).count();
            (path, count)
        })
        .filter(|(_, count)| *count > 0)
        .collect();
    let total: usize = hits.iter().map(|(_, c)| c).sum();
    let listing = hits
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(total <= max, "`{pattern}` budget exceeded: found {total}, max {max}.\n{listing}");
}

#[test]
fn sources_are_found() {
    assert!(source_files().iter().any(|(path, _)| path.ends_with("scene.rs")));
}

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()", 0);
}

#[test]
fn expect_budget() {
    assert_budget(".expect(", 0);
}

#[test]
fn panic_budget() {
    assert_budget("panic!(", 0);
}

#[test]
fn unreachable_budget() {
    assert_budget("unreachable!(", 0);
}

#[test]
fn todo_budget() {
    assert_budget("todo!(", 0);
}

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", 0);
}

#[test]
fn dot_ok_budget() {
    assert_budget(".ok()", 0);
}

#[test]
fn allow_dead_code_budget() {
    assert_budget("#[allow(dead_code)]", 0);
}

/// Every numeric `as` cast sits under a scoped `#[allow(clippy::cast_*)]`
/// within the two preceding lines.
#[test]
fn numeric_casts_are_scoped() {
    const CASTS: [&str; 6] = [" as f64", " as u32", " as i32", " as i64", " as usize", " as u64"];
    let mut offenders = Vec::new();
    for (path, content) in source_files() {
        let lines: Vec<&str> = content.lines().collect();
        for (i, line) in lines.iter().enumerate() {
            let code = line.trim_start();
            if code.starts_with("//") || !CASTS.iter().any(|cast| code.contains(cast)) {
                continue;
            }
            let allowed = lines[i.saturating_sub(2)..i]
                .iter()
                .any(|prev| prev.contains("#[allow(clippy::cast_"));
            if !allowed {
                offenders.push(format!("  {path}:{}: {}", i + 1, code));
            }
        }
    }
    assert!(offenders.is_empty(), "unscoped numeric casts:\n{}", offenders.join("\n"));
}
