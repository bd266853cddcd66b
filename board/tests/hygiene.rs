//! Hygiene: keeps panic-prone and error-swallowing patterns out of the
//! model crate. Test files (`*_test.rs`) are exempt; production sources in
//! `src/` must stay clean. Budgets are all zero and must never grow.

use std::fs;
use std::path::{Path, PathBuf};

const BANNED: &[&str] = &[
    ".unwrap()",
    ".expect(",
    "panic!(",
    "unreachable!(",
    "todo!(",
    "unimplemented!(",
    "let _ =",
    ".ok()",
    "#[allow(dead_code)]",
];

fn production_sources(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs")
            && !path.to_string_lossy().ends_with("_test.rs")
        {
            out.push(path);
        }
    }
}

#[test]
fn model_sources_are_free_of_banned_patterns() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found; run from the crate root");

    let mut violations = Vec::new();
    for path in files {
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        for (lineno, line) in content.lines().enumerate() {
            for pattern in BANNED {
                if line.contains(pattern) {
                    violations.push(format!("{}:{}: {pattern}", path.display(), lineno + 1));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "banned patterns in model sources:\n{}",
        violations.join("\n")
    );
}
