//! Dataset digest and crate-layering lock tests.
//!
//! 1. The dataset domain prefix keeps its wire form.
//! 2. No raw `DEGREES::` domain literals in production source outside `digest.rs`.
//! 3. The digest ignores CSV row order but not content.
//! 4. Crate dependencies point one way: kernel ← search ← harness.

use std::path::{Path, PathBuf};

use degrees_kernel::digest::DOMAIN_DATASET;
use degrees_kernel::load::{load_dir, MOVIES_FILE, PEOPLE_FILE, STARS_FILE};
use lock_tests::{load_small, small_fixture_dir, workspace_root};

#[test]
fn dataset_domain_wire_form() {
    assert_eq!(DOMAIN_DATASET, b"DEGREES::DATASET::V1\0");
    assert!(DOMAIN_DATASET.ends_with(&[0]));
}

#[test]
fn no_raw_domain_literals_outside_digest_module() {
    let root = workspace_root();
    let pattern = "b\"DEGREES::";
    let mut violations = Vec::new();
    for dir in ["kernel/src", "search/src", "harness/src"] {
        for path in rust_files(&root.join(dir)) {
            if path.file_name().and_then(|n| n.to_str()) == Some("digest.rs") {
                continue;
            }
            let Ok(content) = std::fs::read_to_string(&path) else {
                continue;
            };
            for (i, line) in content.lines().enumerate() {
                let trimmed = line.trim();
                if !trimmed.starts_with("//") && trimmed.contains(pattern) {
                    violations.push(format!("  {}:{}: {trimmed}", path.display(), i + 1));
                }
            }
        }
    }
    assert!(
        violations.is_empty(),
        "raw DEGREES:: domain literals outside digest.rs:\n{}",
        violations.join("\n")
    );
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut results = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                results.extend(rust_files(&path));
            } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
                results.push(path);
            }
        }
    }
    results
}

/// Copy the fixture into `dest`, optionally reversing the data rows of
/// every file and dropping the last star row.
fn copy_fixture(dest: &Path, reverse: bool, drop_last_star: bool) {
    for file in [PEOPLE_FILE, MOVIES_FILE, STARS_FILE] {
        let text = std::fs::read_to_string(small_fixture_dir().join(file)).unwrap();
        let mut lines: Vec<&str> = text.lines().collect();
        let header = lines.remove(0);
        if drop_last_star && file == STARS_FILE {
            lines.pop();
        }
        if reverse {
            lines.reverse();
        }
        let mut out = String::from(header);
        for line in lines {
            out.push('\n');
            out.push_str(line);
        }
        out.push('\n');
        std::fs::write(dest.join(file), out).unwrap();
    }
}

#[test]
fn digest_ignores_row_order() {
    let dir = tempfile::tempdir().unwrap();
    copy_fixture(dir.path(), true, false);
    let (reordered, _) = load_dir(dir.path()).unwrap();
    assert_eq!(reordered.digest(), load_small().digest());
}

#[test]
fn digest_tracks_appearances() {
    let dir = tempfile::tempdir().unwrap();
    copy_fixture(dir.path(), false, true);
    let (fewer, summary) = load_dir(dir.path()).unwrap();
    assert_eq!(summary.appearances, 19);
    assert_ne!(fewer.digest(), load_small().digest());
}

fn manifest(crate_dir: &str) -> String {
    std::fs::read_to_string(workspace_root().join(crate_dir).join("Cargo.toml")).unwrap()
}

#[test]
fn crate_layering_is_one_way() {
    let kernel = manifest("kernel");
    assert!(!kernel.contains("degrees-search"));
    assert!(!kernel.contains("degrees-harness"));
    assert!(!manifest("search").contains("degrees-harness"));
}
