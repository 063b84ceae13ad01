//! Cross-process determinism.
//!
//! Spawns the `query_fixture` binary under several environment variants
//! and asserts that all produce identical output: loading, digesting and
//! searching must not depend on cwd, locale, or hash-map seeding.

use std::path::Path;
use std::process::Command;

use lock_tests::{small_fixture_dir, workspace_root};

/// `cargo test` puts test binaries in `target/<profile>/deps/`; the
/// `query_fixture` binary lives one level up.
fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("query_fixture");
    path.to_string_lossy().to_string()
}

fn run_variant(work_dir: &Path, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();
    let mut command = Command::new(&bin);
    command
        .arg(small_fixture_dir())
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!(
            "failed to spawn {bin} (work_dir={}, overrides={env_overrides:?}): {e}",
            work_dir.display()
        )
    });
    assert!(
        output.status.success(),
        "query_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_four_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);

    assert!(
        baseline.contains("dataset_digest=sha256:"),
        "baseline output missing dataset_digest"
    );
    assert!(baseline.contains("query=144->102 termination=goal_reached"));
    assert!(baseline.contains("path=93779:705,109830:158,112384:102"));
    assert!(baseline.contains("query=102->914612 termination=frontier_exhausted"));

    let alt_cwd = std::env::temp_dir();
    assert_eq!(
        baseline,
        run_variant(&alt_cwd, &[]),
        "output differs when cwd changes to {}",
        alt_cwd.display()
    );

    assert_eq!(
        baseline,
        run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]),
        "output differs when LC_ALL=C LANG=C"
    );

    assert_eq!(
        baseline,
        run_variant(
            &root,
            &[
                ("DEGREES_NOISE", "1"),
                ("RUST_LOG", "trace"),
                ("LC_ALL", "tr_TR.UTF-8"),
            ],
        ),
        "output differs with noise env vars"
    );
}
