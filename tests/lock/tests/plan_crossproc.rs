//! Cross-process determinism: the `plan_fixture` binary prints the same plan
//! regardless of working directory or environment, and matches the plan
//! computed in-process.

use std::path::Path;
use std::process::Command;

use gripper_planner::{plan, PlannerConfig, PlanningProblemV1};
use lock_tests::fixtures::fixture_path;

/// Resolve the path to the compiled binary.
///
/// `cargo test` puts test binaries in `target/debug/deps/`; the
/// `plan_fixture` binary lives one level up.
fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("plan_fixture");
    path.to_string_lossy().to_string()
}

fn run_variant(work_dir: &Path, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();
    let mut command = Command::new(&bin);
    command
        .arg(fixture_path("small_world.json"))
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LANG")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn {bin} (overrides={env_overrides:?}): {e}"));
    assert!(
        output.status.success(),
        "plan_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

fn workspace_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(Path::parent)
        .expect("workspace root exists")
}

// --- PLAN-DETERMINISM-CROSSPROC ---

#[test]
fn crossproc_determinism_three_env_variants() {
    let baseline = run_variant(workspace_root(), &[]);
    assert!(baseline.contains("problem_digest=sha256:"), "{baseline}");

    let tmp = tempfile::tempdir().unwrap();
    assert_eq!(baseline, run_variant(tmp.path(), &[]), "cwd changed output");

    assert_eq!(
        baseline,
        run_variant(workspace_root(), &[("LC_ALL", "C"), ("LANG", "C")]),
        "locale changed output"
    );

    assert_eq!(
        baseline,
        run_variant(
            workspace_root(),
            &[("RUST_LOG", "trace"), ("TZ", "America/New_York")]
        ),
        "logging or timezone changed output"
    );
}

#[test]
fn crossproc_output_matches_inprocess_plan() {
    let output = run_variant(workspace_root(), &[]);
    let problem = PlanningProblemV1::load(&fixture_path("small_world.json")).unwrap();
    let plan = plan(&problem, &PlannerConfig::default()).unwrap();

    assert!(output.contains(&format!("problem_digest={}\n", plan.problem_digest)));
    assert!(output.contains("actions=pick,right,drop\n"), "{output}");
    assert!(output.contains("cost=3\n"));
    assert!(output.contains(&format!("expansions={}\n", plan.stats.expansions)));
}
