//! Binary that plans the small-world fixture and prints deterministic
//! output lines for cross-process verification.
//!
//! Usage: `plan_fixture <problem.json>`
//!
//! Output: key=value lines. Timing is deliberately omitted.

use std::path::PathBuf;

use gripper_planner::{plan, PlannerConfig, PlanningProblemV1};

fn main() {
    let path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .expect("usage: plan_fixture <problem.json>");
    let problem = PlanningProblemV1::load(&path).expect("problem loads");
    let plan = plan(&problem, &PlannerConfig::default()).expect("plan found");

    println!("problem_digest={}", plan.problem_digest);
    println!("actions={}", plan.labels().join(","));
    println!("cost={}", plan.cost);
    println!("expansions={}", plan.stats.expansions);
    println!("nodes_generated={}", plan.stats.nodes_generated);
    println!(
        "final_state={}",
        serde_json::to_string(&plan.final_state).expect("state serializes")
    );
}
