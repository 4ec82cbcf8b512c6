//! Human-readable trace lines

use tokentrail_domain::{Reached, StepOutcome, TraceResult, TraceStep, WalkMode};

const INDENT: &str = "    ";

/// Render a whole trace: a header, then every step in walk order
pub fn render_trace(trace: &TraceResult) -> String {
    let title = match trace.mode {
        WalkMode::First => "→ Starting First-Reference Walkback",
        WalkMode::Full => "→ Starting Recursive Chain Discovery",
    };
    let mut lines = vec![
        title.to_string(),
        format!("Initial Target: {}", trace.seed),
        String::new(),
    ];
    lines.extend(trace.steps.iter().flat_map(render_step));
    lines.join("\n")
}

/// Lines for one step, indented by depth.
///
/// A step reached from a parent first gets the line announcing how it was
/// reached, then its outcome line.
pub fn render_step(step: &TraceStep) -> Vec<String> {
    let indent = INDENT.repeat(step.depth);
    let mut lines = Vec::with_capacity(2);

    match &step.reached {
        Reached::Seed => {}
        Reached::PathToken { entropy } => lines.push(format!(
            "{}↑ High entropy match: {} (entropy: {:.2})",
            indent, step.value, entropy
        )),
        Reached::Dependency { .. } => {
            lines.push(format!("{}↓ Dependency: {}", indent, step.value))
        }
    }

    let outcome = match &step.outcome {
        StepOutcome::Explained { request_line, .. } => format!("→ Found in: {}", request_line),
        StepOutcome::Unexplained => format!("× No reference found for: {}", step.value),
        StepOutcome::AlreadyVisited => format!("↺ Already visited: {}", step.value),
        StepOutcome::DepthLimit => format!("⋯ Depth limit reached at: {}", step.value),
    };
    lines.push(format!("{}{}", indent, outcome));
    lines
}
