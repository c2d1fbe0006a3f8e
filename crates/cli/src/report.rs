//! Text and JSON reports for a solved problem.
//!
//! The JSON document is the hand-off to plotting: points are `[x, y]` pairs,
//! lines carry both coefficient sets and both rendered forms.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use lp2d::api::{format_sig, line_views, LineView, Point2d, Problem, Solution};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LineDoc {
    pub slope_a: f64,
    pub slope_b: f64,
    pub gen_a: f64,
    pub gen_b: f64,
    pub gen_c: f64,
    pub kind: String,
    pub slope_form: String,
    pub general_form: String,
}

impl From<LineView> for LineDoc {
    fn from(v: LineView) -> Self {
        Self {
            slope_a: v.slope_a,
            slope_b: v.slope_b,
            gen_a: v.gen_a,
            gen_b: v.gen_b,
            gen_c: v.gen_c,
            kind: v.kind.to_string(),
            slope_form: v.slope_form,
            general_form: v.general_form,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReportDoc {
    pub objective: [f64; 2],
    pub lines: Vec<LineDoc>,
    pub candidates: Vec<[f64; 2]>,
    pub feasible: Vec<[f64; 2]>,
    pub optimal: Vec<[f64; 2]>,
    pub optimal_value: Option<f64>,
    pub range: [f64; 2],
}

fn pairs(points: &[Point2d]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

impl ReportDoc {
    pub fn new(problem: &Problem, sol: &Solution) -> Self {
        Self {
            objective: [problem.objective.c.x, problem.objective.c.y],
            lines: line_views(problem).into_iter().map(LineDoc::from).collect(),
            candidates: pairs(&sol.candidates),
            feasible: pairs(&sol.feasible),
            optimal: pairs(&sol.optimal),
            optimal_value: sol.optimal_value,
            range: [sol.range.0, sol.range.1],
        }
    }
}

fn join_points(points: &[Point2d]) -> String {
    if points.is_empty() {
        return "(none)".to_string();
    }
    points
        .iter()
        .map(Point2d::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Human-readable report, one section per pipeline stage.
pub fn render_text(problem: &Problem, sol: &Solution) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "maximize {}", problem.objective);
    let _ = writeln!(out, "subject to:");
    for (i, c) in problem.constraints.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}    [boundary {}]", i + 1, c, c.line);
    }
    let _ = writeln!(out, "candidates: {}", join_points(&sol.candidates));
    let _ = writeln!(out, "feasible:   {}", join_points(&sol.feasible));
    match sol.optimal_value {
        Some(v) => {
            let _ = writeln!(
                out,
                "optimal:    {} (value {})",
                join_points(&sol.optimal),
                format_sig(v, 3)
            );
        }
        None => {
            let _ = writeln!(out, "optimal:    (infeasible)");
        }
    }
    let _ = writeln!(
        out,
        "x range:    [{}, {}]",
        format_sig(sol.range.0, 3),
        format_sig(sol.range.1, 3)
    );
    out
}

/// Write the JSON report, creating parent directories as needed.
pub fn write_json(path: &Path, problem: &Problem, sol: &Solution) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating report dir {}", parent.display()))?;
        }
    }
    let doc = ReportDoc::new(problem, sol);
    std::fs::write(path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lp2d::lp::LimitationKind;
    use lp2d::SolveCfg;
    use serde_json::Value;
    use tempfile::tempdir;

    fn classroom() -> Problem {
        Problem::from_general(
            [
                (-2.0, 1.0, 2.0, LimitationKind::LessOrEqual),
                (1.0, 2.0, 8.0, LimitationKind::LessOrEqual),
            ],
            (3.0, 2.0),
        )
        .unwrap()
    }

    #[test]
    fn text_report_lists_every_stage() {
        let p = classroom();
        let sol = p.solve(&SolveCfg::default());
        let text = render_text(&p, &sol);
        assert!(text.starts_with("maximize 3x + 2y\n"));
        assert!(text.contains("1. y ≤ 2x + 2"));
        assert!(text.contains("-2x + 1y = 2"));
        assert!(text.contains("2. y ≤ -0.5x + 4    [boundary 1x + 2y = 8]"));
        assert!(text.contains("[0.8, 3.6]"));
        assert!(text.contains("optimal:    [8, 0] (value 24)"));
        assert!(text.contains("x range:    [-5.5, 12.5]"));
    }

    #[test]
    fn json_report_has_plain_pairs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out/report.json");
        let p = classroom();
        let sol = p.solve(&SolveCfg::default());
        write_json(&path, &p, &sol).unwrap();
        let doc: Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(doc["optimal"][0][0], 8.0);
        assert_eq!(doc["optimal"][0][1], 0.0);
        assert_eq!(doc["lines"][1]["general_form"], "1x + 2y = 8");
        assert_eq!(doc["lines"][0]["kind"], "≤");
        assert_eq!(doc["candidates"].as_array().unwrap().len(), 5);
        assert_eq!(doc["range"][0], -5.5);
    }
}
