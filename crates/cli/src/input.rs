//! Problem files: JSON (serde) and CSV (polars).
//!
//! JSON: `{"constraints": [{"a": -2, "b": 1, "c": 2, "kind": "<="}], "objective": {"x": 3, "y": 2}}`
//! CSV: header `a,b,c[,kind]`, one general-form row `a*x + b*y (kind) c` per line.
//! A missing kind means `<=`. CSV files carry no objective; pass `--objective`.

use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use lp2d::lp::{LimitationKind, Problem};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ConstraintRow {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    #[serde(default = "default_kind")]
    pub kind: String,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
pub struct ObjectiveArg {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ProblemFile {
    pub constraints: Vec<ConstraintRow>,
    #[serde(default)]
    pub objective: Option<ObjectiveArg>,
}

fn default_kind() -> String {
    "<=".to_string()
}

impl FromStr for ObjectiveArg {
    type Err = String;

    /// `"cx,cy"`, e.g. `3,2`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("expected `cx,cy`, got `{s}`"))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|e| format!("bad objective coefficient `{}`: {e}", v.trim()))
        };
        Ok(Self {
            x: parse(x)?,
            y: parse(y)?,
        })
    }
}

/// Load a problem; `objective` overrides the file's objective.
pub fn load_problem(path: &Path, objective: Option<ObjectiveArg>) -> Result<Problem> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let (rows, file_objective) = match ext.as_deref() {
        Some("json") => {
            let bytes =
                std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let file: ProblemFile = serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing {}", path.display()))?;
            (file.constraints, file.objective)
        }
        Some("csv") => (read_csv_rows(path)?, None),
        _ => bail!(
            "unsupported problem file {} (expected .json or .csv)",
            path.display()
        ),
    };
    let Some(obj) = objective.or(file_objective) else {
        bail!("no objective given; add one to the file or pass --objective cx,cy");
    };
    rows_to_problem(&rows, obj)
}

pub fn rows_to_problem(rows: &[ConstraintRow], objective: ObjectiveArg) -> Result<Problem> {
    let parsed = rows
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let kind: LimitationKind = r
                .kind
                .parse()
                .with_context(|| format!("constraint {}", i + 1))?;
            Ok((r.a, r.b, r.c, kind))
        })
        .collect::<Result<Vec<_>>>()?;
    Problem::from_general(parsed, (objective.x, objective.y)).context("building problem")
}

fn read_csv_rows(path: &Path) -> Result<Vec<ConstraintRow>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("reading {}", path.display()))?
        .collect()?;
    tracing::debug!(rows = df.height(), cols = df.width(), "constraint_csv_shape");
    let a = f64_column(&df, "a")?;
    let b = f64_column(&df, "b")?;
    let c = f64_column(&df, "c")?;
    let kinds = kind_column(&df)?;
    let rows = a
        .into_iter()
        .zip(b)
        .zip(c)
        .zip(kinds)
        .map(|(((a, b), c), kind)| ConstraintRow { a, b, c, kind })
        .collect();
    Ok(rows)
}

fn f64_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let col = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?
        .cast(&DataType::Float64)?;
    let values = col
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(i, v)| v.with_context(|| format!("empty `{name}` in row {}", i + 1)))
        .collect::<Result<Vec<_>>>()?;
    Ok(values)
}

fn kind_column(df: &DataFrame) -> Result<Vec<String>> {
    let Ok(col) = df.column("kind") else {
        return Ok(vec![default_kind(); df.height()]);
    };
    let col = col.cast(&DataType::String)?;
    let kinds = col
        .str()?
        .into_iter()
        .map(|v| v.map_or_else(default_kind, str::to_string))
        .collect::<Vec<_>>();
    Ok(kinds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lp2d::SolveCfg;
    use std::fs;
    use tempfile::tempdir;

    fn row(a: f64, b: f64, c: f64, kind: &str) -> ConstraintRow {
        ConstraintRow {
            a,
            b,
            c,
            kind: kind.to_string(),
        }
    }

    #[test]
    fn objective_arg_parses_pairs() {
        assert_eq!(
            "3,2".parse::<ObjectiveArg>().unwrap(),
            ObjectiveArg { x: 3.0, y: 2.0 }
        );
        assert_eq!(
            " -1.5 , 4 ".parse::<ObjectiveArg>().unwrap(),
            ObjectiveArg { x: -1.5, y: 4.0 }
        );
        assert!("3".parse::<ObjectiveArg>().is_err());
        assert!("a,2".parse::<ObjectiveArg>().is_err());
    }

    #[test]
    fn json_problem_round_trips_through_solver() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("task.json");
        fs::write(
            &path,
            r#"{"constraints": [
                {"a": -2, "b": 1, "c": 2, "kind": ">="},
                {"a": 1, "b": 2, "c": 8, "kind": ">="}
            ], "objective": {"x": 3, "y": 2}}"#,
        )
        .unwrap();
        let p = load_problem(&path, None).unwrap();
        assert_eq!(p.constraints.len(), 2);
        let sol = p.solve(&SolveCfg::default());
        assert_eq!(sol.optimal.len(), 1);
        assert!((sol.optimal[0].x - 0.8).abs() < 1e-12);
        assert!((sol.optimal[0].y - 3.6).abs() < 1e-12);
    }

    #[test]
    fn csv_problem_needs_objective_flag() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("task.csv");
        fs::write(&path, "a,b,c,kind\n-2,1,2,<=\n1,2,8,<=\n").unwrap();
        assert!(load_problem(&path, None).is_err());
        let p = load_problem(&path, Some(ObjectiveArg { x: 3.0, y: 2.0 })).unwrap();
        assert_eq!(p.constraints[0].line.gen_a(), -2.0);
        assert_eq!(p.constraints[1].line.gen_c(), 8.0);
        assert_eq!(p.constraints[1].kind, LimitationKind::LessOrEqual);
        let sol = p.solve(&SolveCfg::default());
        assert_eq!(sol.optimal_value, Some(24.0));
    }

    #[test]
    fn csv_without_kind_defaults_to_less_or_equal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plain.csv");
        fs::write(&path, "a,b,c\n1,1,4\n").unwrap();
        let p = load_problem(&path, Some(ObjectiveArg { x: 1.0, y: 1.0 })).unwrap();
        assert_eq!(p.constraints[0].kind, LimitationKind::LessOrEqual);
    }

    #[test]
    fn bad_rows_report_which_constraint() {
        let rows = vec![row(1.0, 1.0, 1.0, "<="), row(1.0, 1.0, 1.0, "<")];
        let err = rows_to_problem(&rows, ObjectiveArg { x: 1.0, y: 1.0 }).unwrap_err();
        assert!(format!("{err:#}").contains("constraint 2"));

        let vertical = vec![row(1.0, 0.0, 1.0, "<=")];
        assert!(rows_to_problem(&vertical, ObjectiveArg { x: 1.0, y: 1.0 }).is_err());
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("task.txt");
        fs::write(&path, "").unwrap();
        assert!(load_problem(&path, Some(ObjectiveArg { x: 1.0, y: 1.0 })).is_err());
    }
}
