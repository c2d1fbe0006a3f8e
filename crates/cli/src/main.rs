mod input;
mod provenance;
mod report;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use lp2d::cfg::{SolveCfg, DEFAULT_RANGE_EXTRA};
use lp2d::exercise::{draw_problem, ConstraintCount, ProblemCfg, ReplayToken};
use lp2d::lp::{LimitationKind, Problem};
use serde_json::json;
use tracing_subscriber::fmt::SubscriberBuilder;

use input::ObjectiveArg;
use provenance::Payload;

#[derive(Parser)]
#[command(name = "lp2d")]
#[command(about = "Graphical solver for two-variable linear programs")]
struct Cmd {
    #[command(flatten)]
    tol: TolArgs,

    #[command(subcommand)]
    action: Action,
}

/// Solver tolerances; defaults compare exactly.
#[derive(Args, Debug)]
struct TolArgs {
    /// Slack for constraint checks
    #[arg(long, global = true, default_value_t = 0.0)]
    eq_eps: f64,
    /// Objective values within this distance of the best are ties
    #[arg(long, global = true, default_value_t = 0.0)]
    tie_eps: f64,
    /// Keep candidates with infinite/NaN coordinates
    #[arg(long, global = true)]
    keep_non_finite: bool,
    /// Padding factor of the reported x range
    #[arg(long, global = true, default_value_t = DEFAULT_RANGE_EXTRA)]
    range_extra: f64,
}

impl TolArgs {
    fn cfg(&self) -> SolveCfg {
        SolveCfg {
            eq_eps: self.eq_eps.max(0.0),
            tie_eps: self.tie_eps.max(0.0),
            drop_non_finite: !self.keep_non_finite,
            range_extra: self.range_extra,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Classroom task 1: two resources, two products, maximize profit
    Task1 {
        /// Resource H used per unit of product 1
        #[arg(long, default_value_t = -2.0, allow_negative_numbers = true)]
        s1_h: f64,
        /// Resource H used per unit of product 2
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        s2_h: f64,
        /// Available amount of resource H
        #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
        h_limit: f64,
        /// Resource C used per unit of product 1
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        s1_c: f64,
        /// Resource C used per unit of product 2
        #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
        s2_c: f64,
        /// Available amount of resource C
        #[arg(long, default_value_t = 8.0, allow_negative_numbers = true)]
        c_limit: f64,
        /// Profit per unit of product 1
        #[arg(long, default_value_t = 3.0, allow_negative_numbers = true)]
        s1_profit: f64,
        /// Profit per unit of product 2
        #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
        s2_profit: f64,
        /// Limitation kind for both constraints (<=, >=, =)
        #[arg(long, default_value = "<=")]
        kind: LimitationKind,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Solve a problem file (.json or .csv)
    Solve {
        #[arg(long)]
        input: PathBuf,
        /// Objective coefficients `cx,cy`; overrides the file's objective
        #[arg(long, allow_hyphen_values = true)]
        objective: Option<ObjectiveArg>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Draw and solve a reproducible random exercise
    Random {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Fixed constraint count; default draws 2 to 4
        #[arg(long)]
        constraints: Option<usize>,
        #[arg(long, default_value_t = 5)]
        coef_max: i32,
        #[arg(long, default_value_t = 12)]
        rhs_max: i32,
        /// Kinds to draw from, comma-separated
        #[arg(long, value_delimiter = ',', default_value = "<=")]
        kinds: Vec<LimitationKind>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = cmd.tol.cfg();
    match cmd.action {
        Action::Task1 {
            s1_h,
            s2_h,
            h_limit,
            s1_c,
            s2_c,
            c_limit,
            s1_profit,
            s2_profit,
            kind,
            out,
        } => {
            let params = json!({
                "s1_h": s1_h, "s2_h": s2_h, "h_limit": h_limit,
                "s1_c": s1_c, "s2_c": s2_c, "c_limit": c_limit,
                "s1_profit": s1_profit, "s2_profit": s2_profit,
                "kind": kind.to_string(),
            });
            tracing::info!(%params, "task1");
            let problem = Problem::from_general(
                [(s1_h, s2_h, h_limit, kind), (s1_c, s2_c, c_limit, kind)],
                (s1_profit, s2_profit),
            )
            .context("building task 1")?;
            run(
                &problem,
                &cfg,
                out.as_deref(),
                Payload::new("task1", params),
            )
        }
        Action::Solve {
            input,
            objective,
            out,
        } => {
            tracing::info!(input = %input.display(), objective = ?objective, "solve");
            let problem = input::load_problem(&input, objective)?;
            let params = json!({
                "input": input.to_string_lossy(),
                "objective": [problem.objective.c.x, problem.objective.c.y],
            });
            run(
                &problem,
                &cfg,
                out.as_deref(),
                Payload::new("solve", params),
            )
        }
        Action::Random {
            seed,
            index,
            constraints,
            coef_max,
            rhs_max,
            kinds,
            out,
        } => {
            let pcfg = ProblemCfg {
                constraint_count: constraints
                    .map(ConstraintCount::Fixed)
                    .unwrap_or(ProblemCfg::default().constraint_count),
                coef_max,
                rhs_max,
                kinds: kinds.clone(),
            };
            tracing::info!(seed, index, ?pcfg, "random");
            let problem = draw_problem(&pcfg, ReplayToken::new(seed, index))?;
            let params = json!({
                "seed": seed, "index": index, "constraints": constraints,
                "coef_max": coef_max, "rhs_max": rhs_max,
                "kinds": kinds.iter().map(ToString::to_string).collect::<Vec<_>>(),
            });
            run(
                &problem,
                &cfg,
                out.as_deref(),
                Payload::new("random", params),
            )
        }
        Action::Report => {
            let doc = provenance::provenance_doc(&Payload::new("report", json!({})), &[]);
            println!("{}", serde_json::to_string_pretty(&doc)?);
            Ok(())
        }
    }
}

fn run(problem: &Problem, cfg: &SolveCfg, out: Option<&Path>, payload: Payload) -> Result<()> {
    let sol = problem.solve(cfg);
    tracing::info!(
        constraints = problem.constraints.len(),
        candidates = sol.candidates.len(),
        feasible = sol.feasible.len(),
        optimal = sol.optimal.len(),
        "solved"
    );
    if sol.is_infeasible() {
        tracing::warn!("no candidate point satisfies every constraint");
    }
    print!("{}", report::render_text(problem, &sol));
    if let Some(out) = out {
        report::write_json(out, problem, &sol)?;
        let sidecar = provenance::write_sidecar(out, payload)?;
        tracing::info!(report = %out.display(), provenance = %sidecar.display(), "wrote");
    }
    Ok(())
}
