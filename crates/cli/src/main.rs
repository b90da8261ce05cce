use anyhow::{ensure, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

use trifold::activity::Event;
use trifold::congruence::{check_asa, check_congruence, check_rha, check_rhs, check_sas, check_sss};
use trifold::fold::{
    calculate_feedback_intensity, detect_overlap, fold_triangle_along_bisector,
    generate_fold_keyframes, DEFAULT_KEYFRAME_STEPS,
};
use trifold::geom::rand::{draw_triangle, rigid_copy, ReplayToken, TriangleCfg};
use trifold::geom::{area, centroid, is_valid_triangle, measure_triangle, Triangle};
use trifold::session::{ActivitySession, SessionCfg, SessionSnapshot};

mod output;

#[derive(Parser)]
#[command(name = "trifold-cli")]
#[command(about = "Triangle folding lesson core: measure, compare, fold and replay sessions")]
struct Cmd {
    /// JSON file with `{tolerances, fold}`; missing fields use defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Side lengths, angles, area and validity of a triangle
    Measure {
        #[arg(long)]
        input: PathBuf,
    },
    /// Congruence verdict for a pair `{first, second}`
    Check {
        #[arg(long)]
        input: PathBuf,
    },
    /// Fold a triangle along its apex bisector
    Fold {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        angle: f64,
    },
    /// Eased fold angles for an animation
    Keyframes {
        #[arg(long)]
        from: f64,
        #[arg(long)]
        to: f64,
        #[arg(long, default_value_t = DEFAULT_KEYFRAME_STEPS)]
        steps: usize,
    },
    /// Draw a practice triangle and a congruent copy
    Practice {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Mirror the copy before moving it
        #[arg(long)]
        reflect: bool,
        /// Only draw isosceles triangles
        #[arg(long)]
        isosceles: bool,
    },
    /// Run a session over an event script and print the final snapshot
    Replay {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        script: PathBuf,
        /// Also write the snapshot (plus a provenance sidecar) here
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// Input of `check`.
#[derive(Deserialize)]
struct TrianglePair {
    #[serde(alias = "t1")]
    first: Triangle,
    #[serde(alias = "t2")]
    second: Triangle,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let cmd = Cmd::parse();
    let cfg = load_config(cmd.config.as_deref())?;
    let out = match cmd.action {
        Action::Measure { input } => measure(&input)?,
        Action::Check { input } => check(&input, &cfg)?,
        Action::Fold { input, angle } => fold(&input, angle, &cfg)?,
        Action::Keyframes { from, to, steps } => keyframes(from, to, steps),
        Action::Practice {
            seed,
            index,
            reflect,
            isosceles,
        } => practice(seed, index, reflect, isosceles, &cfg),
        Action::Replay { input, script, out } => {
            let snap = replay(&input, &script, &cfg)?;
            if let Some(path) = out {
                let params = json!({
                    "input": input.to_string_lossy(),
                    "script": script.to_string_lossy(),
                    "config": cfg,
                });
                let sidecar = output::write_with_sidecar(&path, &snap, params)?;
                tracing::info!(out = %path.display(), sidecar = %sidecar.display(), "snapshot written");
            }
            serde_json::to_value(snap)?
        }
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<SessionCfg> {
    match path {
        Some(p) => {
            let cfg: SessionCfg = output::read_json(p)?;
            tracing::info!(config = %p.display(), "loaded config");
            Ok(cfg)
        }
        None => Ok(SessionCfg::default()),
    }
}

fn measure(input: &Path) -> Result<Value> {
    let t: Triangle = output::read_json(input)?;
    Ok(json!({
        "measurement": measure_triangle(&t),
        "isValid": is_valid_triangle(&t),
        "area": area(&t),
        "centroid": centroid(&t),
    }))
}

fn check(input: &Path, cfg: &SessionCfg) -> Result<Value> {
    let pair: TrianglePair = output::read_json(input)?;
    let (t1, t2, tol) = (&pair.first, &pair.second, &cfg.tolerances);
    let result = check_congruence(t1, t2, tol);
    tracing::info!(kind = ?result.as_ref().map(|c| c.kind), "congruence checked");
    Ok(json!({
        "result": result,
        "rules": {
            "SSS": check_sss(t1, t2, tol),
            "SAS": check_sas(t1, t2, tol),
            "ASA": check_asa(t1, t2, tol),
            "RHS": check_rhs(t1, t2, tol),
            "RHA": check_rha(t1, t2, tol),
        }
    }))
}

fn fold(input: &Path, angle: f64, cfg: &SessionCfg) -> Result<Value> {
    let t: Triangle = output::read_json(input)?;
    ensure!(angle.is_finite(), "fold angle must be finite, got {angle}");
    Ok(json!({
        "fold": fold_triangle_along_bisector(&t, angle),
        "overlap": detect_overlap(&t, angle, &cfg.fold),
        "feedback": calculate_feedback_intensity(angle, &cfg.fold),
    }))
}

fn keyframes(from: f64, to: f64, steps: usize) -> Value {
    json!(generate_fold_keyframes(from, to, steps).collect::<Vec<f64>>())
}

fn practice(seed: u64, index: u64, reflect: bool, isosceles: bool, cfg: &SessionCfg) -> Value {
    let tok = ReplayToken::new(seed, index);
    let tri_cfg = if isosceles {
        TriangleCfg::isosceles()
    } else {
        TriangleCfg::default()
    };
    let original = draw_triangle(tri_cfg, tok);
    let copy = rigid_copy(&original, tok.next(), reflect);
    json!({
        "token": { "seed": seed, "index": index },
        "original": original,
        "copy": copy,
        "congruence": check_congruence(&original, &copy, &cfg.tolerances),
    })
}

fn replay(input: &Path, script: &Path, cfg: &SessionCfg) -> Result<SessionSnapshot> {
    let t: Triangle = output::read_json(input)?;
    let events: Vec<Event> = output::read_json(script)?;
    Ok(run_script(t, events, cfg))
}

fn run_script(t: Triangle, events: Vec<Event>, cfg: &SessionCfg) -> SessionSnapshot {
    let mut session = ActivitySession::with_config(t, *cfg);
    let total = events.len();
    for (i, ev) in events.into_iter().enumerate() {
        let step = session.dispatch(ev);
        tracing::debug!(event = i, %step, "dispatched");
    }
    let snap = session.snapshot();
    tracing::info!(events = total, step = %snap.step, collected = snap.progress.collected, "replay finished");
    snap
}
