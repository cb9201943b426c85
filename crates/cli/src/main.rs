mod provenance;
mod table;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use nalgebra::Vector2;
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

use provenance::{current_git_rev, write_sidecar, Payload};
use segcross::api::{
    draw_pairs, intersect_checked, IntersectionResult, PairCfg, Seg2PairKind, Seg2Replay, SegCfg,
    DEFAULT_TOL,
};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Segment intersection queries, batches and samples")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Classify one segment pair and print JSON
    Classify {
        #[arg(long, value_parser = parse_pt, allow_hyphen_values = true)]
        p0: (f64, f64),
        #[arg(long, value_parser = parse_pt, allow_hyphen_values = true)]
        p1: (f64, f64),
        #[arg(long, value_parser = parse_pt, allow_hyphen_values = true)]
        q0: (f64, f64),
        #[arg(long, value_parser = parse_pt, allow_hyphen_values = true)]
        q1: (f64, f64),
        #[command(flatten)]
        tol: TolArgs,
    },
    /// Classify every row of a CSV/Parquet table of pairs
    Batch {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        #[command(flatten)]
        tol: TolArgs,
    },
    /// Write random pairs in the batch input format
    Sample {
        #[arg(long, default_value = "generic")]
        kind: String,
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 10.0)]
        half_width: f64,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(clap::Args, Clone, Copy)]
struct TolArgs {
    /// Tolerance for determinant, norm and dot-product tests
    #[arg(long, default_value_t = DEFAULT_TOL)]
    tol: f64,
    /// Count undecided singular pairs (e.g. offset parallels) as hits
    #[arg(long)]
    conservative: bool,
}

impl TolArgs {
    fn cfg(self) -> SegCfg {
        if self.conservative {
            SegCfg::conservative(self.tol)
        } else {
            SegCfg::with_tol(self.tol)
        }
    }
}

fn parse_pt(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got {s:?}"))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("x: {e}"))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("y: {e}"))?;
    Ok((x, y))
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Classify { p0, p1, q0, q1, tol } => classify(p0, p1, q0, q1, tol.cfg()),
        Action::Batch { input, out, tol } => batch(input, out, tol.cfg(), cmd.tag),
        Action::Sample {
            kind,
            count,
            seed,
            half_width,
            out,
        } => sample(kind, count, seed, half_width, out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

/// JSON view of one classification.
#[derive(Serialize, Debug, PartialEq)]
struct ResultView {
    kind: &'static str,
    has_solution: bool,
    on_segments: bool,
    t: Option<f64>,
    s: Option<f64>,
    overlap: Option<OverlapView>,
}

#[derive(Serialize, Debug, PartialEq)]
struct OverlapView {
    t0: f64,
    t1: f64,
    s0: f64,
    s1: f64,
    begin: (f64, f64),
    end: (f64, f64),
}

impl ResultView {
    fn new(r: &IntersectionResult, tol: f64) -> Self {
        let (t, s) = match *r {
            IntersectionResult::Unique { t, s } => (Some(t), Some(s)),
            _ => (None, None),
        };
        let overlap = match r {
            IntersectionResult::Overlap(ov) => {
                let (b, e) = (ov.begin_point(), ov.end_point());
                Some(OverlapView {
                    t0: ov.t0,
                    t1: ov.t1,
                    s0: ov.s0,
                    s1: ov.s1,
                    begin: (b.x, b.y),
                    end: (e.x, e.y),
                })
            }
            _ => None,
        };
        Self {
            kind: r.kind().as_str(),
            has_solution: r.has_solution(),
            on_segments: r.lies_on_segments(tol),
            t,
            s,
            overlap,
        }
    }
}

fn classify(
    p0: (f64, f64),
    p1: (f64, f64),
    q0: (f64, f64),
    q1: (f64, f64),
    cfg: SegCfg,
) -> Result<()> {
    let v = |p: (f64, f64)| Vector2::new(p.0, p.1);
    let r = intersect_checked(v(p0), v(p1), v(q0), v(q1), &cfg)?;
    tracing::info!(kind = %r.kind(), tol = cfg.tol, policy = ?cfg.policy, "classify");
    println!("{}", serde_json::to_string_pretty(&ResultView::new(&r, cfg.tol))?);
    Ok(())
}

fn batch(input: String, out: String, cfg: SegCfg, tag: Option<String>) -> Result<()> {
    tracing::info!(input, out, tag = ?tag, tol = cfg.tol, policy = ?cfg.policy, "batch");
    let mut df = table::read_pairs(Path::new(&input))?;
    let counts = table::classify_frame(&mut df, &cfg)?;
    tracing::info!(rows = df.height(), counts = ?counts, "classified");
    if let Some(n) = counts.get("inconclusive") {
        tracing::warn!(rows = *n, "singular pairs left undecided");
    }
    table::write_frame(&mut df, Path::new(&out))?;

    let payload = Payload::new(serde_json::json!({
        "cmd": "batch",
        "input": input,
        "tol": cfg.tol,
        "policy": format!("{:?}", cfg.policy),
    }))
    .tagged(tag)
    .with_summary(serde_json::json!({ "rows": df.height(), "counts": counts }));
    let prov = write_sidecar(&out, payload)?;
    tracing::info!(provenance = %prov.display(), "wrote");
    Ok(())
}

fn pair_cfg(kind: Seg2PairKind, half_width: f64) -> Result<PairCfg> {
    if !half_width.is_finite() || half_width <= 0.0 {
        bail!("half-width must be finite and positive, got {half_width}");
    }
    Ok(PairCfg {
        kind,
        half_width,
        ..PairCfg::default()
    })
}

fn sample(
    kind: String,
    count: usize,
    seed: u64,
    half_width: f64,
    out: String,
    tag: Option<String>,
) -> Result<()> {
    let Some(pair_kind) = Seg2PairKind::parse(&kind) else {
        bail!("unknown kind {kind:?} (expected generic, crossing, collinear or parallel)");
    };
    let cfg = pair_cfg(pair_kind, half_width)?;
    tracing::info!(kind, count, seed, half_width, out, "sample");
    let pairs = draw_pairs(cfg, Seg2Replay { seed, index: 0 }, count);
    let mut df = table::frame_from_pairs(&pairs)?;
    table::write_frame(&mut df, Path::new(&out))?;

    let payload = Payload::new(serde_json::json!({
        "cmd": "sample",
        "kind": kind,
        "count": count,
        "seed": seed,
        "half_width": half_width,
    }))
    .tagged(tag);
    write_sidecar(&out, payload)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": current_git_rev(),
        "segcross_version": segcross::VERSION,
        "tag": tag,
        "defaults": { "tol": DEFAULT_TOL, "policy": "Strict" },
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn parse_pt_accepts_negative_and_spaces() {
        assert_eq!(parse_pt("1.5, -2").unwrap(), (1.5, -2.0));
        assert!(parse_pt("3").is_err());
        assert!(parse_pt("a,1").is_err());
    }

    #[test]
    fn classify_args_parse_negative_points() {
        let cmd = Cmd::try_parse_from([
            "cli", "classify", "--p0", "0,0", "--p1", "2,0", "--q0", "1,-1", "--q1", "1,2",
        ])
        .unwrap();
        match cmd.action {
            Action::Classify { q0, tol, .. } => {
                assert_eq!(q0, (1.0, -1.0));
                assert_eq!(tol.tol, DEFAULT_TOL);
                assert!(!tol.conservative);
            }
            _ => panic!("expected classify"),
        }
    }

    #[test]
    fn sample_rejects_unusable_half_width() {
        for w in [f64::INFINITY, f64::NAN, 0.0, -1.0] {
            assert!(pair_cfg(Seg2PairKind::Generic, w).is_err(), "{w}");
        }
        let cfg = pair_cfg(Seg2PairKind::Parallel, 2.5).unwrap();
        assert_eq!(cfg.half_width, 2.5);
        assert_eq!(cfg.kind, Seg2PairKind::Parallel);
    }

    #[test]
    fn result_view_for_crossing_and_overlap() {
        let cfg = SegCfg::default();
        let v = |x: f64, y: f64| Vector2::new(x, y);
        let r = intersect_checked(v(0.0, 0.0), v(2.0, 0.0), v(1.0, -1.0), v(1.0, 2.0), &cfg)
            .unwrap();
        let view = ResultView::new(&r, cfg.tol);
        assert_eq!(view.kind, "unique");
        assert!(view.on_segments && view.has_solution);
        assert!((view.t.unwrap() - 0.5).abs() < 1e-12);

        let r = intersect_checked(v(0.0, 0.0), v(2.0, 0.0), v(0.0, 0.0), v(1.0, 0.0), &cfg)
            .unwrap();
        let view = ResultView::new(&r, cfg.tol);
        assert_eq!(view.kind, "overlap");
        let ov = view.overlap.unwrap();
        assert_eq!(ov.begin, (0.0, 0.0));
        assert_eq!(ov.end, (1.0, 0.0));
        let json = serde_json::to_value(ResultView::new(&r, cfg.tol)).unwrap();
        assert_eq!(json["kind"], "overlap");
        assert!(json["t"].is_null());
    }
}
