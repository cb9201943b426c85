//! Tabular I/O for segment pairs (CSV or Parquet via polars).
//!
//! Input schema: `p0x,p0y,p1x,p1y,q0x,q0y,q1x,q1y`, one pair per row.
//! Classification appends `kind,t,s,t0,t1` (nulls where not applicable).

use anyhow::{bail, Context, Result};
use nalgebra::Vector2;
use polars::prelude::*;
use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use segcross::api::{intersect_checked, IntersectionResult, Seg2, SegCfg};

pub const PAIR_COLUMNS: [&str; 8] = ["p0x", "p0y", "p1x", "p1y", "q0x", "q0y", "q1x", "q1y"];

fn is_parquet(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "parquet")
}

/// Read the eight coordinate columns as `f64` (integers are cast).
pub fn read_pairs(path: &Path) -> Result<DataFrame> {
    let lf = if is_parquet(path) {
        LazyFrame::scan_parquet(path, ScanArgsParquet::default())
            .with_context(|| format!("scanning {}", path.display()))?
    } else {
        LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()
            .with_context(|| format!("reading {}", path.display()))?
    };
    let casts: Vec<Expr> = PAIR_COLUMNS
        .iter()
        .map(|name| col(*name).cast(DataType::Float64))
        .collect();
    let df = lf
        .select(casts)
        .collect()
        .with_context(|| format!("expected columns {:?} in {}", PAIR_COLUMNS, path.display()))?;
    Ok(df)
}

fn column_values(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let ca = df
        .column(name)
        .with_context(|| format!("missing column {name}"))?
        .f64()
        .with_context(|| format!("column {name} is not numeric"))?;
    if ca.null_count() > 0 {
        bail!("column {name} has {} null value(s)", ca.null_count());
    }
    Ok(ca.into_no_null_iter().collect())
}

/// Decode every row into a `(P, Q)` pair.
pub fn pairs_from_frame(df: &DataFrame) -> Result<Vec<(Seg2, Seg2)>> {
    let cols = PAIR_COLUMNS
        .iter()
        .map(|name| column_values(df, name))
        .collect::<Result<Vec<_>>>()?;
    let pairs = (0..df.height())
        .map(|i| {
            let pt = |k: usize| Vector2::new(cols[k][i], cols[k + 1][i]);
            (Seg2::new(pt(0), pt(2)), Seg2::new(pt(4), pt(6)))
        })
        .collect();
    Ok(pairs)
}

/// Encode pairs in the input schema (used by `sample`).
pub fn frame_from_pairs(pairs: &[(Seg2, Seg2)]) -> Result<DataFrame> {
    let pick: [fn(&(Seg2, Seg2)) -> f64; 8] = [
        |(p, _)| p.start.x,
        |(p, _)| p.start.y,
        |(p, _)| p.end.x,
        |(p, _)| p.end.y,
        |(_, q)| q.start.x,
        |(_, q)| q.start.y,
        |(_, q)| q.end.x,
        |(_, q)| q.end.y,
    ];
    let columns = PAIR_COLUMNS
        .iter()
        .zip(pick)
        .map(|(name, f)| Series::new((*name).into(), pairs.iter().map(f).collect::<Vec<f64>>()))
        .collect::<Vec<_>>();
    Ok(DataFrame::new(columns)?)
}

/// Per-kind counts of a classified batch.
pub type KindCounts = BTreeMap<&'static str, usize>;

/// Classify each row and append the result columns in place.
///
/// Fails on the first row with a NaN or infinite coordinate.
pub fn classify_frame(df: &mut DataFrame, cfg: &SegCfg) -> Result<KindCounts> {
    let pairs = pairs_from_frame(df)?;
    let mut counts = KindCounts::new();
    let n = pairs.len();
    let mut kinds = Vec::with_capacity(n);
    let (mut t, mut s) = (Vec::with_capacity(n), Vec::with_capacity(n));
    let (mut t0, mut t1) = (Vec::with_capacity(n), Vec::with_capacity(n));
    for (row, (p, q)) in pairs.iter().enumerate() {
        let r = intersect_checked(p.start, p.end, q.start, q.end, cfg)
            .with_context(|| format!("row {row}"))?;
        let kind = r.kind().as_str();
        *counts.entry(kind).or_insert(0) += 1;
        kinds.push(kind);
        match r {
            IntersectionResult::Unique { t: tt, s: ss } => {
                t.push(Some(tt));
                s.push(Some(ss));
                t0.push(None);
                t1.push(None);
            }
            IntersectionResult::Overlap(ov) => {
                t.push(None);
                s.push(None);
                t0.push(Some(ov.t0));
                t1.push(Some(ov.t1));
            }
            _ => {
                t.push(None);
                s.push(None);
                t0.push(None);
                t1.push(None);
            }
        }
    }
    df.with_column(Series::new("kind".into(), kinds))?;
    df.with_column(Series::new("t".into(), t))?;
    df.with_column(Series::new("s".into(), s))?;
    df.with_column(Series::new("t0".into(), t0))?;
    df.with_column(Series::new("t1".into(), t1))?;
    Ok(counts)
}

/// Write CSV, or Parquet when the extension is `.parquet`.
pub fn write_frame(df: &mut DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if is_parquet(path) {
        ParquetWriter::new(&mut file).finish(df)?;
    } else {
        CsvWriter::new(&mut file).finish(df)?;
    }
    Ok(())
}
