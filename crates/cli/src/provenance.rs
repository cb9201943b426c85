use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata used to generate a provenance sidecar.
pub struct Payload {
    pub params: Value,
    pub tag: Option<String>,
    pub summary: Value,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            tag: None,
            summary: Value::Null,
        }
    }

    pub fn tagged(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }

    pub fn with_summary(mut self, summary: Value) -> Self {
        self.summary = summary;
        self
    }
}

/// Write `<artifact>.provenance.json` next to the artifact: git rev, callsite, tag, params
/// and the batch summary.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = sidecar_path(artifact);
    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "segcross_version": segcross::VERSION,
        "callsite": { "file": callsite.file(), "line": callsite.line() },
        "tag": payload.tag,
        "params": payload.params,
        "summary": payload.summary,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `out/pairs.csv` -> `out/pairs.csv.provenance.json`, so CSV and Parquet
/// outputs of the same stem keep separate sidecars.
fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit hash for provenance: `GIT_COMMIT` at build time, then at run time,
/// then `git rev-parse HEAD`, else `"unknown"`.
pub fn current_git_rev() -> String {
    let runtime = std::env::var("GIT_COMMIT").ok();
    pick_rev(option_env!("GIT_COMMIT"), runtime.as_deref()).unwrap_or_else(head_rev)
}

fn pick_rev(build: Option<&str>, runtime: Option<&str>) -> Option<String> {
    [build, runtime]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

fn head_rev() -> String {
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
