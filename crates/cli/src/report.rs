use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Write `<artifact>.summary.json` next to an output artifact, recording
/// the producing version and the run parameters.
pub fn write_summary<P: AsRef<Path>>(artifact: P, params: Value) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let summary_path = summary_path(artifact);
    if let Some(parent) = summary_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating summary dir {}", parent.display()))?;
        }
    }

    let doc = json!({
        "generator": format!("hyperball-cli {}", hyperball::VERSION),
        "params": params,
        "outputs": [artifact.to_string_lossy()],
    });
    fs::write(&summary_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", summary_path.display()))?;
    Ok(summary_path)
}

fn summary_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    let mut name = stem;
    name.push(".summary.json");
    artifact.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn summary_path_rewrites_extension() {
        let base = Path::new("/tmp/output/walk.json");
        assert_eq!(
            summary_path(base),
            Path::new("/tmp/output/walk.summary.json")
        );
    }

    #[test]
    fn write_summary_creates_file() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("walk.json");
        fs::write(&artifact, "[]").unwrap();
        let path = write_summary(&artifact, json!({"ticks": 10})).unwrap();
        assert!(path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["params"]["ticks"], 10);
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
    }
}
