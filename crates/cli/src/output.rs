use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Read and parse one JSON document.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

/// Pretty-print `value` to `path`, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

/// Write `value` to `artifact` plus a `<stem>.provenance.json` sidecar recording
/// the crate version, commit and the parameters that produced it.
pub fn write_with_sidecar<T: Serialize>(artifact: &Path, value: &T, params: Value) -> Result<PathBuf> {
    write_json(artifact, value)?;
    let sidecar = sidecar_path(artifact);
    let doc = json!({
        "version": trifold::VERSION,
        "code_rev": code_rev(),
        "params": params,
        "outputs": [artifact.to_string_lossy()]
    });
    write_json(&sidecar, &doc)?;
    Ok(sidecar)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("snapshot"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use trifold::geom::Triangle;

    #[test]
    fn sidecar_path_replaces_extension() {
        let derived = sidecar_path(Path::new("/tmp/out/run.json"));
        assert_eq!(derived, Path::new("/tmp/out/run.provenance.json"));
    }

    #[test]
    fn write_creates_parent_dirs_and_sidecar() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("nested/snap.json");
        let sidecar = write_with_sidecar(&artifact, &json!({"step": "action"}), json!({"events": 3})).unwrap();
        assert!(artifact.exists());
        let parsed: Value = read_json(&sidecar).unwrap();
        assert_eq!(parsed["params"]["events"], 3);
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
    }

    #[test]
    fn triangle_files_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tri.json");
        fs::write(&path, r#"{"A":[2.0,0.5],"B":[1.0,2.5],"C":[3.0,2.5]}"#).unwrap();
        let t: Triangle = read_json(&path).unwrap();
        assert_eq!(t, Triangle::from_xy([(2.0, 0.5), (1.0, 2.5), (3.0, 2.5)]));
    }

    #[test]
    fn parse_errors_name_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();
        let err = read_json::<Triangle>(&path).unwrap_err();
        assert!(format!("{err:#}").contains("bad.json"));
    }
}
