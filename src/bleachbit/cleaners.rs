//! Cleaner-definition deployment
//!
//! Copies custom `.xml` cleaner files into the per-user BleachBit cleaners
//! directory so they show up in the application after a restart.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::fsops;

/// Token in cleaner files replaced with the deployed cleaners directory
const PATH_PLACEHOLDER: &str = "PLACEHOLDER_PATH";

/// Outcome of a deployment run
#[derive(Debug, Default)]
pub struct DeployReport {
    /// File names copied into the target directory
    pub copied: Vec<String>,
    /// File names that failed, with the error message
    pub failed: Vec<(String, String)>,
}

/// Deploy every `.xml` cleaner file from `source_dir` into `target_dir`.
///
/// The target directory is created if missing. Per-file copy failures are
/// collected in the report rather than aborting the run. Returns an empty
/// report when the source directory contains no cleaner files.
pub fn deploy_cleaners(source_dir: &Path, target_dir: &Path) -> Result<DeployReport> {
    if !source_dir.is_dir() {
        bail!("source cleaners directory not found: {}", source_dir.display());
    }

    let cleaner_files = collect_cleaner_files(source_dir)?;

    fs::create_dir_all(target_dir)
        .with_context(|| format!("Failed to create: {}", target_dir.display()))?;

    let mut report = DeployReport::default();

    for file in cleaner_files {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let dst = target_dir.join(&name);

        match fsops::copy_file_preserving(&file, &dst).map_err(anyhow::Error::from).and_then(|_| {
            rewrite_placeholder_paths(&dst, target_dir)
        }) {
            Ok(()) => report.copied.push(name),
            Err(e) => report.failed.push((name, e.to_string())),
        }
    }

    Ok(report)
}

/// Immediate `.xml` files in `dir`, sorted by name for stable output
fn collect_cleaner_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)
        .with_context(|| format!("Failed to read: {}", dir.display()))?
        .flatten()
    {
        let path = entry.path();
        let is_xml = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("xml"))
            .unwrap_or(false);
        if path.is_file() && is_xml {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Replace the path placeholder in a deployed cleaner file, if present
fn rewrite_placeholder_paths(cleaner_file: &Path, target_dir: &Path) -> Result<()> {
    let content = fs::read_to_string(cleaner_file)
        .with_context(|| format!("Failed to read: {}", cleaner_file.display()))?;

    if !content.contains(PATH_PLACEHOLDER) {
        return Ok(());
    }

    let updated = content.replace(PATH_PLACEHOLDER, &target_dir.display().to_string());
    fs::write(cleaner_file, updated)
        .with_context(|| format!("Failed to write: {}", cleaner_file.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deploy_copies_only_xml_files() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("cleaners");
        let target = dir.path().join("deployed");
        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("browser.xml"), "<cleaner id=\"browser\"/>").unwrap();
        fs::write(source.join("notes.txt"), "not a cleaner").unwrap();

        let report = deploy_cleaners(&source, &target).unwrap();

        assert_eq!(report.copied, vec!["browser.xml"]);
        assert!(report.failed.is_empty());
        assert!(target.join("browser.xml").is_file());
        assert!(!target.join("notes.txt").exists());
    }

    #[test]
    fn test_deploy_rewrites_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("cleaners");
        let target = dir.path().join("deployed");
        fs::create_dir_all(&source).unwrap();
        fs::write(
            source.join("custom.xml"),
            "<option path=\"PLACEHOLDER_PATH/cache\"/>",
        )
        .unwrap();

        deploy_cleaners(&source, &target).unwrap();

        let deployed = fs::read_to_string(target.join("custom.xml")).unwrap();
        assert!(!deployed.contains(PATH_PLACEHOLDER));
        assert!(deployed.contains(&target.display().to_string()));
        // Source file keeps its placeholder
        let original = fs::read_to_string(source.join("custom.xml")).unwrap();
        assert!(original.contains(PATH_PLACEHOLDER));
    }

    #[test]
    fn test_deploy_missing_source_fails() {
        let dir = tempfile::tempdir().unwrap();

        let result = deploy_cleaners(&dir.path().join("absent"), &dir.path().join("target"));
        assert!(result.is_err());
    }

    #[test]
    fn test_deploy_empty_source_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("cleaners");
        fs::create_dir_all(&source).unwrap();

        let report = deploy_cleaners(&source, &dir.path().join("target")).unwrap();
        assert!(report.copied.is_empty());
        assert!(report.failed.is_empty());
    }

    #[test]
    fn test_deploy_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("cleaners");
        let target = dir.path().join("deployed");
        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("b.xml"), "<b/>").unwrap();
        fs::write(source.join("a.xml"), "<a/>").unwrap();

        let report = deploy_cleaners(&source, &target).unwrap();
        assert_eq!(report.copied, vec!["a.xml", "b.xml"]);
    }
}
