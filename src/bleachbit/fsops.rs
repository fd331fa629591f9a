//! Filesystem copy primitives shared by the settings and cleaners modules

use filetime::FileTime;
use fs_extra::dir::{self, CopyOptions};
use std::fs;
use std::path::Path;

/// Copy a single file, preserving modification time and permission bits
/// where the platform allows.
///
/// `std::fs::copy` carries permissions over; the mtime is re-applied
/// afterwards via `filetime`.
pub fn copy_file_preserving(src: &Path, dst: &Path) -> std::io::Result<()> {
    fs::copy(src, dst)?;
    let metadata = fs::metadata(src)?;
    let mtime = FileTime::from_last_modification_time(&metadata);
    filetime::set_file_mtime(dst, mtime)?;
    Ok(())
}

/// Copy a directory tree into `dst`, merging with existing content.
///
/// Matching destination files are overwritten; destination files absent
/// from the source are left untouched. `dst` is created if missing.
pub fn copy_dir_merge(src: &Path, dst: &Path) -> fs_extra::error::Result<()> {
    if !dst.exists() {
        fs::create_dir_all(dst)?;
    }
    let options = CopyOptions::new().content_only(true).overwrite(true);
    dir::copy(src, dst, &options)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_copy_file_preserving_content_and_mtime() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src.ini");
        let dst = dir.path().join("dst.ini");
        fs::write(&src, "[bleachbit]\nauto_hide = True\n").unwrap();

        // Backdate the source so a preserved mtime is distinguishable
        let old = FileTime::from_unix_time(1_600_000_000, 0);
        filetime::set_file_mtime(&src, old).unwrap();

        copy_file_preserving(&src, &dst).unwrap();

        assert_eq!(fs::read(&dst).unwrap(), fs::read(&src).unwrap());
        let dst_mtime = FileTime::from_last_modification_time(&fs::metadata(&dst).unwrap());
        assert_eq!(dst_mtime.unix_seconds(), 1_600_000_000);
    }

    #[test]
    fn test_copy_dir_merge_keeps_extra_destination_files() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        let dst = dir.path().join("dst");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(&dst).unwrap();

        fs::write(src.join("a.xml"), "new").unwrap();
        fs::write(dst.join("a.xml"), "old").unwrap();
        fs::write(dst.join("extra.xml"), "keep").unwrap();

        copy_dir_merge(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(dst.join("a.xml")).unwrap(), "new");
        assert_eq!(fs::read_to_string(dst.join("extra.xml")).unwrap(), "keep");
    }

    #[test]
    fn test_copy_dir_merge_creates_missing_destination() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("nested")).unwrap();
        fs::write(src.join("nested").join("deep.xml"), "x").unwrap();

        let dst = dir.path().join("does").join("not").join("exist");
        copy_dir_merge(&src, &dst).unwrap();

        assert_eq!(
            fs::read_to_string(dst.join("nested").join("deep.xml")).unwrap(),
            "x"
        );
    }
}
