use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::BuildError;

/// List all file names (not paths) in a directory, sorted.
/// Only returns regular files, not subdirectories.
pub fn list_files(dir: &Path) -> io::Result<Vec<String>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;

        if file_type.is_file() {
            if let Some(name) = entry.file_name().to_str() {
                files.push(name.to_string());
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Bundle every file currently in `out_dir` into a deflate-compressed zip at
/// `zip_path`, using bare filenames as entry names. The archive is a snapshot
/// of the directory, so files left over from earlier runs are included too.
/// A pre-existing archive at `zip_path` is overwritten.
pub fn package_archive(out_dir: &Path, zip_path: &Path) -> Result<(), BuildError> {
    let err = |e: String| BuildError::ArchiveFailed {
        path: zip_path.display().to_string(),
        reason: e,
    };

    let files = list_files(out_dir).map_err(|e| err(e.to_string()))?;

    let file = File::create(zip_path).map_err(|e| err(e.to_string()))?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for name in &files {
        zip.start_file(name.as_str(), options)
            .map_err(|e| err(e.to_string()))?;
        let mut source = File::open(out_dir.join(name)).map_err(|e| err(e.to_string()))?;
        io::copy(&mut source, &mut zip).map_err(|e| err(e.to_string()))?;
    }

    zip.finish().map_err(|e| err(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Read;
    use tempfile::tempdir;
    use zip::ZipArchive;

    fn entry_names(zip_path: &Path) -> Vec<String> {
        let archive = ZipArchive::new(File::open(zip_path).unwrap()).unwrap();
        archive.file_names().map(str::to_string).collect()
    }

    #[test]
    fn list_files_returns_only_files_sorted() {
        let dir = tempdir().unwrap();

        fs::write(dir.path().join("zebra.png"), b"z").unwrap();
        fs::write(dir.path().join("alpha.png"), b"a").unwrap();
        fs::create_dir(dir.path().join("subdir")).unwrap();

        let files = list_files(dir.path()).unwrap();

        assert_eq!(files, vec!["alpha.png", "zebra.png"]);
    }

    #[test]
    fn list_files_nonexistent_directory_errors() {
        assert!(list_files(Path::new("/nonexistent/directory")).is_err());
    }

    #[test]
    fn archive_uses_bare_filenames() {
        let dir = tempdir().unwrap();
        let out_dir = dir.path().join("assets");
        fs::create_dir(&out_dir).unwrap();
        fs::write(out_dir.join("icon.png"), b"png bytes").unwrap();
        fs::write(out_dir.join("manifest.webmanifest"), b"{}").unwrap();

        let zip_path = dir.path().join("pack.zip");
        package_archive(&out_dir, &zip_path).unwrap();

        let mut names = entry_names(&zip_path);
        names.sort();
        assert_eq!(names, vec!["icon.png", "manifest.webmanifest"]);
    }

    #[test]
    fn archive_content_roundtrips() {
        let dir = tempdir().unwrap();
        let out_dir = dir.path().join("assets");
        fs::create_dir(&out_dir).unwrap();
        fs::write(out_dir.join("icon.png"), b"png bytes").unwrap();

        let zip_path = dir.path().join("pack.zip");
        package_archive(&out_dir, &zip_path).unwrap();

        let mut archive = ZipArchive::new(File::open(&zip_path).unwrap()).unwrap();
        let mut entry = archive.by_name("icon.png").unwrap();
        let mut content = Vec::new();
        entry.read_to_end(&mut content).unwrap();
        assert_eq!(content, b"png bytes");
    }

    #[test]
    fn archive_includes_stale_files() {
        let dir = tempdir().unwrap();
        let out_dir = dir.path().join("assets");
        fs::create_dir(&out_dir).unwrap();
        fs::write(out_dir.join("icon.png"), b"fresh").unwrap();
        fs::write(out_dir.join("stale.png"), b"leftover from last run").unwrap();

        let zip_path = dir.path().join("pack.zip");
        package_archive(&out_dir, &zip_path).unwrap();

        assert!(entry_names(&zip_path).contains(&"stale.png".to_string()));
    }

    #[test]
    fn archive_overwrites_existing_zip() {
        let dir = tempdir().unwrap();
        let out_dir = dir.path().join("assets");
        fs::create_dir(&out_dir).unwrap();
        fs::write(out_dir.join("only.png"), b"x").unwrap();

        let zip_path = dir.path().join("pack.zip");
        fs::write(&zip_path, b"not a zip").unwrap();

        package_archive(&out_dir, &zip_path).unwrap();

        assert_eq!(entry_names(&zip_path), vec!["only.png"]);
    }

    #[test]
    fn archive_of_empty_directory_is_valid() {
        let dir = tempdir().unwrap();
        let out_dir = dir.path().join("assets");
        fs::create_dir(&out_dir).unwrap();

        let zip_path = dir.path().join("pack.zip");
        package_archive(&out_dir, &zip_path).unwrap();

        assert!(entry_names(&zip_path).is_empty());
    }

    #[test]
    fn archive_missing_out_dir_errors() {
        let dir = tempdir().unwrap();
        let zip_path = dir.path().join("pack.zip");

        let result = package_archive(&dir.path().join("missing"), &zip_path);

        assert!(matches!(result, Err(BuildError::ArchiveFailed { .. })));
    }
}
