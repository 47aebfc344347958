//! Recursive source file discovery.

use std::fs;
use std::path::{Path, PathBuf};

use super::SourceFile;
use crate::error::{AuditError, Result};

/// Find and read every file under `root` whose name ends in `.{extension}`.
///
/// A file named exactly `.zig` matches too, as it would for `**/*.zig`.
///
/// Directories whose name appears in `exclude_dirs` are not entered.
/// Symlinked directories are not followed. Results are sorted by relative
/// path.
pub fn discover(root: &Path, extension: &str, exclude_dirs: &[String]) -> Result<Vec<SourceFile>> {
    let mut relative_paths = Vec::new();
    collect(root, Path::new(""), extension, exclude_dirs, &mut relative_paths)?;
    relative_paths.sort();

    tracing::debug!(
        "Discovered {} .{} file(s) under {}",
        relative_paths.len(),
        extension,
        root.display()
    );

    relative_paths
        .into_iter()
        .map(|relative| SourceFile::read(root, relative))
        .collect()
}

fn collect(
    root: &Path,
    relative_dir: &Path,
    extension: &str,
    exclude_dirs: &[String],
    found: &mut Vec<PathBuf>,
) -> Result<()> {
    let suffix = format!(".{}", extension);
    let dir = root.join(relative_dir);
    let walk_err = |source| AuditError::Walk {
        path: dir.clone(),
        source,
    };

    for entry in fs::read_dir(&dir).map_err(walk_err)? {
        let entry = entry.map_err(walk_err)?;
        let file_type = entry.file_type().map_err(walk_err)?;
        let name = entry.file_name();
        let relative = relative_dir.join(&name);

        if file_type.is_dir() {
            if exclude_dirs.iter().any(|d| name.to_str() == Some(d.as_str())) {
                tracing::debug!("Skipping excluded directory {}", relative.display());
                continue;
            }
            collect(root, &relative, extension, exclude_dirs, found)?;
        } else if entry.path().is_file()
            && name.to_str().is_some_and(|n| n.ends_with(&suffix))
        {
            found.push(relative);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn finds_nested_files_sorted() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "src/main.zig", "main");
        write(temp.path(), "build.zig", "build");
        write(temp.path(), "src/fetch/mod.zig", "mod");
        write(temp.path(), "src/fetch/README.md", "readme");

        let files = discover(temp.path(), "zig", &[]).unwrap();
        let rels: Vec<_> = files.iter().map(|f| f.relative.clone()).collect();
        assert_eq!(
            rels,
            vec![
                PathBuf::from("build.zig"),
                PathBuf::from("src/fetch/mod.zig"),
                PathBuf::from("src/main.zig"),
            ]
        );
        assert_eq!(files[0].content, "build");
    }

    #[test]
    fn skips_excluded_directories() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "src/main.zig", "");
        write(temp.path(), "zig-out/gen.zig", "");

        let files = discover(temp.path(), "zig", &["zig-out".to_string()]).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].relative, PathBuf::from("src/main.zig"));
    }

    #[test]
    fn bare_extension_file_name_is_discovered() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "src/.zig", "const x = (;");
        write(temp.path(), "src/notzig", "");
        write(temp.path(), "src/main.zig.bak", "");

        let files = discover(temp.path(), "zig", &[]).unwrap();
        let rels: Vec<_> = files.iter().map(|f| f.relative.clone()).collect();
        assert_eq!(rels, vec![PathBuf::from("src/.zig")]);
    }

    #[test]
    fn includes_hidden_directories() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), ".zig-cache/o/x.zig", "");

        let files = discover(temp.path(), "zig", &[]).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn extension_must_match_exactly() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "a.zig.bak", "");
        write(temp.path(), "b.zon", "");

        assert!(discover(temp.path(), "zig", &[]).unwrap().is_empty());
    }

    #[test]
    fn missing_root_is_a_walk_error() {
        let temp = TempDir::new().unwrap();
        let result = discover(&temp.path().join("nope"), "zig", &[]);
        assert!(matches!(result, Err(AuditError::Walk { .. })));
    }
}
