use std::fs;
use std::path::Path;

use crate::error::Result;

/// Name of the dependency folder never listed as a subdirectory
pub const DEPENDENCY_DIR: &str = "node_modules";

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Lists immediate child directories of `dir` in enumeration order.
///
/// Hidden entries and anything whose name starts with the dependency folder
/// name are skipped. The dependency check is a prefix match, so entries like
/// `node_modules_backup` are skipped too.
pub fn child_directories(dir: &Path) -> Result<Vec<String>> {
    let mut directories = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_hidden(&name) || name.starts_with(DEPENDENCY_DIR) {
            continue;
        }
        // Stat follows symlinks; a broken link fails the whole scan
        if fs::metadata(entry.path())?.is_dir() {
            directories.push(name);
        }
    }

    Ok(directories)
}

/// Lists immediate child regular files of `dir` in enumeration order,
/// skipping hidden entries.
pub fn child_files(dir: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_hidden(&name) {
            continue;
        }
        if fs::metadata(entry.path())?.is_file() {
            files.push(name);
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::TempDir;

    fn create_file(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        let mut file = File::create(path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn test_child_directories_basic() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("guide")).unwrap();
        fs::create_dir(temp_dir.path().join("api")).unwrap();
        create_file(temp_dir.path(), "README.md", "# Docs");

        let mut dirs = child_directories(temp_dir.path()).unwrap();
        dirs.sort();

        assert_eq!(dirs, vec!["api", "guide"]);
    }

    #[test]
    fn test_child_directories_skips_hidden() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("visible")).unwrap();
        fs::create_dir(temp_dir.path().join(".git")).unwrap();
        fs::create_dir(temp_dir.path().join(".cache")).unwrap();

        let dirs = child_directories(temp_dir.path()).unwrap();

        assert_eq!(dirs, vec!["visible"]);
    }

    #[test]
    fn test_child_directories_skips_dependency_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("src")).unwrap();
        fs::create_dir(temp_dir.path().join("node_modules")).unwrap();

        let dirs = child_directories(temp_dir.path()).unwrap();

        assert_eq!(dirs, vec!["src"]);
    }

    #[test]
    fn test_child_directories_dependency_prefix_match() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("node_modules_backup")).unwrap();
        fs::create_dir(temp_dir.path().join("node")).unwrap();

        let dirs = child_directories(temp_dir.path()).unwrap();

        // Prefix match: node_modules_backup is excluded, node is not
        assert_eq!(dirs, vec!["node"]);
    }

    #[test]
    fn test_child_directories_excludes_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("sub")).unwrap();
        create_file(temp_dir.path(), "a.js", "");

        let dirs = child_directories(temp_dir.path()).unwrap();

        assert_eq!(dirs, vec!["sub"]);
    }

    #[test]
    fn test_child_directories_empty() {
        let temp_dir = TempDir::new().unwrap();
        assert!(child_directories(temp_dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_child_files_basic() {
        let temp_dir = TempDir::new().unwrap();
        create_file(temp_dir.path(), "a.js", "");
        create_file(temp_dir.path(), "README.md", "# Docs");
        fs::create_dir(temp_dir.path().join("sub")).unwrap();

        let mut files = child_files(temp_dir.path()).unwrap();
        files.sort();

        assert_eq!(files, vec!["README.md", "a.js"]);
    }

    #[test]
    fn test_child_files_skips_hidden() {
        let temp_dir = TempDir::new().unwrap();
        create_file(temp_dir.path(), "a.js", "");
        create_file(temp_dir.path(), ".eslintrc", "{}");

        let files = child_files(temp_dir.path()).unwrap();

        assert_eq!(files, vec!["a.js"]);
    }

    #[test]
    fn test_child_files_not_recursive() {
        let temp_dir = TempDir::new().unwrap();
        create_file(temp_dir.path(), "top.js", "");
        create_file(temp_dir.path(), "sub/nested.js", "");

        let files = child_files(temp_dir.path()).unwrap();

        assert_eq!(files, vec!["top.js"]);
    }

    #[test]
    fn test_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");

        assert!(child_directories(&missing).is_err());
        assert!(child_files(&missing).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_broken_symlink_fails_scan() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("ok")).unwrap();
        std::os::unix::fs::symlink(
            temp_dir.path().join("gone"),
            temp_dir.path().join("dangling"),
        )
        .unwrap();

        assert!(child_directories(temp_dir.path()).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_is_listed() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("real")).unwrap();
        std::os::unix::fs::symlink(temp_dir.path().join("real"), temp_dir.path().join("alias"))
            .unwrap();

        let mut dirs = child_directories(temp_dir.path()).unwrap();
        dirs.sort();

        assert_eq!(dirs, vec!["alias", "real"]);
    }
}
