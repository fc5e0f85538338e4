//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use domgen_core::{
    application::ports::{Filesystem, WalkEntry},
    error::{ScaffoldError, ScaffoldResult},
};

/// In-memory filesystem for testing.
///
/// Paths are stored in BTree collections, whose component-wise ordering
/// gives `walk` the same depth-first lexical order as the local adapter.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    // The bool accessors and the seeding/inspection helpers have no error
    // channel, so a poisoned lock panics here; the trait methods that return
    // Results map poisoning through lock_read/lock_write instead.
    fn read_inner(&self) -> std::sync::RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().expect("in-memory filesystem lock poisoned")
    }

    fn write_inner(&self) -> std::sync::RwLockWriteGuard<'_, MemoryFilesystemInner> {
        self.inner.write().expect("in-memory filesystem lock poisoned")
    }

    /// Seed a file, creating its parent directories (testing helper).
    pub fn seed_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let path = path.into();
        let mut inner = self.write_inner();
        let mut current = PathBuf::new();
        if let Some(parent) = path.parent() {
            for component in parent.components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }
        inner.files.insert(path, content.into());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.read_inner().files.get(path).cloned()
    }

    /// List all files (testing helper).
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.read_inner().files.keys().cloned().collect()
    }
}

impl Filesystem for MemoryFilesystem {
    fn read_dir_names(&self, path: &Path) -> ScaffoldResult<Vec<String>> {
        let inner = lock_read(&self.inner)?;
        if !inner.directories.contains(path) {
            return Err(ScaffoldError::Io {
                path: path.to_path_buf(),
                op: "read directory",
                reason: "no such directory".into(),
            });
        }
        let names = inner
            .directories
            .iter()
            .map(|p| p.as_path())
            .chain(inner.files.keys().map(|p| p.as_path()))
            .filter(|p| p.parent() == Some(path))
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        Ok(names)
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.read_inner();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.read_inner().directories.contains(path)
    }

    fn walk(&self, path: &Path) -> ScaffoldResult<Vec<WalkEntry>> {
        let inner = lock_read(&self.inner)?;
        let mut entries: Vec<WalkEntry> = inner
            .directories
            .iter()
            .map(|p| WalkEntry::dir(p.clone()))
            .chain(inner.files.keys().map(|p| WalkEntry::file(p.clone())))
            .filter(|e| e.path.starts_with(path) && e.path != path)
            .collect();
        // BTree ordering is per-collection; a single component-wise sort
        // interleaves directories and files the way a real walk does.
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }

    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        let mut inner = lock_write(&self.inner)?;
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
        Ok(())
    }

    fn create_file(&self, path: &Path) -> ScaffoldResult<()> {
        self.write_file(path, "")
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        let mut inner = lock_write(&self.inner)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ScaffoldError::Io {
                    path: path.to_path_buf(),
                    op: "create file",
                    reason: "parent directory does not exist".into(),
                });
            }
        }
        inner.files.insert(path.to_path_buf(), content.to_owned());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> ScaffoldResult<String> {
        let inner = lock_read(&self.inner)?;
        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| ScaffoldError::Io {
                path: path.to_path_buf(),
                op: "read file",
                reason: "no such file".into(),
            })
    }

    fn remove_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        let mut inner = lock_write(&self.inner)?;
        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        Ok(())
    }
}

fn lock_read(
    inner: &Arc<RwLock<MemoryFilesystemInner>>,
) -> ScaffoldResult<std::sync::RwLockReadGuard<'_, MemoryFilesystemInner>> {
    inner.read().map_err(|_| poisoned())
}

fn lock_write(
    inner: &Arc<RwLock<MemoryFilesystemInner>>,
) -> ScaffoldResult<std::sync::RwLockWriteGuard<'_, MemoryFilesystemInner>> {
    inner.write().map_err(|_| poisoned())
}

fn poisoned() -> ScaffoldError {
    ScaffoldError::Io {
        path: PathBuf::new(),
        op: "lock in-memory filesystem",
        reason: "lock poisoned".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_files_create_their_parents() {
        let fs = MemoryFilesystem::new();
        fs.seed_file("/tpl/entity/domain_entity.tmpl", "body");

        assert!(fs.is_dir(Path::new("/tpl/entity")));
        assert!(fs.exists(Path::new("/tpl/entity/domain_entity.tmpl")));
    }

    #[test]
    fn walk_interleaves_dirs_and_files_lexically() {
        let fs = MemoryFilesystem::new();
        fs.seed_file("/tpl/b/late.txt", "");
        fs.seed_file("/tpl/a/early.txt", "");
        fs.seed_file("/tpl/top.txt", "");

        let entries = fs.walk(Path::new("/tpl")).unwrap();
        let paths: Vec<_> = entries.iter().map(|e| e.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/tpl/a"),
                PathBuf::from("/tpl/a/early.txt"),
                PathBuf::from("/tpl/b"),
                PathBuf::from("/tpl/b/late.txt"),
                PathBuf::from("/tpl/top.txt"),
            ]
        );
    }

    #[test]
    fn read_dir_names_is_immediate_children_only() {
        let fs = MemoryFilesystem::new();
        fs.seed_file("/app/user/entity/user_entity.go", "");
        fs.seed_file("/app/auth/auth_entity.go", "");

        let mut names = fs.read_dir_names(Path::new("/app")).unwrap();
        names.sort();
        assert_eq!(names, vec!["auth", "user"]);
    }

    #[test]
    fn write_file_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        let err = fs
            .write_file(Path::new("/missing/file.go"), "content")
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::Io { .. }));
    }

    #[test]
    fn remove_dir_all_removes_the_subtree() {
        let fs = MemoryFilesystem::new();
        fs.seed_file("/app/user/entity/user_entity.go", "");
        fs.seed_file("/app/auth/auth_entity.go", "");

        fs.remove_dir_all(Path::new("/app/user")).unwrap();
        assert!(!fs.exists(Path::new("/app/user")));
        assert!(fs.exists(Path::new("/app/auth/auth_entity.go")));
    }
}
