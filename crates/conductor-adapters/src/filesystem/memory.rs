//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use conductor_core::{
    application::ApplicationError, application::ports::Filesystem, error::ConductorResult,
};

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Seed a file without the parent-directory check (testing helper).
    pub fn seed_file(&self, path: &Path, content: &str) {
        let mut inner = self.inner.write().unwrap();
        if let Some(parent) = path.parent() {
            let mut current = PathBuf::new();
            for component in parent.components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }
        inner.files.insert(path.to_path_buf(), content.to_string());
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut files: Vec<PathBuf> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    fn lock_write(
        &self,
    ) -> ConductorResult<std::sync::RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| {
            ApplicationError::FilesystemError {
                path: PathBuf::new(),
                reason: "memory filesystem lock poisoned".into(),
            }
            .into()
        })
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.directories.contains(path)
    }

    fn read_to_string(&self, path: &Path) -> ConductorResult<String> {
        let inner = self.inner.read().unwrap();
        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Failed to read file: not found".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> ConductorResult<()> {
        let mut inner = self.lock_write()?;

        // Parent must exist, same as the real filesystem.
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> ConductorResult<()> {
        let mut inner = self.lock_write()?;
        let content = inner.files.get(from).cloned().ok_or_else(|| {
            conductor_core::error::ConductorError::from(ApplicationError::FilesystemError {
                path: from.to_path_buf(),
                reason: "Failed to copy file: source not found".into(),
            })
        })?;
        inner.files.insert(to.to_path_buf(), content);
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> ConductorResult<()> {
        let mut inner = self.lock_write()?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn remove_file(&self, path: &Path) -> ConductorResult<()> {
        let mut inner = self.lock_write()?;
        inner.files.remove(path).map(|_| ()).ok_or_else(|| {
            conductor_core::error::ConductorError::from(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Failed to remove file: not found".into(),
            })
        })
    }

    fn remove_dir_all(&self, path: &Path) -> ConductorResult<()> {
        let mut inner = self.lock_write()?;

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
