use super::{Launcher, LauncherStore};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// In-memory launcher store for testing. Records every write.
#[derive(Debug, Default)]
pub struct MemLauncherStore {
    written: Vec<(PathBuf, Launcher)>,
}

impl MemLauncherStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn written(&self) -> &[(PathBuf, Launcher)] {
        &self.written
    }

    pub fn last(&self) -> Option<&(PathBuf, Launcher)> {
        self.written.last()
    }
}

impl LauncherStore for MemLauncherStore {
    fn write(&mut self, dir: &Path, launcher: &Launcher) -> Result<PathBuf> {
        let path = dir.join(launcher.filename());
        self.written.push((path.clone(), launcher.clone()));
        Ok(path)
    }
}
