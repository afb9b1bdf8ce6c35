//! Launcher persistence.
//!
//! Writing the `.desktop` file is abstracted behind [`LauncherStore`] so the
//! shortcut command can be tested without touching the filesystem:
//!
//! - [`fs::FsLauncherStore`]: production file-based store; writes one
//!   executable launcher per server target into the requested directory.
//! - [`memory::MemLauncherStore`]: in-memory store for tests.

use crate::error::Result;
use std::path::{Path, PathBuf};

pub mod fs;
pub mod memory;

/// A rendered launcher, ready to persist. One per server target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launcher {
    pub server: String,
    pub manifest: String,
}

impl Launcher {
    /// File name the launcher is stored under. Writing the same server
    /// again overwrites the previous launcher.
    pub fn filename(&self) -> String {
        format!("Droplet-{}.desktop", self.server)
    }
}

/// Abstract interface for launcher persistence.
pub trait LauncherStore {
    /// Write the launcher into `dir`, returning the path it landed at.
    fn write(&mut self, dir: &Path, launcher: &Launcher) -> Result<PathBuf>;
}
