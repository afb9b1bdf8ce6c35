use super::{Launcher, LauncherStore};
use crate::error::{DropletError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File-based launcher store. Creates the target directory if needed and
/// marks the written launcher executable so desktop environments will run
/// it on double-click.
#[derive(Debug, Default)]
pub struct FsLauncherStore;

impl FsLauncherStore {
    pub fn new() -> Self {
        Self
    }
}

impl LauncherStore for FsLauncherStore {
    fn write(&mut self, dir: &Path, launcher: &Launcher) -> Result<PathBuf> {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(DropletError::Io)?;
        }

        let path = dir.join(launcher.filename());
        fs::write(&path, &launcher.manifest).map_err(DropletError::Io)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
                .map_err(DropletError::Io)?;
        }

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn launcher() -> Launcher {
        Launcher {
            server: "h".to_string(),
            manifest: "[Desktop Entry]\n".to_string(),
        }
    }

    #[test]
    fn test_write_creates_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = FsLauncherStore::new();

        let path = store.write(temp_dir.path(), &launcher()).unwrap();
        assert_eq!(path, temp_dir.path().join("Droplet-h.desktop"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "[Desktop Entry]\n");
    }

    #[test]
    fn test_write_creates_missing_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("a/b");
        let mut store = FsLauncherStore::new();

        let path = store.write(&nested, &launcher()).unwrap();
        assert!(path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_written_launcher_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = FsLauncherStore::new();

        let path = store.write(temp_dir.path(), &launcher()).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }

    #[test]
    fn test_rewrite_overwrites_same_server() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = FsLauncherStore::new();

        store.write(temp_dir.path(), &launcher()).unwrap();
        let updated = Launcher {
            server: "h".to_string(),
            manifest: "updated\n".to_string(),
        };
        let path = store.write(temp_dir.path(), &updated).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "updated\n");
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }
}
