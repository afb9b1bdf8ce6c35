//! SFTP transfer seam.
//!
//! The upload command talks to [`Transfer`], not to `ssh2` directly, so the
//! whole resolution-to-transfer path is testable without a remote host.
//! [`SftpTransfer`] is the production implementation: one TCP connection,
//! one SSH session, one file streamed over SFTP. No retry.

use crate::error::{DropletError, Result};
use crate::model::{AuthMethod, Field, SecretSpec};
use crate::resolve::ResolvedOptions;
use log::{debug, info};
use ssh2::Session;
use std::fs::File;
use std::io;
use std::net::TcpStream;
use std::path::{Path, PathBuf};

/// Everything one upload needs, pulled out of [`ResolvedOptions`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub server: String,
    pub port: u16,
    pub username: String,
    pub auth: AuthMethod,
    pub secret: SecretSpec,
    pub local_file: PathBuf,
    /// Remote directory, validated to end with `/`.
    pub remote_dir: String,
}

impl UploadRequest {
    pub fn from_options(opts: &ResolvedOptions) -> Result<Self> {
        Ok(Self {
            server: opts.text(Field::Server)?.to_string(),
            port: opts.port(Field::Port)?,
            username: opts.text(Field::Username)?.to_string(),
            auth: opts.auth(Field::AuthType)?,
            secret: opts.secret(Field::Password)?.clone(),
            local_file: PathBuf::from(opts.text(Field::File)?),
            remote_dir: opts.text(Field::Path)?.to_string(),
        })
    }

    /// Destination path: remote dir plus the local file's basename.
    pub fn remote_path(&self) -> Result<String> {
        let name = self
            .local_file
            .file_name()
            .ok_or(DropletError::InvalidFormat {
                field: Field::File,
                expected: "a path to a local file",
            })?;
        Ok(format!("{}{}", self.remote_dir, name.to_string_lossy()))
    }
}

/// Abstract interface for the actual file transfer.
pub trait Transfer {
    /// Upload exactly one file. `secret` is the already-resolved password
    /// or key passphrase, if any.
    fn upload(&mut self, request: &UploadRequest, secret: Option<&str>) -> Result<()>;
}

/// SFTP over `ssh2`.
pub struct SftpTransfer {
    key_file: PathBuf,
}

impl SftpTransfer {
    pub fn new(key_file: PathBuf) -> Self {
        Self { key_file }
    }
}

impl Transfer for SftpTransfer {
    fn upload(&mut self, request: &UploadRequest, secret: Option<&str>) -> Result<()> {
        let dest = request.remote_path()?;

        info!("connecting to {}:{}", request.server, request.port);
        let tcp = TcpStream::connect((request.server.as_str(), request.port))
            .map_err(|e| DropletError::Transport(e.to_string()))?;

        let mut session =
            Session::new().map_err(|e| DropletError::Transport(e.to_string()))?;
        session.set_tcp_stream(tcp);
        session
            .handshake()
            .map_err(|e| DropletError::Transport(e.to_string()))?;

        match request.auth {
            AuthMethod::Credentials => session
                .userauth_password(&request.username, secret.unwrap_or(""))
                .map_err(|e| DropletError::Authentication(e.to_string()))?,
            AuthMethod::Key => session
                .userauth_pubkey_file(&request.username, None, &self.key_file, secret)
                .map_err(|e| DropletError::Authentication(e.to_string()))?,
        }
        debug!("authenticated as {} via {}", request.username, request.auth);

        let sftp = session
            .sftp()
            .map_err(|e| DropletError::Transport(e.to_string()))?;
        let mut remote = sftp
            .create(Path::new(&dest))
            .map_err(|e| DropletError::Transport(e.to_string()))?;

        let mut local = File::open(&request.local_file).map_err(DropletError::Io)?;
        let bytes = io::copy(&mut local, &mut remote)
            .map_err(|e| DropletError::Transport(e.to_string()))?;

        info!(
            "uploaded {} ({} bytes) to {}:{}",
            request.local_file.display(),
            bytes,
            request.server,
            dest
        );
        Ok(())
    }
}

/// Recording stand-in for tests.
#[cfg(any(test, feature = "test_utils"))]
pub struct RecordingTransfer {
    pub uploads: Vec<(UploadRequest, Option<String>)>,
    pub fail_with: Option<fn() -> DropletError>,
}

#[cfg(any(test, feature = "test_utils"))]
impl RecordingTransfer {
    pub fn new() -> Self {
        Self {
            uploads: Vec::new(),
            fail_with: None,
        }
    }
}

#[cfg(any(test, feature = "test_utils"))]
impl Default for RecordingTransfer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "test_utils"))]
impl Transfer for RecordingTransfer {
    fn upload(&mut self, request: &UploadRequest, secret: Option<&str>) -> Result<()> {
        self.uploads
            .push((request.clone(), secret.map(str::to_string)));
        match self.fail_with {
            Some(make) => Err(make()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Action;
    use crate::resolve::resolve;
    use crate::schema::schema_for;

    fn request() -> UploadRequest {
        UploadRequest {
            server: "h".to_string(),
            port: 22,
            username: "u".to_string(),
            auth: AuthMethod::Credentials,
            secret: SecretSpec::Stored("secret".to_string()),
            local_file: PathBuf::from("/tmp/a.txt"),
            remote_dir: "/home/u/".to_string(),
        }
    }

    #[test]
    fn test_remote_path_joins_basename() {
        assert_eq!(request().remote_path().unwrap(), "/home/u/a.txt");
    }

    #[test]
    fn test_remote_path_rejects_fileless_source() {
        let mut req = request();
        req.local_file = PathBuf::from("/");
        let err = req.remote_path().unwrap_err();
        assert!(matches!(
            err,
            DropletError::InvalidFormat {
                field: Field::File,
                ..
            }
        ));
    }

    #[test]
    fn test_from_options_carries_the_full_schema() {
        let schema = schema_for(Action::Upload, Path::new("/tmp"));
        let supplied = vec![
            (Field::Server, "h".to_string()),
            (Field::Username, "u".to_string()),
            (Field::Password, "secret".to_string()),
            (Field::Path, "/home/u".to_string()),
            (Field::File, "/tmp/a.txt".to_string()),
            (Field::Port, "2222".to_string()),
            (Field::AuthType, "key".to_string()),
        ];
        let opts = resolve(&schema, &supplied).unwrap();
        let req = UploadRequest::from_options(&opts).unwrap();

        assert_eq!(req.port, 2222);
        assert_eq!(req.auth, AuthMethod::Key);
        assert_eq!(req.remote_dir, "/home/u/");
        assert_eq!(req.remote_path().unwrap(), "/home/u/a.txt");
    }
}
