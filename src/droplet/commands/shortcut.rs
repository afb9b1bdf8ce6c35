use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{AuthMethod, Field, SecretSpec};
use crate::resolve::ResolvedOptions;
use crate::store::{Launcher, LauncherStore};
use std::path::{Path, PathBuf};

/// Typed view of the create-shortcut option set.
#[derive(Debug, Clone)]
pub struct ShortcutParams {
    pub server: String,
    pub port: u16,
    pub remote_dir: String,
    pub username: String,
    pub auth: AuthMethod,
    pub secret: SecretSpec,
    /// Directory the launcher is written into (the `file` option).
    pub out_dir: PathBuf,
}

impl ShortcutParams {
    pub fn from_options(opts: &ResolvedOptions) -> Result<Self> {
        Ok(Self {
            server: opts.text(Field::Server)?.to_string(),
            port: opts.port(Field::Port)?,
            remote_dir: opts.text(Field::Path)?.to_string(),
            username: opts.text(Field::Username)?.to_string(),
            auth: opts.auth(Field::AuthType)?,
            secret: opts.secret(Field::Password)?.clone(),
            out_dir: PathBuf::from(opts.text(Field::File)?),
        })
    }
}

/// Write a desktop launcher that re-invokes `droplet upload` with the
/// resolved options baked in. `%f` is the freedesktop field code for the
/// file dropped onto (or opened with) the launcher.
pub fn run<S: LauncherStore>(
    store: &mut S,
    exe: &Path,
    opts: &ResolvedOptions,
) -> Result<CmdResult> {
    let params = ShortcutParams::from_options(opts)?;

    let launcher = Launcher {
        server: params.server.clone(),
        manifest: render_manifest(exe, &params),
    };
    let written = store.write(&params.out_dir, &launcher)?;

    let mut result = CmdResult::default().with_launcher_path(written.clone());
    if matches!(params.secret, SecretSpec::Stored(_)) {
        result.add_message(CmdMessage::warning(
            "The launcher stores the password in plain text. \
             Use `--password 1` to be asked at upload time instead.",
        ));
    }
    result.add_message(CmdMessage::success(format!(
        "Launcher written to {}",
        written.display()
    )));
    Ok(result)
}

fn render_manifest(exe: &Path, params: &ShortcutParams) -> String {
    format!(
        "#!/usr/bin/env xdg-open\n\
         \n\
         [Desktop Entry]\n\
         Version=1.0\n\
         Type=Application\n\
         Terminal=true\n\
         Exec={exe} upload --path {path} --server {server} --username {username} \
         --password {password} --auth-type {auth} --port {port} --file %f\n\
         Name=Droplet-{server}\n\
         Icon=/\n",
        exe = exe.display(),
        path = params.remote_dir,
        server = params.server,
        username = params.username,
        password = params.secret.flag_value(),
        auth = params.auth,
        port = params.port,
    )
}
