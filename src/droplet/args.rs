use clap::{Args, Parser, Subcommand};
use droplet::model::Field;

/// Returns the version string, including the git hash for dev builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "droplet")]
#[command(version = get_version())]
#[command(
    about = "One-click SFTP drop launchers for the desktop",
    long_about = None
)]
pub struct Cli {
    /// Running droplet with no action starts the interactive wizard.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Connection options shared by the non-interactive actions. All of them
/// are optional at parse time: requiredness and formats are checked by the
/// resolver against the action's schema, so the error messages stay the
/// same whether a value came from a flag or a wizard prompt.
#[derive(Args, Debug, Default)]
pub struct ConnectionArgs {
    /// Server host to send files to
    #[arg(long)]
    pub server: Option<String>,

    /// Remote directory to put files in (must start with `~` or `/`)
    #[arg(long)]
    pub path: Option<String>,

    /// Port to connect to (defaults to 22)
    #[arg(long)]
    pub port: Option<String>,

    /// For upload: the local file to send.
    /// For create-shortcut: the directory to store the launcher in.
    #[arg(long)]
    pub file: Option<String>,

    /// Username to connect with
    #[arg(long)]
    pub username: Option<String>,

    /// `0` = no password, `1` = ask on every upload (the default),
    /// anything else is used as the stored secret
    #[arg(long)]
    pub password: Option<String>,

    /// `credentials` for username:password, `key` for private-key auth
    #[arg(long, value_name = "TYPE")]
    pub auth_type: Option<String>,
}

impl ConnectionArgs {
    /// The flags the user actually supplied, as (field, raw value) pairs
    /// for the resolver.
    pub fn supplied(&self) -> Vec<(Field, String)> {
        let mut out = Vec::new();
        let mut push = |field: Field, value: &Option<String>| {
            if let Some(v) = value {
                out.push((field, v.clone()));
            }
        };
        push(Field::Server, &self.server);
        push(Field::Path, &self.path);
        push(Field::Port, &self.port);
        push(Field::File, &self.file);
        push(Field::Username, &self.username);
        push(Field::Password, &self.password);
        push(Field::AuthType, &self.auth_type);
        out
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a desktop launcher for one-click uploads to a server
    #[command(alias = "create")]
    CreateShortcut {
        #[command(flatten)]
        opts: ConnectionArgs,
    },

    /// Upload one file over SFTP
    Upload {
        #[command(flatten)]
        opts: ConnectionArgs,
    },

    /// Gather connection options interactively, then write a launcher
    Interactive,
}
