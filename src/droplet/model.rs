use crate::error::DropletError;
use std::fmt;
use std::str::FromStr;

/// A user-selected top-level operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    CreateShortcut,
    Upload,
    Interactive,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::CreateShortcut => "create-shortcut",
            Action::Upload => "upload",
            Action::Interactive => "interactive",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = DropletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create-shortcut" => Ok(Action::CreateShortcut),
            "upload" => Ok(Action::Upload),
            "interactive" => Ok(Action::Interactive),
            other => Err(DropletError::UnsupportedAction(other.to_string())),
        }
    }
}

/// A connection option. Every field maps to exactly one validation rule
/// in `validate`, by exhaustive match rather than by name lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Server,
    Port,
    Path,
    Username,
    Password,
    AuthType,
    File,
}

impl Field {
    /// Canonical CLI name, as it appears in `--<name>` flags.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Server => "server",
            Field::Port => "port",
            Field::Path => "path",
            Field::Username => "username",
            Field::Password => "password",
            Field::AuthType => "auth-type",
            Field::File => "file",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How to authenticate against the remote server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMethod {
    /// Username and password.
    Credentials,
    /// Private key file, optionally passphrase-protected.
    Key,
}

impl AuthMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMethod::Credentials => "credentials",
            AuthMethod::Key => "key",
        }
    }
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the `password` option means for a run.
///
/// The flag encodes this as `0` (no password), `1` (ask on every upload)
/// or any other literal (a stored secret). Launcher files embed the same
/// encoding, so the variants round-trip through `flag_value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretSpec {
    /// No password or passphrase is needed.
    None,
    /// Ask on the terminal at upload time.
    PromptAtRuntime,
    /// A literal secret carried in the options.
    Stored(String),
}

impl SecretSpec {
    pub fn from_input(raw: &str) -> Self {
        match raw {
            "0" => SecretSpec::None,
            "1" => SecretSpec::PromptAtRuntime,
            other => SecretSpec::Stored(other.to_string()),
        }
    }

    /// The flag encoding, suitable for embedding in a launcher file.
    pub fn flag_value(&self) -> &str {
        match self {
            SecretSpec::None => "0",
            SecretSpec::PromptAtRuntime => "1",
            SecretSpec::Stored(s) => s,
        }
    }
}

/// A validated option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Port(u16),
    Auth(AuthMethod),
    Secret(SecretSpec),
}

impl FieldValue {
    /// The flag encoding of the value, as written into launcher files
    /// and echoed back by the wizard.
    pub fn flag_value(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Port(p) => p.to_string(),
            FieldValue::Auth(a) => a.as_str().to_string(),
            FieldValue::Secret(s) => s.flag_value().to_string(),
        }
    }
}
