use crate::commands::{shortcut, CmdResult};
use crate::error::{DropletError, Result};
use crate::model::Field;
use crate::resolve::ResolvedOptions;
use crate::schema::OptionSchema;
use crate::store::LauncherStore;
use crate::wizard::{self, Prompter};
use std::path::Path;

/// Wizard prompt order and questions. Defaults come from the
/// create-shortcut schema the caller passes in.
const PROMPTS: [(Field, &str); 7] = [
    (Field::Server, "Server host where to send files to"),
    (Field::Port, "Port to connect to (leave blank to default to 22)"),
    (Field::Path, "Directory where to put files on remote server"),
    (
        Field::Username,
        "Username to use when connecting to remote server",
    ),
    (
        Field::AuthType,
        "Authentication type (enter `credentials` for username:password \
         authentication or `key` to use your id_rsa key)",
    ),
    (
        Field::Password,
        "Password (for the given username if authentication type is \
         `credentials`, or for your private key if it is encrypted and \
         authentication type is `key`. Enter 0 if no password is required, \
         or 1 to be asked on every upload)",
    ),
    (
        Field::File,
        "Where to store the droplet (leave blank to store next to the \
         droplet binary)",
    ),
];

/// Gather every field interactively, then hand the validated set to the
/// shortcut handler. Cancelling any prompt aborts the whole run.
pub fn run<S: LauncherStore, P: Prompter>(
    store: &mut S,
    exe: &Path,
    schema: &OptionSchema,
    prompter: &mut P,
) -> Result<CmdResult> {
    let mut values = Vec::with_capacity(PROMPTS.len());

    for (field, question) in PROMPTS {
        let spec = schema.spec(field).ok_or_else(|| {
            DropletError::Internal(format!("wizard field `{}` missing from schema", field))
        })?;
        let value = wizard::prompt_field(prompter, field, question, spec)?;
        values.push((field, value));
    }

    let opts = ResolvedOptions::from_values(values);
    shortcut::run(store, exe, &opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Action;
    use crate::schema::schema_for;
    use crate::store::memory::MemLauncherStore;
    use crate::wizard::ScriptPrompter;

    fn create_schema() -> OptionSchema {
        schema_for(Action::CreateShortcut, Path::new("/default-dir"))
    }

    #[test]
    fn test_full_wizard_writes_launcher() {
        let mut store = MemLauncherStore::new();
        // server, port, path, username, auth-type, password, file
        let mut prompter = ScriptPrompter::with_answers([
            "example.org",
            "",
            "/incoming",
            "deploy",
            "credentials",
            "1",
            "/launchers",
        ]);

        let result = run(
            &mut store,
            Path::new("/usr/bin/droplet"),
            &create_schema(),
            &mut prompter,
        )
        .unwrap();

        assert!(prompter.rejected.is_empty());
        assert_eq!(prompter.accepted.len(), 7);
        let (path, launcher) = store.last().unwrap();
        assert!(path.ends_with("Droplet-example.org.desktop"));
        assert!(launcher.manifest.contains("--port 22"));
        assert!(result.launcher_path.is_some());
    }

    #[test]
    fn test_invalid_port_is_reprompted() {
        let mut store = MemLauncherStore::new();
        let mut prompter = ScriptPrompter::with_answers([
            "example.org",
            "99999999",
            "22",
            "/incoming",
            "deploy",
            "key",
            "0",
            "",
        ]);

        run(
            &mut store,
            Path::new("/usr/bin/droplet"),
            &create_schema(),
            &mut prompter,
        )
        .unwrap();

        assert_eq!(prompter.rejected.len(), 1);
        assert!(prompter.rejected[0].contains("port"));
        // Blank file input fell back to the schema default directory
        let (path, _) = store.last().unwrap();
        assert!(path.starts_with("/default-dir"));
    }

    #[test]
    fn test_cancel_aborts_without_writing() {
        let mut store = MemLauncherStore::new();
        let mut prompter = ScriptPrompter::with_answers(["example.org"]);

        let err = run(
            &mut store,
            Path::new("/usr/bin/droplet"),
            &create_schema(),
            &mut prompter,
        )
        .unwrap_err();

        assert!(matches!(err, DropletError::Cancelled));
        assert!(store.written().is_empty());
    }
}
