use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{AuthMethod, SecretSpec};
use crate::resolve::ResolvedOptions;
use crate::transfer::{Transfer, UploadRequest};
use crate::wizard::Prompter;

/// Upload one file over the transfer seam. The password sentinel is
/// resolved here, just before the connection is opened: `1` asks on the
/// terminal, `0` means no secret, anything else is the stored literal.
pub fn run<T: Transfer, P: Prompter>(
    transfer: &mut T,
    prompter: &mut P,
    opts: &ResolvedOptions,
) -> Result<CmdResult> {
    let request = UploadRequest::from_options(opts)?;
    let secret = runtime_secret(&request, prompter)?;

    transfer.upload(&request, secret.as_deref())?;

    let dest = request.remote_path()?;
    Ok(CmdResult::default()
        .with_notification("File sent.")
        .with_message(CmdMessage::success(format!(
            "Sent {} to {}:{}",
            request.local_file.display(),
            request.server,
            dest
        ))))
}

fn runtime_secret<P: Prompter>(
    request: &UploadRequest,
    prompter: &mut P,
) -> Result<Option<String>> {
    match &request.secret {
        SecretSpec::Stored(secret) => Ok(Some(secret.clone())),
        SecretSpec::None => Ok(None),
        SecretSpec::PromptAtRuntime => {
            let question = match request.auth {
                AuthMethod::Key => "Your private key password: ".to_string(),
                AuthMethod::Credentials => {
                    format!("{}@{} password: ", request.username, request.server)
                }
            };
            prompter.prompt_secret(&question).map(Some)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Action, Field};
    use crate::resolve::resolve;
    use crate::schema::schema_for;
    use crate::transfer::RecordingTransfer;
    use crate::wizard::ScriptPrompter;
    use std::path::Path;

    fn resolved(extra: &[(Field, &str)]) -> ResolvedOptions {
        let schema = schema_for(Action::Upload, Path::new("/tmp"));
        let mut supplied = vec![
            (Field::Server, "h".to_string()),
            (Field::Username, "u".to_string()),
            (Field::Path, "/home/u/".to_string()),
            (Field::File, "/tmp/a.txt".to_string()),
        ];
        supplied.extend(extra.iter().map(|(f, v)| (*f, v.to_string())));
        resolve(&schema, &supplied).unwrap()
    }

    #[test]
    fn test_upload_delegates_with_destination() {
        let mut transfer = RecordingTransfer::new();
        let mut prompter = ScriptPrompter::default();
        let opts = resolved(&[(Field::Password, "secret")]);

        let result = run(&mut transfer, &mut prompter, &opts).unwrap();

        assert_eq!(transfer.uploads.len(), 1);
        let (request, secret) = &transfer.uploads[0];
        assert_eq!(request.remote_path().unwrap(), "/home/u/a.txt");
        assert_eq!(secret.as_deref(), Some("secret"));
        assert_eq!(result.notification.as_deref(), Some("File sent."));
    }

    #[test]
    fn test_prompt_sentinel_asks_for_secret() {
        let mut transfer = RecordingTransfer::new();
        let mut prompter = ScriptPrompter::default().with_secrets(["typed-in"]);
        // Password omitted: defaults to the prompt-at-runtime sentinel
        let opts = resolved(&[]);

        run(&mut transfer, &mut prompter, &opts).unwrap();

        let (_, secret) = &transfer.uploads[0];
        assert_eq!(secret.as_deref(), Some("typed-in"));
    }

    #[test]
    fn test_no_secret_sentinel_passes_none() {
        let mut transfer = RecordingTransfer::new();
        let mut prompter = ScriptPrompter::default();
        let opts = resolved(&[(Field::Password, "0")]);

        run(&mut transfer, &mut prompter, &opts).unwrap();

        let (_, secret) = &transfer.uploads[0];
        assert_eq!(secret.as_deref(), None);
    }

    #[test]
    fn test_transport_failure_propagates() {
        let mut transfer = RecordingTransfer::new();
        transfer.fail_with = Some(|| {
            crate::error::DropletError::Transport("connection refused".to_string())
        });
        let mut prompter = ScriptPrompter::default();
        let opts = resolved(&[(Field::Password, "secret")]);

        let err = run(&mut transfer, &mut prompter, &opts).unwrap_err();
        assert!(matches!(err, crate::error::DropletError::Transport(_)));
    }
}
