//! # API Facade
//!
//! Single entry point for droplet operations: the dispatcher that maps an
//! [`Action`] to its option schema and handler. Generic over the launcher
//! store and the transfer so every path through it runs in tests against
//! in-memory doubles.
//!
//! The facade resolves options and dispatches; it never prints, prompts the
//! terminal directly (prompting goes through the caller's [`Prompter`]), or
//! exits the process. That is the CLI layer's job.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::model::{Action, Field};
use crate::resolve::resolve;
use crate::schema::schema_for;
use crate::store::LauncherStore;
use crate::transfer::Transfer;
use crate::wizard::Prompter;
use std::path::PathBuf;

pub struct DropletApi<S: LauncherStore, T: Transfer> {
    store: S,
    transfer: T,
    /// Absolute path of the running binary, baked into launcher files.
    exe: PathBuf,
    /// Default output directory for launcher files.
    launcher_dir: PathBuf,
}

impl<S: LauncherStore, T: Transfer> DropletApi<S, T> {
    pub fn new(store: S, transfer: T, exe: PathBuf, launcher_dir: PathBuf) -> Self {
        Self {
            store,
            transfer,
            exe,
            launcher_dir,
        }
    }

    /// Resolve `supplied` against the action's schema and run its handler.
    /// Dispatch is an exhaustive match; there is no unknown-action state
    /// past argument parsing.
    pub fn dispatch<P: Prompter>(
        &mut self,
        action: Action,
        supplied: &[(Field, String)],
        prompter: &mut P,
    ) -> Result<CmdResult> {
        match action {
            Action::CreateShortcut => {
                let schema = schema_for(action, &self.launcher_dir);
                let opts = resolve(&schema, supplied)?;
                commands::shortcut::run(&mut self.store, &self.exe, &opts)
            }
            Action::Upload => {
                let schema = schema_for(action, &self.launcher_dir);
                let opts = resolve(&schema, supplied)?;
                commands::upload::run(&mut self.transfer, prompter, &opts)
            }
            Action::Interactive => {
                // The wizard prompts against the create-shortcut schema;
                // its own schema is empty.
                let schema = schema_for(Action::CreateShortcut, &self.launcher_dir);
                commands::interactive::run(&mut self.store, &self.exe, &schema, prompter)
            }
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn transfer(&self) -> &T {
        &self.transfer
    }
}
