//! Business logic for each action.
//!
//! Command functions are pure with respect to the terminal: they take the
//! resolved options plus the seams they need (store, transfer, prompter)
//! and return a [`CmdResult`] for the CLI layer to print. Nothing in here
//! writes to stdout or exits the process.

use std::path::PathBuf;

pub mod interactive;
pub mod shortcut;
pub mod upload;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// What a handler produced: messages for the terminal, the launcher path
/// if one was written, and an optional desktop notification body.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub launcher_path: Option<PathBuf>,
    pub notification: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_launcher_path(mut self, path: PathBuf) -> Self {
        self.launcher_path = Some(path);
        self
    }

    pub fn with_notification(mut self, body: impl Into<String>) -> Self {
        self.notification = Some(body.into());
        self
    }
}
