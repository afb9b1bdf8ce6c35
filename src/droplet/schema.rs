//! Per-action option schemas.
//!
//! An [`OptionSchema`] declares which fields an action consumes and whether
//! each one is required or carries a default. Schemas are built once per run
//! from the action and the configured launcher directory, and are immutable
//! from then on.

use crate::model::{Action, AuthMethod, Field, FieldValue, SecretSpec};
use std::path::Path;

pub const DEFAULT_PORT: u16 = 22;

/// Requiredness of a single option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSpec {
    /// The user must supply a value; resolution fails otherwise.
    Required,
    /// Substituted when the user supplies nothing.
    Default(FieldValue),
}

/// Ordered mapping from field to spec. Resolution walks fields in
/// declaration order, which fixes the fail-fast order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSchema {
    fields: Vec<(Field, FieldSpec)>,
}

impl OptionSchema {
    pub fn new(fields: Vec<(Field, FieldSpec)>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> impl Iterator<Item = (Field, &FieldSpec)> {
        self.fields.iter().map(|(f, s)| (*f, s))
    }

    pub fn spec(&self, field: Field) -> Option<&FieldSpec> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, s)| s)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.spec(field).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// The schema an action resolves its options against.
///
/// `launcher_dir` is the default output directory for shortcut files (the
/// `file` option of `create-shortcut`). The `interactive` action has an
/// empty schema; the wizard prompts against the `create-shortcut` schema
/// instead.
pub fn schema_for(action: Action, launcher_dir: &Path) -> OptionSchema {
    match action {
        Action::CreateShortcut => OptionSchema::new(vec![
            (Field::Path, FieldSpec::Required),
            (Field::Server, FieldSpec::Required),
            (Field::Username, FieldSpec::Required),
            (
                Field::Password,
                FieldSpec::Default(FieldValue::Secret(SecretSpec::PromptAtRuntime)),
            ),
            (
                Field::AuthType,
                FieldSpec::Default(FieldValue::Auth(AuthMethod::Credentials)),
            ),
            (Field::Port, FieldSpec::Default(FieldValue::Port(DEFAULT_PORT))),
            (
                Field::File,
                FieldSpec::Default(FieldValue::Text(
                    launcher_dir.to_string_lossy().into_owned(),
                )),
            ),
        ]),
        Action::Upload => OptionSchema::new(vec![
            (Field::File, FieldSpec::Required),
            (Field::Path, FieldSpec::Required),
            (Field::Server, FieldSpec::Required),
            (Field::Username, FieldSpec::Required),
            (
                Field::Password,
                FieldSpec::Default(FieldValue::Secret(SecretSpec::PromptAtRuntime)),
            ),
            (
                Field::AuthType,
                FieldSpec::Default(FieldValue::Auth(AuthMethod::Credentials)),
            ),
            (Field::Port, FieldSpec::Default(FieldValue::Port(DEFAULT_PORT))),
        ]),
        Action::Interactive => OptionSchema::new(Vec::new()),
    }
}
