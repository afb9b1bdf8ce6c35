//! Option resolution.
//!
//! `resolve` merges user-supplied values with an action's schema: absent
//! fields are treated as empty input (so the validator substitutes the
//! default or reports the missing requirement), supplied fields outside the
//! schema are dropped, and the first validation failure aborts the whole
//! resolution. The result is the complete, type-correct option set the
//! action handler runs with.

use crate::error::{DropletError, Result};
use crate::model::{AuthMethod, Field, FieldValue, SecretSpec};
use crate::schema::OptionSchema;
use crate::validate::validate;

/// The final, validated key-value set for one invocation.
///
/// Contains exactly the schema's field set. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    values: Vec<(Field, FieldValue)>,
}

impl ResolvedOptions {
    /// Assemble from already-validated values. Used by the wizard, which
    /// validates per prompt instead of in one resolution pass.
    pub(crate) fn from_values(values: Vec<(Field, FieldValue)>) -> Self {
        Self { values }
    }

    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.values
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.values.iter().map(|(f, _)| *f)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Typed accessors. A miss means a handler consumed a field its
    /// schema never declared, which is a bug, not user error.
    pub fn text(&self, field: Field) -> Result<&str> {
        match self.get(field) {
            Some(FieldValue::Text(s)) => Ok(s),
            other => Err(internal_mismatch(field, other)),
        }
    }

    pub fn port(&self, field: Field) -> Result<u16> {
        match self.get(field) {
            Some(FieldValue::Port(p)) => Ok(*p),
            other => Err(internal_mismatch(field, other)),
        }
    }

    pub fn auth(&self, field: Field) -> Result<AuthMethod> {
        match self.get(field) {
            Some(FieldValue::Auth(a)) => Ok(*a),
            other => Err(internal_mismatch(field, other)),
        }
    }

    pub fn secret(&self, field: Field) -> Result<&SecretSpec> {
        match self.get(field) {
            Some(FieldValue::Secret(s)) => Ok(s),
            other => Err(internal_mismatch(field, other)),
        }
    }
}

fn internal_mismatch(field: Field, got: Option<&FieldValue>) -> DropletError {
    DropletError::Internal(format!(
        "option `{}` missing or mistyped after resolution: {:?}",
        field, got
    ))
}

/// Resolve `supplied` against `schema`, fail-fast on the first invalid or
/// missing required field.
pub fn resolve(schema: &OptionSchema, supplied: &[(Field, String)]) -> Result<ResolvedOptions> {
    let mut values = Vec::with_capacity(schema.len());

    for (field, spec) in schema.fields() {
        let raw = supplied
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
            .unwrap_or("");

        let value = validate(field, raw, spec)?;
        values.push((field, value));
    }

    Ok(ResolvedOptions { values })
}
