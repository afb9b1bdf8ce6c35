//! Per-field validation rules.
//!
//! `validate` is a pure function of (field, raw input, spec). Empty input
//! resolves to the spec's default, or fails when the field is required.
//! Non-empty input goes through the field's rule; the field-to-rule mapping
//! is an exhaustive match, so every field has a rule by construction.

use crate::error::{DropletError, Result};
use crate::model::{AuthMethod, Field, FieldValue, SecretSpec};
use crate::schema::FieldSpec;

pub fn validate(field: Field, raw: &str, spec: &FieldSpec) -> Result<FieldValue> {
    if raw.is_empty() {
        return match spec {
            FieldSpec::Required => Err(DropletError::MissingRequiredField(field)),
            FieldSpec::Default(value) => Ok(value.clone()),
        };
    }

    match field {
        Field::Port => validate_port(raw),
        Field::Path => validate_path(raw),
        Field::AuthType => validate_auth_type(raw),
        Field::Password => Ok(FieldValue::Secret(SecretSpec::from_input(raw))),
        Field::Server | Field::Username | Field::File => {
            Ok(FieldValue::Text(raw.to_string()))
        }
    }
}

fn validate_port(raw: &str) -> Result<FieldValue> {
    raw.parse::<u16>()
        .map(FieldValue::Port)
        .map_err(|_| DropletError::InvalidFormat {
            field: Field::Port,
            expected: "an integer between 0 and 65535",
        })
}

fn validate_path(raw: &str) -> Result<FieldValue> {
    if !raw.starts_with('~') && !raw.starts_with('/') {
        return Err(DropletError::InvalidFormat {
            field: Field::Path,
            expected: "a path starting with either `~` or `/`",
        });
    }

    let mut path = raw.to_string();
    if !path.ends_with('/') {
        path.push('/');
    }

    Ok(FieldValue::Text(path))
}

fn validate_auth_type(raw: &str) -> Result<FieldValue> {
    match raw {
        "credentials" => Ok(FieldValue::Auth(AuthMethod::Credentials)),
        "key" => Ok(FieldValue::Auth(AuthMethod::Key)),
        _ => Err(DropletError::InvalidEnum {
            field: Field::AuthType,
            allowed: "credentials, key",
        }),
    }
}
