//! Pure template rendering.
//!
//! The scaffold step never mutates the parsed templates it was handed.
//! Rendering takes an immutable document plus the resolved service name and
//! returns a new document with the identity injected, leaving the canonical
//! template untouched.

use crate::domain::error::DomainError;

/// Key rewritten in the service manifest.
pub const MANIFEST_SERVICE_KEY: &str = "service";

/// Key rewritten in the package descriptor.
pub const PACKAGE_NAME_KEY: &str = "name";

/// New manifest document with `service` set to the service name.
///
/// The template must be a YAML mapping; a `service` entry is inserted or
/// replaced, all other fields are carried over unchanged.
pub fn rendered_manifest(
    template: &serde_yaml::Value,
    name: &str,
) -> Result<serde_yaml::Value, DomainError> {
    let serde_yaml::Value::Mapping(mapping) = template else {
        return Err(DomainError::MalformedDocument { expected: "mapping" });
    };

    let mut rendered = mapping.clone();
    rendered.insert(
        serde_yaml::Value::String(MANIFEST_SERVICE_KEY.into()),
        serde_yaml::Value::String(name.into()),
    );
    Ok(serde_yaml::Value::Mapping(rendered))
}

/// New package descriptor with `name` set to the service name.
pub fn rendered_package(
    template: &serde_json::Value,
    name: &str,
) -> Result<serde_json::Value, DomainError> {
    let serde_json::Value::Object(object) = template else {
        return Err(DomainError::MalformedDocument { expected: "object" });
    };

    let mut rendered = object.clone();
    rendered.insert(
        PACKAGE_NAME_KEY.into(),
        serde_json::Value::String(name.into()),
    );
    Ok(serde_json::Value::Object(rendered))
}
