//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`CasitaError`]
//! via `#[from]`. No `String` variants.

/// Top-level error for all casita operations.
#[derive(Debug, thiserror::Error)]
pub enum CasitaError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("invalid argument")]
    InvalidArgument(#[from] InvalidArgumentError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("unsupported command")]
    Unsupported(#[from] UnsupportedCommandError),
}

/// A domain invariant was violated during construction.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,
}

/// A command argument was outside its allowed range.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{argument} must be between {min} and {max}, got {value}")]
pub struct InvalidArgumentError {
    pub argument: &'static str,
    pub min: i64,
    pub max: i64,
    pub value: i64,
}

/// A lookup by identifier found nothing.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{entity} with id {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// A kind-specific command was sent to a device of another kind.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("device {device} does not support {command}")]
pub struct UnsupportedCommandError {
    pub device: String,
    pub command: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_casita_error() {
        let err: CasitaError = ValidationError::EmptyName.into();
        assert!(matches!(err, CasitaError::Validation(_)));
    }

    #[test]
    fn should_render_invalid_argument_with_bounds() {
        let err = InvalidArgumentError {
            argument: "brightness",
            min: 0,
            max: 100,
            value: 150,
        };
        assert_eq!(
            err.to_string(),
            "brightness must be between 0 and 100, got 150"
        );
    }

    #[test]
    fn should_render_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "Room",
            id: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Room with id abc not found");
    }

    #[test]
    fn should_render_unsupported_command_with_device_name() {
        let err = UnsupportedCommandError {
            device: "T1".to_string(),
            command: "set_brightness",
        };
        assert_eq!(err.to_string(), "device T1 does not support set_brightness");
    }
}
