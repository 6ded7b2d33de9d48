use std::fmt;
use thiserror::Error;

/// Fields of the registration form, displayed as their multipart names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FullName,
    Email,
    GeographicArea,
    MainSector,
    Cv,
}

impl Field {
    pub fn wire_name(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::GeographicArea => "geographicArea",
            Field::MainSector => "mainSector",
            Field::Cv => "cv",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("{0} is required")]
    Missing(Field),

    #[error("email address is malformed")]
    MalformedEmail,

    #[error("CV must be a .pdf, .doc or .docx file")]
    UnsupportedCvType,
}

/// Why a submit request did not produce an outgoing request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    #[error("a registration is already in flight")]
    InFlight,

    #[error("form is incomplete: {}", describe(.0))]
    Invalid(Vec<FieldError>),
}

fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failure of an issued registration request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("request timed out after {0} ms")]
    Timeout(u32),

    #[error("network error: {0}")]
    Network(String),

    #[error("backend rejected registration with status {status}")]
    Rejected { status: u16, detail: Option<String> },

    #[error("could not build multipart payload: {0}")]
    Payload(String),
}

impl SubmitError {
    /// Server-supplied message to show verbatim, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            SubmitError::Rejected {
                detail: Some(detail),
                ..
            } if !detail.trim().is_empty() => Some(detail),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_rejections_carry_detail() {
        let rejected = SubmitError::Rejected {
            status: 400,
            detail: Some("El archivo es demasiado grande. Máximo 5MB".to_string()),
        };
        assert_eq!(
            rejected.detail(),
            Some("El archivo es demasiado grande. Máximo 5MB")
        );
        assert_eq!(SubmitError::Timeout(30_000).detail(), None);
        assert_eq!(SubmitError::Network("offline".into()).detail(), None);
    }

    #[test]
    fn blank_detail_is_ignored() {
        let rejected = SubmitError::Rejected {
            status: 500,
            detail: Some("  ".to_string()),
        };
        assert_eq!(rejected.detail(), None);
    }

    #[test]
    fn invalid_lists_every_field_error() {
        let blocked = SubmitBlocked::Invalid(vec![
            FieldError::Missing(Field::MainSector),
            FieldError::MalformedEmail,
        ]);
        assert_eq!(
            blocked.to_string(),
            "form is incomplete: mainSector is required, email address is malformed"
        );
    }
}
