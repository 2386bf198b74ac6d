use serde::Serialize;

pub mod contact;
pub mod newsletter;

/// Body of every relay response, successful or not.
#[derive(Serialize)]
pub struct ApiMessage {
    pub message: &'static str,
}

/// At least one required field was missing or empty.
#[derive(Debug)]
pub struct MissingFieldError;

/// Require a non-empty string and convert it into the corresponding domain type.
fn required<T: TryFrom<String>>(value: Option<String>) -> Result<T, MissingFieldError> {
    value
        .filter(|value| !value.is_empty())
        .ok_or(MissingFieldError)?
        .try_into()
        .map_err(|_| MissingFieldError)
}
