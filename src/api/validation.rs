use crate::domain::ImageUrl;
use serde::Serialize;

/// A single schema violation, reported back to the client as a
/// `{field, message}` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub fn validate_image_url(field: &str, raw: Option<&str>) -> Result<ImageUrl, FieldViolation> {
    let Some(raw) = raw else {
        return Err(FieldViolation::new(field, "is required"));
    };

    ImageUrl::parse(raw)
        .map_err(|_| FieldViolation::new(field, "must be a well-formed absolute URL"))
}

pub fn validate_breed(field: &str, breed: Option<&str>) -> Result<String, FieldViolation> {
    let Some(breed) = breed else {
        return Err(FieldViolation::new(field, "is required"));
    };

    if breed.is_empty() {
        return Err(FieldViolation::new(field, "must not be empty"));
    }

    Ok(breed.to_string())
}
