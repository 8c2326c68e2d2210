//! Contact and dataset-share form payloads
//!
//! Fields default to empty strings so that missing-field errors surface as
//! validation messages rather than deserialization failures. Inputs are
//! sanitized before validation and truncated before they become events.

use chrono::Utc;
use validator::ValidateEmail;

use crate::error::AppError;
use serde::Deserialize;

use super::event::{ContactEvent, DatasetEvent};

/// Longest message kept in a contact event
const MAX_MESSAGE_CHARS: usize = 500;

/// Longest description kept in a dataset event
const MAX_DESCRIPTION_CHARS: usize = 1000;

#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub profession: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    /// Strip markup-significant characters and surrounding whitespace
    pub fn sanitized(self) -> Self {
        Self {
            name: sanitize(&self.name),
            email: sanitize(&self.email),
            profession: sanitize(&self.profession),
            phone: sanitize(&self.phone),
            message: sanitize(&self.message),
        }
    }

    /// Check required fields and email format
    pub fn validate(&self) -> Result<(), AppError> {
        require_non_blank(&self.name, "Name")?;
        require_non_blank(&self.email, "Email")?;
        require_non_blank(&self.message, "Message")?;
        require_valid_email(&self.email)
    }

    pub fn into_event(self) -> ContactEvent {
        ContactEvent {
            timestamp: Utc::now(),
            name: self.name,
            email: self.email,
            profession: self.profession,
            phone: self.phone,
            message: truncate(self.message, MAX_MESSAGE_CHARS),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub dataset_description: String,
    #[serde(default)]
    pub dataset_size: String,
    #[serde(default)]
    pub research_area: String,
}

impl DatasetForm {
    pub fn sanitized(self) -> Self {
        Self {
            name: sanitize(&self.name),
            email: sanitize(&self.email),
            organization: sanitize(&self.organization),
            dataset_description: sanitize(&self.dataset_description),
            dataset_size: sanitize(&self.dataset_size),
            research_area: sanitize(&self.research_area),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        require_non_blank(&self.name, "Name")?;
        require_non_blank(&self.email, "Email")?;
        require_non_blank(&self.dataset_description, "Dataset description")?;
        require_valid_email(&self.email)
    }

    pub fn into_event(self) -> DatasetEvent {
        DatasetEvent {
            timestamp: Utc::now(),
            name: self.name,
            email: self.email,
            organization: self.organization,
            dataset_description: truncate(self.dataset_description, MAX_DESCRIPTION_CHARS),
            dataset_size: self.dataset_size,
            research_area: self.research_area,
        }
    }
}

/// Remove characters usable for markup injection, then trim
fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '<' | '>' | '"' | '\''))
        .collect::<String>()
        .trim()
        .to_string()
}

fn require_non_blank(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    Ok(())
}

fn require_valid_email(email: &str) -> Result<(), AppError> {
    if !email.validate_email() {
        return Err(AppError::Validation("Invalid email format".to_string()));
    }
    Ok(())
}

fn truncate(text: String, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text;
    }
    text.chars().take(max_chars).collect()
}
