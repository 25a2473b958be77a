//! Ticket form validation
//!
//! The only way to obtain a [`NewTicket`]. Every rule is checked and all
//! failures are reported together so a form can flag each field at once.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::DeskConfig;
use crate::domain::aggregates::NewTicket;
use crate::domain::value_objects::{Email, Priority};

/// Raw ticket form input as a client submits it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketForm {
    pub email: String,
    pub subject: String,
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
}

/// Length rules applied to the description.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormRules {
    pub min_description_len: usize,
    pub max_description_len: Option<usize>,
}

impl Default for FormRules {
    fn default() -> Self {
        Self::from_config(&DeskConfig::default())
    }
}

impl FormRules {
    pub fn from_config(config: &DeskConfig) -> Self {
        Self { min_description_len: config.min_description_len, max_description_len: config.max_description_len }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField { Email, Subject, Description }

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Description => "description",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

/// Every rule the form broke, in field order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("invalid ticket form: {}", summary(.0))]
pub struct FormErrors(pub Vec<FieldError>);

fn summary(errors: &[FieldError]) -> String {
    errors.iter().map(|e| format!("{}: {}", e.field, e.message)).collect::<Vec<_>>().join("; ")
}

impl FormErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message.as_str())
    }
}

impl TicketForm {
    pub fn new(email: impl Into<String>, subject: impl Into<String>, description: impl Into<String>, priority: Priority) -> Self {
        Self { email: email.into(), subject: subject.into(), description: description.into(), priority }
    }

    pub fn validate(&self) -> Result<NewTicket, FormErrors> {
        self.validate_with(&FormRules::default())
    }

    pub fn validate_with(&self, rules: &FormRules) -> Result<NewTicket, FormErrors> {
        let mut errors = Vec::new();
        let mut reject = |field, message: String| errors.push(FieldError { field, message });

        let email = match Email::new(self.email.as_str()) {
            Ok(email) => Some(email),
            Err(e) => {
                reject(FormField::Email, e.to_string());
                None
            }
        };

        if self.subject.trim().is_empty() {
            reject(FormField::Subject, "Subject is required".into());
        }

        let description_len = self.description.chars().count();
        if self.description.trim().is_empty() {
            reject(FormField::Description, "Description is required".into());
        } else if description_len < rules.min_description_len {
            reject(
                FormField::Description,
                format!("Description must be at least {} characters", rules.min_description_len),
            );
        } else if let Some(max) = rules.max_description_len.filter(|max| description_len > *max) {
            reject(FormField::Description, format!("Description must be at most {} characters", max));
        }

        match email {
            Some(email) if errors.is_empty() => {
                Ok(NewTicket::new(email, self.subject.clone(), self.description.clone(), self.priority))
            }
            _ => Err(FormErrors(errors)),
        }
    }
}
