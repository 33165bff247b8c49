use std::fmt;

use axum::extract::rejection::JsonRejection;
use thiserror::Error;

/// A single violated rule on one input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Rejected request input, listing every violated rule rather than only the first.
///
/// Displays as `Invalid data supplied: <field>: <message>, <field>: <message>`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid data supplied: {}", join_issues(.issues))]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    /// Wraps a body that could not be parsed as the expected JSON shape.
    pub fn from_rejection(rejection: &JsonRejection) -> Self {
        Self::new(vec![FieldIssue::new("body", rejection.body_text())])
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Flattens `validator` field errors, sorted by field name for stable messages.
impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|(a, _), (b, _)| a.cmp(b));

        let issues = fields
            .into_iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |error| {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value ({})", error.code));
                    FieldIssue::new(field.to_string(), message)
                })
            })
            .collect();

        Self::new(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Payload {
        #[validate(length(max = 3, message = "too long"))]
        name: String,
        #[validate(range(min = 1, message = "too small"))]
        amount: i32,
    }

    #[test]
    fn displays_every_issue() {
        let error = ValidationError::new(vec![
            FieldIssue::new("id", "ID must be a numeric value"),
            FieldIssue::new("id", "ID must be a positive number"),
        ]);

        assert_eq!(
            error.to_string(),
            "Invalid data supplied: id: ID must be a numeric value, id: ID must be a positive number"
        );
    }

    #[test]
    fn collects_all_validator_failures_in_field_order() {
        let payload = Payload {
            name: "abcdef".to_string(),
            amount: 0,
        };

        let error = ValidationError::from(payload.validate().unwrap_err());

        assert_eq!(
            error.issues,
            vec![
                FieldIssue::new("amount", "too small"),
                FieldIssue::new("name", "too long"),
            ]
        );
    }
}
