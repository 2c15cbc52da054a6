//! Validation utilities for user input

/// Message shown when any required form field is blank.
pub const ALL_FIELDS_REQUIRED: &str = "All fields must be filled in.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Convert into a `Result` for `?` propagation.
    pub fn into_result(self) -> crate::core::error::Result<()> {
        match self.error {
            Some(message) if !self.is_valid => Err(crate::core::error::AppError::Validation(message)),
            _ => Ok(()),
        }
    }
}

/// Every field must contain something other than whitespace.
pub fn validate_required(fields: &[&str]) -> ValidationResult {
    if fields.iter().any(|field| field.trim().is_empty()) {
        return ValidationResult::err(ALL_FIELDS_REQUIRED);
    }
    ValidationResult::ok()
}

/// Login form: email and password
pub fn validate_login(email: &str, password: &str) -> ValidationResult {
    validate_required(&[email, password])
}

/// Signup form: all six fields are mandatory
pub fn validate_signup(form: &crate::app::SignupForm) -> ValidationResult {
    validate_required(&[
        &form.name,
        &form.email,
        &form.password,
        &form.cep,
        &form.rua,
        &form.estado,
    ])
}
