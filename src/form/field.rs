use crate::domain::{LoginCredentials, LoginEmail, LoginPassword};
use crate::error::BizErrorEnum;
use secrecy::Secret;
use std::fmt::{Debug, Display, Formatter};

/// The input fields of the login form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Email,
    Password,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Email, Field::Password];

    /// Name of the input, also the key of the posted form.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Email => "Email address",
            Field::Password => "Password",
        }
    }
}

/// A failed field rule, rendered inline next to `field`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl ValidationError {
    fn new(field: Field, reason: &BizErrorEnum) -> Self {
        Self {
            field,
            message: reason.to_string(),
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field.name(), self.message)
    }
}

pub type ValidationResult = Result<(), ValidationError>;

/// Raw, not yet validated input of the form.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub email: String,
    pub password: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => self.email.as_str(),
            Field::Password => self.password.as_str(),
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
    }
}

impl Debug for FormValues {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormValues")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Run the rules of a single field. Only the first failing rule is reported.
pub fn validate(field: Field, value: &str) -> ValidationResult {
    let outcome = match field {
        Field::Email => LoginEmail::parse(value.to_string()).map(|_| ()),
        Field::Password => LoginPassword::parse(Secret::new(value.to_string())).map(|_| ()),
    };
    outcome.map_err(|e| ValidationError::new(field, &e))
}

/// Validate every field and build the credentials out of them.
///
/// On failure the errors come in `Field::ALL` order, one per invalid field.
pub fn validate_form(values: &FormValues) -> Result<LoginCredentials, Vec<ValidationError>> {
    let email = LoginEmail::parse(values.email.clone());
    let password = LoginPassword::parse(Secret::new(values.password.clone()));

    match (email, password) {
        (Ok(email), Ok(password)) => Ok(LoginCredentials { email, password }),
        (email, password) => {
            let mut errors = Vec::new();
            if let Err(e) = email {
                errors.push(ValidationError::new(Field::Email, &e));
            }
            if let Err(e) = password {
                errors.push(ValidationError::new(Field::Password, &e));
            }
            Err(errors)
        }
    }
}
