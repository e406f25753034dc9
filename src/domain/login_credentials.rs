use crate::domain::{LoginEmail, LoginPassword};

/// Email and password that passed validation, built at submit time and
/// consumed by the authentication call.
#[derive(Debug)]
pub struct LoginCredentials {
    pub email: LoginEmail,
    pub password: LoginPassword,
}
