use crate::constant::PASSWORD_MIN_LENGTH;
use crate::error::BizErrorEnum;
use secrecy::{ExposeSecret, Secret};

/// A password of at least `PASSWORD_MIN_LENGTH` UTF-16 code units, the
/// length a browser reports for the input.
///
/// The value is kept behind `Secret`, so it never shows up in `Debug` output
/// or in tracing spans.
#[derive(Debug, Clone)]
pub struct LoginPassword(Secret<String>);

impl LoginPassword {
    pub fn parse(password: Secret<String>) -> Result<Self, BizErrorEnum> {
        if password.expose_secret().encode_utf16().count() < PASSWORD_MIN_LENGTH {
            return Err(BizErrorEnum::PasswordIsTooShort);
        }

        Ok(Self(password))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}
