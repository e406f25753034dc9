use crate::constant::EMAIL_MIN_LENGTH;
use crate::error::BizErrorEnum;
use once_cell::sync::Lazy;
use regex::Regex;

/// Local part of letters, digits and `_'+-.` not ending with `'` or `.`,
/// and a dotted domain whose top level has at least 2 letters.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("Email pattern should be valid!")
});

fn has_plain_syntax(email: &str) -> bool {
    // The pattern has no look-around, dots are checked by hand.
    !email.starts_with('.') && !email.contains("..") && EMAIL_PATTERN.is_match(email)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginEmail(String);

impl LoginEmail {
    /// Returns an instance of `LoginEmail` if the input is a syntactically
    /// valid email address of at least `EMAIL_MIN_LENGTH` UTF-16 code units.
    ///
    /// Besides the RFC check of `validator`, addresses must look like what a
    /// browser form accepts: no bare hosts, IP literals or exotic local parts.
    ///
    /// Rules are checked in order and the first failure is returned, so an
    /// empty input reports a format error rather than a length error.
    pub fn parse(email: String) -> Result<Self, BizErrorEnum> {
        if !validator::validate_email(email.as_str()) || !has_plain_syntax(&email) {
            return Err(BizErrorEnum::EmailFormatIsIncorrect);
        }

        if email.encode_utf16().count() < EMAIL_MIN_LENGTH {
            return Err(BizErrorEnum::EmailIsTooShort);
        }

        Ok(Self(email))
    }
}

impl AsRef<str> for LoginEmail {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for LoginEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
