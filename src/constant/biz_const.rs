/// environment variable
pub const LOCAL_ENVIRONMENT: &str = "local";
pub const PRODUCTION_ENVIRONMENT: &str = "production";

/// validate login email
pub const EMAIL_MIN_LENGTH: usize = 4;
/// validate login password
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// simulated authentication round trip
pub const DEFAULT_SUBMIT_DELAY_MILLISECONDS: u64 = 2000;

/// toast shown after a successful sign in
pub const LOGIN_SUCCESS_MESSAGE: &str = "Logged in Successfully!";

/// placeholder of the email input
pub const EMAIL_PLACEHOLDER: &str = "fahad@email.com";
