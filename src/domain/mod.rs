mod login_credentials;
mod login_email;
mod login_password;

pub use login_credentials::LoginCredentials;
pub use login_email::LoginEmail;
pub use login_password::LoginPassword;
