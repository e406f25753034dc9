use secrecy::Secret;
use serde::Deserialize;

/// Body of `POST /login`. Missing fields are read as empty input.
#[derive(Deserialize)]
pub struct LoginData {
    #[serde(default)]
    pub email: String,
    #[serde(default = "empty_secret")]
    pub password: Secret<String>,
}

fn empty_secret() -> Secret<String> {
    Secret::new(String::new())
}
