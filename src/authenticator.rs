use crate::domain::LoginCredentials;
use std::time::Duration;

/// Stand-in for a remote authentication round trip.
///
/// It waits for a fixed delay and always succeeds; nothing is sent anywhere.
#[derive(Debug, Clone)]
pub struct SimulatedAuthenticator {
    delay: Duration,
}

impl SimulatedAuthenticator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[tracing::instrument(
        name = "Simulated authentication",
        skip(self, credentials),
        fields(email = %credentials.email, delay_ms = self.delay.as_millis() as u64)
    )]
    pub async fn authenticate(&self, credentials: LoginCredentials) {
        tokio::time::sleep(self.delay).await;
        tracing::info!("Simulated authentication round trip completed");
    }
}
