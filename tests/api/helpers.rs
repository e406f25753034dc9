use login_page::configuration;
use login_page::startup::Application;
use login_page::telemetry;
use once_cell::sync::Lazy;

/// Short enough to keep the suite fast, long enough to be observable.
pub const TEST_SUBMIT_DELAY_MILLISECONDS: u64 = 50;

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        telemetry::init_subscriber(subscriber).expect("Failed to init tracing");
    } else {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        telemetry::init_subscriber(subscriber).expect("Failed to init tracing");
    };
});

pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Launch the application in the background on a random port.
    pub async fn spawn_app() -> TestApp {
        Lazy::force(&TRACING);

        let config = {
            let mut c = configuration::get_configuration().expect("Failed to read configuration");
            // Use a random OS port
            c.application.port = 0;
            c.login.submit_delay_milliseconds = TEST_SUBMIT_DELAY_MILLISECONDS;
            c
        };

        let application = Application::build(config).expect("Failed to build application.");
        let port = application.port();
        let _ = tokio::spawn(application.run_until_stopped());

        let api_client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .cookie_store(true)
            .build()
            .expect("Failed to build reqwest client");

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
            api_client,
        }
    }

    pub async fn get_login(&self) -> reqwest::Response {
        self.api_client
            .get(&format!("{}/login", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_login_html(&self) -> String {
        self.get_login().await.text().await.unwrap()
    }

    pub async fn post_login(&self, email: &str, password: &str) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/login", &self.address))
            .form(&[("email", email), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub fn assert_is_redirect_to(response: &reqwest::Response, location: &str) {
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers().get("Location").unwrap(), location);
}
