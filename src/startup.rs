use crate::authenticator::SimulatedAuthenticator;
use crate::configuration::Settings;
use crate::error::BizErrorEnum;
use crate::routes;
use actix_web::cookie::Key;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use actix_web_flash_messages::storage::CookieMessageStore;
use actix_web_flash_messages::FlashMessagesFramework;
use secrecy::{ExposeSecret, Secret};
use std::net::TcpListener;

/// `Key::from` panics below this length.
const MIN_HMAC_SECRET_BYTES: usize = 64;

// A new type to hold the newly built server and its port
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn build(config: Settings) -> Result<Self, BizErrorEnum> {
        let authenticator = SimulatedAuthenticator::new(config.login.submit_delay());
        tracing::info!(
            submit_delay_ms = authenticator.delay().as_millis() as u64,
            "Simulated authentication configured"
        );

        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener = TcpListener::bind(address).map_err(|e| {
            tracing::error!("Failed to bind to TcpListener");
            BizErrorEnum::BindTcpListenerError(e)
        })?;
        let port = listener
            .local_addr()
            .map_err(BizErrorEnum::LocalAddrError)?
            .port();

        let server = run(listener, authenticator, config.application.hmac_secret)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    // Only returns when the application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), BizErrorEnum> {
        self.server.await.map_err(|e| {
            tracing::error!("Failed to run server.");
            BizErrorEnum::RunServerError(e)
        })
    }
}

pub fn run(
    listener: TcpListener,
    authenticator: SimulatedAuthenticator,
    hmac_secret: Secret<String>,
) -> Result<Server, BizErrorEnum> {
    if hmac_secret.expose_secret().len() < MIN_HMAC_SECRET_BYTES {
        tracing::error!("The hmac secret is too short");
        return Err(BizErrorEnum::HmacSecretTooShort(MIN_HMAC_SECRET_BYTES));
    }

    let authenticator = web::Data::new(authenticator);

    // Flash message, CookieMessageStore enforces that the cookie used as storage is signed
    let secret_key = Key::from(hmac_secret.expose_secret().as_bytes());
    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(tracing_actix_web::TracingLogger::default())
            .app_data(authenticator.clone())
            .route("/login", web::get().to(routes::login_form))
            .route("/login", web::post().to(routes::login))
            .route("/health_check", web::get().to(routes::health_check))
    })
    .listen(listener)
    .map_err(|e| {
        tracing::error!("Failed to listen to TcpListener");
        BizErrorEnum::ListenTcpListenerError(e)
    })?
    .run();

    // No .await here!
    Ok(server)
}
