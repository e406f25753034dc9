use login_page::configuration;
use login_page::error::BizErrorEnum;
use login_page::startup::Application;
use login_page::telemetry;

#[tokio::main]
async fn main() -> Result<(), BizErrorEnum> {
    let subscriber =
        telemetry::get_subscriber("login-page".into(), "info".into(), std::io::stdout);
    telemetry::init_subscriber(subscriber)?;

    let config = configuration::get_configuration()?;
    let application = Application::build(config)?;
    tracing::info!(port = application.port(), "Serving the login page");
    application.run_until_stopped().await
}
