use crate::authenticator::SimulatedAuthenticator;
use crate::form::{LoginForm, SubmitOutcome};
use crate::notification::FlashNotifier;
use crate::request::LoginData;
use crate::routes::login::page;
use crate::utils;
use actix_web::{web, HttpResponse};
use secrecy::ExposeSecret;

/// Run the submit lifecycle of a form filled with the posted fields.
///
/// Invalid input re-renders the page with inline messages; a successful
/// sign in redirects to the login page, where the flash toast is shown.
#[tracing::instrument(
    name = "Login",
    skip(form, authenticator),
    fields(email = %form.email)
)]
pub async fn login(
    form: web::Form<LoginData>,
    authenticator: web::Data<SimulatedAuthenticator>,
) -> HttpResponse {
    let LoginData { email, password } = form.into_inner();
    let login_form = LoginForm::with_values(email, password.expose_secret().as_str());

    match login_form.on_submit(&authenticator, &FlashNotifier).await {
        SubmitOutcome::Invalid(_) => {
            utils::ok_to(page::render_login_page(&login_form.snapshot(), ""))
        }
        SubmitOutcome::Succeeded | SubmitOutcome::Ignored => utils::redirect_to("/login"),
    }
}
