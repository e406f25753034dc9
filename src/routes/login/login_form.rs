use crate::form::LoginForm;
use crate::routes::login::page;
use crate::utils;
use actix_web::HttpResponse;
use actix_web_flash_messages::IncomingFlashMessages;

#[tracing::instrument(name = "Get login page", skip(flash_msgs))]
pub async fn login_form(flash_msgs: IncomingFlashMessages) -> HttpResponse {
    let toasts = page::toasts_html(&flash_msgs);
    let body = page::render_login_page(&LoginForm::new().snapshot(), &toasts);
    utils::ok_to(body)
}
