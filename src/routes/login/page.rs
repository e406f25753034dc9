use crate::constant::EMAIL_PLACEHOLDER;
use crate::form::{Field, FormSnapshot};
use actix_web_flash_messages::{IncomingFlashMessages, Level};

/// Render the login page for the given form state.
///
/// The password is never written back into the page. Once the browser
/// submits the form, the page script marks it as submitting, makes the
/// inputs read-only and disables the button, so a second submit is dropped.
pub fn render_login_page(snapshot: &FormSnapshot, toasts: &str) -> String {
    let (disabled, submitting) = if snapshot.is_submitting {
        (" disabled", "true")
    } else {
        ("", "false")
    };
    // User input goes in last so that it cannot contain a placeholder.
    include_str!("login.html")
        .replace("{toasts}", toasts)
        .replace("{email_label}", Field::Email.label())
        .replace("{password_label}", Field::Password.label())
        .replace("{email_placeholder}", EMAIL_PLACEHOLDER)
        .replace("{disabled}", disabled)
        .replace("{submitting}", submitting)
        .replace("{email_error}", &field_error_html(snapshot, Field::Email))
        .replace("{password_error}", &field_error_html(snapshot, Field::Password))
        .replace(
            "{email_value}",
            &htmlescape::encode_attribute(snapshot.values.get(Field::Email)),
        )
}

fn field_error_html(snapshot: &FormSnapshot, field: Field) -> String {
    match snapshot.error(field) {
        Some(message) => format!(
            r#"<p class="field-error" id="{}-error">{}</p>"#,
            field.name(),
            htmlescape::encode_minimal(message)
        ),
        None => String::new(),
    }
}

/// One toast per incoming flash message.
pub fn toasts_html(flash_msgs: &IncomingFlashMessages) -> String {
    flash_msgs
        .iter()
        .map(|msg| {
            format!(
                r#"<div class="toast toast-{}" role="status">{}</div>"#,
                level_name(msg.level()),
                htmlescape::encode_minimal(msg.content())
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn level_name(level: Level) -> &'static str {
    match level {
        Level::Debug => "debug",
        Level::Info => "info",
        Level::Success => "success",
        Level::Warning => "warning",
        Level::Error => "error",
    }
}
