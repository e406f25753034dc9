use actix_web_flash_messages::FlashMessage;

/// Transient success message shown to the user, fire-and-forget.
pub trait Notifier: Send + Sync {
    fn notify_success(&self, message: &str);
}

/// Queues a success flash message, rendered as a toast by the next page the
/// browser loads.
///
/// Must be used inside a request handled by `FlashMessagesFramework`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlashNotifier;

impl Notifier for FlashNotifier {
    fn notify_success(&self, message: &str) {
        FlashMessage::success(message).send();
    }
}
