mod login;
mod login_form;
mod page;

pub use login::*;
pub use login_form::*;
pub use page::{render_login_page, toasts_html};
