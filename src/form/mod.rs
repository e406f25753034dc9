mod field;
mod login_form;

pub use field::*;
pub use login_form::*;
