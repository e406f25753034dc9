mod health_check;
mod login;

// re-export
pub use health_check::*;
pub use login::*;
