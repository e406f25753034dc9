mod login_data;

pub use login_data::LoginData;
