//! Authentication pages

mod login;
mod oauth;
mod register;

pub use login::LoginPage;
pub use oauth::OauthSuccessPage;
pub use register::RegisterPage;
