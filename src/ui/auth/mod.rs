//! Authentication forms

mod login_form;
mod register_form;

pub use login_form::LoginForm;
pub use register_form::RegisterForm;
