pub mod health;
pub mod login;
pub mod pages;
pub mod partner_signin;

pub use health::health_handler;
pub use login::login_handler;
pub use pages::{app_page_handler, home_page_handler, tenant_page_handler};
pub use partner_signin::partner_signin_handler;
