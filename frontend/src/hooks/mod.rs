pub mod admin_auth;
pub mod form_state;
pub mod use_now;

pub use admin_auth::*;
pub use form_state::*;
pub use use_now::*;
