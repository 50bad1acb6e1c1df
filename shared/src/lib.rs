pub mod admin;
pub mod constants;
pub mod countdown;
pub mod prize_pool;
pub mod shared_spin;
pub mod validation;
pub mod wheel;
