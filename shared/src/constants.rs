pub const SPIN_ENDPOINT: &str = "/api/spin";
pub const STATUS_ENDPOINT: &str = "/api/status";
pub const PRIZES_ENDPOINT: &str = "/api/prizes";
pub const ADMIN_LOGIN_ENDPOINT: &str = "/api/admin/login";
pub const ADMIN_PRIZES_ENDPOINT: &str = "/api/admin/prizes";
pub const ADMIN_REDEEM_ENDPOINT: &str = "/api/admin/redeem";
pub const ADMIN_ANALYTICS_ENDPOINT: &str = "/api/admin/analytics";

pub const NAME_REQUIRED_ERROR: &str = "Please enter your full name";
pub const NAME_TOO_SHORT_ERROR: &str = "Name looks too short";
pub const NAME_CHARACTERS_ERROR: &str = "Use letters and spaces only";
pub const PHONE_REQUIRED_ERROR: &str = "Please enter your phone number";
pub const INVALID_PHONE_ERROR: &str = "Enter a valid phone with country code";
pub const NETWORK_ERROR: &str = "Network error. Please try again";
pub const SESSION_EXPIRED_ERROR: &str = "Session expired. Please log in again";
pub const COPY_FAILED_ERROR: &str = "Couldn't copy. Please copy it manually";

pub const MIN_NAME_LENGTH: usize = 2;
pub const MIN_PHONE_DIGITS: usize = 7;
pub const MAX_PHONE_DIGITS: usize = 15;
