//! Route paths shared by the flow and the router.

/// Where a successful sign-in lands.
pub const HOME: &str = "/";

/// The login form.
pub const LOGIN: &str = "/login";

/// Account registration, linked from the login form.
pub const REGISTER: &str = "/register";

