// Scheduler API path and header constants

pub mod header {
    pub const API_KEY: &str = "x-api-key";
    pub const NETTU_ACCOUNT: &str = "nettu-account";
    pub const AUTHORIZATION: &str = "authorization";
    pub const CONTENT_TYPE: &str = "content-type";
}

pub mod api_path {
    // Account
    pub const ACCOUNT: &str = "/account";
    pub const ACCOUNT_PUBKEY: &str = "/account/pubkey";
    pub const ACCOUNT_WEBHOOK: &str = "/account/webhook";

    // Health
    pub const HEALTHCHECK: &str = "/healthcheck";

    // Admin scoped resources live under /user
    pub const ADMIN_SCOPE: &str = "/user";

    // Service
    pub const SERVICE: &str = "/service";

    // End user
    pub const ME: &str = "/me";
    pub const USER: &str = "/user";

    // Resource segments
    pub const CALENDAR: &str = "/calendar";
    pub const EVENTS: &str = "/events";
    pub const SCHEDULE: &str = "/schedule";
}
