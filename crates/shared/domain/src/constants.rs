//! Wire-level string constants shared across slices.

/// Synthetic parameter naming the redirect target host. Consumed by the URL
/// builder, never emitted as a query parameter.
pub const HOST_PARAM: &str = "host";

/// Query parameter carrying an explicit site attribution override.
pub const SITE_ID_PARAM: &str = "inat_site_id";

/// UTM attribution parameters.
pub const UTM_SOURCE: &str = "utm_source";
pub const UTM_MEDIUM: &str = "utm_medium";
pub const UTM_CAMPAIGN: &str = "utm_campaign";
pub const UTM_CONTENT: &str = "utm_content";
pub const UTM_TERM: &str = "utm_term";

/// Medium recorded for first-touch web traffic.
pub const WEB_MEDIUM: &str = "web";

/// Donation page paths on the default site.
pub const DONATE_PATH: &str = "/donate";
pub const MONTHLY_SUPPORTERS_PATH: &str = "/monthly-supporters";

/// `OpenAPI` tags.
pub const SYSTEM_TAG: &str = "System";
pub const DONATIONS_TAG: &str = "Donations";
