pub const CLOUDFLARE_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Large enough that an account's active zones fit on one page.
pub const ZONES_PER_PAGE: u32 = 50;
