// src/config/consts.rs

// Upstream
pub const ROSTER_URL: &str =
    "https://unitedstates.github.io/congress-legislators/legislators-current.json";
pub const PORTRAIT_URL_TEMPLATE: &str =
    "https://unitedstates.github.io/images/congress/450x550/{bioguide}.jpg";
pub const BIOGUIDE_PLACEHOLDER: &str = "{bioguide}";

// Local output
pub const DEFAULT_OUT_FILE: &str = "public/politicians.json";
pub const DEFAULT_IMAGE_DIR: &str = "public/images/politicians";
pub const DEFAULT_IMG_URL_PREFIX: &str = "/images/politicians";
pub const DEFAULT_IMAGE_EXT: &str = "jpg";

// Net
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
pub const USER_AGENT: &str = concat!("pol_scrape/", env!("CARGO_PKG_VERSION"));
