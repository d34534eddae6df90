/// Fixed discount tiers offered at checkout, in percent.
pub const DISCOUNT_TIERS: [u32; 3] = [0, 5, 10];

/// Upper bound for a custom discount, in percent.
pub const MAX_DISCOUNT_PERCENT: u32 = 100;

/// How far in the past a plan start date may fall, in days.
pub const START_DATE_LOOKBACK_DAYS: i64 = 14;

/// How far in the future a plan start date may fall, in calendar months.
pub const START_DATE_HORIZON_MONTHS: u32 = 6;

/// Prefix for server-issued invoice numbers (`INV-<year>-NNNN`).
pub const INVOICE_PREFIX: &str = "INV";

/// Time-to-live for signed object-storage retrieval URLs, in seconds.
pub const SIGNED_URL_TTL_SECS: u64 = 3600;
