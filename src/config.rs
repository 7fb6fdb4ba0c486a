use std::env;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub cart_storage_dir: String,
    pub defaults: BookingDefaults,
}

/// Tunables that were previously scattered across call sites, consolidated
/// into one place so every module applies the same values.
#[derive(Clone, Debug)]
pub struct BookingDefaults {
    /// Fallback slot duration in hours when an item or occurrence carries
    /// none. The source used 1h or 2h depending on the call site; 2h is
    /// applied uniformly here.
    pub duration_hours: u32,
    /// Occurrence cap applied when a pattern has neither an end date nor an
    /// explicit limit.
    pub occurrence_cap: usize,
    /// Hard bound on the expansion date scan, in days (52 weeks). Guarantees
    /// termination no matter what bounds the caller supplies.
    pub horizon_days: i64,
    pub cache_ttl_secs: u64,
    pub cache_max_entries: u64,
    /// VAT applied on top of the net amount in the pricing breakdown.
    pub vat_rate: f64,
    pub discount_rate: f64,
}

impl Default for BookingDefaults {
    fn default() -> Self {
        Self {
            duration_hours: 2,
            occurrence_cap: 12,
            horizon_days: 364,
            cache_ttl_secs: 300,
            cache_max_entries: 4096,
            vat_rate: 0.25,
            discount_rate: 0.0,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut defaults = BookingDefaults::default();
        if let Ok(v) = env::var("CACHE_TTL_SECS") {
            defaults.cache_ttl_secs = v.parse().expect("CACHE_TTL_SECS must be a number");
        }
        if let Ok(v) = env::var("CACHE_MAX_ENTRIES") {
            defaults.cache_max_entries = v.parse().expect("CACHE_MAX_ENTRIES must be a number");
        }
        if let Ok(v) = env::var("OCCURRENCE_CAP") {
            defaults.occurrence_cap = v.parse().expect("OCCURRENCE_CAP must be a number");
        }
        if let Ok(v) = env::var("VAT_RATE") {
            defaults.vat_rate = v.parse().expect("VAT_RATE must be a number");
        }

        Self {
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            cart_storage_dir: env::var("CART_STORAGE_DIR").unwrap_or_else(|_| "./cart-store".to_string()),
            defaults,
        }
    }
}
