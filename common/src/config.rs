use chrono::{DateTime, Utc};

pub struct Config {
    /// Disables the banner printed at startup.
    pub no_banner: bool,
    /// 0 prints everything, 1 drops headers and the banner,
    /// 2 prints only the resulting sentence.
    pub quiet: u8,
    /// Pins the current instant instead of reading the system clock.
    ///
    /// Only meant for reproducing a past calculation.
    pub now: Option<DateTime<Utc>>,
}
