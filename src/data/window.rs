//! Categories and the time windows requested for each of them.
//!
//! Windows are always derived from the wall clock at the moment a refresh
//! fires; nothing here is cached between polls.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, TimeZone};

use super::duration::parse_span;

/// Hourly aggregates look back 60 days.
pub const HOURLY_LOOKBACK_SECS: i64 = 60 * 24 * 3600;

/// Maximum number of points requested for any series.
pub const SERIES_LIMIT: u32 = 2000;

/// Telemetry aggregation granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Raw,
    Hourly,
    Daily,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [Category::Raw, Category::Hourly, Category::Daily];

    /// Position in the dashboard's binding table.
    pub fn index(self) -> usize {
        match self {
            Category::Raw => 0,
            Category::Hourly => 1,
            Category::Daily => 2,
        }
    }

    /// Value of the `kind` query parameter.
    pub fn kind(self) -> &'static str {
        match self {
            Category::Raw => "raw",
            Category::Hourly => "hourly",
            Category::Daily => "daily",
        }
    }

    /// Returns the display label for this category.
    pub fn title(self) -> &'static str {
        match self {
            Category::Raw => "RAW",
            Category::Hourly => "HOURLY",
            Category::Daily => "DAILY",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

/// Operator-selectable lookback for the raw category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RawPeriod {
    FiveMinutes,
    FifteenMinutes,
    #[default]
    OneHour,
    OneDay,
    OneWeek,
}

impl RawPeriod {
    /// All presets in selector order.
    pub const ALL: [RawPeriod; 5] = [
        RawPeriod::FiveMinutes,
        RawPeriod::FifteenMinutes,
        RawPeriod::OneHour,
        RawPeriod::OneDay,
        RawPeriod::OneWeek,
    ];

    /// Lookback in seconds.
    pub fn secs(self) -> i64 {
        match self {
            RawPeriod::FiveMinutes => 300,
            RawPeriod::FifteenMinutes => 900,
            RawPeriod::OneHour => 3_600,
            RawPeriod::OneDay => 86_400,
            RawPeriod::OneWeek => 7 * 86_400,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RawPeriod::FiveMinutes => "RAW 5 minutes",
            RawPeriod::FifteenMinutes => "RAW 15 minutes",
            RawPeriod::OneHour => "RAW 1 hour",
            RawPeriod::OneDay => "RAW 24 hours",
            RawPeriod::OneWeek => "RAW 7 days",
        }
    }

    /// Find the preset with exactly this lookback.
    pub fn from_secs(secs: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.secs() == secs)
    }

    /// Cycle to the next preset.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Cycle to the previous preset.
    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl FromStr for RawPeriod {
    type Err = anyhow::Error;

    /// Accepts spans such as "5m", "15m", "1h", "24h" or "7d".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let secs = parse_span(s)?;
        Self::from_secs(secs).ok_or_else(|| {
            anyhow::anyhow!("Unsupported raw period {:?} (expected 5m, 15m, 1h, 24h or 7d)", s)
        })
    }
}

/// Half-open `[from, to)` range in unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub from: i64,
    pub to: i64,
}

impl TimeWindow {
    /// Build a window, clamping `from` so that `to >= from` always holds.
    pub fn new(from: i64, to: i64) -> Self {
        Self {
            from: from.min(to),
            to,
        }
    }

    /// Window bounds in milliseconds, the unit chart time axes use.
    pub fn millis(&self) -> [f64; 2] {
        [self.from as f64 * 1000.0, self.to as f64 * 1000.0]
    }
}

/// Compute the window a category requests at `now`.
///
/// The raw category uses whatever period is passed in; the previous selection
/// plays no part.
pub fn window_for<Tz: TimeZone>(
    category: Category,
    now: &DateTime<Tz>,
    raw_period: RawPeriod,
) -> TimeWindow {
    let to = now.timestamp();
    let from = match category {
        Category::Raw => to - raw_period.secs(),
        Category::Hourly => to - HOURLY_LOOKBACK_SECS,
        Category::Daily => start_of_year(now),
    };
    TimeWindow::new(from, to)
}

/// Unix timestamp of 00:00:00 on January 1 of `now`'s year, in `now`'s zone.
///
/// If local midnight does not exist (a DST gap), the first valid hour of the
/// day is used instead.
pub fn start_of_year<Tz: TimeZone>(now: &DateTime<Tz>) -> i64 {
    let tz = now.timezone();
    let year = now.year();
    (0..24)
        .find_map(|hour| tz.with_ymd_and_hms(year, 1, 1, hour, 0, 0).earliest())
        .map(|dt| dt.timestamp())
        .unwrap_or_else(|| now.timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn at(
        offset_hours: i32,
        y: i32,
        mo: u32,
        d: u32,
        h: u32,
        mi: u32,
        s: u32,
    ) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(offset_hours * 3600)
            .unwrap()
            .with_ymd_and_hms(y, mo, d, h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_hourly_window_is_sixty_days() {
        let now = at(0, 2026, 10, 18, 12, 0, 0);
        let w = window_for(Category::Hourly, &now, RawPeriod::default());
        assert_eq!(w.to, now.timestamp());
        assert_eq!(w.from, w.to - 60 * 24 * 3600);
    }

    #[test]
    fn test_daily_window_starts_at_local_new_year() {
        let now = at(3, 2026, 10, 18, 12, 0, 0);
        let w = window_for(Category::Daily, &now, RawPeriod::default());

        // Midnight Jan 1 at +03:00 is 21:00 UTC on Dec 31.
        let expected = Utc.with_ymd_and_hms(2025, 12, 31, 21, 0, 0).unwrap().timestamp();
        assert_eq!(w.from, expected);
        assert_eq!(w.to, now.timestamp());
        assert!(w.to >= w.from);
    }

    #[test]
    fn test_daily_window_just_after_new_year() {
        let now = at(-5, 2027, 1, 1, 0, 0, 30);
        let w = window_for(Category::Daily, &now, RawPeriod::default());
        assert_eq!(w.to - w.from, 30);
    }

    #[test]
    fn test_start_of_year_skips_missing_midnight() {
        // Kathmandu moved from +05:30 to +05:45 at midnight on 1986-01-01,
        // so 00:00 that day never happened locally.
        let tz = chrono_tz::Asia::Kathmandu;
        let now = tz.with_ymd_and_hms(1986, 6, 1, 12, 0, 0).unwrap();
        assert!(tz.with_ymd_and_hms(1986, 1, 1, 0, 0, 0).earliest().is_none());

        // 01:00 +05:45 is 19:15 UTC on Dec 31
        let expected = Utc.with_ymd_and_hms(1985, 12, 31, 19, 15, 0).unwrap().timestamp();
        assert_eq!(start_of_year(&now), expected);

        let w = window_for(Category::Daily, &now, RawPeriod::default());
        assert_eq!(w.from, expected);
    }

    #[test]
    fn test_raw_window_uses_selected_period() {
        let now = at(0, 2026, 10, 18, 12, 0, 0);
        for period in RawPeriod::ALL {
            let w = window_for(Category::Raw, &now, period);
            assert_eq!(w.to - w.from, period.secs());
        }
    }

    #[test]
    fn test_raw_24_hours_after_other_selection() {
        let now = at(0, 2026, 10, 18, 12, 0, 0);
        let mut period = RawPeriod::FiveMinutes;
        let _ = window_for(Category::Raw, &now, period);

        period = "24h".parse().unwrap();
        let w = window_for(Category::Raw, &now, period);
        assert_eq!(w.from, now.timestamp() - 86_400);
    }

    #[test]
    fn test_window_never_inverted() {
        let w = TimeWindow::new(200, 100);
        assert_eq!(w, TimeWindow { from: 100, to: 100 });
    }

    #[test]
    fn test_window_millis() {
        assert_eq!(TimeWindow::new(1, 2).millis(), [1000.0, 2000.0]);
    }

    #[test]
    fn test_raw_period_cycle() {
        assert_eq!(RawPeriod::OneHour.next(), RawPeriod::OneDay);
        assert_eq!(RawPeriod::OneWeek.next(), RawPeriod::FiveMinutes);
        assert_eq!(RawPeriod::FiveMinutes.prev(), RawPeriod::OneWeek);
        assert_eq!(RawPeriod::default(), RawPeriod::OneHour);
    }

    #[test]
    fn test_raw_period_from_str() {
        assert_eq!("5m".parse::<RawPeriod>().unwrap(), RawPeriod::FiveMinutes);
        assert_eq!("7d".parse::<RawPeriod>().unwrap(), RawPeriod::OneWeek);
        assert_eq!("3600s".parse::<RawPeriod>().unwrap(), RawPeriod::OneHour);
        assert!("2h".parse::<RawPeriod>().is_err());
        assert!("200000000000000d".parse::<RawPeriod>().is_err());
    }

    #[test]
    fn test_category_table() {
        for (i, c) in Category::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
        assert_eq!(Category::Hourly.kind(), "hourly");
        assert_eq!(Category::Daily.title(), "DAILY");
    }
}
