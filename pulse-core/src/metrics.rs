//! Metric models and timeframe scaling.

use crate::format;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a metric's change versus the previous period.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    /// Arrow glyph shown next to the change.
    pub fn arrow(self) -> &'static str {
        match self {
            Trend::Up => "\u{2197}",
            Trend::Down => "\u{2198}",
            Trend::Flat => "\u{2192}",
        }
    }
}

/// A metric's value with its display semantics.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum MetricValue {
    Currency(f64),
    Count(f64),
    Percent(f64),
    DurationSecs(u32),
}

impl MetricValue {
    pub fn formatted(&self) -> String {
        match self {
            MetricValue::Currency(v) => format::currency(*v),
            MetricValue::Count(v) => format::compact_number(*v),
            MetricValue::Percent(v) => format::percent(*v),
            MetricValue::DurationSecs(s) => format::duration_minutes(*s),
        }
    }
}

/// One stat card's worth of data.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Metric {
    pub key: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub value: MetricValue,
    /// Percent change versus the previous period.
    pub change_pct: f64,
    pub description: &'static str,
}

impl Metric {
    pub fn trend(&self) -> Trend {
        if self.change_pct > 0.0 {
            Trend::Up
        } else if self.change_pct < 0.0 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }

    pub fn formatted_value(&self) -> String {
        self.value.formatted()
    }

    pub fn formatted_change(&self) -> String {
        format::signed_percent(self.change_pct)
    }
}

/// Reporting window selected in the dashboard header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Timeframe {
    Hours24,
    #[default]
    Days7,
    Days30,
    Days90,
}

impl Timeframe {
    pub const ALL: [Timeframe; 4] = [
        Timeframe::Hours24,
        Timeframe::Days7,
        Timeframe::Days30,
        Timeframe::Days90,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Timeframe::Hours24 => "24h",
            Timeframe::Days7 => "7d",
            Timeframe::Days30 => "30d",
            Timeframe::Days90 => "90d",
        }
    }

    /// Volume multiplier relative to the 7-day baseline.
    pub fn multiplier(self) -> f64 {
        match self {
            Timeframe::Hours24 => 0.1,
            Timeframe::Days7 => 1.0,
            Timeframe::Days30 => 4.3,
            Timeframe::Days90 => 13.0,
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_follows_change_sign() {
        let mut metric = Metric {
            key: "revenue",
            title: "Total Revenue",
            icon: "💰",
            value: MetricValue::Currency(124_562.0),
            change_pct: 12.5,
            description: "vs last month",
        };
        assert_eq!(metric.trend(), Trend::Up);
        metric.change_pct = -2.1;
        assert_eq!(metric.trend(), Trend::Down);
        metric.change_pct = 0.0;
        assert_eq!(metric.trend(), Trend::Flat);
    }

    #[test]
    fn values_format_by_kind() {
        assert_eq!(MetricValue::Currency(124_562.0).formatted(), "$124.6K");
        assert_eq!(MetricValue::Count(8_429.0).formatted(), "8.4K");
        assert_eq!(MetricValue::Percent(3.24).formatted(), "3.24%");
        assert_eq!(MetricValue::DurationSecs(272).formatted(), "4m 32s");
    }

    #[test]
    fn timeframe_labels_and_multipliers() {
        assert_eq!(Timeframe::Hours24.label(), "24h");
        assert_eq!(Timeframe::Days7.multiplier(), 1.0);
        assert_eq!(Timeframe::Days30.multiplier(), 4.3);
        assert_eq!(Timeframe::Days90.multiplier(), 13.0);
        assert_eq!(Timeframe::default(), Timeframe::Days7);
    }
}
