//! Generated dashboard datasets.
//!
//! There is no backend: every chart and metric is derived here, in memory,
//! from fixed baselines plus the selected timeframe. `refresh` nudges the
//! headline metrics with caller-supplied randomness so the generators stay
//! deterministic and testable.

use crate::chart::{ChartData, Series};
use crate::metrics::{Metric, MetricValue, Timeframe};
use chrono::NaiveDate;

/// Everything the dashboard page renders.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardData {
    pub metrics: Vec<Metric>,
    pub revenue: ChartData,
    pub sales: ChartData,
    pub traffic: ChartData,
    pub performance: ChartData,
}

/// Baselines for the headline metrics at the 7-day view.
const BASE_REVENUE: f64 = 124_562.0;
const BASE_ACTIVE_USERS: f64 = 8_429.0;
const BASE_CONVERSION: f64 = 3.24;
const BASE_SESSION_SECS: u32 = 272;

/// Conversion rate is capped however far the window stretches.
const CONVERSION_CAP: f64 = 15.0;

/// Build the full dataset for one timeframe.
pub fn dashboard_data(timeframe: Timeframe) -> DashboardData {
    log::debug!("generating dashboard data for the {} window", timeframe);
    DashboardData {
        metrics: metrics_for(timeframe),
        revenue: revenue_chart(),
        sales: sales_chart(),
        traffic: traffic_chart(),
        performance: performance_chart(),
    }
}

/// Headline metrics scaled to the selected timeframe.
///
/// Revenue scales linearly with window volume; active users carry an extra
/// 0.8 engagement factor; conversion grows sub-linearly and is capped;
/// average session length is window-independent.
pub fn metrics_for(timeframe: Timeframe) -> Vec<Metric> {
    let multiplier = timeframe.multiplier();
    vec![
        Metric {
            key: "revenue",
            title: "Total Revenue",
            icon: "💰",
            value: MetricValue::Currency((BASE_REVENUE * multiplier).floor()),
            change_pct: 12.5,
            description: "vs last month",
        },
        Metric {
            key: "users",
            title: "Active Users",
            icon: "👥",
            value: MetricValue::Count((BASE_ACTIVE_USERS * multiplier * 0.8).floor()),
            change_pct: 8.2,
            description: "vs last month",
        },
        Metric {
            key: "conversion",
            title: "Conversion Rate",
            icon: "📈",
            value: MetricValue::Percent((BASE_CONVERSION * multiplier * 0.3).min(CONVERSION_CAP)),
            change_pct: -2.1,
            description: "vs last month",
        },
        Metric {
            key: "session",
            title: "Avg. Session",
            icon: "⏱️",
            value: MetricValue::DurationSecs(BASE_SESSION_SECS),
            change_pct: 15.3,
            description: "vs last month",
        },
    ]
}

/// Nudge the revenue and user headline metrics upward.
///
/// `revenue_jitter` and `users_jitter` are random samples in `[0, 1)`; the
/// bumps are bounded at +1000 revenue and +100 users per refresh. Inputs
/// outside the range are clamped.
pub fn refresh(data: &mut DashboardData, revenue_jitter: f64, users_jitter: f64) {
    let revenue_bump = (revenue_jitter.clamp(0.0, 1.0) * 1000.0).floor();
    let users_bump = (users_jitter.clamp(0.0, 1.0) * 100.0).floor();
    for metric in &mut data.metrics {
        match (metric.key, &mut metric.value) {
            ("revenue", MetricValue::Currency(v)) => *v += revenue_bump,
            ("users", MetricValue::Count(v)) => *v += users_bump,
            _ => {}
        }
    }
    log::debug!(
        "refreshed metrics: revenue +{}, users +{}",
        revenue_bump,
        users_bump
    );
}

/// Jan..Dec labels derived from the calendar rather than a string table.
fn month_labels() -> Vec<String> {
    (1..=12)
        .filter_map(|month| NaiveDate::from_ymd_opt(2024, month, 1))
        .map(|date| date.format("%b").to_string())
        .collect()
}

/// Monthly revenue, current year versus prior year.
pub fn revenue_chart() -> ChartData {
    ChartData::new(
        month_labels(),
        vec![
            Series::new(
                "Revenue 2024",
                vec![
                    45_000.0, 52_000.0, 48_000.0, 61_000.0, 55_000.0, 67_000.0, 73_000.0,
                    69_000.0, 78_000.0, 82_000.0, 76_000.0, 89_000.0,
                ],
            ),
            Series::new(
                "Revenue 2023",
                vec![
                    38_000.0, 42_000.0, 39_000.0, 48_000.0, 45_000.0, 52_000.0, 58_000.0,
                    54_000.0, 62_000.0, 65_000.0, 61_000.0, 71_000.0,
                ],
            ),
        ],
    )
}

/// Quarterly sales by channel.
pub fn sales_chart() -> ChartData {
    ChartData::new(
        vec!["Q1".into(), "Q2".into(), "Q3".into(), "Q4".into()],
        vec![
            Series::new(
                "Online Sales",
                vec![145_000.0, 178_000.0, 162_000.0, 201_000.0],
            ),
            Series::new(
                "Offline Sales",
                vec![98_000.0, 112_000.0, 125_000.0, 134_000.0],
            ),
            Series::new(
                "Mobile Sales",
                vec![67_000.0, 89_000.0, 94_000.0, 112_000.0],
            ),
        ],
    )
}

/// Traffic source shares for the doughnut.
pub fn traffic_chart() -> ChartData {
    ChartData::new(
        vec![
            "Direct".into(),
            "Organic Search".into(),
            "Social Media".into(),
            "Email".into(),
            "Paid Ads".into(),
        ],
        vec![Series::new("Traffic Share", vec![35.0, 28.0, 18.0, 12.0, 7.0])],
    )
}

/// Weekly sales and leads.
pub fn performance_chart() -> ChartData {
    ChartData::new(
        (1..=6).map(|week| format!("Week {}", week)).collect(),
        vec![
            Series::new("Sales", vec![12.0, 19.0, 15.0, 25.0, 22.0, 30.0]),
            Series::new("Leads", vec![8.0, 15.0, 12.0, 18.0, 16.0, 22.0]),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_labels_cover_the_year() {
        let labels = month_labels();
        assert_eq!(labels.len(), 12);
        assert_eq!(labels[0], "Jan");
        assert_eq!(labels[11], "Dec");
    }

    #[test]
    fn metrics_scale_with_timeframe() {
        let week = metrics_for(Timeframe::Days7);
        assert_eq!(week[0].value, MetricValue::Currency(124_562.0));
        assert_eq!(week[1].value, MetricValue::Count(6_743.0));

        let quarter = metrics_for(Timeframe::Days90);
        assert_eq!(quarter[0].value, MetricValue::Currency(1_619_306.0));
        // Conversion grows sub-linearly and stays under the cap here.
        assert_eq!(
            quarter[2].value,
            MetricValue::Percent((3.24f64 * 13.0 * 0.3).min(15.0))
        );
        // Session length is window-independent.
        assert_eq!(quarter[3].value, week[3].value);
    }

    #[test]
    fn conversion_rate_is_capped() {
        for timeframe in Timeframe::ALL {
            let metrics = metrics_for(timeframe);
            let MetricValue::Percent(rate) = metrics[2].value else {
                panic!("conversion metric should be a percentage");
            };
            assert!(rate <= 15.0);
        }
    }

    #[test]
    fn refresh_bumps_revenue_and_users_only() {
        let mut data = dashboard_data(Timeframe::Days7);
        let before = data.metrics.clone();
        refresh(&mut data, 0.5, 0.5);
        assert_eq!(
            data.metrics[0].value,
            MetricValue::Currency(124_562.0 + 500.0)
        );
        assert_eq!(data.metrics[1].value, MetricValue::Count(6_743.0 + 50.0));
        assert_eq!(data.metrics[2], before[2]);
        assert_eq!(data.metrics[3], before[3]);
    }

    #[test]
    fn refresh_with_zero_jitter_is_a_no_op() {
        let mut data = dashboard_data(Timeframe::Days7);
        let before = data.clone();
        refresh(&mut data, 0.0, 0.0);
        assert_eq!(data, before);
    }

    #[test]
    fn refresh_clamps_out_of_range_jitter() {
        let mut data = dashboard_data(Timeframe::Days7);
        refresh(&mut data, 7.5, -3.0);
        assert_eq!(
            data.metrics[0].value,
            MetricValue::Currency(124_562.0 + 1000.0)
        );
        assert_eq!(data.metrics[1].value, MetricValue::Count(6_743.0));
    }

    #[test]
    fn chart_series_shapes_match_labels() {
        let data = dashboard_data(Timeframe::Days7);
        for chart in [&data.revenue, &data.sales, &data.traffic, &data.performance] {
            for series in &chart.series {
                assert_eq!(series.data.len(), chart.labels.len());
            }
        }
        assert_eq!(data.revenue.series.len(), 2);
        assert_eq!(data.sales.series.len(), 3);
        assert_eq!(data.traffic.series.len(), 1);
    }

    #[test]
    fn traffic_shares_sum_to_one_hundred() {
        let traffic = traffic_chart();
        let total: f64 = traffic.series[0].data.iter().sum();
        assert_eq!(total, 100.0);
    }
}
