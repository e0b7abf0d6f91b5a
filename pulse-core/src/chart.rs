//! Chart.js option-object and dataset composition.
//!
//! Charts are rendered by embedded JS (see `pulse-chart-ui::js_bridge`);
//! this module builds the JSON the bridge hands over: an options object
//! derived from the theme palette with device-class overrides merged in,
//! and a datasets array styled by cycling the series palette. Anything that
//! must be a JS function (tick callbacks, canvas gradients) is attached on
//! the JS side; line datasets carry their gradient stops under a
//! `gradientStops` key the JS resolves into a canvas gradient.

use crate::breakpoint::DeviceClass;
use crate::theme::Theme;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Supported chart shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
    Doughnut,
}

impl ChartKind {
    /// The Chart.js `type` string.
    pub fn type_name(self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Doughnut => "doughnut",
        }
    }
}

/// One labeled data series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub data: Vec<f64>,
}

impl Series {
    pub fn new(label: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            data,
        }
    }
}

/// Labels plus one or more series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

impl ChartData {
    pub fn new(labels: Vec<String>, series: Vec<Series>) -> Self {
        Self { labels, series }
    }
}

const FONT_FAMILY: &str = "'Inter', -apple-system, BlinkMacSystemFont, sans-serif";

/// Build the complete options object for a chart kind, theme, and device
/// class.
pub fn chart_options(kind: ChartKind, theme: Theme, device: DeviceClass) -> Value {
    let mut options = match kind {
        ChartKind::Line => line_options(theme),
        ChartKind::Bar => bar_options(theme),
        ChartKind::Doughnut => doughnut_options(theme),
    };
    if let Some(patch) = responsive_overrides(kind, device) {
        merge_patch(&mut options, &patch);
    }
    options
}

/// The Chart.js `data` object: labels plus styled datasets.
pub fn chart_data_json(kind: ChartKind, data: &ChartData, theme: Theme) -> Value {
    json!({
        "labels": data.labels,
        "datasets": datasets(kind, data, theme),
    })
}

/// Serialize the `(data, options)` pair the JS bridge consumes.
pub fn chart_payload(
    kind: ChartKind,
    data: &ChartData,
    theme: Theme,
    device: DeviceClass,
) -> anyhow::Result<(String, String)> {
    let data_json = serde_json::to_string(&chart_data_json(kind, data, theme))
        .context("serializing chart data")?;
    let options_json = serde_json::to_string(&chart_options(kind, theme, device))
        .context("serializing chart options")?;
    Ok((data_json, options_json))
}

fn common_options(theme: Theme) -> Value {
    let palette = theme.palette();
    json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "interaction": {
            "intersect": false,
            "mode": "index"
        },
        "plugins": {
            "legend": {
                "display": true,
                "position": "top",
                "align": "end",
                "labels": {
                    "color": palette.text_primary,
                    "font": { "family": FONT_FAMILY, "size": 12, "weight": "500" },
                    "padding": 20,
                    "usePointStyle": true,
                    "pointStyle": "circle",
                    "boxWidth": 8,
                    "boxHeight": 8
                }
            },
            "tooltip": {
                "enabled": true,
                "backgroundColor": palette.tooltip_background,
                "titleColor": palette.text_primary,
                "bodyColor": palette.text_secondary,
                "borderColor": palette.tooltip_border,
                "borderWidth": 1,
                "cornerRadius": 12,
                "padding": 12,
                "displayColors": true,
                "titleFont": { "family": FONT_FAMILY, "size": 13, "weight": "600" },
                "bodyFont": { "family": FONT_FAMILY, "size": 12, "weight": "400" }
            }
        },
        "scales": {
            "x": {
                "display": true,
                "grid": { "display": true, "color": palette.grid_line, "lineWidth": 1 },
                "ticks": {
                    "color": palette.text_secondary,
                    "font": { "family": FONT_FAMILY, "size": 11, "weight": "400" },
                    "padding": 8,
                    "maxTicksLimit": 8
                },
                "border": { "display": false }
            },
            "y": {
                "display": true,
                "grid": { "display": true, "color": palette.grid_line, "lineWidth": 1 },
                "ticks": {
                    "color": palette.text_secondary,
                    "font": { "family": FONT_FAMILY, "size": 11, "weight": "400" },
                    "padding": 8,
                    "maxTicksLimit": 6,
                    // Resolved JS-side into the K/M tick callback.
                    "compactNumbers": true
                },
                "border": { "display": false }
            }
        },
        "elements": {
            "point": { "radius": 4, "hoverRadius": 6, "borderWidth": 2, "hoverBorderWidth": 3 },
            "line": { "borderWidth": 3, "tension": 0.4 },
            "bar": { "borderRadius": 6, "borderSkipped": false }
        },
        "animation": { "duration": 1000, "easing": "easeInOutQuart" }
    })
}

fn line_options(theme: Theme) -> Value {
    let palette = theme.palette();
    let mut options = common_options(theme);
    merge_patch(
        &mut options,
        &json!({
            "plugins": { "filler": { "propagate": false } },
            "elements": {
                "point": {
                    "backgroundColor": "rgba(255, 255, 255, 0.9)",
                    "borderColor": palette.series[0].border,
                    "hoverBackgroundColor": "rgba(255, 255, 255, 1)",
                    "hoverBorderColor": palette.series[0].border
                }
            }
        }),
    );
    options
}

fn bar_options(theme: Theme) -> Value {
    let mut options = common_options(theme);
    merge_patch(
        &mut options,
        &json!({
            "elements": {
                "bar": {
                    "borderRadius": { "topLeft": 8, "topRight": 8, "bottomLeft": 0, "bottomRight": 0 },
                    "borderSkipped": false
                }
            }
        }),
    );
    options
}

fn doughnut_options(theme: Theme) -> Value {
    let palette = theme.palette();
    json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "cutout": "70%",
        "plugins": {
            "legend": {
                "display": true,
                "position": "bottom",
                "labels": {
                    "color": palette.text_primary,
                    "font": { "family": FONT_FAMILY, "size": 12, "weight": "500" },
                    "padding": 15,
                    "usePointStyle": true,
                    "pointStyle": "circle",
                    "boxWidth": 10,
                    "boxHeight": 10
                }
            },
            "tooltip": {
                "enabled": true,
                "backgroundColor": palette.tooltip_background,
                "titleColor": palette.text_primary,
                "bodyColor": palette.text_secondary,
                "borderColor": palette.tooltip_border,
                "borderWidth": 1,
                "cornerRadius": 12,
                "padding": 12,
                // Resolved JS-side into the value + share tooltip label.
                "shareLabels": true
            }
        },
        "elements": {
            "arc": {
                "borderWidth": 2,
                "borderColor": palette.arc_border,
                "hoverBorderWidth": 3
            }
        },
        "animation": { "duration": 1200, "easing": "easeInOutQuart" }
    })
}

/// Device-class option overrides: tighter fonts and fewer ticks on small
/// screens. Desktop charts are left unmodified.
fn responsive_overrides(kind: ChartKind, device: DeviceClass) -> Option<Value> {
    let (legend_size, legend_padding, tick_size, x_ticks, y_ticks) = match device {
        DeviceClass::Mobile => (10, 10, 9, 4, 4),
        DeviceClass::Tablet => (11, 15, 10, 6, 5),
        DeviceClass::Desktop => return None,
    };
    let mut patch = json!({
        "plugins": {
            "legend": {
                "labels": {
                    "font": { "size": legend_size },
                    "padding": legend_padding
                }
            }
        }
    });
    // Doughnut charts have no cartesian scales to tighten.
    if kind != ChartKind::Doughnut {
        merge_patch(
            &mut patch,
            &json!({
                "scales": {
                    "x": { "ticks": { "font": { "size": tick_size }, "maxTicksLimit": x_ticks } },
                    "y": { "ticks": { "font": { "size": tick_size }, "maxTicksLimit": y_ticks } }
                }
            }),
        );
    }
    Some(patch)
}

/// Styled datasets for the chart kind, cycling the series palette.
fn datasets(kind: ChartKind, data: &ChartData, theme: Theme) -> Value {
    let palette = theme.palette();
    match kind {
        ChartKind::Line => Value::Array(
            data.series
                .iter()
                .enumerate()
                .map(|(i, series)| {
                    let color = palette.series[i % palette.series.len()];
                    json!({
                        "label": series.label,
                        "data": series.data,
                        "borderColor": color.border,
                        "backgroundColor": color.light,
                        "borderWidth": 3,
                        "tension": 0.4,
                        "fill": true,
                        "pointBackgroundColor": "rgba(255, 255, 255, 0.9)",
                        "pointBorderColor": color.border,
                        "pointBorderWidth": 2,
                        "pointRadius": 4,
                        "pointHoverRadius": 6,
                        "pointHoverBorderWidth": 3,
                        "gradientStops": color.gradient
                    })
                })
                .collect(),
        ),
        ChartKind::Bar => Value::Array(
            data.series
                .iter()
                .enumerate()
                .map(|(i, series)| {
                    let color = palette.series[i % palette.series.len()];
                    json!({
                        "label": series.label,
                        "data": series.data,
                        "backgroundColor": color.solid,
                        "borderColor": color.border,
                        "borderWidth": 2,
                        "borderRadius": { "topLeft": 8, "topRight": 8, "bottomLeft": 0, "bottomRight": 0 },
                        "borderSkipped": false
                    })
                })
                .collect(),
        ),
        ChartKind::Doughnut => {
            // One ring; segment colors come from the categorical palette.
            let series = data.series.first();
            let values: Vec<f64> = series.map(|s| s.data.clone()).unwrap_or_default();
            let colors: Vec<&str> = (0..values.len())
                .map(|i| palette.categorical[i % palette.categorical.len()])
                .collect();
            json!([{
                "label": series.map(|s| s.label.clone()).unwrap_or_default(),
                "data": values,
                "backgroundColor": colors,
                "borderColor": palette.arc_border,
                "borderWidth": 2,
                "hoverBorderWidth": 3
            }])
        }
    }
}

/// Recursive merge: objects merge key-by-key, everything else replaces.
fn merge_patch(base: &mut Value, patch: &Value) {
    match (base, patch) {
        (Value::Object(base_map), Value::Object(patch_map)) => {
            for (key, patch_value) in patch_map {
                match base_map.get_mut(key) {
                    Some(base_value) => merge_patch(base_value, patch_value),
                    None => {
                        base_map.insert(key.clone(), patch_value.clone());
                    }
                }
            }
        }
        (base, patch) => *base = patch.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data(series_count: usize) -> ChartData {
        ChartData::new(
            vec!["A".to_string(), "B".to_string()],
            (0..series_count)
                .map(|i| Series::new(format!("s{}", i), vec![1.0, 2.0]))
                .collect(),
        )
    }

    #[test]
    fn mobile_overrides_tighten_ticks_and_fonts() {
        let options = chart_options(ChartKind::Line, Theme::Dark, DeviceClass::Mobile);
        assert_eq!(options["scales"]["x"]["ticks"]["maxTicksLimit"], 4);
        assert_eq!(options["scales"]["y"]["ticks"]["maxTicksLimit"], 4);
        assert_eq!(options["scales"]["x"]["ticks"]["font"]["size"], 9);
        assert_eq!(options["plugins"]["legend"]["labels"]["font"]["size"], 10);
        // Merging must not clobber sibling keys.
        assert_eq!(
            options["plugins"]["legend"]["labels"]["usePointStyle"],
            true
        );
        assert_eq!(options["scales"]["y"]["ticks"]["compactNumbers"], true);
    }

    #[test]
    fn tablet_overrides_differ_from_mobile() {
        let options = chart_options(ChartKind::Bar, Theme::Dark, DeviceClass::Tablet);
        assert_eq!(options["scales"]["x"]["ticks"]["maxTicksLimit"], 6);
        assert_eq!(options["scales"]["y"]["ticks"]["maxTicksLimit"], 5);
    }

    #[test]
    fn desktop_options_are_unmodified() {
        let options = chart_options(ChartKind::Line, Theme::Dark, DeviceClass::Desktop);
        assert_eq!(options["scales"]["x"]["ticks"]["maxTicksLimit"], 8);
        assert_eq!(options["scales"]["x"]["ticks"]["font"]["size"], 11);
    }

    #[test]
    fn doughnut_options_have_cutout_and_no_scales() {
        let options = chart_options(ChartKind::Doughnut, Theme::Dark, DeviceClass::Mobile);
        assert_eq!(options["cutout"], "70%");
        assert_eq!(options["plugins"]["legend"]["position"], "bottom");
        assert!(options.get("scales").is_none());
        // Mobile legend override still applies.
        assert_eq!(options["plugins"]["legend"]["labels"]["font"]["size"], 10);
    }

    #[test]
    fn theme_drives_text_colors() {
        let dark = chart_options(ChartKind::Line, Theme::Dark, DeviceClass::Desktop);
        let light = chart_options(ChartKind::Line, Theme::Light, DeviceClass::Desktop);
        assert_ne!(
            dark["plugins"]["legend"]["labels"]["color"],
            light["plugins"]["legend"]["labels"]["color"]
        );
    }

    #[test]
    fn line_datasets_cycle_palette_and_carry_gradients() {
        let data = sample_data(8);
        let json = chart_data_json(ChartKind::Line, &data, Theme::Dark);
        let datasets = json["datasets"].as_array().unwrap();
        assert_eq!(datasets.len(), 8);
        // Index 6 wraps back to the first series color.
        assert_eq!(datasets[6]["borderColor"], datasets[0]["borderColor"]);
        assert!(datasets[0]["gradientStops"].is_array());
        assert_eq!(datasets[0]["fill"], true);
    }

    #[test]
    fn doughnut_datasets_use_categorical_colors_per_segment() {
        let data = ChartData::new(
            vec!["Direct".into(), "Organic".into(), "Social".into()],
            vec![Series::new("Traffic", vec![35.0, 28.0, 18.0])],
        );
        let json = chart_data_json(ChartKind::Doughnut, &data, Theme::Dark);
        let colors = json["datasets"][0]["backgroundColor"].as_array().unwrap();
        assert_eq!(colors.len(), 3);
        assert_ne!(colors[0], colors[1]);
    }

    #[test]
    fn payload_serializes_both_halves() {
        let data = sample_data(2);
        let (data_json, options_json) =
            chart_payload(ChartKind::Bar, &data, Theme::Light, DeviceClass::Desktop).unwrap();
        let parsed: Value = serde_json::from_str(&data_json).unwrap();
        assert_eq!(parsed["labels"].as_array().unwrap().len(), 2);
        let parsed: Value = serde_json::from_str(&options_json).unwrap();
        assert_eq!(parsed["responsive"], true);
    }

    #[test]
    fn merge_patch_replaces_scalars_and_merges_objects() {
        let mut base = json!({ "a": { "b": 1, "c": 2 }, "d": 3 });
        merge_patch(&mut base, &json!({ "a": { "b": 9 }, "e": 4 }));
        assert_eq!(base, json!({ "a": { "b": 9, "c": 2 }, "d": 3, "e": 4 }));
    }
}
