//! Light/dark theme and the chart color palettes.
//!
//! The dark palette carries the dashboard's glassmorphism colors; the light
//! palette keeps the same series hues and swaps text, grid, and tooltip
//! colors to dark-on-light equivalents.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// UI theme. Persisted as its lowercase name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown theme name: {0:?}")]
pub struct ThemeParseError(pub String);

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

/// One series color in its solid/border/translucent/gradient variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorGroup {
    pub solid: &'static str,
    pub border: &'static str,
    pub light: &'static str,
    pub gradient: [&'static str; 2],
}

/// Everything chart composition needs to color a chart for one theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartPalette {
    /// Series colors cycled by dataset index: primary, secondary, success,
    /// warning, danger, info.
    pub series: [ColorGroup; 6],
    /// Categorical colors for doughnut segments.
    pub categorical: [&'static str; 10],
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub grid_line: &'static str,
    pub tooltip_background: &'static str,
    pub tooltip_border: &'static str,
    pub arc_border: &'static str,
}

const SERIES: [ColorGroup; 6] = [
    ColorGroup {
        solid: "rgba(99, 102, 241, 0.8)",
        border: "rgba(99, 102, 241, 1)",
        light: "rgba(99, 102, 241, 0.3)",
        gradient: ["rgba(99, 102, 241, 0.8)", "rgba(168, 85, 247, 0.4)"],
    },
    ColorGroup {
        solid: "rgba(59, 130, 246, 0.8)",
        border: "rgba(59, 130, 246, 1)",
        light: "rgba(59, 130, 246, 0.3)",
        gradient: ["rgba(59, 130, 246, 0.8)", "rgba(147, 51, 234, 0.4)"],
    },
    ColorGroup {
        solid: "rgba(34, 197, 94, 0.8)",
        border: "rgba(34, 197, 94, 1)",
        light: "rgba(34, 197, 94, 0.3)",
        gradient: ["rgba(34, 197, 94, 0.8)", "rgba(16, 185, 129, 0.4)"],
    },
    ColorGroup {
        solid: "rgba(251, 191, 36, 0.8)",
        border: "rgba(251, 191, 36, 1)",
        light: "rgba(251, 191, 36, 0.3)",
        gradient: ["rgba(251, 191, 36, 0.8)", "rgba(245, 158, 11, 0.4)"],
    },
    ColorGroup {
        solid: "rgba(239, 68, 68, 0.8)",
        border: "rgba(239, 68, 68, 1)",
        light: "rgba(239, 68, 68, 0.3)",
        gradient: ["rgba(239, 68, 68, 0.8)", "rgba(220, 38, 127, 0.4)"],
    },
    ColorGroup {
        solid: "rgba(6, 182, 212, 0.8)",
        border: "rgba(6, 182, 212, 1)",
        light: "rgba(6, 182, 212, 0.3)",
        gradient: ["rgba(6, 182, 212, 0.8)", "rgba(14, 165, 233, 0.4)"],
    },
];

const CATEGORICAL: [&str; 10] = [
    "rgba(99, 102, 241, 0.8)",
    "rgba(59, 130, 246, 0.8)",
    "rgba(34, 197, 94, 0.8)",
    "rgba(251, 191, 36, 0.8)",
    "rgba(239, 68, 68, 0.8)",
    "rgba(6, 182, 212, 0.8)",
    "rgba(168, 85, 247, 0.8)",
    "rgba(236, 72, 153, 0.8)",
    "rgba(20, 184, 166, 0.8)",
    "rgba(132, 204, 22, 0.8)",
];

const DARK_PALETTE: ChartPalette = ChartPalette {
    series: SERIES,
    categorical: CATEGORICAL,
    text_primary: "rgba(255, 255, 255, 0.9)",
    text_secondary: "rgba(255, 255, 255, 0.7)",
    text_muted: "rgba(255, 255, 255, 0.5)",
    grid_line: "rgba(255, 255, 255, 0.1)",
    tooltip_background: "rgba(17, 24, 39, 0.95)",
    tooltip_border: "rgba(255, 255, 255, 0.1)",
    arc_border: "rgba(255, 255, 255, 0.1)",
};

const LIGHT_PALETTE: ChartPalette = ChartPalette {
    series: SERIES,
    categorical: CATEGORICAL,
    text_primary: "rgba(15, 23, 42, 0.9)",
    text_secondary: "rgba(15, 23, 42, 0.7)",
    text_muted: "rgba(15, 23, 42, 0.5)",
    grid_line: "rgba(15, 23, 42, 0.08)",
    tooltip_background: "rgba(255, 255, 255, 0.95)",
    tooltip_border: "rgba(15, 23, 42, 0.1)",
    arc_border: "rgba(255, 255, 255, 0.6)",
};

impl Theme {
    pub fn palette(self) -> &'static ChartPalette {
        match self {
            Theme::Light => &LIGHT_PALETTE,
            Theme::Dark => &DARK_PALETTE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn unknown_theme_is_a_defined_error() {
        let err = "sepia".parse::<Theme>().unwrap_err();
        assert_eq!(err, ThemeParseError("sepia".to_string()));
    }

    #[test]
    fn toggling_alternates() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn palettes_share_series_hues_but_differ_in_text() {
        let light = Theme::Light.palette();
        let dark = Theme::Dark.palette();
        assert_eq!(light.series, dark.series);
        assert_eq!(light.categorical, dark.categorical);
        assert_ne!(light.text_primary, dark.text_primary);
        assert_ne!(light.grid_line, dark.grid_line);
    }
}
