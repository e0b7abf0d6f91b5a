//! Breakpoint names and the ordered minimum-width scale behind them.
//!
//! Breakpoints are a closed, typed enumeration so a misspelled name cannot
//! compile. The string path (`FromStr`) exists for config and storage input
//! and returns a recoverable [`BreakpointError`] instead of panicking.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Named layout breakpoints, ordered from narrowest to widest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Breakpoint {
    /// All breakpoints in ascending threshold order.
    pub const ALL: [Breakpoint; 6] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    /// The CSS-style short name ("xs" .. "xxl").
    pub fn name(self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "xxl",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from breakpoint parsing or scale construction.
///
/// Always recoverable: callers treat an unknown name as "no match" and fall
/// back to defaults rather than aborting.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BreakpointError {
    #[error("unknown breakpoint name: {0:?}")]
    UnknownName(String),
    #[error("breakpoint thresholds must be strictly increasing: {later} ({later_width}px) follows {earlier} ({earlier_width}px)")]
    NonIncreasingScale {
        earlier: Breakpoint,
        earlier_width: u32,
        later: Breakpoint,
        later_width: u32,
    },
}

impl FromStr for Breakpoint {
    type Err = BreakpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Breakpoint::ALL
            .into_iter()
            .find(|bp| bp.name() == s)
            .ok_or_else(|| BreakpointError::UnknownName(s.to_string()))
    }
}

/// Coarse device categorization derived from the resolved breakpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    pub fn name(self) -> &'static str {
        match self {
            DeviceClass::Mobile => "mobile",
            DeviceClass::Tablet => "tablet",
            DeviceClass::Desktop => "desktop",
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered mapping from breakpoint to its minimum viewport width in pixels.
///
/// Immutable once constructed. The default thresholds match the common
/// 576/768/992/1200/1400 grid convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BreakpointScale {
    min_widths: [u32; 6],
}

impl Default for BreakpointScale {
    fn default() -> Self {
        Self {
            min_widths: [0, 576, 768, 992, 1200, 1400],
        }
    }
}

impl BreakpointScale {
    /// Build a custom scale. Thresholds are given in `Breakpoint::ALL` order
    /// and must increase strictly.
    pub fn new(min_widths: [u32; 6]) -> Result<Self, BreakpointError> {
        for pair in Breakpoint::ALL.windows(2) {
            let (earlier, later) = (pair[0], pair[1]);
            if min_widths[later.index()] <= min_widths[earlier.index()] {
                return Err(BreakpointError::NonIncreasingScale {
                    earlier,
                    earlier_width: min_widths[earlier.index()],
                    later,
                    later_width: min_widths[later.index()],
                });
            }
        }
        Ok(Self { min_widths })
    }

    /// Minimum viewport width at which `bp` becomes active.
    pub fn min_width(&self, bp: Breakpoint) -> u32 {
        self.min_widths[bp.index()]
    }

    /// The largest breakpoint whose threshold is at or below `width`.
    ///
    /// Widths below every threshold resolve to the smallest breakpoint;
    /// this never fails.
    pub fn breakpoint_for(&self, width: u32) -> Breakpoint {
        Breakpoint::ALL
            .into_iter()
            .rev()
            .find(|bp| self.min_width(*bp) <= width)
            .unwrap_or(Breakpoint::Xs)
    }

    /// Device class for `width`: mobile below `md`, tablet below `lg`,
    /// desktop otherwise.
    pub fn device_class_for(&self, width: u32) -> DeviceClass {
        if width < self.min_width(Breakpoint::Md) {
            DeviceClass::Mobile
        } else if width < self.min_width(Breakpoint::Lg) {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_parsing() {
        for bp in Breakpoint::ALL {
            assert_eq!(bp.name().parse::<Breakpoint>().unwrap(), bp);
        }
    }

    #[test]
    fn unknown_name_is_a_defined_error() {
        let err = "xxxl".parse::<Breakpoint>().unwrap_err();
        assert_eq!(err, BreakpointError::UnknownName("xxxl".to_string()));
    }

    #[test]
    fn default_scale_matches_convention() {
        let scale = BreakpointScale::default();
        assert_eq!(scale.min_width(Breakpoint::Xs), 0);
        assert_eq!(scale.min_width(Breakpoint::Sm), 576);
        assert_eq!(scale.min_width(Breakpoint::Md), 768);
        assert_eq!(scale.min_width(Breakpoint::Lg), 992);
        assert_eq!(scale.min_width(Breakpoint::Xl), 1200);
        assert_eq!(scale.min_width(Breakpoint::Xxl), 1400);
    }

    #[test]
    fn breakpoint_resolution_picks_largest_qualifying() {
        let scale = BreakpointScale::default();
        assert_eq!(scale.breakpoint_for(0), Breakpoint::Xs);
        assert_eq!(scale.breakpoint_for(575), Breakpoint::Xs);
        assert_eq!(scale.breakpoint_for(576), Breakpoint::Sm);
        assert_eq!(scale.breakpoint_for(991), Breakpoint::Md);
        assert_eq!(scale.breakpoint_for(992), Breakpoint::Lg);
        assert_eq!(scale.breakpoint_for(1399), Breakpoint::Xl);
        assert_eq!(scale.breakpoint_for(1400), Breakpoint::Xxl);
        assert_eq!(scale.breakpoint_for(10_000), Breakpoint::Xxl);
    }

    #[test]
    fn breakpoint_agrees_with_direct_recomputation_for_all_widths() {
        let scale = BreakpointScale::default();
        for width in 0..2000u32 {
            let resolved = scale.breakpoint_for(width);
            // The unique breakpoint with threshold <= width and no larger
            // qualifying breakpoint above it.
            assert!(scale.min_width(resolved) <= width);
            for bp in Breakpoint::ALL {
                if bp > resolved {
                    assert!(scale.min_width(bp) > width);
                }
            }
        }
    }

    #[test]
    fn device_class_is_monotonic_at_thresholds() {
        let scale = BreakpointScale::default();
        assert_eq!(scale.device_class_for(0), DeviceClass::Mobile);
        assert_eq!(scale.device_class_for(767), DeviceClass::Mobile);
        assert_eq!(scale.device_class_for(768), DeviceClass::Tablet);
        assert_eq!(scale.device_class_for(991), DeviceClass::Tablet);
        assert_eq!(scale.device_class_for(992), DeviceClass::Desktop);
        assert_eq!(scale.device_class_for(2560), DeviceClass::Desktop);
    }

    #[test]
    fn non_increasing_scale_is_rejected() {
        let err = BreakpointScale::new([0, 576, 576, 992, 1200, 1400]).unwrap_err();
        assert_eq!(
            err,
            BreakpointError::NonIncreasingScale {
                earlier: Breakpoint::Sm,
                earlier_width: 576,
                later: Breakpoint::Md,
                later_width: 576,
            }
        );
    }

    #[test]
    fn custom_scale_shifts_resolution() {
        let scale = BreakpointScale::new([0, 400, 700, 1000, 1300, 1600]).unwrap();
        assert_eq!(scale.breakpoint_for(500), Breakpoint::Sm);
        assert_eq!(scale.device_class_for(800), DeviceClass::Tablet);
        assert_eq!(scale.device_class_for(1000), DeviceClass::Desktop);
    }
}
