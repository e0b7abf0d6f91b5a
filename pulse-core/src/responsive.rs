//! Viewport snapshots and per-breakpoint value resolution.
//!
//! [`Responsive`] is the single source of truth for "what breakpoint and
//! device class are we at, and what value should a given layout parameter
//! take at that size". It is a pure function of the viewport width and the
//! breakpoint scale: feed it a new [`ViewportSize`] on every resize
//! notification and every query recomputes from that snapshot alone.
//!
//! The browser half (querying `window.innerWidth`, subscribing to resize
//! events) lives in `pulse-chart-ui::viewport`; here the environment is an
//! injected [`ViewportSource`] so tests can simulate resizes without a
//! display.

use crate::breakpoint::{Breakpoint, BreakpointScale, DeviceClass};
use std::fmt;

/// Last-observed viewport dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Capability to query the current viewport size.
///
/// The dashboard injects a browser-backed implementation; tests inject
/// [`FixedViewport`].
pub trait ViewportSource {
    fn size(&self) -> ViewportSize;
}

/// A viewport source that always reports the same size.
#[derive(Clone, Copy, Debug)]
pub struct FixedViewport(pub ViewportSize);

impl ViewportSource for FixedViewport {
    fn size(&self) -> ViewportSize {
        self.0
    }
}

/// Sparse per-breakpoint value map: "use this value from this breakpoint
/// upward".
///
/// Entries are kept in ascending breakpoint order; setting the same
/// breakpoint twice replaces the earlier value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponsiveValues<T> {
    entries: Vec<(Breakpoint, T)>,
}

impl<T> Default for ResponsiveValues<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ResponsiveValues<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, bp: Breakpoint, value: T) -> Self {
        self.set(bp, value);
        self
    }

    pub fn set(&mut self, bp: Breakpoint, value: T) {
        match self.entries.binary_search_by_key(&bp, |(b, _)| *b) {
            Ok(i) => self.entries[i].1 = value,
            Err(i) => self.entries.insert(i, (bp, value)),
        }
    }

    pub fn get(&self, bp: Breakpoint) -> Option<&T> {
        self.entries
            .binary_search_by_key(&bp, |(b, _)| *b)
            .ok()
            .map(|i| &self.entries[i].1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending breakpoint order.
    fn iter(&self) -> impl DoubleEndedIterator<Item = &(Breakpoint, T)> {
        self.entries.iter()
    }
}

impl<T, const N: usize> From<[(Breakpoint, T); N]> for ResponsiveValues<T> {
    fn from(pairs: [(Breakpoint, T); N]) -> Self {
        let mut values = Self::new();
        for (bp, v) in pairs {
            values.set(bp, v);
        }
        values
    }
}

/// Sidebar width for the current device class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarWidth {
    /// Full viewport width (mobile overlay).
    Full,
    Px(u32),
}

impl fmt::Display for SidebarWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SidebarWidth::Full => f.write_str("100%"),
            SidebarWidth::Px(px) => write!(f, "{}px", px),
        }
    }
}

/// Typography variants with per-breakpoint sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontVariant {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Body,
    Small,
}

/// Spacing steps with per-breakpoint sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpacingSize {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

/// Snapshot of the responsive state at one viewport size.
///
/// Cheap to copy; the UI layer rebuilds one per render from the viewport
/// signal, so queries between two resize notifications always agree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Responsive {
    scale: BreakpointScale,
    viewport: ViewportSize,
}

impl Responsive {
    /// Snapshot with the default breakpoint scale.
    pub fn new(viewport: ViewportSize) -> Self {
        Self {
            scale: BreakpointScale::default(),
            viewport,
        }
    }

    pub fn with_scale(scale: BreakpointScale, viewport: ViewportSize) -> Self {
        Self { scale, viewport }
    }

    /// Snapshot taken from an injected viewport source.
    pub fn from_source(source: &dyn ViewportSource) -> Self {
        Self::new(source.size())
    }

    /// Apply a resize notification.
    pub fn set_viewport(&mut self, viewport: ViewportSize) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    pub fn scale(&self) -> &BreakpointScale {
        &self.scale
    }

    /// The largest breakpoint whose threshold is at or below the current
    /// width. Never fails; widths below every threshold resolve to `xs`.
    pub fn breakpoint(&self) -> Breakpoint {
        self.scale.breakpoint_for(self.viewport.width)
    }

    pub fn device_class(&self) -> DeviceClass {
        self.scale.device_class_for(self.viewport.width)
    }

    pub fn is_mobile(&self) -> bool {
        self.device_class() == DeviceClass::Mobile
    }

    pub fn is_tablet(&self) -> bool {
        self.device_class() == DeviceClass::Tablet
    }

    pub fn is_desktop(&self) -> bool {
        self.device_class() == DeviceClass::Desktop
    }

    /// Whether the viewport is at least as wide as `bp`'s threshold.
    pub fn is_at_least(&self, bp: Breakpoint) -> bool {
        self.viewport.width >= self.scale.min_width(bp)
    }

    /// Whether the viewport is at or below `bp`'s threshold (inclusive).
    pub fn is_at_most(&self, bp: Breakpoint) -> bool {
        self.viewport.width <= self.scale.min_width(bp)
    }

    /// Whether the viewport width lies in `[min.threshold, max.threshold]`,
    /// inclusive on both ends.
    pub fn is_between(&self, min: Breakpoint, max: Breakpoint) -> bool {
        self.is_at_least(min) && self.is_at_most(max)
    }

    /// Pick the value for the current breakpoint from a sparse map.
    ///
    /// Scans from the largest threshold down and returns the first entry
    /// whose threshold is at or below the current width. When no entry
    /// qualifies (the width sits below every key present), the
    /// smallest-threshold entry wins regardless of its threshold, so a map
    /// holding only `lg` yields its value at every width. Only an empty map
    /// yields `None`.
    pub fn resolve<'a, T>(&self, values: &'a ResponsiveValues<T>) -> Option<&'a T> {
        let width = self.viewport.width;
        values
            .iter()
            .rev()
            .find(|(bp, _)| self.scale.min_width(*bp) <= width)
            .or_else(|| values.iter().next())
            .map(|(_, v)| v)
    }

    /// Grid column count: 1 on mobile, 2 on tablet, 3 at `lg`, 4 above.
    pub fn grid_columns(&self) -> u32 {
        match self.device_class() {
            DeviceClass::Mobile => 1,
            DeviceClass::Tablet => 2,
            DeviceClass::Desktop => {
                if self.breakpoint() == Breakpoint::Lg {
                    3
                } else {
                    4
                }
            }
        }
    }

    /// Chart canvas height in pixels for the current device class.
    pub fn chart_height(&self) -> u32 {
        match self.device_class() {
            DeviceClass::Mobile => 250,
            DeviceClass::Tablet => 300,
            DeviceClass::Desktop => 350,
        }
    }

    /// Sidebar width: full-width overlay on mobile, fixed otherwise.
    pub fn sidebar_width(&self) -> SidebarWidth {
        match self.device_class() {
            DeviceClass::Mobile => SidebarWidth::Full,
            DeviceClass::Tablet => SidebarWidth::Px(250),
            DeviceClass::Desktop => SidebarWidth::Px(280),
        }
    }

    /// Whether the sidebar starts collapsed at this size.
    pub fn collapse_sidebar_by_default(&self) -> bool {
        !self.is_desktop()
    }

    /// Font size (CSS rem string) for a typography variant.
    pub fn font_size(&self, variant: FontVariant) -> &'static str {
        // Per-breakpoint sizes; xxl reuses the xl entry via the resolve
        // scan. Values in ascending breakpoint order.
        let sizes: [&'static str; 5] = match variant {
            FontVariant::H1 => ["1.75rem", "2rem", "2.25rem", "2.5rem", "2.75rem"],
            FontVariant::H2 => ["1.5rem", "1.75rem", "2rem", "2.25rem", "2.5rem"],
            FontVariant::H3 => ["1.25rem", "1.5rem", "1.75rem", "2rem", "2.25rem"],
            FontVariant::H4 => ["1.125rem", "1.25rem", "1.5rem", "1.75rem", "2rem"],
            FontVariant::H5 => ["1rem", "1.125rem", "1.25rem", "1.5rem", "1.75rem"],
            FontVariant::H6 => ["0.875rem", "1rem", "1.125rem", "1.25rem", "1.5rem"],
            FontVariant::Body => ["0.875rem", "1rem", "1rem", "1rem", "1.125rem"],
            FontVariant::Small => ["0.75rem", "0.875rem", "0.875rem", "0.875rem", "1rem"],
        };
        self.pick_scaled(sizes)
    }

    /// Spacing value (CSS rem string) for a spacing step.
    pub fn spacing(&self, size: SpacingSize) -> &'static str {
        let steps: [&'static str; 5] = match size {
            SpacingSize::Xs => ["0.25rem", "0.5rem", "0.5rem", "0.75rem", "1rem"],
            SpacingSize::Sm => ["0.5rem", "0.75rem", "1rem", "1.25rem", "1.5rem"],
            SpacingSize::Md => ["1rem", "1.25rem", "1.5rem", "2rem", "2.5rem"],
            SpacingSize::Lg => ["1.5rem", "2rem", "2.5rem", "3rem", "3.5rem"],
            SpacingSize::Xl => ["2rem", "2.5rem", "3rem", "4rem", "5rem"],
        };
        self.pick_scaled(steps)
    }

    fn pick_scaled(&self, by_breakpoint: [&'static str; 5]) -> &'static str {
        let values = ResponsiveValues::from([
            (Breakpoint::Xs, by_breakpoint[0]),
            (Breakpoint::Sm, by_breakpoint[1]),
            (Breakpoint::Md, by_breakpoint[2]),
            (Breakpoint::Lg, by_breakpoint[3]),
            (Breakpoint::Xl, by_breakpoint[4]),
        ]);
        self.resolve(&values).copied().unwrap_or(by_breakpoint[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_width(width: u32) -> Responsive {
        Responsive::new(ViewportSize::new(width, 800))
    }

    #[test]
    fn viewport_is_returned_unchanged() {
        let r = Responsive::new(ViewportSize::new(1024, 768));
        assert_eq!(r.viewport(), ViewportSize::new(1024, 768));
    }

    #[test]
    fn from_source_uses_injected_capability() {
        let source = FixedViewport(ViewportSize::new(400, 700));
        let r = Responsive::from_source(&source);
        assert_eq!(r.viewport().width, 400);
        assert!(r.is_mobile());
    }

    #[test]
    fn at_least_at_most_between_are_inclusive() {
        let r = at_width(992);
        assert!(r.is_at_least(Breakpoint::Lg));
        assert!(r.is_at_most(Breakpoint::Lg));
        assert!(r.is_between(Breakpoint::Sm, Breakpoint::Lg));

        // Exactly at the lower bound.
        assert!(at_width(576).is_between(Breakpoint::Sm, Breakpoint::Lg));
        // One below the lower bound.
        assert!(!at_width(575).is_between(Breakpoint::Sm, Breakpoint::Lg));
        // One above the upper bound.
        assert!(!at_width(993).is_between(Breakpoint::Sm, Breakpoint::Lg));
    }

    #[test]
    fn resolve_prefers_largest_qualifying_entry() {
        let values = ResponsiveValues::from([(Breakpoint::Xs, "A"), (Breakpoint::Lg, "B")]);
        assert_eq!(at_width(500).resolve(&values), Some(&"A"));
        assert_eq!(at_width(1000).resolve(&values), Some(&"B"));
    }

    #[test]
    fn resolve_falls_back_to_smallest_present_entry() {
        // A map containing only lg must return its value at any width,
        // including widths far below lg's threshold.
        let values = ResponsiveValues::new().with(Breakpoint::Lg, "X");
        assert_eq!(at_width(0).resolve(&values), Some(&"X"));
        assert_eq!(at_width(991).resolve(&values), Some(&"X"));
        assert_eq!(at_width(10_000).resolve(&values), Some(&"X"));
    }

    #[test]
    fn resolve_of_empty_map_is_none() {
        let values: ResponsiveValues<u32> = ResponsiveValues::new();
        assert_eq!(at_width(800).resolve(&values), None);
    }

    #[test]
    fn resolve_replaces_duplicate_keys() {
        let values = ResponsiveValues::new()
            .with(Breakpoint::Md, 1)
            .with(Breakpoint::Md, 2);
        assert_eq!(at_width(800).resolve(&values), Some(&2));
    }

    #[test]
    fn grid_columns_follow_device_class() {
        assert_eq!(at_width(400).grid_columns(), 1);
        assert_eq!(at_width(800).grid_columns(), 2);
        assert_eq!(at_width(1000).grid_columns(), 3);
        assert_eq!(at_width(1300).grid_columns(), 4);
        assert_eq!(at_width(1500).grid_columns(), 4);
    }

    #[test]
    fn chart_height_follows_device_class() {
        assert_eq!(at_width(400).chart_height(), 250);
        assert_eq!(at_width(800).chart_height(), 300);
        assert_eq!(at_width(1200).chart_height(), 350);
    }

    #[test]
    fn sidebar_width_and_collapse_defaults() {
        assert_eq!(at_width(400).sidebar_width(), SidebarWidth::Full);
        assert_eq!(at_width(400).sidebar_width().to_string(), "100%");
        assert_eq!(at_width(800).sidebar_width(), SidebarWidth::Px(250));
        assert_eq!(at_width(1200).sidebar_width().to_string(), "280px");

        assert!(at_width(400).collapse_sidebar_by_default());
        assert!(at_width(800).collapse_sidebar_by_default());
        assert!(!at_width(1200).collapse_sidebar_by_default());
    }

    #[test]
    fn font_size_and_spacing_scale_with_width() {
        assert_eq!(at_width(400).font_size(FontVariant::H1), "1.75rem");
        assert_eq!(at_width(1000).font_size(FontVariant::H1), "2.5rem");
        // xxl reuses the xl entry.
        assert_eq!(at_width(1500).font_size(FontVariant::H1), "2.75rem");

        assert_eq!(at_width(400).spacing(SpacingSize::Md), "1rem");
        assert_eq!(at_width(1500).spacing(SpacingSize::Md), "2.5rem");
    }

    #[test]
    fn queries_are_idempotent_between_notifications() {
        let r = at_width(1024);
        assert_eq!(r.breakpoint(), r.breakpoint());
        assert_eq!(r.device_class(), r.device_class());
        assert_eq!(r.grid_columns(), r.grid_columns());
        assert_eq!(r.chart_height(), r.chart_height());
    }

    #[test]
    fn resize_scenario_desktop_to_mobile() {
        let mut r = Responsive::new(ViewportSize::new(1024, 768));
        assert_eq!(r.device_class(), DeviceClass::Desktop);
        assert_eq!(r.grid_columns(), 3);
        assert_eq!(r.chart_height(), 350);
        assert!(!r.collapse_sidebar_by_default());

        r.set_viewport(ViewportSize::new(400, 800));
        assert_eq!(r.device_class(), DeviceClass::Mobile);
        assert_eq!(r.grid_columns(), 1);
        assert_eq!(r.chart_height(), 250);
        assert!(r.collapse_sidebar_by_default());
    }

    #[test]
    fn breakpoint_and_device_class_never_disagree_with_recomputation() {
        for width in [0u32, 100, 575, 576, 767, 768, 991, 992, 1199, 1200, 1400, 3000] {
            let r = at_width(width);
            assert_eq!(r.breakpoint(), r.scale().breakpoint_for(width));
            assert_eq!(r.device_class(), r.scale().device_class_for(width));
        }
    }
}
