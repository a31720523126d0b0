//! Presentation policy: how a swatch looks given its color and whether
//! it is selected.
//!
//! Every knob lives in a [`PickerStyle`] value passed to the picker;
//! there are no global defaults besides the `Default` impls below.
//! Lengths are in layout units (density independent pixels).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::Color;
use crate::error::{Error, Result};

fn unit_interval(field: &'static str, value: f64) -> Result<()> {
    if !(0. ..= 1.).contains(&value) { // also rejects NaN
        return Err(Error::InvalidStyle { field, value,
                                         reason: "must lie in [0, 1]" });
    }
    Ok(())
}

fn length(field: &'static str, value: f32) -> Result<()> {
    if !value.is_finite() || value < 0. {
        return Err(Error::InvalidStyle { field, value: value as f64,
                                         reason: "must be finite and ≥ 0" });
    }
    Ok(())
}

/// Size of the swatches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash,
         Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeTier {
    #[default]
    Small,
    Medium,
    Large,
}

impl SizeTier {
    pub const ALL: [SizeTier; 3] = [SizeTier::Small, SizeTier::Medium,
                                    SizeTier::Large];
}

/// Border widths of a color swatch in its different states.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderWidths {
    /// Border keeping very dark or very light swatches visible.
    pub neutral: f32,
    /// Border of the selected swatch.
    pub selected: f32,
    /// Border of other swatches, `None` meaning no border.
    pub unselected: Option<f32>,
}

impl Default for BorderWidths {
    fn default() -> Self {
        BorderWidths { neutral: 1., selected: 2., unselected: None }
    }
}

/// Tints of the check mark and border drawn over a swatch.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorColors {
    /// Used over dark swatches.
    pub on_dark: Color,
    /// Used over light swatches.
    pub on_light: Color,
}

impl Default for IndicatorColors {
    fn default() -> Self {
        IndicatorColors { on_dark: Color::WHITE, on_light: Color::BLACK }
    }
}

/// Luminance limits driving the border and tint decisions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LuminanceThresholds {
    /// Below this a swatch is "extreme" (near black).
    pub extreme_low: f64,
    /// Above this a swatch is "extreme" (near white).
    pub extreme_high: f64,
    /// Below this a swatch counts as dark.
    pub contrast: f64,
}

impl Default for LuminanceThresholds {
    fn default() -> Self {
        LuminanceThresholds { extreme_low: 0.1, extreme_high: 0.9,
                              contrast: 0.5 }
    }
}

/// Fixed dimensions of the swatches.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metrics {
    pub small: f32,
    pub medium: f32,
    pub large: f32,
    /// Padding around every swatch, whatever its size.
    pub item_spacing: f32,
    /// Padding between the clickable area and the indicator.
    pub inner_padding: f32,
    /// Stripe painted behind a swatch so that translucency shows.
    pub backdrop: Color,
}

impl Default for Metrics {
    fn default() -> Self {
        Metrics {
            small: 36.,
            medium: 48.,
            large: 56.,
            item_spacing: 4.,
            inner_padding: 2.,
            backdrop: Color::from_argb(0xFFBDBDBD),
        }
    }
}

/// The complete presentation policy of a picker.
///
/// Can be read from TOML; missing fields take their default value:
///
/// ```
/// use swatch_picker::{PickerStyle, SizeTier};
/// let style = PickerStyle::from_toml_str(r##"
///     size = "large"
///     [border_widths]
///     selected = 3.0
///     [indicator_colors]
///     on_dark = "#FAFAFA"
/// "##).unwrap();
/// assert_eq!(style.size, SizeTier::Large);
/// assert_eq!(style.border_widths.neutral, 1.);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerStyle {
    pub size: SizeTier,
    pub border_widths: BorderWidths,
    pub indicator_colors: IndicatorColors,
    pub thresholds: LuminanceThresholds,
    pub metrics: Metrics,
}

impl PickerStyle {
    /// Parse a style from a TOML document and [`validate`] it.
    ///
    /// [`validate`]: PickerStyle::validate
    pub fn from_toml_str(s: &str) -> Result<PickerStyle> {
        let style: PickerStyle = toml::from_str(s)?;
        style.validate()?;
        debug!(size = ?style.size, "picker style loaded");
        Ok(style)
    }

    /// Check that thresholds lie in \[0, 1\] with `extreme_low ≤
    /// extreme_high`, and that lengths are finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let t = &self.thresholds;
        unit_interval("thresholds.extreme_low", t.extreme_low)?;
        unit_interval("thresholds.extreme_high", t.extreme_high)?;
        unit_interval("thresholds.contrast", t.contrast)?;
        if t.extreme_low > t.extreme_high {
            return Err(Error::InvalidStyle {
                field: "thresholds.extreme_low", value: t.extreme_low,
                reason: "must not exceed thresholds.extreme_high" });
        }
        let w = &self.border_widths;
        length("border_widths.neutral", w.neutral)?;
        length("border_widths.selected", w.selected)?;
        if let Some(u) = w.unselected {
            length("border_widths.unselected", u)?;
        }
        let m = &self.metrics;
        for (field, v) in [("metrics.small", m.small),
                           ("metrics.medium", m.medium),
                           ("metrics.large", m.large),
                           ("metrics.item_spacing", m.item_spacing),
                           ("metrics.inner_padding", m.inner_padding)] {
            length(field, v)?;
        }
        Ok(())
    }

    /// Whether `c` is so dark or so light that it needs a neutral
    /// border to stand out from the background.
    pub fn is_extreme_luminance(&self, c: &Color) -> bool {
        let l = c.luminance();
        l < self.thresholds.extreme_low || l > self.thresholds.extreme_high
    }

    /// Tint that stays legible on top of `c`.
    pub fn contrast_tint(&self, c: &Color) -> Color {
        if c.luminance() < self.thresholds.contrast {
            self.indicator_colors.on_dark
        } else {
            self.indicator_colors.on_light
        }
    }

    /// Border width of a swatch of color `c`.  Selection takes
    /// precedence over the neutral border of extreme colors.
    pub fn border_width(&self, c: &Color, selected: bool) -> Option<f32> {
        if selected {
            Some(self.border_widths.selected)
        } else if self.is_extreme_luminance(c) {
            Some(self.border_widths.neutral)
        } else {
            self.border_widths.unselected
        }
    }

    pub fn indicator_diameter(&self, tier: SizeTier) -> f32 {
        match tier {
            SizeTier::Small => self.metrics.small,
            SizeTier::Medium => self.metrics.medium,
            SizeTier::Large => self.metrics.large,
        }
    }

    /// Spacing around a swatch.  Deliberately the same for every tier.
    pub fn item_spacing(&self, _tier: SizeTier) -> f32 {
        self.metrics.item_spacing
    }
}
