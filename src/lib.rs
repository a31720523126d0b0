//! Selection and presentation model for swatch color pickers.
//!
//! - [`Color`], [`PaletteItem`], [`Palette`] and [`KeyedPalette`]
//! - [`is_selected`], [`click`] and their keyed counterparts
//! - [`PickerStyle`] (the presentation policy) and [`ColorPicker`]
//!
//! The crate does not draw anything.  A rendering layer hands it the
//! palette and the current selection, paints the returned
//! [`SwatchDescriptor`]s and routes clicks back through
//! [`ColorPicker::click`] to learn which [`SelectionChanged`] event to
//! report to the host.  Ready made palettes are available as
//! [`struct@MATERIAL_400`] and [`struct@CATALOG`].
//!
//! ```
//! use swatch_picker::{Color, ColorPicker, Palette, PickerStyle};
//! let red = Color::from_argb(0xFFEF5350);
//! let palette = Palette::from_colors([None, Some(Color::WHITE), Some(red)]);
//! let picker = ColorPicker::new(PickerStyle::default());
//! let swatches = picker.describe(&palette, Some(red));
//! assert!(swatches[2].is_selected);
//! ```

use rgb::{RGBA, RGB8, RGB16, RGBA8, RGBA16};

mod color;
mod error;
mod palette;
mod palettes;
mod picker;
mod policy;
mod selection;

pub use color::Color;
pub use error::{Error, Result};
pub use palette::{normalize, KeyedPalette, Palette, PaletteItem};
pub use palettes::{presets, ty::Preset, CATALOG, MATERIAL_400};
pub use picker::{Backdrop, CollectionInfo, ColorPicker, Indicator, Layout,
                 SwatchDescriptor, SwatchKey};
pub use policy::{BorderWidths, IndicatorColors, LuminanceThresholds, Metrics,
                 PickerStyle, SizeTier};
pub use selection::{click, click_key, is_key_selected, is_selected,
                    SelectionChanged};

/// Specifies the methods a RGB color encoding must provide to enter
/// the picker.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Convert the color to a validated [`Color`].
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use swatch_picker::RGBColor;
    /// let c = RGB8::new(255, 255, 255).to_color().unwrap();
    /// assert!(c.luminance() > 0.999);
    /// ```
    fn to_color(&self) -> Result<Color> {
        let RGBA { r, g, b, a } = self.to_rgba();
        Color::new(r / 255., g / 255., b / 255., a / 255.)
    }
}

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }
}

impl RGBColor for RGB16 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64 / 257., g: self.g as f64 / 257.,
              b: self.b as f64 / 257., a: 255. }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64,
              a: self.a as f64 }
    }
}

impl RGBColor for RGBA16 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64 / 257., g: self.g as f64 / 257.,
              b: self.b as f64 / 257., a: self.a as f64 / 257. }
    }
}
