//! The picker: turns a palette and a selection into swatch descriptors
//! for the rendering layer, and clicks into selection events.

use crate::color::Color;
use crate::palette::{KeyedPalette, Palette, PaletteItem};
use crate::policy::PickerStyle;
use crate::selection::{self, SelectionChanged};

/// Stripe painted under the left half of a color swatch so that
/// translucent colors remain recognizable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Backdrop {
    pub width: f32,
    pub color: Color,
}

/// What to draw inside a swatch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Indicator {
    /// A color fill.  `contrast_tint` is used for the border and, when
    /// selected, for the check mark.
    Color {
        contrast_tint: Color,
        border_width: Option<f32>,
        backdrop: Backdrop,
    },
    /// The "no color" swatch: a "color off" icon on a plain background,
    /// plus a check mark when selected.
    NoColor {
        background: Color,
        icon_tint: Color,
        check_tint: Option<Color>,
    },
}

/// Identity of a swatch for keyed (lazy) lists.
///
/// Built from the exact value palettes are de-duplicated on, so keys
/// are unique within a normalized palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwatchKey {
    NoColor,
    Color([u64; 4]),
}

impl From<Option<Color>> for SwatchKey {
    fn from(c: Option<Color>) -> Self {
        c.map_or(SwatchKey::NoColor, |c| SwatchKey::Color(c.to_bits()))
    }
}

/// Everything the rendering layer needs to paint one swatch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwatchDescriptor {
    /// Position in the (normalized) palette.
    pub index: usize,
    pub color: Option<Color>,
    /// Disabled swatches are painted but do not react to clicks.
    pub enabled: bool,
    pub is_selected: bool,
    pub key: SwatchKey,
    pub indicator_diameter: f32,
    pub item_spacing: f32,
    pub inner_padding: f32,
    pub indicator: Indicator,
}

/// How the rendering layer arranges the swatches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Wrapping rows.
    Flow { max_items_in_each_row: usize, max_lines: usize },
    /// A single (scrollable) row.
    Row,
}

impl Default for Layout {
    fn default() -> Self {
        Layout::Flow { max_items_in_each_row: usize::MAX,
                       max_lines: usize::MAX }
    }
}

/// Accessibility metadata describing the swatch collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollectionInfo {
    pub rows: usize,
    pub columns: usize,
}

const NO_COLOR_ICON_ALPHA: f64 = 0.2;

/// A color picker with a fixed [`PickerStyle`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorPicker {
    style: PickerStyle,
}

impl ColorPicker {
    pub fn new(style: PickerStyle) -> Self { ColorPicker { style } }

    pub fn style(&self) -> &PickerStyle { &self.style }

    /// Describe the swatches of `palette`, duplicates removed, in
    /// palette order.
    pub fn describe(&self, palette: &Palette, selection: Option<Color>)
                    -> Vec<SwatchDescriptor> {
        palette.normalized().iter().enumerate()
            .map(|(i, item)| {
                let selected = selection::is_selected(item.color, selection);
                self.describe_item(i, item, selected)
            })
            .collect()
    }

    /// Describe the swatches of a keyed palette, in insertion order.
    pub fn describe_keyed<'a, K: PartialEq>(
        &self, palette: &'a KeyedPalette<K>, selection: &K,
    ) -> Vec<(&'a K, SwatchDescriptor)> {
        palette.normalized().iter().enumerate()
            .map(|(i, (key, item))| {
                let selected = selection::is_key_selected(key, selection);
                (key, self.describe_item(i, item, selected))
            })
            .collect()
    }

    /// Describe a single swatch.  Only depends on its arguments, so
    /// swatches can be described in any order.
    pub fn describe_item(&self, index: usize, item: &PaletteItem,
                         selected: bool) -> SwatchDescriptor {
        let style = &self.style;
        let diameter = style.indicator_diameter(style.size);
        let indicator = match item.color {
            Some(c) => Indicator::Color {
                contrast_tint: style.contrast_tint(&c),
                border_width: style.border_width(&c, selected),
                backdrop: Backdrop { width: diameter / 2.,
                                     color: style.metrics.backdrop },
            },
            None => Indicator::NoColor {
                background: Color::WHITE,
                icon_tint: if selected { no_color_icon_selected() }
                           else { Color::BLACK },
                check_tint: selected.then_some(Color::BLACK),
            },
        };
        SwatchDescriptor {
            index,
            color: item.color,
            enabled: item.enabled,
            is_selected: selected,
            key: SwatchKey::from(item.color),
            indicator_diameter: diameter,
            item_spacing: style.item_spacing(style.size),
            inner_padding: style.metrics.inner_padding,
            indicator,
        }
    }

    /// See [`selection::click`].
    pub fn click(&self, item: &PaletteItem)
                 -> Option<SelectionChanged<Option<Color>>> {
        selection::click(item)
    }

    /// See [`selection::click_key`].
    pub fn click_key<K>(&self, key: &K, item: &PaletteItem)
                        -> Option<SelectionChanged<K>>
    where K: Clone + std::fmt::Debug {
        selection::click_key(key, item)
    }

    /// Rows and columns announced to accessibility services for `len`
    /// swatches.
    pub fn collection_info(len: usize, layout: Layout) -> CollectionInfo {
        match layout {
            Layout::Flow { max_items_in_each_row, max_lines } =>
                CollectionInfo { rows: max_lines,
                                 columns: len.min(max_items_in_each_row) },
            Layout::Row => CollectionInfo { rows: 1, columns: len },
        }
    }
}

fn no_color_icon_selected() -> Color {
    Color::BLACK.with_alpha(NO_COLOR_ICON_ALPHA).unwrap_or(Color::BLACK)
}
