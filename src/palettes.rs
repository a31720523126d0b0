// Material Design 400 tones, as shown by the picker catalog.

use lazy_static::lazy_static;
pub(crate) mod ty;
use ty::*;

use crate::color::Color;
use crate::palette::PaletteItem;

const MATERIAL_400_ARGB: [u32; 16] = [
    0xFFEF5350, // red
    0xFFEC407A, // pink
    0xFFAB47BC, // purple
    0xFF7E57C2, // deep purple
    0xFF5C6BC0, // indigo
    0xFF42A5F5, // blue
    0xFF29B6F6, // light blue
    0xFF26C6DA, // cyan
    0xFF26A69A, // teal
    0xFF66BB6A, // green
    0xFF9CCC65, // light green
    0xFFD4E157, // lime
    0xFFFFEE58, // yellow
    0xFFFFCA28, // amber
    0xFFFFA726, // orange
    0xFFFF7043, // deep orange
];

fn items(argb: &[u32]) -> impl Iterator<Item = PaletteItem> + '_ {
    argb.iter().map(|&c| PaletteItem::from(Color::from_argb(c)))
}

lazy_static! {
    pub static ref MATERIAL_400: Preset = Preset {
        name: "material-400",
        items: items(&MATERIAL_400_ARGB).collect(),
    };

    /// "No color", black, white, off-white, a translucent red, then
    /// [`struct@MATERIAL_400`].
    pub static ref CATALOG: Preset = Preset {
        name: "catalog",
        items: [PaletteItem::no_color()].into_iter()
            .chain(items(&[0xFF000000, 0xFFFFFFFF, 0xFFFAFAFA, 0x80FF4444]))
            .chain(items(&MATERIAL_400_ARGB))
            .collect(),
    };
}

/// Iterate over all built-in palettes.
pub fn presets() -> impl Iterator<Item = &'static Preset> {
    [&*MATERIAL_400, &*CATALOG].into_iter()
}
