use crate::palette::{Palette, PaletteItem};

/// A named, ready made palette.
#[derive(Debug)]
pub struct Preset {
    pub(crate) name: &'static str,
    pub(crate) items: Vec<PaletteItem>, // Invariant: no duplicate colors
}

impl Preset {
    pub fn name(&self) -> &'static str { self.name }

    pub fn items(&self) -> &[PaletteItem] { &self.items }

    /// Returns an owned copy that can be edited.
    pub fn palette(&self) -> Palette { Palette::new(self.items.clone()) }
}
