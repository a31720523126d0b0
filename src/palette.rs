//! Palettes of selectable swatches.

use std::collections::HashSet;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::color::Color;

fn enabled_by_default() -> bool { true }

/// One selectable entry of a palette.
///
/// `color == None` is the "no color" swatch: a legal entry whose
/// selection means that nothing is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaletteItem {
    pub color: Option<Color>,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

impl PaletteItem {
    pub fn new(color: impl Into<Option<Color>>, enabled: bool) -> Self {
        PaletteItem { color: color.into(), enabled }
    }

    /// The enabled "no color" swatch.
    pub const fn no_color() -> Self {
        PaletteItem { color: None, enabled: true }
    }

    /// The same item, but not clickable.
    pub fn disabled(self) -> Self {
        PaletteItem { enabled: false, ..self }
    }
}

impl From<Color> for PaletteItem {
    fn from(c: Color) -> Self { PaletteItem::new(c, true) }
}

impl From<Option<Color>> for PaletteItem {
    fn from(c: Option<Color>) -> Self { PaletteItem::new(c, true) }
}

/// Remove the items whose color was already seen, keeping the first
/// occurrence and the original order.  The `enabled` flag plays no role
/// in the comparison.
pub fn normalize<I>(items: I) -> Vec<PaletteItem>
where I: IntoIterator<Item = PaletteItem> {
    let mut seen = HashSet::new();
    items.into_iter()
        .filter(|item| {
            let first = seen.insert(item.color);
            if !first {
                trace!(color = ?item.color, "dropping duplicate swatch");
            }
            first
        })
        .collect()
}

/// An ordered list of swatches.
///
/// The list is kept as given; [`Palette::normalized`] (or the picker,
/// which calls it) removes duplicate colors before presentation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    items: Vec<PaletteItem>,
}

impl Palette {
    pub fn new(items: Vec<PaletteItem>) -> Self { Palette { items } }

    /// Palette of enabled swatches, `None` being the "no color" swatch.
    pub fn from_colors<I>(colors: I) -> Self
    where I: IntoIterator<Item = Option<Color>> {
        colors.into_iter().map(PaletteItem::from).collect()
    }

    /// Returns the palette without duplicate colors.
    pub fn normalized(&self) -> Palette {
        Palette { items: normalize(self.items.iter().copied()) }
    }

    pub fn len(&self) -> usize { self.items.len() }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    pub fn items(&self) -> &[PaletteItem] { &self.items }

    pub fn iter(&self) -> std::slice::Iter<'_, PaletteItem> {
        self.items.iter()
    }
}

impl FromIterator<PaletteItem> for Palette {
    fn from_iter<I: IntoIterator<Item = PaletteItem>>(iter: I) -> Self {
        Palette { items: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteItem;
    type IntoIter = std::slice::Iter<'a, PaletteItem>;

    fn into_iter(self) -> Self::IntoIter { self.items.iter() }
}

/// Swatches indexed by a domain key (e.g. a label name) rather than by
/// their color.
///
/// Keys are unique; iteration follows insertion order.  Inserting an
/// existing key replaces its item in place.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyedPalette<K> {
    entries: Vec<(K, PaletteItem)>,
}

impl<K> Default for KeyedPalette<K> {
    fn default() -> Self { KeyedPalette { entries: Vec::new() } }
}

impl<K: PartialEq> KeyedPalette<K> {
    pub fn new() -> Self { Self::default() }

    /// Insert `item` under `key`, returning the item it replaces.
    pub fn insert(&mut self, key: K, item: impl Into<PaletteItem>)
                  -> Option<PaletteItem> {
        let item = item.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, old)) => Some(std::mem::replace(old, item)),
            None => {
                self.entries.push((key, item));
                None
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&PaletteItem> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, item)| item)
    }

    /// Keys are already unique, so there is nothing to remove.
    pub fn normalized(&self) -> &Self { self }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &PaletteItem)> {
        self.entries.iter().map(|(k, item)| (k, item))
    }
}

impl<K: PartialEq, P: Into<PaletteItem>> FromIterator<(K, P)>
for KeyedPalette<K> {
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        let mut palette = KeyedPalette::new();
        for (key, item) in iter {
            palette.insert(key, item);
        }
        palette
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Color { Color::from_argb(0xFFEF5350) }
    fn blue() -> Color { Color::from_argb(0xFF42A5F5) }
    fn green() -> Color { Color::from_argb(0xFF66BB6A) }

    #[test]
    fn first_occurrence_wins() {
        let p = Palette::from_colors(
            [Some(red()), Some(blue()), Some(red()), Some(green())]);
        let colors: Vec<_> = p.normalized().iter().map(|i| i.color).collect();
        assert_eq!(colors, vec![Some(red()), Some(blue()), Some(green())]);
        // The palette itself is left untouched.
        assert_eq!(p.len(), 4);
    }

    #[test]
    fn enabled_flag_is_not_identity() {
        let items = [PaletteItem::from(red()).disabled(),
                     PaletteItem::from(red())];
        assert_eq!(normalize(items), vec![PaletteItem::new(red(), false)]);
    }

    #[test]
    fn no_color_deduplicated() {
        let items = [PaletteItem::no_color(), PaletteItem::from(red()),
                     PaletteItem::no_color()];
        assert_eq!(normalize(items).len(), 2);
    }

    #[test]
    fn empty() {
        assert!(normalize(Vec::new()).is_empty());
        assert!(Palette::default().normalized().is_empty());
    }

    #[test]
    fn serde_round_trip() {
        let off_grid = Color::rgb(0.5, 0.501, 0.).unwrap();
        let p = Palette::new(vec![PaletteItem::no_color(),
                                  PaletteItem::from(red()).disabled(),
                                  PaletteItem::from(off_grid)]);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(serde_json::from_str::<Palette>(&json).unwrap(), p);
    }

    #[test]
    fn enabled_defaults_to_true() {
        let item: PaletteItem =
            serde_json::from_str(r##"{ "color": "#EF5350" }"##).unwrap();
        assert_eq!(item, PaletteItem::from(red()));
        let item: PaletteItem = serde_json::from_str("{}").unwrap();
        assert_eq!(item, PaletteItem::no_color());
        let item: PaletteItem =
            serde_json::from_str(r#"{ "color": null, "enabled": false }"#).unwrap();
        assert_eq!(item, PaletteItem::no_color().disabled());
    }

    #[test]
    fn keyed_last_write_wins_in_place() {
        let mut p = KeyedPalette::new();
        assert_eq!(p.insert("Red", red()), None);
        p.insert("Blue", blue());
        let old = p.insert("Red", PaletteItem::new(green(), false));
        assert_eq!(old, Some(PaletteItem::from(red())));
        let keys: Vec<_> = p.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["Red", "Blue"]);
        assert_eq!(p.get(&"Red").map(|i| i.color), Some(Some(green())));
        assert_eq!(p.normalized().len(), 2);
    }
}
