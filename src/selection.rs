//! Single selection over a palette.
//!
//! The selection itself belongs to the host: these functions only
//! compare against it and describe what a click asks for.

use tracing::debug;

use crate::color::Color;
use crate::palette::PaletteItem;

/// Event reported when the user picks a swatch.
///
/// The host decides whether and how to store the new value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionChanged<T>(pub T);

impl<T> SelectionChanged<T> {
    pub fn into_inner(self) -> T { self.0 }
}

/// Whether the swatch of color `candidate` is the current selection.
/// The "no color" swatch is selected when nothing is chosen.
#[inline]
pub fn is_selected(candidate: Option<Color>, current: Option<Color>) -> bool {
    candidate == current
}

#[inline]
pub fn is_key_selected<K: PartialEq + ?Sized>(candidate: &K, current: &K)
                                              -> bool {
    candidate == current
}

/// Click on `item`.  Disabled swatches ignore the click.
pub fn click(item: &PaletteItem) -> Option<SelectionChanged<Option<Color>>> {
    if !item.enabled {
        debug!(color = ?item.color, "click on disabled swatch ignored");
        return None;
    }
    debug!(color = ?item.color, "swatch selected");
    Some(SelectionChanged(item.color))
}

/// Click on the swatch stored under `key`.
pub fn click_key<K>(key: &K, item: &PaletteItem) -> Option<SelectionChanged<K>>
where K: Clone + std::fmt::Debug {
    if !item.enabled {
        debug!(?key, "click on disabled swatch ignored");
        return None;
    }
    debug!(?key, "swatch selected");
    Some(SelectionChanged(key.clone()))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_items_emit_nothing() {
        let red = Color::from_argb(0xFFEF5350);
        assert_eq!(click(&PaletteItem::new(red, false)), None);
        assert_eq!(click(&PaletteItem::new(red, true)),
                   Some(SelectionChanged(Some(red))));
        assert_eq!(click(&PaletteItem::no_color()), Some(SelectionChanged(None)));
        assert_eq!(click_key(&"Red", &PaletteItem::new(red, false)), None);
        assert_eq!(click_key(&"Red", &PaletteItem::new(red, true))
                   .map(SelectionChanged::into_inner), Some("Red"));
    }

    #[test]
    fn no_color_matches_empty_selection() {
        assert!(is_selected(None, None));
        assert!(!is_selected(None, Some(Color::BLACK)));
        assert!(!is_selected(Some(Color::BLACK), None));
        assert!(is_key_selected("Red", "Red"));
        assert!(!is_key_selected("Red", "Blue"));
    }
}
