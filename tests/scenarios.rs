//! End to end behavior of the picker as seen by a rendering layer.

use swatch_picker::{click, is_key_selected, Color, ColorPicker, Indicator,
                    KeyedPalette, Palette, PaletteItem, PickerStyle,
                    SelectionChanged, CATALOG};

fn red() -> Color { Color::from_hex("#EF5350").unwrap() }
fn blue() -> Color { Color::from_hex("#42A5F5").unwrap() }

#[test]
fn black_white_red_with_white_selected() {
    let black = Color::from_hex("#000000").unwrap();
    let white = Color::from_hex("#FFFFFF").unwrap();
    let palette = Palette::from_colors([None, Some(black), Some(white),
                                        Some(red())]);
    let picker = ColorPicker::new(PickerStyle::default());
    let style = picker.style();
    let swatches = picker.describe(&palette, Some(white));

    let selected: Vec<_> = swatches.iter().map(|s| s.is_selected).collect();
    assert_eq!(selected, vec![false, false, true, false]);
    assert_eq!(style.contrast_tint(&white), Color::BLACK);
    assert_eq!(style.contrast_tint(&black), Color::WHITE);
    assert!(style.is_extreme_luminance(&black));
    assert!(style.is_extreme_luminance(&white));
    assert!(!style.is_extreme_luminance(&red()));

    let borders: Vec<_> = swatches.iter().map(|s| match s.indicator {
        Indicator::Color { border_width, .. } => border_width,
        Indicator::NoColor { .. } => None,
    }).collect();
    assert_eq!(borders, vec![None, Some(1.), Some(2.), None]);
}

#[test]
fn keyed_selection_follows_the_key() {
    let palette: KeyedPalette<&str> =
        [("Red", red()), ("Blue", blue())].into_iter().collect();
    let picker = ColorPicker::default();

    let mut selection = "Red";
    assert!(is_key_selected("Red", selection));
    assert!(!is_key_selected("Blue", selection));

    let blue_item = *palette.get(&"Blue").unwrap();
    if let Some(SelectionChanged(key)) = picker.click_key(&"Blue", &blue_item) {
        selection = key;
    }
    let swatches = picker.describe_keyed(&palette, &selection);
    let flags: Vec<_> = swatches.iter()
        .map(|(k, s)| (**k, s.is_selected)).collect();
    assert_eq!(flags, vec![("Red", false), ("Blue", true)]);
}

#[test]
fn host_owns_the_selection() {
    let palette = Palette::new(vec![PaletteItem::from(red()),
                                    PaletteItem::new(blue(), false)]);
    let picker = ColorPicker::default();
    let mut selection = None;
    for item in palette.iter() {
        if let Some(SelectionChanged(c)) = picker.click(item) {
            selection = c;
        }
    }
    // The disabled blue swatch did not steal the selection.
    assert_eq!(selection, Some(red()));
    assert_eq!(click(&palette.items()[1]), None);
}

#[test]
fn catalog_without_selection() {
    let swatches = ColorPicker::default().describe(&CATALOG.palette(), None);
    assert_eq!(swatches.len(), CATALOG.items().len());
    // Nothing chosen: the "no color" swatch is the selected one.
    assert!(swatches[0].is_selected);
    assert_eq!(swatches.iter().filter(|s| s.is_selected).count(), 1);
}
