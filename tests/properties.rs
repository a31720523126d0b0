use proptest::prelude::*;
use swatch_picker::{is_selected, normalize, Color, ColorPicker, Palette,
                    PaletteItem};

// A small color space so that duplicates are frequent.
fn item() -> impl Strategy<Value = PaletteItem> {
    (prop::option::of(0u32 .. 6), any::<bool>()).prop_map(|(c, enabled)| {
        let color = c.map(|i| Color::from_argb(0xFF000000 | i * 0x2A2A2A));
        PaletteItem::new(color, enabled)
    })
}

proptest! {
    #[test]
    fn normalize_is_idempotent(items in prop::collection::vec(item(), 0 .. 24)) {
        let once = normalize(items.clone());
        prop_assert_eq!(normalize(once.clone()), once);
    }

    #[test]
    fn normalize_keeps_first_occurrences_in_order(
        items in prop::collection::vec(item(), 0 .. 24)) {
        let out = normalize(items.clone());
        let mut expected: Vec<PaletteItem> = Vec::new();
        for it in items {
            if !expected.iter().any(|e| e.color == it.color) {
                expected.push(it);
            }
        }
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn at_most_one_selected(items in prop::collection::vec(item(), 0 .. 24),
                            current in prop::option::of(0u32 .. 8)) {
        let current = current.map(|i| Color::from_argb(0xFF000000 | i * 0x2A2A2A));
        let palette: Palette = items.into_iter().collect();
        let normalized = palette.normalized();
        let n = normalized.iter()
            .filter(|it| is_selected(it.color, current)).count();
        prop_assert!(n <= 1);
        let present = normalized.iter().any(|it| it.color == current);
        prop_assert_eq!(n == 1, present);
        let described = ColorPicker::default().describe(&palette, current);
        prop_assert_eq!(described.iter().filter(|d| d.is_selected).count(), n);
    }
}
