//! Writes `catalog.html`: the catalog palette at every size, once
//! without selection and once per selected swatch kind.

use std::{io::{BufWriter, Write},
          fs::File,
          error::Error};
use swatch_picker::{Color, ColorPicker, Indicator, Palette, PickerStyle,
                    SizeTier, SwatchDescriptor, CATALOG};
use tracing::info;
use tracing_subscriber::EnvFilter;

type Err = Box<dyn Error>;

fn css_string(c: Color) -> String {
    let rgba = c.to_rgba8();
    format!("rgba({}, {}, {}, {:.3})", rgba.r, rgba.g, rgba.b, c.a())
}

fn swatch(fh: &mut impl Write, s: &SwatchDescriptor) -> Result<(), Err> {
    let d = s.indicator_diameter;
    let (fill, border, glyph) = match s.indicator {
        Indicator::Color { contrast_tint, border_width, backdrop } => {
            let fill = format!(
                "background: linear-gradient(to right, {b} {w}px, \
                 transparent {w}px), white",
                b = css_string(backdrop.color), w = backdrop.width);
            let border = border_width.map_or(String::new(), |w| format!(
                "box-shadow: inset 0 0 0 {w}px {};", css_string(contrast_tint)));
            let glyph = if s.is_selected {
                format!("<span style=\"color: {}\">✓</span>",
                        css_string(contrast_tint))
            } else { String::new() };
            (fill, border, glyph)
        }
        Indicator::NoColor { background, icon_tint, check_tint } => {
            let fill = format!("background: {}", css_string(background));
            let glyph = match check_tint {
                Some(c) => format!("<span style=\"color: {}\">✓</span>",
                                   css_string(c)),
                None => format!("<span style=\"color: {}\">⊘</span>",
                                css_string(icon_tint)),
            };
            (fill, String::new(), glyph)
        }
    };
    let color = s.color.map_or("transparent".to_string(), css_string);
    writeln!(fh, "  <td style=\"padding: {sp}px\"><div title=\"{title}\" \
                  style=\"{fill}; width: {d}px; height: {d}px; \
                  border-radius: 50%; overflow: hidden; \
                  opacity: {op}\"><div style=\"background: {color}; \
                  width: 100%; height: 100%; {border} border-radius: 50%; \
                  display: flex; align-items: center; \
                  justify-content: center\">{glyph}</div></div></td>",
             sp = s.item_spacing + s.inner_padding,
             title = s.color.map_or("no color".to_string(), |c| c.to_hex()),
             op = if s.enabled { 1. } else { 0.4 })?;
    Ok(())
}

fn row(fh: &mut impl Write, picker: &ColorPicker, palette: &Palette,
       selection: Option<Color>, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for s in picker.describe(palette, selection) {
        swatch(fh, &s)?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td></tr>\
                  </table>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let palette = CATALOG.palette();
    let mut fh = BufWriter::new(File::create("catalog.html")?);
    writeln!(fh, "<html>\n<head>\n<title>swatch-picker: {}</title>\n\
                  </head>\n<body>", CATALOG.name())?;
    for size in SizeTier::ALL {
        let picker = ColorPicker::new(PickerStyle { size, ..Default::default() });
        writeln!(fh, "<h3>{size:?}</h3>")?;
        row(&mut fh, &picker, &palette, None, "no color")?;
        for hex in ["#000000", "#FFFFFF", "#FF444480", "#FFEE58", "#EC407A"] {
            let c = Color::from_hex(hex)?;
            row(&mut fh, &picker, &palette, Some(c), hex)?;
        }
    }
    writeln!(fh, "</body>\n</html>")?;
    info!(swatches = palette.len(), "wrote catalog.html");
    Ok(())
}
