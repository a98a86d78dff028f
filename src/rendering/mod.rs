//! Turning rasters into pixels and pixels into files.

mod sink;

pub use sink::{ImageSink, PngFileSink, SinkError};

use image::{Rgba, RgbaImage};
use thiserror::Error;

use crate::domain::{Cell, Raster};

/// Yellow background
pub const DEFAULT_BACKGROUND: Rgba<u8> = Rgba([255, 255, 0, 255]);
/// Orange active cells
pub const DEFAULT_ACTIVE: Rgba<u8> = Rgba([255, 150, 10, 255]);

/// The two colors of an automaton image
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgba<u8>,
    pub active: Rgba<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND,
            active: DEFAULT_ACTIVE,
        }
    }
}

impl Palette {
    pub const fn new(background: Rgba<u8>, active: Rgba<u8>) -> Self {
        Self { background, active }
    }

    #[inline]
    pub const fn color(&self, cell: Cell) -> Rgba<u8> {
        match cell {
            Cell::Inactive => self.background,
            Cell::Active => self.active,
        }
    }
}

/// Paint a raster with a palette
pub fn to_image(raster: &Raster, palette: &Palette) -> RgbaImage {
    let (width, height) = raster.dimensions();
    RgbaImage::from_fn(width as u32, height as u32, |x, y| {
        raster
            .get(x as usize, y as usize)
            .map_or(palette.background, |cell| palette.color(cell))
    })
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid color '{0}': expected r,g,b[,a] or #rrggbb[aa]")]
pub struct ColorParseError(String);

/// Parse `r,g,b`, `r,g,b,a`, `#rrggbb` or `#rrggbbaa` (alpha defaults to 255)
pub fn parse_color(text: &str) -> Result<Rgba<u8>, ColorParseError> {
    let err = || ColorParseError(text.to_string());
    let text = text.trim();

    let channels: Vec<u8> = if let Some(hex) = text.strip_prefix('#') {
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return Err(err());
        }
        (0..hex.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&hex[i..i + 2], 16))
            .collect::<Result<_, _>>()
            .map_err(|_| err())?
    } else {
        text.split(',')
            .map(|part| part.trim().parse::<u8>())
            .collect::<Result<_, _>>()
            .map_err(|_| err())?
    };

    match channels.as_slice() {
        &[r, g, b] => Ok(Rgba([r, g, b, 255])),
        &[r, g, b, a] => Ok(Rgba([r, g, b, a])),
        _ => Err(err()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Algorithm, Dimensions, RuleNumber, RuleTable};

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.color(Cell::Inactive), Rgba([255, 255, 0, 255]));
        assert_eq!(palette.color(Cell::Active), Rgba([255, 150, 10, 255]));
    }

    #[test]
    fn test_to_image_maps_cells() {
        let table = RuleTable::new(RuleNumber::new(30));
        let raster = Raster::render(&table, Dimensions::from_width(8).unwrap(), Algorithm::Naive).unwrap();
        let palette = Palette::new(Rgba([0, 0, 0, 255]), Rgba([255, 255, 255, 255]));
        let image = to_image(&raster, &palette);

        assert_eq!(image.dimensions(), (8, 4));
        assert_eq!(*image.get_pixel(4, 0), palette.active);
        assert_eq!(*image.get_pixel(3, 0), palette.background);
        assert_eq!(*image.get_pixel(3, 1), palette.active);
    }

    #[test]
    fn test_parse_color_forms() {
        assert_eq!(parse_color("255,150,10"), Ok(Rgba([255, 150, 10, 255])));
        assert_eq!(parse_color("1, 2, 3, 4"), Ok(Rgba([1, 2, 3, 4])));
        assert_eq!(parse_color("#ff960a"), Ok(Rgba([255, 150, 10, 255])));
        assert_eq!(parse_color("#ffff0080"), Ok(Rgba([255, 255, 0, 128])));
    }

    #[test]
    fn test_parse_color_rejects_garbage() {
        assert!(parse_color("256,0,0").is_err());
        assert!(parse_color("1,2").is_err());
        assert!(parse_color("#fff").is_err());
        assert!(parse_color("#gg0000").is_err());
        assert!(parse_color("yellow").is_err());
    }
}
