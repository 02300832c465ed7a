use std::collections::HashMap;

use image::Rgba;

use super::RenderError;

lazy_static! {
    static ref NAMED_COLORS: HashMap<&'static str, [u8; 3]> = HashMap::from([
        ("white", [0xff, 0xff, 0xff]),
        ("black", [0x00, 0x00, 0x00]),
        ("red", [0xff, 0x00, 0x00]),
        ("lime", [0x00, 0xff, 0x00]),
        ("blue", [0x00, 0x00, 0xff]),
        ("green", [0x00, 0x80, 0x00]),
        ("yellow", [0xff, 0xff, 0x00]),
        ("cyan", [0x00, 0xff, 0xff]),
        ("magenta", [0xff, 0x00, 0xff]),
        ("orange", [0xff, 0xa5, 0x00]),
        ("purple", [0x80, 0x00, 0x80]),
        ("pink", [0xff, 0xc0, 0xcb]),
        ("brown", [0xa5, 0x2a, 0x2a]),
        ("gray", [0x80, 0x80, 0x80]),
        ("grey", [0x80, 0x80, 0x80]),
        ("lightgray", [0xd3, 0xd3, 0xd3]),
        ("lightgrey", [0xd3, 0xd3, 0xd3]),
        ("darkgray", [0xa9, 0xa9, 0xa9]),
        ("darkgrey", [0xa9, 0xa9, 0xa9]),
        ("navy", [0x00, 0x00, 0x80]),
        ("teal", [0x00, 0x80, 0x80]),
        ("olive", [0x80, 0x80, 0x00]),
        ("maroon", [0x80, 0x00, 0x00]),
        ("silver", [0xc0, 0xc0, 0xc0]),
        ("gold", [0xff, 0xd7, 0x00]),
        ("salmon", [0xfa, 0x80, 0x72]),
        ("tomato", [0xff, 0x63, 0x47]),
        ("coral", [0xff, 0x7f, 0x50]),
        ("crimson", [0xdc, 0x14, 0x3c]),
        ("indigo", [0x4b, 0x00, 0x82]),
        ("violet", [0xee, 0x82, 0xee]),
        ("turquoise", [0x40, 0xe0, 0xd0]),
        ("steelblue", [0x46, 0x82, 0xb4]),
        ("skyblue", [0x87, 0xce, 0xeb]),
        ("lightblue", [0xad, 0xd8, 0xe6]),
        ("darkblue", [0x00, 0x00, 0x8b]),
        ("lightgreen", [0x90, 0xee, 0x90]),
        ("darkgreen", [0x00, 0x64, 0x00]),
        ("slategray", [0x70, 0x80, 0x90]),
        ("slategrey", [0x70, 0x80, 0x90]),
        ("whitesmoke", [0xf5, 0xf5, 0xf5]),
        ("ivory", [0xff, 0xff, 0xf0]),
        ("beige", [0xf5, 0xf5, 0xdc]),
    ]);

    static ref COLORMAPS: HashMap<&'static str, Vec<[u8; 3]>> = HashMap::from([
        (
            "viridis",
            vec![
                [68, 1, 84],
                [72, 40, 120],
                [62, 74, 137],
                [49, 104, 142],
                [38, 130, 142],
                [31, 158, 137],
                [53, 183, 121],
                [109, 205, 89],
                [180, 222, 44],
                [253, 231, 37],
            ],
        ),
        (
            "plasma",
            vec![
                [13, 8, 135],
                [84, 2, 163],
                [139, 10, 165],
                [185, 50, 137],
                [219, 92, 104],
                [244, 136, 73],
                [254, 188, 43],
                [240, 249, 33],
            ],
        ),
        (
            "inferno",
            vec![
                [0, 0, 4],
                [40, 11, 84],
                [101, 21, 110],
                [159, 42, 99],
                [212, 72, 66],
                [245, 125, 21],
                [250, 193, 39],
                [252, 255, 164],
            ],
        ),
        (
            "magma",
            vec![
                [0, 0, 4],
                [42, 7, 81],
                [114, 31, 129],
                [183, 55, 121],
                [240, 112, 74],
                [254, 176, 120],
                [252, 253, 191],
            ],
        ),
        (
            "cividis",
            vec![
                [0, 32, 76],
                [24, 59, 101],
                [85, 91, 108],
                [123, 123, 120],
                [165, 156, 116],
                [216, 194, 95],
                [255, 234, 70],
            ],
        ),
        (
            "cool",
            vec![
                [0, 255, 255],
                [64, 191, 255],
                [128, 128, 255],
                [191, 64, 255],
                [255, 0, 255],
            ],
        ),
        (
            "spring",
            vec![
                [255, 0, 255],
                [255, 64, 191],
                [255, 128, 128],
                [255, 191, 64],
                [255, 255, 0],
            ],
        ),
        (
            "summer",
            vec![
                [0, 128, 102],
                [64, 159, 102],
                [128, 191, 102],
                [191, 223, 102],
                [255, 255, 102],
            ],
        ),
        (
            "autumn",
            vec![
                [255, 0, 0],
                [255, 64, 0],
                [255, 128, 0],
                [255, 191, 0],
                [255, 255, 0],
            ],
        ),
        (
            "winter",
            vec![
                [0, 0, 255],
                [0, 64, 223],
                [0, 128, 191],
                [0, 191, 159],
                [0, 255, 128],
            ],
        ),
        (
            "rainbow",
            vec![
                [127, 0, 255],
                [55, 111, 255],
                [25, 204, 223],
                [104, 255, 164],
                [182, 255, 93],
                [255, 204, 15],
                [255, 111, 0],
                [255, 0, 0],
            ],
        ),
        (
            "tab10",
            vec![
                [31, 119, 180],
                [255, 127, 14],
                [44, 160, 44],
                [214, 39, 40],
                [148, 103, 189],
                [140, 86, 75],
                [227, 119, 194],
                [127, 127, 127],
                [188, 189, 34],
                [23, 190, 207],
            ],
        ),
    ]);
}

/// Resolves a color name or `#rrggbb`/`#rgb` hex string to a pixel.
pub fn parse_color(name: &str) -> Result<Rgba<u8>, RenderError> {
    let name = name.trim().to_lowercase();

    if let Some(hex) = name.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| {
            RenderError::Validation(format!("'{}' is not a valid hex color", name))
        });
    }

    match NAMED_COLORS.get(name.as_str()) {
        Some([r, g, b]) => Ok(Rgba([*r, *g, *b, 0xff])),
        None => Err(RenderError::Validation(format!(
            "'{}' is not a recognized color name",
            name
        ))),
    }
}

/// Returns the anchor colors of a named colormap.
pub fn colormap(name: &str) -> Result<Vec<Rgba<u8>>, RenderError> {
    match COLORMAPS.get(name.trim().to_lowercase().as_str()) {
        Some(anchors) => Ok(anchors
            .iter()
            .map(|[r, g, b]| Rgba([*r, *g, *b, 0xff]))
            .collect()),
        None => Err(RenderError::Validation(format!(
            "'{}' is not a recognized colormap",
            name
        ))),
    }
}

fn parse_hex(hex: &str) -> Option<Rgba<u8>> {
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Rgba([r, g, b, 0xff]))
        }
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some(Rgba([r * 17, g * 17, b * 17, 0xff]))
        }
        _ => None,
    }
}
