use std::{fmt, io::Cursor};

use ab_glyph::FontRef;
use image::{
    imageops::{self, FilterType},
    DynamicImage, ImageFormat, Rgba, RgbaImage,
};
use imageproc::{
    drawing::{draw_hollow_rect_mut, draw_text_mut},
    rect::Rect,
};

pub mod layout;
pub mod options;
pub mod palette;
pub mod stopwords;

use self::options::RenderOptions;

pub(crate) const FONT_BYTES: &[u8] = include_bytes!("../../../assets/fonts/DejaVuSans.ttf");

// Output surface fixed at 15in x 7in, rasterized at 150 DPI.
const SURFACE_WIDTH: u32 = 2250;
const SURFACE_HEIGHT: u32 = 1050;

#[derive(Debug)]
pub enum RenderError {
    /// Unusable input: blank text, no countable words, unknown color names.
    Validation(String),
    /// Failure inside layout, drawing or PNG encoding.
    Rendering(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(message) => write!(f, "{}", message),
            Self::Rendering(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for RenderError {}

/// The word cloud generator behind the HTTP layer. The handler only depends
/// on this seam, so tests can substitute a stub.
pub trait WordcloudRenderer: Send + Sync {
    fn render(&self, text: &str, options: &RenderOptions) -> Result<Vec<u8>, RenderError>;
}

/// Default renderer: frequency layout drawn with the embedded DejaVu Sans
/// face, encoded as PNG in memory.
pub struct ImageRenderer {
    font: FontRef<'static>,
}

impl ImageRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let font = FontRef::try_from_slice(FONT_BYTES)
            .map_err(|_| RenderError::Rendering("invalid embedded font".to_string()))?;

        Ok(Self { font })
    }
}

impl WordcloudRenderer for ImageRenderer {
    fn render(&self, text: &str, options: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        if text.trim().is_empty() {
            return Err(RenderError::Validation("Text cannot be empty".to_string()));
        }

        let background = palette::parse_color(&options.background_color)?;
        let contour = palette::parse_color(&options.contour_color)?;
        let colors = palette::colormap(&options.colormap)?;

        let entries = layout::count_frequencies(text);
        if entries.is_empty() {
            return Err(RenderError::Validation(
                "Need at least 1 word to plot a word cloud".to_string(),
            ));
        }

        let mut canvas = RgbaImage::from_pixel(options.width, options.height, background);

        for (i, word) in layout::layout_words(&entries, options, &self.font)
            .iter()
            .enumerate()
        {
            draw_text_mut(
                &mut canvas,
                colors[i % colors.len()],
                word.x,
                word.y,
                word.size,
                &self.font,
                &word.text,
            );
        }

        if options.contour_width > 0 {
            draw_contour(&mut canvas, contour, options.contour_width);
        }

        // Resample onto the fixed output surface, then encode.
        let surface = imageops::resize(&canvas, SURFACE_WIDTH, SURFACE_HEIGHT, FilterType::Triangle);

        let mut buffer = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(surface)
            .write_to(&mut buffer, ImageFormat::Png)
            .map_err(|e| RenderError::Rendering(e.to_string()))?;

        Ok(buffer.into_inner())
    }
}

fn draw_contour(canvas: &mut RgbaImage, color: Rgba<u8>, width: u32) {
    let (w, h) = canvas.dimensions();

    for inset in 0..width {
        if w <= inset * 2 || h <= inset * 2 {
            break;
        }

        let rect = Rect::at(inset as i32, inset as i32).of_size(w - inset * 2, h - inset * 2);
        draw_hollow_rect_mut(canvas, rect, color);
    }
}
