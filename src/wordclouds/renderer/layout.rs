use std::collections::HashMap;

use ab_glyph::{Font, FontRef, PxScale, ScaleFont};

use super::{options::RenderOptions, stopwords::STOPWORDS};

const MIN_FONT_SIZE: f32 = 4.0;
const WORD_MARGIN: f32 = 2.0;

#[derive(Debug)]
pub struct PlacedWord {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub size: f32,
}

/// Splits text on non-alphanumeric boundaries and counts surviving tokens,
/// most frequent first, ties broken alphabetically. Tokens shorter than two
/// characters and stopwords are dropped.
pub fn count_frequencies(text: &str) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for token in text.split(|c: char| !c.is_alphanumeric()) {
        let token = token.to_lowercase();

        if token.chars().count() < 2 {
            continue;
        }

        if STOPWORDS.contains(token.as_str()) {
            continue;
        }

        *counts.entry(token).or_default() += 1;
    }

    let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}

/// Places words on the canvas along an outward spiral from the center.
/// A word that does not fit is shrunk until it does or dropped entirely.
pub fn layout_words(
    entries: &[(String, usize)],
    options: &RenderOptions,
    font: &FontRef,
) -> Vec<PlacedWord> {
    let width = options.width as f32;
    let height = options.height as f32;
    let max_count = entries.first().map(|entry| entry.1).unwrap_or(1) as f32;
    let max_size = (height / 4.0).max(MIN_FONT_SIZE);

    let mut placed: Vec<PlacedWord> = Vec::new();
    let mut occupied: Vec<(f32, f32, f32, f32)> = Vec::new();

    for (word, count) in entries.iter().take(options.max_words as usize) {
        let relative = (*count as f32 / max_count).sqrt();
        let mut size = MIN_FONT_SIZE + (max_size - MIN_FONT_SIZE) * relative;

        while size >= MIN_FONT_SIZE {
            let (w, h) = measure(font, word, size);
            let padded_w = w + WORD_MARGIN;
            let padded_h = h + WORD_MARGIN;

            if padded_w < width && padded_h < height {
                if let Some((x, y)) = find_position(padded_w, padded_h, width, height, &occupied) {
                    occupied.push((x, y, padded_w, padded_h));
                    placed.push(PlacedWord {
                        text: word.to_string(),
                        x: x as i32,
                        y: y as i32,
                        size,
                    });
                    break;
                }
            }

            size *= 0.9;
        }
    }

    placed
}

pub fn measure(font: &FontRef, text: &str, size: f32) -> (f32, f32) {
    let scaled = font.as_scaled(PxScale::from(size));
    let width = text
        .chars()
        .map(|c| scaled.h_advance(font.glyph_id(c)))
        .sum();

    (width, scaled.height())
}

fn find_position(
    w: f32,
    h: f32,
    width: f32,
    height: f32,
    occupied: &[(f32, f32, f32, f32)],
) -> Option<(f32, f32)> {
    let cx = width / 2.0;
    let cy = height / 2.0;
    // Radius reaches the far edge of the canvas by the last step.
    let growth = width.max(height) / 560.0;

    for step in 0..800 {
        let t = step as f32 * 0.35;
        let radius = t * growth;
        let x = cx + radius * t.cos() - w / 2.0;
        let y = cy + 0.6 * radius * t.sin() - h / 2.0;

        if x < 0.0 || y < 0.0 || x + w > width || y + h > height {
            continue;
        }

        if !occupied
            .iter()
            .any(|other| intersects((x, y, w, h), *other))
        {
            return Some((x, y));
        }
    }

    None
}

fn intersects(a: (f32, f32, f32, f32), b: (f32, f32, f32, f32)) -> bool {
    a.0 < b.0 + b.2 && b.0 < a.0 + a.2 && a.1 < b.1 + b.3 && b.1 < a.1 + a.3
}
