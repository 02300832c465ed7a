use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerateWordcloudDto {
    pub comments: Vec<String>,
    /// Accepted for forward compatibility but not used in rendering.
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_width")]
    #[validate(range(min = 1, max = 10000, message = "width must be between 1 and 10000."))]
    pub width: u32,
    #[serde(default = "default_height")]
    #[validate(range(min = 1, max = 10000, message = "height must be between 1 and 10000."))]
    pub height: u32,
    #[serde(default = "default_background_color")]
    pub background_color: String,
    #[serde(default = "default_colormap")]
    pub colormap: String,
    #[serde(default = "default_max_words")]
    #[validate(range(min = 1, max = 10000, message = "max_words must be between 1 and 10000."))]
    pub max_words: u32,
    #[serde(default = "default_contour_color")]
    pub contour_color: String,
    #[serde(default = "default_contour_width")]
    pub contour_width: u32,
}

fn default_title() -> String {
    "WordCloud".to_string()
}

fn default_width() -> u32 {
    1400
}

fn default_height() -> u32 {
    700
}

fn default_background_color() -> String {
    "white".to_string()
}

fn default_colormap() -> String {
    "viridis".to_string()
}

fn default_max_words() -> u32 {
    300
}

fn default_contour_color() -> String {
    "steelblue".to_string()
}

fn default_contour_width() -> u32 {
    2
}
