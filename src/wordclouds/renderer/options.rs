use crate::wordclouds::dtos::generate_wordcloud_dto::GenerateWordcloudDto;

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub background_color: String,
    pub colormap: String,
    pub max_words: u32,
    pub contour_color: String,
    pub contour_width: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1400,
            height: 700,
            background_color: "white".to_string(),
            colormap: "viridis".to_string(),
            max_words: 300,
            contour_color: "steelblue".to_string(),
            contour_width: 2,
        }
    }
}

impl From<&GenerateWordcloudDto> for RenderOptions {
    fn from(dto: &GenerateWordcloudDto) -> Self {
        Self {
            width: dto.width,
            height: dto.height,
            background_color: dto.background_color.to_string(),
            colormap: dto.colormap.to_string(),
            max_words: dto.max_words,
            contour_color: dto.contour_color.to_string(),
            contour_width: dto.contour_width,
        }
    }
}
