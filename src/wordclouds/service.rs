use axum::http::StatusCode;

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError},
    AppState,
};

use super::{
    dtos::generate_wordcloud_dto::GenerateWordcloudDto,
    errors::WordcloudsApiError,
    renderer::{options::RenderOptions, RenderError},
};

pub async fn generate_wordcloud(
    dto: &GenerateWordcloudDto,
    state: &AppState,
) -> Result<Vec<u8>, ApiError> {
    if dto.comments.is_empty() {
        return Err(WordcloudsApiError::EmptyComments.value());
    }

    let combined_text = combine_comments(&dto.comments);

    if combined_text.trim().is_empty() {
        return Err(WordcloudsApiError::EmptyText.value());
    }

    let renderer = state.renderer.clone();
    let options = RenderOptions::from(dto);

    // Layout and rasterization are CPU-bound; keep them off the async executor.
    match tokio::task::spawn_blocking(move || renderer.render(&combined_text, &options)).await {
        Ok(Ok(png)) => Ok(png),
        Ok(Err(RenderError::Validation(message))) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message,
        }),
        Ok(Err(e)) => {
            tracing::error!(%e);
            Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: format!("Error generating wordcloud: {}", e),
            })
        }
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub fn combine_comments(comments: &[String]) -> String {
    comments
        .iter()
        .filter(|comment| !comment.is_empty())
        .map(|comment| comment.as_str())
        .collect::<Vec<&str>>()
        .join(" ")
}
