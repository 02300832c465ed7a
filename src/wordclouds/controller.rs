use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    dtos::generate_wordcloud_dto::GenerateWordcloudDto, errors::WordcloudsApiError, service,
};

pub async fn generate_wordcloud(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonFromRequest(dto): JsonFromRequest<GenerateWordcloudDto>,
) -> Result<Response, ApiError> {
    match verify_api_key(&headers, &state.envy.api_key) {
        Ok(_) => match dto.validate() {
            Ok(_) => match service::generate_wordcloud(&dto, &state).await {
                Ok(png) => Ok((
                    [
                        (header::CONTENT_TYPE, mime::IMAGE_PNG.as_ref()),
                        (header::CONTENT_DISPOSITION, "inline; filename=wordcloud.png"),
                    ],
                    png,
                )
                    .into_response()),
                Err(e) => Err(e),
            },
            Err(e) => Err(ApiError {
                code: StatusCode::BAD_REQUEST,
                message: e.to_string(),
            }),
        },
        Err(e) => Err(e),
    }
}

fn verify_api_key(headers: &HeaderMap, api_key: &str) -> Result<(), ApiError> {
    match headers.get("x-api-key") {
        Some(value) if value.as_bytes() == api_key.as_bytes() => Ok(()),
        _ => Err(WordcloudsApiError::InvalidApiKey.value()),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderMap, HeaderValue, StatusCode};

    use super::verify_api_key;

    #[test]
    fn accepts_matching_key() {
        let mut headers = HeaderMap::new();
        headers.insert("x-api-key", HeaderValue::from_static("secret"));

        assert!(verify_api_key(&headers, "secret").is_ok());
    }

    #[test]
    fn rejects_missing_key() {
        let headers = HeaderMap::new();

        let err = verify_api_key(&headers, "secret").unwrap_err();
        assert_eq!(err.code, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn rejects_wrong_key() {
        let mut headers = HeaderMap::new();
        headers.insert("x-api-key", HeaderValue::from_static("nope"));

        let err = verify_api_key(&headers, "secret").unwrap_err();
        assert_eq!(err.code, StatusCode::UNAUTHORIZED);
    }
}
