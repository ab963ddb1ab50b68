//! Image Upload
//!
//! Packages an image as multipart form data under the fixed `image` field.
//! Size and file-name checks run locally so an invalid upload never reaches
//! the network.

use std::sync::OnceLock;

use regex::Regex;
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::Deserialize;

use super::gateway::{ApiClient, RequestBody};
use crate::domain::{ApiError, ApiResult};

/// Upload ceiling; exactly this size is still accepted
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

static FILE_NAME_RE: OnceLock<Regex> = OnceLock::new();

fn file_name_pattern() -> &'static Regex {
    FILE_NAME_RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9._-]+$").expect("literal pattern"))
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: String,
}

impl ApiClient {
    /// Upload an image and return its hosted URL
    ///
    /// The server only accepts file names made of ASCII letters, digits,
    /// `.`, `_` and `-`, so anything else is rejected here before a request
    /// is formed. Payloads over [`MAX_IMAGE_BYTES`] are rejected the same
    /// way.
    pub async fn upload_image(&self, file_name: &str, bytes: Vec<u8>) -> ApiResult<String> {
        if !file_name_pattern().is_match(file_name) {
            return Err(ApiError::Validation(format!(
                "file name {:?} may only contain ASCII letters, digits, '.', '_' and '-'",
                file_name
            )));
        }
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(ApiError::Validation(
                "images larger than 5 MiB cannot be uploaded".to_string(),
            ));
        }

        let mime = mime_guess::from_path(file_name).first_or_octet_stream();
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime.essence_str())
            .map_err(|e| ApiError::Validation(format!("unsupported content type: {}", e)))?;
        let form = Form::new().part("image", part);

        let response: UploadResponse = self
            .request_json(Method::POST, &self.upload_path(), RequestBody::Multipart(form))
            .await?;
        Ok(response.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_pattern() {
        assert!(file_name_pattern().is_match("photo_01.final-v2.png"));
        assert!(!file_name_pattern().is_match("my photo.png"));
        assert!(!file_name_pattern().is_match("사진.png"));
        assert!(!file_name_pattern().is_match(""));
    }
}
