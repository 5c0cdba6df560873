//! Multipart form parsing.
//!
//! Registration and hotel endpoints accept multipart bodies mixing text
//! fields with file uploads. This module drains the stream into memory and
//! hands files to the core as `FileUpload` values.

use std::collections::HashMap;

use actix_multipart::Multipart;
use futures_util::TryStreamExt;

use se_core::services::FileUpload;

use super::ApiError;

/// Upper bound for a single uploaded file, in bytes
const MAX_FILE_BYTES: usize = 5 * 1024 * 1024;

/// A fully drained multipart body
#[derive(Debug, Default)]
pub struct UploadForm {
    pub fields: HashMap<String, String>,
    pub files: HashMap<String, FileUpload>,
}

impl UploadForm {
    /// Takes a text field, or fails with a validation error naming it.
    pub fn require_field(&mut self, name: &str) -> Result<String, ApiError> {
        self.fields
            .remove(name)
            .ok_or_else(|| ApiError::validation(format!("{name} is required")))
    }

    /// Takes a file field, or fails with a validation error naming it.
    pub fn require_file(&mut self, name: &str) -> Result<FileUpload, ApiError> {
        self.files
            .remove(name)
            .ok_or_else(|| ApiError::validation(format!("{name} file is required")))
    }
}

/// Reads every part of the multipart stream into an `UploadForm`.
pub async fn parse_form(mut payload: Multipart) -> Result<UploadForm, ApiError> {
    let mut form = UploadForm::default();

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| ApiError::validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().to_string();
        let filename = field
            .content_disposition()
            .get_filename()
            .map(str::to_string);
        let content_type = field.content_type().map(|mime| mime.to_string());

        let mut bytes: Vec<u8> = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| ApiError::validation(format!("Failed to read upload: {e}")))?
        {
            if bytes.len() + chunk.len() > MAX_FILE_BYTES {
                return Err(ApiError::validation("Uploaded file is too large"));
            }
            bytes.extend_from_slice(&chunk);
        }

        match filename {
            Some(filename) => {
                let mut upload = FileUpload::new(filename, bytes);
                if let Some(content_type) = content_type {
                    upload = upload.with_content_type(content_type);
                }
                form.files.insert(name, upload);
            }
            None => {
                let value = String::from_utf8(bytes)
                    .map_err(|_| ApiError::validation(format!("{name} must be valid UTF-8")))?;
                form.fields.insert(name, value);
            }
        }
    }

    Ok(form)
}
