//! Media storage collaborator.
//!
//! Profile pictures and hotel photos are pushed to an external
//! binary-object service that returns a public URL. The trait keeps the
//! provider behind a seam so the domain never touches HTTP directly.

use async_trait::async_trait;

use crate::errors::DomainResult;

/// An uploaded file as received from the HTTP layer
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Binary-object upload service returning a public reference URL
#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Upload a file and return its public URL.
    ///
    /// Provider failures surface as `DomainError::Internal`; no retries
    /// are performed.
    async fn upload(&self, file: FileUpload) -> DomainResult<String>;
}

#[cfg(test)]
pub mod mock {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Mock media storage that mints predictable URLs
    #[derive(Default)]
    pub struct MockMediaStorage {
        uploads: AtomicUsize,
    }

    impl MockMediaStorage {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn upload_count(&self) -> usize {
            self.uploads.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl MediaStorage for MockMediaStorage {
        async fn upload(&self, file: FileUpload) -> DomainResult<String> {
            self.uploads.fetch_add(1, Ordering::SeqCst);
            Ok(format!("https://cdn.test/{}", file.filename))
        }
    }
}
