//! Blob store for uploaded resume files, S3/MinIO backed.

use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use tracing::info;

use crate::errors::AppError;

#[derive(Clone)]
pub struct FileStore {
    s3: S3Client,
    bucket: String,
    endpoint: String,
}

impl FileStore {
    pub fn new(s3: S3Client, bucket: String, endpoint: String) -> Self {
        Self {
            s3,
            bucket,
            endpoint,
        }
    }

    /// Uploads the bytes under `path` and returns the object URL.
    pub async fn store(
        &self,
        bytes: Vec<u8>,
        path: &str,
        content_type: &str,
    ) -> Result<String, AppError> {
        self.s3
            .put_object()
            .bucket(&self.bucket)
            .key(path)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| AppError::S3(format!("upload failed: {e}")))?;

        info!("Stored file at s3://{}/{}", self.bucket, path);

        Ok(format!(
            "{}/{}/{}",
            self.endpoint.trim_end_matches('/'),
            self.bucket,
            path
        ))
    }
}
