use async_trait::async_trait;
use reqwest::{multipart, Client, Response};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::content::application::{
    domain::entities::ContentDocument,
    ports::outgoing::{GatewayError, PhotoFile, PortfolioGateway},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadPhotoBody {
    #[serde(default)]
    success: bool,
    photo_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// HTTP client for a running portfolio server.
#[derive(Debug, Clone)]
pub struct PortfolioApiClient {
    client: Client,
    base_url: Url,
}

impl PortfolioApiClient {
    pub fn new(base_url: &str) -> Result<Self, GatewayError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, GatewayError> {
        // Without the trailing slash `join` would drop the last path segment.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base_url = Url::parse(&normalized)
            .map_err(|e| GatewayError::Transport(format!("invalid base url: {}", e)))?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, relative: &str) -> Result<Url, GatewayError> {
        self.base_url
            .join(relative)
            .map_err(|e| GatewayError::Transport(e.to_string()))
    }

    async fn ensure_success(response: Response) -> Result<Response, GatewayError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(ErrorBody { error: Some(error) }) => error,
            _ => status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
        };

        Err(GatewayError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

fn transport(e: reqwest::Error) -> GatewayError {
    GatewayError::Transport(e.to_string())
}

#[async_trait]
impl PortfolioGateway for PortfolioApiClient {
    async fn fetch_content(&self) -> Result<ContentDocument, GatewayError> {
        let url = self.endpoint("content.json")?;
        debug!(%url, "Fetching portfolio content");

        let response = self.client.get(url).send().await.map_err(transport)?;
        let response = Self::ensure_success(response).await?;

        let raw = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        ContentDocument::from_value(raw).map_err(|e| GatewayError::InvalidResponse(e.to_string()))
    }

    async fn persist_content(&self, document: &ContentDocument) -> Result<(), GatewayError> {
        let url = self.endpoint("api/content")?;
        debug!(%url, "Persisting portfolio content");

        let response = self
            .client
            .put(url)
            .json(document.as_value())
            .send()
            .await
            .map_err(transport)?;
        Self::ensure_success(response).await?;

        Ok(())
    }

    async fn upload_photo(&self, photo: PhotoFile) -> Result<String, GatewayError> {
        let url = self.endpoint("api/upload-photo")?;
        debug!(%url, file_name = %photo.file_name, "Uploading photo");

        let part = multipart::Part::bytes(photo.bytes)
            .file_name(photo.file_name)
            .mime_str(&photo.mime_type)
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        let form = multipart::Form::new().part("photo", part);

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;
        let response = Self::ensure_success(response).await?;

        let body = response
            .json::<UploadPhotoBody>()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        match body {
            UploadPhotoBody {
                success: true,
                photo_url: Some(url),
            } => Ok(url),
            _ => Err(GatewayError::InvalidResponse(
                "upload response carried no photoUrl".to_string(),
            )),
        }
    }
}
