//! Remote document store client.
//!
//! Snapshots are stored as a single-file gist. The client only distinguishes
//! success from failure; interpreting failures is left to the caller.

use crate::config::ShareConfig;
use crate::credential::Credential;
use crate::{GITHUB_API_VERSION, Result, ShareError};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Method, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

/// Identifier assigned by the remote store.
pub type RecordId = String;

/// A store holding one named text blob per record.
#[async_trait]
pub trait RemoteDocumentStore: Send + Sync {
    /// Create a record holding `content`. The store picks the identifier.
    async fn create_record(&self, content: &str) -> Result<RecordId>;

    /// Replace the content of record `id`.
    async fn update_record(&self, id: &str, content: &str) -> Result<()>;

    /// Read back the content of record `id`.
    async fn fetch_record(&self, id: &str) -> Result<String>;
}

#[derive(Serialize)]
struct GistFile<'a> {
    content: &'a str,
}

#[derive(Serialize)]
struct CreateGistRequest<'a> {
    description: &'a str,
    public: bool,
    files: HashMap<&'a str, GistFile<'a>>,
}

#[derive(Serialize)]
struct UpdateGistRequest<'a> {
    description: &'a str,
    files: HashMap<&'a str, GistFile<'a>>,
}

#[derive(Deserialize)]
struct GistResponse {
    id: String,
    #[serde(default)]
    files: HashMap<String, GistFileContent>,
}

#[derive(Deserialize)]
struct GistFileContent {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    truncated: bool,
    #[serde(default)]
    raw_url: Option<String>,
}

#[derive(Deserialize)]
struct GistErrorBody {
    message: String,
}

/// Gist-backed document store.
#[derive(Clone)]
pub struct GistClient {
    client: reqwest::Client,
    api_url: String,
    credential: Option<Credential>,
    description: String,
    filename: String,
    public: bool,
}

impl std::fmt::Debug for GistClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GistClient")
            .field("api_url", &self.api_url)
            .field("authenticated", &self.credential.is_some())
            .field("filename", &self.filename)
            .finish()
    }
}

impl GistClient {
    /// Create a client from configuration.
    ///
    /// Without a credential requests go out unauthenticated; the gist API
    /// then rejects writes, which surfaces as [`ShareError::Auth`].
    pub fn new(config: &ShareConfig, credential: Option<Credential>) -> Result<Self> {
        let client = drawdb_common::create_client_with_timeout(config.timeout())
            .map_err(ShareError::Config)?;
        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            credential,
            description: config.description.clone(),
            filename: config.filename.clone(),
            public: config.public,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, url)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION);
        match &self.credential {
            Some(credential) => builder.header(AUTHORIZATION, credential.bearer()),
            None => builder,
        }
    }

    fn files<'a>(&'a self, content: &'a str) -> HashMap<&'a str, GistFile<'a>> {
        HashMap::from([(self.filename.as_str(), GistFile { content })])
    }

    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<GistErrorBody>(&body)
            .map(|e| e.message)
            .unwrap_or(body);
        Err(ShareError::from_status(status, message))
    }
}

#[async_trait]
impl RemoteDocumentStore for GistClient {
    async fn create_record(&self, content: &str) -> Result<RecordId> {
        let url = format!("{}/gists", self.api_url);
        debug!("Creating share record at {}", url);

        let body = CreateGistRequest {
            description: &self.description,
            public: self.public,
            files: self.files(content),
        };
        let response = self.request(Method::POST, &url).json(&body).send().await?;
        let gist: GistResponse = Self::check(response).await?.json().await?;

        if gist.id.is_empty() {
            return Err(ShareError::InvalidResponse(
                "Share record created without an id".to_string(),
            ));
        }
        info!("Created share record {}", gist.id);
        Ok(gist.id)
    }

    async fn update_record(&self, id: &str, content: &str) -> Result<()> {
        let url = format!("{}/gists/{}", self.api_url, id);
        debug!("Updating share record {}", id);

        let body = UpdateGistRequest {
            description: &self.description,
            files: self.files(content),
        };
        let response = self.request(Method::PATCH, &url).json(&body).send().await?;
        Self::check(response).await?;

        info!("Updated share record {}", id);
        Ok(())
    }

    async fn fetch_record(&self, id: &str) -> Result<String> {
        let url = format!("{}/gists/{}", self.api_url, id);
        debug!("Fetching share record {}", id);

        let response = self.request(Method::GET, &url).send().await?;
        let mut gist: GistResponse = Self::check(response).await?.json().await?;

        let file = gist.files.remove(&self.filename).ok_or_else(|| {
            ShareError::InvalidResponse(format!(
                "Share record {} has no {} file",
                id, self.filename
            ))
        })?;

        match (file.content, file.truncated, file.raw_url) {
            (Some(content), false, _) => Ok(content),
            (_, _, Some(raw_url)) => {
                debug!("Share record {} is truncated, reading raw content", id);
                let response = self.request(Method::GET, &raw_url).send().await?;
                Ok(Self::check(response).await?.text().await?)
            }
            (Some(content), true, None) => Ok(content),
            (None, _, None) => Err(ShareError::InvalidResponse(format!(
                "Share record {} has no content",
                id
            ))),
        }
    }
}
