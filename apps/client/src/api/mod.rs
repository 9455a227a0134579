//! Remote store adapter — the single point of entry for all backend calls.
//! No other module may issue HTTP requests; flows depend on the
//! `JobBoardApi` trait and receive `Arc<dyn JobBoardApi>`, so tests swap in
//! a mock without touching callers.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::errors::ClientError;
use crate::jobs::ApplicationSubmission;
use crate::session::UserProfile;
use crate::settings::merge::PartialSettings;
use crate::settings::models::SettingsDocument;

#[async_trait]
pub trait JobBoardApi: Send + Sync {
    async fn get_settings(&self) -> Result<PartialSettings, ClientError>;

    /// Persists the full document. Returns the user profile if the server
    /// echoes updated profile fields back.
    async fn update_settings(
        &self,
        doc: &SettingsDocument,
    ) -> Result<Option<UserProfile>, ClientError>;

    async fn change_password(&self, current: &str, new: &str) -> Result<(), ClientError>;

    // Candidate and employer deletion hit different routes but share the
    // same contract: password in, success or failure out.
    async fn delete_candidate_account(&self, password: &str) -> Result<(), ClientError>;
    async fn delete_employer_account(&self, password: &str) -> Result<(), ClientError>;

    async fn submit_application(
        &self,
        submission: &ApplicationSubmission,
    ) -> Result<(), ClientError>;
}

// ── Wire envelopes ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SettingsEnvelope {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    settings: Option<PartialSettings>,
}

#[derive(Debug, Deserialize)]
struct UpdateEnvelope {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    user: Option<UserProfile>,
}

#[derive(Debug, Serialize)]
struct PasswordChangeBody<'a> {
    current_password: &'a str,
    new_password: &'a str,
}

#[derive(Debug, Serialize)]
struct PasswordBody<'a> {
    password: &'a str,
}

fn server_error(message: Option<String>) -> ClientError {
    ClientError::Server(message.unwrap_or_else(|| "The request could not be completed".to_string()))
}

/// HTTP implementation of `JobBoardApi`.
pub struct HttpJobBoardApi {
    client: Client,
    base_url: String,
    auth_token: String,
    upload_timeout: Duration,
}

impl HttpJobBoardApi {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.request_timeout_secs))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone(),
            upload_timeout: Duration::from_secs(config.upload_timeout_secs),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
            .bearer_auth(&self.auth_token)
    }

    /// Sends the request and decodes a `{success, message?}`-shaped envelope,
    /// converting HTTP-level and server-rejected failures to `ClientError`.
    async fn send<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<Envelope>(&body)
                .ok()
                .and_then(|e| e.message);
            debug!("Request failed with status {status}: {body}");
            return Err(ClientError::Server(
                message.unwrap_or_else(|| format!("Request failed with status {status}")),
            ));
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl JobBoardApi for HttpJobBoardApi {
    async fn get_settings(&self) -> Result<PartialSettings, ClientError> {
        let envelope: SettingsEnvelope = self
            .send(self.request(Method::GET, "/api/settings"))
            .await?;
        if !envelope.success {
            return Err(server_error(envelope.message));
        }
        Ok(envelope.settings.unwrap_or_default())
    }

    async fn update_settings(
        &self,
        doc: &SettingsDocument,
    ) -> Result<Option<UserProfile>, ClientError> {
        let envelope: UpdateEnvelope = self
            .send(self.request(Method::PUT, "/api/settings").json(doc))
            .await?;
        if !envelope.success {
            return Err(server_error(envelope.message));
        }
        Ok(envelope.user)
    }

    async fn change_password(&self, current: &str, new: &str) -> Result<(), ClientError> {
        let envelope: Envelope = self
            .send(
                self.request(Method::PUT, "/api/auth/password")
                    .json(&PasswordChangeBody {
                        current_password: current,
                        new_password: new,
                    }),
            )
            .await?;
        if !envelope.success {
            return Err(server_error(envelope.message));
        }
        Ok(())
    }

    async fn delete_candidate_account(&self, password: &str) -> Result<(), ClientError> {
        let envelope: Envelope = self
            .send(
                self.request(Method::DELETE, "/api/candidates/me")
                    .json(&PasswordBody { password }),
            )
            .await?;
        if !envelope.success {
            return Err(server_error(envelope.message));
        }
        Ok(())
    }

    async fn delete_employer_account(&self, password: &str) -> Result<(), ClientError> {
        let envelope: Envelope = self
            .send(
                self.request(Method::DELETE, "/api/employers/me")
                    .json(&PasswordBody { password }),
            )
            .await?;
        if !envelope.success {
            return Err(server_error(envelope.message));
        }
        Ok(())
    }

    async fn submit_application(
        &self,
        submission: &ApplicationSubmission,
    ) -> Result<(), ClientError> {
        let resume = Part::bytes(submission.resume.bytes.to_vec())
            .file_name(submission.resume.file_name.clone())
            .mime_str(&submission.resume.content_type)?;
        let form = Form::new()
            .text("cover_letter", submission.cover_letter.clone())
            .part("resume", resume);

        let envelope: Envelope = self
            .send(
                self.request(
                    Method::POST,
                    &format!("/api/jobs/{}/applications", submission.job_id),
                )
                // Uploads get their own, longer timeout than regular calls.
                .timeout(self.upload_timeout)
                .multipart(form),
            )
            .await?;
        if !envelope.success {
            return Err(server_error(envelope.message));
        }
        Ok(())
    }
}
