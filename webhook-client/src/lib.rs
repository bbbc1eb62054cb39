
use chrono::Utc;
use ideapad_core::{
    CoreError, DraftSuggestions, IdeaRecord, WebhookError, PLATFORM_TAG, SOURCE_TAG,
};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, info};
use url::Url;

/// Header carrying the shared-secret credential on every outbound call.
pub const API_KEY_HEADER: &str = "x-make-apikey";

/// Primary submission payload. Every key is always present; unset fields
/// are sent as empty strings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct IdeaPayload<'a> {
    idea_or_draft: &'a str,
    post_goal: &'a str,
    tone: &'a str,
    target_audience: &'a str,
    segment: &'a str,
    theme: &'a str,
    keywords: &'a str,
    preferred_format: &'a str,
    profile: &'a str,
    additional_notes: &'a str,
    timestamp: String,
    source: &'static str,
    platform: &'static str,
}

impl<'a> IdeaPayload<'a> {
    fn from_record(idea: &'a IdeaRecord) -> Self {
        Self {
            idea_or_draft: &idea.draft_text,
            post_goal: &idea.post_goal,
            tone: &idea.tone,
            target_audience: &idea.target_audience,
            segment: &idea.segment,
            theme: &idea.theme,
            keywords: &idea.keywords,
            preferred_format: &idea.preferred_format,
            profile: &idea.profile,
            additional_notes: &idea.notes,
            timestamp: idea.created_at.to_rfc3339(),
            source: SOURCE_TAG,
            platform: PLATFORM_TAG,
        }
    }
}

/// Field-population helper request, sent to the second endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PopulateRequest<'a> {
    draft_content: &'a str,
    profile: &'a str,
    timestamp: String,
    source: &'static str,
}

/// Fire-and-forget client for the configured automation endpoints. At most
/// one attempt per invocation; resending is a caller action.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: Client,
}

impl Default for WebhookClient {
    fn default() -> Self {
        Self::new()
    }
}

impl WebhookClient {
    pub fn new() -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");
        Self { http }
    }

    /// Forwards a saved idea to the primary endpoint. The caller persists
    /// the record before invoking this; a failure here never rolls that
    /// back.
    pub async fn send_idea(
        &self,
        idea: &IdeaRecord,
        credential: &str,
        url: &str,
    ) -> Result<(), CoreError> {
        let url = checked_url(url)?;
        let payload = IdeaPayload::from_record(idea);

        info!("Forwarding idea {} to webhook", idea.id);
        let response = self
            .http
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, credential)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!("Webhook request failed: {}", e);
                WebhookError::Network {
                    reason: e.to_string(),
                }
            })?;

        interpret_status(response.status())
    }

    /// Best-effort enrichment: posts the raw draft to the second endpoint
    /// and returns whatever field suggestions come back. Never required
    /// for the idea-creation flow.
    pub async fn populate_from_draft(
        &self,
        draft_text: &str,
        profile: &str,
        credential: &str,
        url: &str,
    ) -> Result<DraftSuggestions, CoreError> {
        let url = checked_url(url)?;
        let request = PopulateRequest {
            draft_content: draft_text,
            profile,
            timestamp: Utc::now().to_rfc3339(),
            source: SOURCE_TAG,
        };

        info!("Requesting field suggestions for the current draft");
        let response = self
            .http
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, credential)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Populate request failed: {}", e);
                WebhookError::Network {
                    reason: e.to_string(),
                }
            })?;

        interpret_status(response.status())?;

        let suggestions: DraftSuggestions = response.json().await.map_err(|e| {
            error!("Failed to parse populate response: {}", e);
            WebhookError::InvalidResponse {
                details: e.to_string(),
            }
        })?;
        debug!("Received field suggestions: {:?}", suggestions);
        Ok(suggestions)
    }
}

/// Rejects blank or malformed endpoint URLs before any network activity.
fn checked_url(url: &str) -> Result<Url, CoreError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(WebhookError::UrlNotConfigured.into());
    }
    Url::parse(trimmed).map_err(|_| {
        WebhookError::InvalidUrl {
            url: trimmed.to_string(),
        }
        .into()
    })
}

/// 2xx is success, 401 is an auth failure, anything else non-2xx is a
/// server error carrying the status code.
fn interpret_status(status: StatusCode) -> Result<(), CoreError> {
    if status.is_success() {
        debug!("Webhook accepted the request: {}", status);
        Ok(())
    } else if status == StatusCode::UNAUTHORIZED {
        error!("Webhook rejected the credential");
        Err(WebhookError::Unauthorized.into())
    } else {
        error!("Webhook returned status {}", status);
        Err(WebhookError::Server {
            status_code: status.as_u16(),
        }
        .into())
    }
}
