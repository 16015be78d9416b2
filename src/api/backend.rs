use super::Backend;
use crate::libs::config::ConfigModule;
use crate::libs::entry::{ArbeitszeitEntry, Decision, EntryId, TimeEntry, TimeEntryDraft};
use crate::libs::error::{Error, Result};
use crate::libs::messages::Message;
use crate::msg_print;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

const WORK_TIMES_URL: &str = "arbeitszeiten";
const TIME_ENTRIES_URL: &str = "time-entries";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Serialize)]
struct DecisionRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a str>,
}

pub struct BackendClient {
    client: Client,
    config: BackendConfig,
}

impl BackendClient {
    /// Builds a client whose every request is bounded by the configured timeout.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        if config.api_url.trim().is_empty() {
            return Err(Error::Config(Message::BackendNotConfigured.to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .user_agent(format!("{}/{}", APP_METADATA_NAME, APP_METADATA_VERSION))
            .build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_url.trim_end_matches('/'), path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.config.auth_token.trim() {
            "" => request,
            token => request.bearer_auth(token),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let res = self.authorize(self.client.get(&url)).send().await?;
        let res = Self::ensure_success("GET", &url, res)?;
        Ok(res.json::<T>().await?)
    }

    async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<()> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let res = self.authorize(self.client.post(&url)).json(body).send().await?;
        Self::ensure_success("POST", &url, res)?;
        Ok(())
    }

    fn ensure_success(method: &str, url: &str, res: Response) -> Result<Response> {
        let status = res.status();
        if !status.is_success() {
            return Err(Error::Fetch(format!("{} {} returned {}", method, url, status)));
        }
        Ok(res)
    }
}

impl Backend for BackendClient {
    async fn fetch_work_times(&self) -> Result<Vec<ArbeitszeitEntry>> {
        self.get_json(WORK_TIMES_URL).await
    }

    async fn fetch_time_entries(&self) -> Result<Vec<TimeEntry>> {
        self.get_json(TIME_ENTRIES_URL).await
    }

    async fn decide(&self, id: &EntryId, decision: Decision, comment: Option<&str>) -> Result<()> {
        let path = format!("{}/{}/{}", TIME_ENTRIES_URL, id, decision.endpoint());
        self.post_json(&path, &DecisionRequest { comment }).await
    }

    async fn create_entry(&self, draft: &TimeEntryDraft) -> Result<()> {
        let submission = draft.submission()?;
        self.post_json(TIME_ENTRIES_URL, &submission).await
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BackendConfig {
    pub api_url: String,
    #[serde(default)]
    pub auth_token: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_url: APP_METADATA_DEFAULT_API_URL.to_string(),
            auth_token: "".to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl BackendConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "backend".to_string(),
            name: "Backend API".to_string(),
        }
    }

    pub fn init(config: &Option<BackendConfig>) -> anyhow::Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleBackend);
        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptBackendApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
            auth_token: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptBackendAuthToken.to_string())
                .default(config.auth_token)
                .allow_empty(true)
                .interact_text()?,
            timeout_secs: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptBackendTimeout.to_string())
                .default(config.timeout_secs)
                .interact_text()?,
        })
    }
}
