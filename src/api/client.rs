use crate::api::response::parse_body;
use crate::config::Config;
use crate::error::{Context7Error, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;

/// Query parameters in the order they are appended to the URL.
pub type QueryParams<'a> = [(&'a str, &'a str)];

/// Performs a single GET against the API and hands back the decoded body.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    async fn get(&self, path: &str, params: &QueryParams<'_>) -> Result<Value>;
}

pub struct Context7Client {
    client: reqwest::Client,
    api_base: String,
}

impl Context7Client {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            authorization_header(config.api_key.as_deref())?,
        );

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str());

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

/// `Bearer <key>`, or an empty value without a key. Always marked sensitive.
pub fn authorization_header(api_key: Option<&str>) -> Result<HeaderValue> {
    let mut value = match api_key {
        Some(key) => HeaderValue::from_str(&format!("Bearer {}", key))?,
        None => HeaderValue::from_static(""),
    };
    value.set_sensitive(true);
    Ok(value)
}

#[async_trait]
impl RequestExecutor for Context7Client {
    async fn get(&self, path: &str, params: &QueryParams<'_>) -> Result<Value> {
        let url = self.url_for(path);
        tracing::debug!(%url, ?params, "sending request");

        let response = self.client.get(&url).query(params).send().await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "received response");

        if status == StatusCode::OK {
            Ok(parse_body(&body))
        } else {
            Err(Context7Error::ApiError {
                status: status.as_u16(),
                body,
            })
        }
    }
}
