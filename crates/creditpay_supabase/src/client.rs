//! PostgREST client for Supabase
//!
//! Every request authenticates with the service-role key, sent both as the
//! `apikey` header and as a bearer token.

use creditpay_common::HTTP_CLIENT;
use creditpay_config::{env_vars::SECRET_MARKER, SupabaseConfig};
use reqwest::{header, Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error};

use crate::error::SupabaseError;
use crate::models::PostgrestError;

/// Client for the Supabase REST layer
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    client: Client,
    config: SupabaseConfig,
}

impl SupabaseClient {
    /// Create a client that uses the shared HTTP client.
    pub fn new(config: SupabaseConfig) -> Self {
        Self::with_client(config, HTTP_CLIENT.clone())
    }

    pub fn with_client(config: SupabaseConfig, client: Client) -> Self {
        Self { client, config }
    }

    /// `GET /rest/v1/{table}?{column}=eq.{value}`
    ///
    /// Returns every matching row; an empty `Vec` when nothing matches.
    pub async fn select_eq<T>(
        &self,
        table: &str,
        column: &str,
        value: &str,
    ) -> Result<Vec<T>, SupabaseError>
    where
        T: DeserializeOwned,
    {
        let url = self.table_url(table)?;
        debug!("Supabase select from {} where {} = {}", table, column, value);

        let response = self
            .authorized(self.client.get(&url))
            .query(&[(column, format!("eq.{}", value))])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(table, response).await);
        }

        let body_text = response.text().await?;
        Ok(serde_json::from_str(&body_text)?)
    }

    /// `POST /rest/v1/{table}` with `Prefer: return=minimal`
    pub async fn insert<T>(&self, table: &str, row: &T) -> Result<(), SupabaseError>
    where
        T: Serialize + ?Sized,
    {
        let url = self.table_url(table)?;
        debug!("Supabase insert into {}", table);

        let response = self
            .authorized(self.client.post(&url))
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(table, response).await);
        }
        Ok(())
    }

    fn table_url(&self, table: &str) -> Result<String, SupabaseError> {
        let base = self.config.url.trim_end_matches('/');
        if base.is_empty() || base == SECRET_MARKER {
            return Err(SupabaseError::ConfigError(
                "Supabase URL is not set".to_string(),
            ));
        }
        Ok(format!("{}/rest/v1/{}", base, table))
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        let key = &self.config.service_role_key;
        builder
            .header("apikey", key)
            .header(header::AUTHORIZATION, format!("Bearer {}", key))
            .header(header::CONTENT_TYPE, "application/json")
    }
}

async fn error_from_response(table: &str, response: Response) -> SupabaseError {
    let status = response.status();
    let body_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error from Supabase".to_string());

    let message = match serde_json::from_str::<PostgrestError>(&body_text) {
        Ok(postgrest) => {
            error!(
                "Supabase request on {} failed: {} - {} (code: {:?}, details: {:?}, hint: {:?})",
                table, status, postgrest.message, postgrest.code, postgrest.details, postgrest.hint
            );
            postgrest.message
        }
        Err(_) => {
            error!("Supabase request on {} failed: {} - {}", table, status, body_text);
            body_text
        }
    };

    SupabaseError::ApiError {
        status_code: status.as_u16(),
        message,
    }
}
