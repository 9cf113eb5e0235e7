//! # Boleto Gateway
//!
//! Outbound adapter for the Itaú boleto/PIX API: HTTPS with a mutual-TLS
//! client certificate, OAuth client-credentials authentication with token
//! caching, and the three remote operations the core depends on
//! (submission, lookup, webhook registration).
//!
//! Implements the [`boleto_types::BoletoGateway`] port.

pub mod config;

use std::fs;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reqwest::{Client, Identity, RequestBuilder};
use serde_json::{Value, json};
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use boleto_types::{BoletoGateway, GatewayError};

pub use config::GatewayConfig;

const TOKEN_URL: &str = "https://sts.itau.com.br/api/oauth/token";
const SANDBOX_BASE: &str = "https://sandbox.devportal.itau.com.br";
const PRODUCTION_BASE: &str = "https://secure.api.cloud.itau.com.br";
const BOLETO_PATH: &str = "/pix_recebimentos_conciliacoes/v2/boletos_pix";
const LOOKUP_PATH: &str = "/boletoscash/v2/boletos";
const WEBHOOK_URL: &str = "https://boletos.cloud.itau.com.br/boletos/v3/notificacoes_boletos";

/// Tokens are renewed this long before their reported expiry.
const TOKEN_SAFETY_MARGIN_SECS: i64 = 60;

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn is_valid(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }
}

/// Itaú API client with mutual-TLS authentication.
pub struct ItauGateway {
    config: GatewayConfig,
    http: Client,
    token: Mutex<Option<CachedToken>>,
}

impl ItauGateway {
    /// Builds the client, loading the certificate and key eagerly so a
    /// missing or unreadable file fails at construction, not first use.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let certificate = fs::read(&config.certificate_path).map_err(|e| {
            GatewayError::Certificate(format!(
                "cannot read {}: {e}",
                config.certificate_path.display()
            ))
        })?;
        let key = fs::read(&config.key_path).map_err(|e| {
            GatewayError::Certificate(format!("cannot read {}: {e}", config.key_path.display()))
        })?;

        let mut pem = certificate;
        pem.extend_from_slice(&key);
        let identity = Identity::from_pem(&pem)
            .map_err(|e| GatewayError::Certificate(e.to_string()))?;

        let http = Client::builder()
            .use_rustls_tls()
            .identity(identity)
            .build()
            .map_err(|e| GatewayError::Http(e.to_string()))?;

        Ok(Self {
            config,
            http,
            token: Mutex::new(None),
        })
    }

    fn base_url(&self) -> &'static str {
        if self.config.sandbox {
            SANDBOX_BASE
        } else {
            PRODUCTION_BASE
        }
    }

    /// Attempts authentication and reports whether it succeeded.
    pub async fn test_connection(&self) -> bool {
        self.authenticate().await.is_ok()
    }

    /// Common headers for an authenticated API call; flow and correlation
    /// ids are freshly generated per request.
    fn api_request(&self, builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder
            .bearer_auth(token)
            .header("x-itau-apikey", &self.config.client_id)
            .header("x-itau-correlationID", Uuid::new_v4().to_string())
            .header("x-itau-flowID", Uuid::new_v4().to_string())
    }

    async fn handle_response(&self, resp: reqwest::Response) -> Result<Value, GatewayError> {
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| GatewayError::Http(e.to_string()))?;

        if status.is_success() {
            serde_json::from_str(&body).map_err(|e| GatewayError::Http(e.to_string()))
        } else {
            Err(GatewayError::Api {
                status: status.as_u16(),
                message: extract_message(&body),
            })
        }
    }
}

/// Pulls a human-readable message out of an error body when one exists.
fn extract_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            ["mensagem", "message", "error"]
                .iter()
                .find_map(|key| v.get(key).and_then(Value::as_str).map(String::from))
        })
        .unwrap_or_else(|| body.to_string())
}

#[async_trait]
impl BoletoGateway for ItauGateway {
    async fn authenticate(&self) -> Result<String, GatewayError> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            if token.is_valid(Utc::now()) {
                debug!("Reusing cached access token");
                return Ok(token.access_token.clone());
            }
        }

        info!("Requesting new access token");
        let resp = self
            .http
            .post(TOKEN_URL)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", &self.config.client_id),
                ("client_secret", &self.config.client_secret),
            ])
            .header("x-itau-flowID", Uuid::new_v4().to_string())
            .header("x-itau-correlationID", Uuid::new_v4().to_string())
            .send()
            .await
            .map_err(|e| GatewayError::Http(e.to_string()))?;

        let body = self.handle_response(resp).await?;
        let access_token = body
            .get("access_token")
            .and_then(Value::as_str)
            .ok_or_else(|| GatewayError::Auth("no access_token in response".into()))?
            .to_string();
        let expires_in = body.get("expires_in").and_then(Value::as_i64).unwrap_or(3600);

        let token = CachedToken {
            access_token: access_token.clone(),
            expires_at: Utc::now() + Duration::seconds(expires_in - TOKEN_SAFETY_MARGIN_SECS),
        };
        info!(expires_at = %token.expires_at, "Access token obtained");
        *cached = Some(token);

        Ok(access_token)
    }

    async fn submit_boleto(&self, payload: &Value) -> Result<Value, GatewayError> {
        let token = self.authenticate().await?;
        let url = format!("{}{}", self.base_url(), BOLETO_PATH);
        info!(%url, "Submitting boleto request");

        let resp = self
            .api_request(self.http.post(&url), &token)
            .json(payload)
            .send()
            .await
            .map_err(|e| GatewayError::Http(e.to_string()))?;
        self.handle_response(resp).await
    }

    async fn fetch_boleto(
        &self,
        beneficiary_id: &str,
        our_number: &str,
    ) -> Result<Value, GatewayError> {
        let token = self.authenticate().await?;
        let url = format!("{}{}", self.base_url(), LOOKUP_PATH);

        let resp = self
            .api_request(self.http.get(&url), &token)
            .query(&[
                ("id_beneficiario", beneficiary_id),
                ("codigo_carteira", "109"),
                ("nosso_numero", our_number),
                ("view", "specific"),
            ])
            .send()
            .await
            .map_err(|e| GatewayError::Http(e.to_string()))?;
        self.handle_response(resp).await
    }

    async fn register_webhook(&self, config: &Value) -> Result<Value, GatewayError> {
        let token = self.authenticate().await?;

        let resp = self
            .api_request(self.http.post(WEBHOOK_URL), &token)
            .json(&json!({ "data": config }))
            .send()
            .await
            .map_err(|e| GatewayError::Http(e.to_string()))?;
        self.handle_response(resp).await
    }
}
