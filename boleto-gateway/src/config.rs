//! Environment-driven gateway configuration.

use std::env;
use std::path::PathBuf;

/// Credentials and certificate material for the Itaú API.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub client_id: String,
    pub client_secret: String,
    /// PEM-encoded client certificate.
    pub certificate_path: PathBuf,
    /// PEM-encoded private key for the certificate.
    pub key_path: PathBuf,
    /// Targets the sandbox environment when true.
    pub sandbox: bool,
}

impl GatewayConfig {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        certificate_path: impl Into<PathBuf>,
        key_path: impl Into<PathBuf>,
        sandbox: bool,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            certificate_path: certificate_path.into(),
            key_path: key_path.into(),
            sandbox,
        }
    }

    /// Loads configuration from the environment (and `.env` when present).
    ///
    /// `ITAU_CLIENT_ID`, `ITAU_CLIENT_SECRET`, `ITAU_CERTIFICATE_PATH` and
    /// `ITAU_KEY_PATH` are required; `ITAU_SANDBOX` defaults to true.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let sandbox = sandbox_flag(env::var("ITAU_SANDBOX").ok().as_deref());

        Ok(Self {
            client_id: required("ITAU_CLIENT_ID")?,
            client_secret: required("ITAU_CLIENT_SECRET")?,
            certificate_path: required("ITAU_CERTIFICATE_PATH")?.into(),
            key_path: required("ITAU_KEY_PATH")?.into(),
            sandbox,
        })
    }
}

fn required(name: &str) -> anyhow::Result<String> {
    env::var(name).map_err(|_| anyhow::anyhow!("{name} environment variable is required"))
}

/// Unset defaults to sandbox; only an explicit "false" or "0" targets
/// production.
fn sandbox_flag(raw: Option<&str>) -> bool {
    !matches!(raw, Some("false") | Some("0"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_construction() {
        let config = GatewayConfig::new("id", "secret", "/tmp/cert.pem", "/tmp/key.pem", true);
        assert_eq!(config.client_id, "id");
        assert_eq!(config.certificate_path, PathBuf::from("/tmp/cert.pem"));
        assert!(config.sandbox);
    }

    #[test]
    fn test_sandbox_flag_defaults_to_sandbox() {
        assert!(sandbox_flag(None));
        assert!(sandbox_flag(Some("true")));
        assert!(sandbox_flag(Some("1")));
        assert!(sandbox_flag(Some("")));
    }

    #[test]
    fn test_sandbox_flag_explicit_production() {
        assert!(!sandbox_flag(Some("false")));
        assert!(!sandbox_flag(Some("0")));
    }
}
