use std::net::SocketAddr;

use anyhow::{bail, Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub bind_addr: SocketAddr,
    pub cloud_name: String,
    pub upload_preset: String,
    pub folder: Option<String>,
    pub storage_api_base: String,
    pub max_upload_bytes: usize,
    pub allowed_origin: Option<String>,
}

impl ProxyConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_addr = get("UPLOAD_BIND_ADDR")
            .unwrap_or_else(|| "127.0.0.1:4000".to_string())
            .parse::<SocketAddr>()
            .context("UPLOAD_BIND_ADDR must be a valid host:port")?;

        let cloud_name = get("CLOUDINARY_CLOUD_NAME").context("CLOUDINARY_CLOUD_NAME is required")?;
        let upload_preset = get("CLOUDINARY_UPLOAD_PRESET").context("CLOUDINARY_UPLOAD_PRESET is required")?;

        let max_upload_bytes = match get("UPLOAD_MAX_BYTES") {
            Some(raw) => raw
                .parse::<usize>()
                .with_context(|| format!("UPLOAD_MAX_BYTES must be a byte count, got {raw:?}"))?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };
        if max_upload_bytes == 0 {
            bail!("UPLOAD_MAX_BYTES must be greater than zero");
        }

        Ok(Self {
            bind_addr,
            cloud_name,
            upload_preset,
            folder: get("CLOUDINARY_FOLDER"),
            storage_api_base: get("CLOUDINARY_API_BASE")
                .unwrap_or_else(|| "https://api.cloudinary.com/v1_1".to_string())
                .trim_end_matches('/')
                .to_string(),
            max_upload_bytes,
            allowed_origin: get("UPLOAD_ALLOWED_ORIGIN"),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_optional_keys_missing() {
        let config = ProxyConfig::from_lookup(lookup(&[
            ("CLOUDINARY_CLOUD_NAME", "demo"),
            ("CLOUDINARY_UPLOAD_PRESET", "storefront"),
        ]))
        .expect("config should parse");

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:4000");
        assert_eq!(config.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
        assert_eq!(config.storage_api_base, "https://api.cloudinary.com/v1_1");
        assert!(config.folder.is_none());
        assert!(config.allowed_origin.is_none());
    }

    #[test]
    fn overrides_are_read() {
        let config = ProxyConfig::from_lookup(lookup(&[
            ("UPLOAD_BIND_ADDR", "0.0.0.0:8080"),
            ("CLOUDINARY_CLOUD_NAME", "demo"),
            ("CLOUDINARY_UPLOAD_PRESET", "storefront"),
            ("CLOUDINARY_FOLDER", "products"),
            ("CLOUDINARY_API_BASE", "http://localhost:9000/"),
            ("UPLOAD_MAX_BYTES", "2048"),
            ("UPLOAD_ALLOWED_ORIGIN", "https://shop.example"),
        ]))
        .expect("config should parse");

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.folder.as_deref(), Some("products"));
        assert_eq!(config.storage_api_base, "http://localhost:9000");
        assert_eq!(config.max_upload_bytes, 2048);
        assert_eq!(config.allowed_origin.as_deref(), Some("https://shop.example"));
    }

    #[test]
    fn missing_credentials_fail() {
        let err = ProxyConfig::from_lookup(lookup(&[("CLOUDINARY_CLOUD_NAME", "demo")]))
            .expect_err("preset is required");
        assert!(err.to_string().contains("CLOUDINARY_UPLOAD_PRESET"));
    }

    #[test]
    fn bad_numbers_fail() {
        let result = ProxyConfig::from_lookup(lookup(&[
            ("CLOUDINARY_CLOUD_NAME", "demo"),
            ("CLOUDINARY_UPLOAD_PRESET", "storefront"),
            ("UPLOAD_MAX_BYTES", "lots"),
        ]));
        assert!(result.is_err());

        let zero = ProxyConfig::from_lookup(lookup(&[
            ("CLOUDINARY_CLOUD_NAME", "demo"),
            ("CLOUDINARY_UPLOAD_PRESET", "storefront"),
            ("UPLOAD_MAX_BYTES", "0"),
        ]));
        assert!(zero.is_err());
    }
}
