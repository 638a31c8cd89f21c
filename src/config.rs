use dioxus::prelude::*;
use serde::Deserialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

pub const DEFAULT_COUNTDOWN_TARGET: &str = "2025-12-31T00:00:00Z";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub emailjs_public_key: String,
    pub emailjs_service_id: String,
    pub emailjs_template_id: String,
    pub countdown_target: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            emailjs_public_key: "I7vgSe0Ewz4PAcOrS".to_string(),
            emailjs_service_id: "service_atbbdfm".to_string(),
            emailjs_template_id: "template_rszrquf".to_string(),
            countdown_target: DEFAULT_COUNTDOWN_TARGET.to_string(),
        }
    }
}

impl SiteConfig {
    /// Countdown target as unix milliseconds. A malformed value falls back to
    /// the built-in target so the landing page still renders.
    pub fn countdown_target_ms(&self) -> i64 {
        parse_instant_ms(&self.countdown_target)
            .or_else(|err| {
                tracing::warn!("config: {err}, using {DEFAULT_COUNTDOWN_TARGET}");
                parse_instant_ms(DEFAULT_COUNTDOWN_TARGET)
            })
            .unwrap_or_default()
    }
}

pub fn parse_instant_ms(value: &str) -> Result<i64, String> {
    let instant = OffsetDateTime::parse(value.trim(), &Rfc3339)
        .map_err(|err| format!("countdown target parse failed: {err}"))?;
    Ok((instant.unix_timestamp_nanos() / 1_000_000) as i64)
}

pub fn use_site_config() -> Resource<Result<SiteConfig, String>> {
    use_resource(|| async move { fetch_site_config().await })
}

#[cfg(target_arch = "wasm32")]
async fn fetch_site_config() -> Result<SiteConfig, String> {
    match fetch_config_from("/config.json").await {
        Ok(config) => Ok(config),
        Err(first) => match fetch_config_from("/assets/config.json").await {
            Ok(config) => Ok(config),
            Err(second) => {
                tracing::debug!("config: {first}; {second}; using defaults");
                Ok(SiteConfig::default())
            }
        },
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_config_from(path: &str) -> Result<SiteConfig, String> {
    let response = gloo_net::http::Request::get(path)
        .send()
        .await
        .map_err(|err| format!("config fetch failed: {err}"))?;
    if !response.ok() {
        return Err(format!("config fetch failed: status {}", response.status()));
    }
    response
        .json::<SiteConfig>()
        .await
        .map_err(|err| format!("config decode failed: {err}"))
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_site_config() -> Result<SiteConfig, String> {
    Ok(site_config_from(|key| std::env::var(key).ok()))
}

/// Builds a config from named overrides; a bad countdown target is kept and
/// resolved by [`SiteConfig::countdown_target_ms`].
#[cfg(not(target_arch = "wasm32"))]
fn site_config_from(lookup: impl Fn(&str) -> Option<String>) -> SiteConfig {
    let defaults = SiteConfig::default();
    SiteConfig {
        emailjs_public_key: lookup("EMAILJS_PUBLIC_KEY").unwrap_or(defaults.emailjs_public_key),
        emailjs_service_id: lookup("EMAILJS_SERVICE_ID").unwrap_or(defaults.emailjs_service_id),
        emailjs_template_id: lookup("EMAILJS_TEMPLATE_ID")
            .unwrap_or(defaults.emailjs_template_id),
        countdown_target: lookup("COUNTDOWN_TARGET").unwrap_or(defaults.countdown_target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_default_target() {
        assert_eq!(parse_instant_ms("2025-12-31T00:00:00Z"), Ok(1_767_139_200_000));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: SiteConfig =
            serde_json::from_str(r#"{"countdownTarget":"2026-01-01T00:00:00Z"}"#).unwrap();
        assert_eq!(config.emailjs_service_id, "service_atbbdfm");
        assert_eq!(config.countdown_target_ms(), 1_767_225_600_000);
    }

    #[test]
    fn malformed_target_falls_back() {
        let config = SiteConfig {
            countdown_target: "soon".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(config.countdown_target_ms(), 1_767_139_200_000);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn bad_env_target_still_loads() {
        let config = site_config_from(|key| match key {
            "COUNTDOWN_TARGET" => Some("soon".to_string()),
            "EMAILJS_SERVICE_ID" => Some("service_test".to_string()),
            _ => None,
        });
        assert_eq!(config.countdown_target, "soon");
        assert_eq!(config.countdown_target_ms(), 1_767_139_200_000);
        assert_eq!(config.emailjs_service_id, "service_test");
        assert_eq!(config.emailjs_template_id, "template_rszrquf");
    }
}
