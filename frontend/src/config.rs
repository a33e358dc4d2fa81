use anyhow::Context;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_HOST: &str = "http://localhost:3000";
pub const DEFAULT_TIME_ZONE: &str = "America/Sao_Paulo";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_HOST")]
    pub api_host: Option<String>,
    #[serde(default, alias = "TIME_ZONE")]
    pub time_zone: Option<String>,
}

impl RuntimeConfig {
    fn merge(self, other: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_host: self.api_host.or(other.api_host),
            time_zone: self.time_zone.or(other.time_zone),
        }
    }

    fn is_complete(&self) -> bool {
        self.api_host.is_some() && self.time_zone.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub api_host: String,
    pub time_zone: Tz,
}

static RESOLVED: OnceLock<ResolvedConfig> = OnceLock::new();

pub fn normalize_api_host(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn parse_time_zone(raw: &str) -> Option<Tz> {
    raw.trim().parse::<Tz>().ok()
}

fn default_time_zone() -> Tz {
    parse_time_zone(DEFAULT_TIME_ZONE).unwrap_or(Tz::UTC)
}

/// Applies the fallbacks for anything the runtime sources left unset.
pub fn resolve(cfg: RuntimeConfig) -> ResolvedConfig {
    let api_host = cfg
        .api_host
        .as_deref()
        .and_then(normalize_api_host)
        .or_else(|| option_env!("API_HOST").and_then(normalize_api_host))
        .unwrap_or_else(|| DEFAULT_API_HOST.to_string());
    let time_zone = match cfg.time_zone.as_deref() {
        Some(raw) => parse_time_zone(raw).unwrap_or_else(|| {
            log::warn!("Unknown time zone '{}', using {}", raw, DEFAULT_TIME_ZONE);
            default_time_zone()
        }),
        None => default_time_zone(),
    };
    ResolvedConfig {
        api_host,
        time_zone,
    }
}

#[cfg(target_arch = "wasm32")]
mod globals {
    use super::RuntimeConfig;

    fn read_global(name: &str) -> Option<js_sys::Object> {
        let w = web_sys::window()?;
        let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        Some(js_sys::Object::from(any))
    }

    fn read_key(obj: &js_sys::Object, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(obj, &(*key).into())
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
                .and_then(|v| v.as_string())
        })
    }

    fn from_global(name: &str) -> RuntimeConfig {
        match read_global(name) {
            Some(obj) => RuntimeConfig {
                api_host: read_key(&obj, &["API_HOST", "api_host"]),
                time_zone: read_key(&obj, &["TIME_ZONE", "time_zone"]),
            },
            None => RuntimeConfig::default(),
        }
    }

    // window.__USER_ADMIN_ENV (env.js) wins over window.__USER_ADMIN_CONFIG.
    pub fn snapshot() -> RuntimeConfig {
        from_global("__USER_ADMIN_ENV").merge(from_global("__USER_ADMIN_CONFIG"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod globals {
    use super::RuntimeConfig;

    pub fn snapshot() -> RuntimeConfig {
        RuntimeConfig::default()
    }
}

async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    #[cfg(target_arch = "wasm32")]
    let url = {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .context("window origin is unavailable")?;
        format!("{}/config.json", origin)
    };
    #[cfg(not(target_arch = "wasm32"))]
    let url = String::from("http://localhost/config.json");

    let resp = reqwest::get(&url)
        .await
        .with_context(|| format!("failed to request {}", url))?;
    if !resp.status().is_success() {
        anyhow::bail!("{} answered with status {}", url, resp.status());
    }
    resp.json::<RuntimeConfig>()
        .await
        .context("config.json is not valid JSON")
}

pub async fn await_config() -> &'static ResolvedConfig {
    if let Some(cached) = RESOLVED.get() {
        return cached;
    }
    let mut cfg = globals::snapshot();
    if !cfg.is_complete() && cfg!(target_arch = "wasm32") {
        match fetch_runtime_config().await {
            Ok(file_cfg) => cfg = cfg.merge(file_cfg),
            Err(err) => log::warn!("Runtime config unavailable: {:#}", err),
        }
    }
    let resolved = resolve(cfg);
    log::info!(
        "API host resolved to {} (time zone {})",
        resolved.api_host,
        resolved.time_zone
    );
    RESOLVED.get_or_init(|| resolved)
}

pub async fn await_api_host() -> String {
    await_config().await.api_host.clone()
}

/// Time zone used for rendering timestamps; defaults until config has loaded.
pub fn current_time_zone() -> Tz {
    RESOLVED
        .get()
        .map(|cfg| cfg.time_zone)
        .unwrap_or_else(default_time_zone)
}

pub async fn init() {
    let _ = await_config().await;
}
