use std::env;

/// Runtime configuration, read once at startup.
///
/// Every knob has a default matching the production deployment, so a bare
/// `cargo run` talks to the real CRM. Point `CRM_BASE_URL` at a stub for
/// local experiments.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bitrix-style REST base, e.g. "https://example.group/rest/1/<token>".
    pub crm_base_url: String,
    /// Smart-process entity type the property records live under.
    pub entity_type_id: i64,
    pub bind_addr: String,
    /// Origin used when rendering shareable links into the page.
    pub public_origin: String,
    /// Same-origin relay for cross-origin image fetches; `None` fetches direct.
    pub image_proxy_url: Option<String>,
    /// Brand header illustration drawn at the top of the brochure.
    pub header_image_url: String,
    pub brand: String,
    pub page_size: i64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            crm_base_url: env_or("CRM_BASE_URL", "https://mondus.group/rest/1/dw9gd4xauhctd7ha"),
            entity_type_id: env::var("CRM_ENTITY_TYPE_ID")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1058),
            bind_addr: env_or("BIND_ADDR", "127.0.0.1:3000"),
            public_origin: env_or("PUBLIC_ORIGIN", "http://127.0.0.1:3000"),
            image_proxy_url: env::var("IMAGE_PROXY_URL").ok().filter(|v| !v.is_empty()),
            header_image_url: env_or(
                "HEADER_IMAGE_URL",
                "https://apps.mondus.group/assets/mondus-header.png",
            ),
            brand: env_or("BRAND", "Mondus"),
            page_size: env::var("PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(50),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).ok().filter(|v| !v.is_empty()).unwrap_or_else(|| default.to_string())
}
