use crate::config::AppConfig;
use crate::crm::CrmClient;
use crate::pdf::images::ImageFetcher;
use crate::router::AppCtx;

/// Context wired to an unroutable CRM endpoint, so every remote call fails
/// fast with a connection error instead of touching the network.
pub fn make_ctx() -> AppCtx {
    let config = AppConfig {
        crm_base_url: "http://127.0.0.1:9".to_string(),
        entity_type_id: 1058,
        bind_addr: "127.0.0.1:0".to_string(),
        public_origin: "http://localhost:3000".to_string(),
        image_proxy_url: None,
        header_image_url: "http://127.0.0.1:9/header.png".to_string(),
        brand: "Mondus".to_string(),
        page_size: 50,
    };

    let crm = CrmClient::new(config.crm_base_url.clone(), config.entity_type_id)
        .expect("CRM client build failed");
    let images = ImageFetcher::new(None).expect("image fetcher build failed");

    AppCtx {
        config,
        crm,
        images,
    }
}
