use url::Url;

/// Path prefix the PDF page is mounted under in production.
pub const PROD_PREFIX: &str = "/apps/propertydb";
/// Prefix used when the tool runs on a local development origin.
pub const DEV_PREFIX: &str = "/propertydb-dev";

/// Deterministic shareable link for one record:
/// `<origin><prefix>/download-pdf?id=<id>`.
pub fn build_share_link(origin: &str, id: i64) -> String {
    let prefix = if is_dev_origin(origin) {
        DEV_PREFIX
    } else {
        PROD_PREFIX
    };
    format!("{}{}/download-pdf?id={}", origin.trim_end_matches('/'), prefix, id)
}

/// A local development origin is anything bound to a loopback-style host.
pub fn is_dev_origin(origin: &str) -> bool {
    match Url::parse(origin) {
        Ok(url) => matches!(
            url.host_str(),
            Some("localhost") | Some("127.0.0.1") | Some("0.0.0.0")
        ),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_origin_uses_dev_prefix() {
        assert_eq!(
            build_share_link("http://localhost:3000", 77),
            "http://localhost:3000/propertydb-dev/download-pdf?id=77"
        );
        assert_eq!(
            build_share_link("http://127.0.0.1:3000/", 5),
            "http://127.0.0.1:3000/propertydb-dev/download-pdf?id=5"
        );
    }

    #[test]
    fn production_origin_uses_fixed_prefix() {
        assert_eq!(
            build_share_link("https://apps.mondus.group", 1234),
            "https://apps.mondus.group/apps/propertydb/download-pdf?id=1234"
        );
    }

    #[test]
    fn dev_detection() {
        assert!(is_dev_origin("http://localhost:8080"));
        assert!(is_dev_origin("http://0.0.0.0:3000"));
        assert!(!is_dev_origin("https://example.com"));
        assert!(!is_dev_origin("not a url"));
    }
}
