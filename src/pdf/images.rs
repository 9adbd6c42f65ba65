use crate::pdf::PdfError;
use reqwest::blocking::Client;
use std::time::Duration;

/// Fetches remotely-hosted property photos, optionally through a
/// same-origin relay (`<proxy>?url=<encoded target>`) when the deployment
/// needs one for cross-origin image access.
pub struct ImageFetcher {
    client: Client,
    proxy_base: Option<String>,
}

impl ImageFetcher {
    pub fn new(proxy_base: Option<String>) -> Result<Self, PdfError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| PdfError::Http(e.to_string()))?;

        Ok(Self { client, proxy_base })
    }

    pub fn fetch(&self, url: &str) -> Result<Vec<u8>, PdfError> {
        let target = self.request_url(url);

        let resp = self
            .client
            .get(&target)
            .send()
            .map_err(|e| PdfError::Http(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PdfError::Http(format!("{status} for {target}")));
        }

        let bytes = resp.bytes().map_err(|e| PdfError::Http(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    fn request_url(&self, url: &str) -> String {
        match &self.proxy_base {
            Some(base) => {
                let encoded: String = url::form_urlencoded::byte_serialize(url.as_bytes()).collect();
                format!("{}?url={}", base.trim_end_matches(['/', '?']), encoded)
            }
            None => url.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_fetch_uses_target_url() {
        let fetcher = ImageFetcher::new(None).unwrap();
        assert_eq!(
            fetcher.request_url("https://img.example/a.jpg"),
            "https://img.example/a.jpg"
        );
    }

    #[test]
    fn proxied_fetch_percent_encodes_the_target() {
        let fetcher = ImageFetcher::new(Some("https://apps.example/proxy/".to_string())).unwrap();
        assert_eq!(
            fetcher.request_url("https://img.example/a.jpg?x=1&y=2"),
            "https://apps.example/proxy?url=https%3A%2F%2Fimg.example%2Fa.jpg%3Fx%3D1%26y%3D2"
        );
    }
}
