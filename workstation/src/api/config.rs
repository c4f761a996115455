//! HTTP client configuration for the Workstation REST API

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub validate_certs: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            validate_certs: false,
        }
    }
}

impl ClientConfig {
    pub fn with_validate_certs(mut self, validate_certs: bool) -> Self {
        self.validate_certs = validate_certs;
        self
    }

    pub fn build_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder()
            .danger_accept_invalid_certs(!self.validate_certs)
            .timeout(self.request_timeout)
            .connect_timeout(self.connect_timeout)
            .build()
    }
}
