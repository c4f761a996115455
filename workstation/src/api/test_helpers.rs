//! Test helpers for the Workstation API

#[cfg(test)]
#[allow(dead_code)]
pub fn test_credentials() -> super::Credentials {
    super::Credentials::new("api-username", "api-password")
}

#[cfg(test)]
#[allow(dead_code)]
pub fn create_test_client(url: &str) -> super::Client {
    super::Client::new(url, &test_credentials(), false).unwrap()
}
