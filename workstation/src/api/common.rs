//! Common types and utilities for the Workstation REST API

use serde::Deserialize;

/// Media type vmrest expects in `Accept` and `Content-Type`
pub const VMREST_MEDIA_TYPE: &str = "application/vnd.vmware.vmw.rest-v1+json";

pub const DEFAULT_API_URL: &str = "http://127.0.0.1";
pub const DEFAULT_API_PORT: u16 = 8697;

/// Error body returned by vmrest on non-success responses
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(rename = "Code")]
    pub code: Option<i64>,
    #[serde(rename = "Message")]
    pub message: Option<String>,
}

#[derive(Debug, thiserror::Error)]
#[error("API error details: code={code:?}, message={message:?}")]
pub struct ApiErrorDetails {
    pub code: Option<i64>,
    pub message: Option<String>,
}

impl From<ApiErrorResponse> for ApiErrorDetails {
    fn from(resp: ApiErrorResponse) -> Self {
        Self {
            code: resp.code,
            message: resp.message,
        }
    }
}

/// Encode a single path segment (VM id, parameter name, folder id)
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Accepts a number given either as a JSON string or a JSON number; an empty
/// string reads as absent.
pub mod string_or_number {
    use serde::{Deserialize, Deserializer};
    use std::fmt::Display;
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber<T> {
        String(String),
        Number(T),
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr + Deserialize<'de>,
        T::Err: Display,
    {
        match Option::<StringOrNumber<T>>::deserialize(deserializer)? {
            Some(StringOrNumber::String(s)) if s.trim().is_empty() => Ok(None),
            Some(StringOrNumber::String(s)) => s
                .trim()
                .parse::<T>()
                .map(Some)
                .map_err(serde::de::Error::custom),
            Some(StringOrNumber::Number(n)) => Ok(Some(n)),
            None => Ok(None),
        }
    }
}

/// Boolean as Ansible hands it over: a real bool, `0`/`1`, or one of
/// `yes/no/true/false/on/off`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnsibleBool(pub bool);

impl AnsibleBool {
    pub fn as_bool(&self) -> bool {
        self.0
    }
}

impl<'de> Deserialize<'de> for AnsibleBool {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum BoolOrIntOrString {
            Bool(bool),
            Int(u8),
            String(String),
        }

        match BoolOrIntOrString::deserialize(deserializer)? {
            BoolOrIntOrString::Bool(b) => Ok(AnsibleBool(b)),
            BoolOrIntOrString::Int(0) => Ok(AnsibleBool(false)),
            BoolOrIntOrString::Int(1) => Ok(AnsibleBool(true)),
            BoolOrIntOrString::Int(_) => Err(serde::de::Error::custom("expected 0 or 1")),
            BoolOrIntOrString::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "yes" | "y" | "true" | "on" | "1" => Ok(AnsibleBool(true)),
                "no" | "n" | "false" | "off" | "0" | "" => Ok(AnsibleBool(false)),
                other => Err(serde::de::Error::custom(format!(
                    "invalid boolean value: {}",
                    other
                ))),
            },
        }
    }
}
