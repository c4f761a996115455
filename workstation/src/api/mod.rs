//! Typed client for the VMware Workstation Pro REST API (vmrest)

pub mod client;
pub mod common;
pub mod config;
pub mod error;
pub mod vms;

mod test_helpers;

pub use client::{build_base_url, Client, Credentials};
pub use common::{
    AnsibleBool, ApiErrorDetails, ApiErrorResponse, DEFAULT_API_PORT, DEFAULT_API_URL,
    VMREST_MEDIA_TYPE,
};
pub use config::ClientConfig;
pub use error::ApiError;
