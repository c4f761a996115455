//! Power API: `/api/vms/{id}/power`

use crate::api::{client::Client, error::ApiError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Response from GET/PUT /api/vms/{id}/power
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PowerState {
    pub power_state: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerOperation {
    On,
    Off,
    Shutdown,
    Suspend,
    Pause,
    Unpause,
}

impl PowerOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            PowerOperation::On => "on",
            PowerOperation::Off => "off",
            PowerOperation::Shutdown => "shutdown",
            PowerOperation::Suspend => "suspend",
            PowerOperation::Pause => "pause",
            PowerOperation::Unpause => "unpause",
        }
    }
}

impl fmt::Display for PowerOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct PowerApi<'a> {
    client: &'a Client,
    vm_id: String,
}

impl<'a> PowerApi<'a> {
    pub fn new(client: &'a Client, vm_id: &str) -> Self {
        Self {
            client,
            vm_id: vm_id.to_string(),
        }
    }

    fn path(&self) -> String {
        format!("{}/power", super::vm_path(&self.vm_id))
    }

    /// GET /api/vms/{id}/power
    pub async fn get(&self) -> Result<PowerState, ApiError> {
        self.client.get(&self.path()).await
    }

    /// PUT /api/vms/{id}/power
    pub async fn set(&self, operation: PowerOperation) -> Result<PowerState, ApiError> {
        self.client.put_text(&self.path(), operation.as_str()).await
    }
}
