//! Network adapter API: `/api/vms/{id}/nic` and `/api/vms/{id}/ip`

use crate::api::{client::Client, error::ApiError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Network adapter attachment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NicType {
    Custom,
    Bridged,
    Nat,
    Hostonly,
}

impl fmt::Display for NicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NicType::Custom => "custom",
            NicType::Bridged => "bridged",
            NicType::Nat => "nat",
            NicType::Hostonly => "hostonly",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NicDevice {
    pub index: u32,
    #[serde(rename = "type")]
    pub nic_type: String,
    #[serde(default)]
    pub vmnet: String,
    #[serde(rename = "macAddress", default)]
    pub mac_address: String,
}

/// Response from GET /api/vms/{id}/nic
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NicDevices {
    pub num: u32,
    #[serde(default)]
    pub nics: Vec<NicDevice>,
}

/// Response from GET /api/vms/{id}/ip
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NicIp {
    pub ip: String,
}

/// Request body for creating or updating an adapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NicRequest {
    #[serde(rename = "type")]
    pub nic_type: NicType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vmnet: Option<String>,
}

impl NicRequest {
    /// Only custom adapters name a vmnet, the others ignore it
    pub fn new(nic_type: NicType, vmnet: Option<String>) -> Self {
        let vmnet = match nic_type {
            NicType::Custom => vmnet,
            _ => None,
        };
        Self { nic_type, vmnet }
    }
}

pub struct NicApi<'a> {
    client: &'a Client,
    vm_id: String,
}

impl<'a> NicApi<'a> {
    pub fn new(client: &'a Client, vm_id: &str) -> Self {
        Self {
            client,
            vm_id: vm_id.to_string(),
        }
    }

    fn collection_path(&self) -> String {
        format!("{}/nic", super::vm_path(&self.vm_id))
    }

    fn item_path(&self, index: u32) -> String {
        format!("{}/{}", self.collection_path(), index)
    }

    /// GET /api/vms/{id}/nic
    pub async fn list(&self) -> Result<NicDevices, ApiError> {
        self.client.get(&self.collection_path()).await
    }

    /// GET /api/vms/{id}/nic, body untouched
    pub async fn list_value(&self) -> Result<serde_json::Value, ApiError> {
        self.client.get_value(&self.collection_path()).await
    }

    /// GET /api/vms/{id}/ip
    pub async fn ip(&self) -> Result<NicIp, ApiError> {
        let path = format!("{}/ip", super::vm_path(&self.vm_id));
        self.client.get(&path).await
    }

    /// POST /api/vms/{id}/nic
    pub async fn create(&self, request: &NicRequest) -> Result<serde_json::Value, ApiError> {
        self.client.post(&self.collection_path(), request).await
    }

    /// PUT /api/vms/{id}/nic/{index}
    pub async fn update(
        &self,
        index: u32,
        request: &NicRequest,
    ) -> Result<serde_json::Value, ApiError> {
        self.client.put(&self.item_path(index), request).await
    }

    /// DELETE /api/vms/{id}/nic/{index}
    pub async fn delete(&self, index: u32) -> Result<serde_json::Value, ApiError> {
        self.client.delete(&self.item_path(index)).await
    }
}
