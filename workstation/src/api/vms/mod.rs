//! VM inventory API: `/api/vms` and its sub-resources

use crate::api::{client::Client, common::segment, error::ApiError};
use serde::{Deserialize, Serialize};

mod nic;
mod power;
mod shared_folders;

pub use nic::{NicApi, NicDevice, NicDevices, NicIp, NicRequest, NicType};
pub use power::{PowerApi, PowerOperation, PowerState};
pub use shared_folders::{
    FolderAccess, SharedFolder, SharedFolderRequest, SharedFolderUpdate, SharedFoldersApi,
};

/// Item in the VM list response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VmSummary {
    pub id: String,
    pub path: String,
}

/// Response from GET /api/vms/{id}/params/{name}
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VmParameter {
    pub name: String,
    pub value: String,
}

pub struct VmsApi<'a> {
    client: &'a Client,
}

impl<'a> VmsApi<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// GET /api/vms
    pub async fn list(&self) -> Result<Vec<VmSummary>, ApiError> {
        self.client.get("/api/vms").await
    }

    pub fn vm(&self, id: &str) -> VmApi<'a> {
        VmApi {
            client: self.client,
            id: id.to_string(),
        }
    }
}

pub struct VmApi<'a> {
    client: &'a Client,
    id: String,
}

impl<'a> VmApi<'a> {
    /// GET /api/vms/{id}
    pub async fn get(&self) -> Result<serde_json::Value, ApiError> {
        self.client.get_value(&vm_path(&self.id)).await
    }

    /// GET /api/vms/{id}/restrictions
    pub async fn restrictions(&self) -> Result<serde_json::Value, ApiError> {
        self.client.get_value(&restrictions_path(&self.id)).await
    }

    /// GET /api/vms/{id}/params/{name}
    pub async fn param(&self, name: &str) -> Result<VmParameter, ApiError> {
        self.client.get(&param_path(&self.id, name)).await
    }

    pub fn nics(&self) -> NicApi<'a> {
        NicApi::new(self.client, &self.id)
    }

    pub fn shared_folders(&self) -> SharedFoldersApi<'a> {
        SharedFoldersApi::new(self.client, &self.id)
    }

    pub fn power(&self) -> PowerApi<'a> {
        PowerApi::new(self.client, &self.id)
    }
}

pub const VMS_PATH: &str = "/api/vms";

pub fn vm_path(id: &str) -> String {
    format!("{}/{}", VMS_PATH, segment(id))
}

pub fn restrictions_path(id: &str) -> String {
    format!("{}/restrictions", vm_path(id))
}

pub fn param_path(id: &str, name: &str) -> String {
    format!("{}/params/{}", vm_path(id), segment(name))
}

#[cfg(test)]
#[path = "vms_test.rs"]
mod vms_test;
