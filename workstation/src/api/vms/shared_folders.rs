//! Shared folder API: `/api/vms/{id}/sharedfolders`

use crate::api::{client::Client, common::segment, error::ApiError};
use serde::{Deserialize, Serialize};

/// Host access granted to the guest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderAccess {
    #[default]
    Rw,
    Ro,
}

impl FolderAccess {
    /// vmrest flag value: 4 is read-write, 0 is read-only
    pub fn flags(self) -> u32 {
        match self {
            FolderAccess::Rw => 4,
            FolderAccess::Ro => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SharedFolder {
    pub folder_id: String,
    pub host_path: String,
    pub flags: u32,
}

/// Request body for POST /api/vms/{id}/sharedfolders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharedFolderRequest {
    pub folder_id: String,
    pub host_path: String,
    pub flags: u32,
}

/// Request body for PUT /api/vms/{id}/sharedfolders/{folder}
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharedFolderUpdate {
    pub host_path: String,
    pub flags: u32,
}

pub struct SharedFoldersApi<'a> {
    client: &'a Client,
    vm_id: String,
}

impl<'a> SharedFoldersApi<'a> {
    pub fn new(client: &'a Client, vm_id: &str) -> Self {
        Self {
            client,
            vm_id: vm_id.to_string(),
        }
    }

    fn collection_path(&self) -> String {
        format!("{}/sharedfolders", super::vm_path(&self.vm_id))
    }

    fn item_path(&self, folder_id: &str) -> String {
        format!("{}/{}", self.collection_path(), segment(folder_id))
    }

    /// GET /api/vms/{id}/sharedfolders
    pub async fn list(&self) -> Result<Vec<SharedFolder>, ApiError> {
        self.client.get(&self.collection_path()).await
    }

    /// GET /api/vms/{id}/sharedfolders, body untouched
    pub async fn list_value(&self) -> Result<serde_json::Value, ApiError> {
        self.client.get_value(&self.collection_path()).await
    }

    /// POST /api/vms/{id}/sharedfolders
    pub async fn create(
        &self,
        request: &SharedFolderRequest,
    ) -> Result<serde_json::Value, ApiError> {
        self.client.post(&self.collection_path(), request).await
    }

    /// PUT /api/vms/{id}/sharedfolders/{folder}
    pub async fn update(
        &self,
        folder_id: &str,
        request: &SharedFolderUpdate,
    ) -> Result<serde_json::Value, ApiError> {
        self.client.put(&self.item_path(folder_id), request).await
    }

    /// DELETE /api/vms/{id}/sharedfolders/{folder}
    pub async fn delete(&self, folder_id: &str) -> Result<serde_json::Value, ApiError> {
        self.client.delete(&self.item_path(folder_id)).await
    }
}
