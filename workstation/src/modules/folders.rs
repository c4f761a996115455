//! `vmware_workstation_foldersmgmt`: shared folder management

use super::{non_empty, require_target, ConnectionArgs, Module, ModuleError, ModuleResult};
use crate::api::vms::{FolderAccess, SharedFolderRequest, SharedFolderUpdate};
use async_trait::async_trait;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderAction {
    List,
    Create,
    Update,
    Delete,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FoldersArgs {
    #[serde(flatten)]
    pub connection: ConnectionArgs,
    pub action: FolderAction,
    #[serde(default, rename = "targetVM", alias = "target_vm")]
    pub target_vm: Option<String>,
    #[serde(default, rename = "targetVM_name", alias = "target_vm_name")]
    pub target_vm_name: Option<String>,
    #[serde(default, rename = "targetFolder")]
    pub target_folder: Option<String>,
    #[serde(default, rename = "targetPath")]
    pub target_path: Option<String>,
    #[serde(default)]
    pub access: FolderAccess,
}

impl FoldersArgs {
    fn folder(&self) -> Result<&str, ModuleError> {
        non_empty(&self.target_folder)
            .ok_or_else(|| ModuleError::missing("targetFolder", "for create, update and delete"))
    }

    fn host_path(&self) -> Result<&str, ModuleError> {
        non_empty(&self.target_path)
            .ok_or_else(|| ModuleError::missing("targetPath", "for create and update"))
    }
}

pub struct FoldersMgmt;

#[async_trait]
impl Module for FoldersMgmt {
    type Args = FoldersArgs;

    fn name(&self) -> &'static str {
        "vmware_workstation_foldersmgmt"
    }

    async fn run(&self, args: FoldersArgs) -> Result<ModuleResult, ModuleError> {
        let client = args.connection.client()?;
        let vm_id = require_target(&client, &args.target_vm, &args.target_vm_name).await?;
        let vm = client.vms().vm(&vm_id);
        let folders = vm.shared_folders();

        match args.action {
            FolderAction::List => Ok(ModuleResult::unchanged(folders.list_value().await?)),
            FolderAction::Create => {
                let request = SharedFolderRequest {
                    folder_id: args.folder()?.to_string(),
                    host_path: args.host_path()?.to_string(),
                    flags: args.access.flags(),
                };
                tracing::info!(
                    "Sharing {} as {} on VM {}",
                    request.host_path,
                    request.folder_id,
                    vm_id
                );
                Ok(ModuleResult::changed(folders.create(&request).await?))
            }
            FolderAction::Update => {
                let folder_id = args.folder()?;
                let request = SharedFolderUpdate {
                    host_path: args.host_path()?.to_string(),
                    flags: args.access.flags(),
                };
                tracing::info!("Updating shared folder {} on VM {}", folder_id, vm_id);
                Ok(ModuleResult::changed(folders.update(folder_id, &request).await?))
            }
            FolderAction::Delete => {
                let folder_id = args.folder()?;
                tracing::info!("Removing shared folder {} on VM {}", folder_id, vm_id);
                Ok(ModuleResult::changed(folders.delete(folder_id).await?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::parse_args;
    use super::*;

    #[test]
    fn args_default_to_read_write() {
        let args: FoldersArgs = parse_args(
            r#"{"targetVM": "42", "targetFolder": "ODBG110",
                "targetPath": "C:\\Users\\qsypoq\\Desktop\\odbg110", "action": "create"}"#,
        )
        .unwrap();

        assert_eq!(args.action, FolderAction::Create);
        assert_eq!(args.access, FolderAccess::Rw);
        assert_eq!(args.folder().unwrap(), "ODBG110");
        assert_eq!(args.host_path().unwrap(), "C:\\Users\\qsypoq\\Desktop\\odbg110");
    }

    #[test]
    fn read_only_access() {
        let args: FoldersArgs = parse_args(
            r#"{"targetVM": "42", "targetFolder": "docs", "targetPath": "/srv/docs",
                "action": "update", "access": "ro"}"#,
        )
        .unwrap();
        assert_eq!(args.access.flags(), 0);
    }

    #[test]
    fn delete_requires_folder() {
        let args: FoldersArgs = parse_args(r#"{"targetVM": "42", "action": "delete"}"#).unwrap();
        let err = args.folder().unwrap_err();
        assert!(err.to_string().contains("targetFolder is required"));
    }
}
