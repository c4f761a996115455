//! `vmware_workstation_vminfos`: read-only VM inventory queries

use super::{non_empty, resolve_target, ConnectionArgs, Module, ModuleError, ModuleResult};
use crate::api::vms::{param_path, restrictions_path, vm_path, VMS_PATH};
use crate::api::AnsibleBool;
use async_trait::async_trait;
use serde::Deserialize;

/// `param` value meaning "no parameter requested"
pub const PARAM_UNSET: &str = "no";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VmInfosArgs {
    #[serde(flatten)]
    pub connection: ConnectionArgs,
    #[serde(default)]
    pub target_vm: Option<String>,
    #[serde(default)]
    pub target_vm_name: Option<String>,
    #[serde(default)]
    pub restrictions: AnsibleBool,
    #[serde(default)]
    pub param: Option<String>,
}

/// Pick the resource to read.
///
/// Without a VM id the whole collection is listed, whatever else was asked.
/// With one: restrictions, then a named parameter, then the VM itself.
pub fn select_path(target_vm: Option<&str>, restrictions: bool, param: Option<&str>) -> String {
    let Some(id) = target_vm.filter(|id| !id.is_empty()) else {
        return VMS_PATH.to_string();
    };

    if restrictions {
        return restrictions_path(id);
    }

    match param.filter(|p| !p.is_empty() && *p != PARAM_UNSET) {
        Some(name) => param_path(id, name),
        None => vm_path(id),
    }
}

pub struct VmInfos;

#[async_trait]
impl Module for VmInfos {
    type Args = VmInfosArgs;

    fn name(&self) -> &'static str {
        "vmware_workstation_vminfos"
    }

    async fn run(&self, args: VmInfosArgs) -> Result<ModuleResult, ModuleError> {
        let client = args.connection.client()?;

        let target = resolve_target(&client, &args.target_vm, &args.target_vm_name).await?;
        if target.is_none() && non_empty(&args.target_vm_name).is_some() {
            tracing::warn!("VM name did not resolve, listing all VMs instead");
        }

        let path = select_path(
            target.as_deref(),
            args.restrictions.as_bool(),
            args.param.as_deref(),
        );
        let infos = client.get_value(&path).await?;

        Ok(ModuleResult::unchanged(infos))
    }
}
