//! `vmware_workstation_adaptersmgmt`: network adapter management

use super::{require_target, ConnectionArgs, Module, ModuleError, ModuleResult};
use crate::api::common::string_or_number;
use crate::api::vms::{NicRequest, NicType};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdapterAction {
    List,
    Getip,
    Update,
    Create,
    Delete,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdaptersArgs {
    #[serde(flatten)]
    pub connection: ConnectionArgs,
    pub action: AdapterAction,
    #[serde(default, rename = "targetVM", alias = "target_vm")]
    pub target_vm: Option<String>,
    #[serde(default, rename = "targetVM_name", alias = "target_vm_name")]
    pub target_vm_name: Option<String>,
    #[serde(
        default,
        rename = "targetIndex",
        deserialize_with = "string_or_number::deserialize"
    )]
    pub target_index: Option<u32>,
    #[serde(default, rename = "targetType")]
    pub target_type: Option<NicType>,
    #[serde(default, rename = "targetVMnet")]
    pub target_vmnet: Option<String>,
}

impl AdaptersArgs {
    fn index(&self) -> Result<u32, ModuleError> {
        self.target_index
            .ok_or_else(|| ModuleError::missing("targetIndex", "for update and delete"))
    }

    fn nic_request(&self) -> Result<NicRequest, ModuleError> {
        let nic_type = self
            .target_type
            .ok_or_else(|| ModuleError::missing("targetType", "for update and create"))?;

        let vmnet = super::non_empty(&self.target_vmnet).map(str::to_string);
        if nic_type == NicType::Custom && vmnet.is_none() {
            return Err(ModuleError::missing("targetVMnet", "when targetType is custom"));
        }

        Ok(NicRequest::new(nic_type, vmnet))
    }
}

pub struct AdaptersMgmt;

#[async_trait]
impl Module for AdaptersMgmt {
    type Args = AdaptersArgs;

    fn name(&self) -> &'static str {
        "vmware_workstation_adaptersmgmt"
    }

    async fn run(&self, args: AdaptersArgs) -> Result<ModuleResult, ModuleError> {
        let client = args.connection.client()?;
        let vm_id = require_target(&client, &args.target_vm, &args.target_vm_name).await?;
        let vm = client.vms().vm(&vm_id);
        let nics = vm.nics();

        match args.action {
            AdapterAction::List => Ok(ModuleResult::unchanged(nics.list_value().await?)),
            AdapterAction::Getip => {
                let ip = nics.ip().await?;
                Ok(ModuleResult::unchanged(Value::String(ip.ip)))
            }
            AdapterAction::Create => {
                let request = args.nic_request()?;
                tracing::info!("Creating {} adapter on VM {}", request.nic_type, vm_id);
                Ok(ModuleResult::changed(nics.create(&request).await?))
            }
            AdapterAction::Update => {
                let index = args.index()?;
                let request = args.nic_request()?;
                tracing::info!("Updating adapter {} on VM {}", index, vm_id);
                Ok(ModuleResult::changed(nics.update(index, &request).await?))
            }
            AdapterAction::Delete => {
                let index = args.index()?;
                tracing::info!("Deleting adapter {} on VM {}", index, vm_id);
                Ok(ModuleResult::changed(nics.delete(index).await?))
            }
        }
    }
}
