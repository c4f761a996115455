//! `vmware_workstation_power`: read or change a VM's power state

use super::{require_target, ConnectionArgs, Module, ModuleError, ModuleResult};
use crate::api::vms::PowerOperation;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerAction {
    #[default]
    Get,
    On,
    Off,
    Shutdown,
    Suspend,
    Pause,
    Unpause,
}

impl PowerAction {
    pub fn operation(self) -> Option<PowerOperation> {
        match self {
            PowerAction::Get => None,
            PowerAction::On => Some(PowerOperation::On),
            PowerAction::Off => Some(PowerOperation::Off),
            PowerAction::Shutdown => Some(PowerOperation::Shutdown),
            PowerAction::Suspend => Some(PowerOperation::Suspend),
            PowerAction::Pause => Some(PowerOperation::Pause),
            PowerAction::Unpause => Some(PowerOperation::Unpause),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PowerArgs {
    #[serde(flatten)]
    pub connection: ConnectionArgs,
    #[serde(default, rename = "targetVM", alias = "target_vm")]
    pub target_vm: Option<String>,
    #[serde(default, rename = "targetVM_name", alias = "target_vm_name")]
    pub target_vm_name: Option<String>,
    #[serde(default)]
    pub state: PowerAction,
}

pub struct PowerMgmt;

#[async_trait]
impl Module for PowerMgmt {
    type Args = PowerArgs;

    fn name(&self) -> &'static str {
        "vmware_workstation_power"
    }

    async fn run(&self, args: PowerArgs) -> Result<ModuleResult, ModuleError> {
        let client = args.connection.client()?;
        let vm_id = require_target(&client, &args.target_vm, &args.target_vm_name).await?;
        let vm = client.vms().vm(&vm_id);
        let power = vm.power();

        let before = power.get().await?;
        let Some(operation) = args.state.operation() else {
            return Ok(ModuleResult::unchanged(json!({ "power_state": before.power_state })));
        };

        tracing::info!("Power {} on VM {} ({})", operation, vm_id, before.power_state);
        let after = power.set(operation).await?;
        let changed = after.power_state != before.power_state;
        let msg = json!({ "power_state": after.power_state });

        Ok(if changed {
            ModuleResult::changed(msg)
        } else {
            ModuleResult::unchanged(msg)
        })
    }
}
