//! Ansible binary modules built on the Workstation API client
//!
//! A binary module receives the path of a JSON arguments file as its only
//! command-line argument and prints one JSON result object on stdout.

pub mod adapters;
pub mod folders;
pub mod power;
pub mod vminfos;

use crate::api::common::string_or_number;
use crate::api::{
    build_base_url, AnsibleBool, ApiError, Client, Credentials, DEFAULT_API_PORT,
    DEFAULT_API_URL,
};
use crate::descriptor;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::process::ExitCode;
use thiserror::Error;

pub use adapters::AdaptersMgmt;
pub use folders::FoldersMgmt;
pub use power::PowerMgmt;
pub use vminfos::VmInfos;

pub const USERNAME_ENV: &str = "VMWARE_WORKSTATION_USERNAME";
pub const PASSWORD_ENV: &str = "VMWARE_WORKSTATION_PASSWORD";
pub const API_URL_ENV: &str = "VMWARE_WORKSTATION_API_URL";
pub const API_PORT_ENV: &str = "VMWARE_WORKSTATION_API_PORT";
pub const LOG_ENV: &str = "VMWARE_WORKSTATION_LOG";

#[derive(Debug, Error)]
pub enum ModuleError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("{0}")]
    MissingParameter(String),

    #[error("Invalid module arguments: {0}")]
    InvalidArguments(String),

    #[error("No VM named {0:?} was found")]
    VmNotFound(String),

    #[error("Failed to read module arguments: {0}")]
    Io(#[from] std::io::Error),

    #[error("VM name lookup did not complete: {0}")]
    Lookup(#[from] tokio::task::JoinError),
}

impl ModuleError {
    pub(crate) fn missing(name: &str, when: &str) -> Self {
        ModuleError::MissingParameter(format!("{} is required {}", name, when))
    }
}

/// Result object printed by every module
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleResult {
    pub changed: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub failed: bool,
    pub msg: Value,
}

impl ModuleResult {
    pub fn unchanged(msg: Value) -> Self {
        Self {
            changed: false,
            failed: false,
            msg,
        }
    }

    pub fn changed(msg: Value) -> Self {
        Self {
            changed: true,
            failed: false,
            msg,
        }
    }

    pub fn failed(error: &ModuleError) -> Self {
        Self {
            changed: false,
            failed: true,
            msg: Value::String(error.to_string()),
        }
    }
}

/// One automation module: typed arguments in, result out
#[async_trait]
pub trait Module: Send + Sync {
    type Args: DeserializeOwned + Send;

    fn name(&self) -> &'static str;

    async fn run(&self, args: Self::Args) -> Result<ModuleResult, ModuleError>;
}

/// Connection arguments shared by every module
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConnectionArgs {
    #[serde(default, alias = "user")]
    pub username: Option<String>,
    #[serde(default, alias = "pass")]
    pub password: Option<String>,
    #[serde(default, alias = "apiurl")]
    pub api_url: Option<String>,
    #[serde(
        default,
        alias = "apiport",
        deserialize_with = "string_or_number::deserialize"
    )]
    pub api_port: Option<u16>,
    #[serde(default)]
    pub validate_certs: AnsibleBool,
}

impl ConnectionArgs {
    pub fn credentials(&self) -> Result<Credentials, ModuleError> {
        let username = arg_or_env(&self.username, USERNAME_ENV).ok_or_else(|| {
            ModuleError::MissingParameter(format!(
                "username is required (set in module args or {} env var)",
                USERNAME_ENV
            ))
        })?;
        let password = arg_or_env(&self.password, PASSWORD_ENV).ok_or_else(|| {
            ModuleError::MissingParameter(format!(
                "password is required (set in module args or {} env var)",
                PASSWORD_ENV
            ))
        })?;

        Ok(Credentials::new(username, password))
    }

    pub fn base_url(&self) -> Result<String, ModuleError> {
        let api_url =
            arg_or_env(&self.api_url, API_URL_ENV).unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let api_port = match self.api_port {
            Some(port) => port,
            None => match std::env::var(API_PORT_ENV).ok().filter(|v| !v.trim().is_empty()) {
                Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                    ModuleError::InvalidArguments(format!("{}={}: {}", API_PORT_ENV, raw, e))
                })?,
                None => DEFAULT_API_PORT,
            },
        };

        Ok(build_base_url(&api_url, api_port)?)
    }

    pub fn client(&self) -> Result<Client, ModuleError> {
        let credentials = self.credentials()?;
        let base_url = self.base_url()?;
        tracing::debug!(
            "Connecting to {} as {}",
            base_url,
            credentials.username()
        );

        Ok(Client::new(
            &base_url,
            &credentials,
            self.validate_certs.as_bool(),
        )?)
    }
}

fn arg_or_env(value: &Option<String>, env: &str) -> Option<String> {
    non_empty(value)
        .map(str::to_string)
        .or_else(|| std::env::var(env).ok().filter(|v| !v.is_empty()))
}

pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Turn an id and/or display name into the id requests should target.
///
/// A name that matches no VM leaves the given id (possibly none) in place.
/// Descriptors are read on the blocking pool.
pub async fn resolve_target(
    client: &Client,
    target_vm: &Option<String>,
    target_vm_name: &Option<String>,
) -> Result<Option<String>, ModuleError> {
    if let Some(name) = non_empty(target_vm_name) {
        let vms = client.vms().list().await?;
        let count = vms.len();
        let wanted = name.to_string();
        let resolved =
            tokio::task::spawn_blocking(move || descriptor::resolve_vm_id(&vms, &wanted)).await?;
        if let Some(id) = resolved {
            return Ok(Some(id));
        }
        tracing::warn!("No VM named {:?} found among {} VMs", name, count);
    }

    Ok(non_empty(target_vm).map(str::to_string))
}

/// Like [`resolve_target`], for modules that cannot act without a VM
pub(crate) async fn require_target(
    client: &Client,
    target_vm: &Option<String>,
    target_vm_name: &Option<String>,
) -> Result<String, ModuleError> {
    match resolve_target(client, target_vm, target_vm_name).await? {
        Some(id) => Ok(id),
        None => match non_empty(target_vm_name) {
            Some(name) => Err(ModuleError::VmNotFound(name.to_string())),
            None => Err(ModuleError::MissingParameter(
                "targetVM or targetVM_name is required".to_string(),
            )),
        },
    }
}

/// Parse the raw arguments file and run the module, never failing: errors
/// become a failed result.
pub async fn execute<M: Module>(module: &M, raw_args: &str) -> ModuleResult {
    let args = match parse_args::<M::Args>(raw_args) {
        Ok(args) => args,
        Err(e) => return ModuleResult::failed(&e),
    };

    match module.run(args).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("{} failed: {}", module.name(), e);
            ModuleResult::failed(&e)
        }
    }
}

/// Accepts the bare argument object as well as one wrapped in
/// `ANSIBLE_MODULE_ARGS`.
pub fn parse_args<T: DeserializeOwned>(raw_args: &str) -> Result<T, ModuleError> {
    let mut value: Value = serde_json::from_str(raw_args)
        .map_err(|e| ModuleError::InvalidArguments(e.to_string()))?;

    if let Some(inner) = value
        .as_object_mut()
        .and_then(|obj| obj.remove("ANSIBLE_MODULE_ARGS"))
    {
        value = inner;
    }

    serde_json::from_value(value).map_err(|e| ModuleError::InvalidArguments(e.to_string()))
}

/// Entry point shared by the module binaries
pub async fn run_main<M: Module>(module: M) -> ExitCode {
    init_tracing();

    let result = match std::env::args().nth(1) {
        Some(path) => match tokio::fs::read_to_string(&path).await {
            Ok(raw_args) => execute(&module, &raw_args).await,
            Err(e) => ModuleResult::failed(&ModuleError::Io(e)),
        },
        None => ModuleResult::failed(&ModuleError::MissingParameter(format!(
            "usage: {} <args-file>",
            module.name()
        ))),
    };

    let failed = result.failed;
    match serde_json::to_string(&result) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            println!(
                "{}",
                serde_json::json!({"failed": true, "changed": false, "msg": e.to_string()})
            );
            return ExitCode::FAILURE;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Logs go to stderr, stdout carries the module result
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
