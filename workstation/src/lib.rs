//! Ansible binary modules for the VMware Workstation Pro REST API
//!
//! The `api` module is a typed async client for vmrest, `descriptor` reads
//! VM display names out of `.vmx` files, and `modules` holds the automation
//! modules the binaries run.

pub mod api;
pub mod descriptor;
pub mod modules;

pub use api::{ApiError, Client, Credentials};
pub use modules::{Module, ModuleError, ModuleResult};
