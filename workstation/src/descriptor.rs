//! VM descriptor (`.vmx`) parsing and display-name resolution

use crate::api::vms::VmSummary;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

fn display_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?m)^displayName\s*=\s*"([^"]*)""#).expect("display name pattern is valid")
    })
}

/// Value of the first `displayName = "..."` line of a descriptor
pub fn parse_display_name(contents: &str) -> Option<String> {
    display_name_pattern()
        .captures(contents)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Descriptors are not always UTF-8 (`.encoding = "windows-1252"`), so the
/// file is decoded lossily. The `displayName` key itself is ASCII.
pub fn read_display_name(path: impl AsRef<Path>) -> std::io::Result<Option<String>> {
    let bytes = std::fs::read(path)?;
    Ok(parse_display_name(&String::from_utf8_lossy(&bytes)))
}

/// Find the id of the VM whose descriptor carries `name` as display name.
///
/// Names are compared case-insensitively and the first match in listing
/// order wins. Descriptors that cannot be read are skipped.
pub fn resolve_vm_id(vms: &[VmSummary], name: &str) -> Option<String> {
    let wanted = name.to_lowercase();

    for vm in vms {
        let display_name = match read_display_name(&vm.path) {
            Ok(Some(display_name)) => display_name,
            Ok(None) => {
                tracing::debug!("No displayName in descriptor {}", vm.path);
                continue;
            }
            Err(e) => {
                tracing::warn!("Skipping unreadable descriptor {}: {}", vm.path, e);
                continue;
            }
        };

        if display_name.to_lowercase() == wanted {
            tracing::debug!("Resolved VM name {:?} to id {}", name, vm.id);
            return Some(vm.id.clone());
        }
    }

    tracing::debug!("No VM named {:?} among {} VMs", name, vms.len());
    None
}
