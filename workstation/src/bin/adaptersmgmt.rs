use std::process::ExitCode;
use vmware_workstation::modules::{run_main, AdaptersMgmt};

#[tokio::main]
async fn main() -> ExitCode {
    run_main(AdaptersMgmt).await
}
