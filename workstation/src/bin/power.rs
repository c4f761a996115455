use std::process::ExitCode;
use vmware_workstation::modules::{run_main, PowerMgmt};

#[tokio::main]
async fn main() -> ExitCode {
    run_main(PowerMgmt).await
}
