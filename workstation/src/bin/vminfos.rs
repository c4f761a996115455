use std::process::ExitCode;
use vmware_workstation::modules::{run_main, VmInfos};

#[tokio::main]
async fn main() -> ExitCode {
    run_main(VmInfos).await
}
