use std::process::ExitCode;
use vmware_workstation::modules::{run_main, FoldersMgmt};

#[tokio::main]
async fn main() -> ExitCode {
    run_main(FoldersMgmt).await
}
