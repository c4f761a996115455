use tracing::info;
use vmware_workstation::api::{build_base_url, Client, Credentials};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();

    let username = std::env::var("VMWARE_WORKSTATION_USERNAME")
        .expect("VMWARE_WORKSTATION_USERNAME environment variable is required");
    let password = std::env::var("VMWARE_WORKSTATION_PASSWORD")
        .expect("VMWARE_WORKSTATION_PASSWORD environment variable is required");
    let api_url = std::env::var("VMWARE_WORKSTATION_API_URL")
        .unwrap_or_else(|_| "http://127.0.0.1".to_string());
    let api_port = std::env::var("VMWARE_WORKSTATION_API_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8697);

    let base_url = build_base_url(&api_url, api_port)?;
    info!("Endpoint: {}", base_url);

    let client = Client::new(&base_url, &Credentials::new(username, password), false)?;

    let vms = client.vms().list().await?;
    info!("Found {} VMs", vms.len());

    for vm in &vms {
        let power = client.vms().vm(&vm.id).power().get().await?;
        println!("{}  {}  {}", vm.id, power.power_state, vm.path);
    }

    Ok(())
}
