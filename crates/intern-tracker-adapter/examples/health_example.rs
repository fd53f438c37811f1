/*
[INPUT]:  Backend base URL (first argument, defaults to a local backend)
[OUTPUT]: Backend health printed to stdout
[POS]:    Examples - service status query
[UPDATE]: When the health payload changes
*/

use intern_tracker_adapter::*;

/// Example: check that the backend and its database are reachable
#[tokio::main]
async fn main() {
    println!("=== Intern Tracker Health Example ===\n");

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let client = match InternTrackerClient::with_config_and_base_url(ClientConfig::default(), &base_url)
    {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created for {}\n", client.base_url());

    match client.health().await {
        Ok(status) if status.is_healthy() => println!("✓ Backend healthy: {:?}", status),
        Ok(status) => println!("✗ Backend unhealthy: {:?}", status),
        Err(e) => println!("✗ Error: {}", e.detail()),
    }
}
