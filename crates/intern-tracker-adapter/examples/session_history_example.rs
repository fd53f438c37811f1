/*
[INPUT]:  User id (first argument) and optional backend base URL (second argument)
[OUTPUT]: Recent follow-up sessions of the user
[POS]:    Examples - follow-up session history
[UPDATE]: When the session listing endpoint changes
*/

use intern_tracker_adapter::*;

/// Example: list the ten most recent follow-up sessions of a user
#[tokio::main]
async fn main() {
    println!("=== Intern Tracker Session History Example ===\n");

    let mut args = std::env::args().skip(1);
    let user_id = args.next().unwrap_or_else(|| "intern-1".to_string());
    let base_url = args.next().unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let client = match InternTrackerClient::with_config_and_base_url(ClientConfig::default(), &base_url)
    {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let query = SessionListQuery {
        limit: Some(10),
        skip: None,
    };
    match client.list_followup_sessions(&user_id, &query).await {
        Ok(list) => {
            println!("✓ {} session(s) for {}", list.count, user_id);
            for session in list.sessions {
                println!(
                    "  {} [{:?}] {}/{} answered",
                    session.session_id,
                    session.status,
                    session.answered_count(),
                    session.questions.len()
                );
            }
        }
        Err(e) => println!("✗ Error: {}", e.detail()),
    }
}
