//! Guided WebSocket cleanup monitoring flow.
//!
//! Walks a human operator through the manual test: observe the baseline,
//! connect the mobile app, let the tracked bus arrive, then re-poll the
//! backend a few times to see whether the session record is released.

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::sleep;
use tracing::{error, warn};

use crate::config::Config;
use crate::connectors::MetricsClient;
use crate::monitoring::SessionMetric;
use crate::report::print_active_sessions;

/// Fetch the session list, degrading to an empty list on failure so a flaky
/// backend never aborts a monitoring run mid-test.
pub async fn poll_sessions(client: &MetricsClient) -> Vec<SessionMetric> {
    match client.session_metrics().await {
        Ok(sessions) => sessions,
        Err(e) => {
            error!("failed to fetch sessions: {e:#}");
            Vec::new()
        }
    }
}

async fn wait_for_enter() -> Result<()> {
    let mut line = String::new();
    BufReader::new(tokio::io::stdin()).read_line(&mut line).await?;
    Ok(())
}

pub async fn run(config: &Config) -> Result<()> {
    let client = MetricsClient::new(&config.base_url, config.request_timeout())?;

    println!("WebSocket Cleanup Monitoring Tool");
    println!("=================================\n");

    println!("Step 1: Checking initial state...");
    if let Err(e) = client.current_metrics().await {
        warn!("metrics endpoint not responding: {e:#}");
    }
    print_active_sessions(&poll_sessions(&client).await);

    println!("\nStep 2: Connect with the mobile app and start tracking a bus...");
    println!("   Instructions:");
    println!("   1. Open the app");
    println!("   2. Select \"Track Bus\"");
    println!("   3. Choose a bus (e.g. C5)");
    println!("   4. Select direction (Northbound/Southbound)");
    println!("   5. Select a bus stop");
    println!("   6. Wait for tracking to start");
    println!("\nPress Enter when tracking has started...");
    wait_for_enter().await?;

    println!("\nChecking sessions after connection...");
    print_active_sessions(&poll_sessions(&client).await);

    println!("\nStep 3: Wait for the bus to arrive or trigger cleanup manually...");
    println!("   Instructions:");
    println!("   1. Wait for the bus to reach its destination (distance < 100m)");
    println!("   2. The \"Bus Has Arrived!\" modal should appear");
    println!("   3. Dismiss it with \"Go Home\" or \"Track Another Bus\"");
    println!("\nPress Enter after the arrival modal has been dismissed...");
    wait_for_enter().await?;

    println!("\nChecking sessions after cleanup should have occurred...");
    print_active_sessions(&poll_sessions(&client).await);

    // Cleanup may lag the disconnect; keep sampling on a fixed cadence.
    for round in 1..=config.recheck_count {
        let waited = u64::from(round) * config.recheck_step_secs;
        println!("\nWaiting {waited} seconds and checking again...");
        sleep(config.recheck_step()).await;
        print_active_sessions(&poll_sessions(&client).await);
    }

    println!("\nTest completed.");
    println!("\nSummary:");
    println!("   - Sessions still active after arrival point to a cleanup issue");
    println!("   - Sessions properly closed mean the cleanup is working correctly");
    println!("   - Check the app's console logs for debug messages about cleanup");

    Ok(())
}
