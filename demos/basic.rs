//! Basic example demonstrating the bit.ly API client.
//!
//! Run with:
//! ```
//! BITLY_ACCESS_TOKEN=your-token cargo run --example basic
//! ```

use bitlyapi::{BitlyClient, HistoryQuery, MetricsQuery, Unit};

#[tokio::main]
async fn main() -> bitlyapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating bit.ly client...");
    let client = BitlyClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    // Shorten a URL
    println!("\n--- Shortening ---");
    let link = client.shorten("https://www.rust-lang.org/", None).await?;
    println!("{} -> {} (new: {})", link.long_url, link.url, link.new_hash);

    // Expand it again
    println!("\n--- Expanding ---");
    let expanded = client.expand(Some(&link.url), None).await?;
    println!("{} -> {}", link.url, expanded["long_url"]);

    // Clicks over the last week
    println!("\n--- Clicks (last 7 days) ---");
    let query = MetricsQuery {
        unit: Some(Unit::Day),
        units: Some(7),
        ..Default::default()
    };
    let clicks = client.link_clicks(&link.url, &query).await?;
    for bucket in clicks.as_array().into_iter().flatten() {
        println!("  {}: {}", bucket["dt"], bucket["clicks"]);
    }

    // Recent history
    println!("\n--- Recent Links ---");
    let history = client
        .user_link_history(&HistoryQuery {
            limit: Some(5),
            ..Default::default()
        })
        .await?;
    for item in history.as_array().into_iter().flatten() {
        println!("  - {} ({})", item["link"], item["long_url"]);
    }

    println!("\nDone!");
    Ok(())
}
