use std::env;
use std::time::Duration;

use log::debug;

use seo_inspect::{InspectorConfig, MetadataInspector};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let url = args.get(1).ok_or("Please provide a URL as an argument")?;

    let config = InspectorConfig::load().unwrap_or_default();
    debug!("config: {config:?}");

    let record = MetadataInspector::builder()
        .url(url)
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent)
        .build()
        .await?;

    println!("{}", serde_json::to_string_pretty(&record)?);

    Ok(())
}
