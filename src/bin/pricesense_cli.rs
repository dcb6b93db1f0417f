use std::sync::Arc;

use pricesense::{format_intent, IntentResolver, LlmPriceEstimator, PriceSenseConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::from_default_env().add_directive("pricesense=info".parse()?),
        )
        .init();

    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if query.trim().is_empty() {
        eprintln!("usage: pricesense-cli <search query>");
        std::process::exit(2);
    }

    let config = PriceSenseConfig::from_env();
    let mut resolver = IntentResolver::new(&config);
    if config.estimator_enabled {
        resolver = resolver.with_estimator(Arc::new(LlmPriceEstimator::from_config(&config)));
    }

    let intent = resolver.resolve_full(&query).await;
    let cleaned = resolver.clean(&query);

    println!("{}", format_intent(&intent));
    println!("search terms: {cleaned}");
    println!("{}", serde_json::to_string_pretty(&intent)?);

    Ok(())
}
