use std::sync::Arc;

use resource_actor::tracing::setup_tracing;
use storefront::config::Config;
use storefront::http::{self, AppState};
use storefront::lifecycle::StorefrontSystem;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = Config::from_env()?;
    info!(
        addr = %config.addr,
        tokens = config.tokens.len(),
        "Starting storefront service"
    );

    let system = StorefrontSystem::new();
    let state = AppState {
        orders: system.order_client.clone(),
        ratings: system.rating_client.clone(),
        tokens: Arc::new(config.tokens),
    };

    // serve() owns the only client clones outside the system, so once it
    // returns, shutdown() can drain and join the actors.
    let served = http::serve(config.addr, state).await;
    system.shutdown().await?;
    served
}
