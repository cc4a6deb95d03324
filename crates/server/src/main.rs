//! reelgate - backend gateway for embedding, vector search and TMDB passthrough.

use server::GatewayConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = GatewayConfig::load()?;
    server::start_server(config).await?;
    Ok(())
}
