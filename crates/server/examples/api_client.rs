//! Walks through the reelgate API against a running server.
//!
//! ```sh
//! cargo run -p reelgate-server --example api_client
//! ```

use reqwest::Client;
use serde_json::{json, Value};

const SERVER_URL: &str = "http://localhost:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = Client::new();

    println!("1. Health Check:");
    let resp = client.get(format!("{SERVER_URL}/health")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    println!("2. Embed two search phrases into one vector:");
    let resp = client
        .post(format!("{SERVER_URL}/api/embed"))
        .json(&json!({ "texts": ["lonely astronaut", "slow-burn sci-fi"] }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    let vector: Vec<f32> = resp.json().await?;
    println!("Dimension: {}", vector.len());
    println!();

    println!("3. Search movies by that vector:");
    let resp = client
        .post(format!("{SERVER_URL}/api/datastrax/db/movie"))
        .json(&json!({ "vector": vector }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    let movies: Vec<Value> = resp.json().await?;
    for movie in movies.iter().take(5) {
        println!("  {}", movie.get("title").unwrap_or(&Value::Null));
    }
    println!();

    println!("4. Search the library by text (store-side vectorize):");
    let resp = client
        .post(format!("{SERVER_URL}/api/datastrax/library"))
        .json(&json!({ "expression": "books about whaling voyages" }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    println!("5. Empty input is rejected:");
    let resp = client
        .post(format!("{SERVER_URL}/api/embed"))
        .json(&json!({ "texts": [] }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);

    Ok(())
}
