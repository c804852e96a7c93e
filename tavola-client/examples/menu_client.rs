// tavola-client/examples/menu_client.rs
// Fetch the menu from a running backend

use tavola_client::{ClientConfig, TokenStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        println!("Usage: {} <base_url> [token]", args[0]);
        println!("  Example: {} http://localhost:8080 eyJhbGci...", args[0]);
        return Ok(());
    }
    let base_url = &args[1];

    let store_path =
        std::env::var("TAVOLA_TOKEN_PATH").unwrap_or_else(|_| "./credentials".to_string());
    let store = TokenStore::new(&store_path, "token");

    // Token from the command line wins and gets persisted for next time
    let token = match args.get(2) {
        Some(token) => {
            store.save(token)?;
            Some(token.clone())
        }
        None => store.load(),
    };

    let client = ClientConfig::new(base_url).build_client();
    tracing::info!("Fetching menu from {}", client.base_url());

    let result = client.get_list("/menu", None, token.as_deref()).await;
    result.fold(
        |items| {
            tracing::info!("Fetched {} menu items", items.len());
            for item in &items {
                println!("{}", item);
            }
        },
        |failure| {
            tracing::error!(kind = %failure.kind(), "Failed to fetch menu: {}", failure);
        },
    );

    Ok(())
}
