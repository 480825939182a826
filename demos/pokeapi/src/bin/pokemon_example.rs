use serde::Deserialize;
use snorlax::prelude::*;
use tracing::info;

#[derive(Debug, Default)]
struct PokemonResource;

impl Resource for PokemonResource {
    fn base_uri(&self) -> &str {
        "/pokemon"
    }

    fn actions(&self) -> Vec<Action> {
        vec![Action::get("all", "/"), Action::get("get", "/{0}")]
    }
}

#[derive(Debug, Deserialize)]
struct Pokemon {
    id: u32,
    name: String,
    height: u32,
    weight: u32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let config = Config::new()
        .with_base_uri("https://pokeapi.co/api/v2")
        .with_cache(true)
        .with_debug(true);

    let client = RestClient::builder()
        .config(config)
        .resource("pokemons", PokemonResource)
        .build()?;
    info!("Client ready: {:?}", client);

    let pokemons = client.resource("pokemons")?;

    let snorlax: Pokemon = pokemons
        .call_as("get", &["snorlax"], RequestParams::default())
        .await?;
    info!(
        "#{} {} ({} dm, {} hg)",
        snorlax.id, snorlax.name, snorlax.height, snorlax.weight
    );

    let page = pokemons
        .call("all", &[], RequestParams::new().with_query("limit", 5))
        .await?;
    info!("First page: {}", page);

    match client.resource("digimons") {
        Ok(_) => info!("digimons should not be registered"),
        Err(e) => info!("Expected error: {}", e),
    }

    Ok(())
}
