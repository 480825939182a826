// Common utilities for integration tests

use snorlax::prelude::*;

#[derive(Debug, Default)]
pub struct PokemonResource;

impl Resource for PokemonResource {
    fn base_uri(&self) -> &str {
        "/pokemons"
    }

    fn actions(&self) -> Vec<Action> {
        vec![
            Action::get("all", "/"),
            Action::get("get", "/{0}"),
            Action::post("create", "/"),
            Action::patch("rename", "/{0}"),
        ]
    }
}

/// Creates a client against a mock server
pub fn create_test_client(base_uri: &str, config: Config) -> RestClient {
    setup_logger();
    RestClient::builder()
        .config(config.with_base_uri(base_uri))
        .resource("pokemons", PokemonResource)
        .build()
        .expect("client should build")
}
