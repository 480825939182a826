use crate::common::create_test_client;
use snorlax::constants::CACHE_MIDDLEWARE_NAME;
use snorlax::prelude::*;
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_cache_dir() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    std::env::temp_dir()
        .join(format!("snorlax-cache-{}-{nanos}", std::process::id()))
        .to_string_lossy()
        .into_owned()
}

#[tokio::test]
async fn test_cacheable_response_is_served_from_cache() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/pokemons/143")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_header("cache-control", "public, max-age=600")
        .with_body(r#"{"id":143,"name":"snorlax"}"#)
        .expect(1)
        .create_async()
        .await;

    let dir = unique_cache_dir();
    let client = create_test_client(
        &server.url(),
        Config::default().with_cache(true).with_cache_dir(dir.clone()),
    );
    assert!(client.original_client().has_middleware(CACHE_MIDDLEWARE_NAME));

    let pokemons = client.resource("pokemons").unwrap();
    for _ in 0..2 {
        let value = pokemons
            .call("get", &["143"], RequestParams::new())
            .await
            .unwrap();
        assert_eq!(value["name"], "snorlax");
    }

    mock.assert_async().await;
    let _ = std::fs::remove_dir_all(dir);
}
