use serde::Serialize;
use snorlax::prelude::*;

#[derive(Serialize)]
struct NewPokemon<'a> {
    name: &'a str,
    level: u8,
}

#[test]
fn test_request_params_builder() {
    let params = RequestParams::new()
        .with_query("limit", 20)
        .with_query("offset", "40")
        .with_body(&NewPokemon {
            name: "eevee",
            level: 5,
        })
        .unwrap()
        .with_header("X-Trace", "abc")
        .unwrap();

    assert_eq!(
        params.query,
        vec![
            ("limit".to_string(), "20".to_string()),
            ("offset".to_string(), "40".to_string())
        ]
    );
    assert_eq!(params.body.as_ref().unwrap()["name"], "eevee");
    assert_eq!(params.headers["x-trace"], "abc");
}

#[test]
fn test_request_params_invalid_header() {
    let result = RequestParams::new().with_header("X-Trace", "line\nbreak");
    assert!(matches!(result, Err(AppError::InvalidHeader(_))));
}

#[test]
fn test_api_request_with_params() {
    let request = ApiRequest::new(Method::GET, "/pokemons")
        .with_params(RequestParams::new().with_query("limit", 1));
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, "/pokemons");
    assert_eq!(request.query.len(), 1);
    assert!(request.body.is_none());
}
