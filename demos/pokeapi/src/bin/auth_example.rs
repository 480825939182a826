use snorlax::prelude::*;
use tracing::info;

#[derive(Debug, Default)]
struct RepositoryResource;

impl Resource for RepositoryResource {
    fn base_uri(&self) -> &str {
        "/repos"
    }

    fn actions(&self) -> Vec<Action> {
        vec![Action::get("get", "/{0}/{1}")]
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let client = RestClient::builder()
        .config(
            Config::new()
                .with_base_uri("https://api.github.com")
                .with_header("Accept", "application/vnd.github+json"),
        )
        .resource("repos", RepositoryResource)
        .build()?;

    if let Ok(token) = std::env::var("GITHUB_TOKEN") {
        client.set_authorization(&BearerAuth::new(token))?;
        info!("Using bearer authentication");
    }

    let repo = client
        .resource("repos")?
        .call("get", &["rust-lang", "rust"], RequestParams::default())
        .await?;
    info!("{} has {} stars", repo["full_name"], repo["stargazers_count"]);

    if let Some(response) = client.last_response() {
        info!(
            "Rate limit remaining: {:?}",
            response.headers.get("x-ratelimit-remaining")
        );
    }

    Ok(())
}
