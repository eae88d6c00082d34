//! catalog - browse the movie/actor catalog from a terminal
//!
//! Runs the same load/navigate flow as the web page against a live
//! backend, using a pre-issued access token in place of the login redirect.

use anyhow::Context;
use catalog_client::view::{actors, movies};
use catalog_client::{
    ApiClient, CatalogApi, CatalogApp, ClientConfig, Resource, Screen, StaticIdentityProvider,
    UserProfile, compute_visibility, logger,
};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "catalog", version, about = "Browse the movie/actor catalog")]
struct Cli {
    /// Access token (JWT) issued by the identity provider
    #[arg(long, env = "CATALOG_TOKEN")]
    token: Option<String>,

    /// Name shown as the logged-in user
    #[arg(long, default_value = "catalog")]
    user: String,

    /// Resource to list: movies or actors
    #[arg(long, default_value = "movies")]
    resource: Resource,

    /// Page to show (1-based)
    #[arg(long, default_value_t = 1)]
    page: u32,

    /// Backend base URL, overrides CATALOG_API_URL
    #[arg(long)]
    base_url: Option<String>,

    /// Default log level when RUST_LOG is unset
    #[arg(long, env = "CATALOG_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_logger_with_level(Some(&cli.log_level));

    let mut config = ClientConfig::from_env();
    if let Some(base_url) = cli.base_url {
        let redirect_uri = config.redirect_uri.clone();
        config = ClientConfig::new(base_url)
            .with_timeout(config.timeout)
            .with_redirect_uri(redirect_uri);
    }
    tracing::info!(base_url = %config.base_url, "Starting catalog client");

    let api = ApiClient::new(config.build_http_client()?);
    let auth = api
        .auth_config()
        .await
        .context("failed to fetch identity provider configuration")?;

    let mut provider = StaticIdentityProvider::new(auth);
    if let Some(token) = cli.token {
        provider = provider.with_session(token, UserProfile::named(cli.user));
    }

    let mut app = CatalogApp::new(provider, api, config);
    app.on_load("/").await.context("session initialization failed")?;

    if !app.session().is_authenticated() {
        let login = app.login().await?;
        println!("Not logged in. Log in at: {}", login.url);
        return Ok(());
    }

    println!("Logged in as {}", app.session().username());
    let granted: Vec<&str> = compute_visibility(app.session().permissions())
        .iter()
        .map(|a| a.class())
        .collect();
    println!("Permissions: {}", granted.join(", "));

    // the load already shows the first movie page
    let readable = app.session().can(cli.resource.read_scope());
    if readable && !app.screen().shows(cli.resource, cli.page) {
        app.open(cli.resource, cli.page).await;
    }

    match app.screen() {
        Screen::Blank => println!("Nothing to show"),
        Screen::Movies(listing) => {
            if listing.create_visible {
                println!("[{}]", movies::CREATE_BUTTON);
            }
            for card in &listing.cards {
                println!("  #{:<5} {card}", card.id);
            }
            println!("{}", listing.pagination.labels());
        }
        Screen::Actors(listing) => {
            if listing.create_visible {
                println!("[{}]", actors::CREATE_BUTTON);
            }
            for card in &listing.cards {
                println!("  #{:<5} {card}", card.id);
            }
            println!("{}", listing.pagination.labels());
        }
    }

    for notice in app.take_notices() {
        eprintln!("{notice}");
    }
    Ok(())
}
