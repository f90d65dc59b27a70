//! CLI command implementations

use std::sync::Arc;

use anyhow::Context;
use clap::Subcommand;
use oogleg_core::config::{ApiConfig, WebConfig};
use oogleg_core::{HttpSearchApi, OoglegConfig, SearchOutcome, SearchPage};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::terminal::{Input, parse_line, render};

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run one search and print the results page
    Search {
        /// Query to search for
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
        /// Base URL of the search API
        #[arg(long)]
        api_url: Option<String>,
    },
    /// Use the search page from the terminal
    Interactive {
        /// Base URL of the search API
        #[arg(long)]
        api_url: Option<String>,
    },
    /// Host the search page in the browser
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,
        /// Base URL of the search API
        #[arg(long, conflicts_with = "demo")]
        api_url: Option<String>,
        /// Answer searches with the built-in demo API on the same server
        #[arg(long)]
        demo: bool,
    },
    /// Run the demo search API on its own
    DemoApi {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to [default: 8080]
        #[arg(short, long)]
        port: Option<u16>,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns an error for invalid configuration or when a server cannot run
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Search { query, api_url } => run_search(query.join(" "), api_url).await,
        Commands::Interactive { api_url } => run_interactive(api_url).await,
        Commands::Serve {
            host,
            port,
            api_url,
            demo,
        } => run_serve(host, port, api_url, demo).await,
        Commands::DemoApi { host, port } => {
            let mut web = load_config(None)?.demo_api;
            apply_bind_flags(&mut web, host, port);
            oogleg_web::run_demo_api(&web).await?;
            Ok(())
        }
    }
}

/// Loads configuration, letting `api_url` override the environment.
///
/// # Errors
/// - `ConfigError` - Invalid environment override or API URL
pub fn load_config(api_url: Option<&str>) -> anyhow::Result<OoglegConfig> {
    let mut config = OoglegConfig::from_env().context("Invalid environment configuration")?;
    if let Some(url) = api_url {
        config.api = ApiConfig::with_base_url(url)?;
    }
    Ok(config)
}

fn open_page(config: &OoglegConfig) -> anyhow::Result<SearchPage> {
    let api = HttpSearchApi::new(&config.api)?;
    Ok(SearchPage::new(Arc::new(api)))
}

/// Runs one search and prints the results page.
///
/// # Errors
/// Returns an error for invalid configuration
pub async fn run_search(query: String, api_url: Option<String>) -> anyhow::Result<()> {
    let config = load_config(api_url.as_deref())?;
    let page = open_page(&config)?;

    page.set_query(query);
    if page.search().await == SearchOutcome::Failed {
        eprintln!("Search failed; run with --log-level debug for details.");
    }

    print!("{}", render(&page.view()));
    Ok(())
}

/// What the prompt does after one line of input.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Notice(String),
    Quit,
}

/// Applies one line of input to `page`.
///
/// Affordances follow the layout: `:lucky` only exists on the landing page
/// and `:reset` only on the results page.
async fn apply_input(page: &SearchPage, input: Input) -> Step {
    match input {
        Input::Query(query) => {
            page.set_query(query);
            page.search().await;
        }
        Input::Search => {
            page.search().await;
        }
        Input::Lucky => {
            if page.snapshot().has_searched {
                return Step::Notice("Lucky queries are only offered before searching.".into());
            }
            page.advance_lucky();
        }
        Input::Clear => page.clear_query(),
        Input::Reset => {
            if !page.snapshot().has_searched {
                return Step::Notice("Nothing to reset yet.".into());
            }
            page.reset();
        }
        Input::Quit => return Step::Quit,
        Input::Unknown(command) => return Step::Notice(format!("Unknown command {command}")),
    }
    Step::Continue
}

/// Interactive terminal page.
///
/// The page is redrawn by a subscriber task whenever its state changes.
///
/// # Errors
/// Returns an error for invalid configuration or unreadable stdin
pub async fn run_interactive(api_url: Option<String>) -> anyhow::Result<()> {
    let config = load_config(api_url.as_deref())?;
    let page = open_page(&config)?;

    let mut updates = page.subscribe();
    let renderer = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let view = oogleg_core::PageView::from_state(&updates.borrow_and_update());
            println!("{}", render(&view));
        }
    });

    println!("{}", render(&page.view()));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        match apply_input(&page, parse_line(&line)).await {
            Step::Continue => {}
            Step::Notice(notice) => println!("{notice}"),
            Step::Quit => break,
        }
    }

    drop(page);
    renderer.await?;
    Ok(())
}

/// Hosts the search page, optionally with the demo API on the same server.
///
/// # Errors
/// Returns an error for invalid configuration or when the server cannot run
pub async fn run_serve(
    host: Option<String>,
    port: Option<u16>,
    api_url: Option<String>,
    demo: bool,
) -> anyhow::Result<()> {
    let mut config = load_config(api_url.as_deref())?;
    apply_bind_flags(&mut config.web, host, port);
    if demo {
        config.api = ApiConfig::with_base_url(&self_url(&config.web))?;
    }

    tracing::info!(api = config.api.base_url(), "Using search API");
    let api = Arc::new(HttpSearchApi::new(&config.api)?);
    oogleg_web::run_server(&config.web, api, demo).await?;
    Ok(())
}

/// Layers `--host`/`--port` over the configured bind address.
fn apply_bind_flags(web: &mut WebConfig, host: Option<String>, port: Option<u16>) {
    if let Some(host) = host {
        web.host = host;
    }
    if let Some(port) = port {
        web.port = port;
    }
}

/// URL at which this process reaches its own web server.
fn self_url(web: &WebConfig) -> String {
    let host = match web.host.as_str() {
        "0.0.0.0" | "::" | "[::]" => "127.0.0.1",
        other => other,
    };
    format!("http://{host}:{}", web.port)
}
