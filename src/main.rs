use clap::Parser;
use repo_inspector::{
    api::{handlers::AppState, routes},
    cli::{commands, Cli, Commands},
    config::Settings,
    github::GitHubClient,
    Error, Result,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    // Logs go to stderr: stdout carries JSON results and the MCP stream
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,repo_inspector=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let settings = Settings::from_env()?;
    settings.validate()?;

    let client = GitHubClient::new(settings.github.clone())?;

    match cli.command {
        Commands::Serve { port, host } => serve(settings, client, port, host).await?,
        Commands::Mcp => commands::mcp(commands::tools_for(client)).await?,
        Commands::Whoami => commands::whoami(client).await?,
        Commands::Repos => commands::repos(&commands::tools_for(client)).await?,
        Commands::Tree {
            repo,
            path,
            max_depth,
        } => commands::tree(&commands::tools_for(client), &repo, &path, max_depth).await?,
        Commands::Cat { repo, path } => {
            commands::cat(&commands::tools_for(client), &repo, &path).await?
        }
        Commands::Files { repo } => commands::files(&commands::tools_for(client), &repo).await?,
    }

    Ok(())
}

async fn serve(
    mut settings: Settings,
    client: GitHubClient,
    port: Option<u16>,
    host: Option<String>,
) -> Result<()> {
    // Override settings with CLI arguments
    if let Some(port) = port {
        settings.server.port = port;
    }
    if let Some(host) = host {
        settings.server.host = host;
    }

    info!("Starting repo-inspector tool server");
    info!("GitHub API: {}", settings.github.api_base_url);

    let state = AppState {
        tools: commands::tools_for(client),
    };
    let app = routes::create_router(state, &settings.server);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Internal(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on {}", addr);
    info!("Tools: GET /api/tools, POST /api/tools/{{list_repos,get_repo_tree,get_file_content,list_files_in_repos}}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::Internal(format!("Server error: {e}")))?;

    info!("Shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
}
