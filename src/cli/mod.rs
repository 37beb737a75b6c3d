pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "repo-inspector")]
#[command(about = "Repository inspection tools for agents, backed by the GitHub API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP tool server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, env = "HOST")]
        host: Option<String>,
    },

    /// Serve the tools to an MCP client over stdio
    Mcp,

    /// Print the authenticated user's login and API budget
    Whoami,

    /// List the authenticated user's repositories
    Repos,

    /// Print a repository's directory tree
    Tree {
        /// Repository name
        repo: String,

        /// Directory to start from
        #[arg(long, default_value = "")]
        path: String,

        /// Directory levels to expand
        #[arg(short = 'd', long, default_value_t = crate::tools::DEFAULT_MAX_DEPTH)]
        max_depth: u32,
    },

    /// Print the decoded content of one file
    Cat {
        /// Repository name
        repo: String,

        /// File path inside the repository
        path: String,
    },

    /// List top-level entries (superseded by `tree --max-depth 0`)
    Files {
        /// Repository name
        repo: String,
    },
}
