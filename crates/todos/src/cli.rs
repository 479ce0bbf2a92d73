//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line access to the todos table.
///
/// Each invocation runs exactly one store operation, the same way a request
/// handler would.
#[derive(Debug, Parser)]
#[command(name = "todos")]
#[command(version, about, long_about = "Command-line access to the todos table.

Storage is configured through the environment:
  TODOS_TABLE         - Table name (default: todos)
  TODOS_INDEX         - Owner index name (default: todos-user-index)
  AWS_REGION          - AWS region (default: us-east-1)
  AWS_ENDPOINT_URL    - Use local DynamoDB (e.g., http://localhost:8000)")]
pub struct Cli {
    /// Output format.
    #[arg(long, default_value = "pretty", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check whether an item exists.
    Exists {
        /// Owner ID.
        #[arg(long)]
        user_id: String,
        /// Item ID.
        #[arg(long)]
        todo_id: String,
    },
    /// Get a single item.
    Get {
        /// Owner ID.
        #[arg(long)]
        user_id: String,
        /// Item ID.
        #[arg(long)]
        todo_id: String,
    },
    /// Create a new item with a generated ID.
    Create {
        /// Owner ID.
        #[arg(long)]
        user_id: String,
        /// Item title.
        #[arg(long)]
        name: String,
        /// Due date (YYYY-MM-DD).
        #[arg(long)]
        due_date: String,
    },
    /// List all items of an owner.
    List {
        /// Owner ID.
        #[arg(long)]
        user_id: String,
    },
    /// Overwrite the name, due date and completion flag of an item.
    Update {
        /// Owner ID.
        #[arg(long)]
        user_id: String,
        /// Item ID.
        #[arg(long)]
        todo_id: String,
        /// New title.
        #[arg(long)]
        name: String,
        /// New due date (YYYY-MM-DD).
        #[arg(long)]
        due_date: String,
        /// Completion flag.
        #[arg(long, action = clap::ArgAction::Set)]
        done: bool,
    },
    /// Record the attachment URL of an item.
    Attach {
        /// Owner ID.
        #[arg(long)]
        user_id: String,
        /// Item ID.
        #[arg(long)]
        todo_id: String,
        /// Attachment URL.
        #[arg(long)]
        url: String,
    },
    /// Delete an item.
    Delete {
        /// Owner ID.
        #[arg(long)]
        user_id: String,
        /// Item ID.
        #[arg(long)]
        todo_id: String,
    },
    /// Print the browser client configuration.
    ClientConfig(ClientConfigArgs),
}

/// Arguments for the browser client configuration.
#[derive(Debug, Parser)]
pub struct ClientConfigArgs {
    /// API Gateway ID of the deployed backend.
    #[arg(long, env = "TODOS_API_ID")]
    pub api_id: String,

    /// Region of the API Gateway.
    #[arg(long, env = "AWS_REGION", default_value = "us-east-1")]
    pub region: String,

    /// API Gateway stage.
    #[arg(long, default_value = "dev")]
    pub stage: String,

    /// Identity provider domain.
    #[arg(long, env = "AUTH_DOMAIN")]
    pub domain: String,

    /// Identity provider client ID.
    #[arg(long, env = "AUTH_CLIENT_ID")]
    pub client_id: String,

    /// Login callback URL.
    #[arg(long, env = "AUTH_CALLBACK_URL", default_value = "http://localhost:3000/callback")]
    pub callback_url: String,
}
