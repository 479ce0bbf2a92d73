//! todos CLI entry point.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todos::cli::{Cli, ClientConfigArgs, Commands, OutputFormat};
use todos::output::{format_output, pretty};
use todos::storage::DynamoDbRepository;
use todos::{Config, TodoStore};
use todos_core::client::{api_gateway_endpoint, AuthConfig, ClientConfig};
use todos_core::todo::{CreateTodoRequest, TodoUpdate};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber. Logs go to stderr so stdout stays parseable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todos=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Commands::ClientConfig(args) = &cli.command {
        return print_client_config(args, cli.format);
    }

    let config = Config::from_env();
    tracing::debug!(
        endpoint = %config.target_display(),
        table = %config.table_name,
        index = %config.index_name,
        "Loaded storage configuration"
    );

    let repository = DynamoDbRepository::from_config(&config).await;
    let store = TodoStore::new(Arc::new(repository));

    run(&store, cli).await
}

async fn run(store: &TodoStore, cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Exists { user_id, todo_id } => {
            let exists = store.exists(&user_id, &todo_id).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&exists, cli.format)),
                OutputFormat::Pretty => println!("{}", exists),
            }
        }
        Commands::Get { user_id, todo_id } => {
            let todo = store.get(&user_id, &todo_id).await?;
            match (cli.format, &todo) {
                (OutputFormat::Json, _) => println!("{}", format_output(&todo, cli.format)),
                (OutputFormat::Pretty, Some(todo)) => println!("{}", pretty::format_todo(todo)),
                (OutputFormat::Pretty, None) => println!("Todo {} not found.", todo_id),
            }
        }
        Commands::Create {
            user_id,
            name,
            due_date,
        } => {
            let item = CreateTodoRequest::new(name, due_date).into_item(user_id);
            let todo = store.create(item).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&todo, cli.format)),
                OutputFormat::Pretty => println!("Created:\n{}", pretty::format_todo(&todo)),
            }
        }
        Commands::List { user_id } => {
            let todos = store.list_by_owner(&user_id).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&todos, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_todos(&todos)),
            }
        }
        Commands::Update {
            user_id,
            todo_id,
            name,
            due_date,
            done,
        } => {
            let update = TodoUpdate::new(name, due_date, done);
            store.update(&user_id, &todo_id, &update).await?;
            if !cli.quiet {
                println!("Updated todo {}", todo_id);
            }
        }
        Commands::Attach {
            user_id,
            todo_id,
            url,
        } => {
            store.set_attachment_url(&user_id, &todo_id, &url).await?;
            if !cli.quiet {
                println!("Attached {} to todo {}", url, todo_id);
            }
        }
        Commands::Delete { user_id, todo_id } => {
            store.delete(&user_id, &todo_id).await?;
            if !cli.quiet {
                println!("Deleted todo {}", todo_id);
            }
        }
        Commands::ClientConfig(args) => print_client_config(&args, cli.format)?,
    }

    Ok(())
}

fn print_client_config(args: &ClientConfigArgs, format: OutputFormat) -> Result<()> {
    let config = ClientConfig::new(
        api_gateway_endpoint(&args.api_id, &args.region, &args.stage),
        AuthConfig::new(&args.domain, &args.client_id, &args.callback_url),
    )?;

    match format {
        OutputFormat::Json => println!("{}", format_output(&config, format)),
        OutputFormat::Pretty => println!("{}", config.to_json()?),
    }
    Ok(())
}
