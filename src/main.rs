use anyhow::Context;
use clap::{Parser, Subcommand};
use hooklab::config::Config;
use hooklab::github::UsersClient;
use hooklab::logging::{init_tracing, LogTarget};
use hooklab::ui::app::Demo;
use hooklab::ui::people;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "hooklab", version, about = "Small stateful UI demos in the terminal")]
struct Cli {
    /// Config file (default: ~/.config/hooklab/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Demo to open first: people, fetch, form, counter, greeting
    #[arg(long)]
    demo: Option<String>,

    /// Override the users endpoint
    #[arg(long, global = true)]
    users_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply actions (CLEAR, RESET, REMOVE_ITEM:<id>) to the initial people
    /// state and print the result as JSON.
    Reduce {
        #[arg(required = true)]
        actions: Vec<String>,
    },
    /// Fetch the users listing once and print one `login avatar_url` per line.
    Users,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Some(Command::Reduce { actions }) => {
            init_tracing(&config.logging, &LogTarget::Stderr)?;
            run_reduce(&actions)
        }
        Some(Command::Users) => {
            init_tracing(&config.logging, &LogTarget::Stderr)?;
            run_users(&config)
        }
        None => {
            let target = LogTarget::for_ui(&config.logging);
            init_tracing(&config.logging, &target)
                .with_context(|| format!("Failed to open log target {:?}", target))?;
            run_ui(&config)
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(url) = &cli.users_url {
        config.github.users_url = url.clone();
    }
    if let Some(demo) = &cli.demo {
        let demo = Demo::from_name(demo)
            .with_context(|| format!("Unknown demo '{}'", demo))?;
        config.ui.initial_demo = demo.name().to_string();
    }
    config.validate()?;
    Ok(config)
}

fn build_runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}

fn run_ui(config: &Config) -> anyhow::Result<()> {
    let runtime = build_runtime()?;
    let client = UsersClient::new(&config.github)?;
    hooklab::ui::runtime::run(config, client, runtime.handle().clone())?;
    runtime.shutdown_background();
    Ok(())
}

fn run_reduce(actions: &[String]) -> anyhow::Result<()> {
    let state = people::replay(actions)?;
    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}

fn run_users(config: &Config) -> anyhow::Result<()> {
    let runtime = build_runtime()?;
    let client = UsersClient::new(&config.github)?;
    let users = runtime.block_on(client.fetch_users())?;
    for user in users {
        println!("{} {}", user.login, user.avatar_url);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reduce_actions() {
        let cli = Cli::parse_from(["hooklab", "reduce", "REMOVE_ITEM:1", "RESET"]);
        match cli.command {
            Some(Command::Reduce { actions }) => {
                assert_eq!(actions, vec!["REMOVE_ITEM:1", "RESET"]);
            }
            other => panic!("expected reduce, got {:?}", other),
        }
    }

    #[test]
    fn no_subcommand_opens_ui() {
        let cli = Cli::parse_from(["hooklab", "--demo", "fetch"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.demo.as_deref(), Some("fetch"));
    }

    #[test]
    fn run_reduce_rejects_unknown_action() {
        assert!(run_reduce(&["LOGOUT".to_string()]).is_err());
    }
}
