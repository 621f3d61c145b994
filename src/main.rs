mod cli;
mod commands;

use boxer::{CliOutput, Error as BoxerError, Group, GroupConfig, Orchestrator};
use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        if let Some(boxer_error) = e.downcast_ref::<BoxerError>() {
            // Compose/script failures: the child's own stderr is the user
            // feedback. Propagate the exit code without a redundant error.
            if let Some(code) = boxer_error.exit_code() {
                eprintln!("FAILED");
                std::process::exit(code);
            }
            eprintln!("Error: {}", boxer_error);
            if let Some(suggestion) = boxer_error.suggestion() {
                eprintln!("\nHint: {}", suggestion);
            }
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Completions { shell } => {
            use clap::CommandFactory;
            clap_complete::generate(shell, &mut Cli::command(), "boxer", &mut std::io::stdout());
            Ok(())
        }
        command => {
            let group = require_group(cli.group_name.as_deref())?;
            let config = GroupConfig::new(cli.quiet);

            println!("Network group name is [{}]", group.name());
            println!("Target folder is [{}]", group.dir().display());

            match command {
                Commands::Init { containers } => {
                    if containers.is_empty() {
                        return Err(BoxerError::Config(
                            "provide a name for at least one container to be added to the group"
                                .to_string(),
                        )
                        .into());
                    }
                    commands::init::run_init(&group, &containers)?;
                    println!("done");
                    Ok(())
                }
                Commands::Build => {
                    let orchestrator = make_orchestrator(group, config);
                    commands::lifecycle::run_build(&orchestrator).await
                }
                Commands::Start => {
                    let orchestrator = make_orchestrator(group, config);
                    commands::lifecycle::run_start(&orchestrator).await
                }
                Commands::Stop => {
                    let orchestrator = make_orchestrator(group, config);
                    commands::lifecycle::run_stop(&orchestrator).await
                }
                Commands::Exec { container, command } => {
                    if command.is_empty() {
                        return Err(BoxerError::Config(
                            "provide a command to execute inside the container".to_string(),
                        )
                        .into());
                    }
                    let orchestrator = make_orchestrator(group, config);
                    commands::lifecycle::run_exec(&orchestrator, &container, &command).await
                }
                Commands::Completions { .. } => unreachable!("handled above"),
            }
        }
    }
}

fn make_orchestrator(group: Group, config: GroupConfig) -> Orchestrator {
    Orchestrator::new(group, config, Box::new(CliOutput))
}

fn require_group(name: Option<&str>) -> boxer::Result<Group> {
    let name = name.ok_or_else(|| {
        BoxerError::Config(
            "must provide a name of the target group of containers, use the --group-name argument"
                .to_string(),
        )
    })?;
    Ok(Group::new(name, &std::env::current_dir()?))
}
