use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "boxer")]
#[command(about = "Orchestrate multi-container docker-compose test environments")]
#[command(version)]
pub struct Cli {
    /// Name of the target group of containers
    #[arg(short = 'g', long)]
    pub group_name: Option<String>,

    /// Redirect docker-compose and script output to boxer_stdout.txt /
    /// boxer_stderr.txt and pull images quietly
    #[arg(short, long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scaffold a new group directory with the given containers
    Init {
        /// Container names to add to the group (with or without the `box.` prefix)
        containers: Vec<String>,
    },
    /// Build all container images of the group and cache them locally
    Build,
    /// Spawn all containers of the group (attached)
    Start,
    /// Terminate all running containers of the group
    Stop,
    /// Execute a command inside a running container of the group
    Exec {
        /// Target container name
        #[arg(short, long)]
        container: String,

        /// Command and arguments to run inside the container
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: clap_complete::Shell,
    },
}
