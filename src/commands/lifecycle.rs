//! Thin wrappers around the orchestrator operations.

use boxer::Orchestrator;

pub async fn run_build(orchestrator: &Orchestrator) -> anyhow::Result<()> {
    orchestrator.build().await?;
    println!("done");
    Ok(())
}

pub async fn run_start(orchestrator: &Orchestrator) -> anyhow::Result<()> {
    orchestrator.start().await?;
    println!("done");
    Ok(())
}

pub async fn run_stop(orchestrator: &Orchestrator) -> anyhow::Result<()> {
    orchestrator.stop().await?;
    println!("done");
    Ok(())
}

pub async fn run_exec(
    orchestrator: &Orchestrator,
    container: &str,
    command: &[String],
) -> anyhow::Result<()> {
    orchestrator.exec(container, command).await?;
    println!("done");
    Ok(())
}
