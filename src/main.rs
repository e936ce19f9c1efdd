use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use foldertree::cli::Cli;
use foldertree::fs::RealFileSystem;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(cli.log_level())
        .with_target(false)
        .init();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("foldertree: {err:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let root = cli.root();
    foldertree::validate_root(&root)?;

    let tree = foldertree::render(&RealFileSystem, &root, "", &cli.walk_options()).await?;

    match &cli.output {
        Some(path) => {
            tokio::fs::write(path, &tree)
                .await
                .with_context(|| format!("{}: cannot write output", path.display()))?;
            info!(path = %path.display(), bytes = tree.len(), "wrote tree");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(tree.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
