use anyhow::Context;
use clap::Parser;

use corisa::cli::{Args, Mode};
use corisa::config::Config;
use corisa::engine::Engine;
use corisa::{shell, web};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = Config {
        yaml_file: args.yaml.clone().into(),
        host: args.host.clone(),
        port: args.port,
    };
    let mut engine = Engine::new(config)
        .with_context(|| format!("failed to open schema file {}", args.yaml))?;

    match args.mode {
        Mode::Cli => {
            if args.non_interactive {
                let prompt = args
                    .prompt
                    .as_deref()
                    .context("--non-interactive requires --prompt")?;
                shell::run_once(&mut engine, prompt)?;
            } else {
                shell::run(&mut engine)?;
            }
        }
        Mode::Web => {
            let host = args.host.clone();
            web::serve(engine, &host, args.port).await?;
        }
    }

    Ok(())
}
