use clap::Parser;
use docdesk::answer::select_and_answer;
use docdesk::cli::{Cli, Commands};
use docdesk::config::MatchConfig;
use docdesk::select::DirSnapshot;
use docdesk::server::{AppState, serve};
use std::net::SocketAddr;
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    docdesk::tracing::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Ask {
            question,
            data_dir,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            let snapshot = DirSnapshot::scan(&data_dir)?;
            match select_and_answer(&question, &snapshot, &config)? {
                Some(result) => {
                    println!("{}", result.content);
                    println!("[{}]", result.filename);
                    if !result.images.is_empty() {
                        println!("({} embedded images)", result.images.len());
                    }
                }
                None => println!("{}", config.fallback_message),
            }
        }
        Commands::Serve {
            data_dir,
            config,
            host,
            port,
        } => {
            let config = load_config(config.as_deref())?;
            let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
            serve(addr, AppState { data_dir, config }).await?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<MatchConfig> {
    match path {
        Some(path) => MatchConfig::load(path),
        None => Ok(MatchConfig::default()),
    }
}
