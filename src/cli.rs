use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docdesk")]
#[command(about = "Answer free-text questions from a directory of documents", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Answer one question and print the result
    Ask {
        question: String,
        #[arg(short, long, default_value = "data")]
        data_dir: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Serve the question endpoint over HTTP
    Serve {
        #[arg(short, long, default_value = "data")]
        data_dir: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
}
