pub mod answer;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod markup;
pub mod matching;
pub mod select;
pub mod server;
pub mod text;
pub mod tracing;

pub use answer::{MatchResult, select_and_answer};
pub use config::MatchConfig;
pub use error::DecodeError;
pub use extract::{DocumentFormat, ExtractedContent};
pub use select::DirSnapshot;
