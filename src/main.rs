use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use trivia::Difficulty;
use trivia::core::config::{self, CliOverrides};

#[derive(Parser)]
#[command(name = "trivia", about = "Terminal trivia quiz")]
struct Args {
    /// Number of questions per quiz (1-50)
    #[arg(short, long)]
    amount: Option<u8>,

    /// Question difficulty (any if omitted)
    #[arg(short, long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Category id (any if omitted)
    #[arg(short, long)]
    category: Option<u32>,

    /// Trivia API base URL
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to trivia.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("trivia.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().map_err(std::io::Error::other)?;
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            amount: args.amount,
            difficulty: args.difficulty,
            category: args.category,
            base_url: args.base_url,
        },
    );

    log::info!("Trivia starting up against {}", resolved.base_url);

    trivia::tui::run(resolved)
}
