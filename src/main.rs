use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use movie_quiz::MovieQuiz;
use movie_quiz::config::{
    DEFAULT_API_URL, DEFAULT_QUESTIONS_AMOUNT, DEFAULT_STATS_PATH, QuizConfig, movies_url,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// API key for the movie list endpoint
    #[arg(short = 'k', long)]
    api_key: String,

    /// Movie list endpoint; the API key is appended to it
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// JSON file that keeps statistics between sessions
    #[arg(short, long, default_value = DEFAULT_STATS_PATH)]
    stats: PathBuf,

    /// Questions per round
    #[arg(short, long, default_value_t = DEFAULT_QUESTIONS_AMOUNT)]
    questions: usize,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        if let Err(e) = init_logging(path) {
            eprintln!("Failed to open log file {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }

    let config = QuizConfig::default().with_questions_amount(args.questions);
    let url = movies_url(&args.api_url, &args.api_key);

    let quiz = match MovieQuiz::from_api(&url, &args.stats, config) {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("Failed to start quiz: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = quiz.run().await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

/// Route logs to `path`; the terminal itself belongs to the quiz screen.
fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
