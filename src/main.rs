use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use timed_quiz::{Quiz, QuizConfig, DEFAULT_QUESTIONS_PER_QUIZ, DEFAULT_QUIZ_DURATION_SECS};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the question bank from
    #[arg(short, long, default_value = "questions.json")]
    questions: PathBuf,

    /// Number of questions drawn per quiz
    #[arg(short = 'n', long, default_value_t = DEFAULT_QUESTIONS_PER_QUIZ)]
    count: usize,

    /// Quiz duration in seconds
    #[arg(short, long, default_value_t = DEFAULT_QUIZ_DURATION_SECS)]
    duration: u64,
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    if args.count == 0 {
        eprintln!("--count must be at least 1");
        std::process::exit(2);
    }

    let config = QuizConfig {
        questions_per_quiz: args.count,
        duration: Duration::from_secs(args.duration),
    };

    let quiz = match Quiz::from_json(&args.questions, config) {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = quiz.run() {
        eprintln!("Error running quiz: {e}");
        std::process::exit(1);
    }
}
