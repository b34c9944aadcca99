pub mod cvcore;

use clap::{Parser, Subcommand};
use cvcore::config::MatchConfig;
use cvcore::doc::{self, text};
use cvcore::engine::{Engine, MatchReport};
use cvcore::error::Result;
use cvcore::keywords::KeywordScore;
use cvcore::observe::LogObserver;
use std::path::Path;
use std::process;

#[derive(Parser)]
#[derive(Debug)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
/// Match a CV against a corpus of job postings
struct Cli {
    #[clap(short, long, value_parser)]
    /// Configuration file (YAML); defaults apply when omitted
    config: Option<String>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[derive(Debug)]
enum Commands {
    /// Rank postings against a CV and report the keyword gap
    Match {
        #[clap(long, value_parser)]
        /// Job postings file (.csv or .jsonl)
        corpus: String,
        #[clap(long, value_parser)]
        /// CV text file
        cv: String,
    },
    /// Show the most important keywords across the corpus
    Keywords {
        #[clap(long, value_parser)]
        /// Job postings file (.csv or .jsonl)
        corpus: String,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => match MatchConfig::from_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("error: {}", e);
                process::exit(1);
            }
        },
        None => MatchConfig::default(),
    };

    let result = match &cli.command {
        Commands::Match { corpus, cv } => command_match(cfg, corpus, cv),
        Commands::Keywords { corpus } => command_keywords(cfg, corpus),
    };
    if let Err(e) = result {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn command_match(cfg: MatchConfig, corpus_path: &str, cv_path: &str) -> Result<()> {
    let postings = doc::load_postings(Path::new(corpus_path))?;
    let candidate = text::load_candidate(Path::new(cv_path))?;
    let engine = Engine::with_observer(cfg, Box::new(LogObserver));
    let report = engine.run(&postings, &candidate)?;
    print_report(&report, engine.config());
    Ok(())
}

fn command_keywords(cfg: MatchConfig, corpus_path: &str) -> Result<()> {
    let postings = doc::load_postings(Path::new(corpus_path))?;
    let descriptions: Vec<String> = postings
        .iter()
        .map(|p| p.description().to_string())
        .collect();
    let top = corpus_keywords(&cfg, &descriptions)?;
    println!("top {} keywords across {} postings:", top.len(), postings.len());
    for (i, kw) in top.iter().enumerate() {
        println!("{}: {} ({:.3})", i + 1, kw.term, kw.score);
    }
    Ok(())
}

fn corpus_keywords(cfg: &MatchConfig, descriptions: &[String]) -> Result<Vec<KeywordScore>> {
    use cvcore::keywords::top_keywords;
    use cvcore::preprocess::TextCleaner;
    use cvcore::vectorize::Vectorizer;

    let cleaner = TextCleaner::new(&cfg.domain_stopwords);
    let cleaned: Vec<String> = descriptions.iter().map(|d| cleaner.clean(d)).collect();
    let vectorizer = Vectorizer::new(cfg.max_vocabulary_size);
    let vocab = vectorizer.fit(&cleaned)?;
    let vectors: Vec<_> = cleaned
        .iter()
        .map(|text| vectorizer.transform(text, &vocab))
        .collect();
    Ok(top_keywords(&vocab, &vectors, cfg.top_n_keywords))
}

fn print_report(report: &MatchReport, cfg: &MatchConfig) {
    println!("top {} of {} postings:", cfg.top_n_postings, report.ranked.len());
    for r in report.top_postings(cfg.top_n_postings) {
        println!("{}: {} (similarity {:.3})", r.rank, r.title, r.score);
    }
    println!();
    println!("keywords in demand:");
    for kw in &report.top_keywords {
        println!("  {} ({:.3})", kw.term, kw.score);
    }
    println!();
    println!("missing keywords (top {}):", cfg.top_n_keywords);
    for m in report.missing_keywords.iter().take(cfg.top_n_keywords) {
        println!("  {} ({:.3})", m.term, m.score);
    }
    println!();
    println!("metrics:");
    for (name, value) in &report.metrics {
        println!("  {}: {:.3}", name, value);
    }
}
