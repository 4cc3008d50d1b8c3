//! Command implementations for the Vesper CLI.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::classifier::{IntentClassifier, UNKNOWN_INTENT};
use crate::cli::args::*;
use crate::dispatch::{CommandExecutor, SimulatedExecutor};
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: VesperArgs) -> Result<()> {
    match &args.command {
        Command::Classify(classify_args) => classify(classify_args.clone(), &args),
        Command::Repl(repl_args) => repl(repl_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Train a classifier from a corpus file.
fn train_classifier(corpus: &Path, cli_args: &VesperArgs) -> Result<IntentClassifier> {
    if cli_args.verbosity() > 1 {
        println!("Training from: {}", corpus.display());
    }

    let mut classifier = IntentClassifier::new();
    classifier.train_from_path(corpus)?;

    if cli_args.verbosity() > 1 {
        println!(
            "Trained {} intents over {} vocabulary tokens",
            classifier.intent_count(),
            classifier.vocabulary_size()
        );
    }

    Ok(classifier)
}

/// Classify a single utterance.
fn classify(args: ClassifyArgs, cli_args: &VesperArgs) -> Result<()> {
    let classifier = train_classifier(&args.corpus, cli_args)?;
    let classification = classifier.classify(&args.query);

    match args.output_format {
        OutputFormat::Human => {
            println!(
                "intent: {} (confidence {:.3})",
                classification.intent, classification.confidence
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&classification)?);
        }
    }

    Ok(())
}

/// Run the interactive command loop.
fn repl(args: ReplArgs, cli_args: &VesperArgs) -> Result<()> {
    let classifier = train_classifier(&args.corpus, cli_args)?;
    let executor = SimulatedExecutor::new();

    if cli_args.verbosity() > 0 {
        println!("Type a command to simulate voice input (or 'exit' to quit).");
        println!("Examples: 'open browser', 'what time is it', 'mute volume'");
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "exit" || input == "quit" {
            break;
        }

        let classification = classifier.classify(input);
        if cli_args.verbosity() > 1 {
            println!(
                "intent: {} (confidence {:.3})",
                classification.intent, classification.confidence
            );
        }

        if classification.intent == UNKNOWN_INTENT {
            executor.speak("I did not understand that command.");
        } else {
            let response = executor.execute(&classification.intent, input)?;
            executor.speak(&response);
        }
    }

    Ok(())
}

/// Show statistics for a model trained from a corpus.
fn show_stats(args: StatsArgs, cli_args: &VesperArgs) -> Result<()> {
    let classifier = train_classifier(&args.corpus, cli_args)?;

    println!("Corpus: {}", args.corpus.display());
    println!("Documents: {}", classifier.model().document_count());
    println!("Vocabulary size: {}", classifier.vocabulary_size());
    println!("Intents ({}):", classifier.intent_count());
    for intent in classifier.intents() {
        let magnitude = classifier
            .model()
            .centroid(intent)
            .map(|c| c.magnitude())
            .unwrap_or_default();
        println!("  {intent} (centroid magnitude {magnitude:.3})");
    }

    Ok(())
}
