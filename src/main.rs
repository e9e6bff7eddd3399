//! `word-tokenizer` command-line interface.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use word_tokenizer::config::{DEFAULT_DELIMITER, DEFAULT_WIDTH};
use word_tokenizer::session::format_tokens;
use word_tokenizer::{Session, Tokenizer, TokenizerConfig, Vocabulary};

const DEMO_TEXT: &str = "Hello my name is Kai and I love coding.";

#[derive(Parser)]
#[command(name = "word-tokenizer")]
#[command(about = "Word-level tokenizer with position-tagged tokens", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    options: TokenizerOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct TokenizerOptions {
    /// Digits per token half (position and id)
    #[arg(short, long, global = true, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Regex separating words
    #[arg(short, long, global = true, default_value = DEFAULT_DELIMITER)]
    delimiter: String,
}

impl TokenizerOptions {
    fn config(&self) -> TokenizerConfig {
        TokenizerConfig::default()
            .with_width(self.width)
            .with_delimiter(self.delimiter.clone())
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text into positional tokens
    Encode {
        /// Text to encode
        text: String,
    },
    /// Encode then decode a sample text, printing every step
    Demo {
        /// Text to run through the tokenizer
        #[arg(default_value = DEMO_TEXT)]
        text: String,
    },
    /// Interactive session reading commands from stdin
    Repl,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut session = Session::with_config(&cli.options.config())?;

    match cli.command {
        Commands::Encode { text } => {
            let tokens = session.tokenizer_mut().encode(&text)?;
            println!("{}", format_tokens(&tokens));
        }
        Commands::Demo { text } => demo(&mut session, &text)?,
        Commands::Repl => repl(&mut session)?,
    }

    Ok(())
}

fn demo(session: &mut Session, text: &str) -> Result<()> {
    println!("Original Text: {text}");
    println!("Token Width: {}", session.tokenizer().format().width());

    let tokens = session.tokenizer_mut().encode(text)?;
    println!("Encoded Tokens: {tokens:?}");

    let decoded = session.tokenizer().decode(&tokens)?;
    println!("Decoded Text: {decoded}");

    println!("Vocabulary:");
    print_vocabulary(session.vocabulary());
    Ok(())
}

fn print_vocabulary(vocab: &Vocabulary) {
    for line in vocabulary_lines(vocab) {
        println!("{line}");
    }
}

fn vocabulary_lines(vocab: &Vocabulary) -> Vec<String> {
    vocab
        .iter()
        .map(|(id, word)| format!("  {id}\t{word:?}"))
        .collect()
}

const REPL_HELP: &str = "commands: encode <text> | decode <tokens> | vocab | help | quit";

/// What the repl does with one input line.
#[derive(Debug, PartialEq, Eq)]
enum ReplStep {
    Print(Vec<String>),
    Failed(String),
    Skip,
    Quit,
}

fn handle_line(session: &mut Session, line: &str) -> ReplStep {
    let line = line.trim_end_matches(['\r', '\n']);
    let (command, argument) = line.split_once(' ').unwrap_or((line, ""));

    let outcome = match command {
        "encode" => session.encode_line(argument),
        "decode" => session.decode_line(argument),
        "vocab" => return ReplStep::Print(vocabulary_lines(session.vocabulary())),
        "help" => return ReplStep::Print(vec![REPL_HELP.to_string()]),
        "quit" | "exit" => return ReplStep::Quit,
        "" => return ReplStep::Skip,
        other => {
            return ReplStep::Print(vec![format!("unknown command {other:?}; {REPL_HELP}")]);
        }
    };

    match outcome {
        Ok(Some(output)) => ReplStep::Print(vec![output]),
        Ok(None) => ReplStep::Skip,
        Err(err) => {
            warn!(command, error = %err, "command failed");
            ReplStep::Failed(err.to_string())
        }
    }
}

fn repl(session: &mut Session) -> Result<()> {
    println!("{REPL_HELP}");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match handle_line(session, &line) {
            ReplStep::Print(lines) => {
                for output in lines {
                    println!("{output}");
                }
            }
            ReplStep::Failed(message) => println!("error: {message}"),
            ReplStep::Skip => {}
            ReplStep::Quit => break,
        }
    }
    info!(vocab_size = session.vocabulary().len(), "session closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_then_decode_lines() {
        let mut session = Session::new();
        assert_eq!(
            handle_line(&mut session, "encode a b\n"),
            ReplStep::Print(vec!["00000000, 00010001".to_string()])
        );
        assert_eq!(
            handle_line(&mut session, "decode 00010001, 00000000\r\n"),
            ReplStep::Print(vec!["a b".to_string()])
        );
    }

    #[test]
    fn argument_keeps_inner_spaces() {
        let mut session = Session::new();
        handle_line(&mut session, "encode x  y");
        assert_eq!(session.vocabulary().len(), 3);
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let mut session = Session::new();
        assert_eq!(
            handle_line(&mut session, "decode 00000003"),
            ReplStep::Failed("Unknown token ID: 3".to_string())
        );
        assert!(matches!(
            handle_line(&mut session, "decode 12"),
            ReplStep::Failed(_)
        ));
    }

    #[test]
    fn control_commands() {
        let mut session = Session::new();
        assert_eq!(handle_line(&mut session, "quit\n"), ReplStep::Quit);
        assert_eq!(handle_line(&mut session, "exit"), ReplStep::Quit);
        assert_eq!(handle_line(&mut session, "\n"), ReplStep::Skip);
        assert_eq!(handle_line(&mut session, "encode"), ReplStep::Skip);
        assert_eq!(
            handle_line(&mut session, "help"),
            ReplStep::Print(vec![REPL_HELP.to_string()])
        );
        match handle_line(&mut session, "frobnicate now") {
            ReplStep::Print(lines) => assert!(lines[0].starts_with("unknown command \"frobnicate\"")),
            other => panic!("unexpected step {other:?}"),
        }
    }

    #[test]
    fn vocab_lists_words_in_id_order() {
        let mut session = Session::new();
        handle_line(&mut session, "encode b a");
        assert_eq!(
            handle_line(&mut session, "vocab"),
            ReplStep::Print(vec!["  0\t\"b\"".to_string(), "  1\t\"a\"".to_string()])
        );
    }
}
