use std::{
    io::{self, BufRead, IsTerminal, Write},
    path::PathBuf,
};

use clap::Parser;
use emojit_cli::{
    ResourceLoadError, TranslateRequest, TranslatorConfig, TranslatorHandle, initialize, respond,
};
use emojit_core::{filter::CLASSIC_EXCLUDED_TAGS, model::WordProfile};
use thiserror::Error;
use tracing::{Level, warn};

#[derive(Parser)]
#[command(name = "emojit")]
#[command(about = "Rewrite messages, replacing words with matching emoji")]
struct Args {
    /// Message to translate; reads lines from stdin when omitted
    message: Vec<String>,

    /// Dictionary JSON (emojilib format); falls back to the bundled one
    #[arg(long)]
    dict: Option<PathBuf>,

    /// Tagger lexicon JSON
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Tagger transformation rules
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Let determiners be replaced too
    #[arg(long)]
    classic: bool,

    /// Treat each input line as a `{"message": ...}` request and answer with JSON
    #[arg(long)]
    json: bool,

    /// Print the per-word analysis instead of the translation
    #[arg(long)]
    explain: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Load(#[from] ResourceLoadError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn main() -> Result<(), CliError> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let translator = initialize(&config_from(&args))?;
    let mut out = io::stdout();

    if !args.message.is_empty() {
        let message = args.message.join(" ");
        return emit(&mut out, &translator, &args, &message);
    }
    repl(&translator, &args, &mut out)
}

fn config_from(args: &Args) -> TranslatorConfig {
    let mut config = TranslatorConfig {
        dictionary: args.dict.clone(),
        lexicon: args.lexicon.clone(),
        rules: args.rules.clone(),
        ..TranslatorConfig::default()
    };
    if args.classic {
        config.excluded_tags = CLASSIC_EXCLUDED_TAGS.iter().map(|s| s.to_string()).collect();
    }
    config
}

fn repl(translator: &TranslatorHandle, args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut line = String::new();
    if interactive {
        writeln!(out, "emojit | type a message and press enter. :q to quit.")?;
    }

    loop {
        line.clear();
        if interactive {
            write!(out, "emojit> ")?;
            out.flush()?;
        }
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim_end_matches(['\r', '\n']);
        if input == ":q" || input == ":quit" || input == ":exit" {
            break;
        }

        if args.json {
            if input.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<TranslateRequest>(input) {
                Ok(request) => {
                    serde_json::to_writer(&mut *out, &respond(translator, &request))?;
                    writeln!(out)?;
                }
                Err(e) => warn!(error = %e, "skipping malformed request"),
            }
            continue;
        }
        emit(out, translator, args, input)?;
    }

    Ok(())
}

fn emit(
    out: &mut impl Write,
    translator: &TranslatorHandle,
    args: &Args,
    message: &str,
) -> Result<(), CliError> {
    if args.json {
        let request = TranslateRequest {
            message: message.to_string(),
        };
        serde_json::to_writer(&mut *out, &respond(translator, &request))?;
        writeln!(out)?;
    } else if args.explain {
        for profile in translator.analyze(message) {
            writeln!(out, "{}", describe(&profile))?;
        }
    } else {
        writeln!(out, "{}", translator.translate(message))?;
    }
    Ok(())
}

fn describe(p: &WordProfile) -> String {
    let mut s = format!("{:?}\t{}", p.word, p.part_of_speech);
    if let Some(singular) = &p.singular {
        s.push_str(&format!("\tplural of {singular:?}"));
    }
    if let Some(punctuation) = &p.punctuation {
        s.push_str(&format!("\tpunct {:?}", punctuation.run));
    }
    match &p.emoji {
        Some(emoji) => s.push_str(&format!("\t-> {emoji}")),
        None => s.push_str("\t-"),
    }
    s
}
