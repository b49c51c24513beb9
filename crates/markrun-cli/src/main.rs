use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use markrun::{Compiler, OptionFlag, Options, RunSequence, Segment, StaticPrefixBuilder, StyleRules};

#[derive(Parser)]
#[command(name = "markrun")]
#[command(about = "Compile Markdown files into styled text runs")]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    /// Render soft breaks as line breaks
    #[arg(long)]
    hard_breaks: bool,

    /// Enable a compile option by name (repeatable)
    #[arg(short, long = "option", value_name = "NAME")]
    options: Vec<String>,

    /// Split the output into prose and code block segments
    #[arg(short, long)]
    segments: bool,

    /// Print plain text instead of one line per run
    #[arg(short, long)]
    plain: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Error reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error writing output: {0}")]
    Write(#[from] io::Error),

    #[error(transparent)]
    Option(#[from] markrun::Error),
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        log::debug!("{:?}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let options = build_options(cli)?;
    log::debug!("compiling {} with {:?}", cli.input.display(), options);

    let markdown = fs::read_to_string(&cli.input).map_err(|source| CliError::Read {
        path: cli.input.clone(),
        source,
    })?;

    let rules = StyleRules::new();
    let prefixes = prefix_builder(&options);
    let compiler = Compiler::with_options(&rules, &prefixes, options);

    let output = if cli.segments {
        render_segments(&compiler.segment_markdown(&markdown), cli.plain)
    } else {
        render_runs(&compiler.compile_markdown(&markdown), cli.plain)
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn build_options(cli: &Cli) -> Result<Options, CliError> {
    let mut options = Options::default();
    if cli.hard_breaks {
        options = options.with_flag(OptionFlag::HardBreaks);
    }
    for name in &cli.options {
        let flag: OptionFlag = name.parse()?;
        options = options.with_flag(flag);
    }
    Ok(options)
}

/// List bullets and the fallback bullet share one glyph
fn prefix_builder(options: &Options) -> StaticPrefixBuilder {
    StaticPrefixBuilder::with_bullet(&options.fallback_bullet)
}

fn render_segments(segments: &[Segment], plain: bool) -> String {
    let mut output = String::new();
    for segment in segments {
        let header = match (segment.is_code_block, segment.code_language.as_deref()) {
            (false, _) => "--- prose ---".to_string(),
            (true, Some(language)) => format!("--- code ({}) ---", language),
            (true, None) => "--- code ---".to_string(),
        };
        output.push_str(&header);
        output.push('\n');
        output.push_str(&render_runs(&segment.content, plain));
    }
    output
}

fn render_runs(runs: &RunSequence, plain: bool) -> String {
    if plain {
        let mut text = runs.to_plain_text();
        if !text.ends_with('\n') {
            text.push('\n');
        }
        return text;
    }

    runs.iter()
        .map(|run| format!("{} {:?}\n", run.attributes, run.text))
        .collect()
}
