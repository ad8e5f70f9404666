//! svg-attrs CLI
//!
//! Usage:
//!   svg-attrs [OPTIONS] <COMMAND> [INPUT]
//!
//! Commands:
//!   bbox   Bounding box of path data
//!   path   Normalized path data, one segment per line
//!   css    Parsed style rules or a declaration body
//!   value  Typed value of an attribute
//!
//! Input is read from stdin when not given on the command line.

use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use svg_attrs::{css, path, ParserConfig, TypedValue, ValueKind};

#[derive(Parser)]
#[command(name = "svg-attrs")]
#[command(about = "Parse SVG attribute values, style text and path data")]
struct Cli {
    /// Parser configuration file (TOML format)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the bounding box of path data as `x y width height`
    Bbox { d: Option<String> },

    /// Print each segment of path data on its own line
    Path { d: Option<String> },

    /// Print the rules of a style sheet
    Css {
        text: Option<String>,

        /// Treat the input as a bare declaration body (a `style` attribute)
        #[arg(short, long)]
        declarations: bool,
    },

    /// Parse a raw attribute value as the given kind
    Value {
        #[arg(short, long, value_enum)]
        kind: Kind,

        raw: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Length,
    Number,
    String,
    Paint,
    Transform,
    FillRule,
    LineCap,
    LineJoin,
    GradientUnits,
    Point,
    LengthArray,
    Style,
}

impl From<Kind> for ValueKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Length => ValueKind::Length,
            Kind::Number => ValueKind::Number,
            Kind::String => ValueKind::String,
            Kind::Paint => ValueKind::Paint,
            Kind::Transform => ValueKind::Transform,
            Kind::FillRule => ValueKind::FillRule,
            Kind::LineCap => ValueKind::LineCap,
            Kind::LineJoin => ValueKind::LineJoin,
            Kind::GradientUnits => ValueKind::GradientUnits,
            Kind::Point => ValueKind::Point,
            Kind::LengthArray => ValueKind::LengthArray,
            Kind::Style => ValueKind::Style,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match ParserConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => ParserConfig::default(),
    };

    let result = match cli.command {
        Command::Bbox { d } => {
            let source = input_or_stdin(d);
            path::bounding_box(&source)
                .map(|b| format!("{} {} {} {}", b.x, b.y, b.width, b.height))
                .map_err(|e| (e, source))
        }
        Command::Path { d } => {
            let source = input_or_stdin(d);
            path::parse(&source)
                .map(|data| {
                    data.segments
                        .iter()
                        .map(|s| s.to_string())
                        .collect::<Vec<_>>()
                        .join("\n")
                })
                .map_err(|e| (e, source))
        }
        Command::Css { text, declarations } => {
            let source = input_or_stdin(text);
            if declarations {
                Ok(css::parse_declarations(&source).to_string())
            } else {
                Ok(css::parse_stylesheet(&source)
                    .iter()
                    .map(|rule| rule.to_string())
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
        }
        Command::Value { kind, raw } => {
            let source = input_or_stdin(raw);
            TypedValue::parse_with_config(kind.into(), &source, &config)
                .map(|value| describe(&value))
                .map_err(|e| (e, source))
        }
    };

    match result {
        Ok(output) => println!("{}", output),
        Err((e, source)) => {
            eprint!("{}", e.format(&source, "<input>"));
            std::process::exit(1);
        }
    }
}

fn describe(value: &TypedValue) -> String {
    if value.is_inherited() {
        format!("inherit (default {})", value.value())
    } else if value.is_none() {
        format!("none (default {})", value.value())
    } else {
        value.value().to_string()
    }
}

fn input_or_stdin(arg: Option<String>) -> String {
    if let Some(text) = arg {
        return text;
    }
    let mut buffer = String::new();
    match io::stdin().read_to_string(&mut buffer) {
        Ok(_) => buffer.trim_end_matches(['\r', '\n']).to_string(),
        Err(e) => {
            eprintln!("Error reading from stdin: {}", e);
            std::process::exit(1);
        }
    }
}
