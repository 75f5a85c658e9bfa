//! Construct Finder CLI - list type declarations in PHP source trees.

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use construct_finder::errors::{exit_code, FinderError};
use construct_finder::{Construct, ConstructFinder, ConstructKind};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "construct-finder")]
#[command(about = "Find class, interface, trait, and enum declarations in PHP source trees")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List constructs declared under the given paths
    Find {
        /// Root directories to scan
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Exclude paths matching a wildcard pattern (may be repeated)
        #[arg(long, value_name = "PATTERN")]
        exclude: Vec<String>,

        /// Limit output to one construct kind
        #[arg(long, value_enum)]
        kind: Option<KindArg>,

        /// Print fully-qualified names only
        #[arg(long)]
        names: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Ignore enum declarations (pre-8.1 grammar)
        #[arg(long)]
        no_enums: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Class,
    Interface,
    Trait,
    Enum,
}

impl From<KindArg> for ConstructKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Class => ConstructKind::Class,
            KindArg::Interface => ConstructKind::Interface,
            KindArg::Trait => ConstructKind::Trait,
            KindArg::Enum => ConstructKind::Enum,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let json_output = json_flag(&cli.command);

    let result = match cli.command {
        Commands::Find {
            paths,
            exclude,
            kind,
            names,
            json,
            no_enums,
        } => run_find(paths, exclude, kind.map(Into::into), names, json, no_enums),
        Commands::Completions { shell } => {
            generate(
                shell,
                &mut Cli::command(),
                "construct-finder",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        if json_output {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
            }

            let payload = ErrorOutput {
                error: e.to_string(),
            };

            let json = serde_json::to_string(&payload)
                .unwrap_or_else(|_| "{\"error\":\"serialization failed\"}".to_string());
            eprintln!("{json}");
        } else {
            eprintln!("error: {}", e);
        }
        std::process::exit(exit_code(&e));
    }
}

fn json_flag(cmd: &Commands) -> bool {
    match cmd {
        Commands::Find { json, .. } => *json,
        Commands::Completions { .. } => false,
    }
}

fn run_find(
    paths: Vec<PathBuf>,
    exclude: Vec<String>,
    kind: Option<ConstructKind>,
    names: bool,
    json: bool,
    no_enums: bool,
) -> Result<(), FinderError> {
    let finder = ConstructFinder::located_in(paths)
        .exclude(&exclude)
        .enum_support(!no_enums);

    let constructs = match kind {
        Some(kind) => finder.find_of_kind(kind)?,
        None => finder.find_all()?,
    };

    if json {
        print_json(&constructs, names);
    } else {
        for construct in &constructs {
            if names {
                println!("{}", construct.name());
            } else {
                println!("{}\t{}", construct.kind(), construct.name());
            }
        }
    }

    Ok(())
}

fn print_json(constructs: &[Construct], names: bool) {
    let json = if names {
        #[derive(Serialize)]
        struct Output<'a> {
            names: Vec<&'a str>,
        }
        let output = Output {
            names: constructs.iter().map(|c| c.name()).collect(),
        };
        serde_json::to_string_pretty(&output)
    } else {
        #[derive(Serialize)]
        struct Output<'a> {
            constructs: &'a [Construct],
        }
        serde_json::to_string_pretty(&Output { constructs })
    };

    println!("{}", json.unwrap_or_else(|_| "{}".to_string()));
}
