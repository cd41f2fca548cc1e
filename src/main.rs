//! CLI for the graph-to-SAT reduction pipeline

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use graph_sat_reduce::{
    config::{CliOverrides, OracleBackend, OutputFormat, Settings},
    graph::{read_search_instance, read_sized_instance},
    problems::{CliqueProblem, ColoringProblem, DomainAnswer, IndependentSetProblem, Problem},
    sat::dimacs_string,
    utils::AnswerFormatter,
};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "graph_sat_reduce")]
#[command(about = "Reduce graph problems to SAT and ask an oracle")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct CommonArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.yaml")]
    config: PathBuf,

    /// Problem input file (defaults to stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Oracle backend (overrides config)
    #[arg(short, long, value_enum)]
    backend: Option<BackendArg>,

    /// Solver command for the process backend (overrides config)
    #[arg(long)]
    oracle_command: Option<String>,

    /// Print the answer as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a clique of the size given in the input `(n, m, k, edges...)`
    Clique {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Search for the largest independent set, input `(n, m, edges...)`
    IndependentSet {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Assign registers with the count given in the input `(n, m, k, edges...)`
    Coloring {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Write the DIMACS encoding of an instance without solving it
    Encode {
        /// Which reduction to apply
        #[arg(value_enum)]
        problem: ProblemKind,

        /// Problem input file (defaults to stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Group size for the independent-set reduction
        #[arg(short, long)]
        group_size: Option<usize>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BackendArg {
    Cadical,
    Process,
}

impl From<BackendArg> for OracleBackend {
    fn from(backend: BackendArg) -> Self {
        match backend {
            BackendArg::Cadical => OracleBackend::Cadical,
            BackendArg::Process => OracleBackend::Process,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ProblemKind {
    Clique,
    IndependentSet,
    Coloring,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Clique { common } => {
            let settings = load_settings(&common)?;
            let input = read_input(common.input.as_ref())?;
            let (graph, group_size) =
                read_sized_instance(input.as_bytes()).context("Malformed problem input")?;

            let answer = graph_sat_reduce::solve_clique(graph, group_size, &settings)?;
            print_answer(&answer, &settings, AnswerFormatter::format_clique)
        }
        Commands::IndependentSet { common } => {
            let settings = load_settings(&common)?;
            let input = read_input(common.input.as_ref())?;
            let graph =
                read_search_instance(input.as_bytes()).context("Malformed problem input")?;

            let answer = graph_sat_reduce::search_independent_set(&graph, &settings)?
                .unwrap_or(DomainAnswer::Unsat);
            print_answer(&answer, &settings, AnswerFormatter::format_independent_set)
        }
        Commands::Coloring { common } => {
            let settings = load_settings(&common)?;
            let input = read_input(common.input.as_ref())?;
            let (graph, register_count) =
                read_sized_instance(input.as_bytes()).context("Malformed problem input")?;

            let answer = graph_sat_reduce::solve_coloring(graph, register_count, &settings)?;
            print_answer(&answer, &settings, AnswerFormatter::format_coloring)
        }
        Commands::Encode {
            problem,
            input,
            group_size,
            output,
        } => encode_command(problem, input, group_size, output),
    }
}

/// Load configuration (or defaults) and apply the shared CLI overrides.
fn load_settings(common: &CommonArgs) -> Result<Settings> {
    let mut settings = if common.config.exists() {
        Settings::from_file(&common.config)
            .with_context(|| format!("Failed to load config from {}", common.config.display()))?
    } else {
        Settings::default()
    };

    let overrides = CliOverrides {
        backend: common.backend.map(Into::into),
        oracle_command: common.oracle_command.clone(),
        format: common.json.then_some(OutputFormat::Json),
    };
    settings.merge_with_cli(&overrides);
    settings.validate().context("Configuration validation failed")?;

    Ok(settings)
}

/// Read the problem input from a file, or stdin when no file is given.
fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read problem input: {}", path.display())),
        None => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read problem input from stdin")?;
            Ok(content)
        }
    }
}

fn print_answer(
    answer: &DomainAnswer,
    settings: &Settings,
    text_shape: fn(&DomainAnswer) -> String,
) -> Result<()> {
    let rendered = AnswerFormatter::format(answer, settings.output.format, text_shape)?;
    println!("{}", rendered);
    Ok(())
}

fn encode_command(
    problem: ProblemKind,
    input: Option<PathBuf>,
    group_size: Option<usize>,
    output: Option<PathBuf>,
) -> Result<()> {
    let content = read_input(input.as_ref())?;

    let formula = match problem {
        ProblemKind::Clique => {
            let (graph, k) =
                read_sized_instance(content.as_bytes()).context("Malformed problem input")?;
            CliqueProblem::new(graph, k)?.encode()?
        }
        ProblemKind::IndependentSet => {
            let graph =
                read_search_instance(content.as_bytes()).context("Malformed problem input")?;
            let group_size = group_size
                .context("--group-size is required for the independent-set encoding")?;
            IndependentSetProblem::new(&graph, group_size)?.encode()?
        }
        ProblemKind::Coloring => {
            let (graph, k) =
                read_sized_instance(content.as_bytes()).context("Malformed problem input")?;
            ColoringProblem::new(graph, k)?.encode()?
        }
    };

    let dimacs = dimacs_string(&formula);
    match output {
        Some(path) => std::fs::write(&path, dimacs)
            .with_context(|| format!("Failed to write CNF to {}", path.display()))?,
        None => print!("{}", dimacs),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "graph_sat_reduce",
            "clique",
            "--config",
            "test.yaml",
            "--backend",
            "cadical",
        ]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_cli_encode_parsing() {
        let cli = Cli::try_parse_from([
            "graph_sat_reduce",
            "encode",
            "independent-set",
            "--group-size",
            "3",
        ]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_cli_rejects_unknown_backend() {
        let cli = Cli::try_parse_from([
            "graph_sat_reduce",
            "coloring",
            "--backend",
            "quantum",
        ]);
        assert!(cli.is_err());
    }
}
