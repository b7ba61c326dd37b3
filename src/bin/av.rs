//! Command-line interface for av
//! This binary compiles av machine definitions into graph descriptions (and inspects the
//! intermediate token and statement stages).
//!
//! Usage:
//!   av execute `<path>` [--format `<format>`] [--config `<config>`]  - Process an .av file
//!   av list-formats                                              - List all available formats
//!
//! Set `RUST_LOG=av=debug` to see pipeline diagnostics on stderr.

use clap::{Arg, Command};
use tracing_subscriber::EnvFilter;

use av::av::config::{GraphConfig, Loader};
use av::av::processor::{available_formats, process_file, ProcessingSpec};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("av")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for compiling and inspecting av machine definitions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("execute")
                .about("Process an .av file")
                .arg(
                    Arg::new("path")
                        .help("Path to the .av file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'ast-dot', 'token-simple')")
                        .default_value("ast-dot"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("TOML file layered over the built-in defaults"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("execute", execute_matches)) => {
            let path = execute_matches.get_one::<String>("path").unwrap();
            let format = execute_matches.get_one::<String>("format").unwrap();
            let config = execute_matches.get_one::<String>("config");
            handle_execute_command(path, format, config.map(String::as_str));
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

fn load_graph_config(path: Option<&str>) -> GraphConfig {
    let loader = match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    match loader.build() {
        Ok(config) => config.graph,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the execute command
fn handle_execute_command(path: &str, format: &str, config: Option<&str>) {
    let spec = ProcessingSpec::from_string(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("Available formats: {}", available_formats().join(", "));
        std::process::exit(1);
    });
    let graph = load_graph_config(config);

    let output = process_file(path, &spec, &graph).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    print!("{}", output);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    for format in available_formats() {
        println!("  {}", format);
    }
}
