//! Command-line interface for corpusgen
//! Reads the records table and the two dictionary tables as JSON, runs the
//! normalization pipeline and writes the IRaMuTeQ corpus.
//!
//! Usage:
//!   corpusgen <records.json> --acronyms <file> --expressions <file> [--config <name>]
//!   corpusgen --list-configs

use clap::{Arg, ArgAction, Command};
use corpusgen::corpus::pipeline::{
    acronyms_from_table, expressions_from_table, records_from_table, CorpusGenerator, Table,
};
use corpusgen::corpus::rewriter::{AcronymDictionary, ExpressionDictionary};

fn main() {
    let matches = Command::new("corpusgen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generates an IRaMuTeQ corpus from tabular survey responses")
        .arg_required_else_help(true)
        .arg(
            Arg::new("records")
                .help("Path to the records table (JSON)")
                .required_unless_present("list-configs")
                .index(1),
        )
        .arg(
            Arg::new("acronyms")
                .long("acronyms")
                .short('a')
                .help("Path to the acronym dictionary table (JSON)"),
        )
        .arg(
            Arg::new("expressions")
                .long("expressions")
                .short('e')
                .help("Path to the expression dictionary table (JSON)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Pipeline configuration name (e.g., 'legacy', 'extended')")
                .default_value("extended"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the corpus to this file instead of stdout"),
        )
        .arg(
            Arg::new("id-column")
                .long("id-column")
                .help("Name of the identifier column")
                .default_value("id"),
        )
        .arg(
            Arg::new("text-column")
                .long("text-column")
                .help("Name of the raw-text column")
                .default_value("textos selecionados"),
        )
        .arg(
            Arg::new("list-configs")
                .long("list-configs")
                .help("List available pipeline configurations")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let generator = CorpusGenerator::new();

    if matches.get_flag("list-configs") {
        for config in generator.registry().list() {
            println!("{} - {}", config.name, config.description);
        }
        return;
    }

    let records_path = matches
        .get_one::<String>("records")
        .expect("records path is required unless listing configs");
    let config = matches.get_one::<String>("config").unwrap();
    let id_column = matches.get_one::<String>("id-column").unwrap();
    let text_column = matches.get_one::<String>("text-column").unwrap();

    let records_table = load_table(records_path);
    let records = records_from_table(&records_table, id_column, text_column).unwrap_or_else(|e| {
        eprintln!("Error in {}: {}", records_path, e);
        std::process::exit(1);
    });

    let acronyms = match matches.get_one::<String>("acronyms") {
        Some(path) => acronyms_from_table(&load_table(path)),
        None => AcronymDictionary::default(),
    };
    let expressions = match matches.get_one::<String>("expressions") {
        Some(path) => expressions_from_table(&load_table(path)),
        None => ExpressionDictionary::default(),
    };

    let output = generator
        .generate(config, &records, &acronyms, &expressions)
        .unwrap_or_else(|e| {
            eprintln!("Generation error: {}", e);
            eprintln!("\nAvailable configurations:");
            for config in generator.registry().list() {
                eprintln!("  {} - {}", config.name, config.description);
            }
            std::process::exit(1);
        });

    match matches.get_one::<String>("output") {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &output.corpus) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
        }
        None => print!("{}", output.corpus),
    }

    // The report goes to stderr so the corpus itself stays pipeable
    eprint!("{}", output.report);
}

fn load_table(path: &str) -> Table {
    Table::from_file(path).unwrap_or_else(|e| {
        eprintln!("Error loading {}: {}", path, e);
        std::process::exit(1);
    })
}
