use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use harf_engine::realtime::{segment_at, transliterate_real_time};
use harf_engine::rules::{transliterate, RuleTable};

#[derive(Parser)]
#[command(name = "harftool", about = "Arabizi transliteration diagnostics")]
struct Cli {
    /// Path to a custom rule table TOML (defaults to the built-in table)
    #[arg(long, global = true)]
    rules: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate a string and print the result
    Convert {
        /// Latin-script input text
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the real-time segment split and cursor mapping
    RealTime {
        /// Latin-script input text
        text: String,
        /// Cursor offset in chars
        cursor: usize,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Transliterate a file line by line
    Batch {
        /// Path to the input file (one string per line)
        input_file: String,
        /// Path to the output file
        output_file: String,
    },

    /// Dump the active rule table in application order
    Rules {
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Serialize)]
struct ConvertOutput {
    input: String,
    output: String,
}

#[derive(Debug, Serialize)]
struct RealTimeOutput {
    prefix: String,
    active: String,
    suffix: String,
    text: String,
    new_cursor: usize,
}

#[derive(Debug, Serialize)]
struct RuleOutput {
    pattern: String,
    replacement: char,
    case_insensitive: bool,
}

fn load_custom_rules(path: &str) {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read rule table {}: {}", path, e);
        process::exit(1);
    });
    RuleTable::init_custom(content).unwrap_or_else(|e| {
        eprintln!("Failed to load rule table {}: {}", path, e);
        process::exit(1);
    });
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => {
            eprintln!("Failed to serialize output: {}", e);
            process::exit(1);
        }
    }
}

fn cmd_convert(text: &str, json: bool) {
    let output = transliterate(text);
    if json {
        print_json(&ConvertOutput {
            input: text.to_string(),
            output,
        });
    } else {
        println!("{}", output);
    }
}

fn cmd_real_time(text: &str, cursor: usize, json: bool) {
    let segments = segment_at(text, cursor);
    let result = transliterate_real_time(text, cursor);
    if json {
        print_json(&RealTimeOutput {
            prefix: segments.prefix,
            active: segments.active,
            suffix: segments.suffix,
            text: result.text,
            new_cursor: result.new_cursor,
        });
    } else {
        println!(
            "split:  {:?} | {:?} | {:?}",
            segments.prefix, segments.active, segments.suffix
        );
        println!("text:   {}", result.text);
        println!("cursor: {} -> {}", cursor.min(text.chars().count()), result.new_cursor);
    }
}

fn cmd_batch(input_file: &str, output_file: &str) {
    let input = fs::File::open(input_file).unwrap_or_else(|e| {
        eprintln!("Failed to open input file {}: {}", input_file, e);
        process::exit(1);
    });
    let output = fs::File::create(output_file).unwrap_or_else(|e| {
        eprintln!("Failed to create output file {}: {}", output_file, e);
        process::exit(1);
    });

    let mut writer = BufWriter::new(output);
    for line in BufReader::new(input).lines() {
        let line = line.unwrap_or_else(|e| {
            eprintln!("Failed to read input file {}: {}", input_file, e);
            process::exit(1);
        });
        writeln!(writer, "{}", transliterate(&line)).unwrap_or_else(|e| {
            eprintln!("Failed to write output file {}: {}", output_file, e);
            process::exit(1);
        });
    }
}

fn cmd_rules(json: bool) {
    let rules: Vec<RuleOutput> = RuleTable::global()
        .rules()
        .iter()
        .map(|r| RuleOutput {
            pattern: r.pattern.clone(),
            replacement: r.replacement,
            case_insensitive: r.case_insensitive,
        })
        .collect();

    if json {
        print_json(&rules);
    } else {
        for rule in &rules {
            let case = if rule.case_insensitive { "ci" } else { "cs" };
            println!("{:<4} -> {}  ({})", rule.pattern, rule.replacement, case);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Some(path) = &cli.rules {
        load_custom_rules(path);
    }

    match cli.command {
        Command::Convert { text, json } => cmd_convert(&text, json),
        Command::RealTime { text, cursor, json } => cmd_real_time(&text, cursor, json),
        Command::Batch {
            input_file,
            output_file,
        } => cmd_batch(&input_file, &output_file),
        Command::Rules { json } => cmd_rules(json),
    }
}
