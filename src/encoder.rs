use std::env;
use std::fs;

use anyhow::{Context, Result, bail};
use log::{debug, error, info};

use huffman_entropy::{Analysis, analyze};

const DEFAULT_INPUT: &str = "./input.txt";

struct Options {
    input_filepath: String,
    print_encoded: bool,
}

fn parse_args(args: &[String]) -> Options {
    let mut options = Options {
        input_filepath: DEFAULT_INPUT.to_string(),
        print_encoded: true,
    };

    for arg in args.iter().skip(1) {
        if arg == "--no-encoded" {
            options.print_encoded = false;
        } else {
            options.input_filepath = arg.clone();
        }
    }
    options
}

/// Reads the file line by line and joins the lines without terminators.
fn read_text(filepath: &str) -> Result<String> {
    info!("Reading input file: {}", filepath);
    let content =
        fs::read_to_string(filepath).with_context(|| format!("cannot read {}", filepath))?;
    let text: String = content.lines().collect();
    debug!("Read {} bytes, {} after joining lines", content.len(), text.len());
    Ok(text)
}

fn display_symbol(symbol: char) -> String {
    match symbol {
        ' ' => "SPACE".to_string(),
        '\t' => "TAB".to_string(),
        other => other.to_string(),
    }
}

fn print_report(text: &str, analysis: &Analysis, print_encoded: bool) {
    println!("Original Text:\n{}\n", text);

    let width = analysis
        .codes
        .values()
        .map(String::len)
        .max()
        .unwrap_or(0)
        .max("Huffman Code".len());

    println!("Character Codes:");
    println!("{:^11} | {:^9} | {:^width$}", "Character", "Frequency", "Huffman Code");
    println!("{}", "-".repeat(11 + 3 + 9 + 3 + width));
    for count in &analysis.counts {
        let code = analysis
            .codes
            .get(&count.symbol)
            .map(String::as_str)
            .unwrap_or("");
        println!(
            "{:^11} | {:^9} | {:^width$}",
            display_symbol(count.symbol),
            count.count,
            code
        );
    }

    if print_encoded {
        println!("\nEncoded Text:");
        println!("{}", analysis.encoded);
    }

    let metrics = &analysis.metrics;
    println!("\nCompression Results:");
    println!("Entropy: {:.4} bits per character", metrics.entropy);
    println!("Compression Ratio: {:.4}", metrics.compression_ratio);
    println!("Compression Efficiency: {:.4}", metrics.efficiency);
}

fn run(options: &Options) -> Result<()> {
    let text = read_text(&options.input_filepath)?;
    if text.is_empty() {
        bail!("{} contains no text to encode", options.input_filepath);
    }

    let analysis = analyze(&text)
        .with_context(|| format!("failed to encode {}", options.input_filepath))?;
    print_report(&text, &analysis, options.print_encoded);
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let options = parse_args(&args);

    if let Err(e) = run(&options) {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
