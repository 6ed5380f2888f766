use clap::{CommandFactory, Parser};
use colored::Colorize;

use rcyclic::escape;
use rcyclic::offset::{self, Endianness};
use rcyclic::pattern;

#[derive(Parser)]
#[command(
    name = "rcyclic",
    about = "Cyclic pattern and overflow offset tool with bad character exclusion"
)]
struct Cli {
    /// Generate a pattern of the specified length
    #[arg(short = 'l', long = "length")]
    length: Option<usize>,

    /// Find the offset of the hex-encoded value in the pattern
    #[arg(short = 'q', long = "query")]
    query: Option<String>,

    /// Bad characters to exclude (e.g. "\x1a\x3C")
    #[arg(short = 'b', long = "bad", default_value = "")]
    bad: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let bad_chars = match escape::decode(&cli.bad) {
        Ok(bytes) => bytes,
        Err(e) => {
            println!("{} {}", "Error:".red(), e);
            return Ok(());
        }
    };

    match (cli.length, &cli.query) {
        (Some(length), None) => match pattern::generate(length, &bad_chars) {
            Ok(pat) => println!("{}", pat),
            Err(e) => println!("{} {}", "Error:".red(), e),
        },
        (None, Some(query)) => {
            match offset::find_offset(query, &bad_chars, Endianness::Little) {
                Ok(Some(pos)) => println!("{}", pos),
                Ok(None) => println!("{}", "Not found in the pattern.".yellow()),
                Err(e) => println!("{} {}", "Error:".red(), e),
            }
        }
        _ => {
            Cli::command().print_help()?;
            println!();
            println!(
                "{} Specify either -l or -q, but not both.",
                "Error:".red()
            );
        }
    }

    Ok(())
}
