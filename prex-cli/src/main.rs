use clap::{Parser, Subcommand};
use colored::Colorize;
use prex_core::{Regex, parse, tokenize};

#[derive(Parser)]
#[command(name = "prex")]
#[command(about = "Prex - a regex engine that enumerates every match at the start of its input")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the token stream for a pattern
    Tokens {
        /// The regex pattern
        pattern: String,
    },
    /// Parse a pattern and print its tree
    Parse {
        /// The regex pattern
        pattern: String,
        /// Show the raw tree structure
        #[arg(short, long)]
        debug: bool,
    },
    /// List every match anchored at the start of the input
    Match {
        /// The regex pattern
        pattern: String,
        /// The input string
        input: String,
    },
    /// Test a regex pattern against input
    Test {
        /// The regex pattern
        pattern: String,
        /// The input string to test
        input: String,
        /// List every distinct match
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tokens { pattern } => cmd_tokens(&pattern),
        Commands::Parse { pattern, debug } => cmd_parse(&pattern, debug),
        Commands::Match { pattern, input } => cmd_match(&pattern, &input),
        Commands::Test {
            pattern,
            input,
            verbose,
        } => cmd_test(&pattern, &input, verbose),
    }
}

fn cmd_tokens(pattern: &str) {
    println!("{}", "Tokenizing pattern...".bold());
    println!("  Pattern: {}", pattern.cyan());
    println!();

    let tokens = tokenize(pattern);
    if tokens.is_empty() {
        println!("{}", "No tokens".red());
    } else {
        for token in &tokens {
            println!("  [{}] {}", token.position, token);
        }
    }
}

fn cmd_parse(pattern: &str, debug: bool) {
    println!("{}", "Parsing pattern...".bold());
    println!("  Pattern: {}", pattern.cyan());
    println!();

    match parse(pattern) {
        Ok(tree) => {
            println!("{}", "Tree:".bold());
            println!("  {}", tree.to_string().green());
            if debug {
                println!();
                println!("{:#?}", tree);
            }
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn cmd_match(pattern: &str, input: &str) {
    let regex = match Regex::new(pattern) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    let matches = regex.matches(input);

    if matches.is_empty() {
        println!("{}", "No matches found".red());
    } else {
        println!(
            "{} {}",
            "Found".bold(),
            format!("{} match(es)", matches.len()).green()
        );
        println!();

        for (i, m) in matches.iter().enumerate() {
            println!(
                "  [{}] {} chars = {}",
                i + 1,
                m.chars().count(),
                format!("\"{}\"", m).green()
            );
        }
    }
}

fn cmd_test(pattern: &str, input: &str, verbose: bool) {
    println!("{}", "Testing pattern...".bold());
    println!("  Pattern: {}", pattern.cyan());
    println!("  Input:   {}", input.yellow());
    println!();

    let regex = match Regex::new(pattern) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    let matches = regex.matches(input);

    if matches.is_empty() {
        println!("{}", "✗ No match".red());
        std::process::exit(1);
    }

    println!("{}", "✓ Match found!".green().bold());
    if let Some(longest) = matches.iter().max_by_key(|m| m.chars().count()) {
        println!("  Longest:  {}", format!("\"{}\"", longest).green());
    }
    println!("  Distinct: {}", matches.len());

    if verbose {
        println!();
        println!("{}", "All matches:".bold());
        for (i, m) in matches.iter().enumerate() {
            println!("  [{}] {}", i + 1, format!("\"{}\"", m).green());
        }
    }
}
