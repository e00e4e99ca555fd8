use anagram_core::core::solver::DEFAULT_WORD;
use anagram_core::{logging, AnagramError, Solution, Solver, SolverOptions};
use clap::Parser;
use crossterm::style::Stylize;
use log::LevelFilter;
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "anagram")]
#[command(about = "Find anagrams of a word in a dictionary")]
struct Args {
    /// Word to rearrange
    #[arg(default_value = DEFAULT_WORD)]
    word: String,

    /// Dictionary file, one word per line (built-in sample if omitted)
    #[arg(short, long, env = "ANAGRAM_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Keep the word itself in the results
    #[arg(long)]
    include_self: bool,

    /// Search even if the word is not a single run of letters
    #[arg(long)]
    lenient: bool,

    /// Print the solution as JSON
    #[arg(long)]
    json: bool,

    /// Solve words typed at a prompt until `exit`
    #[arg(short, long)]
    interactive: bool,

    /// Log progress messages
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(if args.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    });

    let options = SolverOptions {
        exclude_self: !args.include_self,
        strict: !args.lenient,
    };
    let solver = match &args.dictionary {
        Some(path) => match Solver::from_path(path, options) {
            Ok(solver) => solver,
            Err(e) => return report(&e),
        },
        None => Solver::from_sample(options),
    };

    if args.interactive {
        return match run_interactive(&solver) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("[ERROR] {}", e);
                ExitCode::FAILURE
            }
        };
    }

    match solver.solve(&args.word) {
        Ok(solution) => match print_solution(&solution, args.json) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("[ERROR] {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => report(&e),
    }
}

fn report(err: &AnagramError) -> ExitCode {
    eprintln!("[ERROR] {}", err);
    match err {
        AnagramError::InvalidInput { .. } => ExitCode::from(2),
        AnagramError::Io { .. } => ExitCode::FAILURE,
    }
}

fn print_solution(solution: &Solution, json: bool) -> std::io::Result<()> {
    let mut out = stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, solution)?;
        writeln!(out)?;
    } else {
        for word in &solution.anagrams {
            writeln!(out, "{}", word)?;
        }
    }
    out.flush()
}

fn run_interactive(solver: &Solver) -> std::io::Result<()> {
    println!("{}", "Anagram Solver. Type 'exit' to quit.".bold());
    println!("---------------------------------------------------------------");
    println!(
        "Dictionary: {} ({} words)",
        solver.source(),
        solver.index().size()
    );
    if let Some(report) = solver.load_report() {
        println!(
            "Skipped {} invalid lines, {} duplicates.",
            report.skipped, report.duplicates
        );
    }

    loop {
        print!("\n> ");
        stdout().flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }

        match input.trim() {
            "exit" => break,
            "" => continue,
            word => match solver.solve(word) {
                Ok(solution) if solution.anagrams.is_empty() => {
                    println!("{}", format!("No anagrams of '{}'.", word).yellow());
                }
                Ok(solution) => {
                    println!(
                        "{}",
                        format!("{} anagrams of '{}':", solution.count(), word).green()
                    );
                    for anagram in &solution.anagrams {
                        println!("  {}", anagram);
                    }
                }
                Err(e) => println!("{}", e.to_string().red()),
            },
        }
    }

    Ok(())
}
