use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

const EXIT_SUCCESS: i32 = 0;
const EXIT_IO: i32 = 1;
const EXIT_VALIDATION: i32 = 2;

#[derive(Parser, Debug)]
#[command(name = "topsis")]
#[command(about = "Rank alternatives with the TOPSIS multi-criteria decision method", long_about = None)]
#[command(version)]
struct Cli {
    /// Input CSV file: header row, identifier column, then numeric criterion columns
    input: PathBuf,

    /// Comma-separated criterion weights (e.g. "1,1,2,1")
    weights: String,

    /// Comma-separated impact directions, '+' beneficial or '-' cost (e.g. "+,-,+,+")
    impacts: String,

    /// Optional result file; when omitted, the ranked table is printed to stdout
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let start_time = Instant::now();

    // Load the decision table
    let table = match topsis_rank::table::read_table(&cli.input) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            std::process::exit(EXIT_IO);
        }
    };

    if cli.verbose {
        eprintln!(
            "Loaded {} alternatives with {} criteria from {}",
            table.rows.len(),
            table.criteria_count(),
            cli.input.display()
        );
    }

    // Validate before any computation
    let input = match topsis_rank::scoring::validate(&table, &cli.weights, &cli.impacts) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_VALIDATION);
        }
    };

    let result = topsis_rank::scoring::score(&input.matrix, &input.weights, &input.impacts);

    if cli.verbose {
        eprintln!(
            "Scored {} alternatives in {:?}",
            result.scores.len(),
            start_time.elapsed()
        );
    }

    match cli.output {
        Some(path) => {
            if let Err(e) = topsis_rank::table::write_table(&path, &table, &result) {
                eprintln!("Output error: {:#}", e);
                std::process::exit(EXIT_IO);
            }
            println!("Result file '{}' generated successfully.", path.display());
        }
        None => {
            let use_colors = topsis_rank::output::should_use_colors();
            let output = topsis_rank::output::format_ranked_table(&table, &result, use_colors);
            println!("{}", output);
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
