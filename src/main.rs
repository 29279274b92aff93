use clap::Parser;
use clockskew::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(summary) if summary.all_succeeded() => process::exit(0),
        // Per-file errors have already been printed by the command
        Ok(_summary) => process::exit(1),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("clockskew - Event/Process Timestamp Discrepancy Auditor");
    println!("=======================================================");
    println!();
    println!("Read CSV-like exports with an event time and a process time on every row");
    println!("and list the rows where the event time is ahead of the process time.");
    println!();
    println!("USAGE:");
    println!("    clockskew <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    analyze     Analyze files or directories for time discrepancies");
    println!("    formats     List the accepted timestamp formats in priority order");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Analyze a single export:");
    println!("    clockskew analyze transactions.csv");
    println!();
    println!("    # Analyze a directory of semicolon-separated exports with custom columns:");
    println!("    clockskew analyze exports/ -d ';' \\");
    println!("                      --event-column client_ts --process-column server_ts");
    println!();
    println!("    # Machine-readable output:");
    println!("    clockskew analyze transactions.csv --format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    clockskew <COMMAND> --help");
}
