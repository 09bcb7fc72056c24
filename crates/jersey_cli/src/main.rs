//! Jersey CLI
//!
//! Roster snapshot → jersey number assignments (JSON/CSV)

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "cli")]
use jersey_cli::SnapshotSource;
#[cfg(feature = "cli")]
use jersey_core::{AllocatorConfig, AssignmentMethod, Severity, SnapshotValidator};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "jersey_cli")]
#[command(about = "Allocate jersey numbers from a roster snapshot", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct InputArgs {
    /// Snapshot JSON file ({ "players": [...], "jerseys": [...] })
    #[arg(long, conflicts_with_all = ["players", "submissions", "jerseys"])]
    snapshot: Option<PathBuf>,

    /// Players CSV file
    #[arg(long, requires_all = ["submissions", "jerseys"])]
    players: Option<PathBuf>,

    /// Submissions CSV file
    #[arg(long)]
    submissions: Option<PathBuf>,

    /// Jersey inventory CSV file
    #[arg(long)]
    jerseys: Option<PathBuf>,
}

#[cfg(feature = "cli")]
impl InputArgs {
    fn source(&self) -> Result<SnapshotSource> {
        match (&self.snapshot, &self.players, &self.submissions, &self.jerseys) {
            (Some(path), _, _, _) => Ok(SnapshotSource::Json(path.clone())),
            (None, Some(players), Some(submissions), Some(jerseys)) => Ok(SnapshotSource::Csv {
                players: players.clone(),
                submissions: submissions.clone(),
                jerseys: jerseys.clone(),
            }),
            _ => anyhow::bail!("Provide --snapshot or all of --players, --submissions, --jerseys"),
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct ConfigArgs {
    /// Allocator config JSON file (overrides the flags below)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Leave administratively disabled numbers out of the pool
    #[arg(long, default_value = "false")]
    honor_availability: bool,

    /// Leave returning players whose old number is gone unassigned
    #[arg(long, default_value = "false")]
    no_reroute: bool,
}

#[cfg(feature = "cli")]
impl ConfigArgs {
    fn load(&self) -> Result<AllocatorConfig> {
        use anyhow::Context;

        if let Some(path) = &self.config {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            return serde_json::from_str(&json)
                .with_context(|| format!("Failed to parse config file: {}", path.display()));
        }
        Ok(AllocatorConfig {
            honor_availability_flag: self.honor_availability,
            reroute_unretained: !self.no_reroute,
            ..AllocatorConfig::default()
        })
    }
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Run the allocator and write assignments
    Allocate {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        config: ConfigArgs,

        /// Output assignments JSON file path
        #[arg(long)]
        out: PathBuf,

        /// Also write assignments as CSV
        #[arg(long)]
        csv_out: Option<PathBuf>,

        /// Output full run (report, issues, metadata) JSON file
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Check a snapshot for data problems without allocating
    Validate {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Allocate and print the coverage report only
    Report {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        config: ConfigArgs,
    },
}

#[cfg(feature = "cli")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Allocate {
            input,
            config,
            out,
            csv_out,
            report,
        } => {
            let snapshot = jersey_cli::load_snapshot(&input.source()?)?;
            println!("Allocating jersey numbers...");
            println!("   Players: {}", snapshot.players.len());
            println!("   Jerseys: {}", snapshot.jerseys.len());

            let run = jersey_cli::run(&snapshot, config.load()?)?;
            jersey_cli::write_json(&out, &run.assignments)?;
            println!("\nAssignments written to: {}", out.display());

            if let Some(path) = csv_out {
                jersey_cli::write_assignments_csv(&path, &run.assignments)?;
                println!("CSV written to: {}", path.display());
            }
            if let Some(path) = report {
                jersey_cli::write_json(&path, &run)?;
                println!("Run report written to: {}", path.display());
            }

            print_report(&run.report, &snapshot.players);
            print_issue_summary(&run.issues);
            println!("   Fingerprint:  {}", run.metadata.fingerprint);
        }

        Commands::Validate { input } => {
            let snapshot = jersey_cli::load_snapshot(&input.source()?)?;
            let issues = SnapshotValidator::validate(&snapshot.players, &snapshot.jerseys);
            if issues.is_empty() {
                println!("Snapshot is clean");
                return Ok(());
            }
            for issue in &issues {
                let tag = match issue.severity() {
                    Severity::Error => "error",
                    Severity::Warning => "warning",
                };
                println!("{:>7}: {}", tag, issue);
            }
            if SnapshotValidator::has_errors(&issues) {
                anyhow::bail!("Snapshot has {} issue(s) including errors", issues.len());
            }
        }

        Commands::Report { input, config } => {
            let snapshot = jersey_cli::load_snapshot(&input.source()?)?;
            let run = jersey_cli::run(&snapshot, config.load()?)?;
            print_report(&run.report, &snapshot.players);
            print_issue_summary(&run.issues);
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn print_report(report: &jersey_core::AllocationReport, players: &[jersey_core::Player]) {
    println!("\nAllocation summary");
    println!("   Total players:   {}", report.total_players);
    println!(
        "   Submitted:       {} ({}%)",
        report.submitted, report.completion_rate
    );
    println!("   Assigned:        {}", report.assigned);
    for method in AssignmentMethod::ALL {
        println!("     {:<14} {}", method.as_str(), report.by_method.get(method));
    }
    for id in &report.unassigned {
        let name = players
            .iter()
            .find(|p| &p.id == id)
            .map(|p| p.full_name())
            .filter(|name| !name.is_empty());
        match name {
            Some(name) => println!("   Unassigned:      {} ({})", id, name),
            None => println!("   Unassigned:      {}", id),
        }
    }
    println!("   Unused numbers:  {}", report.unused_numbers.len());
    for mismatch in &report.size_mismatches {
        println!(
            "   Size mismatch:   {} got #{} recorded as {} (stocked: {})",
            mismatch.player_id,
            mismatch.jersey_number,
            mismatch.assigned_size.label(),
            mismatch
                .stocked_sizes
                .iter()
                .map(|s| s.code())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
}

#[cfg(feature = "cli")]
fn print_issue_summary(issues: &[jersey_core::ValidationIssue]) {
    if !issues.is_empty() {
        println!(
            "   Data issues:     {} (run `jersey_cli validate` for details)",
            issues.len()
        );
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("jersey_cli is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
