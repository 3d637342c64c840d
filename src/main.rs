use anyhow::Result;
use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::path::PathBuf;

use rekap::cli::{
    handle_amount_command, handle_daily_command, handle_export_command, handle_show_command,
    handle_summary_command, AmountCommands, CliContext, DailyCommands, ExportCommands, ShowFormat,
    SummaryCommands,
};
use rekap::config::{LedgerSeed, RekapPaths, Settings};

#[derive(Parser)]
#[command(
    name = "rekap",
    author = "Iqbal",
    version,
    about = "Monthly budget dashboard: daily expenses, income/expense recap and balance",
    long_about = "Rekap tracks one month of daily expenses per category, rolls them up \
                  into a recap of income and expenses, and shows the current balance. \
                  Both ledgers can be saved as CSV files."
)]
struct Cli {
    /// Directory the CSV files are read from and written to
    #[arg(short, long, global = true, env = "REKAP_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard
    #[command(alias = "ui")]
    Tui,

    /// Print the whole dashboard
    Show {
        /// Include days without any expense
        #[arg(short, long)]
        all: bool,
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ShowFormat,
    },

    /// Daily expense ledger commands
    #[command(subcommand)]
    Daily(DailyCommands),

    /// Income/expense recap commands
    #[command(subcommand)]
    Summary(SummaryCommands),

    /// Export ledgers to files
    #[command(subcommand)]
    Export(ExportCommands),

    /// Parse or format Rupiah amounts
    #[command(subcommand)]
    Amount(AmountCommands),

    /// Write default settings and seed files
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = RekapPaths::new()?;
    let launches_tui = matches!(cli.command, None | Some(Commands::Tui));
    init_logging(&paths, launches_tui);

    let settings = Settings::load_or_create(&paths)?;
    let seed = LedgerSeed::load_or_default(&paths)?;
    let ctx = CliContext::new(settings, seed, cli.output_dir);

    match cli.command {
        None | Some(Commands::Tui) => {
            let dashboard = ctx.load_dashboard()?;
            rekap::tui::run_tui(dashboard, &ctx.settings, &ctx.output_dir)?;
        }
        Some(Commands::Show { all, format }) => handle_show_command(&ctx, all, format)?,
        Some(Commands::Daily(cmd)) => handle_daily_command(&ctx, cmd)?,
        Some(Commands::Summary(cmd)) => handle_summary_command(&ctx, cmd)?,
        Some(Commands::Export(cmd)) => handle_export_command(&ctx, cmd)?,
        Some(Commands::Amount(cmd)) => handle_amount_command(cmd)?,
        Some(Commands::Init) => {
            println!("Initializing Rekap at: {}", paths.base_dir().display());
            ctx.settings.save(&paths)?;
            if paths.seed_file().exists() {
                println!("Keeping existing seed: {}", paths.seed_file().display());
            } else {
                ctx.seed.save(&paths)?;
                println!("Wrote seed: {}", paths.seed_file().display());
            }
            println!();
            println!("Categories: {}", ctx.seed.categories.join(", "));
            println!("Edit seed.yaml to change categories or the prefilled recap rows.");
        }
        Some(Commands::Config) => {
            println!("Rekap Configuration");
            println!("===================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Seed file:        {}", paths.seed_file().display());
            println!("Output directory: {}", ctx.output_dir.display());
            if !paths.is_initialized() {
                println!("(not initialized, run `rekap init` to write the defaults)");
            }
            println!();
            println!("Settings:");
            println!("  Profile: {}", ctx.settings.profile_name);
            println!("  Period:  {} ({})", ctx.settings.period.label(), ctx.settings.period);
            println!("  Categories: {}", ctx.seed.categories.join(", "));
        }
    }

    Ok(())
}

/// Log to stderr, or to the log file while the TUI owns the terminal
fn init_logging(paths: &RekapPaths, to_file: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if to_file {
        let file = paths
            .ensure_directories()
            .ok()
            .and_then(|_| {
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(paths.log_file())
                    .ok()
            });
        match file {
            Some(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            None => {
                builder.filter_level(log::LevelFilter::Off);
            }
        }
    }

    builder.init();
}
