// src/cli.rs
// Command line shell (feature `cli`).

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;

use crate::config::consts::{BASE_URL, FETCH_TIMEOUT_SECS};
use crate::config::options::{ExportFormat, FetchOptions, Operation};
use crate::csv::write_table;
use crate::data::ResultTable;
use crate::leagues::{League, LeagueKind};
use crate::params::{Aggregation, StatsRequest, Subject};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LeagueArg {
    Nbb,
    LigaOuro,
    Ldb,
}

impl From<LeagueArg> for LeagueKind {
    fn from(l: LeagueArg) -> Self {
        match l {
            LeagueArg::Nbb => LeagueKind::Nbb,
            LeagueArg::LigaOuro => LeagueKind::LigaOuro,
            LeagueArg::Ldb => LeagueKind::Ldb,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Csv,
    Tsv,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "cli")]
#[command(about = "Standings, scores and stats tables from lnb.com.br")]
struct Cli {
    /// League to query
    #[arg(short, long, global = true, value_enum, default_value = "nbb")]
    league: LeagueArg,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "csv")]
    format: FormatArg,

    /// Include the header line
    #[arg(long, global = true)]
    headers: bool,

    /// Write to a file instead of stdout
    #[arg(short, long, global = true)]
    out: Option<PathBuf>,

    /// Site root
    #[arg(long, global = true, default_value = BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = FETCH_TIMEOUT_SECS)]
    timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// League standings for a season
    Classification {
        season: String,
    },
    /// Game results for a season
    Scores {
        season: String,
        /// regular | playoffs | total (LDB: regular | total)
        #[arg(short, long, default_value = "regular")]
        phase: String,
    },
    /// Player or team stat leaders
    Stats {
        season: String,
        /// Stat category, e.g. pontos, rebotes, cestinhas
        category: String,
        #[arg(short, long, default_value = "regular")]
        phase: String,
        /// avg | sum
        #[arg(long, default_value = "avg")]
        aggr: String,
        /// athletes | teams
        #[arg(long, default_value = "athletes")]
        subject: String,
        /// ambos | mandante | visitante
        #[arg(long, default_value = "ambos")]
        venue: String,
        /// Count events suffered instead of caused (true | false)
        #[arg(long, default_value = "false")]
        conceded: String,
    },
    /// List legal parameter values for the league
    Domains,
}

fn print_domains(league: LeagueKind) {
    let cfg = league.config();
    println!("league: {} ({})", cfg.name, cfg.key);
    for op in Operation::ALL {
        println!("{} seasons: {}", op.key(), cfg.seasons(op).join(", "));
    }
    println!("phases: {}", cfg.phase_keys().join(", "));
    println!("categories: {}", cfg.categories().join(", "));
    println!("aggregations: {}", Aggregation::KEYS.join(", "));
    println!("subjects: {}", Subject::KEYS.join(", "));
    println!("venues: {}", cfg.venue_keys().join(", "));
}

fn emit(table: &ResultTable, cli: &Cli) -> Result<()> {
    if let Some(msg) = table.advisory() {
        eprintln!("{msg}");
    }
    let format = ExportFormat::from(cli.format);
    match &cli.out {
        Some(path) => {
            let file = File::create(path).wrap_err_with(|| format!("creating {}", path.display()))?;
            write_table(BufWriter::new(file), table, format, cli.headers)?;
            info!(path = %path.display(), rows = table.len(), "wrote table");
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            write_table(&mut lock, table, format, cli.headers)?;
            lock.flush()?;
        }
    }
    Ok(())
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::log::init_stderr();

    let league = LeagueKind::from(cli.league);
    let opts = FetchOptions::default()
        .with_base_url(&cli.base_url)
        .with_timeout(cli.timeout);

    let table = match &cli.command {
        Command::Domains => {
            print_domains(league);
            return Ok(());
        }
        Command::Classification { season } => league.adapter(&opts)?.classification(season)?,
        Command::Scores { season, phase } => league.adapter(&opts)?.scores(season, phase)?,
        Command::Stats { season, category, phase, aggr, subject, venue, conceded } => {
            let req = StatsRequest::new(season, phase, category)
                .aggregation(aggr)
                .subject(subject)
                .venue(venue)
                .conceded(conceded);
            league.adapter(&opts)?.stats(&req)?
        }
    };

    emit(&table, &cli)
}
