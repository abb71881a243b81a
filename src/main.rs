use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use omicron::config::CatalogConfig;
use omicron::listing::{listing, render_row};
use omicron::query::{FacetName, Query};
use omicron::{parse_query, SearchEngine};
use omicron_catalog::ingest::load_datasets;
use omicron_catalog::RecordStore;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Load CSV/JSONL datasets into an in-memory index; optional REPL to query
    Ingest {
        paths: Vec<PathBuf>,
        /// Start interactive REPL after ingest
        #[arg(long)]
        repl: bool,
    },
    /// One-shot search over the datasets
    Search(SearchArgs),
    /// Top-rated phones (the unfiltered view)
    Top { paths: Vec<PathBuf> },
    /// Brand names present in the datasets
    Brands { paths: Vec<PathBuf> },
}

#[derive(Args)]
struct SearchArgs {
    paths: Vec<PathBuf>,
    #[arg(long, default_value = "")]
    text: String,
    #[arg(long, default_value = "all")]
    brand: String,
    #[arg(long, default_value = "all")]
    os: String,
    /// budget | mid | premium
    #[arg(long, default_value = "all")]
    price: String,
    #[arg(long, default_value = "all")]
    ram: String,
    #[arg(long, default_value = "all")]
    storage: String,
    #[arg(long, default_value = "all")]
    battery: String,
    #[arg(long, default_value = "all")]
    camera: String,
    #[arg(long, default_value = "all")]
    screen: String,
    #[arg(long, default_value = "all")]
    processor: String,
    /// Sort hits by rating, highest first
    #[arg(long)]
    sort_rating: bool,
    /// Print hits as JSON lines
    #[arg(long)]
    json: bool,
}

impl SearchArgs {
    fn query(&self) -> Query {
        let mut q = Query::text(self.text.clone());
        let facets = [
            (FacetName::Brand, &self.brand),
            (FacetName::Os, &self.os),
            (FacetName::Price, &self.price),
            (FacetName::Ram, &self.ram),
            (FacetName::Storage, &self.storage),
            (FacetName::Battery, &self.battery),
            (FacetName::Camera, &self.camera),
            (FacetName::ScreenSize, &self.screen),
            (FacetName::Processor, &self.processor),
        ];
        for (name, raw) in facets {
            q.facets.set(name, raw);
        }
        q
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let cfg = CatalogConfig::from_env();
    match cli.cmd {
        Cmd::Ingest { paths, repl } => run_ingest(&cfg, paths, repl)?,
        Cmd::Search(args) => run_search(&cfg, args)?,
        Cmd::Top { paths } => run_top(&cfg, paths)?,
        Cmd::Brands { paths } => run_brands(&cfg, paths)?,
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_store(cfg: &CatalogConfig, paths: Vec<PathBuf>) -> Result<RecordStore> {
    let paths = cfg.datasets_or(paths);
    if paths.is_empty() {
        anyhow::bail!("no datasets: pass paths or set OMICRON_DATASETS");
    }
    Ok(load_datasets(&paths))
}

fn load_engine(cfg: &CatalogConfig, paths: Vec<PathBuf>) -> Result<SearchEngine> {
    let store = load_store(cfg, paths)?;
    Ok(SearchEngine::with_records(store.into_records()))
}

fn run_ingest(cfg: &CatalogConfig, paths: Vec<PathBuf>, repl: bool) -> Result<()> {
    let engine = load_engine(cfg, paths)?;
    eprintln!("ingested {} phones", engine.len());

    if repl {
        use std::io::{stdin, stdout, Write};
        let mut input = String::new();
        loop {
            input.clear();
            print!("query> ");
            stdout().flush().ok();
            match stdin().read_line(&mut input) {
                Ok(0) | Err(_) => break,
                Ok(_) => {}
            }
            let s = input.trim();
            if s == ":q" || s == ":quit" {
                break;
            }

            let q = parse_query(s);
            let shown = listing(&engine, &q, cfg, true);
            for (rank, rec) in shown.iter().enumerate() {
                println!("{}\t{}", rank + 1, render_row(rec, cfg));
            }
            println!("({} shown)", shown.len());
        }
    }
    Ok(())
}

fn run_search(cfg: &CatalogConfig, args: SearchArgs) -> Result<()> {
    let q = args.query();
    let engine = load_engine(cfg, args.paths.clone())?;
    for rec in listing(&engine, &q, cfg, args.sort_rating) {
        if args.json {
            println!("{}", serde_json::to_string(rec)?);
        } else {
            println!("{}", render_row(rec, cfg));
        }
    }
    Ok(())
}

fn run_top(cfg: &CatalogConfig, paths: Vec<PathBuf>) -> Result<()> {
    let engine = load_engine(cfg, paths)?;
    for rec in listing(&engine, &Query::default(), cfg, true) {
        println!("{}", render_row(rec, cfg));
    }
    Ok(())
}

fn run_brands(cfg: &CatalogConfig, paths: Vec<PathBuf>) -> Result<()> {
    for brand in load_store(cfg, paths)?.brands() {
        println!("{brand}");
    }
    Ok(())
}
