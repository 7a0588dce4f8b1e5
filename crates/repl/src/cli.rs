use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(author = "Daniel Holzner", version, about, long_about = None)]
struct Cli {
    /// Road file with the header `source,target,weight`. The built-in city
    /// map is used if omitted
    #[arg(short, long, value_name = "csv")]
    roads: Option<PathBuf>,

    /// File every planned delivery is appended to
    #[arg(short, long, value_name = "csv", default_value = "deliveries.csv")]
    log: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub roads: Option<PathBuf>,
    pub log_file: PathBuf,
}

pub fn parse() -> Cfg {
    let cli = Cli::parse();

    Cfg {
        roads: cli.roads,
        log_file: cli.log,
    }
}
