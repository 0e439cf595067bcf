use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-search")]
#[command(about = "Searches a directory of linked pages for a goal pattern")]
#[command(version)]
pub struct Args {
    /// Directory holding the pages, one file per page identity
    pub directory: PathBuf,

    /// Search strategy (breadth, depth, best, beam)
    pub strategy: String,

    /// Pops per cycle for the beam strategy
    #[arg(short, long)]
    pub beam_width: Option<usize>,

    /// Goal pattern: space-delimited tokens that must appear together
    #[arg(short, long)]
    pub goal: Option<String>,

    /// Identity of the start page
    #[arg(short, long)]
    pub start: Option<String>,

    /// JSON config file; command-line options override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,
}
