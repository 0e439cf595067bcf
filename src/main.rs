use clap::Parser;
use page_search::{DirectoryStore, Search, SearchError, SearchOutcome};

mod args;
use args::Args;

fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let search = match build_search(&args) {
        Ok(search) => search,
        Err(e) => {
            ::log::error!("Invalid configuration: {}", e);
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    let store = DirectoryStore::new(&args.directory);
    let outcome = match search.run(&store) {
        Ok(outcome) => outcome,
        Err(e) => {
            ::log::error!("Search did not start: {}", e);
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    report(&args, search.config().start.as_str(), &outcome);
}

/// Config file first, then command-line overrides
fn build_search(args: &Args) -> Result<Search, SearchError> {
    let mut search = Search::new();
    if let Some(path) = &args.config {
        search = search.with_config_file(path)?;
    }

    search = search.with_strategy(args.strategy.as_str());
    if let Some(width) = args.beam_width {
        search = search.with_beam_width(width);
    }
    if let Some(goal) = &args.goal {
        search = search.with_goal_pattern(goal.as_str());
    }
    if let Some(start) = &args.start {
        search = search.with_start(start.as_str());
    }
    Ok(search)
}

fn report(args: &Args, start: &str, outcome: &SearchOutcome) {
    if args.json {
        match serde_json::to_string_pretty(outcome) {
            Ok(json) => println!("{}", json),
            Err(e) => ::log::error!("Failed to serialize outcome: {}", e),
        }
        return;
    }

    if outcome.found {
        println!("Solution path: {}", outcome.path_line());
        println!("Path size: {}", outcome.path_len());
    } else {
        println!("No page matched the goal pattern.");
    }
    let location = args.directory.join(start);
    println!("{}", outcome.summary(&location.display().to_string()));
}
