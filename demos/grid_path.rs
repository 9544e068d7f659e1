//! Route across a random obstacle grid with each built-in heuristic and
//! compare how much work each one does.
//!
//! Run: RUST_LOG=debug cargo run --bin grid-path -- [seed] [density] [heuristic]

use waygraph_demos::{DEFAULT_DENSITY, DEFAULT_HEIGHT, DEFAULT_WIDTH, Scenario};
use waygraph_paths::{Builtin, PathSearch, SearchConfig};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(7);
    let density = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_DENSITY);
    let heuristics = match args.next().map(|s| s.parse::<Builtin>()) {
        None => Builtin::ALL.to_vec(),
        Some(Ok(h)) => vec![h],
        Some(Err(e)) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    let scenario = match Scenario::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, density, seed) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut search = PathSearch::new(SearchConfig::default());
    for h in heuristics {
        let result = search.search(&scenario.graph, scenario.start, scenario.goal, &h);
        let stats = search.stats();
        println!(
            "{h}: expanded {}, pushed {}, stale {}",
            stats.expanded, stats.pushed, stats.stale
        );
        match result {
            Ok(path) => {
                println!("cost {:.3} over {} vertices", path.cost, path.len());
                if scenario.may_overestimate(h) {
                    println!("note: {h} overestimates diagonal steps; cost may be suboptimal");
                }
                print!("{}", scenario.render(Some(&path)));
            }
            Err(e) if e.is_unreachable() => {
                println!("{e}");
                print!("{}", scenario.render(None));
            }
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        println!();
    }
}
