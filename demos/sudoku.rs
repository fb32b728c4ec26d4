use std::collections::BTreeMap;

use clap::{Parser, ValueEnum};
use resilio::examples::sudoku::{build_csp, cell_name, render, seed_givens};
use resilio::solver::assignment::Assignment;
use resilio::solver::heuristics::variable::{
    DegreeHeuristic, MinimumRemainingValuesHeuristic, SelectFirstHeuristic,
};
use resilio::solver::stats::render_stats_table;
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Heuristic {
    None,
    Mrv,
    Degree,
}

#[derive(Parser, Debug)]
#[command(about = "Solve a seeded 4x4 sudoku with the CSP engine")]
struct Args {
    /// Variable-selection heuristic.
    #[arg(long, value_enum, default_value = "mrv")]
    heuristic: Heuristic,

    /// Print every committed partial grid while the search runs.
    #[arg(long)]
    watch: bool,

    /// Print the per-constraint statistics table after solving.
    #[arg(long)]
    stats: bool,

    /// Emit the solution as JSON keyed by cell name.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let mut csp = match args.heuristic {
        Heuristic::None => build_csp()?.with_variable_heuristic(Box::new(SelectFirstHeuristic)),
        Heuristic::Mrv => {
            build_csp()?.with_variable_heuristic(Box::new(MinimumRemainingValuesHeuristic))
        }
        Heuristic::Degree => build_csp()?.with_variable_heuristic(Box::new(DegreeHeuristic)),
    };

    if args.watch {
        csp = csp.with_observer(Box::new(|assignment: &Assignment<i64>| {
            println!("{}", render(assignment));
        }));
    }

    let givens = [(1, 2, 3), (2, 1, 4), (3, 3, 3), (3, 4, 2)];
    let initial = seed_givens(&mut csp, &givens)?;
    println!("Initial grid:\n{}", render(&initial));

    let (solution, stats) = csp.solve(initial)?;
    match solution {
        Some(solution) => {
            if args.json {
                let cells: BTreeMap<String, i64> = solution
                    .iter()
                    .map(|(&var, &value)| (cell_name(var), value))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&cells)?);
            } else {
                println!("Solution:\n{}", render(&solution));
            }
        }
        None => println!("No solution found."),
    }

    if args.stats {
        println!("{}", render_stats_table(&stats, csp.constraints()));
        println!(
            "nodes visited: {}, backtracks: {}, wipeouts: {}",
            stats.nodes_visited, stats.backtracks, stats.wipeouts
        );
    }

    Ok(())
}
