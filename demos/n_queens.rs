use clap::Parser;
use resilio::solver::assignment::Assignment;
use resilio::solver::constraints::all_different::AllDifferentConstraint;
use resilio::solver::engine::Csp;
use resilio::solver::heuristics::variable::MinimumRemainingValuesHeuristic;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Place N queens with one variable per column")]
struct Args {
    /// Board size.
    #[arg(default_value_t = 8)]
    n: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();
    let n = args.n;

    let mut csp: Csp<i64> = Csp::new(vec![(0..n as i64).collect(); n])
        .with_variable_heuristic(Box::new(MinimumRemainingValuesHeuristic));

    // One queen per column; rows all distinct.
    csp.add_constraint(Box::new(AllDifferentConstraint::new(
        (0..n as u32).collect(),
    )))?;

    // Diagonals as closure constraints over each column pair.
    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = (i as u32, j as u32);
            let column_diff = (j - i) as i64;
            csp.add_predicate(vec![a, b], move |assignment: &Assignment<i64>| {
                match (assignment.get(a), assignment.get(b)) {
                    (Some(&row_a), Some(&row_b)) => (row_a - row_b).abs() != column_diff,
                    _ => true,
                }
            })?;
        }
    }

    let (solution, stats) = csp.solve(Assignment::new())?;
    match solution {
        Some(solution) => {
            for row in 0..n as i64 {
                let line: String = (0..n as u32)
                    .map(|col| {
                        if solution.get(col) == Some(&row) {
                            'Q'
                        } else {
                            '.'
                        }
                    })
                    .collect();
                println!("{line}");
            }
        }
        None => println!("No arrangement for n = {n}."),
    }
    println!(
        "nodes visited: {}, backtracks: {}",
        stats.nodes_visited, stats.backtracks
    );

    Ok(())
}
