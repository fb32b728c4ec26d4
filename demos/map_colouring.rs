use resilio::examples::map_colouring::build_csp;
use resilio::solver::assignment::Assignment;
use resilio::solver::stats::render_stats_table;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut csp = build_csp()?;
    let (solution, stats) = csp.solve(Assignment::new())?;

    match solution {
        Some(solution) => {
            let names = ["WA", "NT", "SA", "Q", "NSW", "V", "T"];
            for var in csp.variables() {
                println!("{:>4}: {:?}", names[var as usize], solution.get(var).unwrap());
            }
        }
        None => println!("No colouring exists."),
    }

    println!("{}", render_stats_table(&stats, csp.constraints()));
    Ok(())
}
