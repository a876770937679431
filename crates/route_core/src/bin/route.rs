use route_core::{input::Network, util::cli};

fn main() -> anyhow::Result<()> {
    let cfg = cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cfg.log_filter()))
        .init();

    let network = Network::read_csv(&cfg.routes_file)?;
    if cfg.verbose {
        network.to_graph().print_info();
    }
    let query = network.query(&cfg.start, &cfg.end)?;
    let result = network.shortest_route(&query)?;

    if result.is_reachable() {
        println!("\nShortest Path: {}", result.render());
        println!("Total Distance: {}", result.distance);
    } else {
        println!(
            "\nNo path exists between {} and {}.",
            query.start, query.end
        );
    }

    Ok(())
}
