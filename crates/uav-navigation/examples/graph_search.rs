use uav_navigation::{GraphSearch, Point, SearchConfig, Uav};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .init();

    let start = Point::new(0.0, 0.0);
    let destination = Point::new(12.0, 7.5);
    let search = GraphSearch::new(SearchConfig::default())?;
    let uav = Uav::new(start, 180.0, 20.0, 1.0);

    println!("{}", uav);
    println!("Destination: {}\n", destination);

    let outcome = search.calculate_detailed(&uav, destination);
    println!("{}\n", outcome);

    if outcome.is_success() {
        for (i, waypoint) in outcome.path.iter().enumerate() {
            println!("{:>3}: {}", i, waypoint);
        }
    } else {
        println!("No path found ({:?}).", outcome.termination);
    }

    Ok(())
}
