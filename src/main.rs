use clap::Parser;
use color_eyre::eyre::eyre;

use flight_network::{app::App, cli::Cli, logging};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // the explorer owns the terminal, so it only logs to a file
    if cli.headless || cli.log_file.is_some() {
        let level = cli.log_level.as_deref().unwrap_or("warn");
        logging::init_tracing(level, cli.log_json, cli.log_file.as_deref())
            .map_err(|e| eyre!("failed to initialize logging: {e}"))?;
    }

    let mut network = cli.build_network();

    if cli.headless {
        network.print_graph();
        let (start, tree) = match cli.mst_start.as_deref() {
            Some(start) => (start.to_string(), network.minimum_spanning_tree_from(start)),
            None => (
                network.cities().next().unwrap_or_default().to_string(),
                network.minimum_spanning_tree(),
            ),
        };
        println!(
            "Minimum spanning tree from {start}: {tree} (total distance {})",
            tree.total_weight()
        );
        return Ok(());
    }

    let terminal = ratatui::init();
    let result = App::new(network).run(terminal);
    ratatui::restore();
    result
}
