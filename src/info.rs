use std::io::Write;

use railnav_core::load_network;

use crate::CliError;
use crate::cli::InfoArgs;

pub fn run(args: &InfoArgs, out: &mut impl Write) -> Result<(), CliError> {
    let network = load_network(&args.network)?;
    let stats = network.statistics();

    writeln!(out, "Network {}", args.network.display())?;
    writeln!(out, "  nodes:                 {}", stats.total_nodes)?;
    writeln!(out, "  edges:                 {}", stats.total_edges)?;
    writeln!(out, "  stations:              {}", stats.stations)?;
    writeln!(out, "  track points:          {}", stats.track_points)?;
    writeln!(out, "  total length:          {} km", stats.total_length_km)?;
    writeln!(
        out,
        "  connected components:  {}",
        stats.connected_components
    )?;
    for (kind, stations) in network.stations_by_kind() {
        writeln!(out, "  {kind}: {}", stations.len())?;
    }
    Ok(())
}
