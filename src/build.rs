use std::io::Write;

use log::info;
use railnav_core::loading::create_rail_graph;
use railnav_core::{NetworkConfig, SubdivisionConfig, save_network};

use crate::CliError;
use crate::cli::BuildArgs;

pub fn run(args: &BuildArgs, out: &mut impl Write) -> Result<(), CliError> {
    let config = NetworkConfig {
        input_path: args.input.clone(),
        subdivision: SubdivisionConfig {
            long_edge_km: args.long_edge_km,
            split_edge_km: args.split_edge_km,
        },
    };

    let (graph, report) = create_rail_graph(&config)?;
    save_network(&graph, &args.output)?;
    info!("Network written to {}", args.output.display());

    let stats = graph.statistics();
    writeln!(out, "Built network from {}", args.input.display())?;
    writeln!(out, "  stations:              {}", report.stations)?;
    writeln!(out, "  track points:          {}", report.track_points)?;
    writeln!(out, "  edges:                 {}", stats.total_edges)?;
    writeln!(out, "  overwritten edges:     {}", report.edges_replaced)?;
    writeln!(out, "  skipped references:    {}", report.skipped_references)?;
    writeln!(out, "  malformed segments:    {}", report.malformed_segments)?;
    writeln!(
        out,
        "  long edges:            {} inspected, {} split",
        report.long_edges_inspected, report.edges_split
    )?;
    writeln!(out, "  total length:          {} km", stats.total_length_km)?;
    writeln!(
        out,
        "  connected components:  {}",
        stats.connected_components
    )?;
    writeln!(out, "Saved to {}", args.output.display())?;
    Ok(())
}
