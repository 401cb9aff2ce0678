use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;

use super::raw_types::RawNetwork;
use crate::Error;

/// Reads raw records from a JSON file and prepares them for the builder
pub fn read_raw_network(path: &Path) -> Result<RawNetwork, Error> {
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;
    let mut raw: RawNetwork = serde_json::from_reader(BufReader::new(file))?;

    let dropped = raw.prepare();
    if dropped > 0 {
        info!("Skipped {dropped} abandoned or disused segments");
    }

    Ok(raw)
}
