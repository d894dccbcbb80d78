use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use rmp_serde::Serializer;
use serde::Serialize;

use crate::model::network::Network;

fn extension(path: &Path) -> String {
  path.extension().and_then(|e| e.to_str()).unwrap_or("").to_lowercase()
}

impl Network {
  /// Save the resolved network as JSON (.json) or MessagePack (.mpk, .msgpack)
  pub fn save_network(&self, file: impl AsRef<Path>) -> Result<(), String> {
    let path = file.as_ref();
    let file_extension = extension(path);

    if !matches!(file_extension.as_str(), "json" | "mpk" | "msgpack") {
      return Err(format!("Unsupported file extension: {}", file_extension));
    }

    let file = File::create(path).map_err(|e| format!("Failed to create output file: {}", e))?;
    let writer = BufWriter::new(file);

    if file_extension == "json" {
      serde_json::to_writer_pretty(writer, self).map_err(|e| format!("Failed to write network to file: {}", e))?;
    } else {
      let mut serializer = Serializer::new(writer);
      self.serialize(&mut serializer).map_err(|e| format!("Failed to write network to file: {}", e))?;
    }

    Ok(())
  }

  /// Load a network previously written by [`Network::save_network`]
  pub fn load_network(file: impl AsRef<Path>) -> Result<Network, String> {
    let path = file.as_ref();
    let file_extension = extension(path);

    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let reader = BufReader::new(file);

    let mut network: Network = match file_extension.as_str() {
      "json" => serde_json::from_reader(reader).map_err(|e| format!("Failed to read network: {}", e))?,
      "mpk" | "msgpack" => rmp_serde::from_read(reader).map_err(|e| format!("Failed to read network: {}", e))?,
      _ => return Err(format!("Unsupported file extension: {}", file_extension)),
    };
    network.rebuild_maps();
    Ok(network)
  }
}
