// Route table loader - turns encoded bytes into a RoutingTable and back

use std::path::Path;

use prost::Message;

use super::{Route, RoutingTable};
use crate::error::{AppError, AppResult};

/// Decode an encoded RoutingTable.
///
/// An empty buffer is rejected even though the wire format would read it as a
/// table with no routes: a zero-length data file is treated as corrupt.
pub fn decode(bytes: &[u8]) -> AppResult<RoutingTable> {
    if bytes.is_empty() {
        return Err(AppError::EmptyBuffer);
    }
    let table = RoutingTable::decode(bytes)?;
    tracing::debug!(routes = table.routes.len(), bytes = bytes.len(), "Decoded routing table");
    Ok(table)
}

pub fn encode(table: &RoutingTable) -> Vec<u8> {
    table.encode_to_vec()
}

pub fn routes(table: &RoutingTable) -> &[Route] {
    &table.routes
}

/// Destination of a route, empty when the field was never set
pub fn dest(route: &Route) -> &str {
    &route.dest
}

pub fn first_route(table: &RoutingTable) -> AppResult<&Route> {
    table.routes.first().ok_or(AppError::EmptyTable)
}

/// Read a whole data file and decode it
pub fn load_file(path: impl AsRef<Path>) -> AppResult<RoutingTable> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| AppError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Read {} bytes from {}", bytes.len(), path.display());
    decode(&bytes)
}

pub fn save_file(table: &RoutingTable, path: impl AsRef<Path>) -> AppResult<()> {
    let path = path.as_ref();
    let bytes = encode(table);
    std::fs::write(path, &bytes).map_err(|source| AppError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Wrote {} routes ({} bytes) to {}", table.routes.len(), bytes.len(), path.display());
    Ok(())
}
