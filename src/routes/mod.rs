// Routes module - routing table schema, decoding, rendering and lookups
//
// The message types mirror the routetable protobuf schema field for field, so
// files written by any other implementation of the schema decode here.

pub mod format;
pub mod generator;
pub mod loader;
pub mod lookup;

use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, prost::Message)]
pub struct Route {
    #[prost(string, tag = "1")]
    pub dest: String,
    #[prost(string, tag = "2")]
    pub mask: String,
    /// Next hop
    #[prost(string, tag = "3")]
    pub nh: String,
    #[prost(int32, tag = "4")]
    pub metric: i32,
    #[prost(string, tag = "5")]
    pub interface: String,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, prost::Message)]
pub struct RoutingTable {
    #[prost(message, repeated, tag = "1")]
    pub routes: Vec<Route>,
}

/// Lookup key for a route query
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, prost::Message)]
pub struct Destination {
    #[prost(string, tag = "1")]
    pub network: String,
    #[prost(string, tag = "2")]
    pub mask: String,
}

/// Reply to a batch of added routes (`Result` in the schema)
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, prost::Message)]
pub struct AddRoutesResult {
    #[prost(bool, tag = "1")]
    pub success: bool,
}

impl Route {
    #[cfg(test)]
    pub fn new(dest: impl Into<String>) -> Self {
        Route {
            dest: dest.into(),
            ..Default::default()
        }
    }
}

impl RoutingTable {
    pub fn new(routes: Vec<Route>) -> Self {
        RoutingTable { routes }
    }

    /// Append routes in order and acknowledge them
    pub fn add_routes<I>(&mut self, routes: I) -> AddRoutesResult
    where
        I: IntoIterator<Item = Route>,
    {
        for route in routes {
            tracing::debug!(dest = %route.dest, "Adding route");
            self.routes.push(route);
        }
        AddRoutesResult { success: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_routes_keeps_order() {
        let mut table = RoutingTable::default();
        let result = table.add_routes(vec![Route::new("10.0.0.0/8"), Route::new("192.168.1.0/24")]);

        assert!(result.success);
        assert_eq!(table.routes.len(), 2);
        assert_eq!(table.routes[0].dest, "10.0.0.0/8");
        assert_eq!(table.routes[1].dest, "192.168.1.0/24");
    }

    #[test]
    fn test_route_new_leaves_other_fields_default() {
        let route = Route::new("10.0.0.0/8");
        assert_eq!(route.nh, "");
        assert_eq!(route.metric, 0);
    }
}
