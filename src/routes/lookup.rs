// Route lookup engine with exact destination matching

use super::{Destination, Route, RoutingTable};

/// Next hop reported when no route matches a query
pub const NO_ROUTE_NEXT_HOP: &str = "0.0.0.0";

pub struct RouteEngine<'a> {
    routes: &'a [Route],
}

impl<'a> RouteEngine<'a> {
    pub fn new(routing_table: &'a RoutingTable) -> Self {
        RouteEngine {
            routes: &routing_table.routes,
        }
    }

    /// First route whose destination equals the queried network.
    /// The query mask is not compared.
    pub fn try_lookup(&self, query: &Destination) -> Option<&'a Route> {
        self.routes.iter().find(|route| route.dest == query.network)
    }

    /// Like `try_lookup`, but answers a miss with an empty route pointing at
    /// `NO_ROUTE_NEXT_HOP`
    pub fn lookup(&self, query: &Destination) -> Route {
        match self.try_lookup(query) {
            Some(route) => route.clone(),
            None => {
                tracing::debug!(network = %query.network, "No route found");
                Route {
                    nh: NO_ROUTE_NEXT_HOP.to_string(),
                    ..Default::default()
                }
            }
        }
    }
}
