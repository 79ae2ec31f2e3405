// Sample route generators for building test tables

use rand::Rng;

use super::{Route, RoutingTable};

const SAMPLE_MASK: &str = "255.255.255.0";
const SAMPLE_INTERFACE: &str = "eth0";

/// The catch-all route that leads every sample table
pub fn default_route() -> Route {
    Route {
        dest: "0.0.0.0".to_string(),
        mask: "0.0.0.0".to_string(),
        nh: "10.1.1.1".to_string(),
        metric: 1,
        interface: SAMPLE_INTERFACE.to_string(),
    }
}

pub fn static_route() -> Route {
    subnet_route(192, 168, 100)
}

/// A /24 route to a.b.c.0 via b.a.c.1, with a, b, c drawn from 1..=254
pub fn random_route<R: Rng + ?Sized>(rng: &mut R) -> Route {
    let a = rng.gen_range(1..=254);
    let b = rng.gen_range(1..=254);
    let c = rng.gen_range(1..=254);
    subnet_route(a, b, c)
}

fn subnet_route(a: u8, b: u8, c: u8) -> Route {
    Route {
        dest: format!("{}.{}.{}.0", a, b, c),
        mask: SAMPLE_MASK.to_string(),
        nh: format!("{}.{}.{}.1", b, a, c),
        metric: 1,
        interface: SAMPLE_INTERFACE.to_string(),
    }
}

pub fn sample_table<R: Rng + ?Sized>(random_count: usize, rng: &mut R) -> RoutingTable {
    let mut table = RoutingTable::new(vec![default_route(), static_route()]);
    table.add_routes((0..random_count).map(|_| random_route(rng)));
    table
}
