//! Facade crate for the AEV route energy calculator workspace.
//!
//! Re-exports the member crates under stable module names so consumers
//! (tests, notebooks, future front-ends) depend on one package. The
//! simulation itself lives in `aev_sim`; route-level chaining in
//! `aev_route`.

pub use aev_core::{constants, units};

pub use aev_config as config;
pub use aev_route as route;
pub use aev_sim as sim;
pub use aev_vehicle as vehicle;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
