//! Fluent builder for constructing a [`Sim`].

use ant_core::SimConfig;
use ant_graph::TunnelNetwork;
use ant_route::{plan_routes, Route};

use crate::{AntStore, Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - a validated [`TunnelNetwork`]
/// - the ant count (must be positive)
/// - a [`SimConfig`] (must have a non-zero step cap)
///
/// # Optional inputs
///
/// | Method        | Default                                     |
/// |---------------|---------------------------------------------|
/// | `.routes(v)`  | `ant_route::plan_routes(&network, count)`   |
///
/// Supplying routes explicitly is how tests pin a specific assignment; the
/// default runs the full enumerate→select→assign pipeline, and its
/// structural failures (`NoPath`, `NoDisjointRoutes`) surface from
/// [`build`](Self::build) before any step executes.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(network, 4, SimConfig::default()).build()?;
/// let summary = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    network:   TunnelNetwork,
    ant_count: usize,
    config:    SimConfig,
    routes:    Option<Vec<Route>>,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(network: TunnelNetwork, ant_count: usize, config: SimConfig) -> Self {
        Self {
            network,
            ant_count,
            config,
            routes: None,
        }
    }

    /// Supply per-ant routes (must be length `ant_count`), bypassing the
    /// planning pipeline.
    pub fn routes(mut self, routes: Vec<Route>) -> Self {
        self.routes = Some(routes);
        self
    }

    /// Validate inputs, plan routes if none were supplied, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        if self.ant_count == 0 {
            return Err(SimError::Config("at least one ant is required".into()));
        }
        if self.config.max_steps == 0 {
            return Err(SimError::Config("max_steps must be non-zero".into()));
        }

        let routes = match self.routes {
            Some(r) => {
                if r.len() != self.ant_count {
                    return Err(SimError::AntCountMismatch {
                        expected: self.ant_count,
                        got:      r.len(),
                        what:     "assigned routes",
                    });
                }
                r
            }
            None => plan_routes(&self.network, self.ant_count)?,
        };

        let ants = AntStore::new(self.ant_count, self.network.start);

        Ok(Sim {
            config:  self.config,
            network: self.network,
            ants,
            routes,
        })
    }
}
