//! Full delivery tours over the street network.
//!
//! [`DeliveryPlanner::plan`] runs the estimator to settle the stop order,
//! then routes every leg of the tour with a [`Router`]:
//!
//! ```text
//! depot ──leg──► stop 1 ──leg──► … ──leg──► stop n ──leg──► depot
//! ```
//!
//! Legs are independent queries against the same read-only map.  With the
//! `parallel` feature they run on Rayon's thread pool; results are always
//! assembled in tour order, and the first failing leg (in tour order)
//! fails the plan.

use dr_core::{DeliveryRequest, GeoCoord, ReorderPolicy};
use dr_spatial::{Route, Router, SpatialResult};

use crate::optimizer::{CrowDistances, DeliveryOptimizer};
use crate::DeliveryResult;

/// Where a leg ends.
#[derive(Clone, Debug, PartialEq)]
pub enum Stop {
    Delivery { item: String, location: GeoCoord },
    Depot(GeoCoord),
}

impl Stop {
    pub fn location(&self) -> &GeoCoord {
        match self {
            Stop::Delivery { location, .. } => location,
            Stop::Depot(location) => location,
        }
    }
}

/// One routed hop of the tour.
#[derive(Clone, Debug, PartialEq)]
pub struct Leg {
    pub from:        GeoCoord,
    pub destination: Stop,
    pub route:       Route,
}

/// A routed delivery tour.
#[derive(Clone, Debug, PartialEq)]
pub struct DeliveryPlan {
    /// Depot → deliveries → depot.  Empty when there is nothing to deliver.
    pub legs: Vec<Leg>,
    /// Sum of the legs' route distances, in miles.
    pub total_distance_miles: f64,
    /// The estimator's crow-distance figures for the chosen order.
    pub crow: CrowDistances,
}

/// Orders deliveries and routes the resulting tour.
pub struct DeliveryPlanner<R: Router> {
    router:    R,
    optimizer: DeliveryOptimizer,
}

impl<R: Router> DeliveryPlanner<R> {
    pub fn new(router: R, policy: ReorderPolicy) -> Self {
        Self { router, optimizer: DeliveryOptimizer::new(policy) }
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    /// Reorder `deliveries` in place and route the tour in that order.
    ///
    /// # Errors
    ///
    /// [`DeliveryError::Spatial`](crate::DeliveryError::Spatial) with the
    /// first leg that cannot be routed.
    pub fn plan(
        &self,
        depot: &GeoCoord,
        deliveries: &mut Vec<DeliveryRequest>,
    ) -> DeliveryResult<DeliveryPlan> {
        let crow = self.optimizer.estimate(depot, deliveries);
        if deliveries.is_empty() {
            return Ok(DeliveryPlan { legs: Vec::new(), total_distance_miles: 0.0, crow });
        }

        let stops: Vec<Stop> = deliveries
            .iter()
            .map(|d| Stop::Delivery { item: d.item.clone(), location: d.location.clone() })
            .chain(std::iter::once(Stop::Depot(depot.clone())))
            .collect();
        let origins: Vec<&GeoCoord> = std::iter::once(depot)
            .chain(deliveries.iter().map(|d| &d.location))
            .collect();

        let routes = self.route_legs(&origins, &stops);

        let mut legs = Vec::with_capacity(stops.len());
        let mut total_distance_miles = 0.0;
        for ((from, destination), route) in origins.into_iter().zip(stops).zip(routes) {
            let route = route?;
            total_distance_miles += route.distance_miles;
            legs.push(Leg { from: from.clone(), destination, route });
        }

        tracing::info!(
            legs = legs.len(),
            total_distance_miles,
            crow_miles = crow.optimized_miles,
            "delivery plan ready"
        );
        Ok(DeliveryPlan { legs, total_distance_miles, crow })
    }

    /// Route `origins[i] → stops[i]` for every `i`, in tour order.
    fn route_legs(&self, origins: &[&GeoCoord], stops: &[Stop]) -> Vec<SpatialResult<Route>> {
        #[cfg(not(feature = "parallel"))]
        {
            origins
                .iter()
                .zip(stops)
                .map(|(from, stop)| self.router.route(from, stop.location()))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            origins
                .par_iter()
                .zip(stops.par_iter())
                .map(|(from, stop)| self.router.route(from, stop.location()))
                .collect()
        }
    }
}
