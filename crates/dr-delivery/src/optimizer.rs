//! Crow-distance tour estimation and stop reordering.
//!
//! A tour always starts and ends at the depot:
//!
//! ```text
//! depot → deliveries[0] → deliveries[1] → … → deliveries[n-1] → depot
//! ```
//!
//! Its crow distance is the sum of great-circle distances between
//! consecutive points, in miles.  The estimator measures the caller's order
//! (the baseline), reorders according to its [`ReorderPolicy`], and measures
//! again with the same summation.  A reordering is only kept if it is
//! strictly shorter, so `optimized_miles <= baseline_miles` always holds and
//! the set of deliveries is never changed.

use dr_core::{DeliveryRequest, GeoCoord, ReorderPolicy};

/// Smallest 2-opt gain (miles) worth applying.  Keeps float noise from
/// cycling reversals forever.
const TWO_OPT_EPSILON: f64 = 1e-12;

/// Baseline and post-reordering tour lengths.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CrowDistances {
    /// Crow distance of the tour in the order supplied.
    pub baseline_miles: f64,
    /// Crow distance of the tour in the order left in the list.
    pub optimized_miles: f64,
}

/// Crow distance of `depot → stops… → depot`, in miles.
pub fn tour_crow_distance<'a, I>(depot: &GeoCoord, stops: I) -> f64
where
    I: IntoIterator<Item = &'a GeoCoord>,
{
    let mut total = 0.0;
    let mut prev = depot;
    for stop in stops {
        total += prev.distance_miles(stop);
        prev = stop;
    }
    total + prev.distance_miles(depot)
}

/// Estimates and (optionally) shortens a delivery tour.
#[derive(Copy, Clone, Debug, Default)]
pub struct DeliveryOptimizer {
    policy: ReorderPolicy,
}

impl DeliveryOptimizer {
    pub fn new(policy: ReorderPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ReorderPolicy {
        self.policy
    }

    /// Measure the tour, reorder `deliveries` in place, and measure again.
    pub fn estimate(&self, depot: &GeoCoord, deliveries: &mut Vec<DeliveryRequest>) -> CrowDistances {
        let baseline_miles = tour_crow_distance(depot, deliveries.iter().map(|d| &d.location));

        let locations: Vec<&GeoCoord> = deliveries.iter().map(|d| &d.location).collect();
        let order = match self.policy {
            ReorderPolicy::Keep => None,
            ReorderPolicy::NearestNeighbor => Some(nearest_neighbor_order(depot, &locations)),
            ReorderPolicy::TwoOpt => {
                let mut order = nearest_neighbor_order(depot, &locations);
                improve_two_opt(depot, &locations, &mut order);
                Some(order)
            }
        };

        if let Some(order) = order {
            let candidate = tour_crow_distance(depot, order.iter().map(|&i| locations[i]));
            if candidate < baseline_miles {
                let reordered: Vec<DeliveryRequest> =
                    order.iter().map(|&i| deliveries[i].clone()).collect();
                *deliveries = reordered;
            }
        }

        let optimized_miles = tour_crow_distance(depot, deliveries.iter().map(|d| &d.location));
        tracing::debug!(
            policy = %self.policy,
            stops = deliveries.len(),
            baseline_miles,
            optimized_miles,
            "estimated delivery tour"
        );
        CrowDistances { baseline_miles, optimized_miles }
    }
}

/// Greedy tour from the depot.  Ties go to the earliest stop in list order.
fn nearest_neighbor_order(depot: &GeoCoord, locations: &[&GeoCoord]) -> Vec<usize> {
    let mut remaining: Vec<usize> = (0..locations.len()).collect();
    let mut order = Vec::with_capacity(locations.len());
    let mut here = depot;

    while !remaining.is_empty() {
        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for (slot, &i) in remaining.iter().enumerate() {
            let d = here.distance_miles(locations[i]);
            if d < best_dist {
                best = slot;
                best_dist = d;
            }
        }
        let next = remaining.remove(best);
        here = locations[next];
        order.push(next);
    }
    order
}

/// Apply improving 2-opt reversals to `order` until none remains.
///
/// The depot is fixed at both ends of the tour; reversing `order[i..=j]`
/// replaces edges `(prev_i, o_i)` and `(o_j, next_j)` with `(prev_i, o_j)`
/// and `(o_i, next_j)`.
fn improve_two_opt(depot: &GeoCoord, locations: &[&GeoCoord], order: &mut [usize]) {
    let n = order.len();
    if n < 2 {
        return;
    }
    let mut improved = true;
    while improved {
        improved = false;
        for i in 0..n - 1 {
            for j in i + 1..n {
                let before = if i == 0 { depot } else { locations[order[i - 1]] };
                let after = if j + 1 == n { depot } else { locations[order[j + 1]] };
                let (first, last) = (locations[order[i]], locations[order[j]]);

                let delta = before.distance_miles(last) + first.distance_miles(after)
                    - before.distance_miles(first)
                    - last.distance_miles(after);
                if delta < -TWO_OPT_EPSILON {
                    order[i..=j].reverse();
                    improved = true;
                }
            }
        }
    }
}
