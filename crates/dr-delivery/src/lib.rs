//! `dr-delivery` — delivery-order estimation and tour planning.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`optimizer`] | `DeliveryOptimizer`, `CrowDistances`, `tour_crow_distance`|
//! | [`loader`]    | `load_deliveries`, `DeliveryManifest`                    |
//! | [`planner`]   | `DeliveryPlanner`, `DeliveryPlan`, `Leg`, `Stop`         |
//! | [`error`]     | `DeliveryError`, `DeliveryResult<T>`                     |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Routes tour legs concurrently with Rayon.              |

pub mod error;
pub mod loader;
pub mod optimizer;
pub mod planner;


pub use error::{DeliveryError, DeliveryResult};
pub use loader::{load_deliveries, load_deliveries_reader, DeliveryManifest};
pub use optimizer::{tour_crow_distance, CrowDistances, DeliveryOptimizer};
pub use planner::{DeliveryPlan, DeliveryPlanner, Leg, Stop};
