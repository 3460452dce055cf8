//! courier — command-line front end for the delivery router.
//!
//! ```text
//! courier route   --map mapdata.txt --from "34.0625329 -118.4470263" --to "34.0685657 -118.4489289"
//! courier deliver --map mapdata.txt --deliveries deliveries.txt [--policy two-opt]
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `info`).

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dr_core::{CourierConfig, GeoCoord, ReorderPolicy};
use dr_delivery::{DeliveryPlanner, Stop, load_deliveries};
use dr_spatial::{BreadthFirstRouter, Route, Router, StreetMap};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "courier", version, about = "Street-map routing and delivery tours")]
struct Cli {
    /// JSON configuration file (see `CourierConfig`).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the coordinate index's maximum load factor.
    #[arg(long, global = true)]
    max_load_factor: Option<f64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find a route between two intersections.
    Route {
        #[arg(long)]
        map: PathBuf,
        /// Start as "<lat> <lon>".
        #[arg(long, value_parser = parse_coord)]
        from: GeoCoord,
        /// Destination as "<lat> <lon>".
        #[arg(long, value_parser = parse_coord)]
        to: GeoCoord,
    },
    /// Order a deliveries file and route the full tour.
    Deliver {
        #[arg(long)]
        map: PathBuf,
        #[arg(long)]
        deliveries: PathBuf,
        /// keep | nearest-neighbor | two-opt
        #[arg(long)]
        policy: Option<ReorderPolicy>,
    },
}

fn parse_coord(text: &str) -> Result<GeoCoord, String> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let [lat, lon] = fields.as_slice() else {
        return Err(format!("expected \"<lat> <lon>\", got {text:?}"));
    };
    GeoCoord::new(lat, lon).map_err(|e| e.to_string())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(lf) = cli.max_load_factor {
        config.map.max_load_factor = lf;
    }

    match cli.command {
        Command::Route { map, from, to } => {
            let street_map = load_map(&map, &config)?;
            let router = BreadthFirstRouter::new(&street_map);
            let t0 = Instant::now();
            let route = router
                .route(&from, &to)
                .with_context(|| format!("routing {from} → {to}"))?;
            println!("Route {from} → {to} ({:.1} ms)", t0.elapsed().as_secs_f64() * 1e3);
            print_route(&route, "  ");
        }
        Command::Deliver { map, deliveries, policy } => {
            if let Some(policy) = policy {
                config.reorder = policy;
            }
            let street_map = load_map(&map, &config)?;
            let manifest = load_deliveries(&deliveries)
                .with_context(|| format!("loading deliveries from {}", deliveries.display()))?;
            let mut requests = manifest.deliveries;

            let planner = DeliveryPlanner::new(BreadthFirstRouter::new(&street_map), config.reorder);
            let t0 = Instant::now();
            let plan = planner.plan(&manifest.depot, &mut requests)?;
            let elapsed = t0.elapsed();

            println!("=== Delivery tour from {} ===", manifest.depot);
            println!(
                "Stops: {}  |  Policy: {}  |  Planned in {:.1} ms",
                requests.len(),
                config.reorder,
                elapsed.as_secs_f64() * 1e3
            );
            println!(
                "Crow distance: {:.3} mi as given, {:.3} mi reordered",
                plan.crow.baseline_miles, plan.crow.optimized_miles
            );
            println!();
            for (i, leg) in plan.legs.iter().enumerate() {
                match &leg.destination {
                    Stop::Delivery { item, location } => {
                        println!("{:>3}. deliver {item:?} at {location}", i + 1)
                    }
                    Stop::Depot(location) => println!("{:>3}. return to depot {location}", i + 1),
                }
                print_route(&leg.route, "       ");
            }
            println!();
            println!("Total street distance: {:.3} mi", plan.total_distance_miles);
        }
    }
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<CourierConfig> {
    let Some(path) = path else {
        return Ok(CourierConfig::default());
    };
    let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
    let config: CourierConfig = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing config {}", path.display()))?;
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}

fn load_map(path: &Path, config: &CourierConfig) -> Result<StreetMap> {
    let mut map = StreetMap::with_config(&config.map);
    let t0 = Instant::now();
    map.load(path)
        .with_context(|| format!("loading map data from {}", path.display()))?;
    println!(
        "Street map: {} intersections, {} directed segments ({:.1} ms)",
        map.coord_count(),
        map.segment_count(),
        t0.elapsed().as_secs_f64() * 1e3
    );
    Ok(map)
}

fn print_route(route: &Route, indent: &str) {
    if route.is_trivial() {
        println!("{indent}(already there)");
        return;
    }
    for segment in &route.segments {
        println!(
            "{indent}{} → {} on {} ({:.3} mi)",
            segment.start,
            segment.end,
            segment.name,
            segment.length_miles()
        );
    }
    println!(
        "{indent}{} hops via {}; {:.3} mi",
        route.hop_count(),
        route.street_names().join(", "),
        route.distance_miles
    );
}
