//! lagos — end-to-end demo of the zonemap toolkit.
//!
//! Classifies a small Lagos working set against the six-zone pilot table,
//! prints the registration dashboard with uncovered counts at the default
//! 3 km radius, then plans a field route from an unregistered start and
//! walks it stop by stop.

mod data;

use std::io::Cursor;

use anyhow::Result;
use serde::Deserialize;

use zm_core::{Business, BusinessId, Coordinate, ZoneId};
use zm_coverage::{DEFAULT_COVERAGE_RADIUS_M, RegistrationStats, uncovered_count};
use zm_route::{NearestNeighborPlanner, RoutePlanner, RouteProgress};
use zm_zone::{ZoneSet, load_zones_reader};

use data::{BUSINESSES_CSV, ZONES_CSV};

// ── Constants ─────────────────────────────────────────────────────────────────

const ROUTE_STOPS: usize = 5;
const START_NAME: &str = "Elegushi Beach Grill";

// ── Working-set CSV ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct BusinessRecord {
    id:         u32,
    name:       String,
    lat:        f64,
    lon:        f64,
    registered: bool,
}

fn load_businesses(csv_text: &str) -> Result<Vec<Business>> {
    let mut reader = csv::Reader::from_reader(Cursor::new(csv_text));
    let mut set = Vec::new();
    for row in reader.deserialize::<BusinessRecord>() {
        let row = row?;
        set.push(Business {
            id:         BusinessId(row.id),
            name:       row.name,
            pos:        Coordinate::new(row.lat, row.lon),
            zone:       ZoneId::UNKNOWN,
            registered: row.registered,
        });
    }
    Ok(set)
}

// ── Reporting ─────────────────────────────────────────────────────────────────

fn print_dashboard(zones: &ZoneSet, businesses: &[Business]) {
    println!(
        "{:<6} {:<16} {:>6} {:>11} {:>5} {:>10}",
        "Zone", "Region", "Total", "Registered", "Pct", "Uncovered"
    );
    println!("{}", "-".repeat(60));
    for (id, def) in zones.iter() {
        let stats = RegistrationStats::for_zone(businesses, id);
        let gap = uncovered_count(businesses, id, DEFAULT_COVERAGE_RADIUS_M);
        println!(
            "{:<6} {:<16} {:>6} {:>11} {:>4}% {:>10}",
            def.name,
            def.region,
            stats.zone_total,
            stats.zone_registered,
            stats.zone_pct(),
            gap,
        );
    }
    let overall = RegistrationStats::overall(businesses);
    println!(
        "overall: {}/{} registered ({}%)",
        overall.registered,
        overall.total,
        overall.total_pct()
    );
    println!();
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== lagos — zonemap field-registration demo ===");
    println!();

    // 1. Load the zone table.
    let zones = load_zones_reader(Cursor::new(ZONES_CSV))?;
    println!("Zone table: {} zones", zones.len());

    // 2. Load and classify the working set.
    let mut businesses = load_businesses(BUSINESSES_CSV)?;
    zones.assign(&mut businesses);
    println!("Working set: {} businesses", businesses.len());
    println!();

    // 3. Registration dashboard, one row per zone.
    print_dashboard(&zones, &businesses);

    // 4. Plan a route over the unregistered businesses.
    let start = businesses
        .iter()
        .find(|b| b.name == START_NAME)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("start business {START_NAME:?} missing from data"))?;
    let pool: Vec<Business> = businesses
        .iter()
        .filter(|b| !b.registered)
        .cloned()
        .collect();
    let route = NearestNeighborPlanner.plan(&start, &pool, ROUTE_STOPS);

    println!(
        "Route from {} ({} stops, {:.2} km):",
        start.name,
        route.len(),
        route.total_m / 1000.0
    );
    for (i, (id, leg)) in route.legs().enumerate() {
        let b = by_id(&businesses, id);
        println!(
            "  {}. {:<26} zone {:<2} {:>6.2} km from previous",
            i + 1,
            b.name,
            zones.name_of(b.zone),
            leg / 1000.0,
        );
    }
    println!();

    // 5. Walk the route, registering each stop as completed.
    let mut progress = RouteProgress::new(&route);
    while let Some(id) = progress.complete_current() {
        let name = {
            let b = businesses.iter_mut().find(|b| b.id == id);
            match b {
                Some(b) => {
                    b.registered = true;
                    b.name.clone()
                }
                None => id.to_string(),
            }
        };
        println!(
            "  registered {:<26} ({} of {} stops done)",
            name,
            progress.completed_count(),
            progress.stop_count()
        );
    }
    println!();

    // 6. The dashboard again, with the new anchors in place.
    println!("After the field run:");
    print_dashboard(&zones, &businesses);

    Ok(())
}

fn by_id(businesses: &[Business], id: BusinessId) -> &Business {
    businesses
        .iter()
        .find(|b| b.id == id)
        .expect("route stops come from the working set")
}
