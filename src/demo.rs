//! Built-in demo network: a Fiji-style inter-island ferry system.
//!
//! Used by the CLI's `--seed-demo` mode and by integration-style tests
//! that want a realistic multi-route, multi-ferry snapshot without a
//! data file. Fares are either derived from distance or drawn from a
//! seeded RNG, so a given seed always produces the same snapshot.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{hm, Ferry, Port, Route, ServiceTier};
use crate::snapshot::{DurationOverride, Snapshot};

/// Per-kilometre fare rate used when fares are not randomized.
const FARE_PER_KM: f64 = 0.85;

/// Builds the demo snapshot: eight ports, five ferries, and the main
/// inter-island routes with reverse legs, finalized and ready to run.
///
/// With `realistic_fares` the base fare is drawn per route from a
/// tier-dependent range on a `seed`-keyed RNG; otherwise it is a flat
/// per-kilometre rate.
pub fn fiji_network(realistic_fares: bool, seed: u64) -> Snapshot {
    let mut rng = StdRng::seed_from_u64(seed);

    let ports = vec![
        Port::new("suva", "Suva", -18.1416, 178.4419)
            .with_operating_hours(hm(5, 0), hm(22, 0))
            .with_berths(3)
            .with_night_ops(),
        Port::new("natovi", "Natovi", -17.7333, 178.5500)
            .with_operating_hours(hm(6, 0), hm(20, 0))
            .with_berths(2),
        Port::new("levuka", "Levuka", -17.6836, 178.8333)
            .with_operating_hours(hm(6, 0), hm(19, 0))
            .tide_sensitive(),
        Port::new("savusavu", "Savusavu", -16.7794, 179.3319)
            .with_operating_hours(hm(6, 0), hm(20, 0))
            .with_berths(2),
        Port::new("taveuni", "Waiyevo", -16.8094, -179.9967)
            .with_operating_hours(hm(6, 0), hm(18, 0))
            .tide_sensitive(),
        Port::new("kadavu", "Vunisea", -19.0581, 178.1592)
            .with_operating_hours(hm(6, 0), hm(18, 0)),
        Port::new("nabouwalu", "Nabouwalu", -16.9833, 178.6833)
            .with_operating_hours(hm(6, 0), hm(19, 0)),
        Port::new("ellington", "Ellington Wharf", -17.3667, 178.2167)
            .with_operating_hours(hm(6, 0), hm(19, 0)),
    ];

    let ferries = vec![
        Ferry::new("lomaiviti-2", "Lomaiviti Princess II", 350)
            .with_operator("Goundar Shipping")
            .with_speed(14.0)
            .with_turnaround(60)
            .with_home_port("suva")
            .with_overnight(),
        Ferry::new("lomaiviti-7", "Lomaiviti Princess VII", 500)
            .with_operator("Goundar Shipping")
            .with_speed(16.0)
            .with_turnaround(75)
            .with_home_port("suva"),
        Ferry::new("sinu-i-wasa", "Sinu-i-Wasa III", 150)
            .with_operator("Patterson Brothers")
            .with_speed(12.0)
            .with_turnaround(45)
            .with_home_port("natovi"),
        Ferry::new("suilven", "MV Suilven", 400)
            .with_operator("Bligh Water Shipping")
            .with_speed(15.0)
            .with_turnaround(90)
            .with_home_port("suva")
            .with_overnight(),
        Ferry::new("cagi-mai-ba", "Cagi Mai Ba", 120)
            .with_operator("Miller Shipping")
            .with_speed(11.0)
            .with_turnaround(45),
    ];

    let routes = vec![
        route("suva-natovi", "suva", "natovi", &["06:00-09:00", "13:00-16:00"]),
        route("natovi-levuka", "natovi", "levuka", &["07:00-10:00", "14:00-16:00"]),
        route("suva-savusavu", "suva", "savusavu", &["06:00-08:00"]),
        route("savusavu-taveuni", "savusavu", "taveuni", &["08:00-11:00"]),
        route("suva-kadavu", "suva", "kadavu", &["06:00-08:00"]),
        route("natovi-nabouwalu", "natovi", "nabouwalu", &["07:00-10:00"]),
        route("ellington-nabouwalu", "ellington", "nabouwalu", &["08:00-11:00"]),
    ];

    let duration_overrides = vec![
        over("Suva", "Natovi", 120),
        over("Natovi", "Suva", 120),
        over("Natovi", "Levuka", 150),
        over("Levuka", "Natovi", 150),
        over("Suva", "Savusavu", 720),
        over("Savusavu", "Suva", 720),
        over("Savusavu", "Waiyevo", 210),
        over("Waiyevo", "Savusavu", 210),
        over("Suva", "Vunisea", 360),
        over("Vunisea", "Suva", 360),
    ];

    let mut snapshot = Snapshot {
        ports,
        ferries,
        routes,
        duration_overrides,
        ..Snapshot::default()
    };
    snapshot.add_reverse_routes();
    snapshot.finalize();

    for route in &mut snapshot.routes {
        route.base_fare = if realistic_fares {
            let (lo, hi): (f64, f64) = match route.tier {
                ServiceTier::Major => (25.0, 50.0),
                ServiceTier::Regional => (45.0, 80.0),
                ServiceTier::Remote => (70.0, 130.0),
            };
            rng.random_range(lo..hi).round()
        } else {
            (route.distance_km * FARE_PER_KM).round()
        };
    }
    snapshot
}

fn route(id: &str, from: &str, to: &str, windows: &[&str]) -> Route {
    let mut r = Route::new(id, from, to);
    for w in windows {
        if let Ok(parsed) = w.parse() {
            r = r.with_window_times(parsed);
        }
    }
    r
}

fn over(from: &str, to: &str, minutes: i64) -> DurationOverride {
    DurationOverride {
        from: from.into(),
        to: to.into(),
        minutes,
    }
}
