//! busline — smallest runnable demo for the rust_gossip simulator.
//!
//! Runs the four canonical driver scenarios, then a seeded synthetic fleet
//! with a per-tick CSV trace written to a temporary-style `out/` directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use gossip_core::{SimConfig, SimRng};
use gossip_fleet::random_routes;
use gossip_output::{CsvWriter, SimOutputObserver};
use gossip_sim::{NoopObserver, Sim};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:                u64   = 42;
const SYNTH_DRIVERS:       usize = 16;
const SYNTH_STOPS:         u32   = 6;
const OUT_DIR:             &str  = "out";

// ── Scripted scenarios ────────────────────────────────────────────────────────

struct Scenario {
    name:    &'static str,
    drivers: &'static [(&'static [u32], &'static str)],
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "one stop",
        drivers: &[(&[0], "12345"), (&[0], "qwerty")],
    },
    Scenario {
        name: "two stops",
        drivers: &[(&[1, 2], "12345"), (&[3, 2], "qwerty")],
    },
    Scenario {
        name: "three drivers",
        drivers: &[
            (&[3, 1, 2, 3], "12345"),
            (&[3, 2, 3, 1], "qwerty"),
            (&[4, 2, 3, 4, 5], "asdf"),
        ],
    },
    Scenario {
        name: "never",
        drivers: &[(&[2, 1, 2], "12345"), (&[5, 2, 8], "qwerty")],
    },
];

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== busline — rust_gossip simulator ===");
    println!();

    // 1. Scripted scenarios from the classic bus-driver setups.
    for scenario in SCENARIOS {
        let mut sim = Sim::new(SimConfig::default());
        for (stops, gossip) in scenario.drivers {
            sim.register_raw(stops, gossip)
                .with_context(|| format!("registering driver in '{}'", scenario.name))?;
        }
        let outcome = sim.run(&mut NoopObserver);
        println!(
            "{:<14} {} drivers, {} items → {}",
            scenario.name,
            sim.driver_count(),
            sim.gossip_count(),
            outcome
        );
    }
    println!();

    // 2. Synthetic fleet with a full CSV trace.
    let out_dir = Path::new(OUT_DIR);
    fs::create_dir_all(out_dir).context("creating output directory")?;

    let mut rng = SimRng::new(SEED);
    let routes = random_routes(SYNTH_DRIVERS, SYNTH_STOPS, 2..=5, &mut rng)?;

    let mut sim = Sim::new(SimConfig {
        horizon_ticks:         480,
        seed:                  SEED,
        output_interval_ticks: 1,
    });
    for (i, route) in routes.into_iter().enumerate() {
        sim.register(route.stops().to_vec(), format!("rumour-{i}"))?;
    }

    let writer = CsvWriter::new(out_dir).context("opening CSV writers")?;
    let mut observer = SimOutputObserver::new(writer);
    let outcome = sim.run(&mut observer);
    if let Some(err) = observer.take_error() {
        return Err(err).context("writing CSV trace");
    }

    println!(
        "synthetic      {} drivers over {} stops (seed {}) → {}",
        SYNTH_DRIVERS, SYNTH_STOPS, SEED, outcome
    );
    println!("trace written to {}/", OUT_DIR);

    Ok(())
}
