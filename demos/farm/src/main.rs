//! farm — colony-map CLI for the antfarm framework.
//!
//! Loads a colony-map file, routes its ants from start to end, and prints
//! the step-by-step schedule as `L<ant>-<room>` move lines.  Optionally
//! tees the run into the CSV output backend.
//!
//! ```text
//! farm maps/example.map
//! farm maps/example.map --output out/ --max-steps 5000
//! ```

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use ant_core::{RoomId, SimConfig, Step};
use ant_graph::{load_colony_path, TunnelNetwork};
use ant_output::{CsvWriter, SimOutputObserver};
use ant_sim::{MoveEvent, SimBuilder, StepObserver};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "farm", about = "Route a colony of ants across a tunnel map")]
struct Args {
    /// Colony map file.
    map: PathBuf,

    /// Also write moves.csv and step_summaries.csv into this directory.
    #[arg(long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Abort as deadlocked after this many steps.
    #[arg(long, default_value_t = SimConfig::DEFAULT_MAX_STEPS)]
    max_steps: u64,

    /// Skip the room and tunnel tables.
    #[arg(long)]
    quiet: bool,
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints each step that moved and forwards everything to the CSV observer
/// when one is configured.
struct FarmObserver {
    csv: Option<SimOutputObserver<CsvWriter>>,
}

impl StepObserver for FarmObserver {
    fn on_step(&mut self, step: Step, moves: &[MoveEvent], net: &TunnelNetwork) {
        if !moves.is_empty() {
            let line: Vec<String> = moves
                .iter()
                .map(|m| format!("L{}-{}", m.ant.0 + 1, net.room_name(m.room)))
                .collect();
            println!("{step}: {}", line.join(" "));
        }
        if let Some(csv) = &mut self.csv {
            csv.on_step(step, moves, net);
        }
    }

    fn on_run_end(&mut self, final_step: Step) {
        if let Some(csv) = &mut self.csv {
            csv.on_run_end(final_step);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load and validate the colony map.
    let colony = load_colony_path(&args.map)
        .with_context(|| format!("loading colony map {}", args.map.display()))?;
    let net = colony.network;

    println!(
        "Colony: {} ants, {} rooms, {} tunnels, {} → {}",
        colony.ant_count,
        net.room_count(),
        net.tunnel_count() / 2,
        net.room_name(net.start),
        net.room_name(net.end),
    );

    // 2. Room and tunnel tables, in declaration order.
    if !args.quiet {
        println!("\nrooms:");
        for i in 0..net.room_count() {
            let room = RoomId(i as u32);
            println!("{i}: {} {}", net.room_name(room), net.room_pos(room));
        }
        println!("\ntunnels:");
        for (a, b) in net.tunnels() {
            if a < b {
                println!("{} - {}", net.room_name(a), net.room_name(b));
            }
        }
    }
    println!();

    // 3. Set up optional CSV output.
    let csv = match &args.output {
        None => None,
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            Some(SimOutputObserver::new(CsvWriter::new(dir)?))
        }
    };
    let mut observer = FarmObserver { csv };

    // 4. Plan and run.
    let config = SimConfig { max_steps: args.max_steps };
    let mut sim = SimBuilder::new(net, colony.ant_count, config).build()?;

    let t0 = Instant::now();
    let summary = sim.run(&mut observer)?;
    let elapsed = t0.elapsed();

    if let Some(csv) = &mut observer.csv {
        if let Some(e) = csv.take_error() {
            eprintln!("output error: {e}");
        }
    }

    // 5. Summary.
    println!();
    println!(
        "Delivered {} ants in {} steps ({} hops, {:.6} s)",
        colony.ant_count,
        summary.steps,
        summary.moves,
        elapsed.as_secs_f64(),
    );

    Ok(())
}
