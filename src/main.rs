#![forbid(unsafe_code)]

mod config;
mod scene;
mod walker;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use loam_runtime::Runtime;
use loam_world::{Layer, PartRole};

use crate::scene::Scene;
use crate::walker::{Route, Walker};

#[derive(Parser, Debug)]
#[command(name = "loam", about = "Headless side-scroller world streamer")]
struct Args {
    /// TOML config file; built-in defaults when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides `[world] seed`.
    #[arg(long, allow_hyphen_values = true)]
    seed: Option<i32>,
    #[arg(long, default_value_t = 3600)]
    ticks: u64,
    /// Walker speed in pixels per tick.
    #[arg(long, default_value_t = 5.0)]
    speed: f32,
    #[arg(long, value_enum, default_value_t = Route::Right)]
    route: Route,
    /// Per-tick speed cap.
    #[arg(long, default_value_t = 30.0)]
    max_step: f32,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let (mut world, runtime) = config::load(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        world = world.with_seed(seed);
    }
    let mut step = args.speed.max(0.0);
    if step > args.max_step {
        log::warn!(
            "speed {} exceeds max step {}; clamping",
            args.speed,
            args.max_step
        );
        step = args.max_step.max(0.0);
    }

    let status_every = u64::from(runtime.ticks_per_second) * 5;
    let mut rt = Runtime::new(world, runtime, Scene::new());
    let start = rt.initial_focal();
    let mut walker = Walker::new(start, rt.height_at(start), step, args.route);
    log::info!(
        "walking {:?} at {} px/tick for {} ticks from x={}",
        args.route,
        step,
        args.ticks,
        start
    );

    let mut eaten = 0u64;
    let mut slides = 0u64;
    for _ in 0..args.ticks {
        let x = walker.advance();
        walker.land(rt.height_at(x));
        let report = rt.tick(x);
        if report.transition.is_slide() {
            slides += 1;
        }

        // Collision stand-in: jump for any ripe fruit within reach.
        let hits = rt.sink().fruits_touching(walker.reach());
        if !hits.is_empty() && walker.try_jump() {
            for id in hits {
                if rt.consume_fruit(id, &mut walker) {
                    eaten += 1;
                }
            }
        }

        if status_every > 0 && report.tick % status_every == 0 {
            let (lo, hi) = rt.window().span();
            log::info!(
                "tick {} day {} phase {:.2}: x={:.0} energy={} window [{}, {}) live {} entities",
                report.tick,
                report.day.day,
                report.day.phase,
                walker.x(),
                walker.energy(),
                lo,
                hi,
                rt.sink().len()
            );
        }
    }

    let scene = rt.sink();
    let (created, removed) = scene.totals();
    log::info!(
        "done: {} slides, {} fruit eaten, {} created / {} removed",
        slides,
        eaten,
        created,
        removed
    );
    for layer in Layer::ALL {
        log::info!("  {:<10} {}", layer.name(), scene.count(layer));
    }
    for role in PartRole::ALL {
        let live = rt
            .live()
            .trees()
            .flat_map(|t| t.tree.parts.iter())
            .filter(|p| p.role() == role)
            .count();
        log::info!("  tree {:<5} {}", role.name(), live);
    }
    Ok(())
}
