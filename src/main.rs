//! Web Climb entry point
//!
//! The browser build is driven by the page through `platform::web`. Natively
//! there is no window: the binary runs a seeded autopilot for a number of
//! ticks and reports the height reached.
//!
//! Usage: `web-climb [seed] [ticks] [tuning.json]`

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use web_climb::sim::{MotionState, TickInput, World, tick};
    use web_climb::{ConfigError, Tuning};

    const DEFAULT_SEED: u64 = 12345;
    const DEFAULT_TICKS: u64 = 3_000;
    /// Ticks spent walking one way before turning around
    const WALK_PERIOD: u64 = 90;

    pub struct Args {
        pub seed: u64,
        pub ticks: u64,
        pub tuning_path: Option<String>,
    }

    impl Args {
        pub fn parse() -> Result<Self, String> {
            let mut args = std::env::args().skip(1);
            let seed = match args.next() {
                Some(s) => s.parse().map_err(|_| format!("invalid seed: {s}"))?,
                None => DEFAULT_SEED,
            };
            let ticks = match args.next() {
                Some(s) => s.parse().map_err(|_| format!("invalid tick count: {s}"))?,
                None => DEFAULT_TICKS,
            };
            Ok(Self {
                seed,
                ticks,
                tuning_path: args.next(),
            })
        }
    }

    pub fn load_tuning(path: Option<&str>) -> Result<Tuning, String> {
        let Some(path) = path else {
            return Ok(Tuning::default());
        };
        let json = std::fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?;
        Tuning::from_json(&json).map_err(|e: ConfigError| format!("{path}: {e}"))
    }

    /// Jump whenever standing, pacing left and right
    fn autopilot(world: &World) -> TickInput {
        let going_right = (world.time_ticks / WALK_PERIOD) % 2 == 0;
        TickInput {
            left: !going_right,
            right: going_right,
            up: world.avatar.state() == MotionState::Grounded,
            down: false,
        }
    }

    pub fn run(args: &Args, tuning: Tuning) -> u64 {
        let mut world = World::with_tuning(args.seed, tuning);
        for _ in 0..args.ticks {
            let input = autopilot(&world);
            let snapshot = tick(&mut world, &input);
            if snapshot.tick % 500 == 0 {
                log::info!(
                    "tick {}: spider at ({:.0}, {:.0}), {} webs, score {:.0}",
                    snapshot.tick,
                    snapshot.avatar_x,
                    snapshot.avatar_y,
                    snapshot.webs.len(),
                    snapshot.score
                );
            }
        }
        world.display_score()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Web Climb (headless) starting...");

    let args = match headless::Args::parse() {
        Ok(args) => args,
        Err(e) => {
            log::error!("{e}");
            eprintln!("usage: web-climb [seed] [ticks] [tuning.json]");
            std::process::exit(2);
        }
    };
    let tuning = match headless::load_tuning(args.tuning_path.as_deref()) {
        Ok(tuning) => tuning,
        Err(e) => {
            log::error!("Bad tuning: {e}");
            std::process::exit(1);
        }
    };

    let score = headless::run(&args, tuning);
    println!("seed {} reached height {} in {} ticks", args.seed, score, args.ticks);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
