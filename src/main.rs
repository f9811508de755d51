//! Wingit entry point
//!
//! Native builds run a headless demo: the autopilot plays for a fixed number
//! of frames, restarting after every crash, and the final snapshot is printed
//! as JSON. Rendering front ends embed the library instead.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use anyhow::{Context, bail};

    use wingit::sim::{GameEvent, GameSimulation, GameStatus, autopilot};
    use wingit::{Difficulty, SimConfig};

    /// Command line options
    pub struct Options {
        pub seed: u64,
        pub ticks: u64,
        pub width: u32,
        pub height: u32,
        pub difficulty: Difficulty,
        pub config_path: Option<String>,
    }

    impl Default for Options {
        fn default() -> Self {
            Self {
                seed: 12345,
                ticks: 3600,
                width: 400,
                height: 800,
                difficulty: Difficulty::Normal,
                config_path: None,
            }
        }
    }

    impl Options {
        pub fn parse(args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
            let mut opts = Self::default();
            let mut args = args;
            while let Some(flag) = args.next() {
                let mut value = || {
                    args.next()
                        .with_context(|| format!("missing value for {flag}"))
                };
                match flag.as_str() {
                    "--seed" => opts.seed = value()?.parse().context("--seed")?,
                    "--ticks" => opts.ticks = value()?.parse().context("--ticks")?,
                    "--width" => opts.width = value()?.parse().context("--width")?,
                    "--height" => opts.height = value()?.parse().context("--height")?,
                    "--difficulty" => {
                        let name = value()?;
                        opts.difficulty = Difficulty::from_str(&name)
                            .with_context(|| format!("unknown difficulty {name:?}"))?;
                    }
                    "--config" => opts.config_path = Some(value()?),
                    other => bail!("unknown argument {other:?}"),
                }
            }
            Ok(opts)
        }

        fn load_config(&self) -> anyhow::Result<SimConfig> {
            let Some(path) = &self.config_path else {
                return Ok(SimConfig::from_preset(self.difficulty));
            };
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {path}"))?;
            let config = SimConfig::from_json(&json).with_context(|| format!("loading {path}"))?;
            log::info!("Loaded config from {}", path);
            Ok(config)
        }
    }

    pub fn run(opts: &Options) -> anyhow::Result<()> {
        let config = opts.load_config()?;
        let mut sim = GameSimulation::new(config, opts.width, opts.height, opts.seed)?;
        log::info!(
            "Wingit headless: {}x{} seed={} difficulty={} ticks={}",
            opts.width,
            opts.height,
            opts.seed,
            opts.difficulty.as_str(),
            opts.ticks
        );

        sim.start();
        let mut runs = 1u32;
        for _ in 0..opts.ticks {
            if autopilot::should_jump(sim.state(), sim.config()) {
                sim.jump();
            }
            sim.update();

            for event in sim.drain_events() {
                match event {
                    GameEvent::Scored { score } => log::debug!("Score {}", score),
                    GameEvent::NewBest { best } => log::info!("New best: {}", best),
                    _ => {}
                }
            }

            if sim.status() == GameStatus::Over {
                sim.restart();
                runs += 1;
            }
        }

        log::info!(
            "Finished {} frames over {} runs, best score {}",
            opts.ticks,
            runs,
            sim.best_score()
        );
        println!("{}", serde_json::to_string_pretty(&sim.snapshot())?);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let result = headless::Options::parse(std::env::args().skip(1))
        .and_then(|opts| headless::run(&opts));
    if let Err(err) = result {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web front ends drive wingit::sim::GameSimulation directly
}
