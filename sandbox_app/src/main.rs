//! Headless sandbox demo
//!
//! Loads a scene description, populates the entity pool and runs the
//! simulation for a fixed number of frames, logging the diagnostic entity
//! table periodically.
//!
//! Run `sandbox --help` for usage.

use std::fmt;
use std::path::{Path, PathBuf};

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sandbox_engine::foundation::logging;
use sandbox_engine::prelude::*;
use sandbox_engine::scene::{populate, SceneError};
use thiserror::Error;

const DEFAULT_CONFIG: &str = "resources/scene.ron";
const KILL_PLANE: f32 = -20.0;
const SCATTER_SEED: u64 = 0x5eed;

/// Application errors
#[derive(Error, Debug)]
enum AppError {
    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] sandbox_engine::config::ConfigError),

    /// Scene could not be populated
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    /// The simulation failed mid-run
    #[error("Simulation error: {0}")]
    Simulation(#[from] EcsError),

    /// Scattering was requested for a scene with nothing to scatter
    #[error("Scatter needs at least one model and one shader in the scene")]
    NothingToScatter,
}

/// Headless run of a sandbox scene
#[derive(Parser, Debug)]
#[command(name = "sandbox", version)]
struct Args {
    /// Scene file (.ron or .toml); paths inside it are relative to its directory
    #[arg(default_value = DEFAULT_CONFIG)]
    config: PathBuf,

    /// Extra entities to spawn at random positions; respawned when they fall
    /// below the kill plane
    #[arg(default_value_t = 0)]
    scatter: usize,
}

/// Totals reported when a run finishes
#[derive(Debug, Default)]
struct RunSummary {
    frames: u64,
    simulated_seconds: f32,
    live_entities: usize,
    colliding_entity_frames: usize,
    submitted_indices: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ran {} frames over {:.2}s simulated: {} live entities, {} colliding entity-frames, {} indices submitted",
            self.frames,
            self.simulated_seconds,
            self.live_entities,
            self.colliding_entity_frames,
            self.submitted_indices
        )
    }
}

/// Spawns randomly placed entities and replaces the ones that fall away
struct Scatter {
    rng: StdRng,
    model: ModelHandle,
    shader: ShaderHandle,
    spawned: Vec<EntityId>,
}

impl Scatter {
    fn new(model: ModelHandle, shader: ShaderHandle) -> Self {
        Self {
            rng: StdRng::seed_from_u64(SCATTER_SEED),
            model,
            shader,
            spawned: Vec::new(),
        }
    }

    fn spawn(&mut self, context: &AppContext, pool: &mut EntityPool) -> Result<EntityId, EcsError> {
        let position = Vec3::new(
            self.rng.gen_range(-8.0..8.0),
            self.rng.gen_range(2.0..10.0),
            self.rng.gen_range(-8.0..8.0),
        );
        let velocity = Vec3::new(self.rng.gen_range(-1.0..1.0), 0.0, self.rng.gen_range(-1.0..1.0));
        let id = pool.create(context, position, velocity, Vec3::new(0.0, -9.8, 0.0), self.shader, self.model)?;
        self.spawned.push(id);
        Ok(id)
    }

    fn respawn_fallen(&mut self, context: &AppContext, pool: &mut EntityPool) -> Result<usize, EcsError> {
        let fallen: Vec<EntityId> = self
            .spawned
            .iter()
            .copied()
            .filter(|&id| pool.kinematics(id).is_some_and(|k| k.position.y < KILL_PLANE))
            .collect();

        for id in &fallen {
            pool.destroy(*id);
            self.spawned.retain(|spawned| spawned != id);
            self.spawn(context, pool)?;
        }
        Ok(fallen.len())
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    log::info!("Loading scene from {}", args.config.display());
    let config = SandboxConfig::load(&args.config)?;
    let base_dir = args.config.parent().unwrap_or_else(|| Path::new("."));

    let settings = &config.simulation;
    let mut context = AppContext::new(settings.clock());
    context.set_paused(settings.start_paused);
    let mut pool = EntityPool::with_capacity(settings.initial_capacity);

    let scene = populate(&config, base_dir, &mut context, &mut pool)?;

    let mut scatter = None;
    if args.scatter > 0 {
        let (Some(model), Some(shader)) = (
            config.scene.models.first().and_then(|m| scene.models.get(&m.name)),
            config.scene.shaders.first().and_then(|s| scene.shaders.get(&s.name)),
        ) else {
            return Err(AppError::NothingToScatter);
        };
        let mut spawner = Scatter::new(*model, *shader);
        for _ in 0..args.scatter {
            spawner.spawn(&context, &mut pool)?;
        }
        log::info!("Scattered {} extra entities", args.scatter);
        scatter = Some(spawner);
    }

    let mut queue = DrawQueue::new();
    let mut summary = RunSummary::default();

    for frame in 1..=settings.frames {
        context.begin_frame();

        let stats = pool.tick(&context, &mut queue)?;
        summary.colliding_entity_frames += stats.colliding_entities;
        summary.submitted_indices += queue.drain().iter().map(|c| c.index_count).sum::<usize>();
        log::trace!("Frame {frame}: {stats:?}");

        if let Some(spawner) = scatter.as_mut() {
            let respawned = spawner.respawn_fallen(&context, &mut pool)?;
            if respawned > 0 {
                log::debug!("Frame {frame}: respawned {respawned} fallen entities");
            }
        }

        if settings.log_every > 0 && frame % settings.log_every == 0 {
            log::info!("\n{}", EntityTable::render(&pool, &context));
        }
    }

    summary.frames = context.clock().frame_count();
    summary.simulated_seconds = context.clock().total_time();
    summary.live_entities = pool.live_count();
    log::info!("{summary}");
    Ok(())
}

fn main() {
    logging::init();

    let args = Args::parse();
    log::info!("Starting sandbox");

    if let Err(e) = run(&args) {
        log::error!("Sandbox failed: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["sandbox"]).unwrap();
        assert_eq!(args.config, PathBuf::from(DEFAULT_CONFIG));
        assert_eq!(args.scatter, 0);
    }

    #[test]
    fn test_config_and_scatter() {
        let args = Args::try_parse_from(["sandbox", "scenes/pile.toml", "12"]).unwrap();
        assert_eq!(args.config, PathBuf::from("scenes/pile.toml"));
        assert_eq!(args.scatter, 12);
    }

    #[test]
    fn test_summary_counts_colliding_entity_frames() {
        let summary = RunSummary {
            frames: 3,
            simulated_seconds: 1.5,
            live_entities: 2,
            colliding_entity_frames: 4,
            submitted_indices: 216,
        };

        assert_eq!(
            summary.to_string(),
            "Ran 3 frames over 1.50s simulated: 2 live entities, 4 colliding entity-frames, 216 indices submitted"
        );
    }

    #[test]
    fn test_help_is_not_a_config_path() {
        let err = Args::try_parse_from(["sandbox", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_unknown_arguments_are_rejected() {
        let err = Args::try_parse_from(["sandbox", "resources/scene.ron", "5", "--verbose"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);

        let err = Args::try_parse_from(["sandbox", "resources/scene.ron", "many"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }
}
