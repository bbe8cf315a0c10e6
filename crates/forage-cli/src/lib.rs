//! Headless episode runner behind the `forage` binary.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use forage_agent::{
    AgentController, CategoryCatalog, CategoryEntry, ForageConfig, ResourceArea, RingSpawner,
};
use forage_classify::Classifier;
use forage_core::rng::streams;
use forage_core::{AgentId, SampleShape, TickContext};
use serde::Serialize;

pub mod jsonl;
pub mod scripted;
pub mod sim;

use jsonl::JsonlTraceSink;
use scripted::{generate_nodes, NodeLayout, PrototypeScorer, SeekPolicy};
use sim::{KinematicBody, SimWorld};

/// Input shape of the generated depictions.
pub const SAMPLE_SHAPE: SampleShape = SampleShape::new(4, 4, 1);

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub episodes: u32,
    pub steps: u32,
    pub seed: u64,
    pub dt: f32,
    pub layout: NodeLayout,
    /// Write trace events here as JSON lines.
    pub trace: Option<PathBuf>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            episodes: 1,
            steps: 3000,
            seed: 0,
            dt: 0.02,
            layout: NodeLayout::default(),
            trace: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpisodeSummary {
    pub episode: u64,
    pub steps: u32,
    pub reward: f32,
    pub collected: f32,
    pub drained: usize,
    pub delivered: usize,
}

/// Categories used when the config lists none.
pub fn default_categories() -> Vec<CategoryEntry> {
    ["beagle", "husky", "poodle", "pug"]
        .iter()
        .enumerate()
        .map(|(id, name)| CategoryEntry {
            id: id as i32,
            name: name.to_string(),
        })
        .collect()
}

/// Load the config at `path`, or defaults when it does not exist.
///
/// `training` overrides the file's `agent.training_mode` only when given.
pub fn load_run_config(path: &Path, training: Option<bool>) -> Result<ForageConfig> {
    let mut config = ForageConfig::load_or_default(path)
        .with_context(|| format!("loading {}", path.display()))?;
    if let Some(training) = training {
        config.agent.training_mode = training;
    }
    Ok(config)
}

/// Run `options.episodes` episodes of the scripted agent in the kinematic world.
pub fn run(config: &ForageConfig, options: &RunOptions) -> Result<Vec<EpisodeSummary>> {
    config.validate().context("invalid forage config")?;

    let entries = if config.categories.is_empty() {
        default_categories()
    } else {
        config.categories.clone()
    };
    let catalog = CategoryCatalog::new(entries);
    let classes = catalog
        .categories()
        .filter_map(|c| c.ordinal())
        .max()
        .map_or(0, |max| max + 1);
    let scorer = PrototypeScorer::evenly_spaced(SAMPLE_SHAPE, classes);

    let agent = AgentId(1);
    let env = &config.environment;
    let setup = TickContext::new(0, options.dt, options.seed);
    let mut rng = setup.rng_for_agent(agent, streams::NODES);
    let nodes = generate_nodes(&options.layout, env.center, &scorer, &mut rng);

    let mut world = SimWorld::new(env.center, env.area_diameter);
    world.set_nodes(&nodes);

    let area = ResourceArea::new(env.center, nodes);
    let classifier = Classifier::new(scorer);
    let mut controller = AgentController::new(agent, config.clone(), area, classifier)?;
    if let Some(path) = &options.trace {
        controller = controller.with_trace(Box::new(JsonlTraceSink::create(path)?));
    }

    let mut spawner = RingSpawner::new(catalog.categories(), env);
    let mut body = KinematicBody::new(1.0, 4.0);
    let mut policy = SeekPolicy::new(env.area_diameter);

    let mut summaries = Vec::with_capacity(options.episodes as usize);
    let mut tick = 0u64;
    for episode in 0..options.episodes {
        let seed = options.seed.wrapping_add(u64::from(episode));
        let mut ctx = TickContext::new(tick, options.dt, seed);
        controller
            .begin_episode(&ctx, &mut body, &world, &mut spawner)
            .with_context(|| format!("episode {} failed to start", episode + 1))?;

        let mut reward = 0.0;
        for _ in 0..options.steps {
            reward += controller.step(&ctx, &mut body, &mut policy).reward;
            body.integrate(ctx.dt_seconds);

            let contacts =
                world.resolve(&mut body, controller.area().nodes(), controller.receptacles());
            for contact in &contacts {
                controller.on_contact(&body, contact);
            }
            ctx = ctx.next();
        }
        reward += controller.take_reward();
        tick = ctx.tick;

        let area = controller.area();
        let summary = EpisodeSummary {
            episode: controller.episode(),
            steps: options.steps,
            reward,
            collected: controller.cumulative_collected(),
            drained: area.len() - area.available(),
            delivered: controller.receptacles().map(|r| r.stack().len()).sum(),
        };
        tracing::info!(
            episode = summary.episode,
            reward = summary.reward,
            collected = summary.collected,
            drained = summary.drained,
            delivered = summary.delivered,
            "episode finished"
        );
        summaries.push(summary);
    }

    Ok(summaries)
}
