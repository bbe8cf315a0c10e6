//! The per-agent decision loop.
//!
//! One [`AgentController`] owns its resource area, its receptacle lookup and the encoder/shaper
//! state. The embedding environment drives it: [`begin_episode`](AgentController::begin_episode)
//! at each reset, [`step`](AgentController::step) once per tick, and
//! [`on_contact`](AgentController::on_contact) for every contact the physics reports.

use std::collections::BTreeMap;

use forage_classify::{Classifier, Scorer};
use forage_core::rng::streams;
use forage_core::{
    AgentId, Category, DepositOutcome, DeterministicRng, NodeId, Receptacle, ReceptacleId,
    ResourceNode, TickContext, Token, Vec3,
};
use forage_tools::{TraceEvent, TraceKind, TraceSink};

use crate::actuation::{ActionVector, Actuator};
use crate::area::ResourceArea;
use crate::config::ForageConfig;
use crate::observation::{Objective, Observation, ObservationDeltas, ObservationEncoder};
use crate::policy::Policy;
use crate::reward::RewardShaper;
use crate::selector::TargetSelector;
use crate::spawn::{ReceptacleSpawner, SpawnPlanner};
use crate::world::{AgentBody, ContactEvent, ContactTarget, SpatialQuery};
use crate::{ForageError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ObjectiveKind {
    #[default]
    SeekingResource,
    CarryingToken,
}

/// Mutable per-episode state; zeroed at every episode start.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentState {
    pub objective: ObjectiveKind,
    pub held_token: Option<Token>,
    pub last_deltas: ObservationDeltas,
    /// Sum of everything extracted this episode.
    pub cumulative_collected: f32,
}

/// Assigns the category of the token a drained node yields.
pub trait TokenClassifier {
    fn classify_node(&self, node: &ResourceNode) -> Category;
}

impl<S: Scorer> TokenClassifier for Classifier<S> {
    /// Lowest valid ordinal among the depiction's most common classes.
    fn classify_node(&self, node: &ResourceNode) -> Category {
        let leaders = self.classify_depiction(&node.depiction);
        if leaders.is_tie() {
            tracing::debug!(node = node.id.0, classes = leaders.len(), "classification tie");
        }
        leaders.primary().unwrap_or(Category::INVALID)
    }
}

/// Adapts a closure into a [`TokenClassifier`].
pub struct FnClassifier<F> {
    f: F,
}

impl<F> FnClassifier<F>
where
    F: Fn(&ResourceNode) -> Category,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> TokenClassifier for FnClassifier<F>
where
    F: Fn(&ResourceNode) -> Category,
{
    fn classify_node(&self, node: &ResourceNode) -> Category {
        (self.f)(node)
    }
}

/// Result of one decision step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub observation: Observation,
    pub action: ActionVector,
    /// Shaping for this step plus any event rewards collected since the previous step.
    pub reward: f32,
}

pub struct AgentController<C> {
    id: AgentId,
    config: ForageConfig,
    area: ResourceArea,
    receptacles: BTreeMap<Category, Receptacle>,
    classifier: C,
    encoder: ObservationEncoder,
    shaper: RewardShaper,
    actuator: Actuator,
    planner: SpawnPlanner,
    state: AgentState,
    target: Option<NodeId>,
    objective: Option<Objective>,
    frozen: bool,
    pending_reward: f32,
    episode: u64,
    tick: u64,
    trace: Option<Box<dyn TraceSink>>,
}

impl<C: TokenClassifier> AgentController<C> {
    pub fn new(
        id: AgentId,
        config: ForageConfig,
        area: ResourceArea,
        classifier: C,
    ) -> Result<Self> {
        config.validate()?;
        let encoder = ObservationEncoder::new(
            config.environment.area_diameter,
            config.agent.delivery_enabled,
        );
        let shaper = RewardShaper::new(config.reward.clone());
        let planner = SpawnPlanner::new(config.spawn.clone(), area.center);
        Ok(Self {
            id,
            config,
            area,
            receptacles: BTreeMap::new(),
            classifier,
            encoder,
            shaper,
            actuator: Actuator::new(),
            planner,
            state: AgentState::default(),
            target: None,
            objective: None,
            frozen: false,
            pending_reward: 0.0,
            episode: 0,
            tick: 0,
            trace: None,
        })
    }

    pub fn with_trace(mut self, sink: Box<dyn TraceSink>) -> Self {
        self.trace = Some(sink);
        self
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn config(&self) -> &ForageConfig {
        &self.config
    }

    pub fn state(&self) -> &AgentState {
        &self.state
    }

    pub fn objective_kind(&self) -> ObjectiveKind {
        self.state.objective
    }

    pub fn held_token(&self) -> Option<&Token> {
        self.state.held_token.as_ref()
    }

    pub fn cumulative_collected(&self) -> f32 {
        self.state.cumulative_collected
    }

    pub fn target(&self) -> Option<NodeId> {
        self.target
    }

    /// Objective used by the most recent observation.
    pub fn objective(&self) -> Option<Objective> {
        self.objective
    }

    pub fn area(&self) -> &ResourceArea {
        &self.area
    }

    pub fn area_mut(&mut self) -> &mut ResourceArea {
        &mut self.area
    }

    pub fn receptacles(&self) -> impl Iterator<Item = &Receptacle> + '_ {
        self.receptacles.values()
    }

    pub fn receptacle_for(&self, category: Category) -> Option<&Receptacle> {
        self.receptacles.get(&category)
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn episode(&self) -> u64 {
        self.episode
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Replace the receptacle lookup. Later entries win when two share a category.
    pub fn set_receptacles(&mut self, receptacles: Vec<Receptacle>) {
        self.receptacles.clear();
        for receptacle in receptacles {
            if let Some(previous) = self.receptacles.insert(receptacle.category, receptacle) {
                tracing::warn!(
                    category = %previous.category,
                    replaced = previous.id.0,
                    "two receptacles share a category"
                );
            }
        }
    }

    /// Reset nodes and state, respawn receptacles, place the agent and pick a first target.
    ///
    /// Fails only when no safe spawn position exists.
    pub fn begin_episode(
        &mut self,
        ctx: &TickContext,
        body: &mut dyn AgentBody,
        query: &dyn SpatialQuery,
        spawner: &mut dyn ReceptacleSpawner,
    ) -> Result<()> {
        self.episode += 1;
        self.tick = ctx.tick;

        self.area.reset_all();
        self.state = AgentState::default();
        self.encoder.reset();
        self.actuator.reset();
        self.pending_reward = 0.0;
        self.target = None;
        self.objective = None;

        if self.config.agent.delivery_enabled {
            let mut rng = ctx.rng_for_agent(self.id, streams::RECEPTACLES);
            let receptacles = spawner.spawn(&mut rng, query);
            self.set_receptacles(receptacles);
        }

        let mut rng = ctx.rng_for_agent(self.id, streams::SPAWN);
        let in_front = if self.config.agent.training_mode {
            rng.chance(self.config.spawn.in_front_chance)
        } else {
            true
        };
        let spawn = self
            .planner
            .find_safe_pose(self.area.nodes(), in_front, &mut rng, query)?;
        self.actuator
            .set_orientation(spawn.pitch, spawn.yaw, self.config.agent.max_pitch_deg);
        body.place(spawn.pose());

        self.refresh_target(body.interaction_pose().position);

        tracing::info!(
            agent = self.id.0,
            episode = self.episode,
            nodes = self.area.len(),
            receptacles = self.receptacles.len(),
            "episode begin"
        );
        self.emit(TraceKind::EpisodeBegin {
            episode: self.episode,
        });
        Ok(())
    }

    /// Sticky nearest-node selection from `reference`.
    pub fn refresh_target(&mut self, reference: Vec3) -> Option<NodeId> {
        let next = TargetSelector::select_nearest(self.area.nodes(), reference, self.target);
        if next != self.target {
            tracing::debug!(agent = self.id.0, node = ?next.map(|n| n.0), "target changed");
            self.target = next;
            self.emit(TraceKind::TargetChanged { node: next });
        }
        next
    }

    /// Encode the agent's state relative to its current objective.
    pub fn observe(&mut self, body: &dyn AgentBody) -> Observation {
        let beak = body.interaction_pose();

        if self.state.objective == ObjectiveKind::CarryingToken {
            let category = self.state.held_token.as_ref().map(|t| t.category);
            let deliverable = category.is_some_and(|c| self.receptacles.contains_key(&c));
            if !deliverable {
                let category = category.unwrap_or(Category::INVALID);
                tracing::warn!(
                    agent = self.id.0,
                    category = %category,
                    "no receptacle for held token, discarding"
                );
                self.state.held_token = None;
                self.state.objective = ObjectiveKind::SeekingResource;
                self.emit(TraceKind::TokenDiscarded { category });
            }
        }

        if self.state.objective == ObjectiveKind::SeekingResource {
            self.refresh_target(beak.position);
        }

        self.objective = self.current_objective();
        let observation = match self.objective {
            Some(objective) => self.encoder.encode(
                body.pose().rotation,
                beak,
                &objective,
                self.state.held_token.is_some(),
            ),
            None => Observation::neutral(),
        };
        self.state.last_deltas = observation.deltas;
        observation
    }

    /// Shape the reward for the last observation and apply `action` to the body.
    pub fn act(&mut self, ctx: &TickContext, body: &mut dyn AgentBody, action: &ActionVector) {
        self.tick = ctx.tick;

        if self.config.agent.training_mode && self.config.reward.shaping_enabled {
            if let Some(objective) = self.objective {
                let beak = body.interaction_pose().position;
                self.pending_reward += self
                    .shaper
                    .shape_for(&self.state.last_deltas, beak, &objective);
            }
        }

        if self.frozen {
            return;
        }

        let actuation = self
            .actuator
            .step(action, ctx.dt_seconds, &self.config.agent);
        body.apply_force(actuation.force);
        body.set_rotation(actuation.rotation);
    }

    /// Observe, ask `policy` for an action, act.
    pub fn step(
        &mut self,
        ctx: &TickContext,
        body: &mut dyn AgentBody,
        policy: &mut dyn Policy,
    ) -> StepOutcome {
        let observation = self.observe(body);
        let action = policy.decide(&observation);
        self.act(ctx, body, &action);
        StepOutcome {
            observation,
            action,
            reward: self.take_reward(),
        }
    }

    /// React to a contact reported by the physical collaborator.
    pub fn on_contact(&mut self, body: &dyn AgentBody, contact: &ContactEvent) {
        match contact.target {
            ContactTarget::Boundary => self.on_boundary(),
            ContactTarget::DropZone(id) => self.on_drop_zone(body, id),
            ContactTarget::Extraction(id) => self.on_extraction(body, id, contact.point),
            ContactTarget::Other => {}
        }
    }

    /// Stop acting on actions. Not available in training.
    pub fn freeze(&mut self, body: &mut dyn AgentBody) -> Result<()> {
        if self.config.agent.training_mode {
            return Err(ForageError::FreezeInTraining);
        }
        self.frozen = true;
        body.set_asleep(true);
        Ok(())
    }

    pub fn unfreeze(&mut self, body: &mut dyn AgentBody) -> Result<()> {
        if self.config.agent.training_mode {
            return Err(ForageError::FreezeInTraining);
        }
        self.frozen = false;
        body.set_asleep(false);
        Ok(())
    }

    /// Drain the reward accumulated since the last call.
    pub fn take_reward(&mut self) -> f32 {
        std::mem::take(&mut self.pending_reward)
    }

    fn current_objective(&self) -> Option<Objective> {
        match self.state.objective {
            ObjectiveKind::SeekingResource => {
                let node = self.target.and_then(|id| self.area.get(id))?;
                Some(Objective::new(node.position, node.up_axis))
            }
            ObjectiveKind::CarryingToken => {
                let category = self.state.held_token.as_ref()?.category;
                let receptacle = self.receptacles.get(&category)?;
                Some(Objective::new(receptacle.drop_point(), receptacle.up_axis))
            }
        }
    }

    fn on_boundary(&mut self) {
        if self.config.agent.training_mode {
            self.pending_reward += self.shaper.boundary();
        }
        tracing::debug!(agent = self.id.0, "boundary hit");
        self.emit(TraceKind::BoundaryHit);
    }

    fn on_drop_zone(&mut self, body: &dyn AgentBody, id: ReceptacleId) {
        if !self.config.agent.delivery_enabled {
            return;
        }
        let Some(receptacle) = self.receptacles.values_mut().find(|r| r.id == id) else {
            tracing::debug!(
                agent = self.id.0,
                receptacle = id.0,
                "contact with unknown receptacle"
            );
            return;
        };
        let Some(token) = self.state.held_token.take() else {
            return;
        };

        let category = token.category;
        let kind = match receptacle.deposit(token) {
            DepositOutcome::Accepted { stack_height } => {
                if self.config.agent.training_mode {
                    self.pending_reward += self.shaper.delivery();
                }
                tracing::info!(
                    agent = self.id.0,
                    receptacle = id.0,
                    category = %category,
                    stack_height,
                    "token delivered"
                );
                TraceKind::TokenDelivered {
                    receptacle: id,
                    category,
                    stack_height,
                }
            }
            DepositOutcome::Rejected => {
                tracing::warn!(
                    agent = self.id.0,
                    receptacle = id.0,
                    expected = %receptacle.category,
                    category = %category,
                    "token rejected by receptacle"
                );
                TraceKind::TokenRejected {
                    receptacle: id,
                    category,
                }
            }
        };
        self.emit(kind);

        self.state.objective = ObjectiveKind::SeekingResource;
        self.target = None;
        self.refresh_target(body.interaction_pose().position);
    }

    fn on_extraction(&mut self, body: &dyn AgentBody, id: NodeId, point: Vec3) {
        if self.state.held_token.is_some() {
            return;
        }
        let beak = body.interaction_pose().position;
        if beak.distance(point) >= self.config.agent.interaction_radius {
            return;
        }
        let Some(node) = self.area.get_mut(id) else {
            tracing::debug!(agent = self.id.0, node = id.0, "contact with unknown node");
            return;
        };

        let had_resource = node.has_resource();
        let taken = node.feed(self.config.agent.feed_amount);
        let node_up = node.up_axis;
        let drained = had_resource && !node.has_resource();
        let category = if drained && self.config.agent.delivery_enabled {
            Some(self.classifier.classify_node(node))
        } else {
            None
        };

        self.state.cumulative_collected += taken;
        if taken > 0.0 {
            if self.config.agent.training_mode {
                let forward = body.pose().forward();
                self.pending_reward += self.shaper.extraction(taken, forward, node_up);
            }
            tracing::debug!(agent = self.id.0, node = id.0, amount = taken, "extracted");
            self.emit(TraceKind::Extracted {
                node: id,
                amount: taken,
            });
        }

        if !drained {
            return;
        }
        tracing::info!(agent = self.id.0, node = id.0, "node drained");
        self.emit(TraceKind::NodeDrained { node: id });

        self.target = None;
        match category {
            Some(category) => {
                self.state.held_token = Some(Token::new(category, id));
                self.state.objective = ObjectiveKind::CarryingToken;
                tracing::info!(
                    agent = self.id.0,
                    node = id.0,
                    category = %category,
                    "token created"
                );
                self.emit(TraceKind::TokenCreated { node: id, category });
            }
            None => {
                self.refresh_target(beak);
            }
        }
    }

    fn emit(&mut self, kind: TraceKind) {
        if let Some(sink) = self.trace.as_mut() {
            sink.emit(TraceEvent::new(self.tick, self.id, kind));
        }
    }
}
