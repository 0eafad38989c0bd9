//! Entity pool: dense slot storage with free-list recycling
//!
//! Entity records, kinematic state and debug colours live in parallel
//! vectors indexed by slot. Destroyed slots are pushed onto a LIFO free-list
//! and handed out again by the next `create`. Storage only ever grows.

use thiserror::Error;

use super::components::Kinematics;
use super::entity::{Entity, EntityId};
use crate::context::{AppContext, ModelHandle, ShaderHandle};
use crate::debug::CollisionColor;
use crate::foundation::math::{utils, Vec3};
use crate::render::{DrawCommand, Renderer};

/// Entity pool errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EcsError {
    /// Model handle not present in the context's registry
    #[error("unknown model handle {0:?}")]
    UnknownModel(ModelHandle),

    /// Shader handle not present in the context's registry
    #[error("unknown shader handle {0:?}")]
    UnknownShader(ShaderHandle),

    /// A live entity references a model the context does not have
    #[error("entity {entity} references model {model:?} which is not registered")]
    MissingModel {
        /// Entity whose model lookup failed
        entity: EntityId,
        /// The dangling handle
        model: ModelHandle,
    },

    /// No slot index left to hand out
    #[error("entity pool is full ({0} slots)")]
    CapacityExceeded(usize),
}

/// What one call to [`EntityPool::tick`] did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    /// The tick was skipped because the context is paused
    pub paused: bool,
    /// Live entities integrated
    pub updated: usize,
    /// Pairwise AABB tests performed (ordered pairs)
    pub pair_tests: usize,
    /// Pairwise tests that reported an overlap
    pub overlapping_tests: usize,
    /// Entities that overlapped at least one other entity
    pub colliding_entities: usize,
    /// Draw commands submitted
    pub draws: usize,
}

/// Read-only view of one storage slot, live or dead
#[derive(Debug, Clone, Copy)]
pub struct SlotView<'a> {
    /// Entity record
    pub entity: &'a Entity,
    /// Kinematic state as of the last tick that touched the slot
    pub kinematics: &'a Kinematics,
    /// Debug colour from the last tick that touched the slot
    pub debug_color: Vec3,
}

/// Pool of simulated entities
#[derive(Debug, Default)]
pub struct EntityPool {
    entities: Vec<Entity>,
    kinematics: Vec<Kinematics>,
    debug_colors: Vec<Vec3>,
    free_slots: Vec<u32>,
}

impl EntityPool {
    /// Create an empty pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty pool with room for `capacity` entities
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: Vec::with_capacity(capacity),
            kinematics: Vec::with_capacity(capacity),
            debug_colors: Vec::with_capacity(capacity),
            free_slots: Vec::new(),
        }
    }

    /// Create an entity
    ///
    /// Both handles are checked against `context` here, so `tick` never has
    /// to deal with a dangling reference for entities created this way.
    /// Reuses the most recently freed slot if there is one, otherwise
    /// appends a new slot.
    pub fn create(
        &mut self,
        context: &AppContext,
        position: Vec3,
        velocity: Vec3,
        acceleration: Vec3,
        shader: ShaderHandle,
        model: ModelHandle,
    ) -> Result<EntityId, EcsError> {
        if context.shader(shader).is_none() {
            return Err(EcsError::UnknownShader(shader));
        }
        if context.model(model).is_none() {
            return Err(EcsError::UnknownModel(model));
        }

        let kinematics = Kinematics::new(position, velocity, acceleration);

        if let Some(index) = self.free_slots.pop() {
            let slot = index as usize;
            let entity = &mut self.entities[slot];
            entity.model = model;
            entity.shader = shader;
            entity.alive = true;
            self.kinematics[slot] = kinematics;
            self.debug_colors[slot] = Vec3::zeros();

            log::debug!("Recycled slot {} as entity {}", index, entity.id);
            return Ok(entity.id);
        }

        let index = u32::try_from(self.entities.len())
            .map_err(|_| EcsError::CapacityExceeded(self.entities.len()))?;
        let id = EntityId::new(index, 0);

        self.entities.push(Entity {
            id,
            model,
            shader,
            alive: true,
        });
        self.kinematics.push(kinematics);
        self.debug_colors.push(Vec3::zeros());

        debug_assert_eq!(self.entities.len(), self.kinematics.len());
        debug_assert_eq!(self.entities.len(), self.debug_colors.len());

        log::debug!("Created entity {}", id);
        Ok(id)
    }

    /// Destroy an entity
    ///
    /// Out-of-range, stale and already-dead ids are ignored and return
    /// `false`. The slot keeps its storage and is skipped by `tick` until a
    /// later `create` recycles it under a new generation.
    pub fn destroy(&mut self, id: EntityId) -> bool {
        let Some(entity) = self.entities.get_mut(id.slot()) else {
            return false;
        };
        if !entity.alive || entity.id != id {
            log::trace!("Ignoring destroy of stale entity {}", id);
            return false;
        }

        entity.alive = false;
        entity.id = id.next_generation();
        self.free_slots.push(id.index());

        log::debug!("Destroyed entity {}", id);
        true
    }

    /// Advance the simulation by one frame
    ///
    /// Skipped entirely while `context` is paused. Otherwise every live
    /// entity, in slot order, is integrated, tested against every other live
    /// entity's box at its current position, and drawn with the resulting
    /// debug colour. Entities later in slot order are tested at their
    /// position from the previous tick.
    pub fn tick(
        &mut self,
        context: &AppContext,
        renderer: &mut dyn Renderer,
    ) -> Result<TickStats, EcsError> {
        if context.is_paused() {
            log::trace!("Tick skipped: paused");
            return Ok(TickStats {
                paused: true,
                ..TickStats::default()
            });
        }

        let delta_time = context.delta_time();
        let mut stats = TickStats::default();

        for i in 0..self.entities.len() {
            let entity = self.entities[i];
            if !entity.alive {
                continue;
            }

            self.kinematics[i].integrate(delta_time);
            let position = self.kinematics[i].position;

            let model = context.model(entity.model).ok_or(EcsError::MissingModel {
                entity: entity.id,
                model: entity.model,
            })?;
            let transform = utils::translation(position);
            let bounds = model.bounds().transformed(&transform);

            let mut color = CollisionColor::new();
            for (j, other) in self.entities.iter().enumerate() {
                if j == i || !other.alive {
                    continue;
                }

                let other_model = context.model(other.model).ok_or(EcsError::MissingModel {
                    entity: other.id,
                    model: other.model,
                })?;
                let other_bounds = other_model.bounds().translated(self.kinematics[j].position);

                let overlap = bounds.intersects(&other_bounds);
                color.record(overlap);

                stats.pair_tests += 1;
                if overlap {
                    stats.overlapping_tests += 1;
                }
            }

            let rgb = color.rgb();
            self.debug_colors[i] = rgb;
            if color.any_overlap() {
                stats.colliding_entities += 1;
            }

            model.draw(
                renderer,
                DrawCommand::new(entity.id, entity.model, entity.shader, transform)
                    .with_debug_color(rgb)
                    .with_wireframe(context.wireframe()),
            );
            stats.draws += 1;
            stats.updated += 1;
        }

        log::trace!(
            "Tick: {} entities, {} pair tests, {} colliding",
            stats.updated,
            stats.pair_tests,
            stats.colliding_entities
        );
        Ok(stats)
    }

    /// Every slot, live or dead, in index order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Live entities with their kinematic state
    pub fn iter_live(&self) -> impl Iterator<Item = (&Entity, &Kinematics)> {
        self.entities
            .iter()
            .zip(self.kinematics.iter())
            .filter(|(entity, _)| entity.alive)
    }

    /// Raw view of a slot by index, whether or not it is alive
    pub fn slot(&self, index: u32) -> Option<SlotView<'_>> {
        let slot = index as usize;
        Some(SlotView {
            entity: self.entities.get(slot)?,
            kinematics: self.kinematics.get(slot)?,
            debug_color: *self.debug_colors.get(slot)?,
        })
    }

    /// Whether `id` names a live entity
    pub fn is_alive(&self, id: EntityId) -> bool {
        self.live_slot(id).is_some()
    }

    /// Entity record for a live id
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.live_slot(id).map(|slot| &self.entities[slot])
    }

    /// Kinematic state of a live entity
    pub fn kinematics(&self, id: EntityId) -> Option<&Kinematics> {
        self.live_slot(id).map(|slot| &self.kinematics[slot])
    }

    /// Debug colour computed for a live entity by the last tick
    pub fn debug_color(&self, id: EntityId) -> Option<Vec3> {
        self.live_slot(id).map(|slot| self.debug_colors[slot])
    }

    /// Number of slots, live or dead
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether no slot has ever been created
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Number of live entities
    pub fn live_count(&self) -> usize {
        self.entities.iter().filter(|e| e.alive).count()
    }

    /// Number of dead slots waiting to be recycled
    pub fn free_count(&self) -> usize {
        self.free_slots.len()
    }

    fn live_slot(&self, id: EntityId) -> Option<usize> {
        let slot = id.slot();
        self.entities
            .get(slot)
            .filter(|entity| entity.alive && entity.id == id)
            .map(|_| slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::time::FrameClock;
    use crate::render::{DrawQueue, ShaderProgramBuilder};
    use crate::scene::{Mesh, Model};

    fn setup() -> (AppContext, ShaderHandle, ModelHandle) {
        let mut context = AppContext::new(FrameClock::fixed(1.0));
        let shader = context.register_shader(
            ShaderProgramBuilder::new("basic")
                .vertex_shader("basic.vert")
                .fragment_shader("basic.frag")
                .build()
                .unwrap(),
        );
        let model = context.register_model(Model::new("cube", vec![Mesh::cube(0.5)]));
        context.begin_frame();
        (context, shader, model)
    }

    fn spawn(pool: &mut EntityPool, context: &AppContext, shader: ShaderHandle, model: ModelHandle, position: Vec3) -> EntityId {
        pool.create(context, position, Vec3::zeros(), Vec3::zeros(), shader, model)
            .unwrap()
    }

    #[test]
    fn test_growth_yields_increasing_ids_from_zero() {
        let (context, shader, model) = setup();
        let mut pool = EntityPool::new();

        let ids: Vec<u32> = (0..5)
            .map(|i| spawn(&mut pool, &context, shader, model, Vec3::new(i as f32, 0.0, 0.0)).index())
            .collect();

        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
        assert_eq!(pool.len(), 5);
        assert_eq!(pool.live_count(), 5);
    }

    #[test]
    fn test_recycling_reuses_index_with_new_state() {
        let (context, shader, model) = setup();
        let mut pool = EntityPool::new();
        spawn(&mut pool, &context, shader, model, Vec3::zeros());
        let victim = pool
            .create(&context, Vec3::new(9.0, 9.0, 9.0), Vec3::new(1.0, 1.0, 1.0), Vec3::new(2.0, 2.0, 2.0), shader, model)
            .unwrap();

        assert!(pool.destroy(victim));

        let position = Vec3::new(-1.0, 2.0, -3.0);
        let velocity = Vec3::new(0.0, 4.0, 0.0);
        let acceleration = Vec3::new(0.0, 0.0, 0.5);
        let reborn = pool.create(&context, position, velocity, acceleration, shader, model).unwrap();

        assert_eq!(reborn.index(), victim.index());
        assert_ne!(reborn, victim);
        assert_eq!(pool.len(), 2);
        assert_eq!(
            pool.kinematics(reborn),
            Some(&Kinematics::new(position, velocity, acceleration))
        );
    }

    #[test]
    fn test_free_list_is_lifo() {
        let (context, shader, model) = setup();
        let mut pool = EntityPool::new();
        let ids: Vec<EntityId> = (0..4)
            .map(|_| spawn(&mut pool, &context, shader, model, Vec3::zeros()))
            .collect();

        pool.destroy(ids[1]);
        pool.destroy(ids[3]);

        assert_eq!(spawn(&mut pool, &context, shader, model, Vec3::zeros()).index(), 3);
        assert_eq!(spawn(&mut pool, &context, shader, model, Vec3::zeros()).index(), 1);
        assert_eq!(spawn(&mut pool, &context, shader, model, Vec3::zeros()).index(), 4);
    }

    #[test]
    fn test_destroy_out_of_range_is_ignored() {
        let (context, shader, model) = setup();
        let mut pool = EntityPool::new();
        spawn(&mut pool, &context, shader, model, Vec3::zeros());

        assert!(!pool.destroy(EntityId::new(7, 0)));
        assert_eq!(pool.live_count(), 1);
        assert_eq!(pool.free_count(), 0);
    }

    #[test]
    fn test_double_destroy_frees_slot_once() {
        let (context, shader, model) = setup();
        let mut pool = EntityPool::new();
        let id = spawn(&mut pool, &context, shader, model, Vec3::zeros());

        assert!(pool.destroy(id));
        assert!(!pool.destroy(id));
        assert_eq!(pool.free_count(), 1);

        let first = spawn(&mut pool, &context, shader, model, Vec3::zeros());
        let second = spawn(&mut pool, &context, shader, model, Vec3::zeros());
        assert_ne!(first.index(), second.index());
    }

    #[test]
    fn test_stale_id_cannot_touch_new_occupant() {
        let (context, shader, model) = setup();
        let mut pool = EntityPool::new();
        let old = spawn(&mut pool, &context, shader, model, Vec3::zeros());
        pool.destroy(old);
        let new = spawn(&mut pool, &context, shader, model, Vec3::zeros());

        assert!(!pool.destroy(old));
        assert!(pool.is_alive(new));
        assert!(pool.kinematics(old).is_none());
        assert!(pool.get(new).is_some());
    }

    #[test]
    fn test_create_rejects_unknown_handles() {
        let (context, shader, model) = setup();
        let mut other = AppContext::default();
        other.register_model(Model::new("a", Vec::new()));
        let foreign_model = other.register_model(Model::new("b", Vec::new()));
        other.register_shader(ShaderProgramBuilder::new("a").vertex_shader("a").fragment_shader("a").build().unwrap());
        let foreign_shader = other.register_shader(ShaderProgramBuilder::new("b").vertex_shader("b").fragment_shader("b").build().unwrap());

        let mut pool = EntityPool::new();
        assert_eq!(
            pool.create(&context, Vec3::zeros(), Vec3::zeros(), Vec3::zeros(), shader, foreign_model),
            Err(EcsError::UnknownModel(foreign_model))
        );
        assert_eq!(
            pool.create(&context, Vec3::zeros(), Vec3::zeros(), Vec3::zeros(), foreign_shader, model),
            Err(EcsError::UnknownShader(foreign_shader))
        );
        assert!(pool.is_empty());
    }

    #[test]
    fn test_tick_integrates_velocity_then_position() {
        let (context, shader, model) = setup();
        let mut pool = EntityPool::new();
        let id = pool
            .create(&context, Vec3::zeros(), Vec3::zeros(), Vec3::new(0.0, -9.8, 0.0), shader, model)
            .unwrap();
        let mut queue = DrawQueue::new();

        let stats = pool.tick(&context, &mut queue).unwrap();

        let body = pool.kinematics(id).unwrap();
        assert_eq!(body.velocity, Vec3::new(0.0, -9.8, 0.0));
        assert_eq!(body.position, Vec3::new(0.0, -9.8, 0.0));
        assert_eq!(stats.updated, 1);
        assert_eq!(stats.pair_tests, 0);
        assert_eq!(pool.debug_color(id), Some(Vec3::zeros()));
    }

    #[test]
    fn test_tick_while_paused_changes_nothing() {
        let (mut context, shader, model) = setup();
        let mut pool = EntityPool::new();
        let a = pool
            .create(&context, Vec3::zeros(), Vec3::new(1.0, 0.0, 0.0), Vec3::zeros(), shader, model)
            .unwrap();
        spawn(&mut pool, &context, shader, model, Vec3::new(0.5, 0.0, 0.0));
        let mut queue = DrawQueue::new();
        pool.tick(&context, &mut queue).unwrap();
        let color_before = pool.debug_color(a);
        let body_before = *pool.kinematics(a).unwrap();

        context.set_paused(true);
        context.begin_frame();
        queue.clear();
        let stats = pool.tick(&context, &mut queue).unwrap();

        assert!(stats.paused);
        assert!(queue.is_empty());
        assert_eq!(pool.kinematics(a), Some(&body_before));
        assert_eq!(pool.debug_color(a), color_before);
    }

    #[test]
    fn test_draws_follow_wireframe_flag() {
        let (mut context, shader, model) = setup();
        let mut pool = EntityPool::new();
        spawn(&mut pool, &context, shader, model, Vec3::zeros());
        spawn(&mut pool, &context, shader, model, Vec3::new(5.0, 0.0, 0.0));
        let mut queue = DrawQueue::new();

        pool.tick(&context, &mut queue).unwrap();
        assert!(queue.commands().iter().all(|c| !c.wireframe));

        assert!(context.toggle_wireframe());
        let mut queue = DrawQueue::new();
        pool.tick(&context, &mut queue).unwrap();

        assert_eq!(queue.len(), 2);
        assert!(queue.commands().iter().all(|c| c.wireframe));
    }

    #[test]
    fn test_recycled_slot_starts_black() {
        let (context, shader, model) = setup();
        let mut pool = EntityPool::new();
        let a = spawn(&mut pool, &context, shader, model, Vec3::zeros());
        spawn(&mut pool, &context, shader, model, Vec3::zeros());
        pool.tick(&context, &mut DrawQueue::new()).unwrap();
        assert_eq!(pool.debug_color(a), Some(Vec3::new(1.0, 0.0, 0.0)));

        pool.destroy(a);
        let reborn = spawn(&mut pool, &context, shader, model, Vec3::zeros());

        assert_eq!(pool.debug_color(reborn), Some(Vec3::zeros()));
    }

    #[test]
    fn test_slot_view_exposes_dead_slots() {
        let (context, shader, model) = setup();
        let mut pool = EntityPool::new();
        let id = spawn(&mut pool, &context, shader, model, Vec3::new(1.0, 2.0, 3.0));
        pool.destroy(id);

        let view = pool.slot(0).unwrap();
        assert!(!view.entity.alive);
        assert_eq!(view.kinematics.position, Vec3::new(1.0, 2.0, 3.0));
        assert!(pool.slot(1).is_none());
        assert_eq!(pool.iter_live().count(), 0);
    }
}
