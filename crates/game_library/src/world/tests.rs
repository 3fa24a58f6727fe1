use super::*;
use crate::content::MemoryContent;
use crate::ecs::scheduler::tests::{CallLog, RecordingSystem};
use crate::ecs::components::Animation;
use crate::ecs::SystemError;
use crate::foundation::logging;
use crate::physics::{BodyDef, BodyHandle, BodyType};
use approx::assert_relative_eq;

/// Hooks that register recording systems and count their own callbacks
#[derive(Default)]
struct ScenarioHooks {
    log: CallLog,
    systems: Vec<(&'static str, ExecutionPhase, i32)>,
    failing_process: Option<&'static str>,
    failing_initialize: Option<&'static str>,
    templates_built: usize,
    entities_built: usize,
    loop_starts: usize,
    exits: usize,
}

impl ScenarioHooks {
    fn with_systems(systems: &[(&'static str, ExecutionPhase, i32)]) -> Self {
        Self {
            systems: systems.to_vec(),
            ..Default::default()
        }
    }

    fn processed(&self) -> Vec<&'static str> {
        self.log
            .borrow()
            .iter()
            .filter(|(event, _)| *event == "process")
            .filter_map(|(_, key)| match key {
                SystemKey::Custom(name) => Some(*name),
                _ => None,
            })
            .collect()
    }
}

impl WorldHooks for ScenarioHooks {
    /// Number of entities to spawn
    type Args = u32;

    fn name(&self) -> Option<&str> {
        Some("Scenario")
    }

    fn build_systems(&mut self, systems: &mut SystemManager) -> Result<(), WorldError> {
        for &(name, phase, priority) in &self.systems {
            let mut system = RecordingSystem::new(name, &self.log);
            system.fail_on_process = self.failing_process == Some(name);
            system.fail_on_initialize = self.failing_initialize == Some(name);
            systems.add_system(system, phase, priority)?;
        }
        Ok(())
    }

    fn build_templates(
        &mut self,
        _scene: &mut Scene,
        _content: &mut dyn ContentSource,
        _args: &u32,
    ) -> Result<(), WorldError> {
        self.templates_built += 1;
        Ok(())
    }

    fn build_entities(&mut self, scene: &mut Scene, args: &u32) -> Result<(), WorldError> {
        for _ in 0..*args {
            scene.entities.create_entity();
        }
        self.entities_built += 1;
        Ok(())
    }

    fn loop_start(&mut self, _scene: &mut Scene, _frame: &FrameTime) -> Result<(), WorldError> {
        self.loop_starts += 1;
        Ok(())
    }

    fn on_exit(&mut self, _scene: &mut Scene) {
        self.exits += 1;
    }
}

fn config(debug: bool) -> WorldConfig {
    WorldConfig::default().with_debug(debug)
}

fn running_world(hooks: ScenarioHooks, entities: u32) -> World<ScenarioHooks> {
    logging::init_for_tests();
    let mut world = World::with_hooks(HostContext::headless(), config(false), hooks).unwrap();
    world.initialize().unwrap();
    world.load_content(&mut MemoryContent::new(), &entities).unwrap();
    world
}

fn running_plain_world(config: WorldConfig) -> World {
    logging::init_for_tests();
    let mut world = World::new(HostContext::headless(), config).unwrap();
    world.initialize().unwrap();
    world.load_content(&mut MemoryContent::new(), &()).unwrap();
    world
}

fn kinematic_probe(world: &mut World<impl WorldHooks>) -> BodyHandle {
    world.physics_mut().create_body(BodyDef {
        body_type: BodyType::Kinematic,
        linear_velocity: Vec2::new(1.0, 0.0),
        ..Default::default()
    })
}

#[test]
fn test_update_and_draw_phases_are_separate() {
    let hooks = ScenarioHooks::with_systems(&[
        ("A", ExecutionPhase::Update, 0),
        ("B", ExecutionPhase::Update, 1),
        ("C", ExecutionPhase::Draw, 0),
    ]);
    let mut world = running_world(hooks, 0);
    let probe = kinematic_probe(&mut world);
    let frame = FrameTime::from_millis(16);

    world.update(&frame).unwrap();
    assert_eq!(world.hooks().processed(), vec!["A", "B"]);
    assert_relative_eq!(world.physics().body(probe).unwrap().position.x, 0.016);
    assert_eq!(world.delta(), 16);

    world.hooks().log.borrow_mut().clear();
    world.draw(&frame).unwrap();
    assert_eq!(world.hooks().processed(), vec!["C"]);
}

#[test]
fn test_priorities_order_every_frame() {
    let hooks = ScenarioHooks::with_systems(&[
        ("late", ExecutionPhase::Update, 10),
        ("early", ExecutionPhase::Update, -10),
        ("middle", ExecutionPhase::Update, 0),
    ]);
    let mut world = running_world(hooks, 0);

    for _ in 0..3 {
        world.update(&FrameTime::from_millis(16)).unwrap();
    }
    assert_eq!(
        world.hooks().processed(),
        ["early", "middle", "late"].repeat(3)
    );
    assert_eq!(world.hooks().loop_starts, 3);
}

#[test]
fn test_initialize_runs_setup_in_registration_order() {
    let hooks = ScenarioHooks::with_systems(&[
        ("draw_first", ExecutionPhase::Draw, 5),
        ("update_low", ExecutionPhase::Update, -3),
        ("update_high", ExecutionPhase::Update, 7),
    ]);
    let world = running_world(hooks, 0);

    let inits: Vec<_> = world
        .hooks()
        .log
        .borrow()
        .iter()
        .filter(|(event, _)| *event == "init")
        .map(|(_, key)| *key)
        .collect();
    assert_eq!(
        inits,
        vec![
            SystemKey::Custom("draw_first"),
            SystemKey::Custom("update_low"),
            SystemKey::Custom("update_high"),
        ]
    );
}

#[test]
fn test_default_systems_are_registered() {
    let world = running_plain_world(config(true));
    let systems = world.systems();

    assert_eq!(
        systems.order(ExecutionPhase::Update),
        vec![SystemKey::Movement, SystemKey::Animation]
    );
    assert_eq!(
        systems.order(ExecutionPhase::Draw),
        vec![SystemKey::Render, SystemKey::Debug]
    );
    assert_eq!(systems.handle(SystemKey::Debug).unwrap().priority(), 1);

    let without_debug = running_plain_world(config(false));
    assert!(!without_debug.systems().contains(SystemKey::Debug));
    assert_eq!(without_debug.systems().len(), 3);
}

#[test]
fn test_sweep_keeps_live_and_unowned_bodies() {
    let mut world = running_world(ScenarioHooks::default(), 10);
    let live = world.entities().get_entity(7).unwrap();
    let deleted = world.entities().get_entity(9).unwrap();
    assert!(world.entities_mut().destroy_entity(deleted));

    let body_x = world.physics_mut().create_body(BodyDef::dynamic(Vec2::zeros()).owned_by(live));
    let body_y = world.physics_mut().create_body(BodyDef::dynamic(Vec2::zeros()));
    let body_z = world.physics_mut().create_body(BodyDef::dynamic(Vec2::zeros()).owned_by(deleted));

    world.update(&FrameTime::from_millis(16)).unwrap();

    let remaining: Vec<BodyHandle> = world.physics().bodies().iter().map(|b| b.handle()).collect();
    assert_eq!(remaining, vec![body_x, body_y]);
    assert!(world.physics().body(body_z).is_none());
    assert_eq!(world.last_reconcile().missing, 1);
    assert_eq!(world.last_reconcile().removed(), 1);
}

#[test]
fn test_sweep_removes_exactly_the_orphans() {
    let purge = WorldConfig {
        physics: crate::config::PhysicsConfig {
            purge_unowned_bodies: true,
            ..Default::default()
        },
        ..config(false)
    };
    let mut world = running_plain_world(purge);

    let entities: Vec<_> = (0..6).map(|_| world.entities_mut().create_entity()).collect();
    let mut expected = Vec::new();
    for (index, entity) in entities.iter().enumerate() {
        let handle = world
            .physics_mut()
            .create_body(BodyDef::dynamic(Vec2::zeros()).owned_by(*entity));
        if index % 2 == 1 {
            expected.push(handle);
        }
        if index == 2 {
            world.physics_mut().create_body(BodyDef::fixed(Vec2::zeros()));
        }
    }

    world.entities_mut().destroy_entity(entities[0]);
    world.entities_mut().destroy_entity(entities[4]);
    world.entities_mut().destroy_entity(entities[2]);
    let reused = world.entities_mut().create_entity();
    assert_eq!(reused.id(), entities[2].id());

    world.update(&FrameTime::from_millis(16)).unwrap();

    let survivors: Vec<BodyHandle> = world.physics().bodies().iter().map(|b| b.handle()).collect();
    assert_eq!(survivors, expected);
    let report = world.last_reconcile();
    assert_eq!(report.inspected, 7);
    assert_eq!((report.missing, report.stale, report.unowned), (2, 1, 1));

    for body in world.physics().bodies() {
        let owner = body.owner().unwrap();
        assert_eq!(world.entities().get_entity(owner.id()), Some(owner));
    }
}

#[test]
fn test_speed_scales_both_deltas() {
    let mut world = running_plain_world(config(false));
    let probe = kinematic_probe(&mut world);

    world.update(&FrameTime::from_millis(16)).unwrap();
    assert_eq!(world.delta(), 16);
    assert_relative_eq!(world.physics().body(probe).unwrap().position.x, 0.016);

    world.set_speed(0.5).unwrap();
    world.update(&FrameTime::from_millis(16)).unwrap();
    assert_eq!(world.delta(), 32);
    assert_relative_eq!(world.physics().body(probe).unwrap().position.x, 0.048, epsilon = 1e-6);

    world.set_speed(3.0).unwrap();
    world.update(&FrameTime::from_millis(16)).unwrap();
    assert_eq!(world.delta(), 5);
}

#[test]
fn test_tiny_speed_saturates_delta_without_breaking_animation() {
    let mut world = running_plain_world(config(false));
    let entity = world.entities_mut().create_entity();
    world.entities_mut().add_component(entity, Animation::new(4, 100, true));

    world.update(&FrameTime::from_millis(50)).unwrap();
    world.set_speed(1e-9).unwrap();
    world.update(&FrameTime::from_millis(16)).unwrap();

    assert_eq!(world.delta(), i32::MAX);
    let animation = world.entities().get_component::<Animation>(entity).unwrap();
    assert!(animation.current_frame() < 4);
}

#[test]
fn test_invalid_speed_is_rejected() {
    let mut world = running_plain_world(config(false));
    for speed in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        assert!(matches!(world.set_speed(speed), Err(WorldError::InvalidArgument(_))));
    }
    assert_eq!(world.speed(), 1.0);
}

#[test]
fn test_speed_retunes_pitch() {
    let mut world = World::new(HostContext::headless(), config(false)).unwrap();
    assert_eq!(world.speed(), 1.0);
    assert_eq!(world.audio().pitch(), 0.0);

    world.set_speed(2.0).unwrap();
    assert_relative_eq!(world.audio().pitch(), -0.5);
    assert_relative_eq!(world.audio().backend().pitch(), -0.5);

    world.set_speed(0.25).unwrap();
    assert_relative_eq!(world.audio().pitch(), 1.0);
}

#[test]
fn test_failing_system_aborts_phase() {
    let mut hooks = ScenarioHooks::with_systems(&[
        ("ok", ExecutionPhase::Update, 0),
        ("broken", ExecutionPhase::Update, 1),
        ("skipped", ExecutionPhase::Update, 2),
    ]);
    hooks.failing_process = Some("broken");
    let mut world = running_world(hooks, 0);

    let result = world.update(&FrameTime::from_millis(16));
    assert!(matches!(
        result,
        Err(WorldError::System(SystemError::Processing { key: SystemKey::Custom("broken"), .. }))
    ));
    assert_eq!(world.hooks().processed(), vec!["ok", "broken"]);
}

#[test]
fn test_failed_initialization_leaves_world_created() {
    let mut hooks = ScenarioHooks::with_systems(&[("bad", ExecutionPhase::Update, 0)]);
    hooks.failing_initialize = Some("bad");
    let mut world = World::with_hooks(HostContext::headless(), config(false), hooks).unwrap();

    assert!(matches!(
        world.initialize(),
        Err(WorldError::System(SystemError::Initialization { .. }))
    ));
    assert_eq!(world.state(), LifecycleState::Created);
    assert!(matches!(
        world.load_content(&mut MemoryContent::new(), &0),
        Err(WorldError::InvalidState(_))
    ));
}

#[test]
fn test_failed_build_discards_registrations_and_allows_retry() {
    let hooks = ScenarioHooks::with_systems(&[
        ("x", ExecutionPhase::Update, 0),
        ("x", ExecutionPhase::Update, 1),
    ]);
    let mut world = World::with_hooks(HostContext::headless(), config(false), hooks).unwrap();

    assert!(matches!(
        world.initialize(),
        Err(WorldError::DuplicateSystem(SystemKey::Custom("x")))
    ));
    assert_eq!(world.state(), LifecycleState::Created);
    assert!(world.systems().is_empty());

    world.hooks_mut().systems.pop();
    world.initialize().unwrap();
    assert_eq!(world.state(), LifecycleState::Initialized);
    assert_eq!(world.systems().len(), 4);
    assert!(world.systems().contains(SystemKey::Custom("x")));
}

#[test]
fn test_failed_setup_allows_retry() {
    let mut hooks = ScenarioHooks::with_systems(&[("bad", ExecutionPhase::Update, 0)]);
    hooks.failing_initialize = Some("bad");
    let mut world = World::with_hooks(HostContext::headless(), config(false), hooks).unwrap();

    assert!(world.initialize().is_err());
    assert!(world.systems().is_empty());

    world.hooks_mut().failing_initialize = None;
    world.initialize().unwrap();
    world.load_content(&mut MemoryContent::new(), &0).unwrap();
    world.update(&FrameTime::from_millis(16)).unwrap();
    assert_eq!(world.hooks().processed(), vec!["bad"]);
}

#[test]
fn test_lifecycle_misuse_is_invalid_state() {
    let mut world = World::new(HostContext::headless(), config(false)).unwrap();
    let frame = FrameTime::from_millis(16);

    assert!(matches!(world.update(&frame), Err(WorldError::InvalidState(_))));
    assert!(matches!(
        world.load_content(&mut MemoryContent::new(), &()),
        Err(WorldError::InvalidState(_))
    ));

    world.initialize().unwrap();
    assert!(matches!(world.initialize(), Err(WorldError::InvalidState(_))));
    assert!(matches!(world.draw(&frame), Err(WorldError::InvalidState(_))));

    let late = RecordingSystem::new("late", &CallLog::default());
    assert!(matches!(
        world.systems_mut().set_system(late, ExecutionPhase::Update, 0),
        Err(WorldError::InvalidState(_))
    ));

    world.load_content(&mut MemoryContent::new(), &()).unwrap();
    world.update(&frame).unwrap();
    world.on_exit();
    assert!(matches!(world.draw(&frame), Err(WorldError::InvalidState(_))));
}

#[test]
fn test_hooks_build_content_and_exit_once() {
    let mut world = running_world(ScenarioHooks::default(), 4);
    assert_eq!(world.name(), "Scenario");
    assert_eq!(world.hooks().templates_built, 1);
    assert_eq!(world.hooks().entities_built, 1);
    assert_eq!(world.entities().len(), 4);
    assert!(world.debug_draw().is_none());

    world.on_exit();
    world.on_exit();
    assert_eq!(world.hooks().exits, 1);
    assert_eq!(world.state(), LifecycleState::Exited);
}

#[test]
fn test_debug_resources_follow_config() {
    let mut world = running_plain_world(config(true));
    assert_eq!(world.name(), "GameLibrary");
    world
        .physics_mut()
        .create_body(BodyDef::fixed(Vec2::new(2.0, 2.0)));

    let frame = FrameTime::from_millis(16);
    world.update(&frame).unwrap();
    world.draw(&frame).unwrap();
    assert_eq!(world.debug_draw().unwrap().shape_count(), 2);

    world.on_exit();
    assert!(world.debug_draw().unwrap().is_disposed());
}

#[test]
fn test_debug_font_failure_propagates() {
    let mut config = config(true);
    config.debug.font = Some("fonts/debug".to_string());
    let mut world = World::new(HostContext::headless(), config).unwrap();
    world.initialize().unwrap();

    assert!(matches!(
        world.load_content(&mut MemoryContent::new(), &()),
        Err(WorldError::System(SystemError::Content { .. }))
    ));

    let mut content = MemoryContent::new().with_asset("fonts/debug", b"font".to_vec());
    world.load_content(&mut content, &()).unwrap();
    assert_eq!(world.state(), LifecycleState::Running);
}

#[test]
fn test_gravity_defaults_to_zero() {
    let world = World::new(HostContext::headless(), WorldConfig::default()).unwrap();
    assert_eq!(world.physics().gravity(), Vec2::zeros());

    let world = World::with_gravity(HostContext::headless(), Vec2::new(0.0, -9.8)).unwrap();
    assert_eq!(world.physics().gravity(), Vec2::new(0.0, -9.8));
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = WorldConfig {
        speed: 0.0,
        ..WorldConfig::default()
    };
    assert!(matches!(
        World::new(HostContext::headless(), config),
        Err(WorldError::Config(_))
    ));
}
