use approx::assert_relative_eq;
use ricochet::{
    kilograms, meters, meters_per_squared_second, seconds, Body, ContactBehavior, ContactTable,
    DomainEvent, Entity, EntityContact, EntityId, EntityKind, EntityStore, Position, Reaction,
    Velocity, World,
};

fn bouncy_ball(x: f32, vx: f32) -> Entity {
    let contacts = ContactTable::new().with(
        EntityKind::Character,
        ContactBehavior::colliding(vec![Reaction::Bounce]),
    );
    Entity::new(
        EntityKind::Character,
        Body::builder()
            .sphere(meters(0.5))
            .at(Position::new(x, 0.0, 0.0))
            .velocity(Velocity::new(vx, 0.0, 0.0))
            .mass(kilograms(1.0))
            .build()
            .unwrap(),
    )
    .with_contacts(contacts)
}

fn weightless_world() -> World {
    World::with_gravity(meters_per_squared_second(0.0))
}

#[test]
fn three_body_cradle_swaps_the_outer_velocities() {
    let mut world = weightless_world();
    let a = world.add(bouncy_ball(0.0, 1.0));
    let b = world.add(bouncy_ball(5.0, 0.0));
    let c = world.add(bouncy_ball(10.0, -1.0));

    world.advance(seconds(4.5));

    let velocity = |id| world.entities.get(id).unwrap().body.velocity;
    assert_relative_eq!(velocity(a).x().raw(), -1.0, epsilon = 1e-3);
    assert_relative_eq!(velocity(b).x().raw(), 0.0, epsilon = 1e-3);
    assert_relative_eq!(velocity(c).x().raw(), 1.0, epsilon = 1e-3);
}

#[test]
fn entities_stay_synchronized_across_substeps() {
    let mut world = weightless_world();
    let a = world.add(bouncy_ball(0.0, 1.0));
    let b = world.add(bouncy_ball(5.0, 0.0));
    // A bystander that collides with nothing still moves the full tick.
    let bystander = world.add(
        Entity::new(
            EntityKind::Projectile,
            Body::builder()
                .sphere(meters(0.5))
                .at(Position::new(0.0, 10.0, 0.0))
                .velocity(Velocity::new(1.0, 0.0, 0.0))
                .mass(kilograms(1.0))
                .build()
                .unwrap(),
        ),
    );

    world.advance(seconds(5.0));

    let position = |id| world.entities.get(id).unwrap().body.position;
    assert_relative_eq!(position(bystander).x().raw(), 5.0, epsilon = 1e-3);
    // A stopped at the impact point, B carried the motion onward.
    assert_relative_eq!(position(a).x().raw(), 4.0, epsilon = 1e-3);
    assert_relative_eq!(position(b).x().raw(), 6.0, epsilon = 1e-3);
}

#[test]
fn one_sided_consent_lets_bodies_pass_through() {
    let mut world = weightless_world();
    let willing = ContactTable::new().with(
        EntityKind::Character,
        ContactBehavior::colliding(vec![Reaction::Bounce]),
    );
    let a = world.add(bouncy_ball(0.0, 1.0).with_contacts(willing));
    let b = world.add(bouncy_ball(4.0, -1.0).with_contacts(ContactTable::new()));

    world.advance(seconds(4.0));

    // No reaction fired on either side; both kept their velocity and crossed.
    let body = |id| &world.entities.get(id).unwrap().body;
    assert_eq!(body(a).velocity, Velocity::new(1.0, 0.0, 0.0));
    assert_eq!(body(b).velocity, Velocity::new(-1.0, 0.0, 0.0));
    assert_relative_eq!(body(a).position.x().raw(), 4.0, epsilon = 1e-4);
    assert_relative_eq!(body(b).position.x().raw(), 0.0, epsilon = 1e-4);
}

#[test]
fn stop_reaction_blocks_only_its_own_side() {
    let mut world = weightless_world();
    let stopping = ContactTable::new().with(
        EntityKind::Character,
        ContactBehavior::colliding(vec![Reaction::Stop]),
    );
    let bouncing = ContactTable::new().with(
        EntityKind::Character,
        ContactBehavior::colliding(vec![Reaction::Bounce]),
    );
    let a = world.add(bouncy_ball(0.0, 1.0).with_contacts(stopping));
    let b = world.add(bouncy_ball(2.0, 0.0).with_contacts(bouncing));

    world.advance(seconds(2.0));

    let velocity = |id| world.entities.get(id).unwrap().body.velocity;
    assert_eq!(velocity(a), Velocity::ZERO);
    // B resolved its side from the pre-contact snapshot and moved off.
    assert_relative_eq!(velocity(b).x().raw(), 1.0, epsilon = 1e-4);
}

fn spawn_projectile(
    _contact: &EntityContact,
    acting: EntityId,
    _other: EntityId,
    store: &mut EntityStore,
) -> Vec<DomainEvent> {
    let origin = store.get(acting).unwrap().body.position;
    let (_, event) = store.spawn(Entity::new(
        EntityKind::Projectile,
        Body::builder()
            .sphere(meters(0.2))
            .at(origin + Position::new(0.0, 2.0, 0.0))
            .velocity(Velocity::new(0.0, 5.0, 0.0))
            .mass(kilograms(0.5))
            .build()
            .unwrap(),
    ));
    vec![event]
}

#[test]
fn reaction_spawned_entities_are_announced_in_order() {
    let mut world = weightless_world();
    let spawning = ContactTable::new().with(
        EntityKind::Character,
        ContactBehavior::colliding(vec![Reaction::Bounce, Reaction::Custom(spawn_projectile)]),
    );
    world.add(bouncy_ball(0.0, 1.0).with_contacts(spawning));
    world.add(bouncy_ball(3.0, -1.0));

    let events = world.advance(seconds(2.0));

    assert_eq!(events.len(), 1);
    let DomainEvent::EntityAdded { entity } = events[0];
    assert_eq!(world.entities.len(), 3);
    assert!(world.entities.get(entity).is_some());
    assert_eq!(
        world.entities.get(entity).unwrap().kind,
        EntityKind::Projectile
    );
}

#[test]
fn dampening_decays_motion_but_never_reverses_it() {
    let mut world = weightless_world();
    let id = world.add(Entity::new(
        EntityKind::Character,
        Body::builder()
            .sphere(meters(0.5))
            .velocity(Velocity::new(3.0, 0.0, 0.0))
            .dampening(meters_per_squared_second(1.0))
            .mass(kilograms(1.0))
            .build()
            .unwrap(),
    ));

    for _ in 0..50 {
        world.advance(seconds(0.1));
    }

    let body = &world.entities.get(id).unwrap().body;
    assert_eq!(body.velocity, Velocity::ZERO);
    assert!(body.position.x().raw() > 0.0);
}
