use proptest::prelude::*;
use social_core::{GameWorld, RelationshipError, RelationshipEvent, RelationshipManager};
use story_world::{Actor, ActorId, WorldConfig, WorldState};

fn uid() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

fn cast() -> Vec<Actor> {
    ["Vanessa", "James", "Xavier", "Ximena", "Odette", "Pip"]
        .iter()
        .map(|name| Actor::new(*name, name.to_lowercase()))
        .collect()
}

#[test]
fn scenario_ximena_and_james_do_not_collide() {
    let mut world = GameWorld::new();
    let vanessa = Actor::new("Vanessa", "vanessa");
    let james = Actor::new("James", "james");
    let xavier = Actor::new("Xavier", "xavier");
    let ximena = Actor::new("Ximena", "ximena");
    for actor in [&vanessa, &james, &xavier, &ximena] {
        world.add_actor(actor.clone()).unwrap();
    }

    let relationships = world.relationships_mut();
    relationships.get_relationship(&ximena, &james).unwrap().set_base_reputation(-10);
    relationships.get_relationship(&james, &ximena).unwrap().set_base_reputation(5);
    relationships.get_relationship(&ximena, &vanessa).unwrap().set_base_reputation(10);
    relationships.get_relationship(&vanessa, &ximena).unwrap().set_base_reputation(10);
    relationships.get_relationship(&xavier, &james).unwrap().set_base_reputation(20);

    let relationships = world.relationships_mut();
    assert_eq!(relationships.get_relationship(&ximena, &james).unwrap().base_reputation(), -10);
    assert_eq!(relationships.get_relationship(&james, &ximena).unwrap().base_reputation(), 5);
    assert_eq!(relationships.len(), 5);
    assert!(!relationships.relationship_exists(&james, &xavier));

    assert_eq!(vanessa.to_string(), "Actor(Vanessa)");
    assert_eq!(
        world.describe_relationship(&vanessa, &ximena).unwrap(),
        "Relationship(from: Vanessa, to: Ximena, reputation: 10)"
    );
}

#[test]
fn ticks_expire_events_across_the_world() {
    let config = WorldConfig::from_toml_str(
        r#"
        minutes_per_tick = 30

        [relationships]
        min_reputation = -100
        max_reputation = 100
        "#,
    )
    .unwrap();
    let mut world = GameWorld::with_config(config);
    let actors = cast();
    for actor in &actors {
        world.add_actor(actor.clone()).unwrap();
    }
    let (james, ximena) = (&actors[1], &actors[3]);

    let rel = world.relationships_mut().get_relationship(ximena, james).unwrap();
    rel.set_base_reputation(90);
    rel.add_event(RelationshipEvent::new("spilled_coffee", -15).with_duration(3));
    rel.add_event(RelationshipEvent::new("gift", 30).with_duration(1));
    assert_eq!(rel.reputation(), 100); // 105 clamped

    world.tick();
    assert_eq!(world.relationships().relationship(ximena, james).unwrap().reputation(), 75);

    world.tick();
    world.tick();
    let rel = world.relationships().relationship(ximena, james).unwrap();
    assert_eq!(rel.reputation(), 90);
    assert!(rel.history().is_empty());
    assert_eq!(rel.age(), 3);
    assert_eq!(world.state().time.hour, 1);
    assert_eq!(world.state().time.minute, 30);
}

proptest! {
    #[test]
    fn get_or_create_is_idempotent(a in uid(), b in uid(), value in any::<i32>()) {
        prop_assume!(a != b);
        let mut manager = RelationshipManager::new();
        let (a, b) = (ActorId::new(a), ActorId::new(b));

        manager.get_relationship(&a, &b).unwrap().set_base_reputation(value);
        let again = manager.get_relationship(&a, &b).unwrap().base_reputation();

        prop_assert_eq!(again, value);
        prop_assert_eq!(manager.len(), 1);
    }

    #[test]
    fn directions_are_independent(a in uid(), b in uid(), forward in any::<i32>(), backward in any::<i32>()) {
        prop_assume!(a != b);
        let mut manager = RelationshipManager::new();
        let (a, b) = (ActorId::new(a), ActorId::new(b));

        manager.get_relationship(&a, &b).unwrap().set_base_reputation(forward);
        manager.get_relationship(&b, &a).unwrap().set_base_reputation(backward);
        manager.get_relationship(&a, &b).unwrap().set_base_reputation(forward);

        prop_assert_eq!(manager.relationship(&a, &b).unwrap().base_reputation(), forward);
        prop_assert_eq!(manager.relationship(&b, &a).unwrap().base_reputation(), backward);
    }

    #[test]
    fn existence_flips_only_after_get(a in uid(), b in uid()) {
        prop_assume!(a != b);
        let mut manager = RelationshipManager::new();
        let (a, b) = (ActorId::new(a), ActorId::new(b));

        prop_assert!(!manager.relationship_exists(&a, &b));
        prop_assert!(manager.relationship(&a, &b).is_none());
        prop_assert!(!manager.relationship_exists(&a, &b));

        let fresh = manager.get_relationship(&a, &b).unwrap().base_reputation();
        prop_assert_eq!(fresh, 0);

        prop_assert!(manager.relationship_exists(&a, &b));
        prop_assert!(!manager.relationship_exists(&b, &a));
    }

    #[test]
    fn update_reaches_every_edge_once(
        pairs in prop::collection::vec((0usize..6, 0usize..6), 0..30),
        ticks in 1u64..5,
    ) {
        let actors = cast();
        let world = WorldState::new();
        let mut manager = RelationshipManager::new();

        for (owner, target) in &pairs {
            let result = manager.get_relationship(&actors[*owner], &actors[*target]);
            if owner == target {
                prop_assert!(matches!(result, Err(RelationshipError::SelfRelationship(_))));
            }
        }
        let edges = manager.len();

        for _ in 0..ticks {
            manager.on_update(&world);
        }

        prop_assert_eq!(manager.len(), edges);
        prop_assert!(manager.relationships().all(|r| r.age() == ticks));
    }
}
