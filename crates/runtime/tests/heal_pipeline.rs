//! End-to-end scenarios: one hit in, one decision and one feedback message out.

use mend_content::MechanicSettings;
use mend_content::loaders::ItemLoader;
use mend_core::{
    ActorState, AttackEvent, EntityId, FullHealthPolicy, HeldButtons, ItemHandle, ItemOracle,
    ResourceMeter, WorldState,
};
use runtime::{
    AttackInterceptor, FX_MEND_FRIEND, HitDecision, MessageCode, PermissionRegistry,
    RecordingSink, StaticItemOracle, USE_PERMISSION, build_snapshot,
};

const ATTACKER: EntityId = EntityId(1);
const TARGET: EntityId = EntityId(2);

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn handle_of(shortname: &str) -> ItemHandle {
    StaticItemOracle::new(ItemLoader::defaults())
        .find_by_shortname(shortname)
        .expect("known item")
}

fn setup(settings: MechanicSettings, authorized: bool) -> (AttackInterceptor, RecordingSink) {
    init_tracing();
    let items = StaticItemOracle::new(ItemLoader::defaults());
    let snapshot = build_snapshot(&settings, &items).expect("valid settings");

    let mut permissions = PermissionRegistry::new();
    if authorized {
        permissions.grant(USE_PERMISSION, ATTACKER).unwrap();
    }

    let sink = RecordingSink::new();
    let interceptor = AttackInterceptor::new(
        snapshot,
        Box::new(items),
        Box::new(permissions),
        Box::new(sink.clone()),
        Box::new(sink.clone()),
    );
    (interceptor, sink)
}

/// Attacker carrying one full set of default ingredients, wounded target.
fn world() -> WorldState {
    let mut world = WorldState::new();
    world.spawn(
        ActorState::new(ATTACKER, ResourceMeter::new(100, 100))
            .with_item(handle_of("medical.syringe"), 1)
            .with_item(handle_of("rope"), 1),
    );
    world.spawn(ActorState::new(TARGET, ResourceMeter::new(40, 100)).with_wounded());
    world
}

fn bow_hit() -> AttackEvent {
    AttackEvent {
        attacker: ATTACKER,
        target: TARGET,
        weapon: handle_of("bow.hunting"),
        held: HeldButtons::USE,
        raw_damage: 20,
    }
}

#[test]
fn qualifying_hit_heals_revives_and_cancels_damage() {
    let (interceptor, sink) = setup(MechanicSettings::default(), true);
    let mut world = world();

    let decision = interceptor.on_player_attack(&mut world, &bow_hit());
    assert_eq!(decision, HitDecision::CancelDamage);

    let attacker = world.actor(ATTACKER).unwrap();
    assert_eq!(attacker.inventory.quantity_of(handle_of("medical.syringe")), 0);
    assert_eq!(attacker.inventory.quantity_of(handle_of("rope")), 0);

    let target = world.actor(TARGET).unwrap();
    assert_eq!(target.health.current, 55);
    assert!(!target.wounded);
    assert!(target.regen.is_some());

    let notes = sink.notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].actor, ATTACKER);
    assert_eq!(notes[0].code, MessageCode::PlayerHealed);
    assert!(notes[0].text.contains("15"));

    let effects = sink.effects();
    assert_eq!(effects.len(), 1);
    assert_eq!(effects[0].effect, FX_MEND_FRIEND);
    assert_eq!(effects[0].at, TARGET);
}

#[test]
fn missing_ingredient_rejects_without_consuming_anything() {
    let (interceptor, sink) = setup(MechanicSettings::default(), true);
    let mut world = world();
    world
        .actor_mut(ATTACKER)
        .unwrap()
        .inventory
        .take(handle_of("rope"), 1);

    let decision = interceptor.on_player_attack(&mut world, &bow_hit());
    assert_eq!(decision, HitDecision::PassThrough);

    // the syringe that was available is still there
    let attacker = world.actor(ATTACKER).unwrap();
    assert_eq!(attacker.inventory.quantity_of(handle_of("medical.syringe")), 1);

    // target untouched
    let target = world.actor(TARGET).unwrap();
    assert_eq!(target.health.current, 40);
    assert!(target.wounded);

    let notes = sink.notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].code, MessageCode::InsufficientIngredients);
    assert!(notes[0].text.contains("rope (0/1)"));
    assert!(sink.effects().is_empty());
}

#[test]
fn shortfall_feedback_lists_catalog_order() {
    let (interceptor, sink) = setup(MechanicSettings::default(), true);
    let mut world = world();
    let inventory = &mut world.actor_mut(ATTACKER).unwrap().inventory;
    inventory.take(handle_of("medical.syringe"), 1);
    inventory.take(handle_of("rope"), 1);

    interceptor.on_player_attack(&mut world, &bow_hit());

    let notes = sink.notifications();
    assert_eq!(notes.len(), 1);
    let syringe_at = notes[0].text.find("medical.syringe").unwrap();
    let rope_at = notes[0].text.find("rope").unwrap();
    assert!(syringe_at < rope_at);
}

#[test]
fn wrong_weapon_class_passes_through_untouched() {
    let (interceptor, sink) = setup(MechanicSettings::default(), true);
    let mut world = world();
    let before = world.clone();

    let event = AttackEvent {
        weapon: handle_of("rifle.bolt"),
        ..bow_hit()
    };
    let decision = interceptor.on_player_attack(&mut world, &event);

    assert_eq!(decision, HitDecision::PassThrough);
    assert_eq!(
        world.actor(ATTACKER).unwrap(),
        before.actor(ATTACKER).unwrap()
    );
    assert_eq!(world.actor(TARGET).unwrap(), before.actor(TARGET).unwrap());

    let notes = sink.notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].code, MessageCode::NotEligible);
    assert!(sink.effects().is_empty());
}

#[test]
fn crossbow_matches_the_bow_class() {
    let (interceptor, _sink) = setup(MechanicSettings::default(), true);
    let mut world = world();

    let event = AttackEvent {
        weapon: handle_of("crossbow"),
        ..bow_hit()
    };
    assert_eq!(
        interceptor.on_player_attack(&mut world, &event),
        HitDecision::CancelDamage
    );
}

#[test]
fn released_trigger_rejects_even_with_full_ingredients() {
    let (interceptor, sink) = setup(MechanicSettings::default(), true);
    let mut world = world();

    let event = AttackEvent {
        held: HeldButtons::empty(),
        ..bow_hit()
    };
    let decision = interceptor.on_player_attack(&mut world, &event);

    assert_eq!(decision, HitDecision::PassThrough);
    assert_eq!(
        world
            .actor(ATTACKER)
            .unwrap()
            .inventory
            .quantity_of(handle_of("rope")),
        1
    );
    assert_eq!(sink.notifications()[0].code, MessageCode::NotEligible);
}

#[test]
fn unauthorized_attacker_is_rejected() {
    let (interceptor, sink) = setup(MechanicSettings::default(), false);
    let mut world = world();

    let decision = interceptor.on_player_attack(&mut world, &bow_hit());

    assert_eq!(decision, HitDecision::PassThrough);
    assert_eq!(sink.notifications()[0].code, MessageCode::NotEligible);
    assert_eq!(world.actor(TARGET).unwrap().health.current, 40);
}

#[test]
fn revive_disabled_heals_but_leaves_target_wounded() {
    let settings = MechanicSettings {
        can_revive_wounded: false,
        ..MechanicSettings::default()
    };
    let (interceptor, _sink) = setup(settings, true);
    let mut world = world();

    let decision = interceptor.on_player_attack(&mut world, &bow_hit());
    assert_eq!(decision, HitDecision::CancelDamage);

    let target = world.actor(TARGET).unwrap();
    assert_eq!(target.health.current, 55);
    assert!(target.wounded);
}

#[test]
fn full_health_target_is_a_clamped_success_by_default() {
    let (interceptor, sink) = setup(MechanicSettings::default(), true);
    let mut world = world();
    {
        let target = world.actor_mut(TARGET).unwrap();
        target.health = ResourceMeter::new(100, 100);
        target.wounded = false;
    }

    let decision = interceptor.on_player_attack(&mut world, &bow_hit());

    // ingredients are spent, the heal clamps to zero
    assert_eq!(decision, HitDecision::CancelDamage);
    assert_eq!(
        world
            .actor(ATTACKER)
            .unwrap()
            .inventory
            .quantity_of(handle_of("rope")),
        0
    );
    assert!(sink.notifications()[0].text.contains('0'));
}

#[test]
fn full_health_target_is_rejected_under_reject_policy() {
    let settings = MechanicSettings {
        heal_full_health_targets: FullHealthPolicy::Reject,
        ..MechanicSettings::default()
    };
    let (interceptor, sink) = setup(settings, true);
    let mut world = world();
    {
        let target = world.actor_mut(TARGET).unwrap();
        target.health = ResourceMeter::new(100, 100);
        target.wounded = false;
    }

    let decision = interceptor.on_player_attack(&mut world, &bow_hit());

    assert_eq!(decision, HitDecision::PassThrough);
    assert_eq!(sink.notifications()[0].code, MessageCode::NotEligible);
    assert_eq!(
        world
            .actor(ATTACKER)
            .unwrap()
            .inventory
            .quantity_of(handle_of("rope")),
        1
    );
}

#[test]
fn repeated_rejections_accumulate_no_state_changes() {
    let (interceptor, sink) = setup(MechanicSettings::default(), true);
    let mut world = world();
    world
        .actor_mut(ATTACKER)
        .unwrap()
        .inventory
        .take(handle_of("rope"), 1);
    let before = world.clone();

    for _ in 0..3 {
        interceptor.on_player_attack(&mut world, &bow_hit());
    }

    assert_eq!(
        world.actor(ATTACKER).unwrap(),
        before.actor(ATTACKER).unwrap()
    );
    assert_eq!(world.actor(TARGET).unwrap(), before.actor(TARGET).unwrap());
    // one message per handled event, no more, no fewer
    assert_eq!(sink.notifications().len(), 3);
}

#[test]
fn npc_target_is_never_mended() {
    let (interceptor, sink) = setup(MechanicSettings::default(), true);
    let mut world = world();
    world.actor_mut(TARGET).unwrap().is_npc = true;

    let decision = interceptor.on_player_attack(&mut world, &bow_hit());

    assert_eq!(decision, HitDecision::PassThrough);
    assert_eq!(sink.notifications()[0].code, MessageCode::NotEligible);
}

#[test]
fn equipping_an_eligible_weapon_sends_the_usage_hint() {
    let (interceptor, sink) = setup(MechanicSettings::default(), true);

    interceptor.on_active_item_changed(ATTACKER, handle_of("bow.hunting"));

    let notes = sink.notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].code, MessageCode::HealArrowUsage);
    assert!(notes[0].text.contains("use"));
}

#[test]
fn equip_hint_skips_other_weapons_and_unauthorized_actors() {
    let (interceptor, sink) = setup(MechanicSettings::default(), true);
    interceptor.on_active_item_changed(ATTACKER, handle_of("rifle.bolt"));
    interceptor.on_active_item_changed(ATTACKER, handle_of("rope"));
    assert!(sink.notifications().is_empty());

    let (interceptor, sink) = setup(MechanicSettings::default(), false);
    interceptor.on_active_item_changed(ATTACKER, handle_of("bow.hunting"));
    assert!(sink.notifications().is_empty());
}
