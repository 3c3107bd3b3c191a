use super::*;

fn def(kind: WeaponType, damage: f32) -> WeaponDefinition {
    WeaponDefinition {
        kind,
        damage_on_hit: damage,
        ..default()
    }
}

#[test]
fn unregistered_kind_returns_none_default() {
    let registry = WeaponRegistry::from_definitions([def(WeaponType::Blaster, 1.0)]);

    let missing = registry.get(WeaponType::Laser);
    assert_eq!(missing.kind, WeaponType::None);
    assert_eq!(missing.damage_on_hit, 0.0);
    assert_eq!(registry.damage_on_hit(WeaponType::Missile), 0.0);
    assert!(!registry.contains(WeaponType::Laser));
}

#[test]
fn empty_registry_never_fails() {
    let registry = WeaponRegistry::from_definitions(Vec::new());
    assert!(registry.is_empty());
    assert_eq!(*registry.get(WeaponType::Blaster), WeaponDefinition::default());
}

#[test]
fn duplicate_kinds_last_entry_wins() {
    let registry = WeaponRegistry::from_definitions([
        def(WeaponType::Spread, 1.0),
        def(WeaponType::Blaster, 2.0),
        def(WeaponType::Spread, 7.5),
    ]);

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.damage_on_hit(WeaponType::Spread), 7.5);
    assert_eq!(registry.damage_on_hit(WeaponType::Blaster), 2.0);
}

#[test]
fn default_registry_covers_power_up_kinds() {
    let registry = WeaponRegistry::default();
    for kind in [WeaponType::Blaster, WeaponType::Spread, WeaponType::Shield] {
        assert!(registry.contains(kind), "{kind:?} should be registered");
    }
    assert_eq!(registry.damage_on_hit(WeaponType::Shield), 0.0);
    assert!(registry.get(WeaponType::Blaster).delay_between_shots > 0.0);
}
