//! Engine lifecycle against fake collaborators.

mod common;

use common::*;
use dockpin::handlers::{dispatch_all, dispatch_event, dispatch_pending};
use dockpin::interceptor::{HookState, TapEvent, TapVerdict};
use dockpin::model::constants::*;
use dockpin::model::{AllowedDisplaySet, ModifierFlags, Point};
use dockpin::storage::SettingsStore;
use dockpin::{AppEvent, EngineError, MemoryStore, OverrideModifier};

fn set(ids: &[dockpin::DisplayId]) -> AllowedDisplaySet {
    ids.iter().copied().collect()
}

fn motion(x: f64, y: f64, flags: ModifierFlags) -> TapEvent {
    TapEvent::Motion {
        position: Point::new(x, y),
        flags,
    }
}

fn enabled_on_a() -> Harness {
    let mut h = Harness::new(two_displays());
    h.engine.set_allowed_displays(set(&[A])).unwrap();
    assert!(h.engine.enable());
    h
}

// === Enable / disable ===

#[test]
fn enable_installs_tap_and_persists() {
    let h = enabled_on_a();
    assert!(h.engine.is_enabled());
    assert_eq!(h.engine.interceptor().state(), HookState::Installed);
    assert_eq!(h.tap.installs.get(), 1);
    assert_eq!(h.engine.settings().get_bool(PREF_ENABLED), Some(true));
    assert_eq!(h.engine.settings().get_int_list(PREF_ALLOWED_DISPLAYS), Some(vec![1]));
}

#[test]
fn enable_and_disable_are_idempotent() {
    let mut h = enabled_on_a();
    let after_one = h.engine.state().clone();
    assert!(h.engine.enable());
    assert_eq!(h.engine.state(), &after_one);
    assert_eq!(h.tap.installs.get(), 1);

    h.engine.disable();
    let after_disable = h.engine.state().clone();
    h.engine.disable();
    assert_eq!(h.engine.state(), &after_disable);
    assert_eq!(h.tap.removes.get(), 1);
    assert!(!h.tap.installed.get());
}

#[test]
fn enable_with_empty_set_allows_the_dock_host() {
    let mut h = Harness::new(two_displays());
    assert!(h.engine.enable());
    assert_eq!(h.engine.allowed_displays(), &set(&[A]));
    assert_eq!(h.engine.settings().get_int_list(PREF_ALLOWED_DISPLAYS), Some(vec![1]));
}

#[test]
fn enable_without_any_dock_host_is_rejected() {
    let mut h = Harness::new(b_and_c(false));
    assert_eq!(h.engine.try_enable(), Err(EngineError::ValidationRejected));
    assert!(!h.engine.is_enabled());
    assert_eq!(h.tap.installs.get(), 0);
    assert!(h.engine.settings().is_empty());
}

#[test]
fn refused_tap_leaves_engine_disabled_and_prompts() {
    let mut h = Harness::new(two_displays());
    h.engine.set_allowed_displays(set(&[A])).unwrap();
    h.tap.deny.set(true);

    assert!(!h.engine.enable());
    assert!(!h.engine.is_enabled());
    assert_eq!(h.engine.interceptor().state(), HookState::Uninstalled);
    assert_eq!(h.permission.requests.get(), 1);
    assert_ne!(h.engine.settings().get_bool(PREF_ENABLED), Some(true));

    assert_eq!(h.engine.try_enable(), Err(EngineError::PermissionDenied));
    assert_eq!(h.permission.requests.get(), 1);
}

#[test]
fn refused_tap_does_not_keep_the_seeded_display() {
    let mut h = Harness::new(two_displays());
    h.tap.deny.set(true);
    assert_eq!(h.engine.try_enable(), Err(EngineError::PermissionDenied));
    assert!(h.engine.allowed_displays().is_empty());
}

#[test]
fn permission_state_is_read_without_prompting() {
    let h = Harness::new(two_displays());
    assert!(!h.engine.permission_granted());
    h.permission.granted.set(true);
    assert!(h.engine.permission_granted());
    assert_eq!(h.permission.requests.get(), 0);
}

#[test]
fn read_only_store_does_not_block_enable() {
    let mut h = Harness::with_store(MemoryStore::read_only(), two_displays());
    assert!(h.engine.enable());
    assert!(h.engine.is_enabled());
    assert!(matches!(
        h.engine.persist_state(),
        Err(EngineError::Storage { .. })
    ));
}

// === Allowed displays ===

#[test]
fn clearing_allowed_set_while_enabled_is_rejected() {
    let mut h = enabled_on_a();
    assert_eq!(
        h.engine.set_allowed_displays(AllowedDisplaySet::new()),
        Err(EngineError::ValidationRejected)
    );
    assert_eq!(h.engine.allowed_displays(), &set(&[A]));

    assert_eq!(
        h.engine.toggle_allowed_display(A),
        Err(EngineError::ValidationRejected)
    );
    assert_eq!(h.engine.allowed_displays(), &set(&[A]));
}

#[test]
fn clearing_allowed_set_while_disabled_is_accepted() {
    let mut h = Harness::new(two_displays());
    h.engine.set_allowed_displays(set(&[A, B])).unwrap();
    h.engine.set_allowed_displays(AllowedDisplaySet::new()).unwrap();
    assert!(h.engine.allowed_displays().is_empty());
}

#[test]
fn toggling_a_display_republishes_geometry() {
    let mut h = enabled_on_a();
    assert_eq!(h.engine.snapshot().regions.len(), 1);

    h.engine.toggle_allowed_display(B).unwrap();
    assert!(h.engine.snapshot().regions.is_empty());
    assert_eq!(h.engine.settings().get_int_list(PREF_ALLOWED_DISPLAYS), Some(vec![1, 2]));
}

// === Clamping through the tap ===

#[test]
fn motion_near_blocked_bottom_is_nudged() {
    let h = enabled_on_a();
    // B is blocked; its bottom edge sits at y = 1080 in event space.
    assert_eq!(
        h.tap.deliver(motion(2500.0, 1078.0, ModifierFlags::NONE)),
        Some(TapVerdict::Reposition(Point::new(2500.0, 1073.0)))
    );
    assert_eq!(
        h.tap.deliver(motion(2500.0, 1050.0, ModifierFlags::NONE)),
        Some(TapVerdict::PassThrough)
    );
    // Over the allowed display.
    assert_eq!(
        h.tap.deliver(motion(500.0, 1078.0, ModifierFlags::NONE)),
        Some(TapVerdict::PassThrough)
    );
}

#[test]
fn disabled_engine_passes_every_event() {
    let mut h = enabled_on_a();
    h.engine.disable();
    for y in [1075.0, 1078.0, 1080.0, 1082.0] {
        assert_eq!(
            h.tap.deliver(motion(2500.0, y, ModifierFlags::NONE)),
            Some(TapVerdict::PassThrough)
        );
    }
}

#[test]
fn held_override_modifier_bypasses_clamp() {
    let mut h = enabled_on_a();
    h.engine.set_override_modifier(OverrideModifier::Control);
    assert_eq!(h.engine.settings().get_int(PREF_OVERRIDE_MODIFIER), Some(2));

    assert_eq!(
        h.tap.deliver(motion(2500.0, 1078.0, ModifierFlags::CONTROL)),
        Some(TapVerdict::PassThrough)
    );
    // The previous default no longer bypasses.
    assert!(matches!(
        h.tap.deliver(motion(2500.0, 1078.0, ModifierFlags::ALTERNATE)),
        Some(TapVerdict::Reposition(_))
    ));
}

#[test]
fn override_none_never_bypasses() {
    let mut h = enabled_on_a();
    h.engine.set_override_modifier(OverrideModifier::None);
    let everything = ModifierFlags::SHIFT
        | ModifierFlags::CONTROL
        | ModifierFlags::ALTERNATE
        | ModifierFlags::COMMAND;
    assert!(matches!(
        h.tap.deliver(motion(2500.0, 1078.0, everything)),
        Some(TapVerdict::Reposition(_))
    ));
}

#[test]
fn suspension_is_recovered_in_the_callback() {
    let h = enabled_on_a();
    let context = h.engine.interceptor().context();
    assert_eq!(
        h.tap.deliver(TapEvent::Suspended(
            dockpin::interceptor::SuspendReason::Timeout
        )),
        Some(TapVerdict::Reenable)
    );
    assert_eq!(context.suspension_count(), 1);
    assert!(h.engine.is_enabled());
}

// === Display reconfiguration ===

#[test]
fn reconfiguration_drops_disconnected_displays() {
    let mut h = Harness::new(two_displays());
    h.engine.set_allowed_displays(set(&[A, B])).unwrap();
    h.layout.set(b_and_c(false));

    h.engine.on_display_configuration_changed();
    assert_eq!(h.engine.allowed_displays(), &set(&[B]));
    assert_eq!(h.engine.settings().get_int_list(PREF_ALLOWED_DISPLAYS), Some(vec![2]));
}

#[test]
fn reconfiguration_follows_the_dock_when_nothing_is_left() {
    let mut h = enabled_on_a();
    h.layout.set(b_and_c(true));

    h.engine.on_display_configuration_changed();
    assert!(h.engine.is_enabled());
    assert_eq!(h.engine.allowed_displays(), &set(&[C]));
    // B is now the only blocked display; its bottom is at 1440.
    let snapshot = h.engine.snapshot();
    assert_eq!(snapshot.regions.len(), 1);
    assert_eq!(snapshot.regions[0].bottom_edge_y, 1440.0);
}

#[test]
fn reconfiguration_disables_when_no_dock_host_remains() {
    let mut h = enabled_on_a();
    h.layout.set(b_and_c(false));

    h.engine.on_display_configuration_changed();
    assert!(!h.engine.is_enabled());
    assert!(h.engine.allowed_displays().is_empty());
    assert_eq!(h.tap.removes.get(), 1);
    assert_eq!(h.engine.settings().get_bool(PREF_ENABLED), Some(false));
}

#[test]
fn reconfiguration_republishes_new_edges() {
    let mut h = enabled_on_a();
    let mut moved = two_displays();
    // B raised by 300 points: its bottom moves up in event space.
    moved.displays[1].frame.y = 300.0;
    moved.displays[1].visible_frame.y = 300.0;
    h.layout.set(moved);

    h.engine.on_display_configuration_changed();
    assert_eq!(h.engine.snapshot().regions[0].bottom_edge_y, 780.0);
}

// === Persistence ===

#[test]
fn persisted_state_restores_on_a_fresh_engine() {
    let mut h = enabled_on_a();
    h.engine.toggle_allowed_display(B).unwrap();
    h.engine.set_override_modifier(OverrideModifier::Shift);
    h.engine.persist_state().unwrap();
    let expected = h.engine.state().clone();

    let mut fresh = Harness::with_store(h.engine.settings().clone(), two_displays());
    fresh.engine.restore_state();
    assert_eq!(fresh.engine.state(), &expected);
    assert_eq!(fresh.tap.installs.get(), 1);
}

#[test]
fn restore_defaults_when_nothing_is_stored() {
    let mut h = Harness::new(two_displays());
    h.engine.restore_state();
    assert!(!h.engine.is_enabled());
    assert!(h.engine.allowed_displays().is_empty());
    assert_eq!(h.engine.override_modifier(), OverrideModifier::Alt);
    assert_eq!(h.tap.installs.get(), 0);
}

#[test]
fn restore_forgets_disconnected_displays() {
    let mut store = MemoryStore::new();
    store.set_int_list(PREF_ALLOWED_DISPLAYS, &[1, 99]).unwrap();
    store.set_bool(PREF_ENABLED, true).unwrap();

    let mut h = Harness::with_store(store, two_displays());
    h.engine.restore_state();
    assert!(h.engine.is_enabled());
    assert_eq!(h.engine.allowed_displays(), &set(&[A]));
}

#[test]
fn restore_on_a_running_engine_follows_the_dock_when_allowed_displays_vanish() {
    let mut h = enabled_on_a();
    h.layout.set(b_and_c(true));

    h.engine.restore_state();
    assert!(h.engine.is_enabled());
    assert_eq!(h.engine.allowed_displays(), &set(&[C]));
    assert_eq!(h.engine.snapshot().regions.len(), 1);
    assert_eq!(h.engine.settings().get_int_list(PREF_ALLOWED_DISPLAYS), Some(vec![3]));
}

#[test]
fn restore_on_a_running_engine_disables_without_a_dock_host() {
    let mut h = enabled_on_a();
    h.layout.set(b_and_c(false));

    h.engine.restore_state();
    assert!(!h.engine.is_enabled());
    assert!(h.engine.allowed_displays().is_empty());
    assert_eq!(h.tap.removes.get(), 1);
}

#[test]
fn enable_ignores_allowed_displays_that_are_not_connected() {
    let mut h = Harness::new(two_displays());
    h.engine.set_allowed_displays(set(&[C])).unwrap();

    assert!(h.engine.enable());
    assert_eq!(h.engine.allowed_displays(), &set(&[A]));
    // B is the only blocked display.
    assert_eq!(h.engine.snapshot().regions.len(), 1);
}

#[test]
fn restore_without_permission_keeps_stored_intent() {
    let mut store = MemoryStore::new();
    store.set_int_list(PREF_ALLOWED_DISPLAYS, &[1]).unwrap();
    store.set_bool(PREF_ENABLED, true).unwrap();

    let mut h = Harness::with_store(store, two_displays());
    h.tap.deny.set(true);
    h.engine.restore_state();
    assert!(!h.engine.is_enabled());
    assert_eq!(h.engine.settings().get_bool(PREF_ENABLED), Some(true));
}

// === Rearm and shutdown ===

#[test]
fn rearm_only_touches_an_enabled_engine() {
    let mut h = Harness::new(two_displays());
    h.engine.rearm();
    assert_eq!(h.tap.reenables.get(), 0);

    h.engine.enable();
    h.engine.rearm();
    assert_eq!(h.tap.reenables.get(), 1);
}

#[test]
fn shutdown_removes_tap_but_keeps_stored_record() {
    let mut h = enabled_on_a();
    h.engine.shutdown();
    assert!(!h.engine.is_enabled());
    assert_eq!(h.tap.removes.get(), 1);
    assert_eq!(h.engine.settings().get_bool(PREF_ENABLED), Some(true));
}

// === Dispatcher ===

#[test]
fn dispatch_toggle_enabled_flips_state() {
    let mut h = Harness::new(two_displays());
    dispatch_event(&mut h.engine, &AppEvent::ToggleEnabled).unwrap();
    assert!(h.engine.is_enabled());
    dispatch_event(&mut h.engine, &AppEvent::ToggleEnabled).unwrap();
    assert!(!h.engine.is_enabled());
}

#[test]
fn dispatch_all_counts_only_applied_events() {
    let mut h = Harness::new(two_displays());
    let applied = dispatch_all(
        &mut h.engine,
        vec![
            AppEvent::Enable,
            // Would empty the set while enabled.
            AppEvent::ToggleDisplay(A),
            AppEvent::SetOverrideModifier(OverrideModifier::Meta),
            AppEvent::KeepAlive,
        ],
    );
    assert_eq!(applied, 3);
    assert_eq!(h.engine.allowed_displays(), &set(&[A]));
    assert_eq!(h.engine.override_modifier(), OverrideModifier::Meta);
    assert_eq!(h.tap.reenables.get(), 1);
}

#[test]
fn dispatch_pending_drains_the_global_bus() {
    let mut h = Harness::new(two_displays());
    dockpin::events::publish(AppEvent::Enable);
    dockpin::events::publish(AppEvent::SystemWoke);
    dockpin::events::publish(AppEvent::Shutdown);

    assert_eq!(dispatch_pending(&mut h.engine), Some(3));
    assert!(!h.engine.is_enabled());
    assert_eq!(h.tap.installs.get(), 1);
    assert_eq!(h.tap.reenables.get(), 1);
    assert_eq!(h.tap.removes.get(), 1);
    assert_eq!(dispatch_pending(&mut h.engine), Some(0));
}
