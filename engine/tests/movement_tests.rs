//! Movement Tests - Ground, Air and Jump Timing
//!
//! End-to-end tests for the movement controller driven tick by tick.

use glam::Vec3;
use strafe_engine::camera::Orientation;
use strafe_engine::input::KeyCode;
use strafe_engine::player::{
    JumpOutcome, MovementConfig, MovementController, TickReport, MAX_AIR_SPEED,
};

const DT: f32 = 0.016;
const EPS: f32 = 0.001;

fn spawn() -> MovementController {
    MovementController::new().with_position(Vec3::new(0.0, 0.0, 5.0))
}

fn assert_ground_invariant(controller: &MovementController) {
    assert!(
        controller.position().y >= controller.ground_level(),
        "below ground: {:?}",
        controller.position()
    );
    if controller.is_grounded() {
        assert_eq!(controller.vertical_velocity(), 0.0);
        assert!(!controller.is_jumping());
    }
}

/// Tick until the controller lands, returning the tick number.
fn ticks_until_landing(controller: &mut MovementController, orientation: &Orientation) -> usize {
    for tick in 1..=200 {
        if controller.update(DT, orientation).landed {
            return tick;
        }
    }
    panic!("never landed");
}

// ============================================================================
// Ground movement
// ============================================================================

#[test]
fn test_walk_forward_ten_ticks() {
    let orientation = Orientation::new();
    let mut controller = spawn();
    controller.keys_mut().handle_key(KeyCode::W, true);

    for _ in 0..10 {
        controller.update(DT, &orientation);
    }

    let position = controller.position();
    assert!((position.z - 4.2).abs() < EPS, "z = {}", position.z);
    assert!(position.x.abs() < EPS);
    assert_eq!(position.y, 0.0);
}

#[test]
fn test_diagonal_is_not_faster() {
    let orientation = Orientation::new();
    let mut controller = spawn();
    controller.keys_mut().handle_key(KeyCode::W, true);
    controller.keys_mut().handle_key(KeyCode::D, true);

    controller.update(DT, &orientation);

    let delta = controller.position() - Vec3::new(0.0, 0.0, 5.0);
    assert!((delta.length() - 0.08).abs() < EPS);
    // Forward is -Z and right is +X at the default yaw
    assert!(delta.x > 0.0);
    assert!(delta.z < 0.0);
    assert!((delta.x + delta.z).abs() < EPS);
}

#[test]
fn test_turning_on_ground_sheds_old_momentum() {
    let orientation = Orientation::new();
    let mut controller = spawn();
    controller.keys_mut().handle_key(KeyCode::W, true);
    for _ in 0..10 {
        controller.update(DT, &orientation);
    }

    controller.keys_mut().handle_key(KeyCode::W, false);
    controller.keys_mut().handle_key(KeyCode::D, true);
    for _ in 0..60 {
        controller.update(DT, &orientation);
    }

    let z = controller.position().z;
    for _ in 0..10 {
        controller.update(DT, &orientation);
    }

    assert!(controller.is_grounded());
    assert!((controller.position().z - z).abs() < EPS, "still drifting along z");
    assert!(controller.velocity().z.abs() < EPS);
    let move_speed = MovementConfig::default().move_speed;
    assert!((controller.horizontal_speed() - move_speed).abs() < EPS);
}

#[test]
fn test_steady_diagonal_walk_holds_walk_speed() {
    let orientation = Orientation::new();
    let mut controller = spawn();
    controller.keys_mut().handle_key(KeyCode::W, true);
    for _ in 0..30 {
        controller.update(DT, &orientation);
    }

    controller.keys_mut().handle_key(KeyCode::D, true);
    for _ in 0..60 {
        controller.update(DT, &orientation);
    }

    let move_speed = MovementConfig::default().move_speed;
    assert!((controller.horizontal_speed() - move_speed).abs() < EPS);
}

#[test]
fn test_running_doubles_speed() {
    let orientation = Orientation::new();
    let mut controller = spawn();
    controller.keys_mut().handle_key(KeyCode::W, true);
    controller.keys_mut().handle_key(KeyCode::ShiftLeft, true);

    controller.update(DT, &orientation);

    assert!((controller.position().z - (5.0 - 0.16)).abs() < EPS);
    assert!((controller.horizontal_speed() - 10.0).abs() < EPS);
}

#[test]
fn test_opposite_keys_cancel() {
    let orientation = Orientation::new();
    let mut controller = spawn();
    controller.keys_mut().handle_key(KeyCode::W, true);
    controller.keys_mut().handle_key(KeyCode::S, true);

    controller.update(DT, &orientation);
    assert_eq!(controller.position(), Vec3::new(0.0, 0.0, 5.0));
}

// ============================================================================
// Jump arc
// ============================================================================

#[test]
fn test_jump_arc_returns_to_ground() {
    let orientation = Orientation::new();
    let mut controller = spawn();

    assert_eq!(controller.press_jump(&orientation), JumpOutcome::Jumped);
    assert!(!controller.is_grounded());

    // y(t) = 8t - 10t^2, apex 1.6 at t = 0.4
    for _ in 0..25 {
        controller.update(DT, &orientation);
        assert_ground_invariant(&controller);
    }
    assert!((controller.position().y - 1.6).abs() < 0.01);

    let landing_tick = 25 + ticks_until_landing(&mut controller, &orientation);
    let landing_time = landing_tick as f32 * DT;
    assert!((0.79..=0.82).contains(&landing_time), "landed at {landing_time}s");

    assert!(controller.is_grounded());
    assert_eq!(controller.position().y, 0.0);
    assert_eq!(controller.vertical_velocity(), 0.0);
    assert!(!controller.is_jumping());
}

#[test]
fn test_jump_with_custom_tuning() {
    let config = MovementConfig {
        jump_velocity: 10.0,
        gravity: 10.0,
        ..MovementConfig::default()
    };
    let orientation = Orientation::new();
    let mut controller = MovementController::with_config(config);
    controller.press_jump(&orientation);

    // Airborne for 2 * 10 / 10 = 2 seconds
    let landing_time = ticks_until_landing(&mut controller, &orientation) as f32 * DT;
    assert!((1.98..=2.02).contains(&landing_time), "landed at {landing_time}s");
}

// ============================================================================
// Coyote time and jump buffering
// ============================================================================

#[test]
fn test_coyote_jump_just_after_leaving_ground() {
    let orientation = Orientation::new();
    let mut controller = spawn();
    controller.set_ground_level(-2.0);
    assert!(!controller.is_grounded());

    controller.update(DT, &orientation);
    controller.update(DT, &orientation);

    assert_eq!(controller.press_jump(&orientation), JumpOutcome::Jumped);
    assert!(controller.is_jumping());
    assert_eq!(controller.vertical_velocity(), MovementConfig::default().jump_velocity);
}

#[test]
fn test_coyote_window_expires() {
    let orientation = Orientation::new();
    let mut controller = spawn();
    controller.set_ground_level(-2.0);

    for _ in 0..10 {
        controller.update(DT, &orientation);
    }

    assert_eq!(controller.coyote_time(), 0.0);
    assert_eq!(controller.press_jump(&orientation), JumpOutcome::Buffered);
    assert!(controller.jump_buffer_time() > 0.0);
}

#[test]
fn test_buffered_jump_fires_on_landing() {
    let orientation = Orientation::new();
    let mut controller = spawn();
    controller.press_jump(&orientation);

    // Late in the descent, about 0.75s into the jump
    for _ in 0..47 {
        controller.update(DT, &orientation);
    }
    assert_eq!(controller.press_jump(&orientation), JumpOutcome::Buffered);

    let mut fired = false;
    for _ in 0..10 {
        let report = controller.update(DT, &orientation);
        if report.landed {
            fired = report.jumped;
            break;
        }
    }

    assert!(fired);
    assert!(controller.is_jumping());
    assert!(!controller.is_grounded());
    assert_eq!(controller.vertical_velocity(), 8.0);
}

#[test]
fn test_buffered_jump_expires_before_landing() {
    let orientation = Orientation::new();
    let mut controller = spawn();
    controller.press_jump(&orientation);

    // At the apex, far more than the buffer window before landing
    for _ in 0..25 {
        controller.update(DT, &orientation);
    }
    assert_eq!(controller.press_jump(&orientation), JumpOutcome::Buffered);

    let mut report = TickReport::default();
    for _ in 0..60 {
        report = controller.update(DT, &orientation);
        if report.landed {
            break;
        }
    }

    assert!(report.landed);
    assert!(!report.jumped);
    assert!(controller.is_grounded());
}

// ============================================================================
// Air strafing
// ============================================================================

#[test]
fn test_air_strafe_gains_speed_up_to_cap() {
    let mut orientation = Orientation::new();
    let mut controller = spawn();
    // Long fall so the whole test happens in the air
    controller.set_ground_level(-1.0e6);
    controller.keys_mut().handle_key(KeyCode::D, true);

    for _ in 0..600 {
        controller.update(DT, &orientation);
        orientation.set_yaw(orientation.yaw() + 1.0);
        assert!(controller.horizontal_speed() <= MAX_AIR_SPEED + EPS);
    }

    // Well past the 5 u/s a straight strafe would settle at
    assert!(controller.horizontal_speed() > 10.0);
    assert!(!controller.is_grounded());
}

#[test]
fn test_straight_air_strafe_settles_at_wish_speed() {
    let orientation = Orientation::new();
    let mut controller = spawn();
    controller.set_ground_level(-1.0e6);
    controller.keys_mut().handle_key(KeyCode::D, true);

    for _ in 0..300 {
        controller.update(DT, &orientation);
    }
    assert!(controller.horizontal_speed() <= 5.0 + EPS);
    assert!(controller.horizontal_speed() > 4.5);
}

// ============================================================================
// Invariants
// ============================================================================

#[test]
fn test_ground_invariant_under_mixed_input() {
    let mut orientation = Orientation::new();
    let mut controller = spawn();
    let keys = [KeyCode::W, KeyCode::A, KeyCode::S, KeyCode::D, KeyCode::ShiftLeft];

    // Small LCG so the sequence is fixed
    let mut seed: u32 = 0x2545_f491;
    let mut next = move || {
        seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        seed >> 8
    };

    for _ in 0..2000 {
        let roll = next();
        let key = keys[(roll % keys.len() as u32) as usize];
        controller.keys_mut().handle_key(key, roll & 0x100 != 0);

        if roll % 7 == 0 {
            controller.press_jump(&orientation);
        }
        if roll % 97 == 0 {
            controller.toggle_fly_mode();
        }
        orientation.apply_mouse_delta((roll % 41) as f32 - 20.0, 0.0);

        let dt = (roll % 40) as f32 * 0.001;
        controller.update(dt, &orientation);
        assert_ground_invariant(&controller);
        assert!(controller.horizontal_speed() <= 12.0 + EPS);
    }
}

#[test]
fn test_huge_frame_time_is_clamped() {
    let orientation = Orientation::new();
    let mut clamped = spawn();
    let mut reference = spawn();
    clamped.keys_mut().handle_key(KeyCode::W, true);
    reference.keys_mut().handle_key(KeyCode::W, true);

    clamped.update(5.0, &orientation);
    reference.update(0.1, &orientation);

    assert!((clamped.position() - reference.position()).length() < EPS);
}
