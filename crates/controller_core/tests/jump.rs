mod common;

use common::{Host, camera, cid, controller};
use controller_core::input::{InputCommand, InputQueue, InputState};

#[test]
fn jump_impulse_matches_kinematic_relation() {
    let mut host = Host::default();
    host.motion.grounded = true;
    let mut pc = controller(&host);
    let mut queue = InputQueue::default();
    let cam = camera();
    let dt = 0.016;

    let input = InputState {
        jump_pressed: true,
        ..Default::default()
    };
    let mut hooks = host.hooks();
    pc.update(&input, &mut queue, &cam, dt, &mut hooks);
    drop(hooks);

    // impulse = sqrt(h * 3 * |g|), minus one tick of gravity already applied
    let expected = (1.0f32 * 3.0 * 9.81).sqrt() - 9.81 * dt;
    assert!(
        (pc.vertical_velocity() - expected).abs() < 1e-4,
        "vel = {}, expected {expected}",
        pc.vertical_velocity()
    );
    // Second motion request of the tick is the vertical one
    let vertical = host.motion.moves[1];
    assert!((vertical.y - pc.vertical_velocity() * dt).abs() < 1e-6);
}

#[test]
fn jump_requires_ground_contact() {
    let mut host = Host::default();
    host.motion.grounded = false;
    let mut pc = controller(&host);
    let mut queue = InputQueue::default();
    let cam = camera();

    let input = InputState {
        jump_pressed: true,
        ..Default::default()
    };
    let mut hooks = host.hooks();
    pc.update(&input, &mut queue, &cam, 0.016, &mut hooks);
    drop(hooks);

    // Airborne press is ignored: only gravity applies
    assert!(pc.vertical_velocity() < 0.0);
    assert!((pc.vertical_velocity() + 9.81 * 0.016).abs() < 1e-5);
}

#[test]
fn jump_clip_depends_on_equip_state() {
    let mut host = Host::default();
    host.motion.grounded = true;
    let mut pc = controller(&host);
    let mut queue = InputQueue::default();
    let cam = camera();
    let input = InputState {
        jump_pressed: true,
        ..Default::default()
    };

    let mut hooks = host.hooks();
    pc.update(&input, &mut queue, &cam, 0.016, &mut hooks);
    drop(hooks);
    assert!(host.anim.fades.iter().any(|(c, _)| *c == cid("Jump")));

    // Equip via the command queue, then jump again
    queue.push(InputCommand::ToggleWeapon);
    let idle = InputState::default();
    let mut hooks = host.hooks();
    pc.update(&idle, &mut queue, &cam, 0.016, &mut hooks);
    pc.update(&input, &mut queue, &cam, 0.016, &mut hooks);
    drop(hooks);
    assert!(pc.weapon().equipped());
    assert!(host.anim.fades.iter().any(|(c, _)| *c == cid("PistolJump")));
}
