//! Player movement system, run once per physics step.
//!
//! Turns the latest input sample into a horizontal velocity along the
//! player's facing, keeps vertical velocity untouched, then turns the
//! player to the camera's horizontal axis.

use glam::Vec3;
use hecs::World;

use mineworks_core::components::{CameraRig, MovementInput, Player, RigidBody, Transform};

pub fn run(world: &mut World) {
    for (_entity, (player, transform, body, input, camera)) in world.query_mut::<(
        &Player,
        &mut Transform,
        &mut RigidBody,
        &MovementInput,
        Option<&CameraRig>,
    )>() {
        let local = Vec3::new(
            input.value.x * player.speed,
            0.0,
            input.value.y * player.speed,
        );
        let direction = transform.transform_direction(local);
        body.velocity = Vec3::new(direction.x, body.velocity.y, direction.z);

        if player.align_to_camera {
            if let Some(camera) = camera {
                transform.rotation = Transform::yaw_rotation(camera.yaw_degrees);
            }
        }
    }
}
