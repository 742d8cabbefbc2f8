//! Kinematic integration: translation += velocity * dt.

use hecs::World;

use mineworks_core::components::{RigidBody, Transform};

pub fn run(world: &mut World, dt: f32) {
    for (_entity, (transform, body)) in world.query_mut::<(&mut Transform, &RigidBody)>() {
        transform.translation += body.velocity * dt;
    }
}
