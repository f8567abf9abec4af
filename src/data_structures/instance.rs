//! Position, rotation and scale of a scene node.
//!
//! An [`Instance`] is used both for local (parent-relative) and world
//! transforms. Composition follows `world = parent_world * local`, and
//! [`Instance::relative_to`] undoes it.

use std::ops::Mul;

use cgmath::{ElementWise, One, Rotation};

/// Transformation: position, rotation (as quaternion), and scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Instance {
    pub position: cgmath::Vector3<f32>,
    pub rotation: cgmath::Quaternion<f32>,
    pub scale: cgmath::Vector3<f32>,
}

impl Instance {
    /// Create a new instance with identity transformation (no move, rotate, or scale).
    pub fn new() -> Self {
        Self {
            position: cgmath::Vector3::new(0.0, 0.0, 0.0),
            // `Quaternion::one()` is the identity quaternion (no rotation)
            rotation: cgmath::Quaternion::one(),
            scale: cgmath::Vector3::new(1.0, 1.0, 1.0),
        }
    }

    pub fn to_matrix(&self) -> cgmath::Matrix4<f32> {
        cgmath::Matrix4::from_translation(self.position)
            * cgmath::Matrix4::from(self.rotation)
            * cgmath::Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }

    /**
     * Expresses `self` (a world transform) in the space of `parent` (another world transform).
     *
     * This is the inverse of the composition: `parent * self.relative_to(parent) == self`.
     * A zero component in `parent.scale` produces non-finite values on that axis.
     */
    pub fn relative_to(&self, parent: &Instance) -> Instance {
        let inv_rotation = parent.rotation.invert();
        let position =
            (inv_rotation * (self.position - parent.position)).div_element_wise(parent.scale);

        Instance {
            position,
            rotation: inv_rotation * self.rotation,
            scale: self.scale.div_element_wise(parent.scale),
        }
    }
}

impl<'a, 'b> Mul<&'b Instance> for &'a Instance {
    type Output = Instance;

    fn mul(self, rhs: &'b Instance) -> Self::Output {
        let scaled_rhs_pos = self.scale.mul_element_wise(rhs.position);

        Instance {
            position: self.position + (self.rotation * scaled_rhs_pos),
            rotation: self.rotation * rhs.rotation,
            scale: self.scale.mul_element_wise(rhs.scale),
        }
    }
}

impl Mul<Instance> for Instance {
    type Output = Self;

    fn mul(self, rhs: Instance) -> Self::Output {
        &self * &rhs
    }
}

impl From<cgmath::Vector3<f32>> for Instance {
    fn from(position: cgmath::Vector3<f32>) -> Self {
        Instance {
            position,
            ..Default::default()
        }
    }
}

impl Default for Instance {
    fn default() -> Self {
        Self::new()
    }
}
