use glam::{Mat3, Mat4, Quat, Vec3};

#[cfg(feature = "trace")]
use tracing::trace;

/// Axis every cube of the field spins around.
pub const CUBE_ROTATION_AXIS: [f32; 3] = [1.0, 0.3, 0.5];
/// Each cube is turned this many degrees further than the previous one.
pub const CUBE_ANGLE_STEP: f32 = 20.0;
pub const LAMP_SCALE: f32 = 0.5;

/// Placement of one mesh instance, applied as scale, then rotation, then
/// translation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation_axis: Vec3,
    pub angle_degrees: f32,
    pub scale: Vec3
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation_axis: Vec3::Y,
            angle_degrees: 0.0,
            scale: Vec3::ONE
        }
    }
}

impl Transform {
    /// The `index`th cube of the field.
    pub fn cube(index: usize, position: Vec3) -> Self {
        Self {
            translation: position,
            rotation_axis: Vec3::from(CUBE_ROTATION_AXIS),
            angle_degrees: CUBE_ANGLE_STEP * index as f32,
            ..Self::default()
        }
    }

    /// Small unlit cube marking a point light.
    pub fn lamp(position: Vec3) -> Self {
        Self {
            translation: position,
            scale: Vec3::splat(LAMP_SCALE),
            ..Self::default()
        }
    }

    pub fn to_model(&self) -> Mat4 {
        let rotation = if self.rotation_axis.length_squared() > 0.0 {
            Quat::from_axis_angle(self.rotation_axis.normalize(), self.angle_degrees.to_radians())
        } else {
            Quat::IDENTITY
        };

        let model = Mat4::from_scale_rotation_translation(self.scale, rotation, self.translation);
        #[cfg(feature = "trace")]
        trace!("Created model matrix from transform: {:?}", model);

        model
    }
}

/// Matrix that carries normals into world space for `model`: the inverse
/// transpose of its upper 3x3, so non-uniform scale keeps them
/// perpendicular to their surface.
pub fn normal_matrix(model: &Mat4) -> Mat3 {
    Mat3::from_cols(
        model.x_axis.truncate(),
        model.y_axis.truncate(),
        model.z_axis.truncate()
    )
        .inverse()
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_cube_is_only_translated() {
        let model = Transform::cube(0, Vec3::new(1.0, 2.0, 3.0)).to_model();
        assert!(model.abs_diff_eq(Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)), 1.0e-6));
    }

    #[test]
    fn cube_angles_step_by_twenty_degrees() {
        assert_eq!(Transform::cube(3, Vec3::ZERO).angle_degrees, 60.0);
    }

    #[test]
    fn lamp_is_half_size() {
        let model = Transform::lamp(Vec3::ZERO).to_model();
        let corner = model.transform_point3(Vec3::splat(0.5));
        assert!(corner.abs_diff_eq(Vec3::splat(0.25), 1.0e-6));
    }

    #[test]
    fn normal_matrix_of_rotation_is_the_rotation() {
        let model = Transform::cube(5, Vec3::new(4.0, 0.0, -1.0)).to_model();
        let normal = normal_matrix(&model);
        let rotation = Mat3::from_quat(Quat::from_axis_angle(Vec3::from(CUBE_ROTATION_AXIS).normalize(), 100.0_f32.to_radians()));

        assert!(normal.abs_diff_eq(rotation, 1.0e-5));
    }

    #[test]
    fn normal_matrix_keeps_normals_perpendicular_under_scale() {
        let model = Mat4::from_scale(Vec3::new(4.0, 1.0, 1.0));
        let normal = normal_matrix(&model);

        // Surface along the (1, -1, 0) diagonal with normal (1, 1, 0).
        let tangent = model.transform_vector3(Vec3::new(1.0, -1.0, 0.0));
        let transformed_normal = normal * Vec3::new(1.0, 1.0, 0.0);

        assert!(tangent.dot(transformed_normal).abs() < 1.0e-5);
    }
}
