use luminance_derive::{Semantics, Vertex};

#[derive(Copy, Clone, Debug, Semantics)]
pub enum VertexSemantics {
    #[sem(name = "position", repr = "[f32; 3]", wrapper = "VertexPosition")]
    Position,
    #[sem(name = "normal", repr = "[f32; 3]", wrapper = "VertexNormal")]
    Normal,
    #[sem(name = "uv", repr = "[f32; 2]", wrapper = "VertexUV")]
    UV
}

#[derive(Copy, Clone, Debug, Vertex)]
#[vertex(sem = "VertexSemantics")]
pub struct CubeVertex {
    pub position: VertexPosition,
    pub normal: VertexNormal,
    pub uv: VertexUV
}

pub const CUBE_VERTEX_COUNT: usize = 36;

/// Unit cube centred on the origin, two triangles per face. Each row is
/// position, outward normal, texture coordinate.
pub const CUBE_DATA: [[f32; 8]; CUBE_VERTEX_COUNT] = [
    [-0.5, -0.5, -0.5,   0.0,  0.0, -1.0,  0.0, 0.0],
    [ 0.5, -0.5, -0.5,   0.0,  0.0, -1.0,  1.0, 0.0],
    [ 0.5,  0.5, -0.5,   0.0,  0.0, -1.0,  1.0, 1.0],
    [ 0.5,  0.5, -0.5,   0.0,  0.0, -1.0,  1.0, 1.0],
    [-0.5,  0.5, -0.5,   0.0,  0.0, -1.0,  0.0, 1.0],
    [-0.5, -0.5, -0.5,   0.0,  0.0, -1.0,  0.0, 0.0],

    [-0.5, -0.5,  0.5,   0.0,  0.0,  1.0,  0.0, 0.0],
    [ 0.5, -0.5,  0.5,   0.0,  0.0,  1.0,  1.0, 0.0],
    [ 0.5,  0.5,  0.5,   0.0,  0.0,  1.0,  1.0, 1.0],
    [ 0.5,  0.5,  0.5,   0.0,  0.0,  1.0,  1.0, 1.0],
    [-0.5,  0.5,  0.5,   0.0,  0.0,  1.0,  0.0, 1.0],
    [-0.5, -0.5,  0.5,   0.0,  0.0,  1.0,  0.0, 0.0],

    [-0.5,  0.5,  0.5,  -1.0,  0.0,  0.0,  1.0, 0.0],
    [-0.5,  0.5, -0.5,  -1.0,  0.0,  0.0,  1.0, 1.0],
    [-0.5, -0.5, -0.5,  -1.0,  0.0,  0.0,  0.0, 1.0],
    [-0.5, -0.5, -0.5,  -1.0,  0.0,  0.0,  0.0, 1.0],
    [-0.5, -0.5,  0.5,  -1.0,  0.0,  0.0,  0.0, 0.0],
    [-0.5,  0.5,  0.5,  -1.0,  0.0,  0.0,  1.0, 0.0],

    [ 0.5,  0.5,  0.5,   1.0,  0.0,  0.0,  1.0, 0.0],
    [ 0.5,  0.5, -0.5,   1.0,  0.0,  0.0,  1.0, 1.0],
    [ 0.5, -0.5, -0.5,   1.0,  0.0,  0.0,  0.0, 1.0],
    [ 0.5, -0.5, -0.5,   1.0,  0.0,  0.0,  0.0, 1.0],
    [ 0.5, -0.5,  0.5,   1.0,  0.0,  0.0,  0.0, 0.0],
    [ 0.5,  0.5,  0.5,   1.0,  0.0,  0.0,  1.0, 0.0],

    [-0.5, -0.5, -0.5,   0.0, -1.0,  0.0,  0.0, 1.0],
    [ 0.5, -0.5, -0.5,   0.0, -1.0,  0.0,  1.0, 1.0],
    [ 0.5, -0.5,  0.5,   0.0, -1.0,  0.0,  1.0, 0.0],
    [ 0.5, -0.5,  0.5,   0.0, -1.0,  0.0,  1.0, 0.0],
    [-0.5, -0.5,  0.5,   0.0, -1.0,  0.0,  0.0, 0.0],
    [-0.5, -0.5, -0.5,   0.0, -1.0,  0.0,  0.0, 1.0],

    [-0.5,  0.5, -0.5,   0.0,  1.0,  0.0,  0.0, 1.0],
    [ 0.5,  0.5, -0.5,   0.0,  1.0,  0.0,  1.0, 1.0],
    [ 0.5,  0.5,  0.5,   0.0,  1.0,  0.0,  1.0, 0.0],
    [ 0.5,  0.5,  0.5,   0.0,  1.0,  0.0,  1.0, 0.0],
    [-0.5,  0.5,  0.5,   0.0,  1.0,  0.0,  0.0, 0.0],
    [-0.5,  0.5, -0.5,   0.0,  1.0,  0.0,  0.0, 1.0],
];

pub fn cube_vertices() -> Vec<CubeVertex> {
    CUBE_DATA.iter()
        .map(|v| CubeVertex::new(
            VertexPosition::new([v[0], v[1], v[2]]),
            VertexNormal::new([v[3], v[4], v[5]]),
            VertexUV::new([v[6], v[7]])
        ))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn every_vertex_lies_on_the_face_its_normal_names() {
        for v in CUBE_DATA.iter() {
            let position = Vec3::new(v[0], v[1], v[2]);
            let normal = Vec3::new(v[3], v[4], v[5]);

            assert_eq!(normal.length(), 1.0);
            assert_eq!(position.dot(normal), 0.5);
        }
    }

    #[test]
    fn each_face_is_six_vertices_with_one_normal() {
        for face in CUBE_DATA.chunks(6) {
            let normal = [face[0][3], face[0][4], face[0][5]];
            assert!(face.iter().all(|v| [v[3], v[4], v[5]] == normal));
        }
    }

    #[test]
    fn texture_coordinates_stay_in_unit_square() {
        for v in CUBE_DATA.iter() {
            assert!((0.0..=1.0).contains(&v[6]) && (0.0..=1.0).contains(&v[7]));
        }
    }

    #[test]
    fn builds_one_vertex_per_row() {
        assert_eq!(cube_vertices().len(), CUBE_VERTEX_COUNT);
    }
}
