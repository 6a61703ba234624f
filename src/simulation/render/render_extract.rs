use super::WorldCore;

/// Vertex slots reserved per shape in `vertices` (squares use all four)
pub const VERTEX_SLOTS: usize = 4;
/// Floats per shape in `transforms`: x, y, angle, size
pub const TRANSFORM_STRIDE: usize = 4;

/// Flat per-shape arrays for the JS renderer.
///
/// Shape `i` lives at `kinds[i]`, `colors[i]`, `vertex_counts[i]`,
/// `transforms[i * 4..]` and `vertices[i * 8..]` (x, y pairs, unused
/// slots zeroed).
#[derive(Default)]
pub struct RenderBuffers {
    pub kinds: Vec<u8>,
    pub colors: Vec<u32>,
    pub vertex_counts: Vec<u8>,
    pub transforms: Vec<f32>,
    pub vertices: Vec<f32>,
}

impl RenderBuffers {
    fn reset(&mut self, n: usize) {
        self.kinds.clear();
        self.colors.clear();
        self.vertex_counts.clear();
        self.transforms.clear();
        self.vertices.clear();

        self.kinds.reserve(n);
        self.colors.reserve(n);
        self.vertex_counts.reserve(n);
        self.transforms.reserve(n * TRANSFORM_STRIDE);
        self.vertices.reserve(n * VERTEX_SLOTS * 2);
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

pub(super) fn extract(world: &mut WorldCore) -> usize {
    let shapes = world.bodies.shapes();
    let buf = &mut world.render;
    buf.reset(shapes.len());

    for s in shapes {
        buf.kinds.push(s.kind as u8);
        buf.colors.push(s.color);
        buf.transforms.extend_from_slice(&[s.pos.x, s.pos.y, s.angle, s.size]);

        let verts = s.vertices();
        buf.vertex_counts.push(verts.len() as u8);
        for slot in 0..VERTEX_SLOTS {
            match verts.get(slot) {
                Some(v) => buf.vertices.extend_from_slice(&[v.x, v.y]),
                None => buf.vertices.extend_from_slice(&[0.0, 0.0]),
            }
        }
    }

    buf.len()
}
