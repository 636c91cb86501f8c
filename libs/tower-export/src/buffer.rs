//! Binary buffer packing with 4-byte alignment and accessor creation

use gltf_json as json;
use gltf_json::validation::Checked::Valid;

/// Accessor index returned by buffer operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessorIndex(pub u32);

impl AccessorIndex {
    pub fn as_json_index(&self) -> json::Index<json::Accessor> {
        json::Index::new(self.0)
    }
}

/// Builder for the single binary buffer of a GLB
#[derive(Debug, Default)]
pub struct BufferBuilder {
    buffer: Vec<u8>,
    views: Vec<json::buffer::View>,
    accessors: Vec<json::Accessor>,
}

impl BufferBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binary buffer contents
    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    pub fn views(&self) -> &[json::buffer::View] {
        &self.views
    }

    pub fn accessors(&self) -> &[json::Accessor] {
        &self.accessors
    }

    fn push_view(&mut self, offset: usize, byte_length: usize, target: json::buffer::Target) -> u32 {
        self.views.push(json::buffer::View {
            buffer: json::Index::new(0),
            byte_length: byte_length.into(),
            byte_offset: Some((offset as u64).into()),
            byte_stride: None,
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            target: Some(Valid(target)),
        });
        self.views.len() as u32 - 1
    }

    fn push_accessor(
        &mut self,
        view: u32,
        count: usize,
        component: json::accessor::ComponentType,
        type_: json::accessor::Type,
        bounds: Option<(Vec<f32>, Vec<f32>)>,
    ) -> AccessorIndex {
        let (min, max) = match bounds {
            Some((min, max)) => (
                Some(json::Value::Array(min.into_iter().map(json::Value::from).collect())),
                Some(json::Value::Array(max.into_iter().map(json::Value::from).collect())),
            ),
            None => (None, None),
        };

        let accessor_idx = self.accessors.len() as u32;
        self.accessors.push(json::Accessor {
            buffer_view: Some(json::Index::new(view)),
            byte_offset: Some(0u64.into()),
            count: count.into(),
            component_type: Valid(json::accessor::GenericComponentType(component)),
            extensions: Default::default(),
            extras: Default::default(),
            type_: Valid(type_),
            min,
            max,
            name: None,
            normalized: false,
            sparse: None,
        });

        align_buffer(&mut self.buffer);
        AccessorIndex(accessor_idx)
    }

    /// Pack Vec3 positions with bounds calculation
    pub fn pack_positions(&mut self, positions: &[[f32; 3]]) -> AccessorIndex {
        let offset = self.buffer.len();
        self.buffer.extend_from_slice(bytemuck::cast_slice(positions));
        let view = self.push_view(offset, positions.len() * 12, json::buffer::Target::ArrayBuffer);
        self.push_accessor(
            view,
            positions.len(),
            json::accessor::ComponentType::F32,
            json::accessor::Type::Vec3,
            Some(compute_bounds(positions)),
        )
    }

    /// Pack Vec3 data without bounds (normals)
    pub fn pack_vec3(&mut self, data: &[[f32; 3]]) -> AccessorIndex {
        let offset = self.buffer.len();
        self.buffer.extend_from_slice(bytemuck::cast_slice(data));
        let view = self.push_view(offset, data.len() * 12, json::buffer::Target::ArrayBuffer);
        self.push_accessor(
            view,
            data.len(),
            json::accessor::ComponentType::F32,
            json::accessor::Type::Vec3,
            None,
        )
    }

    /// Pack triangle indices as u32 scalars
    pub fn pack_indices_u32(&mut self, indices: &[u32]) -> AccessorIndex {
        let offset = self.buffer.len();
        for idx in indices {
            self.buffer.extend_from_slice(&idx.to_le_bytes());
        }
        let view = self.push_view(
            offset,
            indices.len() * 4,
            json::buffer::Target::ElementArrayBuffer,
        );
        self.push_accessor(
            view,
            indices.len(),
            json::accessor::ComponentType::U32,
            json::accessor::Type::Scalar,
            None,
        )
    }
}

/// Compute bounding box for positions
pub fn compute_bounds(positions: &[[f32; 3]]) -> (Vec<f32>, Vec<f32>) {
    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];

    for pos in positions {
        for i in 0..3 {
            min[i] = min[i].min(pos[i]);
            max[i] = max[i].max(pos[i]);
        }
    }

    (min.to_vec(), max.to_vec())
}

/// Align buffer to 4-byte boundary
pub fn align_buffer(buffer: &mut Vec<u8>) {
    while buffer.len() % 4 != 0 {
        buffer.push(0);
    }
}
