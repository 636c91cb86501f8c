//! glTF document construction for a single-mesh scene

use crate::buffer::{AccessorIndex, BufferBuilder};
use gltf_json as json;
use gltf_json::validation::Checked::Valid;
use std::collections::BTreeMap;

/// Accessors of one triangle mesh primitive
#[derive(Debug, Clone, Copy)]
pub struct MeshAccessors {
    pub positions: AccessorIndex,
    pub normals: Option<AccessorIndex>,
    pub indices: AccessorIndex,
}

fn mesh_from_accessors(name: &str, accessors: &MeshAccessors) -> json::Mesh {
    let mut attributes = BTreeMap::new();
    attributes.insert(
        Valid(json::mesh::Semantic::Positions),
        accessors.positions.as_json_index(),
    );
    if let Some(normals) = accessors.normals {
        attributes.insert(
            Valid(json::mesh::Semantic::Normals),
            normals.as_json_index(),
        );
    }

    let primitive = json::mesh::Primitive {
        attributes,
        extensions: Default::default(),
        extras: Default::default(),
        indices: Some(accessors.indices.as_json_index()),
        material: None,
        mode: Valid(json::mesh::Mode::Triangles),
        targets: None,
    };

    json::Mesh {
        extensions: Default::default(),
        extras: Default::default(),
        name: Some(name.to_string()),
        primitives: vec![primitive],
        weights: None,
    }
}

/// Builds the glTF root: one buffer, one mesh, one node, one scene.
pub fn build_root(
    buffer: &BufferBuilder,
    name: &str,
    accessors: &MeshAccessors,
    generator: &str,
) -> json::Root {
    let node = json::Node {
        camera: None,
        children: None,
        extensions: Default::default(),
        extras: Default::default(),
        matrix: None,
        mesh: Some(json::Index::new(0)),
        name: Some(name.to_string()),
        rotation: None,
        scale: None,
        skin: None,
        translation: None,
        weights: None,
    };

    let scene = json::Scene {
        extensions: Default::default(),
        extras: Default::default(),
        name: Some("Scene".to_string()),
        nodes: vec![json::Index::new(0)],
    };

    json::Root {
        accessors: buffer.accessors().to_vec(),
        asset: json::Asset {
            copyright: None,
            extensions: Default::default(),
            extras: Default::default(),
            generator: Some(generator.to_string()),
            min_version: None,
            version: "2.0".to_string(),
        },
        buffers: vec![json::Buffer {
            byte_length: (buffer.data().len() as u64).into(),
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            uri: None,
        }],
        buffer_views: buffer.views().to_vec(),
        meshes: vec![mesh_from_accessors(name, accessors)],
        nodes: vec![node],
        scene: Some(json::Index::new(0)),
        scenes: vec![scene],
        ..Default::default()
    }
}
