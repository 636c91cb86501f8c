//! GLB container assembly

use crate::error::{ExportError, ExportResult};
use gltf_json as json;

/// "glTF" magic
pub const GLB_MAGIC: &[u8; 4] = b"glTF";
pub const GLB_VERSION: u32 = 2;
/// "JSON" chunk type
pub const CHUNK_JSON: u32 = 0x4E4F_534A;
/// "BIN\0" chunk type
pub const CHUNK_BIN: u32 = 0x004E_4942;

const HEADER_LEN: usize = 12;
const CHUNK_HEADER_LEN: usize = 8;

fn padding(len: usize) -> usize {
    (4 - (len % 4)) % 4
}

/// Assembles a GLB from the glTF root and its binary buffer.
///
/// The JSON chunk is padded with spaces and the binary chunk with zeros, so
/// both chunk lengths are multiples of 4.
pub fn assemble_glb(root: &json::Root, buffer_data: &[u8]) -> ExportResult<Vec<u8>> {
    let json_string = json::serialize::to_string(root)?;
    let json_bytes = json_string.as_bytes();

    let json_padding = padding(json_bytes.len());
    let json_chunk_length = json_bytes.len() + json_padding;

    let buffer_padding = padding(buffer_data.len());
    let buffer_chunk_length = buffer_data.len() + buffer_padding;

    let total_length =
        HEADER_LEN + CHUNK_HEADER_LEN + json_chunk_length + CHUNK_HEADER_LEN + buffer_chunk_length;
    let total_u32 = u32::try_from(total_length).map_err(|_| ExportError::TooLarge(total_length))?;

    let mut glb = Vec::with_capacity(total_length);

    // Header
    glb.extend_from_slice(GLB_MAGIC);
    glb.extend_from_slice(&GLB_VERSION.to_le_bytes());
    glb.extend_from_slice(&total_u32.to_le_bytes());

    // JSON chunk
    glb.extend_from_slice(&(json_chunk_length as u32).to_le_bytes());
    glb.extend_from_slice(&CHUNK_JSON.to_le_bytes());
    glb.extend_from_slice(json_bytes);
    glb.resize(glb.len() + json_padding, b' ');

    // Binary chunk
    glb.extend_from_slice(&(buffer_chunk_length as u32).to_le_bytes());
    glb.extend_from_slice(&CHUNK_BIN.to_le_bytes());
    glb.extend_from_slice(buffer_data);
    glb.resize(glb.len() + buffer_padding, 0);

    Ok(glb)
}
