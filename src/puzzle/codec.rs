use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CodecError, Result};
use crate::grid::GridConfig;
use crate::voxel::{Color, Voxel, VoxelSet};

/// URL-safe alphabet; emits no padding, accepts input with or without it.
const ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// One voxel on the wire. `c` is left out for uncolored voxels.
#[derive(Debug, Serialize, Deserialize)]
struct PuzzleRecord {
    x: i32,
    y: i32,
    z: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    c: Option<Color>,
}

/// Converts voxel sets to and from the text carried in a share link.
///
/// The payload is a JSON array of `{x, y, z, c?}` records in set order,
/// base64url encoded.
pub struct PuzzleCodec {
    config: GridConfig,
}

impl PuzzleCodec {
    /// Creates a codec that validates decoded voxels against `config`.
    #[must_use]
    pub fn new(config: GridConfig) -> Self {
        Self { config }
    }

    /// Encodes a voxel set.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::Json` if the records fail to serialize.
    pub fn encode(&self, voxels: &VoxelSet) -> Result<String> {
        let records: Vec<PuzzleRecord> = voxels
            .iter()
            .map(|v| PuzzleRecord {
                x: v.x,
                y: v.y,
                z: v.z,
                c: v.color.clone(),
            })
            .collect();
        let json = serde_json::to_vec(&records).map_err(CodecError::from)?;
        Ok(ENGINE.encode(json))
    }

    /// Decodes a voxel set. Surrounding whitespace is ignored.
    ///
    /// A successfully decoded empty array is an empty set, which is distinct
    /// from a failure.
    ///
    /// # Errors
    ///
    /// Returns a `CodecError` if the text is not base64url, the payload is not
    /// a JSON array of voxel records, or a voxel lies outside the grid. No
    /// partial result is produced.
    pub fn decode(&self, text: &str) -> Result<VoxelSet> {
        self.decode_records(text.trim()).map_err(|err| {
            debug!(%err, "puzzle decode failed");
            err.into()
        })
    }

    fn decode_records(&self, text: &str) -> std::result::Result<VoxelSet, CodecError> {
        let bytes = ENGINE.decode(text)?;
        let payload: serde_json::Value = serde_json::from_slice(&bytes)?;
        if !payload.is_array() {
            return Err(CodecError::NotAnArray);
        }
        let records: Vec<PuzzleRecord> = serde_json::from_value(payload)?;

        let mut voxels = VoxelSet::new();
        for PuzzleRecord { x, y, z, c } in records {
            let voxel = Voxel::new(x, y, z).with_color(c);
            if !self.config.contains(&voxel.coord()) {
                return Err(CodecError::OutOfBounds { x, y, z });
            }
            voxels.insert(voxel);
        }
        debug!(count = voxels.len(), "puzzle decoded");
        Ok(voxels)
    }
}
