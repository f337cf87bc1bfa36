use crate::errors::CoreError;
use crate::models::snapshot::PortfolioSnapshot;

/// Save/load a complete snapshot as JSON bytes or files.
///
/// Used to hand a fixed dataset between processes and to keep test fixtures;
/// the format is plain `serde_json` of [`PortfolioSnapshot`].
pub struct StorageManager;

impl StorageManager {
    /// Serialize a snapshot to pretty-printed JSON bytes.
    pub fn save_to_bytes(snapshot: &PortfolioSnapshot) -> Result<Vec<u8>, CoreError> {
        serde_json::to_vec_pretty(snapshot)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize snapshot: {e}")))
    }

    /// Deserialize a snapshot from JSON bytes.
    pub fn load_from_bytes(data: &[u8]) -> Result<PortfolioSnapshot, CoreError> {
        if data.iter().all(u8::is_ascii_whitespace) {
            return Err(CoreError::InvalidFileFormat(
                "Snapshot data is empty".into(),
            ));
        }

        serde_json::from_slice(data).map_err(|e| {
            CoreError::Deserialization(format!("Failed to deserialize snapshot: {e}"))
        })
    }

    /// Save snapshot to a JSON file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(snapshot: &PortfolioSnapshot, path: &str) -> Result<(), CoreError> {
        let bytes = Self::save_to_bytes(snapshot)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Load snapshot from a JSON file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str) -> Result<PortfolioSnapshot, CoreError> {
        let bytes = std::fs::read(path)?;
        Self::load_from_bytes(&bytes)
    }
}
