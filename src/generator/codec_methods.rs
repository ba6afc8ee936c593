//! String-form convenience methods for IdWorker

use crate::codec::{BASE62, BASE82};
use crate::error::IdWorkerError;
use crate::extractor::{decode, DecodedId};

use super::time::Clock;
use super::IdWorker;

impl<C: Clock> IdWorker<C> {
    /// Generate a new id in base62 form
    pub fn next_id_base62(&self) -> Result<String, IdWorkerError> {
        Ok(BASE62.encode(self.next_id()?)?)
    }

    /// Generate a new id in base62 form together with its raw value
    pub fn next_id_base62_with_raw(&self) -> Result<(String, i64), IdWorkerError> {
        let id = self.next_id()?;
        Ok((BASE62.encode(id)?, id))
    }

    /// Generate a new id in base82 form
    pub fn next_id_base82(&self) -> Result<String, IdWorkerError> {
        Ok(BASE82.encode(self.next_id()?)?)
    }

    /// Decompose a base62 encoded id into its fields
    pub fn decode_base62(&self, encoded: &str) -> Result<DecodedId, IdWorkerError> {
        decode(BASE62.decode(encoded)?)
    }

    /// Decompose a base82 encoded id into its fields
    pub fn decode_base82(&self, encoded: &str) -> Result<DecodedId, IdWorkerError> {
        decode(BASE82.decode(encoded)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::codec::decode_base62;
    use crate::IdWorker;

    #[test]
    fn test_base62_generate() {
        let worker = IdWorker::with_custom_node(1).unwrap();
        let id = worker.next_id_base62().unwrap();
        assert!(!id.is_empty());

        let decoded = worker.decode_base62(&id).unwrap();
        assert_eq!(decoded.node_id(), 1);
        assert!(decoded.is_custom());
        assert!(decoded.ticks() > 0);
    }

    #[test]
    fn test_base62_with_raw() {
        let worker = IdWorker::with_custom_node(1).unwrap();
        let (id, raw) = worker.next_id_base62_with_raw().unwrap();
        assert_eq!(decode_base62(&id).unwrap(), raw);
    }

    #[test]
    fn test_base82_decompose() {
        let worker = IdWorker::with_custom_node(9).unwrap();
        let id = worker.next_id_base82().unwrap();
        let decoded = worker.decode_base82(&id).unwrap();
        assert_eq!(decoded.node_id(), 9);
    }

    #[test]
    fn test_decode_rejects_small_values() {
        let worker = IdWorker::with_custom_node(1).unwrap();
        // "1" decodes to 1, far below the smallest id
        assert!(matches!(
            worker.decode_base62("1"),
            Err(crate::IdWorkerError::IdTooSmall { id: 1, .. })
        ));
        assert!(matches!(
            worker.decode_base62("a!"),
            Err(crate::IdWorkerError::Codec(_))
        ));
    }
}
