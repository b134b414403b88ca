//! In-memory sample log and its JSON wire format

use crate::core::SavedSample;

/// Ordered, append-only sequence of accepted samples.
///
/// Wire format: a UTF-8 JSON array of objects keyed `latitude` (number),
/// `longitude` (number), and `date` (integer milliseconds since epoch), in
/// acceptance order. Any log written by the sampler parses back with no
/// information loss beyond f64 representation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleLog {
    samples: Vec<SavedSample>,
}

impl SampleLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a serialized log
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let samples = serde_json::from_slice(bytes)?;
        Ok(Self { samples })
    }

    /// Serialize the full log
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.samples)
    }

    /// Append a sample. Samples are never mutated or removed afterwards.
    pub fn push(&mut self, sample: SavedSample) {
        self.samples.push(sample);
    }

    /// Most recently accepted sample
    pub fn last(&self) -> Option<&SavedSample> {
        self.samples.last()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// All samples in acceptance order
    pub fn samples(&self) -> &[SavedSample] {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(latitude: f64, longitude: f64, recorded_at_ms: u64) -> SavedSample {
        SavedSample {
            latitude,
            longitude,
            recorded_at_ms,
        }
    }

    #[test]
    fn test_empty_log_serializes_to_empty_array() {
        let log = SampleLog::new();
        assert_eq!(log.to_bytes().unwrap(), b"[]");
    }

    #[test]
    fn test_wire_format_keys() {
        let mut log = SampleLog::new();
        log.push(sample(4.6, -74.08, 1_700_000_000_000));

        let value: serde_json::Value = serde_json::from_slice(&log.to_bytes().unwrap()).unwrap();
        assert_eq!(value[0]["latitude"], 4.6);
        assert_eq!(value[0]["longitude"], -74.08);
        assert_eq!(value[0]["date"], 1_700_000_000_000u64);
    }

    #[test]
    fn test_round_trip_preserves_order_and_values() {
        let mut log = SampleLog::new();
        log.push(sample(4.6000, -74.0800, 1));
        log.push(sample(4.6050, -74.0810, 2));
        log.push(sample(4.6100, -74.0820, 3));

        let parsed = SampleLog::from_bytes(&log.to_bytes().unwrap()).unwrap();
        assert_eq!(parsed, log);
        assert_eq!(parsed.last().unwrap().latitude, 4.6100);
    }

    #[test]
    fn test_parses_log_written_by_earlier_versions() {
        let bytes =
            br#"[{"latitude":4.60971,"longitude":-74.08175,"date":1714089600000}]"#;
        let log = SampleLog::from_bytes(bytes).unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log.last().unwrap().recorded_at_ms, 1_714_089_600_000);
    }

    #[test]
    fn test_rejects_malformed_bytes() {
        assert!(SampleLog::from_bytes(b"not json").is_err());
        assert!(SampleLog::from_bytes(b"{\"latitude\":1.0}").is_err());
    }
}
