use serde::{Deserialize, Serialize};

use crate::errors::HarnessError;

/// Inclusive-low, exclusive-high viewport dimension range. Invariant:
/// `low <= high`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub low: u32,
    pub high: u32,
}

impl Bounds {
    pub fn new(low: u32, high: u32) -> Result<Self, HarnessError> {
        if low > high {
            return Err(HarnessError::InvalidBounds { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn span(&self) -> u32 {
        self.high - self.low
    }
}

/// Sampling recipe for one benchmark: dimension ranges, split sizes and
/// the per-split RNG seeds. Field names follow the persisted camelCase
/// format.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchConfig {
    pub height: Bounds,
    pub width: Bounds,
    pub train_seed: u64,
    pub train_size: usize,
    pub test_seed: u64,
    pub test_size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_reject_inverted_range() {
        assert!(Bounds::new(900, 300).is_err());
        assert!(Bounds::new(300, 300).is_ok());
    }

    #[test]
    fn config_uses_persisted_field_names() {
        let config = BenchConfig {
            height: Bounds { low: 600, high: 601 },
            width: Bounds {
                low: 348,
                high: 915,
            },
            train_seed: 1,
            train_size: 10,
            test_seed: 2,
            test_size: 5,
        };
        let json = serde_json::to_value(&config).unwrap();
        assert!(json.get("trainSeed").is_some());
        assert!(json.get("testSize").is_some());
        assert_eq!(json["width"]["low"], 348);
    }
}
