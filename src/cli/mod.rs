pub mod output;
pub mod run;
pub mod sample;
pub mod validate;

pub use run::{cmd_run, RunArgs};
pub use sample::{cmd_sample, SampleArgs};
pub use validate::{cmd_validate, ValidateArgs};

use boxbench_harness::Bounds;

/// Parse a `LOW:HIGH` dimension range (e.g. `600:900`).
pub fn parse_bounds(raw: &str) -> Result<Bounds, String> {
    let (low, high) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected LOW:HIGH, got '{raw}'"))?;
    let low: u32 = low.trim().parse().map_err(|e| format!("bad low bound: {e}"))?;
    let high: u32 = high
        .trim()
        .parse()
        .map_err(|e| format!("bad high bound: {e}"))?;
    Bounds::new(low, high).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_bounds() {
        let bounds = parse_bounds("600:900").unwrap();
        assert_eq!(bounds.low, 600);
        assert_eq!(bounds.high, 900);
    }

    #[test]
    fn rejects_missing_separator_and_inverted_ranges() {
        assert!(parse_bounds("600").is_err());
        assert!(parse_bounds("900:600").is_err());
    }
}
