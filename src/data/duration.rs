use anyhow::{anyhow, bail, Result};

/// Suffix to seconds multiplier
const UNITS: &[(&str, i64)] = &[("d", 86_400), ("h", 3_600), ("m", 60), ("s", 1)];

/// Parse span strings like "5m", "1h", "24h", "7d", "300s" into seconds
pub fn parse_span(s: &str) -> Result<i64> {
    let s = s.trim();

    for (suffix, multiplier) in UNITS {
        if let Some(val_str) = s.strip_suffix(suffix) {
            let val: i64 = val_str.trim().parse()?;
            if val < 0 {
                bail!("Negative span: {}", s);
            }
            return val
                .checked_mul(*multiplier)
                .ok_or_else(|| anyhow!("Span too large: {}", s));
        }
    }

    bail!("Unknown span format: {}", s)
}
