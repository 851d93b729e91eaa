/// Value-axis bounds for a set of y values.
///
/// Spans `[min, max]` of the values. No values gives `[0, 1]`; a flat series
/// is widened by one unit each way so the axis never has zero height.
pub fn value_bounds<I>(values: I) -> [f64; 2]
where
    I: IntoIterator<Item = f64>,
{
    let mut bounds: Option<(f64, f64)> = None;
    for v in values {
        bounds = Some(match bounds {
            None => (v, v),
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
        });
    }

    let (mut lo, mut hi) = bounds.unwrap_or((0.0, 1.0));
    if lo == hi {
        lo -= 1.0;
        hi += 1.0;
    }
    [lo, hi]
}
