use crate::host::FrameRate;

/// Collapses a rational rate into the numeric rate the document
/// carries. Integral rates come out exact; everything else rounds to
/// two decimals, so 24000/1001 resolves to 23.98.
pub fn resolve_rate(rate: FrameRate) -> f64 {
    let value = rate.to_float();
    if value.fract() == 0.0 {
        return value;
    }

    (value * 100.0).round() / 100.0
}
