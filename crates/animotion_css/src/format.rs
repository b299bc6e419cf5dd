//! Number formatting shared by every serializer

/// Format a number the way CSS authors write it.
///
/// Integral values have no fractional part (`1`, `100`), other values use the
/// shortest representation that round-trips (`1.2`, `0.7`). Negative zero is
/// printed as `0`. Magnitudes of at least 1e21 or below 1e-6 switch to
/// exponent form with a signed exponent (`1e+21`, `1.5e-7`).
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let exp = format!("{:e}", value);
        return match exp.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => exp,
        };
    }
    format!("{}", value)
}
