use serde_json::{Number, Value};

/// Compare two parameter values.
///
/// Numbers compare by numeric value, so `10` equals `10.0`. Everything else
/// is structural.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(xm), Value::Object(ym)) => {
            xm.len() == ym.len()
                && xm
                    .iter()
                    .all(|(key, x)| ym.get(key).is_some_and(|y| values_equal(x, y)))
        }
        _ => a == b,
    }
}

fn numbers_equal(x: &Number, y: &Number) -> bool {
    match (integer_value(x), integer_value(y)) {
        (Some(a), Some(b)) => a == b,
        (Some(a), None) => float_equals_integer(y.as_f64(), a),
        (None, Some(b)) => float_equals_integer(x.as_f64(), b),
        (None, None) => x.as_f64() == y.as_f64(),
    }
}

fn integer_value(n: &Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

/// Exact comparison: integers beyond 2^53 are not rounded to the float.
fn float_equals_integer(float: Option<f64>, integer: i128) -> bool {
    match float {
        // Every finite f64 of magnitude below 2^127 with no fraction is an
        // exact i128.
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1.7e38 => f as i128 == integer,
        _ => false,
    }
}
