//! Numeric helpers shared by the forecaster and the aggregator

/// Round to the nearest integer, ties toward positive infinity
///
/// Differs from [`f64::round`] on negative ties: `-2.5` becomes `-2`.
/// Non-finite values pass through unchanged.
pub fn round_half_up(value: f64) -> f64 {
    let rounded = value.round();
    // `round` sends negative ties away from zero; pull them back up
    let rounded = if rounded - value == -0.5 { rounded + 1.0 } else { rounded };
    // no `-0` from small negative inputs
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Round to a fixed number of decimal places, ties away from zero
pub fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Percentage change from `previous` to `current`
///
/// No guard on a zero `previous`: the result is `inf` or `NaN`.
pub fn percent_change(previous: f64, current: f64) -> f64 {
    ((current - previous) / previous) * 100.0
}

/// Apply a percentage growth to a base value
pub fn apply_growth(base: f64, percentage: f64) -> f64 {
    base * (1.0 + percentage / 100.0)
}

/// Serde adapter that writes non-finite floats as strings
///
/// JSON has no literal for `inf` or `NaN` and `serde_json` would emit `null`.
/// Finite values stay plain numbers; `inf`, `-inf` and `NaN` become strings and
/// are parsed back on deserialization. Use with `#[serde(with = "float_repr")]`,
/// or `float_repr::vec` for a `Vec<f64>`.
pub mod float_repr {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    impl Repr {
        fn into_f64<E: serde::de::Error>(self) -> Result<f64, E> {
            match self {
                Repr::Number(value) => Ok(value),
                Repr::Text(text) => text
                    .parse()
                    .map_err(|_| E::custom(format!("invalid number '{}'", text))),
            }
        }
    }

    struct Float(f64);

    impl Serialize for Float {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serialize(&self.0, serializer)
        }
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_str(&value.to_string())
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Repr::deserialize(deserializer)?.into_f64()
    }

    pub mod vec {
        use super::{Float, Repr};
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(values.iter().map(|value| Float(*value)))
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
            Vec::<Repr>::deserialize(deserializer)?
                .into_iter()
                .map(Repr::into_f64)
                .collect()
        }
    }
}
