//! Serde adapters for decimals carried as JSON numbers.

/// `Option<Decimal>` as an optional JSON number.
///
/// Unlike `rust_decimal::serde::float_option`, `null` is accepted even when
/// the value reaches the deserializer through a flattened or tagged
/// container, where serde has already buffered it.
pub mod float_option {
    use rust_decimal::Decimal;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(
        value: &Option<Decimal>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float_option::serialize(value, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Decimal>, D::Error> {
        Option::<f64>::deserialize(deserializer)?
            .map(|number| Decimal::from_str(&number.to_string()).map_err(D::Error::custom))
            .transpose()
    }
}
