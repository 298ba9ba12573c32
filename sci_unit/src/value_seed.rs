/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt;
use std::marker::PhantomData;

use rust_decimal::Decimal;
use serde::de::{DeserializeSeed, Deserializer, Error, MapAccess, Visitor};

use super::{Dimension, Magnitude, ScientificValue, Unit};

/// Deserializes a value whose unit must measure the given dimension.
/// Accepts both the `{"magnitude": .., "unit": ..}` object form and
/// a string such as `"10 m/s"`.
pub struct ValueSeed<M = Decimal> {
    dimension: Dimension,
    magnitude: PhantomData<M>,
}

impl<M> ValueSeed<M> {
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            magnitude: PhantomData,
        }
    }

    fn checked<E: Error>(
        &self,
        value: ScientificValue<M>,
    ) -> Result<ScientificValue<M>, E>
    where
        M: Magnitude,
    {
        self.dimension.check(value.unit()).map_err(E::custom)?;
        Ok(value)
    }
}

impl<'de, M: Magnitude> DeserializeSeed<'de> for ValueSeed<M> {
    type Value = ScientificValue<M>;
    fn deserialize<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }
}

impl<'de, M: Magnitude> Visitor<'de> for ValueSeed<M> {
    type Value = ScientificValue<M>;
    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a value of dimension {}", self.dimension)
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        let value = ScientificValue::parse(v).map_err(E::custom)?;
        self.checked(value)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut magnitude: Option<M> = None;
        let mut unit: Option<Unit> = None;
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "magnitude" => magnitude = Some(map.next_value()?),
                "unit" => unit = Some(map.next_value()?),
                _ => {
                    map.next_value::<serde::de::IgnoredAny>()?;
                }
            }
        }
        let value = ScientificValue::new(
            magnitude.ok_or_else(|| A::Error::missing_field("magnitude"))?,
            unit.ok_or_else(|| A::Error::missing_field("unit"))?,
        );
        self.checked(value)
    }
}
