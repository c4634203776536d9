use core::fmt::{Formatter as FmtFormatter, Result as FmtResult};
use serde::{Deserialize, Serialize};

/// A single named count, such as the number of publications from one country.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DistributionEntry {
    pub name: String,
    pub value: u64,
}

impl DistributionEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, value: u64) -> Self {
        Self { name: name.into(), value }
    }
}

/// Reshape `(name, count)` pairs into entries, keeping every pair and its order.
#[cfg(test)]
#[must_use]
pub fn entries_from_pairs<I, K>(pairs: I) -> Vec<DistributionEntry>
where
    I: IntoIterator<Item = (K, u64)>,
    K: Into<String>,
{
    pairs.into_iter().map(|(name, value)| DistributionEntry::new(name, value)).collect()
}

/// The backend's `{ "name": count, ... }` object, decoded straight into entries.
///
/// Keys are visited in the order they appear in the document, so the resulting list
/// mirrors the backend's ordering.
#[derive(Debug, Default)]
pub(crate) struct DistributionMap(pub Vec<DistributionEntry>);

impl<'de> Deserialize<'de> for DistributionMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct DistributionVisitor;

        impl<'de> serde::de::Visitor<'de> for DistributionVisitor {
            type Value = DistributionMap;

            fn expecting(&self, formatter: &mut FmtFormatter) -> FmtResult {
                formatter.write_str("an object mapping names to non-negative integer counts")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: serde::de::MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, value)) = map.next_entry::<String, u64>()? {
                    entries.push(DistributionEntry { name, value });
                }
                Ok(DistributionMap(entries))
            }
        }

        deserializer.deserialize_map(DistributionVisitor)
    }
}
