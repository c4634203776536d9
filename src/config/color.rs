use core::fmt::{Formatter as FmtFormatter, Result as FmtResult};
use palette::Srgb;
use serde::{Deserialize, Serialize};

/// A chart color that can be deserialized from:
/// - Hex strings: "#3B82F6", "#38F", "3B82F6"
/// - Named colors: "steelblue", "seagreen", ... (SVG/CSS3 color names)
/// - RGB tables: { red = 59, green = 130, blue = 246 }
///
/// Serializes as a `#RRGGBB` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub Srgb<u8>);

impl Color {
    #[must_use]
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self(Srgb::new(red, green, blue))
    }

    /// The `(red, green, blue)` components.
    #[must_use]
    pub const fn components(self) -> (u8, u8, u8) {
        (self.0.red, self.0.green, self.0.blue)
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.components();
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        struct ColorVisitor;

        impl<'de> serde::de::Visitor<'de> for ColorVisitor {
            type Value = Color;

            fn expecting(&self, formatter: &mut FmtFormatter) -> FmtResult {
                formatter.write_str("a hex color string like \"#3B82F6\", a named color like \"steelblue\", or an RGB table")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                if let Ok(color) = v.parse::<Srgb<u8>>() {
                    return Ok(Color(color));
                }

                palette::named::from_str(v)
                    .map(|named_color| Color(Srgb::from_format(named_color)))
                    .ok_or_else(|| {
                        E::custom(format!(
                            "invalid color: '{v}' (must be a hex color like '#3B82F6' or a named color like 'steelblue')"
                        ))
                    })
            }

            fn visit_map<M>(self, map: M) -> Result<Self::Value, M::Error>
            where
                M: serde::de::MapAccess<'de>,
            {
                Srgb::<u8>::deserialize(serde::de::value::MapAccessDeserializer::new(map)).map(Color)
            }
        }

        deserializer.deserialize_any(ColorVisitor)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}
