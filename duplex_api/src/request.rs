use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::comparison::ComparisonStats;
use super::line::LineCategory;

/// Inbound comparison request.
///
/// Both documents default to the empty string when absent or when the
/// transport carries something other than a string in their place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    /// Document A (left side).
    #[serde(default, deserialize_with = "lenient_text")]
    pub text_a: String,
    /// Document B (right side).
    #[serde(default, deserialize_with = "lenient_text")]
    pub text_b: String,
}

impl CompareRequest {
    /// Construct a request from two documents.
    pub fn new(text_a: impl Into<String>, text_b: impl Into<String>) -> Self {
        Self {
            text_a: text_a.into(),
            text_b: text_b.into(),
        }
    }
}

/// One escaped, line-numbered content block of a rendered side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineBlock {
    /// 1-based line number on the block's side.
    pub line_number: u32,
    /// Category tag of the line.
    pub category: LineCategory,
    /// Whether the block is a placeholder rather than document content.
    #[serde(default)]
    pub placeholder: bool,
    /// Markup-escaped line content.
    pub html: String,
}

/// Outbound comparison response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareResponse {
    /// Identifier of the diff engine that produced the edit script.
    pub engine: String,
    /// Rendered markup for side A.
    pub html_a: String,
    /// Rendered markup for side B.
    pub html_b: String,
    /// Escaped line blocks for side A.
    #[serde(default)]
    pub blocks_a: Vec<LineBlock>,
    /// Escaped line blocks for side B.
    #[serde(default)]
    pub blocks_b: Vec<LineBlock>,
    /// Headline statistics.
    pub stats: ComparisonStats,
    /// Ordered change log.
    #[serde(default)]
    pub change_summary: Vec<String>,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientText)
}

/// Accepts any self-describing value, keeping only strings.
struct LenientText;

impl<'de> Visitor<'de> for LenientText {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("document text")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
        Ok(value.to_owned())
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
        Ok(value)
    }

    fn visit_bool<E: de::Error>(self, _value: bool) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_i64<E: de::Error>(self, _value: i64) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_u64<E: de::Error>(self, _value: u64) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_f64<E: de::Error>(self, _value: f64) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_unit<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(Self)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<String, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(String::new())
    }

    fn visit_map<A>(self, mut map: A) -> Result<String, A::Error>
    where
        A: MapAccess<'de>,
    {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(String::new())
    }
}
