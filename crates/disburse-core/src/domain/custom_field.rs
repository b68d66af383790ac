use std::collections::BTreeMap;

use serde::Deserialize;

/// One custom-field value attached to a card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CustomFieldItem {
    pub id: String,
    /// Typed value keyed by field kind, e.g. `{"number": "50"}`.
    #[serde(default)]
    pub value: BTreeMap<String, String>,
    #[serde(rename = "idCustomField")]
    pub custom_field_id: String,
}

impl CustomFieldItem {
    /// Raw text of a number field, empty when the item holds another kind.
    pub fn number(&self) -> &str {
        self.value.get("number").map_or("", String::as_str)
    }
}
