//! Person names as the system of record stores them.

use serde::{Deserialize, Serialize};

/// A three-part person name (family name, given name, patronymic).
///
/// All parts are free-form; the remote service performs no validation and
/// neither do we.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HumanName {
    pub first_name: String,
    pub patronymic: String,
    pub family_name: String,
}

impl HumanName {
    /// Create a name from its three parts.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        patronymic: impl Into<String>,
        family_name: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            patronymic: patronymic.into(),
            family_name: family_name.into(),
        }
    }
}

/// Family name first, matching the back-office list rendering.
impl std::fmt::Display for HumanName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.family_name, self.first_name, self.patronymic
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_family_name_first() {
        let name = HumanName::new("Ivan", "Petrovich", "Sidorov");
        assert_eq!(name.to_string(), "Sidorov Ivan Petrovich");
    }

    #[test]
    fn test_wire_field_names() {
        let name = HumanName::new("A", "B", "C");
        let json = serde_json::to_value(&name).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "firstName": "A",
                "patronymic": "B",
                "familyName": "C",
            })
        );
    }
}
