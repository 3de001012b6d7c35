use serde::{Deserialize, Serialize};

/// Who pays the transaction fees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tariff {
    #[default]
    #[serde(rename = "BUSINESS-PAYS")]
    BusinessPays,
    #[serde(rename = "CUSTOMER-PAYS")]
    CustomerPays,
    /// Value not known to this client version (including an empty string); never sent.
    #[serde(other, skip_serializing)]
    Unknown,
}

impl Tariff {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tariff::BusinessPays => "BUSINESS-PAYS",
            Tariff::CustomerPays => "CUSTOMER-PAYS",
            Tariff::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for Tariff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
