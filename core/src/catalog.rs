use serde::{Deserialize, Serialize};

/// One tracked sail configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SailEntry {
    pub id: String,
    pub name: String,
    pub category: String,
}

/// Ordered set of sails whose usage and foil efficiency are tracked.
///
/// The catalog is passed explicitly into the aggregation step, so
/// tests can swap in alternate sets without touching shared state.
/// Matching against decoded sail names is exact string equality on
/// the display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SailCatalog {
    entries: Vec<SailEntry>,
}

impl SailCatalog {
    pub fn new(entries: Vec<SailEntry>) -> Self {
        Self { entries }
    }

    /// The five paid sails tracked for equipment-choice guidance.
    pub fn paid_sails() -> Self {
        let entry = |id: &str, name: &str, category: &str| SailEntry {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
        };
        Self::new(vec![
            entry("lourd", "Spi lourd", "Voiles Lourdes"),
            entry("trinquette", "Trinquette", "Voiles Lourdes"),
            entry("leger", "Spi leger", "Voiles Légères"),
            entry("genois", "Genois leger", "Voiles Légères"),
            entry("code0", "Code 0", "Code 0"),
        ])
    }

    pub fn entries(&self) -> &[SailEntry] {
        &self.entries
    }
}

impl Default for SailCatalog {
    fn default() -> Self {
        Self::paid_sails()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paid_sails_keeps_catalog_order() {
        let catalog = SailCatalog::paid_sails();
        let names: Vec<&str> = catalog.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Spi lourd", "Trinquette", "Spi leger", "Genois leger", "Code 0"]
        );
    }

    #[test]
    fn custom_catalog_preserves_entries() {
        let catalog = SailCatalog::new(vec![SailEntry {
            id: "main".into(),
            name: "Grand-voile".into(),
            category: "Standard".into(),
        }]);
        assert_eq!(catalog.entries().len(), 1);
        assert_eq!(catalog.entries()[0].name, "Grand-voile");
    }
}
