/// Economic blocs recognized by the classification table.
/// The European Union aggregates two classification labels, since the
/// source data tags euro-zone members separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Bloc {
    Brics,
    Asean,
    Eu,
    Usmca,
    Mercosur,
}

impl Bloc {
    /// Classification labels that make up this bloc.
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            Bloc::Brics => &["BRICS"],
            Bloc::Asean => &["ASEAN"],
            Bloc::Eu => &["EU", "EURO_ZONE"],
            Bloc::Usmca => &["USMCA"],
            Bloc::Mercosur => &["MERCOSUR"],
        }
    }
    /// Entity label attached to aggregated rows.
    pub fn entity(&self) -> &'static str {
        match self {
            Bloc::Brics => "BRICS (Calculated)",
            Bloc::Asean => "ASEAN (Calculated)",
            Bloc::Eu => "European Union (Calculated)",
            Bloc::Usmca => "USMCA (Calculated)",
            Bloc::Mercosur => "MERCOSUR (Calculated)",
        }
    }
}

/// Matches the clap ValueEnum spelling, so CLI defaults round-trip.
impl std::fmt::Display for Bloc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Bloc::Brics => "brics",
            Bloc::Asean => "asean",
            Bloc::Eu => "eu",
            Bloc::Usmca => "usmca",
            Bloc::Mercosur => "mercosur",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_eu_two_labels() {
        assert!(Bloc::Eu.labels() == ["EU", "EURO_ZONE"]);
        assert!(Bloc::Brics.labels() == ["BRICS"]);
    }

    #[test]
    fn is_entity_suffixed() {
        assert!(Bloc::Usmca.entity() == "USMCA (Calculated)");
        assert!(Bloc::Eu.entity() == "European Union (Calculated)");
    }

    #[test]
    fn is_display_cli_spelling() {
        assert!(Bloc::Mercosur.to_string() == "mercosur");
        assert!(Bloc::Eu.to_string() == "eu");
    }
}
