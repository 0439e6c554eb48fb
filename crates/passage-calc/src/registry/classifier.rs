use super::domain::{LegislatureType, SystemType};

/// Maps free-text government fields onto the coarse system categories.
///
/// The registry only depends on this trait, so alternate strategies can be
/// plugged in without touching weight derivation or scoring.
pub trait SystemClassifier {
    fn legislature_type(&self, structure: &str) -> LegislatureType;
    fn system_type(&self, government_type: &str) -> SystemType;
}

/// Case-insensitive keyword search, first match wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringClassifier;

impl SystemClassifier for SubstringClassifier {
    fn legislature_type(&self, structure: &str) -> LegislatureType {
        classify_legislature(structure)
    }

    fn system_type(&self, government_type: &str) -> SystemType {
        classify_system(government_type)
    }
}

const LEGISLATURE_KEYWORDS: [(&str, LegislatureType); 2] = [
    ("bicameral", LegislatureType::Bicameral),
    ("unicameral", LegislatureType::Unicameral),
];

const SYSTEM_KEYWORDS: [(&str, SystemType); 3] = [
    ("parliamentary", SystemType::Parliamentary),
    ("presidential", SystemType::Presidential),
    ("monarchy", SystemType::Monarchy),
];

pub fn classify_legislature(structure: &str) -> LegislatureType {
    let text = structure.to_lowercase();
    LEGISLATURE_KEYWORDS
        .iter()
        .find(|(keyword, _)| text.contains(keyword))
        .map(|(_, kind)| *kind)
        .unwrap_or(LegislatureType::Unknown)
}

pub fn classify_system(government_type: &str) -> SystemType {
    let text = government_type.to_lowercase();
    SYSTEM_KEYWORDS
        .iter()
        .find(|(keyword, _)| text.contains(keyword))
        .map(|(_, kind)| *kind)
        .unwrap_or(SystemType::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legislature_matching_is_case_insensitive() {
        assert_eq!(
            classify_legislature("BICAMERAL Parliament"),
            LegislatureType::Bicameral
        );
        assert_eq!(
            classify_legislature("Unicameral National Assembly"),
            LegislatureType::Unicameral
        );
        assert_eq!(classify_legislature(""), LegislatureType::Unknown);
        assert_eq!(
            classify_legislature("Consultative Council"),
            LegislatureType::Unknown
        );
    }

    #[test]
    fn bicameral_checked_before_unicameral() {
        assert_eq!(
            classify_legislature("unicameral until 2014, now bicameral"),
            LegislatureType::Bicameral
        );
    }

    #[test]
    fn system_priority_prefers_parliamentary() {
        assert_eq!(
            classify_system("parliamentary constitutional monarchy"),
            SystemType::Parliamentary
        );
        assert_eq!(
            classify_system("presidential republic; monarchy abolished"),
            SystemType::Presidential
        );
        assert_eq!(classify_system("Absolute Monarchy"), SystemType::Monarchy);
        assert_eq!(
            classify_system("communist party-led state"),
            SystemType::Other
        );
        assert_eq!(classify_system(""), SystemType::Other);
    }

    #[test]
    fn semi_presidential_counts_as_presidential() {
        assert_eq!(
            classify_system("semi-presidential republic"),
            SystemType::Presidential
        );
    }
}
