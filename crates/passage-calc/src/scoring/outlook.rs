use serde::{Deserialize, Serialize};

/// Qualitative reading of a passage probability, ordered least to most likely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassageOutlook {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

/// Gauge segment a presentation layer can paint for an outlook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GaugeBand {
    pub from_pct: u8,
    pub to_pct: u8,
    pub color: &'static str,
}

impl PassageOutlook {
    pub fn from_probability(probability: f64) -> Self {
        // NaN fails every comparison and lands in the lowest bucket.
        let probability = probability.clamp(0.0, 1.0);
        if probability >= 0.8 {
            Self::VeryHigh
        } else if probability >= 0.6 {
            Self::High
        } else if probability >= 0.4 {
            Self::Moderate
        } else if probability >= 0.2 {
            Self::Low
        } else {
            Self::VeryLow
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryHigh => "Very High Probability of Passage",
            Self::High => "High Probability of Passage",
            Self::Moderate => "Moderate Probability of Passage",
            Self::Low => "Low Probability of Passage",
            Self::VeryLow => "Very Low Probability of Passage",
        }
    }

    pub const fn band(self) -> GaugeBand {
        let (from_pct, to_pct, color) = match self {
            Self::VeryLow => (0, 20, "red"),
            Self::Low => (20, 40, "orange"),
            Self::Moderate => (40, 60, "yellow"),
            Self::High => (60, 80, "lightgreen"),
            Self::VeryHigh => (80, 100, "green"),
        };
        GaugeBand {
            from_pct,
            to_pct,
            color,
        }
    }

    pub fn ordered() -> [Self; 5] {
        [
            Self::VeryLow,
            Self::Low,
            Self::Moderate,
            Self::High,
            Self::VeryHigh,
        ]
    }
}

pub fn interpret(probability: f64) -> PassageOutlook {
    PassageOutlook::from_probability(probability)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_bounds_are_inclusive() {
        assert_eq!(interpret(0.8), PassageOutlook::VeryHigh);
        assert_eq!(interpret(0.79999), PassageOutlook::High);
        assert_eq!(interpret(0.6), PassageOutlook::High);
        assert_eq!(interpret(0.4), PassageOutlook::Moderate);
        assert_eq!(interpret(0.2), PassageOutlook::Low);
        assert_eq!(interpret(0.19999), PassageOutlook::VeryLow);
        assert_eq!(interpret(0.0), PassageOutlook::VeryLow);
        assert_eq!(interpret(1.0), PassageOutlook::VeryHigh);
    }

    #[test]
    fn labels_match_operator_wording() {
        assert_eq!(interpret(0.85).label(), "Very High Probability of Passage");
        assert_eq!(interpret(0.65).label(), "High Probability of Passage");
        assert_eq!(interpret(0.1).label(), "Very Low Probability of Passage");
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(interpret(1.7), PassageOutlook::VeryHigh);
        assert_eq!(interpret(-0.3), PassageOutlook::VeryLow);
        assert_eq!(interpret(f64::NAN), PassageOutlook::VeryLow);
        assert_eq!(interpret(f64::INFINITY), PassageOutlook::VeryHigh);
    }

    #[test]
    fn severity_is_monotonic() {
        let mut previous = interpret(0.0);
        for step in 0..=1000 {
            let current = interpret(f64::from(step) / 1000.0);
            assert!(current >= previous, "outlook regressed at step {step}");
            previous = current;
        }
    }

    #[test]
    fn bands_tile_the_gauge() {
        let bands: Vec<GaugeBand> = PassageOutlook::ordered()
            .into_iter()
            .map(PassageOutlook::band)
            .collect();
        assert_eq!(bands.first().map(|band| band.from_pct), Some(0));
        assert_eq!(bands.last().map(|band| band.to_pct), Some(100));
        assert!(bands.windows(2).all(|pair| pair[0].to_pct == pair[1].from_pct));
    }
}
