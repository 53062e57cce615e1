// ── AQI classification ──
//
// Six contiguous buckets cover every integer; anything below 51 (including
// negative readings) is "good".

use strum::{Display, EnumIter, IntoStaticStr};

/// Human-readable air-quality category, ordered by severity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, IntoStaticStr,
)]
pub enum AqiCategory {
    #[strum(serialize = "👍 Bueno")]
    Good,
    #[strum(serialize = "😐 Moderado")]
    Moderate,
    #[strum(serialize = "⚠👴 No tan bueno")]
    UnhealthyForSensitive,
    #[strum(serialize = "⚠😷 Insalubre")]
    Unhealthy,
    #[strum(serialize = "☣️ Muy Insalubre")]
    VeryUnhealthy,
    #[strum(serialize = "☠️ Peligroso")]
    Hazardous,
}

impl AqiCategory {
    /// The display label used in reports.
    pub fn label(self) -> &'static str {
        self.into()
    }
}

/// Map an AQI reading to its category.
pub fn classify(index: i64) -> AqiCategory {
    match index {
        ..=50 => AqiCategory::Good,
        51..=100 => AqiCategory::Moderate,
        101..=150 => AqiCategory::UnhealthyForSensitive,
        151..=200 => AqiCategory::Unhealthy,
        201..=300 => AqiCategory::VeryUnhealthy,
        301.. => AqiCategory::Hazardous,
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn bucket_boundaries() {
        let cases = [
            (50, AqiCategory::Good),
            (51, AqiCategory::Moderate),
            (100, AqiCategory::Moderate),
            (101, AqiCategory::UnhealthyForSensitive),
            (150, AqiCategory::UnhealthyForSensitive),
            (151, AqiCategory::Unhealthy),
            (200, AqiCategory::Unhealthy),
            (201, AqiCategory::VeryUnhealthy),
            (300, AqiCategory::VeryUnhealthy),
            (301, AqiCategory::Hazardous),
        ];
        for (index, expected) in cases {
            assert_eq!(classify(index), expected, "index {index}");
        }
    }

    #[test]
    fn negative_and_extreme_readings() {
        assert_eq!(classify(-1), AqiCategory::Good);
        assert_eq!(classify(i64::MIN), AqiCategory::Good);
        assert_eq!(classify(0), AqiCategory::Good);
        assert_eq!(classify(i64::MAX), AqiCategory::Hazardous);
    }

    #[test]
    fn classification_is_monotonic_and_hits_every_bucket() {
        let mut seen = Vec::new();
        let mut prev = classify(-100);
        for index in -100..=1000 {
            let current = classify(index);
            assert!(current >= prev, "{index}: {current:?} < {prev:?}");
            if seen.last() != Some(&current) {
                seen.push(current);
            }
            prev = current;
        }
        assert_eq!(seen, AqiCategory::iter().collect::<Vec<_>>());
    }

    #[test]
    fn labels() {
        assert_eq!(AqiCategory::Good.label(), "👍 Bueno");
        assert_eq!(AqiCategory::Moderate.label(), "😐 Moderado");
        assert_eq!(AqiCategory::UnhealthyForSensitive.label(), "⚠👴 No tan bueno");
        assert_eq!(AqiCategory::Unhealthy.label(), "⚠😷 Insalubre");
        assert_eq!(AqiCategory::VeryUnhealthy.label(), "☣️ Muy Insalubre");
        assert_eq!(AqiCategory::Hazardous.to_string(), "☠️ Peligroso");
    }
}
