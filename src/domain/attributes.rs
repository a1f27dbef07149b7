use super::plant_record::{PlantRecord, Toxicity};
use rand::seq::SliceRandom;

/// Appended (two of them, picked at random) when no botanical rule matches.
pub const GENERAL_ATTRIBUTES: [&str; 6] = [
    "Beautiful",
    "Natural",
    "Garden-worthy",
    "Unique",
    "Lovely",
    "Charming",
];

/// Padding applied in order until the attribute list reaches three entries.
pub const FILLER_ATTRIBUTES: [&str; 5] =
    ["Ornamental", "Decorative", "Popular", "Classic", "Elegant"];

/// Vocabulary of [`random_attributes`], used when no plant detail is available.
pub const FALLBACK_ATTRIBUTES: [&str; 6] = [
    "Colorful",
    "Fragrant",
    "Rare",
    "Medicinal",
    "Thorny",
    "Tropical",
];

const MAX_ATTRIBUTES: usize = 3;

/// Derives up to three descriptive attributes from a plant record.
///
/// The rule pass is cumulative: every matching rule appends its tag, in rule
/// order. Absent fields never match. If nothing matched, two distinct
/// [`GENERAL_ATTRIBUTES`] are drawn at random; a list still shorter than
/// three is then padded from [`FILLER_ATTRIBUTES`] in fixed order, and the
/// result is truncated to three.
pub fn derive_attributes(plant: &PlantRecord) -> Vec<&'static str> {
    let mut attributes = Vec::new();

    match plant.specifications.as_ref().and_then(|s| s.toxicity) {
        Some(Toxicity::None) => attributes.push("Safe"),
        Some(Toxicity::Low | Toxicity::Moderate | Toxicity::High) => attributes.push("Toxic"),
        Some(Toxicity::Unknown) | None => {}
    }

    let growth = plant.growth.as_ref();
    if let Some(light) = growth.and_then(|g| g.light) {
        // The two thresholds are not range-disjoint; both tags may fire.
        if light >= 8.0 {
            attributes.push("Sun-loving");
        }
        if light <= 4.0 {
            attributes.push("Shade-tolerant");
        }
    }
    if let Some(humidity) = growth.and_then(|g| g.atmospheric_humidity) {
        if humidity >= 7.0 {
            attributes.push("Tropical");
        }
    }
    if let Some(deg_c) = growth
        .and_then(|g| g.minimum_temperature.as_ref())
        .and_then(|t| t.deg_c)
    {
        if deg_c <= -20.0 {
            attributes.push("Hardy");
        }
    }

    if plant
        .flower
        .as_ref()
        .and_then(|f| f.color.as_ref())
        .is_some_and(|colors| !colors.is_empty())
    {
        attributes.push("Colorful");
    }

    if let Some(duration) = plant.duration.as_deref() {
        if duration.contains("perennial") {
            attributes.push("Perennial");
        }
        if duration.contains("annual") {
            attributes.push("Annual");
        }
    }

    if plant
        .edible_part
        .as_ref()
        .is_some_and(|parts| !parts.is_empty())
    {
        attributes.push("Edible");
    }

    if attributes.is_empty() {
        let mut rng = rand::thread_rng();
        attributes.extend(GENERAL_ATTRIBUTES.choose_multiple(&mut rng, 2).copied());
    }
    if attributes.len() < MAX_ATTRIBUTES {
        let needed = MAX_ATTRIBUTES - attributes.len();
        attributes.extend(FILLER_ATTRIBUTES.iter().take(needed).copied());
    }
    attributes.truncate(MAX_ATTRIBUTES);
    attributes
}

/// Three distinct attributes drawn at random from [`FALLBACK_ATTRIBUTES`],
/// independent of any plant data. Used when the detail fetch for a chosen
/// plant fails and only the summary record is available.
pub fn random_attributes() -> Vec<&'static str> {
    let mut rng = rand::thread_rng();
    FALLBACK_ATTRIBUTES
        .choose_multiple(&mut rng, MAX_ATTRIBUTES)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        FALLBACK_ATTRIBUTES, FILLER_ATTRIBUTES, GENERAL_ATTRIBUTES, derive_attributes,
        random_attributes,
    };
    use crate::domain::PlantRecord;
    use serde_json::json;

    fn record(value: serde_json::Value) -> PlantRecord {
        serde_json::from_value(value).expect("test plant record")
    }

    #[test]
    fn fully_matching_record_is_truncated_to_first_three_tags() {
        let plant = record(json!({
            "specifications": { "toxicity": "none" },
            "growth": {
                "light": 9,
                "atmospheric_humidity": 8,
                "minimum_temperature": { "deg_c": -25 }
            },
            "flower": { "color": ["red"] },
            "duration": "perennial",
            "edible_part": ["root"]
        }));

        assert_eq!(
            derive_attributes(&plant),
            vec!["Safe", "Sun-loving", "Tropical"]
        );
    }

    #[test]
    fn empty_record_gets_two_distinct_general_attributes() {
        let attributes = derive_attributes(&PlantRecord::default());

        assert_eq!(attributes.len(), 2);
        assert_ne!(attributes[0], attributes[1]);
        for attribute in &attributes {
            assert!(GENERAL_ATTRIBUTES.contains(attribute));
        }
    }

    #[test]
    fn single_match_is_padded_with_filler_in_fixed_order() {
        let plant = record(json!({
            "specifications": { "toxicity": "low" }
        }));

        assert_eq!(
            derive_attributes(&plant),
            vec!["Toxic", "Ornamental", "Decorative"]
        );
    }

    #[test]
    fn two_matches_get_a_single_filler_tag() {
        let plant = record(json!({
            "duration": "annual",
            "edible_part": ["leaves"]
        }));

        assert_eq!(derive_attributes(&plant), vec!["Annual", "Edible", "Ornamental"]);
    }

    #[test]
    fn unknown_toxicity_does_not_match_either_toxicity_rule() {
        let plant = record(json!({
            "specifications": { "toxicity": "severe" },
            "duration": "perennial"
        }));

        assert_eq!(
            derive_attributes(&plant),
            vec!["Perennial", "Ornamental", "Decorative"]
        );
    }

    #[test]
    fn shade_tolerance_counts_a_light_level_of_zero() {
        let plant = record(json!({
            "growth": { "light": 0 }
        }));

        assert_eq!(
            derive_attributes(&plant),
            vec!["Shade-tolerant", "Ornamental", "Decorative"]
        );
    }

    #[test]
    fn output_length_is_always_between_one_and_three() {
        let records = [
            json!({}),
            json!({ "duration": "annual" }),
            json!({ "duration": "perennial, annual", "flower": { "color": ["blue", "white"] } }),
            json!({
                "specifications": { "toxicity": "high" },
                "growth": { "light": 10, "atmospheric_humidity": 9 },
                "flower": { "color": ["pink"] },
                "duration": "perennial",
                "edible_part": ["fruit"]
            }),
        ];

        for value in records {
            let attributes = derive_attributes(&record(value));
            assert!((1..=3).contains(&attributes.len()));
        }
    }

    #[test]
    fn empty_sequences_do_not_count_as_matches() {
        let plant = record(json!({
            "flower": { "color": [] },
            "edible_part": []
        }));

        let attributes = derive_attributes(&plant);
        assert!(!attributes.contains(&"Colorful"));
        assert!(!attributes.contains(&"Edible"));
    }

    #[test]
    fn random_attributes_picks_three_distinct_fallback_tags() {
        let attributes = random_attributes();

        assert_eq!(attributes.len(), 3);
        for attribute in &attributes {
            assert!(FALLBACK_ATTRIBUTES.contains(attribute));
        }
        assert!(attributes[0] != attributes[1]);
        assert!(attributes[1] != attributes[2]);
        assert!(attributes[0] != attributes[2]);
    }

    #[test]
    fn filler_never_appears_before_an_organic_tag() {
        let plant = record(json!({
            "duration": "perennial"
        }));

        let attributes = derive_attributes(&plant);
        assert_eq!(attributes[0], "Perennial");
        assert!(FILLER_ATTRIBUTES.contains(&attributes[1]));
    }
}
