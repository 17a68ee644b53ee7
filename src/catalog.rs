// src/catalog.rs

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// One rated attribute. Declaration order is presentation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Roughness,
    Hardness,
    Friction,
    Weight,
    Thermal,
    Sharpness,
    Valence,
    Arousal,
}

pub const PHYSICAL_DIMENSIONS: [Dimension; 6] = [
    Dimension::Roughness,
    Dimension::Hardness,
    Dimension::Friction,
    Dimension::Weight,
    Dimension::Thermal,
    Dimension::Sharpness,
];

pub const EMOTIONAL_DIMENSIONS: [Dimension; 2] = [Dimension::Valence, Dimension::Arousal];

pub const ALL_DIMENSIONS: [Dimension; 8] = [
    Dimension::Roughness,
    Dimension::Hardness,
    Dimension::Friction,
    Dimension::Weight,
    Dimension::Thermal,
    Dimension::Sharpness,
    Dimension::Valence,
    Dimension::Arousal,
];

impl Dimension {
    pub fn key(self) -> &'static str {
        match self {
            Dimension::Roughness => "roughness",
            Dimension::Hardness => "hardness",
            Dimension::Friction => "friction",
            Dimension::Weight => "weight",
            Dimension::Thermal => "thermal",
            Dimension::Sharpness => "sharpness",
            Dimension::Valence => "valence",
            Dimension::Arousal => "arousal",
        }
    }

    pub fn is_emotional(self) -> bool {
        EMOTIONAL_DIMENSIONS.contains(&self)
    }

    pub fn label_key(self) -> String {
        format!("dimensions.{}.label", self.key())
    }

    pub fn definition_key(self) -> String {
        format!("dimensions.{}.definition", self.key())
    }

    pub fn example_key(self) -> String {
        format!("dimensions.{}.example", self.key())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurveyObject {
    pub key: &'static str,
    pub name_key: &'static str,
    pub image: &'static str,
}

pub const OBJECTS: [SurveyObject; 10] = [
    SurveyObject {
        key: "obj1",
        name_key: "objects.obj1",
        image: "assets/images/1_smartphone_screen.jpg",
    },
    SurveyObject {
        key: "obj2",
        name_key: "objects.obj2",
        image: "assets/images/2_metal_key.jpg",
    },
    SurveyObject {
        key: "obj3",
        name_key: "objects.obj3",
        image: "assets/images/3_running_shoe_sole.jpg",
    },
    SurveyObject {
        key: "obj4",
        name_key: "objects.obj4",
        image: "assets/images/4_ceramic_tiles.jpg",
    },
    SurveyObject {
        key: "obj5",
        name_key: "objects.obj5",
        image: "assets/images/5_tea_mug.jpg",
    },
    SurveyObject {
        key: "obj6",
        name_key: "objects.obj6",
        image: "assets/images/6_wool_sweater.jpg",
    },
    SurveyObject {
        key: "obj7",
        name_key: "objects.obj7",
        image: "assets/images/7_tree_bark.jpg",
    },
    SurveyObject {
        key: "obj8",
        name_key: "objects.obj8",
        image: "assets/images/8_leather_jacket.jpg",
    },
    SurveyObject {
        key: "obj9",
        name_key: "objects.obj9",
        image: "assets/images/9_dumbell.jpg",
    },
    SurveyObject {
        key: "obj10",
        name_key: "objects.obj10",
        image: "assets/images/10_rubber_eraser.jpg",
    },
];

pub fn find_object(key: &str) -> Option<&'static SurveyObject> {
    OBJECTS.iter().find(|o| o.key == key)
}

/// Session-scoped presentation order. Same session id, same order.
pub fn presentation_order(session_id: &str) -> Vec<&'static SurveyObject> {
    let seed: [u8; 32] = Sha256::digest(session_id.as_bytes()).into();
    let mut rng = StdRng::from_seed(seed);

    let mut order: Vec<&'static SurveyObject> = OBJECTS.iter().collect();
    order.shuffle(&mut rng);
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn dimension_groups_partition_all_dimensions() {
        let mut joined: Vec<Dimension> = PHYSICAL_DIMENSIONS.to_vec();
        joined.extend(EMOTIONAL_DIMENSIONS);
        assert_eq!(joined, ALL_DIMENSIONS.to_vec());
        assert!(ALL_DIMENSIONS.iter().filter(|d| d.is_emotional()).count() == 2);
    }

    #[test]
    fn dimension_serializes_as_lowercase_key() {
        for d in ALL_DIMENSIONS {
            let s = serde_json::to_string(&d).unwrap();
            assert_eq!(s, format!("\"{}\"", d.key()));
        }
    }

    #[test]
    fn presentation_order_is_a_permutation() {
        let order = presentation_order("a1b2c3");
        assert_eq!(order.len(), OBJECTS.len());

        let keys: BTreeSet<&str> = order.iter().map(|o| o.key).collect();
        let expected: BTreeSet<&str> = OBJECTS.iter().map(|o| o.key).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn presentation_order_is_reproducible_per_session() {
        let a: Vec<&str> = presentation_order("session-x").iter().map(|o| o.key).collect();
        let b: Vec<&str> = presentation_order("session-x").iter().map(|o| o.key).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn presentation_order_varies_across_sessions() {
        let first: Vec<&str> = presentation_order("s-0").iter().map(|o| o.key).collect();
        let differs = (1..20).any(|i| {
            let other: Vec<&str> = presentation_order(&format!("s-{i}"))
                .iter()
                .map(|o| o.key)
                .collect();
            other != first
        });
        assert!(differs);
    }

    #[test]
    fn find_object_by_key() {
        assert_eq!(find_object("obj3").map(|o| o.name_key), Some("objects.obj3"));
        assert!(find_object("obj11").is_none());
    }
}
