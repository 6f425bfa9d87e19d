//! The built-in 16-type reference table.

use crate::dictionary::{DimensionCriteria, ReferenceEntry};
use crate::dimension::DimensionMap;
use crate::types::PersonalityType;

fn criteria(expected_score: f64, indicators: &[&str], weight: f64) -> DimensionCriteria {
    DimensionCriteria {
        expected_score,
        indicators: indicators.iter().map(|s| s.to_string()).collect(),
        weight,
    }
}

/// Criteria are given in axis order: E/I, S/N, T/F, J/P.
fn entry(
    description: &str,
    communication_style: &str,
    criteria: [DimensionCriteria; 4],
) -> ReferenceEntry {
    ReferenceEntry {
        description: description.to_string(),
        communication_style: communication_style.to_string(),
        analysis_criteria: DimensionMap::from_array(criteria),
    }
}

/// Entries in canonical order.
pub(crate) fn entries() -> Vec<(PersonalityType, ReferenceEntry)> {
    vec![
        (
            PersonalityType::Istj,
            entry(
                "Practical and responsible, prefers structure and planning",
                "Clear and precise, prefers facts over speculation",
                [
                    criteria(
                        -0.9,
                        &[
                            "solitary activities",
                            "independent work",
                            "quiet reflection",
                        ],
                        0.95,
                    ),
                    criteria(
                        0.8,
                        &[
                            "real-world applications",
                            "practical methods",
                            "tangible results",
                        ],
                        0.85,
                    ),
                    criteria(
                        0.7,
                        &[
                            "logical approach",
                            "procedural analysis",
                            "data-driven",
                        ],
                        0.85,
                    ),
                    criteria(0.8, &["strict planning", "routines", "organizational methods"], 0.85),
                ],
            ),
        ),
        (
            PersonalityType::Isfj,
            entry(
                "Caring and dependable protector",
                "Warm and supportive responses",
                [
                    criteria(-0.7, &["quiet support", "behind-the-scenes", "modest"], 0.85),
                    criteria(0.8, &["practical help", "present focus", "concrete details"], 0.9),
                    criteria(-0.9, &["emotional support", "harmony", "empathy"], 0.95),
                    criteria(0.8, &["responsibility", "duty", "organization"], 0.85),
                ],
            ),
        ),
        (
            PersonalityType::Infj,
            entry(
                "Creative and insightful visionary",
                "Thoughtful and empathetic responses",
                [
                    criteria(-0.6, &["deep reflection", "introspection", "quiet leadership"], 0.8),
                    criteria(-0.9, &["future vision", "abstract thinking", "possibilities"], 0.95),
                    criteria(-0.85, &["empathy", "values", "human connection"], 0.9),
                    criteria(
                        0.7,
                        &[
                            "structured vision",
                            "organized planning",
                            "goal-oriented",
                        ],
                        0.8,
                    ),
                ],
            ),
        ),
        (
            PersonalityType::Intj,
            entry(
                "Strategic and visionary thinker, prefers long-term planning",
                "Precise, goal-driven, and analytical",
                [
                    criteria(-1.0, &["deep focus", "independent work", "strategic vision"], 1.0),
                    criteria(
                        -1.0,
                        &[
                            "long-term planning",
                            "future possibilities",
                            "big-picture thinking",
                        ],
                        1.0,
                    ),
                    criteria(
                        1.0,
                        &[
                            "logical reasoning",
                            "objective analysis",
                            "systematic approach",
                        ],
                        1.0,
                    ),
                    criteria(0.9, &["structured execution", "planning", "task efficiency"], 0.9),
                ],
            ),
        ),
        (
            PersonalityType::Istp,
            entry(
                "Practical and flexible problem-solver",
                "Direct and action-oriented responses",
                [
                    criteria(
                        -0.7,
                        &[
                            "independent action",
                            "solitary focus",
                            "practical solutions",
                        ],
                        0.85,
                    ),
                    criteria(
                        0.85,
                        &[
                            "present focus",
                            "concrete details",
                            "hands-on approach",
                        ],
                        0.9,
                    ),
                    criteria(
                        0.8,
                        &[
                            "logical analysis",
                            "objective reasoning",
                            "practical solutions",
                        ],
                        0.85,
                    ),
                    criteria(-0.7, &["flexibility", "spontaneity", "adaptability"], 0.8),
                ],
            ),
        ),
        (
            PersonalityType::Isfp,
            entry(
                "Gentle and creative free spirit",
                "Warm and artistic responses",
                [
                    criteria(-0.6, &["quiet creativity", "solitary focus", "introspection"], 0.8),
                    criteria(
                        0.7,
                        &[
                            "present focus",
                            "concrete details",
                            "aesthetic appreciation",
                        ],
                        0.85,
                    ),
                    criteria(-0.85, &["emotional expression", "harmony", "empathy"], 0.9),
                    criteria(-0.8, &["flexibility", "spontaneity", "open-endedness"], 0.85),
                ],
            ),
        ),
        (
            PersonalityType::Infp,
            entry(
                "Idealistic and empathetic dreamer",
                "Thoughtful and values-driven responses",
                [
                    criteria(-0.7, &["introspection", "quiet reflection", "solitary focus"], 0.85),
                    criteria(-0.9, &["future vision", "abstract thinking", "possibilities"], 0.95),
                    criteria(-0.85, &["empathy", "values", "human connection"], 0.9),
                    criteria(-0.7, &["flexibility", "open-endedness", "spontaneity"], 0.8),
                ],
            ),
        ),
        (
            PersonalityType::Intp,
            entry(
                "Logical and innovative thinker",
                "Analytical and abstract responses",
                [
                    criteria(
                        -0.9,
                        &[
                            "independent thinking",
                            "solitary focus",
                            "introspection",
                        ],
                        0.95,
                    ),
                    criteria(
                        -0.85,
                        &[
                            "abstract concepts",
                            "theoretical exploration",
                            "future focus",
                        ],
                        0.9,
                    ),
                    criteria(
                        0.9,
                        &[
                            "logical reasoning",
                            "objective analysis",
                            "systematic approach",
                        ],
                        0.95,
                    ),
                    criteria(-0.8, &["flexibility", "open-endedness", "spontaneity"], 0.85),
                ],
            ),
        ),
        (
            PersonalityType::Estp,
            entry(
                "Energetic and action-oriented adventurer",
                "Direct and energetic responses",
                [
                    criteria(0.9, &["social interaction", "action-oriented", "outgoing"], 0.95),
                    criteria(
                        0.85,
                        &[
                            "present focus",
                            "concrete details",
                            "hands-on approach",
                        ],
                        0.9,
                    ),
                    criteria(
                        0.8,
                        &[
                            "logical analysis",
                            "objective reasoning",
                            "practical solutions",
                        ],
                        0.85,
                    ),
                    criteria(-0.7, &["flexibility", "spontaneity", "adaptability"], 0.8),
                ],
            ),
        ),
        (
            PersonalityType::Esfp,
            entry(
                "Spontaneous and enthusiastic entertainer",
                "Playful, lively, and engaging",
                [
                    criteria(
                        1.0,
                        &[
                            "social fun",
                            "high energy",
                            "life of the party",
                            "expressive",
                        ],
                        1.0,
                    ),
                    criteria(0.8, &["enjoying the moment", "thrill-seeking", "hands-on"], 0.85),
                    criteria(-0.7, &["emotional connection", "harmony", "caring for others"], 0.85),
                    criteria(-1.0, &["improvised fun", "flexibility", "going with the flow"], 1.0),
                ],
            ),
        ),
        (
            PersonalityType::Enfp,
            entry(
                "Enthusiastic and creative motivator",
                "Inspiring and empathetic responses",
                [
                    criteria(0.8, &["social interaction", "outgoing", "energetic"], 0.9),
                    criteria(-0.9, &["future vision", "abstract thinking", "possibilities"], 0.95),
                    criteria(-0.85, &["empathy", "values", "human connection"], 0.9),
                    criteria(-0.7, &["flexibility", "open-endedness", "spontaneity"], 0.8),
                ],
            ),
        ),
        (
            PersonalityType::Entp,
            entry(
                "Innovative and curious debater",
                "Logical and abstract responses",
                [
                    criteria(
                        1.0,
                        &[
                            "social interaction",
                            "debate",
                            "discussion",
                            "group brainstorming",
                            "persuasion",
                            "outspoken",
                        ],
                        1.0,
                    ),
                    criteria(
                        -1.0,
                        &[
                            "future possibilities",
                            "abstract ideas",
                            "innovation",
                            "theory crafting",
                            "new perspectives",
                        ],
                        1.0,
                    ),
                    criteria(
                        0.9,
                        &[
                            "logical reasoning",
                            "critical thinking",
                            "argumentation",
                            "objective analysis",
                            "challenging assumptions",
                        ],
                        0.9,
                    ),
                    criteria(
                        -1.0,
                        &[
                            "improvisation",
                            "spontaneous thinking",
                            "playful exploration",
                            "open-ended",
                        ],
                        0.9,
                    ),
                ],
            ),
        ),
        (
            PersonalityType::Estj,
            entry(
                "Efficient and organized leader",
                "Direct and structured responses",
                [
                    criteria(0.9, &["social interaction", "outgoing", "energetic"], 0.95),
                    criteria(
                        0.85,
                        &[
                            "present focus",
                            "concrete details",
                            "hands-on approach",
                        ],
                        0.9,
                    ),
                    criteria(
                        0.8,
                        &[
                            "logical reasoning",
                            "objective analysis",
                            "systematic approach",
                        ],
                        0.85,
                    ),
                    criteria(0.9, &["structured planning", "goal-oriented", "organized"], 0.95),
                ],
            ),
        ),
        (
            PersonalityType::Esfj,
            entry(
                "Warm and responsible helper",
                "Supportive and structured responses",
                [
                    criteria(0.85, &["social interaction", "outgoing", "energetic"], 0.9),
                    criteria(
                        0.8,
                        &[
                            "present focus",
                            "concrete details",
                            "hands-on approach",
                        ],
                        0.85,
                    ),
                    criteria(-0.9, &["emotional support", "harmony", "empathy"], 0.95),
                    criteria(0.85, &["structured planning", "goal-oriented", "organized"], 0.9),
                ],
            ),
        ),
        (
            PersonalityType::Enfj,
            entry(
                "Charismatic and inspiring leader",
                "Supportive and motivating responses",
                [
                    criteria(0.9, &["social interaction", "outgoing", "energetic"], 0.95),
                    criteria(-0.8, &["future vision", "abstract thinking", "possibilities"], 0.9),
                    criteria(-0.85, &["empathy", "values", "human connection"], 0.9),
                    criteria(0.8, &["structured planning", "goal-oriented", "organized"], 0.85),
                ],
            ),
        ),
        (
            PersonalityType::Entj,
            entry(
                "Strategic and decisive commander",
                "Direct and logical responses",
                [
                    criteria(0.9, &["social interaction", "outgoing", "energetic"], 0.95),
                    criteria(-0.85, &["future vision", "abstract thinking", "possibilities"], 0.9),
                    criteria(
                        0.9,
                        &[
                            "logical reasoning",
                            "objective analysis",
                            "systematic approach",
                        ],
                        0.95,
                    ),
                    criteria(0.85, &["structured planning", "goal-oriented", "organized"], 0.9),
                ],
            ),
        ),
    ]
}
