//! Tone guide — maps each intensity to the one-line tone description embedded in the instruction.
//!
//! The guide is descriptive only; nothing checks that the completion follows it.

use crate::excuse::models::Intensity;

/// Returns the tone description for a single intensity level.
pub fn tone_description(intensity: Intensity) -> &'static str {
    match intensity {
        Intensity::PoliteRefusal => "Professional, vague, firm.",
        Intensity::StandardExcuse => "Common ailments or scheduling conflicts.",
        Intensity::SeriousEmergency => "Family crisis, car trouble, plumbing disaster.",
        Intensity::TotalChaos => "Wild, detailed, slightly unbelievable but hilarious.",
    }
}

/// Renders the full guide, one `- Label: description` line per intensity, mildest first.
pub fn tone_guide() -> String {
    Intensity::ALL
        .iter()
        .map(|&i| format!("- {}: {}", i.label(), tone_description(i)))
        .collect::<Vec<_>>()
        .join("\n")
}
