//! Request parameters collected from the form, and their presence checks.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::Credential;

/// Who the generated message is addressed to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recipient {
    #[default]
    #[serde(rename = "My Boss")]
    Boss,
    #[serde(rename = "My Partner")]
    Partner,
    #[serde(rename = "My Mom/Dad")]
    Parent,
    #[serde(rename = "A Friend")]
    Friend,
    #[serde(rename = "A First Date")]
    FirstDate,
}

impl Recipient {
    /// Selector order.
    pub const ALL: [Recipient; 5] = [
        Recipient::Boss,
        Recipient::Partner,
        Recipient::Parent,
        Recipient::Friend,
        Recipient::FirstDate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Recipient::Boss => "My Boss",
            Recipient::Partner => "My Partner",
            Recipient::Parent => "My Mom/Dad",
            Recipient::Friend => "A Friend",
            Recipient::FirstDate => "A First Date",
        }
    }
}

/// How dramatic the excuse should be. Variants are declared mildest first.
///
/// Deserializes from the label or from the slider position (`"0"` to `"3"`).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Intensity {
    #[default]
    #[serde(rename = "Polite Refusal", alias = "0")]
    PoliteRefusal,
    #[serde(rename = "Standard Excuse", alias = "1")]
    StandardExcuse,
    #[serde(rename = "Serious Emergency", alias = "2")]
    SeriousEmergency,
    #[serde(rename = "Total Chaos", alias = "3")]
    TotalChaos,
}

impl Intensity {
    pub const ALL: [Intensity; 4] = [
        Intensity::PoliteRefusal,
        Intensity::StandardExcuse,
        Intensity::SeriousEmergency,
        Intensity::TotalChaos,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Intensity::PoliteRefusal => "Polite Refusal",
            Intensity::StandardExcuse => "Standard Excuse",
            Intensity::SeriousEmergency => "Serious Emergency",
            Intensity::TotalChaos => "Total Chaos",
        }
    }

    /// Position on the intensity slider, 0 for the mildest.
    pub fn level(self) -> usize {
        self as usize
    }
}

/// Raw field contents as submitted, from the HTML form or the JSON API.
/// Missing fields fall back to empty text and the first selector option.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExcuseInput {
    pub api_key: String,
    pub recipient: Recipient,
    pub intensity: Intensity,
    pub event: String,
}

/// Request parameters that passed the presence checks.
#[derive(Debug, Clone)]
pub struct ExcuseRequest {
    pub credential: Credential,
    pub recipient: Recipient,
    pub intensity: Intensity,
    pub event: String,
}

impl ExcuseInput {
    /// Presence checks: credential first, then event. No cross-field validation.
    pub fn validate(self) -> Result<ExcuseRequest, AppError> {
        let credential = Credential::new(self.api_key);
        if credential.is_blank() {
            return Err(AppError::Validation(
                "API Key Missing. Please enter it in the sidebar.".to_string(),
            ));
        }

        if self.event.trim().is_empty() {
            return Err(AppError::Validation(
                "Please specify the event you need to avoid.".to_string(),
            ));
        }

        Ok(ExcuseRequest {
            credential,
            recipient: self.recipient,
            intensity: self.intensity,
            event: self.event,
        })
    }
}
