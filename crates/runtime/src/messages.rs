//! Localized message catalog for attacker feedback.
//!
//! Every terminal branch of the pipeline maps to one [`MessageCode`]. The
//! catalog ships English templates and accepts JSON overrides, keyed by the
//! snake_case code name, so servers can relocalize without rebuilding.

use std::collections::HashMap;
use std::str::FromStr;

use crate::api::RuntimeError;

/// Stable identifiers for attacker-facing messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum MessageCode {
    /// Usage hint sent when an eligible weapon is equipped.
    HealArrowUsage,
    /// Success: `{0}` target, `{1}` health restored.
    PlayerHealed,
    /// Eligibility rejection: `{0}` reason text.
    NotEligible,
    /// Ledger rejection: `{0}` formatted shortfall list.
    InsufficientIngredients,
    /// Ingredients consumed but the target is gone.
    TargetLost,
}

/// Template store with positional `{n}` argument substitution.
#[derive(Clone, Debug)]
pub struct MessageCatalog {
    templates: HashMap<MessageCode, String>,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        let mut templates = HashMap::new();
        templates.insert(
            MessageCode::HealArrowUsage,
            "Hold down {0} to heal a friend with an arrow".to_string(),
        );
        templates.insert(
            MessageCode::PlayerHealed,
            "You healed {0} by {1} health points".to_string(),
        );
        templates.insert(
            MessageCode::NotEligible,
            "Your arrow cannot heal here: {0}".to_string(),
        );
        templates.insert(
            MessageCode::InsufficientIngredients,
            "You don't have enough ingredients: {0}".to_string(),
        );
        templates.insert(
            MessageCode::TargetLost,
            "Your heal arrow found no one to mend".to_string(),
        );
        Self { templates }
    }
}

impl MessageCatalog {
    /// Render a message, substituting `{0}`, `{1}`, ... with `args`.
    ///
    /// A code without a template falls back to its name so feedback is never
    /// silently dropped.
    pub fn render(&self, code: MessageCode, args: &[String]) -> String {
        let mut text = self
            .templates
            .get(&code)
            .cloned()
            .unwrap_or_else(|| code.to_string());
        for (index, arg) in args.iter().enumerate() {
            text = text.replace(&format!("{{{index}}}"), arg);
        }
        text
    }

    /// Merge template overrides from a JSON object of `code name -> template`.
    ///
    /// Unknown code names are skipped with a warning rather than rejecting
    /// the whole file. Returns the number of templates applied.
    pub fn merge_overrides(&mut self, json: &str) -> Result<usize, RuntimeError> {
        let overrides: HashMap<String, String> = serde_json::from_str(json)?;

        let mut applied = 0;
        for (name, template) in overrides {
            match MessageCode::from_str(&name) {
                Ok(code) => {
                    self.templates.insert(code, template);
                    applied += 1;
                }
                Err(_) => {
                    tracing::warn!(code = %name, "ignoring override for unknown message code");
                }
            }
        }
        Ok(applied)
    }
}
