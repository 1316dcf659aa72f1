use serde::{Deserialize, Serialize};

use super::error::TabError;

/// Class and attribute names a tab group is built from.
///
/// Defaults match the markup the widget was written against:
///
/// ```html
/// <div class="button-tab default" tab-target="intro">Intro</div>
/// <div class="button-tab" tab-target="usage">Usage</div>
/// <section tab="intro">...</section>
/// <section tab="usage">...</section>
/// ```
///
/// Every field can be overridden from JSON (camelCase keys); missing keys keep
/// their defaults, unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TabsConfig {
    /// Class that marks a tab button
    pub button_class: String,
    /// Attribute on a button naming the panel it selects
    pub target_attribute: String,
    /// Attribute carrying a panel's key
    pub panel_attribute: String,
    /// Class marking the button selected at load; removed by init
    pub default_class: String,
    /// Class moved between buttons on hover
    pub hover_class: String,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            button_class: "button-tab".to_string(),
            target_attribute: "tab-target".to_string(),
            panel_attribute: "tab".to_string(),
            default_class: "default".to_string(),
            hover_class: "hover".to_string(),
        }
    }
}

impl TabsConfig {
    /// CSS selector matching tab buttons.
    pub fn button_selector(&self) -> String {
        format!(".{}", self.button_class)
    }

    /// CSS selector matching panels.
    pub fn panel_selector(&self) -> String {
        format!("[{}]", self.panel_attribute)
    }

    /// Parse a full config from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, TabError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| TabError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Every name ends up in a CSS selector or a `classList` call, so each one
    /// must be a plain identifier: no whitespace, no selector syntax.
    pub fn validate(&self) -> Result<(), TabError> {
        let fields = [
            ("buttonClass", &self.button_class),
            ("targetAttribute", &self.target_attribute),
            ("panelAttribute", &self.panel_attribute),
            ("defaultClass", &self.default_class),
            ("hoverClass", &self.hover_class),
        ];

        for (field, value) in fields {
            if !is_identifier(value) {
                return Err(TabError::InvalidConfig(format!(
                    "{field} `{value}` is not a valid class or attribute name"
                )));
            }
        }
        Ok(())
    }

    /// Apply a JSON object on top of this config.
    ///
    /// Keys present in `json` replace the corresponding fields, everything
    /// else is inherited from `self` (not from the defaults).
    pub fn with_overrides(&self, json: &str) -> Result<Self, TabError> {
        let invalid = |e: serde_json::Error| TabError::InvalidConfig(e.to_string());

        let overrides: serde_json::Value = serde_json::from_str(json).map_err(invalid)?;
        let serde_json::Value::Object(overrides) = overrides else {
            return Err(TabError::InvalidConfig(
                "tab group overrides must be a JSON object".to_string(),
            ));
        };

        let mut merged = serde_json::to_value(self).map_err(invalid)?;
        if let serde_json::Value::Object(fields) = &mut merged {
            fields.extend(overrides);
        }

        let config: Self = serde_json::from_value(merged).map_err(invalid)?;
        config.validate()?;
        Ok(config)
    }
}

// CSS identifier without escapes: letters, digits, `-`, `_` and non-ASCII,
// not starting with a digit or with `-` followed by a digit, not a lone `-`.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let allowed = |c: char| {
        c.is_ascii_alphanumeric() || c == '-' || c == '_' || (!c.is_ascii() && !c.is_whitespace())
    };

    if first.is_ascii_digit() || !allowed(first) {
        return false;
    }
    if first == '-' && (name.len() == 1 || name[1..].starts_with(|c: char| c.is_ascii_digit())) {
        return false;
    }
    chars.all(allowed)
}
