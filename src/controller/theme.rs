use serde::{Deserialize, Serialize};

use super::switch_grid::SwitchPhase;

/// Display colors for switch phases. Colors are derived from the phase and
/// never read back to infer it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub on_color: String,
    pub off_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            on_color: "#f6f6de".to_string(),
            off_color: "#4d4d4d".to_string(),
        }
    }
}

impl Theme {
    pub fn color(&self, phase: SwitchPhase) -> Option<&str> {
        match phase {
            SwitchPhase::On => Some(&self.on_color),
            SwitchPhase::Off => Some(&self.off_color),
            SwitchPhase::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_has_no_color() {
        let theme = Theme::default();
        assert_eq!(theme.color(SwitchPhase::On), Some("#f6f6de"));
        assert_eq!(theme.color(SwitchPhase::Off), Some("#4d4d4d"));
        assert_eq!(theme.color(SwitchPhase::Unknown), None);
    }

    #[test]
    fn test_partial_theme_keeps_defaults() {
        let theme: Theme = toml::from_str(r##"on_color = "#ffff00""##).unwrap();
        assert_eq!(theme.on_color, "#ffff00");
        assert_eq!(theme.off_color, "#4d4d4d");
    }
}
