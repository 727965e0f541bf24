use serde::Serialize;

/// Current weather at a location, as reported by the provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conditions {
    /// Short description, e.g. "Drizzle".
    pub summary: String,
    pub temperature_celsius: f64,
}

impl std::fmt::Display for Conditions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:.1}°C", self.summary, self.temperature_celsius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_rounds_temperature_to_one_decimal() {
        let conditions = Conditions {
            summary: "Drizzle".into(),
            temperature_celsius: 7.17,
        };

        assert_eq!(conditions.to_string(), "Drizzle 7.2°C");
    }

    #[test]
    fn display_uses_degree_sign() {
        let conditions = Conditions {
            summary: "Clear".into(),
            temperature_celsius: -3.0,
        };

        let shown = conditions.to_string();
        assert!(shown.contains('\u{00B0}'), "{shown}");
        assert!(!shown.contains('\u{00BA}'), "{shown}");
    }
}
