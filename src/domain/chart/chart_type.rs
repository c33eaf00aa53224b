use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Area,
    Bar,
    Line,
    Pie,
    Radar,
    Radial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartVariant {
    Default,
    Stacked,
    Expanded,
    Linear,
    Step,
    Horizontal,
    Multiple,
    Legend,
    Label,
    Donut,
}

/// Minimum data shape a chart type needs before it can be offered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartRequirements {
    pub min_numeric_columns: usize,
    pub min_rows: usize,
}

impl ChartType {
    pub const ALL: [ChartType; 6] = [
        ChartType::Area,
        ChartType::Bar,
        ChartType::Line,
        ChartType::Pie,
        ChartType::Radar,
        ChartType::Radial,
    ];

    pub fn variants(&self) -> &'static [ChartVariant] {
        use ChartVariant as V;
        match self {
            ChartType::Area => &[V::Default, V::Stacked, V::Expanded, V::Linear, V::Step, V::Legend],
            ChartType::Bar => &[V::Default, V::Horizontal, V::Multiple, V::Stacked, V::Label],
            ChartType::Line => &[V::Default, V::Linear, V::Step, V::Multiple, V::Label, V::Legend],
            ChartType::Pie => &[V::Default, V::Donut, V::Label, V::Legend],
            ChartType::Radar => &[V::Default, V::Multiple, V::Legend],
            ChartType::Radial => &[V::Default, V::Stacked, V::Label, V::Legend],
        }
    }

    pub fn supports(&self, variant: ChartVariant) -> bool {
        self.variants().contains(&variant)
    }

    pub fn requirements(&self) -> ChartRequirements {
        let (min_numeric_columns, min_rows) = match self {
            ChartType::Area => (1, 2),
            ChartType::Bar => (1, 1),
            ChartType::Line => (1, 2),
            ChartType::Pie => (1, 1),
            ChartType::Radar => (3, 1),
            ChartType::Radial => (1, 1),
        };
        ChartRequirements {
            min_numeric_columns,
            min_rows,
        }
    }

    /// Pie and radial charts cannot draw values below zero
    pub fn allows_negative_values(&self) -> bool {
        !matches!(self, ChartType::Pie | ChartType::Radial)
    }
}

impl std::fmt::Display for ChartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartType::Area => write!(f, "area"),
            ChartType::Bar => write!(f, "bar"),
            ChartType::Line => write!(f, "line"),
            ChartType::Pie => write!(f, "pie"),
            ChartType::Radar => write!(f, "radar"),
            ChartType::Radial => write!(f, "radial"),
        }
    }
}

/// Which chart to draw and from which columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSettings {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub variant: ChartVariant,
    pub category_column: String,
    pub value_columns: Vec<String>,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            chart_type: ChartType::Bar,
            variant: ChartVariant::Default,
            category_column: String::new(),
            value_columns: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_supports_default_variant() {
        for chart_type in ChartType::ALL {
            assert!(chart_type.supports(ChartVariant::Default));
        }
        assert!(!ChartType::Radar.supports(ChartVariant::Stacked));
        assert!(ChartType::Bar.supports(ChartVariant::Horizontal));
        assert!(ChartType::Pie.supports(ChartVariant::Donut));
        assert!(!ChartType::Bar.supports(ChartVariant::Donut));
    }

    #[test]
    fn test_pie_and_radial_reject_negative_values() {
        let rejecting: Vec<ChartType> = ChartType::ALL
            .into_iter()
            .filter(|t| !t.allows_negative_values())
            .collect();
        assert_eq!(rejecting, vec![ChartType::Pie, ChartType::Radial]);
        assert_eq!(serde_json::to_value(ChartType::Pie).unwrap(), "pie");
    }

    #[test]
    fn test_settings_serialize_like_the_web_app() {
        let settings = ChartSettings {
            chart_type: ChartType::Line,
            variant: ChartVariant::Step,
            category_column: "month".to_string(),
            value_columns: vec!["sales".to_string()],
        };
        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["type"], "line");
        assert_eq!(json["variant"], "step");
        assert_eq!(json["categoryColumn"], "month");
        assert_eq!(json["valueColumns"][0], "sales");
    }
}
