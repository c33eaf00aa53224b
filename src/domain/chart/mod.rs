// ============================================================
// CHART DOMAIN LAYER
// ============================================================
// Chart kinds, their data requirements, and series colors

mod chart_type;
mod palette;

pub use chart_type::{ChartRequirements, ChartSettings, ChartType, ChartVariant};
pub use palette::{color_name, column_color, DEFAULT_CHART_COLORS, TAILWIND_COLORS_600};
