// ============================================================
// CHART UTILITIES
// ============================================================
// Y-axis domain fitting with "nice" rounded bounds

use indexmap::IndexMap;

use crate::domain::dataset::Record;

pub const DEFAULT_AXIS_PADDING: f64 = 0.05;

const FALLBACK_DOMAIN: (f64, f64) = (0.0, 100.0);
const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Tight `(min, max)` Y-axis domain for the numbers in `value_columns`.
///
/// Bounds get `padding` (a fraction of the data range) on each side and are
/// then rounded outwards to nice values. A bound close to zero is anchored
/// at zero.
pub fn calculate_y_axis_domain(
    rows: &[Record],
    value_columns: &[String],
    padding: f64,
) -> (f64, f64) {
    let values: Vec<f64> = rows
        .iter()
        .flat_map(|row| value_columns.iter().filter_map(move |col| row.get(col)))
        .filter_map(|value| value.as_number())
        .filter(|v| !v.is_nan())
        .collect();

    if values.is_empty() {
        return FALLBACK_DOMAIN;
    }

    let data_min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let data_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if data_min == data_max {
        if data_min == 0.0 {
            return FALLBACK_DOMAIN;
        }
        let half = data_min.abs() * 0.5;
        return (data_min - half, data_max + half);
    }

    let range = data_max - data_min;
    let padding_amount = range * padding;

    let mut raw_min = data_min - padding_amount;
    let mut raw_max = data_max + padding_amount;

    if data_min >= 0.0 && data_min < range * 0.3 {
        raw_min = 0.0;
    }
    if data_max <= 0.0 && data_max.abs() < range * 0.3 {
        raw_max = 0.0;
    }

    (nice_floor(raw_min), nice_ceil(raw_max))
}

fn magnitude(abs_value: f64) -> f64 {
    10f64.powi(abs_value.log10().floor() as i32)
}

/// Round down to a nice number, for an axis minimum.
pub fn nice_floor(value: f64) -> f64 {
    if value == 0.0 {
        return 0.0;
    }
    if value < 0.0 {
        return -nice_ceil(value.abs());
    }

    if value < 1.0 {
        return (value * 100.0).floor() / 100.0;
    }

    let magnitude = magnitude(value);
    NICE_STEPS
        .iter()
        .map(|step| magnitude * step)
        .filter(|candidate| *candidate <= value)
        .last()
        .unwrap_or(magnitude)
}

/// Round up to a nice number, for an axis maximum.
pub fn nice_ceil(value: f64) -> f64 {
    if value == 0.0 {
        return 0.0;
    }
    if value < 0.0 {
        return -nice_floor(value.abs());
    }

    if value < 1.0 {
        return (value * 100.0).ceil() / 100.0;
    }

    let magnitude = magnitude(value);
    NICE_STEPS
        .iter()
        .map(|step| magnitude * step)
        .find(|candidate| *candidate >= value)
        .unwrap_or(magnitude * 10.0)
}

/// Pie slices: absolute values of `value_column` summed per category, in
/// first-seen category order. Cells without a number count as zero.
pub fn pie_slices(rows: &[Record], category_column: &str, value_column: &str) -> Vec<(String, f64)> {
    let mut totals: IndexMap<String, f64> = IndexMap::new();

    for row in rows {
        let category = row
            .get(category_column)
            .map(|value| value.to_string())
            .unwrap_or_default();
        let value = row
            .get(value_column)
            .and_then(|value| value.as_number())
            .filter(|v| !v.is_nan())
            .map(f64::abs)
            .unwrap_or(0.0);
        *totals.entry(category).or_insert(0.0) += value;
    }

    totals.into_iter().collect()
}
