/// Name announced for bar `index`: its explicit label when one is set and
/// non-empty, otherwise a generated `"Bar N of M"`.
#[must_use]
pub fn bar_accessibility_name(index: usize, count: usize, labels: Option<&[String]>) -> String {
    match labels.and_then(|labels| labels.get(index)) {
        Some(label) if !label.is_empty() => label.clone(),
        _ => format!("Bar {} of {count}", index + 1),
    }
}

/// Share of `effective_max` covered by `value`, in percent.
#[must_use]
pub fn percent_of_max(value: f64, effective_max: f64) -> f64 {
    if effective_max <= 0.0 {
        return 0.0;
    }
    value / effective_max * 100.0
}

/// Combines a bar name and its value into a screen-reader label.
///
/// Values are expressed as a percentage of the ceiling so that very large
/// magnitudes stay readable.
#[must_use]
pub fn format_accessibility_label(name: &str, value: f64, effective_max: f64) -> String {
    format!("{name} : {:.2} %", percent_of_max(value, effective_max))
}
