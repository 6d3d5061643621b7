use crate::config::LayoutConfig;
use crate::text_metrics::TextMeasure;

const ELLIPSIS: &str = "..";

/// Shortens labels longer than `max_chars` to `max_chars - 2` characters plus `..`.
pub fn truncate_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Measured label width plus horizontal padding, rounded up to whole pixels.
pub(super) fn padded_label_width(
    label: &str,
    font_size: f32,
    measurer: &dyn TextMeasure,
    config: &LayoutConfig,
) -> f32 {
    measurer.measure(label, font_size).max(0.0).ceil() + config.label_padding
}

pub(super) fn clamp_block_width(width: f32, config: &LayoutConfig) -> f32 {
    let min = config.min_block_width;
    let max = config.max_block_width.max(min);
    width.clamp(min, max)
}
