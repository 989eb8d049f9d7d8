use dioxus::prelude::*;

/// Accent colour of a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Positive,
    Negative,
}

impl StatTone {
    fn class(&self) -> &'static str {
        match self {
            StatTone::Neutral => "neutral",
            StatTone::Positive => "positive",
            StatTone::Negative => "negative",
        }
    }
}

/// Responsive grid of stat cards.
#[component]
pub fn StatGrid(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-grid", {children} }
    }
}

/// A single headline number with a label.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] hint: Option<String>,
    #[props(default)] tone: StatTone,
) -> Element {
    rsx! {
        div { class: "stat-card", "data-tone": tone.class(),
            span { class: "stat-card-label", "{label}" }
            strong { class: "stat-card-value", "{value}" }
            if let Some(hint) = hint {
                span { class: "stat-card-hint", "{hint}" }
            }
        }
    }
}

/// One bar in a [`BarChart`].
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    /// Text printed next to the bar, e.g. `"12"` or `"87.50%"`.
    pub display: String,
}

/// Width of a bar as a percentage of the chart, clamped to `0..=100`.
pub fn bar_width(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

/// Horizontal bar chart. `max` is the value of a full-width bar.
#[component]
pub fn BarChart(bars: Vec<Bar>, max: f64) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        ul { class: "bar-chart",
            for bar in bars {
                li { key: "{bar.label}", class: "bar-chart-row",
                    span { class: "bar-chart-label", "{bar.label}" }
                    span { class: "bar-chart-track",
                        span {
                            class: "bar-chart-fill",
                            style: format!("width: {:.1}%", bar_width(bar.value, max)),
                        }
                    }
                    span { class: "bar-chart-value", "{bar.display}" }
                }
            }
        }
    }
}
