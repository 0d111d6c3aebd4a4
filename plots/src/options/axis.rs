use derive_builder::Builder;

/// Tick-count target for the size axis
pub const SIZE_AXIS_TICKS: usize = 40;

/// Configuration for one log-scaled chart axis
#[derive(Builder, Clone, Debug, PartialEq)]
#[builder(setter(into, strip_option), default)]
pub struct AxisOptions {
    /// Axis description drawn next to the axis
    #[builder(default = "String::new()")]
    pub label: String,

    /// Target number of tick labels
    #[builder(default = "10")]
    pub ticks: usize,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self {
            label: String::new(),
            ticks: 10,
        }
    }
}

impl AxisOptions {
    /// Create a new builder for AxisOptions
    pub fn new() -> AxisOptionsBuilder {
        AxisOptionsBuilder::default()
    }

    /// The x axis: input sizes
    pub fn size_axis() -> Self {
        Self {
            label: "Size".to_string(),
            ticks: SIZE_AXIS_TICKS,
            ..Self::default()
        }
    }

    /// The y axis, described from the chart title
    pub fn value_axis(title: &str) -> Self {
        Self {
            label: crate::style::y_axis_label(title).to_string(),
            ..Self::default()
        }
    }
}
