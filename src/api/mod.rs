mod accessibility;
mod chart_config;
mod data_controller;
mod invalidation;
mod json_contract;
mod scene_builder;
mod style_controller;
mod validation;
mod view;

pub use accessibility::{AccessibilityContainer, AccessibilityElement};
pub use chart_config::{BarChartConfig, BarPalette};
pub use invalidation::{InvalidationTopic, InvalidationTopics};
pub use json_contract::{BAR_CHART_CONFIG_JSON_SCHEMA_V1, BarChartConfigJsonContractV1};
pub use scene_builder::{BarChartScene, build_bar_chart_scene};
pub use view::BarChartView;
