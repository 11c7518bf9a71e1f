pub mod bar_layout;
pub mod bar_naming;
pub mod geometry;

pub use bar_layout::{
    BarLayout, LABEL_TOP_MARGIN_RATIO, LabelBand, bar_height, bar_offset_x, bar_width,
    resolve_bar_color, resolve_effective_max,
};
pub use bar_naming::{bar_accessibility_name, format_accessibility_label, percent_of_max};
pub use geometry::{Point, Rect};
