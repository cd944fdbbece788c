//! Heart glyph as inline SVG.

use dioxus::prelude::*;

/// Outline of the heart, 24x24 view box
const HEART_PATH: &str = "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z";

/// Properties for the HeartIcon component
#[derive(Clone, PartialEq, Props)]
pub struct HeartIconProps {
    /// Rendered width and height in pixels
    #[props(default = 24.0)]
    pub size: f64,
    #[props(default)]
    pub class: Option<String>,
}

/// Filled heart icon colored by the surrounding `color`
#[component]
pub fn HeartIcon(props: HeartIconProps) -> Element {
    let class = props.class.as_deref().unwrap_or("");
    let size = props.size;

    rsx! {
        svg {
            class: "heart-icon {class}",
            view_box: "0 0 24 24",
            width: "{size}",
            height: "{size}",
            fill: "currentColor",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            path { d: HEART_PATH }
        }
    }
}
