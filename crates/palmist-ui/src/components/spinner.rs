//! Busy indicator

use dioxus::prelude::*;

/// Small spinning ring, sized to sit inline with button text.
#[component]
pub fn Spinner(#[props(default = 20)] size: u32) -> Element {
    rsx! {
        svg {
            class: "spinner",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            "aria-hidden": "true",
            circle {
                class: "spinner__track",
                cx: "12",
                cy: "12",
                r: "10",
                stroke: "currentColor",
                stroke_width: "4",
            }
            path {
                class: "spinner__head",
                fill: "currentColor",
                d: "M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4z",
            }
        }
    }
}
