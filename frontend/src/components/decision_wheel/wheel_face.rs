use yew::prelude::*;

use crate::styles;

const YES_COLOR: &str = "#66BB6A";
const NO_COLOR: &str = "#EF5350";

#[derive(Properties, PartialEq)]
pub struct WheelFaceProps {
    /// Cumulative clockwise rotation of the face in degrees.
    pub rotation: f64,
    pub duration_ms: u64,
    pub yes_label: AttrValue,
    pub no_label: AttrValue,
}

/// Face angles 0..180 (right half) read YES under the top pointer, 180..360 NO.
#[function_component(WheelFace)]
pub fn wheel_face(props: &WheelFaceProps) -> Html {
    let face_style = format!(
        "background: conic-gradient({} 0deg 180deg, {} 180deg 360deg); \
         transform: rotate({:.3}deg); \
         transition: transform {}ms cubic-bezier(0.25, 0.1, 0.25, 1);",
        YES_COLOR, NO_COLOR, props.rotation, props.duration_ms
    );

    html! {
        <div class={styles::WHEEL_CONTAINER} role="img" aria-label={format!("{} / {}", props.yes_label, props.no_label)}>
            <div class={styles::WHEEL_POINTER} />
            <div class={styles::WHEEL_FACE} style={face_style}>
                <span class={classes!(styles::WHEEL_LABEL, "right-8")}>{props.yes_label.clone()}</span>
                <span class={classes!(styles::WHEEL_LABEL, "left-8")}>{props.no_label.clone()}</span>
            </div>
            <div class={styles::WHEEL_HUB} />
        </div>
    }
}
