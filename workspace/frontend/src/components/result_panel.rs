use common::{ResultLine, ResultView, Segment};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResultPanelProps {
    pub view: ResultView,
}

/// Alert box holding one form's latest result.
///
/// Segments are rendered as text nodes; nothing from the API is parsed as
/// markup.
#[function_component(ResultPanel)]
pub fn result_panel(props: &ResultPanelProps) -> Html {
    let view = &props.view;

    html! {
        <div class={classes!("alert", view.tone.alert_class())}>
            { for view.lines.iter().map(render_line) }
        </div>
    }
}

fn render_line(line: &ResultLine) -> Html {
    html! {
        <div class="result-line">
            { for line.0.iter().map(render_segment) }
        </div>
    }
}

fn render_segment(segment: &Segment) -> Html {
    match segment {
        Segment::Text(text) => html! { {text.clone()} },
        Segment::Strong(text) => html! { <strong>{text.clone()}</strong> },
    }
}
