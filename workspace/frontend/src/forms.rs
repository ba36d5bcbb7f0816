//! Binds the dashboard forms and runs the submit → request → render
//! pipeline for each of them.

use std::cell::RefCell;
use std::collections::HashMap;

use common::chart::{
    crop_yield_chart, market_price_chart, pest_detection_chart, should_draw_crop_chart,
    soil_health_chart,
};
use common::{
    ChartSpec, FieldValue, FormKind, ResultView, SubmissionTracker, build_payload, validate_upload,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, File, FormData, HtmlFormElement};
use yew::AppHandle;

use crate::api_client::analytics;
use crate::charts;
use crate::components::{ResultPanel, ResultPanelProps};

/// Per-form state kept between submissions.
#[derive(Default)]
struct FormState {
    tracker: SubmissionTracker,
    panel: Option<AppHandle<ResultPanel>>,
}

thread_local! {
    static FORMS: RefCell<HashMap<FormKind, FormState>> = RefCell::new(HashMap::new());
}

fn with_state<R>(kind: FormKind, f: impl FnOnce(&mut FormState) -> R) -> R {
    FORMS.with(|forms| f(forms.borrow_mut().entry(kind).or_default()))
}

/// What a successful submission puts on the page.
struct Rendered {
    view: ResultView,
    chart: Option<ChartSpec>,
}

/// Attach submit handlers to every dashboard form present in `document`.
/// Forms missing from the page are skipped.
pub fn bind_all(document: &Document) {
    for kind in FormKind::ALL {
        let form = document
            .get_element_by_id(kind.form_id())
            .and_then(|element| element.dyn_into::<HtmlFormElement>().ok());

        match form {
            Some(form) => match bind_form(kind, &form) {
                Ok(()) => log::debug!("Bound #{}", kind.form_id()),
                Err(e) => log::error!("Failed to bind #{}: {:?}", kind.form_id(), e),
            },
            None => log::debug!("Form #{} not on this page, skipping", kind.form_id()),
        }
    }
}

fn bind_form(kind: FormKind, form: &HtmlFormElement) -> Result<(), JsValue> {
    let target = form.clone();
    let closure = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        let form = target.clone();
        wasm_bindgen_futures::spawn_local(async move {
            submit(kind, form).await;
        });
    }));
    form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

async fn submit(kind: FormKind, form: HtmlFormElement) {
    let (ticket, pending) = with_state(kind, |state| {
        let ticket = state.tracker.begin();
        (ticket, state.tracker.pending())
    });
    log::info!("Submitting {:?} (#{})", kind, ticket.sequence());
    if pending > 1 {
        log::debug!("{:?} has {} submissions in flight", kind, pending);
    }

    let outcome = run_pipeline(kind, &form).await;

    if !with_state(kind, |state| state.tracker.should_apply(ticket)) {
        log::info!(
            "Dropping response for {:?} #{}, a newer one is already shown",
            kind,
            ticket.sequence()
        );
        return;
    }

    match outcome {
        Ok(Rendered { view, chart }) => {
            render_result(kind, view);
            if let Some(spec) = chart {
                charts::draw(&spec);
            }
        }
        Err(message) => {
            log::error!("{:?} submission failed: {}", kind, message);
            render_result(kind, ResultView::error(message));
        }
    }
}

async fn run_pipeline(kind: FormKind, form: &HtmlFormElement) -> Result<Rendered, String> {
    let form_data = FormData::new_with_form(form).map_err(js_error)?;
    let entries = read_entries(&form_data)?;

    match kind {
        FormKind::CropYield => {
            let payload = build_payload(kind, entries);
            let result = analytics::predict_crop_yield(&payload).await?;
            let chart = should_draw_crop_chart(&result).then(|| crop_yield_chart(&payload));
            Ok(Rendered { view: ResultView::crop_yield(&result), chart })
        }
        FormKind::SoilHealth => {
            let payload = build_payload(kind, entries);
            let result = analytics::analyze_soil_health(&payload).await?;
            Ok(Rendered {
                view: ResultView::soil_health(&result),
                chart: Some(soil_health_chart(&payload)),
            })
        }
        FormKind::PestDetection => {
            check_uploads(&entries)?;
            let result = analytics::detect_pest(form_data).await?;
            Ok(Rendered {
                view: ResultView::pest_detection(&result),
                chart: Some(pest_detection_chart(&result)),
            })
        }
        FormKind::MarketPrice => {
            let payload = build_payload(kind, entries);
            let result = analytics::forecast_market_price(&payload).await?;
            Ok(Rendered {
                view: ResultView::market_price(&result),
                chart: Some(market_price_chart(&result)),
            })
        }
    }
}

/// Every entry of the form, in document order.
fn read_entries(form_data: &FormData) -> Result<Vec<(String, FieldValue)>, String> {
    let mut entries = Vec::new();
    for entry in form_data.entries() {
        let pair: js_sys::Array = entry.map_err(js_error)?.unchecked_into();
        let Some(key) = pair.get(0).as_string() else {
            continue;
        };
        let value = pair.get(1);

        if let Some(text) = value.as_string() {
            entries.push((key, FieldValue::Text(text)));
        } else if let Ok(file) = value.dyn_into::<File>() {
            entries.push((key, FieldValue::File { name: file.name(), size: file.size() as u64 }));
        }
    }
    Ok(entries)
}

fn check_uploads(entries: &[(String, FieldValue)]) -> Result<(), String> {
    for (field, value) in entries {
        if let FieldValue::File { name, size } = value {
            validate_upload(name, *size).map_err(|e| {
                log::warn!("Refusing upload in field {}: {}", field, e);
                e.to_string()
            })?;
        }
    }
    Ok(())
}

/// Show `view` in the form's result container, reusing the mounted panel.
fn render_result(kind: FormKind, view: ResultView) {
    let container = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(kind.result_id()));
    let Some(container) = container else {
        log::warn!("Result container #{} not found", kind.result_id());
        return;
    };

    log::debug!("Rendering {:?} result: {}", kind, view.plain_text());
    with_state(kind, |state| match state.panel.as_mut() {
        Some(panel) => panel.update(ResultPanelProps { view }),
        None => {
            let panel = yew::Renderer::<ResultPanel>::with_root_and_props(
                container,
                ResultPanelProps { view },
            )
            .render();
            state.panel = Some(panel);
        }
    });
}

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
