use common::ChartSpec;
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot, catch)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue) -> Result<JsValue, JsValue>;
}

/// Hand a chart spec to Plotly, replacing whatever its container showed.
pub fn draw(spec: &ChartSpec) {
    let has_container = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(spec.container_id))
        .is_some();
    if !has_container {
        log::warn!("Chart container #{} not found, skipping draw", spec.container_id);
        return;
    }

    // Plain objects, not Maps, or Plotly ignores the keys
    let serializer = Serializer::json_compatible();
    let data = match spec.data.serialize(&serializer) {
        Ok(data) => data,
        Err(e) => {
            log::error!("Failed to convert chart data for #{}: {}", spec.container_id, e);
            return;
        }
    };
    let layout = match spec.layout.serialize(&serializer) {
        Ok(layout) => layout,
        Err(e) => {
            log::error!("Failed to convert chart layout for #{}: {}", spec.container_id, e);
            return;
        }
    };

    log::trace!("Drawing chart into #{}", spec.container_id);
    if let Err(e) = new_plot(spec.container_id, data, layout) {
        log::error!("Plotly.newPlot failed for #{}: {:?}", spec.container_id, e);
    }
}
