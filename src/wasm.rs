//! WASM bindings.
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { shortest_path_js } from 'u-hampath';
//!
//! await init();
//! const result = shortest_path_js({ nodes: [1, 2, 3, 4], edges: [[1, 2], [2, 3], [3, 4], [4, 1]] });
//! console.log(result.path, result.total_distance);
//! ```

use wasm_bindgen::prelude::*;

use crate::aco::AcoConfig;
use crate::service::{shortest_path, NodeLabel, ServiceError, ShortestPathRequest};

/// Runs [`shortest_path`] on a JS graph payload.
///
/// Errors are thrown as `{ status, detail }` objects.
#[wasm_bindgen]
pub fn shortest_path_js(request: JsValue, seed: Option<u32>) -> Result<JsValue, JsValue> {
    let request: ShortestPathRequest<NodeLabel> = serde_wasm_bindgen::from_value(request)
        .map_err(|e| {
            to_js(&ServiceError {
                status: 422,
                detail: e.to_string(),
            })
        })?;

    let mut config = AcoConfig::default();
    config.seed = seed.map(u64::from);

    match shortest_path(request, &config) {
        Ok(path) => serde_wasm_bindgen::to_value(&path).map_err(JsValue::from),
        Err(err) => Err(to_js(&err)),
    }
}

fn to_js(err: &ServiceError) -> JsValue {
    serde_wasm_bindgen::to_value(err).unwrap_or_else(|_| JsValue::from_str(&err.detail))
}
