//! Thin wrappers around browser APIs.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('GRC JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Offer `csv` to the user as a file download named `filename`.
///
/// Both strings are passed through `serde_json` so they arrive in JS as
/// properly escaped string literals.
pub fn download_csv(filename: &str, csv: &str) {
    let data = serde_json::to_string(csv).unwrap_or_default();
    let name = serde_json::to_string(filename).unwrap_or_default();
    call_js(&format!(
        r#"
        (function() {{
            var blob = new Blob([{data}], {{ type: 'text/csv;charset=utf-8;' }});
            var url = URL.createObjectURL(blob);
            var link = document.createElement('a');
            link.href = url;
            link.download = {name};
            document.body.appendChild(link);
            link.click();
            document.body.removeChild(link);
            URL.revokeObjectURL(url);
        }})();
        "#,
    ));
}

/// Resolve after `millis` milliseconds using `window.setTimeout`.
pub async fn sleep_ms(millis: u32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().and_then(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis as i32)
                .ok()
        });
        if scheduled.is_none() {
            log::warn!("setTimeout unavailable, resolving immediately");
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = JsFuture::from(promise).await;
}
