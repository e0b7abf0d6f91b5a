//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Chart.js render functions are split across `assets/js/*.js` and embedded
//! at compile time. They are evaluated as globals (no ES modules) and
//! exposed via `window.*`. This module provides safe Rust wrappers that
//! hand over pre-serialized data/options JSON and call those globals.

// Embed all Chart.js helper files at compile time
static CHART_COMMON_JS: &str = include_str!("../assets/js/chart-common.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static DOUGHNUT_CHART_JS: &str = include_str!("../assets/js/doughnut-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Pulse JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-Chart.js polling loop.
///
/// The chart JS files define functions like `renderLineChart(...)` via
/// `function` declarations. To ensure they become globally accessible
/// (not block-scoped inside the setInterval callback), we evaluate them
/// at global scope via indirect eval once the Chart.js global is ready,
/// and then explicitly promote each function to `window.*`.
pub fn init_charts() {
    let all_js = [
        CHART_COMMON_JS,
        LINE_CHART_JS,
        BAR_CHART_JS,
        DOUGHNUT_CHART_JS,
    ]
    .join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__pulseChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__pulseChartsReady || window.__pulseChartsInit) return;
            window.__pulseChartsInit = true;
            var waitForChart = setInterval(function() {
                if (typeof Chart !== 'undefined') {
                    clearInterval(waitForChart);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__pulseChartScripts);
                    delete window.__pulseChartScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof renderDoughnutChart !== 'undefined') window.renderDoughnutChart = renderDoughnutChart;
                    if (typeof pulseDestroyChart !== 'undefined') window.pulseDestroyChart = pulseDestroyChart;
                    window.__pulseChartsReady = true;
                    console.log('Pulse charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

fn escape_json_arg(json: &str) -> String {
    json.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "")
}

/// Poll until the scripts and the container exist, then call a render
/// function with `(containerId, dataJson, optionsJson)`.
fn render_chart(func_name: &str, container_id: &str, data_json: &str, options_json: &str) {
    let escaped_data = escape_json_arg(data_json);
    let escaped_options = escape_json_arg(options_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__pulseChartsReady &&
                    typeof window.{func_name} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{func_name}('{container_id}', '{escaped_data}', '{escaped_options}');
                    }} catch(e) {{ console.error('[Pulse] {func_name} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render a line chart (revenue, performance).
pub fn render_line_chart(container_id: &str, data_json: &str, options_json: &str) {
    render_chart("renderLineChart", container_id, data_json, options_json);
}

/// Render a bar chart (sales by channel).
pub fn render_bar_chart(container_id: &str, data_json: &str, options_json: &str) {
    render_chart("renderBarChart", container_id, data_json, options_json);
}

/// Render a doughnut chart (traffic sources).
pub fn render_doughnut_chart(container_id: &str, data_json: &str, options_json: &str) {
    render_chart("renderDoughnutChart", container_id, data_json, options_json);
}

/// Destroy the chart instance in the given container and clear it.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "if (window.pulseDestroyChart) window.pulseDestroyChart('{0}'); var el = document.getElementById('{0}'); if (el) el.innerHTML = '';",
        container_id
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_args_are_escaped_for_single_quoted_embedding() {
        assert_eq!(
            escape_json_arg("{\"label\":\"Jan's\"}\n"),
            "{\"label\":\"Jan\\'s\"}"
        );
        assert_eq!(escape_json_arg("a\\b"), "a\\\\b");
    }
}
