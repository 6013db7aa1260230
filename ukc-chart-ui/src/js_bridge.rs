//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js` and are embedded at compile
//! time. They are evaluated as globals (no ES modules) and exposed via
//! `window.*`. This module serializes data and calls those globals.

use serde::Serialize;

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static MONTHLY_LINE_CHART_JS: &str = include_str!("../assets/js/monthly-line-chart.js");

/// D3 build injected when the host page has not loaded one.
const D3_CDN_URL: &str = "https://cdn.jsdelivr.net/npm/d3@7";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('UKC JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote `s` as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Add a `<script>` tag for D3 unless `d3` is already defined or being loaded.
pub fn ensure_d3() {
    call_js(&format!(
        r#"
        if (typeof d3 === 'undefined' && !document.getElementById('ukc-d3')) {{
            var s = document.createElement('script');
            s.id = 'ukc-d3';
            s.src = {};
            document.head.appendChild(s);
        }}
        "#,
        js_string(D3_CDN_URL)
    ));
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart scripts are evaluated at global scope via indirect eval once
/// D3 is ready, then each entry point is promoted to `window.*`. The wait is
/// capped at `MAX_POLLS`; calling again after a timeout starts a new wait.
/// Safe to call more than once.
pub fn init_charts() {
    ensure_d3();

    let all_js = [TOOLTIP_JS, MONTHLY_LINE_CHART_JS].join("\n");
    call_js(&format!(
        "if (!window.__ukcChartsReady && !window.__ukcChartScripts) {{ window.__ukcChartScripts = {}; }}",
        js_string(&all_js)
    ));

    let init_js = format!(
        r#"
        (function() {{
            if (window.__ukcChartsReady || window.__ukcChartsPolling) return;
            window.__ukcChartsPolling = true;
            var polls = 0;
            var waitForD3 = setInterval(function() {{
                polls += 1;
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    window.__ukcChartsPolling = false;
                    (0, eval)(window.__ukcChartScripts);
                    delete window.__ukcChartScripts;
                    if (typeof renderMonthlyLineChart !== 'undefined') window.renderMonthlyLineChart = renderMonthlyLineChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__ukcChartsReady = true;
                    console.log('UKC charts initialized');
                }} else if (polls >= {max_polls}) {{
                    clearInterval(waitForD3);
                    window.__ukcChartsPolling = false;
                    console.warn('UKC charts: D3 did not load');
                }}
            }}, {interval});
        }})();
        "#,
        max_polls = MAX_POLLS,
        interval = POLL_INTERVAL_MS,
    );
    let _ = js_sys::eval(&init_js);
}

/// Polling interval of the D3 and render pollers, in milliseconds.
const POLL_INTERVAL_MS: u32 = 100;
/// Polls before a poller gives up (30 s at the interval above).
const MAX_POLLS: u32 = 300;

/// Build the snippet that queues a call to `window.{function}`.
///
/// Each container has one pending slot, overwritten by newer calls, and a
/// single shared poller serves all slots. Slots that cannot be served
/// within `MAX_POLLS` attempts are discarded and the poller stops when no
/// slots remain.
fn render_call(function: &str, container_id: &str, data_json: &str, config_json: &str) -> String {
    format!(
        r#"
        (function() {{
            var pending = window.__ukcPendingRender = window.__ukcPendingRender || {{}};
            pending[{id}] = {{ fn: {function}, data: {data}, config: {config}, polls: 0 }};
            if (window.__ukcRenderPoll) return;
            window.__ukcRenderPoll = setInterval(function() {{
                var ids = Object.keys(pending);
                if (ids.length === 0) {{
                    clearInterval(window.__ukcRenderPoll);
                    window.__ukcRenderPoll = null;
                    return;
                }}
                ids.forEach(function(id) {{
                    var job = pending[id];
                    job.polls += 1;
                    if (window.__ukcChartsReady &&
                        typeof window[job.fn] === 'function' &&
                        document.getElementById(id)) {{
                        delete pending[id];
                        try {{
                            window[job.fn](id, job.data, job.config);
                        }} catch(e) {{ console.error('[UKC] ' + job.fn + ' error:', e); }}
                    }} else if (job.polls >= {max_polls}) {{
                        delete pending[id];
                        console.warn('[UKC] chart ' + id + ' not rendered: D3 or container unavailable');
                    }}
                }});
            }}, {interval});
        }})();
        "#,
        id = js_string(container_id),
        function = js_string(function),
        data = js_string(data_json),
        config = js_string(config_json),
        max_polls = MAX_POLLS,
        interval = POLL_INTERVAL_MS,
    )
}

/// Layout and series options passed to `renderMonthlyLineChart`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyChartConfig<'a> {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub series: &'a [ukc_climate::chart::Series],
}

/// Render the multi-series monthly line chart into `container_id`.
pub fn render_monthly_chart(container_id: &str, data_json: &str, config_json: &str) {
    call_js(&render_call(
        "renderMonthlyLineChart",
        container_id,
        data_json,
        config_json,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById({}); if (el) el.innerHTML = '';",
        js_string(container_id)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_call_quotes_payloads() {
        let js = render_call(
            "renderMonthlyLineChart",
            "chart",
            r#"[{"month":"jan","tmax":7.6}]"#,
            "{\"title\":\"O'Neill\\n\"}",
        );
        assert!(js.contains(r#"pending["chart"] = { fn: "renderMonthlyLineChart", "#));
        assert!(js.contains(r#"data: "[{\"month\":\"jan\",\"tmax\":7.6}]""#));
        // single quotes need no escaping inside a double-quoted literal
        assert!(js.contains("O'Neill"));
    }

    #[test]
    fn test_render_call_reuses_one_poller() {
        let js = render_call("renderMonthlyLineChart", "chart", "[]", "{}");
        // a newer call only overwrites the slot when a poller already runs
        let slot = js.find("pending[\"chart\"] =").unwrap();
        let guard = js.find("if (window.__ukcRenderPoll) return;").unwrap();
        let start = js.find("window.__ukcRenderPoll = setInterval").unwrap();
        assert!(slot < guard && guard < start);
        assert!(js.contains("clearInterval(window.__ukcRenderPoll);"));
    }

    #[test]
    fn test_render_call_gives_up_after_max_polls() {
        let js = render_call("renderMonthlyLineChart", "chart", "[]", "{}");
        assert!(js.contains(&format!("job.polls >= {}", MAX_POLLS)));
        assert!(js.contains(&format!("}}, {});", POLL_INTERVAL_MS)));
        assert_eq!(js.matches("setInterval").count(), 1);
    }

    #[test]
    fn test_chart_config_carries_title() {
        let series = ukc_climate::chart::series_for(&[ukc_climate::dataset::Dataset::Tmax]);
        let config = MonthlyChartConfig {
            title: "Wales 1947".to_string(),
            width: 800,
            height: 450,
            series: &series,
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["title"], "Wales 1947");
        assert_eq!(json["series"][0]["key"], "tmax");
        assert!(MONTHLY_LINE_CHART_JS.contains("config.title"));
    }

    #[test]
    fn test_js_string() {
        assert_eq!(js_string("a\"b"), r#""a\"b""#);
        assert_eq!(js_string("line\nbreak"), r#""line\nbreak""#);
    }
}
