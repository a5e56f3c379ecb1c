use gloo_timers::callback::Timeout;
use perfume_core::{dom_ids, schedule_dismissal, DismissConfig, Dismissible, Scheduler};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{console, Document, Element};

struct AlertNode(Element);

impl Dismissible for AlertNode {
    fn fade(&self, classes: &[String]) {
        let class_list = self.0.class_list();
        for class in classes {
            if let Err(err) = class_list.add_1(class) {
                console::error_1(&err);
            }
        }
    }

    fn detach(&self) {
        // No-op when the node is already out of the document.
        self.0.remove();
    }
}

/// Browser timers; handles are forgotten so every timeout fires.
#[derive(Clone, Copy)]
struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}

/// Fade out and remove every alert present right now. Alerts added later
/// are not tracked.
pub(crate) fn dismiss_alerts(document: &Document, config: &DismissConfig) -> usize {
    let found = match document.query_selector_all(dom_ids::ALERT_SELECTOR) {
        Ok(found) => found,
        Err(err) => {
            console::error_1(&err);
            return 0;
        }
    };

    let alerts: Vec<AlertNode> = (0..found.length())
        .filter_map(|index| found.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(AlertNode)
        .collect();

    let scheduled = schedule_dismissal(alerts, &TimeoutScheduler, config);
    if scheduled > 0 {
        console::log_1(&JsValue::from_str(&format!(
            "Dismissing {scheduled} alert(s) at {} ms",
            config.removal_at_ms()
        )));
    }
    scheduled
}
