//! Two-stage dismissal of flash alerts: fade, then detach.

use std::rc::Rc;

use crate::config::DismissConfig;

/// An alert that can be faded out and removed from the page.
///
/// Both operations swallow their own failures. `detach` must accept a node
/// that other code already removed.
pub trait Dismissible {
    fn fade(&self, classes: &[String]);
    fn detach(&self);
}

/// Runs a one-shot task after a delay in milliseconds. Tasks are never
/// cancelled.
pub trait Scheduler: Clone + 'static {
    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Schedule the fade and the removal of every alert, each on its own timers.
/// Returns the number of alerts scheduled.
pub fn schedule_dismissal<I, A, S>(alerts: I, scheduler: &S, config: &DismissConfig) -> usize
where
    I: IntoIterator<Item = A>,
    A: Dismissible + 'static,
    S: Scheduler,
{
    let classes: Rc<[String]> = config.fade_classes.clone().into();
    let removal_delay = config.removal_delay_ms;

    let mut scheduled = 0;
    for alert in alerts {
        let classes = Rc::clone(&classes);
        let next = scheduler.clone();
        scheduler.defer(
            config.fade_delay_ms,
            Box::new(move || {
                alert.fade(&classes);
                next.defer(removal_delay, Box::new(move || alert.detach()));
            }),
        );
        scheduled += 1;
    }
    scheduled
}
