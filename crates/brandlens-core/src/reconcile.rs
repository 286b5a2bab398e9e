use crate::types::RiskEvent;

/// Merge candidate events into the final time-ordered sequence.
///
/// Single left-to-right pass: an event is kept unless a previously
/// *retained* event shares its category and starts within
/// `window_secs` of it. Dropped events are never compared against
/// again. Callers pass transcript candidates before visual ones, so
/// transcript detections win ties inside a window.
pub fn reconcile_events(events: Vec<RiskEvent>, window_secs: f64) -> Vec<RiskEvent> {
    let mut retained: Vec<RiskEvent> = Vec::with_capacity(events.len());

    for event in events {
        let duplicate = retained.iter().any(|kept| {
            kept.category.id == event.category.id
                && (kept.start_time - event.start_time).abs() < window_secs
        });
        if !duplicate {
            retained.push(event);
        }
    }

    retained.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));
    retained
}
