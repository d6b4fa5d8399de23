//! Fixed aftermath timeline. Identical for every impact.

use impactor_core::report::TimelineEntry;

/// (time, event) checkpoints in chronological order.
pub const TIMELINE: [(&str, &str); 9] = [
    ("0 seconds", "Asteroid strikes the surface and crater excavation begins"),
    ("1 second", "Fireball expands and thermal radiation ignites the surroundings"),
    ("10 seconds", "Shockwave flattens structures near ground zero"),
    ("1 minute", "Ejecta curtain rises while seismic waves radiate outward"),
    ("10 minutes", "Ballistic debris falls back across the debris field"),
    ("1 hour", "Firestorms spread and dust reaches the upper atmosphere"),
    ("1 day", "Dust veil dims sunlight over the affected region"),
    ("1 month", "Regional temperatures drop and harvests fail"),
    ("1 year", "Climate and ecosystems slowly begin to recover"),
];

/// The timeline as report entries.
pub fn timeline() -> Vec<TimelineEntry> {
    TIMELINE
        .iter()
        .map(|(time, event)| TimelineEntry {
            time: (*time).to_string(),
            event: (*event).to_string(),
        })
        .collect()
}
