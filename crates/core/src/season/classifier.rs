//! Season classification for a stay.

use chrono::NaiveDate;

use super::season_model::{Season, SeasonWindow};

/// Classifies a stay against the configured high-season window.
///
/// The test is an endpoint-inclusive overlap on the closed interval
/// `[window start, window end]`: the stay is high season when its start or
/// its end date falls inside the window. A stay that straddles the whole
/// window with neither endpoint inside it classifies low.
pub fn classify(stay_start: NaiveDate, stay_end: NaiveDate, window: &SeasonWindow) -> Season {
    let (window_start, window_end) = match (window.high_season_start, window.high_season_end) {
        (Some(start), Some(end)) => (start, end),
        _ => return Season::Low,
    };

    let inside = |date: NaiveDate| date >= window_start && date <= window_end;
    if inside(stay_start) || inside(stay_end) {
        Season::High
    } else {
        Season::Low
    }
}
