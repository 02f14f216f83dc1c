//! Scroll and timer math behind the decorative effects. Kept free of DOM
//! access so the components only feed numbers in.

/// Fraction of the viewport an element's top must cross before it reveals.
pub const REVEAL_RATIO: f64 = 0.85;
pub const NAV_SCROLLED_AT: f64 = 40.0;
pub const COUNTER_DURATION_MS: u32 = 1600;
pub const COUNTER_TICK_MS: u32 = 16;
pub const CAROUSEL_INTERVAL_MS: u32 = 2500;

/// How far down the page the reader is, in `[0, 1]`.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

pub fn hero_opacity(scroll_y: f64, viewport_height: f64) -> f64 {
    if viewport_height <= 0.0 {
        return 1.0;
    }
    (1.0 - scroll_y / viewport_height).clamp(0.0, 1.0)
}

pub fn back_to_top_visible(scroll_y: f64, viewport_height: f64) -> bool {
    scroll_y > viewport_height
}

pub fn should_reveal(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height * REVEAL_RATIO
}

/// Next reveal flag. Once revealed, stays revealed; an unmounted node never reveals.
pub fn reveal_state(revealed: bool, element_top: Option<f64>, viewport_height: f64) -> bool {
    revealed || element_top.map_or(false, |top| should_reveal(top, viewport_height))
}

fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Value a counter shows `elapsed_ms` into its run. Lands exactly on `target`.
pub fn counter_value(target: u32, elapsed_ms: u32, duration_ms: u32) -> u32 {
    if duration_ms == 0 || elapsed_ms >= duration_ms {
        return target;
    }
    let t = f64::from(elapsed_ms) / f64::from(duration_ms);
    (f64::from(target) * ease_out_cubic(t)).round() as u32
}

pub fn next_word(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + 1) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_clamps_and_handles_short_pages() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(-20.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(100.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn hero_fades_over_one_viewport() {
        assert_eq!(hero_opacity(0.0, 800.0), 1.0);
        assert_eq!(hero_opacity(400.0, 800.0), 0.5);
        assert_eq!(hero_opacity(1600.0, 800.0), 0.0);
        assert_eq!(hero_opacity(100.0, 0.0), 1.0);
    }

    #[test]
    fn back_to_top_after_first_screen() {
        assert!(!back_to_top_visible(500.0, 800.0));
        assert!(back_to_top_visible(801.0, 800.0));
    }

    #[test]
    fn reveal_threshold() {
        assert!(should_reveal(600.0, 800.0));
        assert!(!should_reveal(700.0, 800.0));
        assert!(should_reveal(-50.0, 800.0));
    }

    #[test]
    fn reveal_is_sticky() {
        assert!(!reveal_state(false, None, 800.0));
        assert!(!reveal_state(false, Some(780.0), 800.0));
        assert!(reveal_state(false, Some(100.0), 800.0));
        // scrolled back above the fold, or node gone
        assert!(reveal_state(true, Some(5000.0), 800.0));
        assert!(reveal_state(true, None, 800.0));
    }

    #[test]
    fn counter_runs_from_zero_to_target() {
        assert_eq!(counter_value(250, 0, COUNTER_DURATION_MS), 0);
        assert_eq!(counter_value(250, COUNTER_DURATION_MS, COUNTER_DURATION_MS), 250);
        assert_eq!(counter_value(250, 10_000, COUNTER_DURATION_MS), 250);
        assert_eq!(counter_value(250, 5, 0), 250);

        let mut last = 0;
        for elapsed in (0..=COUNTER_DURATION_MS).step_by(COUNTER_TICK_MS as usize) {
            let value = counter_value(250, elapsed, COUNTER_DURATION_MS);
            assert!(value >= last);
            assert!(value <= 250);
            last = value;
        }
    }

    #[test]
    fn counter_eases_out() {
        // more than half the distance is covered in the first half of the run
        assert!(counter_value(100, 800, 1600) > 50);
    }

    #[test]
    fn carousel_wraps() {
        assert_eq!(next_word(0, 3), 1);
        assert_eq!(next_word(2, 3), 0);
        assert_eq!(next_word(0, 0), 0);
    }
}
