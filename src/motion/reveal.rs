//! Reveal animations expressed as inline CSS.
//!
//! A `Motion` describes where an element starts (faded, offset, scaled) and
//! how it settles. Before it is activated the element sits in its start
//! state; once active it plays the shared `bm-reveal` keyframes, reading the
//! start state from custom properties. Nothing here touches the DOM.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Power1Out,
    Power2Out,
    BackOut,
}

impl Ease {
    pub fn css(self) -> &'static str {
        match self {
            Ease::Power1Out => "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
            Ease::Power2Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Ease::BackOut => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

fn ms(seconds: f64) -> i64 {
    (seconds * 1000.0).round() as i64
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub duration: f64,
    pub delay: f64,
    pub ease: Ease,
}

impl Motion {
    pub const fn fade() -> Self {
        Self {
            opacity: 0.0,
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            duration: 0.6,
            delay: 0.0,
            ease: Ease::Power2Out,
        }
    }

    /// Fade in while moving up from `y` pixels below.
    pub const fn rise(y: f64) -> Self {
        Self { y, ..Self::fade() }
    }

    /// Fade in while sliding in from `x` pixels to the side.
    pub const fn slide(x: f64) -> Self {
        Self { x, ..Self::fade() }
    }

    pub const fn zoom(scale: f64) -> Self {
        Self { scale, ..Self::fade() }
    }

    pub const fn duration(self, duration: f64) -> Self {
        Self { duration, ..self }
    }

    pub const fn delay(self, delay: f64) -> Self {
        Self { delay, ..self }
    }

    pub const fn ease(self, ease: Ease) -> Self {
        Self { ease, ..self }
    }

    pub const fn scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    fn transform(&self) -> String {
        format!("translate({}px, {}px) scale({})", self.x, self.y, self.scale)
    }

    pub fn hidden_style(&self) -> String {
        format!("opacity: {}; transform: {};", self.opacity, self.transform())
    }

    /// Inline style for the `index`-th element of a group revealed together.
    pub fn style(&self, active: bool, index: usize, stagger: f64) -> String {
        if !active {
            return self.hidden_style();
        }
        let delay = self.delay + index as f64 * stagger;
        format!(
            "--bm-from-opacity: {}; --bm-from-transform: {}; animation: bm-reveal {}ms {} {}ms both;",
            self.opacity,
            self.transform(),
            ms(self.duration),
            self.ease.css(),
            ms(delay),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct TimelineStep {
    motion: Motion,
    start: f64,
}

/// A sequence of motions where each one starts relative to the end of the
/// sequence so far. A negative offset overlaps the previous steps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    steps: Vec<TimelineStep>,
    end: f64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(self, motion: Motion) -> Self {
        self.staggered(motion, 0.0, 0.0, 1)
    }

    pub fn at(self, motion: Motion, offset: f64) -> Self {
        self.staggered(motion, offset, 0.0, 1)
    }

    /// A step covering `count` elements started `stagger` seconds apart.
    pub fn staggered(mut self, motion: Motion, offset: f64, stagger: f64, count: usize) -> Self {
        let start = (self.end + offset).max(0.0) + motion.delay;
        let span = motion.duration + stagger * count.saturating_sub(1) as f64;
        self.end = self.end.max(start + span);
        self.steps.push(TimelineStep { motion, start });
        self
    }

    #[cfg(test)]
    pub fn starts(&self) -> Vec<f64> {
        self.steps.iter().map(|s| s.start).collect()
    }

    #[cfg(test)]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// The step's motion with its delay resolved to an absolute start time.
    pub fn step(&self, index: usize) -> Motion {
        self.steps
            .get(index)
            .map(|s| s.motion.delay(s.start))
            .unwrap_or_else(Motion::fade)
    }
}

/// Start an animation once the element's top edge crosses `start` of the
/// viewport height (0.0 = top, 1.0 = bottom).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trigger {
    pub start: f64,
}

impl Trigger {
    pub const fn at(start: f64) -> Self {
        Self { start }
    }

    pub fn root_margin(&self) -> String {
        let shrink = ((1.0 - self.start.clamp(0.0, 1.0)) * 100.0).round() as i64;
        format!("0px 0px -{}% 0px", shrink)
    }
}

pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Value shown by a counter animating from 0 to `target` over `duration` seconds.
pub fn count_at(elapsed: f64, duration: f64, target: u32) -> u32 {
    if duration <= 0.0 {
        return target;
    }
    (f64::from(target) * ease_out_cubic(elapsed / duration)).round() as u32
}

/// Shared keyframes the inline styles refer to.
pub const KEYFRAMES: &str = r#"
@keyframes bm-reveal {
    from {
        opacity: var(--bm-from-opacity, 0);
        transform: var(--bm-from-transform, none);
    }
    to {
        opacity: 1;
        transform: none;
    }
}
@keyframes bm-grow {
    from { width: 0; }
    to { width: 100%; }
}
@media (prefers-reduced-motion: reduce) {
    * { animation-duration: 1ms !important; animation-delay: 0ms !important; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: &[f64], b: &[f64]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-9)
    }

    #[test]
    fn inactive_motion_sits_in_start_state() {
        let style = Motion::rise(30.0).style(false, 3, 0.1);
        assert_eq!(style, "opacity: 0; transform: translate(0px, 30px) scale(1);");
    }

    #[test]
    fn stagger_adds_to_delay() {
        let motion = Motion::rise(30.0).duration(0.7).delay(0.2);
        let style = motion.style(true, 2, 0.15);
        assert!(style.contains("animation: bm-reveal 700ms"));
        assert!(style.ends_with(" 500ms both;"), "{style}");
    }

    #[test]
    fn hero_timeline_overlaps_like_the_design() {
        let motion = Motion::rise(50.0).duration(0.8);
        let timeline = Timeline::new()
            .then(Motion::fade().duration(1.0))
            .at(motion, -0.5)
            .at(Motion::rise(30.0).duration(0.8), -0.6)
            .staggered(Motion::rise(20.0).duration(0.6), -0.4, 0.2, 2);

        assert!(close(&timeline.starts(), &[0.0, 0.5, 0.7, 1.1]), "{:?}", timeline.starts());
        assert!((timeline.end() - 1.9).abs() < 1e-9);
        assert_eq!(timeline.step(1).delay, 0.5);
    }

    #[test]
    fn offsets_never_start_before_zero() {
        let timeline = Timeline::new().at(Motion::fade(), -2.0);
        assert_eq!(timeline.starts(), vec![0.0]);
    }

    #[test]
    fn trigger_maps_to_root_margin() {
        assert_eq!(Trigger::at(0.7).root_margin(), "0px 0px -30% 0px");
        assert_eq!(Trigger::at(0.8).root_margin(), "0px 0px -20% 0px");
        assert_eq!(Trigger::at(0.9).root_margin(), "0px 0px -10% 0px");
    }

    #[test]
    fn counter_eases_to_target() {
        assert_eq!(count_at(0.0, 2.0, 500), 0);
        assert_eq!(count_at(2.0, 2.0, 500), 500);
        assert_eq!(count_at(5.0, 2.0, 500), 500);
        let halfway = count_at(1.0, 2.0, 500);
        assert!(halfway > 250 && halfway < 500, "{halfway}");
        assert_eq!(count_at(0.3, 0.0, 98), 98);
    }
}
