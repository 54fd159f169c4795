//! Highlight that slides to the selected item.

use segmenta_core::{EasedValue, Easing, Rect};

/// Default slide duration in seconds.
pub const THUMB_DURATION: f64 = 0.3;

/// Animated highlight tracking the selected item's bounds.
///
/// The first position is adopted as-is; later moves tween `left` and
/// `width` together.
#[derive(Debug, Clone, PartialEq)]
pub struct Thumb {
    left: EasedValue,
    width: EasedValue,
    index: Option<usize>,
    duration: f64,
    motion: bool,
}

impl Default for Thumb {
    fn default() -> Self {
        Self::new(THUMB_DURATION)
    }
}

impl Thumb {
    /// Create a thumb with the given slide duration.
    #[must_use]
    pub const fn new(duration: f64) -> Self {
        Self {
            left: EasedValue::settled(0.0),
            width: EasedValue::settled(0.0),
            index: None,
            duration,
            motion: true,
        }
    }

    /// Enable or disable motion. Without motion the thumb is never shown.
    pub fn set_motion(&mut self, motion: bool) {
        self.motion = motion;
        if !motion {
            self.settle();
        }
    }

    /// Whether motion is enabled.
    #[must_use]
    pub const fn motion(&self) -> bool {
        self.motion
    }

    /// Whether the thumb is drawn for a control with `option_count` items.
    #[must_use]
    pub const fn is_visible(&self, option_count: usize, selected: Option<usize>) -> bool {
        self.motion && option_count >= 2 && selected.is_some()
    }

    /// Move towards the selected item's bounds.
    pub fn sync(&mut self, target: Option<(usize, Rect)>) {
        let Some((index, rect)) = target else {
            self.index = None;
            return;
        };
        let (left, width) = (f64::from(rect.x), f64::from(rect.width));
        let moved = self.index.is_some_and(|current| current != index);
        if moved && self.motion {
            self.left.retarget(left, self.duration);
            self.width.retarget(width, self.duration);
            self.left.easing = Easing::CubicOut;
            self.width.easing = Easing::CubicOut;
        } else {
            self.left = EasedValue::settled(left);
            self.width = EasedValue::settled(width);
        }
        self.index = Some(index);
    }

    /// Whether the thumb has been placed on an item.
    #[must_use]
    pub const fn is_placed(&self) -> bool {
        self.index.is_some()
    }

    /// Current bounds for the item at `index`, falling back to `target`
    /// when the thumb has not been synced to that item yet.
    #[must_use]
    pub fn rect(&self, index: usize, target: Rect) -> Rect {
        if self.index == Some(index) {
            Rect::new(
                self.left.value() as f32,
                target.y,
                self.width.value() as f32,
                target.height,
            )
        } else {
            target
        }
    }

    /// Advance the slide. Returns true while still moving.
    pub fn update(&mut self, dt: f64) -> bool {
        self.left.update(dt);
        self.width.update(dt);
        self.is_animating()
    }

    /// Whether a slide is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !(self.left.is_complete() && self.width.is_complete())
    }

    /// Jump to the end of any slide in flight.
    pub fn settle(&mut self) {
        self.left = EasedValue::settled(self.left.to);
        self.width = EasedValue::settled(self.width.to);
    }

    /// Inline style placing the thumb relative to `origin_x`.
    #[must_use]
    pub fn style(rect: Rect, origin_x: f32) -> String {
        format!(
            "transform: translateX({}px); width: {}px",
            fmt_px(rect.x - origin_x),
            fmt_px(rect.width)
        )
    }
}

fn fmt_px(v: f32) -> String {
    let rounded = (v * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sync_settles() {
        let mut thumb = Thumb::default();
        thumb.sync(Some((0, Rect::new(2.0, 2.0, 50.0, 28.0))));
        assert!(!thumb.is_animating());
        assert_eq!(
            thumb.rect(0, Rect::new(2.0, 2.0, 50.0, 28.0)),
            Rect::new(2.0, 2.0, 50.0, 28.0)
        );
    }

    #[test]
    fn test_move_animates_then_arrives() {
        let mut thumb = Thumb::default();
        thumb.sync(Some((0, Rect::new(2.0, 2.0, 50.0, 28.0))));
        let target = Rect::new(52.0, 2.0, 70.0, 28.0);
        thumb.sync(Some((1, target)));
        assert!(thumb.is_animating());

        let start = thumb.rect(1, target);
        assert!((start.x - 2.0).abs() < 1e-3);

        assert!(thumb.update(THUMB_DURATION / 2.0));
        let mid = thumb.rect(1, target);
        assert!(mid.x > 2.0 && mid.x < 52.0);

        assert!(!thumb.update(THUMB_DURATION));
        assert_eq!(thumb.rect(1, target), target);
    }

    #[test]
    fn test_resync_same_index_jumps() {
        let mut thumb = Thumb::default();
        thumb.sync(Some((1, Rect::new(10.0, 0.0, 10.0, 10.0))));
        thumb.sync(Some((1, Rect::new(40.0, 0.0, 20.0, 10.0))));
        assert!(!thumb.is_animating());
    }

    #[test]
    fn test_placement_tracks_selection() {
        let mut thumb = Thumb::default();
        assert!(!thumb.is_placed());
        thumb.sync(Some((0, Rect::new(0.0, 0.0, 10.0, 10.0))));
        assert!(thumb.is_placed());
        thumb.sync(None);
        assert!(!thumb.is_placed());
    }

    #[test]
    fn test_unsynced_index_uses_target() {
        let thumb = Thumb::default();
        let target = Rect::new(5.0, 1.0, 9.0, 3.0);
        assert_eq!(thumb.rect(2, target), target);
    }

    #[test]
    fn test_visibility_rules() {
        let mut thumb = Thumb::default();
        assert!(thumb.is_visible(3, Some(0)));
        assert!(!thumb.is_visible(1, Some(0)));
        assert!(!thumb.is_visible(0, None));
        assert!(!thumb.is_visible(3, None));
        thumb.set_motion(false);
        assert!(!thumb.is_visible(3, Some(0)));
    }

    #[test]
    fn test_disabling_motion_settles() {
        let mut thumb = Thumb::default();
        thumb.sync(Some((0, Rect::new(0.0, 0.0, 10.0, 10.0))));
        thumb.sync(Some((1, Rect::new(10.0, 0.0, 10.0, 10.0))));
        thumb.set_motion(false);
        assert!(!thumb.is_animating());
        assert!(!thumb.motion());
    }

    #[test]
    fn test_style() {
        let style = Thumb::style(Rect::new(52.5, 2.0, 70.0, 28.0), 2.0);
        assert_eq!(style, "transform: translateX(50.5px); width: 70px");
    }
}
