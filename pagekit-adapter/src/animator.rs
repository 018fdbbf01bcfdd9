use pagekit::{ContentController, ContentPage, MenuView};

use crate::{Easing, Tween};

/// A running tween plus the animation it was started for.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Track {
    from_offset: f64,
    to_offset: f64,
    tween: Tween,
}

/// Drives the pending animations of a [`MenuView`] and a [`ContentController`] from a frame
/// clock.
///
/// The components only record an animation (start and end offsets plus a completion). Each
/// `tick_*` call samples a progress tween, applies the presentation state and, once the tween
/// is done, finishes the animation so its completion runs. A tween starts on the first tick
/// that sees a new animation, and restarts when the component replaced its animation.
#[derive(Clone, Debug, PartialEq)]
pub struct Animator {
    duration_ms: u64,
    easing: Easing,
    menu: Option<Track>,
    content: Option<Track>,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(250, Easing::EaseInOutCubic)
    }
}

impl Animator {
    pub fn new(duration_ms: u64, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
            menu: None,
            content: None,
        }
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn is_animating(&self) -> bool {
        self.menu.is_some() || self.content.is_some()
    }

    /// Advances the menu animation. Returns `true` while it is still running.
    pub fn tick_menu<C>(&mut self, menu: &mut MenuView<C>, now_ms: u64) -> bool {
        let Some((from, to)) = menu.animation().map(|a| (a.from_offset, a.to_offset)) else {
            self.menu = None;
            return false;
        };
        let track = self.track(Slot::Menu, from, to, now_ms);
        menu.advance_animation(track.tween.sample(now_ms));
        if !track.tween.is_done(now_ms) {
            return true;
        }
        self.menu = None;
        menu.finish_animation(true);
        menu.is_animating()
    }

    /// Advances the content animation. Returns `true` while it is still running.
    pub fn tick_content<P: ContentPage>(
        &mut self,
        content: &mut ContentController<P>,
        now_ms: u64,
    ) -> bool {
        let Some((from, to)) = content.animation().map(|a| (a.from_offset, a.to_offset)) else {
            self.content = None;
            return false;
        };
        let track = self.track(Slot::Content, from, to, now_ms);
        content.advance_animation(track.tween.sample(now_ms));
        if !track.tween.is_done(now_ms) {
            return true;
        }
        self.content = None;
        content.finish_animation(true);
        content.animation().is_some()
    }

    fn track(&mut self, slot: Slot, from_offset: f64, to_offset: f64, now_ms: u64) -> Track {
        let (duration_ms, easing) = (self.duration_ms, self.easing);
        let current = match slot {
            Slot::Menu => &mut self.menu,
            Slot::Content => &mut self.content,
        };
        if let Some(track) = current {
            if track.from_offset == from_offset && track.to_offset == to_offset {
                return *track;
            }
        }
        let track = Track {
            from_offset,
            to_offset,
            tween: Tween::progress(now_ms, duration_ms, easing),
        };
        *current = Some(track);
        track
    }
}

#[derive(Clone, Copy)]
enum Slot {
    Menu,
    Content,
}
