use std::time::{Duration, Instant};

use fltk::{app, app::Sender, group::Scroll, prelude::*};

use super::section_view::SectionAnchor;
use crate::app::controllers::scroll_animation::{FRAME_INTERVAL, FrameSchedule, ScrollAnimation};
use crate::app::domain::messages::Message;
use crate::app::services::scroll_tracker::Viewport;

struct Running {
    animation: ScrollAnimation,
    started: Instant,
}

/// The page scroll seen through the `Viewport` trait.
pub struct FltkViewport {
    scroll: Scroll,
    anchors: Vec<SectionAnchor>,
    content_height: i32,
    smooth: bool,
    duration: Duration,
    running: Option<Running>,
    frames: FrameSchedule,
    sender: Sender<Message>,
}

impl FltkViewport {
    pub fn new(scroll: Scroll, smooth: bool, duration: Duration, sender: Sender<Message>) -> Self {
        Self {
            scroll,
            anchors: Vec::new(),
            content_height: 0,
            smooth,
            duration,
            running: None,
            frames: FrameSchedule::default(),
            sender,
        }
    }

    /// Swap in freshly built section widgets. A frame timeout still in
    /// flight stays accounted for in `frames`.
    pub fn set_page(&mut self, anchors: Vec<SectionAnchor>, content_height: i32) {
        self.anchors = anchors;
        self.content_height = content_height;
        self.running = None;
    }

    pub fn max_scroll(&self) -> i32 {
        (self.content_height - self.scroll.h()).max(0)
    }

    /// Jump without animation, clamped to the scrollable range.
    pub fn jump_to(&mut self, y: i32) {
        let y = y.clamp(0, self.max_scroll());
        self.scroll.scroll_to(0, y);
        self.scroll.redraw();
    }

    /// Advance the running animation by one frame and schedule the next one.
    /// Returns `true` while the animation is still running.
    pub fn tick(&mut self) -> bool {
        self.frames.fired();
        let Some(running) = &self.running else {
            return false;
        };
        let elapsed = running.started.elapsed();
        let position = running.animation.position_at(elapsed);
        let finished = running.animation.is_finished(elapsed);
        self.jump_to(position);
        if finished {
            self.running = None;
        } else {
            self.schedule_frame();
        }
        !finished
    }

    fn schedule_frame(&mut self) {
        if !self.frames.request() {
            return;
        }
        let sender = self.sender;
        app::add_timeout3(FRAME_INTERVAL, move |_| sender.send(Message::ScrollAnimationTick));
    }
}

impl Viewport for FltkViewport {
    fn section_top(&self, id: &str) -> Option<i32> {
        self.anchors
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.frame.y() - self.scroll.y())
    }

    fn scroll_position(&self) -> i32 {
        self.scroll.yposition()
    }

    fn scroll_to(&mut self, y: i32, animated: bool) {
        let target = y.clamp(0, self.max_scroll());
        if !(animated && self.smooth) || self.duration.is_zero() {
            self.running = None;
            self.jump_to(target);
            self.sender.send(Message::ScrollChanged);
            return;
        }

        let now = Instant::now();
        let animation = match &self.running {
            Some(running) => running.animation.retarget(now - running.started, target),
            None => ScrollAnimation::new(self.scroll.yposition(), target, self.duration),
        };
        self.running = Some(Running { animation, started: now });
        self.schedule_frame();
    }
}
