// SPDX-License-Identifier: MPL-2.0
//! Lightbox component encapsulating state and update logic.
//!
//! The component is a state machine over a fixed, non-empty collection.
//! Every mutation goes through a named transition with its precondition
//! checked up front: navigation wraps, zoom toggles around taps, panning
//! follows a single captured pointer, and teardown happens exactly once.
//! Window-level side effects (fullscreen, unmounting) are returned as
//! [`Effect`] values for the application shell to perform.

use crate::error::Error;
use crate::gallery::cache::ImageCache;
use crate::gallery::loader::{self, LoadedImage};
use crate::gallery::{ImageCollection, ImageItem};
use crate::ui::lightbox::drag::{DragSession, PointerId};
use crate::ui::lightbox::geometry;
use crate::ui::lightbox::pan::{PanLimits, PanOffset};
use crate::ui::lightbox::transition::{
    Curve, Transform, Transition, DRAG_FOLLOW_DURATION, SETTLE_DURATION,
};
use iced::{event, keyboard, mouse, time, touch, window, Point, Size, Subscription, Task};
use std::time::{Duration, Instant};

/// Magnification applied over the fitted size when the image is zoomed.
pub const ZOOM_FACTOR: f32 = 2.0;

/// Delay between automatic slideshow advances.
pub const SLIDESHOW_INTERVAL: Duration = Duration::from_secs(3);

/// Frame interval while a transition or the loading spinner is animating.
const ANIMATION_FRAME: Duration = Duration::from_millis(16);

/// Spinner rotation per animation frame (180° per second at 60 FPS).
const SPINNER_ROTATION_SPEED: f32 = std::f32::consts::PI / 60.0;

/// Messages emitted by lightbox widgets and subscriptions.
#[derive(Debug, Clone)]
pub enum Message {
    /// Async image decode finished for the given collection index.
    ImageLoaded {
        index: usize,
        result: Result<LoadedImage, Error>,
    },
    NavigatePressed(NavigationDirection),
    ClosePressed,
    FullscreenPressed,
    SlideshowPressed,
    /// The window reported its actual mode after a fullscreen request.
    FullscreenChanged(bool),
    SlideshowTick,
    AnimationTick(Instant),
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
}

/// Direction of travel through the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    Previous,
    Next,
}

impl NavigationDirection {
    /// Index step applied before wrapping.
    #[must_use]
    pub fn step(self) -> isize {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

/// Side effects the application shell should perform after handling a
/// lightbox message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Ask the windowing system for the given fullscreen state. The
    /// lightbox's own flag only flips once [`Message::FullscreenChanged`]
    /// reports the outcome back.
    SetFullscreen(bool),
    /// Tear the lightbox down: leave fullscreen if needed, then unmount.
    Close,
}

/// Teardown guard. Once closing, every further message is dropped so the
/// close notification cannot be emitted twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CloseState {
    Open,
    Closing,
}

/// Loading status of the image at the current index.
#[derive(Debug, Clone)]
pub enum ImageLoadState {
    Loading,
    Ready(LoadedImage),
    Failed { file: String },
}

/// What the active press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PressTarget {
    Image,
    Backdrop,
}

/// The press currently being tracked. At most one exists at a time; other
/// pointers are ignored until it ends.
#[derive(Debug, Clone, Copy)]
struct ActivePress {
    target: PressTarget,
    session: DragSession,
}

/// Complete lightbox component state.
#[derive(Debug)]
pub struct State {
    collection: ImageCollection,
    current_index: usize,
    image: ImageLoadState,
    cache: ImageCache,
    close_state: CloseState,
    fullscreen: bool,
    slideshow_active: bool,
    zoomed: bool,
    pan: PanOffset,
    active_press: Option<ActivePress>,
    cursor_position: Option<Point>,
    viewport: Size,
    transition: Option<Transition>,
    last_tick: Option<Instant>,
    spinner_rotation: f32,
}

impl State {
    /// Opens the lightbox on `collection` at `initial_index`, clamped into
    /// range. The returned task loads the first image.
    pub fn new(
        collection: ImageCollection,
        initial_index: usize,
        viewport: Size,
    ) -> (Self, Task<Message>) {
        let current_index = collection.clamp_index(initial_index);
        let mut state = Self {
            collection,
            current_index,
            image: ImageLoadState::Loading,
            cache: ImageCache::new(),
            close_state: CloseState::Open,
            fullscreen: false,
            slideshow_active: false,
            zoomed: false,
            pan: PanOffset::ZERO,
            active_press: None,
            cursor_position: None,
            viewport,
            transition: None,
            last_tick: None,
            spinner_rotation: 0.0,
        };
        let task = state.load_current();
        (state, task)
    }

    /// Timer subscriptions for the open lightbox. The slideshow timer only
    /// exists while the slideshow is active, so stopping it (or unmounting
    /// the lightbox) tears the timer down with it.
    pub fn subscription(&self) -> Subscription<Message> {
        let slideshow = if self.slideshow_active {
            time::every(SLIDESHOW_INTERVAL).map(|_| Message::SlideshowTick)
        } else {
            Subscription::none()
        };

        let animation = if self.needs_animation_frames() {
            time::every(ANIMATION_FRAME).map(Message::AnimationTick)
        } else {
            Subscription::none()
        };

        Subscription::batch([slideshow, animation])
    }

    pub fn handle_message(&mut self, message: Message, now: Instant) -> (Effect, Task<Message>) {
        if self.close_state == CloseState::Closing {
            return (Effect::None, Task::none());
        }

        match message {
            Message::ImageLoaded { index, result } => {
                self.image_loaded(index, result);
                (Effect::None, Task::none())
            }
            Message::NavigatePressed(direction) => (Effect::None, self.navigate(direction, now)),
            Message::ClosePressed => (self.close(), Task::none()),
            Message::FullscreenPressed => (self.toggle_fullscreen(), Task::none()),
            Message::FullscreenChanged(active) => {
                self.fullscreen = active;
                (Effect::None, Task::none())
            }
            Message::SlideshowPressed => {
                self.slideshow_active = !self.slideshow_active;
                (Effect::None, Task::none())
            }
            Message::SlideshowTick => {
                (Effect::None, self.navigate(NavigationDirection::Next, now))
            }
            Message::AnimationTick(instant) => {
                self.animation_tick(instant);
                (Effect::None, Task::none())
            }
            Message::RawEvent { event, .. } => self.handle_raw_event(&event, now),
        }
    }

    /// Whether the window is in confirmed fullscreen mode.
    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    #[must_use]
    pub fn is_slideshow_active(&self) -> bool {
        self.slideshow_active
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    /// Whether a press has travelled past the click threshold.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.active_press
            .as_ref()
            .is_some_and(|press| !press.session.is_click())
    }

    #[must_use]
    pub fn image_state(&self) -> &ImageLoadState {
        &self.image
    }

    /// The item currently displayed.
    #[must_use]
    pub fn current_item(&self) -> Option<&ImageItem> {
        self.collection.get(self.current_index)
    }

    /// Zero-based position and collection length, for the counter.
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        (self.current_index, self.collection.len())
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    /// Transform rendered this frame. Follows the animation clock; before
    /// the first tick of a transition it shows the captured start value.
    #[must_use]
    pub fn render_transform(&self) -> Transform {
        match (self.transition.as_ref(), self.last_tick) {
            (Some(transition), Some(tick)) => transition.sample(self.target_transform(), tick),
            _ => self.target_transform(),
        }
    }

    /// Moves to the adjacent image, wrapping at both ends. Zoom is kept,
    /// the pan recenters, and any in-flight press is abandoned. The load
    /// for the previous index may still resolve; its result is dropped.
    fn navigate(&mut self, direction: NavigationDirection, now: Instant) -> Task<Message> {
        let next_index = self.collection.wrap_step(self.current_index, direction.step());

        self.begin_transition(SETTLE_DURATION, Curve::EaseOutCubic, now);
        self.pan = PanOffset::ZERO;
        self.active_press = None;

        if next_index == self.current_index {
            // Single image: wrapping lands on the same item, skip the reload
            return Task::none();
        }

        self.current_index = next_index;
        self.load_current()
    }

    /// Requests the opposite window mode. `fullscreen` itself is only
    /// updated by [`Message::FullscreenChanged`], so a denied request
    /// leaves the state truthful.
    fn toggle_fullscreen(&self) -> Effect {
        Effect::SetFullscreen(!self.fullscreen)
    }

    /// Begins teardown. The shell exits fullscreen first if needed and
    /// unmounts afterwards; the `Closing` guard makes repeated close
    /// requests no-ops in the meantime.
    fn close(&mut self) -> Effect {
        self.close_state = CloseState::Closing;
        self.slideshow_active = false;
        self.active_press = None;
        Effect::Close
    }

    /// Switches between fitted and magnified display, recentering in both
    /// directions.
    fn toggle_zoom(&mut self, now: Instant) {
        self.begin_transition(SETTLE_DURATION, Curve::EaseOutCubic, now);
        self.zoomed = !self.zoomed;
        self.pan = PanOffset::ZERO;
    }

    /// Starts tracking a press. Ignored while another pointer holds the
    /// session.
    fn pointer_down(&mut self, pointer: PointerId, position: Point, now: Instant) {
        if self.active_press.is_some() {
            return;
        }

        let target = if self.is_over_image(position, now) {
            PressTarget::Image
        } else {
            PressTarget::Backdrop
        };

        self.active_press = Some(ActivePress {
            target,
            session: DragSession::begin(pointer, position, self.pan),
        });
    }

    /// Tracks pointer movement. Past the click threshold a press over the
    /// magnified image pans it, clamped to the viewport edges.
    fn pointer_moved(&mut self, pointer: PointerId, position: Point, now: Instant) {
        let Some(press) = self.active_press.as_mut() else {
            return;
        };
        if press.session.pointer() != pointer {
            return;
        }

        press.session.track(position);
        let press = *press;

        if press.target == PressTarget::Image && self.zoomed && !press.session.is_click() {
            self.pan = self.pan_limits().clamp(press.session.pan_target(position));
            self.begin_transition(DRAG_FOLLOW_DURATION, Curve::Linear, now);
        }
    }

    /// Ends the session. A click toggles zoom on the image or closes from
    /// the backdrop; a drag keeps whatever pan it produced.
    fn pointer_up(&mut self, pointer: PointerId, now: Instant) -> (Effect, Task<Message>) {
        let Some(press) = self
            .active_press
            .take_if(|press| press.session.pointer() == pointer)
        else {
            return (Effect::None, Task::none());
        };

        if press.session.is_click() {
            match press.target {
                PressTarget::Image => self.toggle_zoom(now),
                PressTarget::Backdrop => return (self.close(), Task::none()),
            }
        } else if press.target == PressTarget::Image && self.zoomed {
            // Ease out the last bit of distance between render and target
            self.begin_transition(SETTLE_DURATION, Curve::EaseOutCubic, now);
        }

        (Effect::None, Task::none())
    }

    /// Ends the session without click semantics. Used when the pointer is
    /// lost: the cursor left the window or the system cancelled the touch.
    fn pointer_cancelled(&mut self, pointer: PointerId, now: Instant) {
        let cancelled = self
            .active_press
            .take_if(|press| press.session.pointer() == pointer)
            .is_some();

        if cancelled && self.zoomed {
            self.begin_transition(SETTLE_DURATION, Curve::EaseOutCubic, now);
        }
    }

    /// Caches a finished decode and displays it, unless the user has
    /// navigated away while it was in flight. Stale decodes still land in
    /// the cache so stepping back to them is instant.
    fn image_loaded(&mut self, index: usize, result: Result<LoadedImage, Error>) {
        if let (Ok(image), Some(item)) = (&result, self.collection.get(index)) {
            self.cache.insert(item.path.clone(), image.clone());
        }

        if index != self.current_index {
            return;
        }

        self.image = match result {
            Ok(image) => ImageLoadState::Ready(image),
            Err(error) => {
                let file = self
                    .collection
                    .get(index)
                    .map(ImageItem::file_name)
                    .unwrap_or_default();
                eprintln!("Failed to load {file}: {error}");
                ImageLoadState::Failed { file }
            }
        };

        self.clamp_pan();
    }

    fn viewport_resized(&mut self, size: Size) {
        self.viewport = size;
        self.clamp_pan();
    }

    fn animation_tick(&mut self, now: Instant) {
        self.last_tick = Some(now);

        if matches!(self.image, ImageLoadState::Loading) {
            self.spinner_rotation =
                (self.spinner_rotation + SPINNER_ROTATION_SPEED) % (2.0 * std::f32::consts::PI);
        }

        if self
            .transition
            .is_some_and(|transition| transition.is_finished(now))
        {
            self.transition = None;
        }
    }

    fn handle_raw_event(&mut self, event: &event::Event, now: Instant) -> (Effect, Task<Message>) {
        match event {
            event::Event::Window(window::Event::Resized(size)) => {
                self.viewport_resized(*size);
                (Effect::None, Task::none())
            }
            event::Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event, now),
            event::Event::Touch(touch_event) => self.handle_touch_event(touch_event, now),
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                self.handle_key_pressed(key, now)
            }
            _ => (Effect::None, Task::none()),
        }
    }

    fn handle_mouse_event(
        &mut self,
        event: &mouse::Event,
        now: Instant,
    ) -> (Effect, Task<Message>) {
        match event {
            mouse::Event::CursorMoved { position } => {
                self.cursor_position = Some(*position);
                self.pointer_moved(PointerId::Mouse, *position, now);
                (Effect::None, Task::none())
            }
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                // Presses carry no position; use the last known cursor spot
                if let Some(position) = self.cursor_position {
                    self.pointer_down(PointerId::Mouse, position, now);
                }
                (Effect::None, Task::none())
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => {
                self.pointer_up(PointerId::Mouse, now)
            }
            mouse::Event::CursorLeft => {
                self.cursor_position = None;
                self.pointer_cancelled(PointerId::Mouse, now);
                (Effect::None, Task::none())
            }
            _ => (Effect::None, Task::none()),
        }
    }

    fn handle_touch_event(
        &mut self,
        event: &touch::Event,
        now: Instant,
    ) -> (Effect, Task<Message>) {
        match event {
            touch::Event::FingerPressed { id, position } => {
                self.pointer_down(PointerId::Touch(id.0), *position, now);
                (Effect::None, Task::none())
            }
            touch::Event::FingerMoved { id, position } => {
                self.pointer_moved(PointerId::Touch(id.0), *position, now);
                (Effect::None, Task::none())
            }
            touch::Event::FingerLifted { id, .. } => self.pointer_up(PointerId::Touch(id.0), now),
            touch::Event::FingerLost { id, .. } => {
                self.pointer_cancelled(PointerId::Touch(id.0), now);
                (Effect::None, Task::none())
            }
        }
    }

    fn handle_key_pressed(
        &mut self,
        key: &keyboard::Key,
        now: Instant,
    ) -> (Effect, Task<Message>) {
        match key {
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => self.handle_message(
                Message::NavigatePressed(NavigationDirection::Previous),
                now,
            ),
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                self.handle_message(Message::NavigatePressed(NavigationDirection::Next), now)
            }
            keyboard::Key::Named(keyboard::key::Named::Escape) => (self.close(), Task::none()),
            _ => (Effect::None, Task::none()),
        }
    }

    fn load_current(&mut self) -> Task<Message> {
        let index = self.current_index;
        let Some(item) = self.collection.get(index) else {
            return Task::none();
        };

        if let Some(image) = self.cache.get(&item.path) {
            self.image = ImageLoadState::Ready(image);
            self.clamp_pan();
            return Task::none();
        }

        self.image = ImageLoadState::Loading;
        let path = item.path.clone();
        Task::perform(loader::load_image(path), move |result| {
            Message::ImageLoaded { index, result }
        })
    }

    /// Captures the transform rendered right now, then eases from it toward
    /// whatever target the caller is about to set.
    fn begin_transition(&mut self, duration: Duration, curve: Curve, now: Instant) {
        let from = self.visual_transform(now);
        self.transition = Some(Transition::begin(from, duration, curve, now));
        self.last_tick = Some(now);
    }

    fn visual_transform(&self, now: Instant) -> Transform {
        let target = self.target_transform();
        match &self.transition {
            Some(transition) => transition.sample(target, now),
            None => target,
        }
    }

    fn target_transform(&self) -> Transform {
        Transform {
            scale: if self.zoomed { ZOOM_FACTOR } else { 1.0 },
            pan: self.pan,
        }
    }

    fn is_over_image(&self, position: Point, now: Instant) -> bool {
        let ImageLoadState::Ready(image) = &self.image else {
            return false;
        };

        let transform = self.visual_transform(now);
        geometry::image_rect(
            image.width,
            image.height,
            self.viewport,
            transform.scale,
            transform.pan,
        )
        .contains(position)
    }

    fn pan_limits(&self) -> PanLimits {
        match &self.image {
            ImageLoadState::Ready(image) => {
                let zoom = if self.zoomed { ZOOM_FACTOR } else { 1.0 };
                geometry::pan_limits(image.width, image.height, self.viewport, zoom)
            }
            _ => PanLimits::NONE,
        }
    }

    fn clamp_pan(&mut self) {
        self.pan = self.pan_limits().clamp(self.pan);
    }

    fn needs_animation_frames(&self) -> bool {
        self.transition.is_some() || matches!(self.image, ImageLoadState::Loading)
    }
}
