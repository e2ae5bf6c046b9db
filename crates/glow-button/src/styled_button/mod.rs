//! The styled push-button.
//!
//! [`ButtonWidget`] owns a [`PressableControl`] and keeps it in sync with the
//! current [`Interaction`] state: style, cursor, drop shadow and glow.
//!
//! # Signals
//!
//! - `clicked`: a left-button press on the button was released inside it
//! - `state_changed`: the interaction state changed; carries the new state
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use glow_button::prelude::*;
//!
//! let mut button = ButtonWidget::new("Go", 14, 200, 60);
//!
//! let clicks = Arc::new(AtomicUsize::new(0));
//! let clicks_clone = clicks.clone();
//! button.clicked.connect(move |_| {
//!     clicks_clone.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! let inside = Point::new(100.0, 30.0);
//! button.handle_event(&mut PointerEvent::enter(inside));
//! button.handle_event(&mut PointerEvent::press(inside));
//! button.handle_event(&mut PointerEvent::release(inside));
//!
//! assert_eq!(clicks.load(Ordering::SeqCst), 1);
//! assert_eq!(button.state(), Interaction::Hovered);
//! ```

mod config;
mod state;

pub use config::{ButtonConfig, DEFAULT_FONT_PATH};
pub use state::{Interaction, PointerTrigger, StyleSlot, TransitionEffects};

use glow_core::{Signal, ThreadAffinity};
use glow_core::logging::targets;
use glow_style::{CursorShape, StylePresets, VisualStyle};

use crate::effects::{DropShadow, EffectLevel, Glow, GlowConfig, ShadowConfig};
use crate::error::ResourceLoadError;
use crate::file::ResourceManager;
use crate::font::{FontRegistry, LoadedFont};
use crate::widget::{
    DispatchResult, EnterEvent, HeadlessControl, LeaveEvent, MouseButton, MousePressEvent,
    MouseReleaseEvent, Point, PointerDispatcher, PointerEvent, PointerHandlers, PressableControl,
    Rect, Size,
};

/// Everything needed to paint a button in its current state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonVisuals {
    /// The visible style.
    pub style: VisualStyle,
    /// The drop shadow, with the glow as its input.
    pub shadow: DropShadow,
    /// The glow.
    pub glow: Glow,
    /// The cursor over the button.
    pub cursor: CursorShape,
    /// The interaction state.
    pub state: Interaction,
}

/// A push-button with hover/press feedback and a glowing drop shadow.
///
/// See the [module documentation](self) for an example.
///
/// # Thread Safety
///
/// A button must be used from the thread that created it. Debug builds
/// panic when a mutating method is called from another thread.
#[derive(Debug)]
pub struct ButtonWidget<C = HeadlessControl> {
    control: C,
    text: String,
    preferred_size: Size,
    font: LoadedFont,
    font_error: Option<ResourceLoadError>,

    presets: StylePresets,
    visible_style: VisualStyle,
    shadow_config: ShadowConfig,
    glow_config: GlowConfig,
    /// The live shadow; its input is the live glow.
    shadow: DropShadow,
    cursor: CursorShape,
    state: Interaction,

    /// Whether the shadow area counts for hit-testing.
    pick_on_bounds: bool,
    /// A left press landed on the button and was not released yet.
    press_started: bool,
    dispatcher: PointerDispatcher,
    affinity: ThreadAffinity,

    /// Emitted when a left-button press is released inside the button.
    pub clicked: Signal<()>,
    /// Emitted with the new state whenever the interaction state changes.
    pub state_changed: Signal<Interaction>,
}

impl ButtonWidget<HeadlessControl> {
    /// Create a headless button, falling back to the system sans-serif font
    /// when the label font cannot be loaded.
    ///
    /// The load error, if any, stays available via
    /// [`font_load_error`](Self::font_load_error).
    pub fn new(text: impl Into<String>, font_size: u32, width: u32, height: u32) -> Self {
        Self::with_config(text, font_size, width, height, ButtonConfig::default())
    }

    /// Create a headless button, failing when the label font cannot be loaded.
    pub fn try_new(
        text: impl Into<String>,
        font_size: u32,
        width: u32,
        height: u32,
    ) -> Result<Self, ResourceLoadError> {
        Self::try_with_config(text, font_size, width, height, ButtonConfig::default())
    }

    /// Create a headless button from `config`, recovering from font errors.
    pub fn with_config(
        text: impl Into<String>,
        font_size: u32,
        width: u32,
        height: u32,
        config: ButtonConfig,
    ) -> Self {
        Self::with_control(HeadlessControl::new(), text, font_size, width, height, config)
    }

    /// Create a headless button from `config`, failing on font errors.
    pub fn try_with_config(
        text: impl Into<String>,
        font_size: u32,
        width: u32,
        height: u32,
        config: ButtonConfig,
    ) -> Result<Self, ResourceLoadError> {
        Self::try_with_control(HeadlessControl::new(), text, font_size, width, height, config)
    }
}

impl<C: PressableControl> ButtonWidget<C> {
    /// Wrap `control`, recovering from font errors.
    pub fn with_control(
        control: C,
        text: impl Into<String>,
        font_size: u32,
        width: u32,
        height: u32,
        config: ButtonConfig,
    ) -> Self {
        let size = font_size as f32;
        let (font, font_error) = match load_label_font(&config, size) {
            Ok(font) => (font, None),
            Err(err) => {
                tracing::warn!(
                    target: targets::FONT,
                    path = %config.font_path,
                    error = %err,
                    "label font unavailable, using system sans-serif"
                );
                (FontRegistry::global().fallback(&config.font, size), Some(err))
            }
        };

        Self::build(control, text.into(), font, font_error, width, height, config)
    }

    /// Wrap `control`, failing when the label font cannot be loaded.
    pub fn try_with_control(
        control: C,
        text: impl Into<String>,
        font_size: u32,
        width: u32,
        height: u32,
        config: ButtonConfig,
    ) -> Result<Self, ResourceLoadError> {
        let font = load_label_font(&config, font_size as f32)?;
        Ok(Self::build(control, text.into(), font, None, width, height, config))
    }

    fn build(
        mut control: C,
        text: String,
        font: LoadedFont,
        font_error: Option<ResourceLoadError>,
        width: u32,
        height: u32,
        config: ButtonConfig,
    ) -> Self {
        let ButtonConfig {
            shadow: shadow_config,
            glow: glow_config,
            presets,
            ..
        } = config;

        let preferred_size = Size::new(width as f32, height as f32);
        let shadow = DropShadow::from_config(
            &shadow_config,
            EffectLevel::Default,
            Glow::new(glow_config.level_default),
        );

        control.set_label(&text);
        control.set_preferred_size(preferred_size);
        control.set_font(&font);
        control.set_cursor(CursorShape::Arrow);
        control.apply_style(&presets.default);
        control.apply_effect(&shadow);

        tracing::debug!(
            target: targets::INTERACTION,
            text = %text,
            width,
            height,
            font = font.family(),
            fallback_font = font.is_fallback(),
            "button created"
        );

        Self {
            control,
            text,
            preferred_size,
            font,
            font_error,
            presets,
            visible_style: presets.default,
            shadow_config,
            glow_config,
            shadow,
            cursor: CursorShape::Arrow,
            state: Interaction::Idle,
            pick_on_bounds: false,
            press_started: false,
            dispatcher: PointerDispatcher::new(),
            affinity: ThreadAffinity::current(),
            clicked: Signal::new(),
            state_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The label text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The current interaction state.
    pub fn state(&self) -> Interaction {
        self.state
    }

    /// The style currently shown.
    pub fn visible_style(&self) -> &VisualStyle {
        &self.visible_style
    }

    /// The default/hovered/pressed styles.
    pub fn presets(&self) -> &StylePresets {
        &self.presets
    }

    /// The live drop shadow.
    pub fn shadow(&self) -> &DropShadow {
        &self.shadow
    }

    /// The live glow, which is the shadow's input.
    pub fn glow(&self) -> &Glow {
        &self.shadow.input
    }

    /// The cursor shown over the button.
    pub fn cursor(&self) -> CursorShape {
        self.cursor
    }

    /// The shadow parameters used by the next transition.
    pub fn shadow_config(&self) -> &ShadowConfig {
        &self.shadow_config
    }

    /// The glow parameters used by the next transition.
    pub fn glow_config(&self) -> &GlowConfig {
        &self.glow_config
    }

    /// The label font.
    pub fn font(&self) -> &LoadedFont {
        &self.font
    }

    /// Why the configured font was replaced by the fallback, if it was.
    pub fn font_load_error(&self) -> Option<&ResourceLoadError> {
        self.font_error.as_ref()
    }

    /// The preferred size: the width and height given at construction.
    pub fn size_hint(&self) -> Size {
        self.preferred_size
    }

    /// The wrapped control.
    pub fn control(&self) -> &C {
        &self.control
    }

    /// The wrapped control, mutably. Changes made here are overwritten by
    /// the next transition.
    pub fn control_mut(&mut self) -> &mut C {
        &mut self.control
    }

    /// Whether the shadow area counts for hit-testing. Off by default.
    pub fn is_pick_on_bounds(&self) -> bool {
        self.pick_on_bounds
    }

    /// Set whether the shadow area counts for hit-testing.
    pub fn set_pick_on_bounds(&mut self, pick_on_bounds: bool) {
        self.affinity.debug_assert_same_thread();
        self.pick_on_bounds = pick_on_bounds;
    }

    /// The area hit-testing uses.
    pub fn hit_bounds(&self) -> Rect {
        let bounds = self.control.bounds();
        if self.pick_on_bounds {
            self.shadow.effect_bounds(bounds)
        } else {
            bounds
        }
    }

    /// A snapshot of everything needed to paint the button.
    pub fn visuals(&self) -> ButtonVisuals {
        ButtonVisuals {
            style: self.visible_style,
            shadow: self.shadow,
            glow: self.shadow.input,
            cursor: self.cursor,
            state: self.state,
        }
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Replace the shadow parameters.
    ///
    /// The live shadow is not touched; the new values apply from the next
    /// interaction transition on.
    pub fn set_shadow_attributes(
        &mut self,
        radius_default: f32,
        radius_high: f32,
        spread_default: f32,
        spread_high: f32,
        color: [u8; 3],
    ) {
        self.affinity.debug_assert_same_thread();
        self.shadow_config =
            ShadowConfig::new(radius_default, radius_high, spread_default, spread_high, color);
    }

    /// Replace the glow parameters.
    ///
    /// The live glow is not touched; the new values apply from the next
    /// enter or exit on.
    pub fn set_glow_attributes(&mut self, level_default: f32, level_high: f32) {
        self.affinity.debug_assert_same_thread();
        self.glow_config = GlowConfig::new(level_default, level_high);
    }

    /// Replace the three styles and show the new default style right away.
    ///
    /// The interaction state is not changed, so a pressed button shows its
    /// default style until the next transition.
    pub fn set_style_sheets(
        &mut self,
        default: VisualStyle,
        hovered: VisualStyle,
        pressed: VisualStyle,
    ) {
        self.affinity.debug_assert_same_thread();
        self.presets = StylePresets::new(default, hovered, pressed);
        self.visible_style = default;
        self.control.apply_style(&self.visible_style);

        tracing::debug!(
            target: targets::INTERACTION,
            state = %self.state,
            "style presets replaced, showing default style"
        );
    }

    /// Like [`set_style_sheets`](Self::set_style_sheets), parsing the three
    /// styles from declaration strings.
    ///
    /// `hovered` and `pressed` are parsed on top of `default`.
    pub fn set_style_sheet_strings(&mut self, default: &str, hovered: &str, pressed: &str) {
        let presets = StylePresets::parse(default, hovered, pressed);
        self.set_style_sheets(presets.default, presets.hovered, presets.pressed);
    }

    // =========================================================================
    // Interaction
    // =========================================================================

    /// Route a raw pointer event through the button's dispatcher.
    pub fn handle_event(&mut self, event: &mut PointerEvent) -> DispatchResult {
        let mut dispatcher = self.dispatcher;
        let result = dispatcher.dispatch(self, event);
        self.dispatcher = dispatcher;
        result
    }

    /// Apply `trigger` unconditionally and return the new state.
    ///
    /// This is what each of the four pointer handlers does, minus event
    /// bookkeeping and the `clicked` signal.
    pub fn handle_trigger(&mut self, trigger: PointerTrigger) -> Interaction {
        self.affinity.debug_assert_same_thread();

        let from = self.state;
        let to = from.transition(trigger);
        let effects = trigger.effects();

        self.visible_style = effects.style.select(&self.presets);
        self.control.apply_style(&self.visible_style);

        if let Some(cursor) = effects.cursor {
            self.cursor = cursor;
            self.control.set_cursor(cursor);
        }

        self.shadow.set_level(&self.shadow_config, effects.shadow);
        if let Some(level) = effects.glow {
            self.shadow.input.level = self.glow_config.level(level);
        }
        self.control.apply_effect(&self.shadow);

        self.state = to;

        tracing::debug!(
            target: targets::INTERACTION,
            %from,
            %to,
            %trigger,
            shadow_radius = self.shadow.radius,
            shadow_spread = self.shadow.spread,
            glow = self.shadow.input.level,
            "interaction transition"
        );

        if from != to {
            self.state_changed.emit(to);
        }
        to
    }
}

impl<C: PressableControl> PointerHandlers for ButtonWidget<C> {
    fn on_pointer_enter(&mut self, event: &mut EnterEvent) {
        self.handle_trigger(PointerTrigger::Enter);
        event.base.accept();
    }

    fn on_pointer_exit(&mut self, event: &mut LeaveEvent) {
        self.handle_trigger(PointerTrigger::Exit);
        event.base.accept();
    }

    fn on_pointer_down(&mut self, event: &mut MousePressEvent) {
        if event.button == MouseButton::Left {
            self.press_started = true;
        }
        self.handle_trigger(PointerTrigger::Down);
        event.base.accept();
    }

    fn on_pointer_up(&mut self, event: &mut MouseReleaseEvent) {
        let is_click = event.button == MouseButton::Left
            && self.press_started
            && self.hit_test(event.local_pos);
        if event.button == MouseButton::Left {
            self.press_started = false;
        }

        self.handle_trigger(PointerTrigger::Up);
        event.base.accept();

        if is_click {
            tracing::debug!(target: targets::INTERACTION, text = %self.text, "clicked");
            self.clicked.emit(());
        }
    }

    fn hit_test(&self, pos: Point) -> bool {
        self.hit_bounds().contains(pos)
    }
}

fn load_label_font(config: &ButtonConfig, size: f32) -> Result<LoadedFont, ResourceLoadError> {
    FontRegistry::global().load_resource(ResourceManager::global(), &config.font_path, size)
}

static_assertions::assert_impl_all!(ButtonWidget<HeadlessControl>: Send, Sync);
