mod hit_test;
mod series_filter;

pub use hit_test::{DEFAULT_HIT_BUFFER_RATIO, Hit, HitTester};
pub use series_filter::{SeriesFilterGroup, SeriesFilterObserver};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ScreenPoint, ScreenSize};

/// Pointer travel (in pixels) below which a press/release still counts as a tap.
pub const DEFAULT_TAP_SLOP_PX: f64 = 3.0;

/// Where pinch-zoom keeps data fixed on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ZoomAnchor {
    /// Live pinch location.
    #[default]
    GestureLocation,
    /// Horizontal center of the chart regardless of where the pinch happens.
    ChartCenter,
}

/// Tuning for gesture classification and hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionConfig {
    /// `0.0` restores exact-zero tap detection.
    #[serde(default = "default_tap_slop_px")]
    pub tap_slop_px: f64,
    #[serde(default)]
    pub zoom_anchor: ZoomAnchor,
    #[serde(default = "default_hit_buffer_ratio")]
    pub hit_buffer_ratio: f64,
}

fn default_tap_slop_px() -> f64 {
    DEFAULT_TAP_SLOP_PX
}

fn default_hit_buffer_ratio() -> f64 {
    DEFAULT_HIT_BUFFER_RATIO
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            tap_slop_px: DEFAULT_TAP_SLOP_PX,
            zoom_anchor: ZoomAnchor::default(),
            hit_buffer_ratio: DEFAULT_HIT_BUFFER_RATIO,
        }
    }
}

/// Raw gesture input delivered by the host toolkit.
///
/// Drag translations are cumulative since the pointer went down; pinch
/// magnification is cumulative since the pinch began.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureEvent {
    DragChanged {
        location: ScreenPoint,
        translation: ScreenPoint,
        screen: ScreenSize,
    },
    DragEnded {
        location: ScreenPoint,
        translation: ScreenPoint,
        screen: ScreenSize,
    },
    PinchChanged {
        magnification: f64,
        location: ScreenPoint,
        screen: ScreenSize,
    },
    PinchEnded,
}

/// Viewport mutation requested by the router.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ViewportCommand {
    Zoom {
        scale_factor: f64,
        anchor_screen_x: f64,
        screen_width: f64,
    },
    Pan {
        drag_ratio: f64,
    },
    /// Hit test at `location` and store the result as the selection.
    Select {
        location: ScreenPoint,
        screen: ScreenSize,
    },
    ClearSelection,
}

pub type ViewportCommands = SmallVec<[ViewportCommand; 2]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GesturePhase {
    #[default]
    Idle,
    /// Pointer down, travel still within the tap slop.
    Pressed,
    Dragging,
    Pinching,
    /// Pinch released while its companion drag is still down; that drag
    /// no longer pans.
    Settling,
}

/// Classifies gestures and turns them into viewport commands.
///
/// The router owns no viewport state; it only remembers enough of the
/// current gesture to produce incremental pan distances and zoom steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureRouter {
    config: InteractionConfig,
    phase: GesturePhase,
    applied_translation_x: f64,
    last_magnification: f64,
    drag_in_flight: bool,
}

impl Default for GestureRouter {
    fn default() -> Self {
        Self::new(InteractionConfig::default())
    }
}

impl GestureRouter {
    #[must_use]
    pub fn new(config: InteractionConfig) -> Self {
        Self {
            config,
            phase: GesturePhase::Idle,
            applied_translation_x: 0.0,
            last_magnification: 1.0,
            drag_in_flight: false,
        }
    }

    #[must_use]
    pub fn config(&self) -> InteractionConfig {
        self.config
    }

    pub fn set_config(&mut self, config: InteractionConfig) {
        self.config = config;
    }

    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// `true` when a release after `translation` counts as a tap.
    #[must_use]
    pub fn is_tap(&self, translation: ScreenPoint) -> bool {
        let travel = translation.length();
        if self.config.tap_slop_px > 0.0 {
            travel <= self.config.tap_slop_px
        } else {
            travel == 0.0
        }
    }

    pub fn route(&mut self, event: GestureEvent) -> ViewportCommands {
        let mut commands = ViewportCommands::new();
        match event {
            GestureEvent::DragChanged {
                translation,
                screen,
                ..
            } => match self.phase {
                GesturePhase::Pinching | GesturePhase::Settling => {
                    self.drag_in_flight = true;
                    if translation.x.is_finite() {
                        self.applied_translation_x = translation.x;
                    }
                }
                GesturePhase::Idle | GesturePhase::Pressed => {
                    if self.phase == GesturePhase::Idle {
                        self.applied_translation_x = 0.0;
                    }
                    if self.is_tap(translation) {
                        self.phase = GesturePhase::Pressed;
                    } else {
                        self.phase = GesturePhase::Dragging;
                        commands.extend(self.pan_to(translation.x, screen));
                    }
                }
                GesturePhase::Dragging => commands.extend(self.pan_to(translation.x, screen)),
            },
            GestureEvent::DragEnded {
                location,
                translation,
                screen,
            } => match self.phase {
                GesturePhase::Pinching => {
                    self.drag_in_flight = false;
                    commands.push(ViewportCommand::ClearSelection);
                }
                GesturePhase::Settling => {
                    self.drag_in_flight = false;
                    self.phase = GesturePhase::Idle;
                    commands.push(ViewportCommand::ClearSelection);
                }
                GesturePhase::Idle | GesturePhase::Pressed if self.is_tap(translation) => {
                    self.phase = GesturePhase::Idle;
                    commands.push(ViewportCommand::Select { location, screen });
                }
                GesturePhase::Idle | GesturePhase::Pressed | GesturePhase::Dragging => {
                    if self.phase == GesturePhase::Idle {
                        self.applied_translation_x = 0.0;
                    }
                    commands.extend(self.pan_to(translation.x, screen));
                    commands.push(ViewportCommand::ClearSelection);
                    self.phase = GesturePhase::Idle;
                }
            },
            GestureEvent::PinchChanged {
                magnification,
                location,
                screen,
            } => {
                if self.phase != GesturePhase::Pinching {
                    if matches!(self.phase, GesturePhase::Pressed | GesturePhase::Dragging) {
                        self.drag_in_flight = true;
                    }
                    self.phase = GesturePhase::Pinching;
                    self.last_magnification = 1.0;
                }
                if magnification.is_finite() && magnification > 0.0 {
                    let scale_factor = magnification / self.last_magnification;
                    self.last_magnification = magnification;
                    let anchor_screen_x = match self.config.zoom_anchor {
                        ZoomAnchor::GestureLocation => location.x,
                        ZoomAnchor::ChartCenter => screen.width / 2.0,
                    };
                    commands.push(ViewportCommand::Zoom {
                        scale_factor,
                        anchor_screen_x,
                        screen_width: screen.width,
                    });
                }
            }
            GestureEvent::PinchEnded => {
                self.phase = if self.drag_in_flight {
                    GesturePhase::Settling
                } else {
                    GesturePhase::Idle
                };
                self.last_magnification = 1.0;
                commands.push(ViewportCommand::ClearSelection);
            }
        }
        commands
    }

    fn pan_to(&mut self, translation_x: f64, screen: ScreenSize) -> Option<ViewportCommand> {
        if !screen.is_valid() || !translation_x.is_finite() {
            return None;
        }
        let delta = translation_x - self.applied_translation_x;
        self.applied_translation_x = translation_x;
        (delta != 0.0).then_some(ViewportCommand::Pan {
            drag_ratio: delta / screen.width,
        })
    }
}
