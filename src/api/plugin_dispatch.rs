use crate::extensions::PluginContext;
use crate::render::Renderer;

use super::{ChartEngine, PluginEvent};

impl<R: Renderer> ChartEngine<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            screen: self.screen,
            visible_window: self.viewport.visible_window(),
            scroll_position: self.viewport.scroll_position(),
            visible_domain: self.viewport.visible_domain(),
            points_len: self.dataset.len(),
            gesture_phase: self.router.phase(),
            selected: self.viewport.selected(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(&event, context);
        }
    }

    pub(super) fn emit_viewport_changed(&mut self) {
        let (start, end) = self.viewport.visible_window();
        self.emit_plugin_event(PluginEvent::ViewportChanged { start, end });
    }
}
