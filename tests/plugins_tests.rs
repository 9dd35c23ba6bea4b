use std::cell::RefCell;
use std::rc::Rc;

use zoomchart::ChartError;
use zoomchart::api::{ChartEngine, ChartEngineConfig};
use zoomchart::core::{DataPoint, ScreenPoint, ScreenSize};
use zoomchart::extensions::{ChartPlugin, PluginContext, PluginEvent};
use zoomchart::interaction::{GestureEvent, SeriesFilterGroup};
use zoomchart::render::NullRenderer;

#[derive(Clone)]
struct RecordingPlugin {
    id: String,
    events: Rc<RefCell<Vec<(PluginEvent, PluginContext)>>>,
}

impl RecordingPlugin {
    fn new(id: impl Into<String>, events: Rc<RefCell<Vec<(PluginEvent, PluginContext)>>>) -> Self {
        Self {
            id: id.into(),
            events,
        }
    }
}

impl ChartPlugin for RecordingPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: &PluginEvent, context: PluginContext) {
        self.events.borrow_mut().push((event.clone(), context));
    }
}

fn event_kind(event: &PluginEvent) -> &'static str {
    match event {
        PluginEvent::DataReplaced { .. } => "data",
        PluginEvent::ViewportChanged { .. } => "viewport",
        PluginEvent::SelectionChanged { .. } => "selection",
        PluginEvent::SeriesFilterChanged { .. } => "filter",
        PluginEvent::Reset => "reset",
        PluginEvent::Rendered => "rendered",
    }
}

fn build_engine(filter: &SeriesFilterGroup) -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::new(ScreenSize::new(400.0, 300.0));
    ChartEngine::new(NullRenderer::default(), config, filter.observer()).expect("engine init")
}

#[test]
fn plugin_receives_deterministic_event_sequence() {
    let filter = SeriesFilterGroup::new();
    let mut engine = build_engine(&filter);

    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    engine
        .set_data(vec![DataPoint::new(50.0, 0.0, "A")])
        .expect("valid data");
    engine.zoom(2.0, 200.0);
    engine.tap_at(ScreenPoint::new(200.0, 150.0));
    filter.set(Some("A".to_owned()));
    engine.handle_gesture(GestureEvent::PinchChanged {
        magnification: 1.0,
        location: ScreenPoint::new(200.0, 150.0),
        screen: ScreenSize::new(400.0, 300.0),
    });
    engine.handle_gesture(GestureEvent::PinchEnded);
    engine.render().expect("render");
    engine.reset();

    let events = events.borrow();
    let kinds: Vec<&'static str> = events.iter().map(|(event, _)| event_kind(event)).collect();
    assert_eq!(
        kinds,
        vec![
            "data",
            "viewport",
            "selection",
            "filter",
            "selection",
            "rendered",
            "reset",
            "viewport",
        ]
    );

    let context = events[1].1;
    assert_eq!(context.visible_window, (25.0, 75.0));
    assert_eq!(context.points_len, 1);
}

#[test]
fn duplicate_and_empty_plugin_ids_are_rejected() {
    let filter = SeriesFilterGroup::new();
    let mut engine = build_engine(&filter);
    let events = Rc::new(RefCell::new(Vec::new()));

    engine
        .register_plugin(Box::new(RecordingPlugin::new("a", events.clone())))
        .expect("first registration");
    let duplicate = engine.register_plugin(Box::new(RecordingPlugin::new("a", events.clone())));
    assert!(matches!(duplicate, Err(ChartError::InvalidData(_))));
    let empty = engine.register_plugin(Box::new(RecordingPlugin::new("", events)));
    assert!(matches!(empty, Err(ChartError::InvalidData(_))));

    assert_eq!(engine.plugin_count(), 1);
    assert!(engine.unregister_plugin("a"));
    assert!(!engine.unregister_plugin("a"));
    assert!(!engine.has_plugin("a"));
}
