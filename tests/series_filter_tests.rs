use zoomchart::api::{ChartEngine, ChartEngineConfig};
use zoomchart::core::{DataPoint, ScreenPoint, ScreenSize};
use zoomchart::interaction::SeriesFilterGroup;
use zoomchart::render::NullRenderer;

fn points() -> Vec<DataPoint> {
    vec![
        DataPoint::new(50.0, 0.0, "A"),
        DataPoint::new(50.0, 0.05, "B"),
        DataPoint::new(70.0, 0.5, "A"),
    ]
}

fn bound_engine(filter: &SeriesFilterGroup) -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::new(ScreenSize::new(400.0, 300.0));
    let mut engine =
        ChartEngine::new(NullRenderer::default(), config, filter.observer()).expect("engine init");
    engine.set_data(points()).expect("valid data");
    engine
}

#[test]
fn legend_write_is_visible_to_every_bound_chart() {
    let filter = SeriesFilterGroup::new();
    let first = bound_engine(&filter);
    let second = bound_engine(&filter);

    filter.toggle("B");
    assert_eq!(first.series_filter().as_deref(), Some("B"));
    assert_eq!(second.series_filter().as_deref(), Some("B"));

    filter.toggle("B");
    assert_eq!(first.series_filter(), None);
    assert_eq!(second.series_filter(), None);
}

#[test]
fn hit_test_honors_filter_on_next_interaction() {
    let filter = SeriesFilterGroup::new();
    let mut engine = bound_engine(&filter);
    // x = 50 -> 200 px; y = 0.05 -> 145 px.
    let location = ScreenPoint::new(200.0, 145.0);

    engine.tap_at(location);
    assert_eq!(engine.selected_point().map(|p| p.series.as_str()), Some("B"));

    filter.set(Some("A".to_owned()));
    engine.tap_at(location);
    assert_eq!(engine.selected_point().map(|p| p.series.as_str()), Some("A"));
}

#[test]
fn activating_another_series_drops_stale_selection() {
    let filter = SeriesFilterGroup::new();
    let mut engine = bound_engine(&filter);
    engine.tap_at(ScreenPoint::new(200.0, 145.0));
    assert!(engine.selected().is_some());

    filter.set(Some("A".to_owned()));
    engine.render().expect("render");
    assert!(engine.selected().is_none());
}

#[test]
fn observer_polls_each_change_once() {
    let filter = SeriesFilterGroup::new();
    let mut observer = filter.observer();
    assert!(observer.poll_change().is_none());

    filter.set(Some("A".to_owned()));
    assert!(observer.has_pending_change());
    assert_eq!(observer.poll_change(), Some(Some("A".to_owned())));
    assert!(observer.poll_change().is_none());

    filter.clear();
    assert_eq!(observer.poll_change(), Some(None));
    assert!(observer.is_bound_to(&filter));
    assert!(!observer.is_bound_to(&SeriesFilterGroup::new()));
}

#[test]
fn renderer_receives_dimmed_series() {
    let filter = SeriesFilterGroup::new();
    let mut engine = bound_engine(&filter);
    filter.set(Some("A".to_owned()));
    engine.render().expect("render");

    let frame = engine
        .renderer()
        .last_frame
        .as_ref()
        .expect("frame rendered");
    assert_eq!(frame.series_filter.as_deref(), Some("A"));
    let dimmed: Vec<(&str, bool)> = frame
        .series
        .iter()
        .map(|polyline| (polyline.series.as_str(), polyline.dimmed))
        .collect();
    assert_eq!(dimmed, vec![("A", false), ("B", true)]);
}
