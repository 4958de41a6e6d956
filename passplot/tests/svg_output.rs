use passplot::{
    constellation, constellation_svg, skyplot_svg, ConstellationStyle, IqPoint, SkyplotStyle,
    TrackPoint,
};

#[test]
fn constellation_svg_has_one_rect_per_point_plus_background() {
    let pts: Vec<IqPoint> = (0..25).map(|k| IqPoint::new((k % 5) as f64 - 2.0, (k / 5) as f64 - 2.0)).collect();
    let doc = constellation_svg(&pts, 300.0, 300.0, &ConstellationStyle::default());
    assert_eq!(doc.matches("<rect ").count(), pts.len() + 1);
    assert_eq!(doc.matches("<line ").count(), 2);
}

#[test]
fn circle_markers_render_as_circles() {
    let style = ConstellationStyle { marker_shape: passplot::MarkerShape::Circle, ..Default::default() };
    let prims = constellation::render(&[IqPoint::new(1.0, 1.0), IqPoint::new(-1.0, -1.0)], 100.0, 100.0, &style);
    let doc = passplot::render_svg(&prims, 100.0, 100.0);
    assert_eq!(doc.matches("<circle ").count(), 2);
    assert_eq!(doc.matches("<rect ").count(), 1);
}

#[test]
fn skyplot_svg_structure() {
    let track = vec![TrackPoint::new(300.0, 5.0), TrackPoint::new(0.0, 50.0), TrackPoint::new(60.0, 5.0)];
    let doc = skyplot_svg(&track, &SkyplotStyle::default()).unwrap();
    // three dashed rings plus two endpoint dots
    assert_eq!(doc.matches("<circle ").count(), 5);
    assert_eq!(doc.matches("stroke-dasharray").count(), 3);
    assert_eq!(doc.matches("<line ").count(), 4);
    assert_eq!(doc.matches("<path ").count(), 1);
    for label in [">N<", ">E<", ">S<", ">W<", ">AOS<", ">LOS<"] {
        assert!(doc.contains(label), "missing {}", label);
    }
    assert!(doc.contains("width=\"400\" height=\"400\""));
}

#[test]
fn skyplot_svg_empty_track_errors() {
    let err = skyplot_svg(&[], &SkyplotStyle::default()).unwrap_err();
    assert_eq!(err.code(), "invalid_input");
}
