use crowd_graph::{
    AnalyzerConfig, BoundingBox, FrameAnalyzer, FramePipeline, Graph, MemorySink, Point2f,
    PruneConfig, Shape, ShapeClassifier, boxes_to_points, minimum_spanning_forest, partition,
};

fn pts(raw: &[(f32, f32)]) -> Vec<Point2f> {
    raw.iter().map(|&(x, y)| Point2f::new(x, y)).collect()
}

#[test]
fn far_point_is_split_off_by_tight_pruning() {
    let coords = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (10.0, 10.0)]);
    let mst = Graph::complete(coords).minimum_spanning_forest();

    let mut weights: Vec<f32> = mst.iter_edges().map(|e| e.weight).collect();
    weights.sort_by(f32::total_cmp);
    assert_eq!(&weights[..2], &[1.0, 1.0]);
    assert!(weights[2] > 12.0);

    let parts = mst.prune_long_edges(0.5);
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].coords(), &pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)])[..]);
    assert_eq!(parts[1].coords(), &pts(&[(10.0, 10.0)])[..]);
}

#[test]
fn evenly_spaced_row_becomes_one_line() {
    let coords = pts(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0), (15.0, 0.0)]);
    let analyzer = FrameAnalyzer::default();
    let report = analyzer.analyze(&coords);

    assert!(report.clusters.is_empty());
    assert_eq!(report.lines.len(), 1);
    assert_eq!(report.lines[0].segments.len(), 3);

    let record = report.to_record();
    assert_eq!(record.lines, vec![vec![[0, 0], [5, 0], [10, 0], [15, 0]]]);
    assert_eq!(record.compact_lines(), "0-0 5-0 10-0 15-0");
}

#[test]
fn tight_cloud_becomes_cluster_at_its_mean() {
    let cloud: Vec<Point2f> = (0..20)
        .map(|i| {
            let a = i as f32 * 2.399_963;
            let r = 0.3 * (i as f32).sqrt();
            Point2f::new(250.0 + r * a.cos(), 120.0 + r * a.sin())
        })
        .collect();

    let component = partition(&minimum_spanning_forest(&Graph::complete(cloud.clone())))
        .pop()
        .expect("one component");
    let Shape::Clusters(clusters) = ShapeClassifier::default().classify(&component) else {
        panic!("cloud should not be a line");
    };
    assert_eq!(clusters.iter().map(|c| c.count).sum::<usize>(), 20);

    let whole = crowd_graph::ClusterSummary::of(&cloud).expect("non-empty");
    assert!((whole.center.x - 250.0).abs() < 0.5);
    assert!((whole.center.y - 120.0).abs() < 0.5);
    assert!(whole.radius <= 0.3 * 19.0_f32.sqrt() + 0.5);
}

#[test]
fn two_detectors_feed_one_report() {
    let people = vec![
        BoundingBox::from_xywh(0.0, 100.0, 10.0, 20.0),
        BoundingBox::from_xywh(30.0, 100.0, 10.0, 20.0),
        BoundingBox::from_xywh(60.0, 100.0, 10.0, 20.0),
    ];
    let faces = vec![BoundingBox::from_xywh(90.0, 105.0, 10.0, 10.0)];
    let frame = (people, faces);

    type Frame = (Vec<BoundingBox>, Vec<BoundingBox>);
    let mut pipeline: FramePipeline<Frame, MemorySink> = FramePipeline::new(
        FrameAnalyzer::new(AnalyzerConfig {
            prune: PruneConfig { z_score: 2.0 },
            ..AnalyzerConfig::default()
        }),
        MemorySink::default(),
    )
    .with_detector(|f: &Frame| -> Result<Vec<Point2f>, crowd_graph::BoxError> {
        Ok(boxes_to_points(&f.0))
    })
    .with_detector(|f: &Frame| -> Result<Vec<Point2f>, crowd_graph::BoxError> {
        Ok(boxes_to_points(&f.1))
    });

    let report = pipeline
        .process(&frame)
        .expect("frame ok")
        .expect("points present");
    assert_eq!(report.num_points, 4);
    assert_eq!(report.lines.len(), 1);

    let records = &pipeline.sink().records;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].lines[0], vec![[5, 110], [35, 110], [65, 110], [95, 110]]);
}
