use relate2d::math::{Point, PromotedReal, Real};
use relate2d::query::{
    relate_segment_segment_with_policy, RelateError, RelateIntersects, RelatePolicy,
    RelateTolerances, TurnPointCollector,
};
use relate2d::shape::Segment;

fn seg(ax: Real, ay: Real, bx: Real, by: Real) -> Segment {
    Segment::new(Point::new(ax, ay), Point::new(bx, by))
}

#[derive(Default)]
struct CallCounter {
    calls: usize,
}

impl RelatePolicy for CallCounter {
    type Output = ();

    fn on_disjoint(&mut self) {
        self.calls += 1;
    }

    fn on_degenerate(&mut self, _: Point<Real>, _: bool) {
        self.calls += 1;
    }

    fn on_equal(&mut self, _: bool) {
        self.calls += 1;
    }

    fn on_touch(&mut self, _: Point<Real>, _: i8, _: i8) {
        self.calls += 1;
    }

    fn on_cross(&mut self, _: Point<Real>, _: PromotedReal) {
        self.calls += 1;
    }

    fn on_collinear_touch(&mut self, _: Point<Real>, _: i8, _: i8) {
        self.calls += 1;
    }

    fn on_collinear_overlap_boundary(&mut self, _: Segment, _: bool, _: i8, _: i8, _: bool) {
        self.calls += 1;
    }

    fn on_collinear_contains(&mut self, _: Segment, _: bool, _: bool) {
        self.calls += 1;
    }

    fn on_collinear_overlap(&mut self, _: Point<Real>, _: Point<Real>, _: i8, _: i8, _: bool) {
        self.calls += 1;
    }

    fn on_error(&mut self, _: RelateError) {
        self.calls += 1;
    }
}

#[test]
fn every_classification_invokes_exactly_one_callback() {
    let mut rng = oorandom::Rand32::new(42);
    let mut counter = CallCounter::default();
    let pairs = 200;

    for _ in 0..pairs {
        let mut coord = || rng.rand_range(0..8) as Real;
        let seg1 = seg(coord(), coord(), coord(), coord());
        let seg2 = seg(coord(), coord(), coord(), coord());

        relate_segment_segment_with_policy(
            &seg1,
            &seg2,
            RelateTolerances::default(),
            &mut counter,
        );
    }

    assert_eq!(counter.calls, pairs);
}

#[test]
fn intersects_policy_answers_for_each_relation_family() {
    let mut policy = RelateIntersects;
    let tolerances = RelateTolerances::default();
    let horizontal = seg(0.0, 0.0, 10.0, 0.0);

    let crossing = seg(4.0, -2.0, 4.0, 2.0);
    assert!(relate_segment_segment_with_policy(
        &horizontal,
        &crossing,
        tolerances,
        &mut policy
    ));

    let sharing = seg(10.0, 0.0, 12.0, 3.0);
    assert!(relate_segment_segment_with_policy(
        &horizontal,
        &sharing,
        tolerances,
        &mut policy
    ));

    let overlapping = seg(5.0, 0.0, 15.0, 0.0);
    assert!(relate_segment_segment_with_policy(
        &horizontal,
        &overlapping,
        tolerances,
        &mut policy
    ));

    let above = seg(0.0, 1.0, 10.0, 1.0);
    assert!(!relate_segment_segment_with_policy(
        &horizontal,
        &above,
        tolerances,
        &mut policy
    ));

    // A degenerate segment is only known to lie on the supporting line, so
    // it is never reported as intersecting.
    let on_line_point = seg(5.0, 0.0, 5.0, 0.0);
    assert!(!relate_segment_segment_with_policy(
        &horizontal,
        &on_line_point,
        tolerances,
        &mut policy
    ));
}

#[test]
fn collector_gathers_crossings_and_overlap_boundaries() {
    let mut collector = TurnPointCollector::default();
    let tolerances = RelateTolerances::default();
    let horizontal = seg(0.0, 0.0, 10.0, 0.0);

    relate_segment_segment_with_policy(
        &horizontal,
        &seg(4.0, -2.0, 4.0, 2.0),
        tolerances,
        &mut collector,
    );
    relate_segment_segment_with_policy(
        &horizontal,
        &seg(5.0, 0.0, 15.0, 0.0),
        tolerances,
        &mut collector,
    );
    relate_segment_segment_with_policy(
        &horizontal,
        &seg(0.0, 1.0, 10.0, 1.0),
        tolerances,
        &mut collector,
    );

    assert_eq!(
        collector.points,
        vec![
            Point::new(4.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(10.0, 0.0),
        ]
    );

    collector.clear();
    assert!(collector.points.is_empty());
}

#[test]
fn collector_reports_the_shared_boundary_point_first() {
    let mut collector = TurnPointCollector::default();
    let tolerances = RelateTolerances::default();

    relate_segment_segment_with_policy(
        &seg(0.0, 0.0, 10.0, 0.0),
        &seg(5.0, 0.0, 10.0, 0.0),
        tolerances,
        &mut collector,
    );

    assert_eq!(
        collector.points,
        vec![Point::new(10.0, 0.0), Point::new(5.0, 0.0)]
    );
}

#[test]
fn collector_reports_contained_segments_by_their_endpoints() {
    let mut collector = TurnPointCollector::default();
    let tolerances = RelateTolerances::default();

    relate_segment_segment_with_policy(
        &seg(0.0, 0.0, 10.0, 0.0),
        &seg(2.0, 0.0, 8.0, 0.0),
        tolerances,
        &mut collector,
    );

    assert_eq!(
        collector.points,
        vec![Point::new(2.0, 0.0), Point::new(8.0, 0.0)]
    );
}
