use approx::relative_eq;
use relate2d::math::{Point, Real};
use relate2d::query::{relate_segment_segment, SegmentRelation};
use relate2d::shape::Segment;

fn lattice_point(rng: &mut oorandom::Rand32) -> Point<Real> {
    Point::new(rng.rand_range(0..8) as Real, rng.rand_range(0..8) as Real)
}

fn random_point(rng: &mut oorandom::Rand32, scale: Real) -> Point<Real> {
    Point::new(
        (rng.rand_float() * 2.0 - 1.0) * scale,
        (rng.rand_float() * 2.0 - 1.0) * scale,
    )
}

#[test]
fn classification_is_symmetric() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..500 {
        let seg1 = Segment::new(lattice_point(&mut rng), lattice_point(&mut rng));
        let seg2 = Segment::new(lattice_point(&mut rng), lattice_point(&mut rng));
        assert_symmetric(&seg1, &seg2);
    }
}

#[test]
fn classification_is_symmetric_for_continuous_coordinates() {
    let mut rng = oorandom::Rand32::new(5803);

    for i in 0..500 {
        let seg1 = Segment::new(random_point(&mut rng, 200.0), random_point(&mut rng, 200.0));
        let seg2 = if i % 2 == 0 {
            Segment::new(random_point(&mut rng, 200.0), random_point(&mut rng, 200.0))
        } else {
            // Run the second segment straight through a point a hair away
            // from the first one's start, so the shared point is a boundary
            // value along one operand and interior along the other.
            let far = random_point(&mut rng, 200.0);
            let near = Point::new(
                seg1.a.x + (rng.rand_float() - 0.5) * 1.0e-5,
                seg1.a.y + (rng.rand_float() - 0.5) * 1.0e-5,
            );
            Segment::new(Point::new(2.0 * near.x - far.x, 2.0 * near.y - far.y), far)
        };

        assert_symmetric(&seg1, &seg2);
    }
}

fn assert_symmetric(seg1: &Segment, seg2: &Segment) {
    let forward = relate_segment_segment(seg1, seg2);
    let backward = relate_segment_segment(seg2, seg1);

    match (forward, backward) {
        (SegmentRelation::Disjoint, SegmentRelation::Disjoint) => {}
        (
            SegmentRelation::Degenerate {
                point: point_f,
                first_is_point: first_f,
            },
            SegmentRelation::Degenerate {
                point: point_b,
                first_is_point: first_b,
            },
        ) => {
            assert_eq!(point_f, point_b);
            assert_ne!(first_f, first_b);
        }
        (
            SegmentRelation::Equal { opposite: opp_f },
            SegmentRelation::Equal { opposite: opp_b },
        ) => assert_eq!(opp_f, opp_b),
        (
            SegmentRelation::Touch {
                point: point_f,
                arrival1: a1_f,
                arrival2: a2_f,
            },
            SegmentRelation::Touch {
                point: point_b,
                arrival1: a1_b,
                arrival2: a2_b,
            },
        ) => {
            assert!(relative_eq!(point_f, point_b, epsilon = 1.0e-4));
            assert_eq!((a1_f, a2_f), (a2_b, a1_b));
        }
        (
            SegmentRelation::Cross { point: point_f, .. },
            SegmentRelation::Cross { point: point_b, .. },
        ) => assert!(relative_eq!(point_f, point_b, epsilon = 1.0e-4)),
        (
            SegmentRelation::CollinearTouch {
                point: point_f,
                arrival1: a1_f,
                arrival2: a2_f,
            },
            SegmentRelation::CollinearTouch {
                point: point_b,
                arrival1: a1_b,
                arrival2: a2_b,
            },
        ) => {
            assert_eq!(point_f, point_b);
            assert_eq!((a1_f, a2_f), (a2_b, a1_b));
        }
        (
            SegmentRelation::CollinearOverlapBoundary {
                owner: owner_f,
                owner_is_first: first_f,
                arrival1: a1_f,
                arrival2: a2_f,
                from_end: end_f,
            },
            SegmentRelation::CollinearOverlapBoundary {
                owner: owner_b,
                owner_is_first: first_b,
                arrival1: a1_b,
                arrival2: a2_b,
                from_end: end_b,
            },
        ) => {
            assert_eq!(owner_f, owner_b);
            assert_ne!(first_f, first_b);
            assert_eq!((a1_f, a2_f), (a2_b, a1_b));
            assert_eq!(end_f, end_b);
        }
        (
            SegmentRelation::CollinearContains {
                contained: contained_f,
                first_within_second: first_f,
                opposite: opp_f,
            },
            SegmentRelation::CollinearContains {
                contained: contained_b,
                first_within_second: first_b,
                opposite: opp_b,
            },
        ) => {
            assert_eq!(contained_f, contained_b);
            assert_ne!(first_f, first_b);
            assert_eq!(opp_f, opp_b);
        }
        (
            SegmentRelation::CollinearOverlap {
                point1: p1_f,
                point2: p2_f,
                dir1: d1_f,
                dir2: d2_f,
                opposite: opp_f,
            },
            SegmentRelation::CollinearOverlap {
                point1: p1_b,
                point2: p2_b,
                dir1: d1_b,
                dir2: d2_b,
                opposite: opp_b,
            },
        ) => {
            assert_eq!((p1_f, p2_f), (p1_b, p2_b));
            assert_eq!((d1_f, d2_f), (d2_b, d1_b));
            assert_eq!(opp_f, opp_b);
        }
        (forward, backward) => panic!(
            "asymmetric classification of {:?} and {:?}: {:?} vs {:?}",
            seg1, seg2, forward, backward
        ),
    }
}

#[test]
fn disjoint_matches_an_exact_integer_oracle() {
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..500 {
        let coords: Vec<i64> = (0..8).map(|_| i64::from(rng.rand_range(0..8))).collect();
        let (a, b) = ((coords[0], coords[1]), (coords[2], coords[3]));
        let (c, d) = ((coords[4], coords[5]), (coords[6], coords[7]));

        if a == b || c == d {
            continue;
        }

        let seg1 = Segment::new(
            Point::new(a.0 as Real, a.1 as Real),
            Point::new(b.0 as Real, b.1 as Real),
        );
        let seg2 = Segment::new(
            Point::new(c.0 as Real, c.1 as Real),
            Point::new(d.0 as Real, d.1 as Real),
        );

        let relation = relate_segment_segment(&seg1, &seg2);
        assert!(!relation.is_error());
        assert_eq!(
            relation.is_disjoint(),
            !segments_intersect(a, b, c, d),
            "oracle disagrees on {:?} and {:?}: got {:?}",
            seg1,
            seg2,
            relation
        );
    }
}

#[test]
fn cross_points_lie_on_both_segments() {
    let mut rng = oorandom::Rand32::new(1234);
    let mut crossings = 0;

    for _ in 0..1000 {
        let seg1 = Segment::new(random_point(&mut rng, 5.0), random_point(&mut rng, 5.0));
        let seg2 = Segment::new(random_point(&mut rng, 5.0), random_point(&mut rng, 5.0));

        if let SegmentRelation::Cross { point, ratio } = relate_segment_segment(&seg1, &seg2) {
            crossings += 1;
            assert!(ratio > 0.0 && ratio < 1.0);
            // The reported point is the reported ratio applied to the first
            // segment.
            assert_eq!(seg1.point_at_ratio(ratio), point);

            for seg in [&seg1, &seg2] {
                // The point must sit on the supporting line and within the
                // segment's coordinate range.
                let distance = seg.signed_area_to(&point).abs() / seg.length();
                assert!(distance <= 1.0e-3);

                for axis in 0..2 {
                    let lo = seg.a[axis].min(seg.b[axis]);
                    let hi = seg.a[axis].max(seg.b[axis]);
                    assert!(point[axis] >= lo - 1.0e-3 && point[axis] <= hi + 1.0e-3);
                }
            }
        }
    }

    // The box is small enough that a healthy share of random pairs cross.
    assert!(crossings > 100, "only {} crossings", crossings);
}

#[test]
fn overlap_segments_stay_on_their_carriers() {
    let mut rng = oorandom::Rand32::new(97);
    let mut overlaps = 0;

    for _ in 0..2000 {
        let origin = i64::from(rng.rand_range(0..4));
        let seg1 = Segment::new(
            Point::new(origin as Real, 0.0),
            Point::new((origin + 1 + i64::from(rng.rand_range(0..5))) as Real, 0.0),
        );
        let seg2 = Segment::new(
            Point::new(i64::from(rng.rand_range(0..4)) as Real, 0.0),
            Point::new(i64::from(rng.rand_range(4..9)) as Real, 0.0),
        );

        if let SegmentRelation::CollinearOverlap { point1, point2, .. } =
            relate_segment_segment(&seg1, &seg2)
        {
            overlaps += 1;
            let shared = Segment::new(point1, point2);

            for carrier in [&seg1, &seg2] {
                match relate_segment_segment(&shared, carrier) {
                    SegmentRelation::CollinearOverlapBoundary {
                        owner,
                        owner_is_first,
                        ..
                    } => {
                        assert_eq!(owner, shared);
                        assert!(owner_is_first);
                    }
                    other => panic!(
                        "overlap of {:?} and {:?} produced {:?} against its carrier",
                        seg1, seg2, other
                    ),
                }
            }
        }
    }

    assert!(overlaps > 50, "only {} overlaps", overlaps);
}

fn orientation(a: (i64, i64), b: (i64, i64), c: (i64, i64)) -> i64 {
    ((b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0)).signum()
}

fn on_segment(a: (i64, i64), b: (i64, i64), p: (i64, i64)) -> bool {
    orientation(a, b, p) == 0
        && p.0 >= a.0.min(b.0)
        && p.0 <= a.0.max(b.0)
        && p.1 >= a.1.min(b.1)
        && p.1 <= a.1.max(b.1)
}

fn segments_intersect(a: (i64, i64), b: (i64, i64), c: (i64, i64), d: (i64, i64)) -> bool {
    let o1 = orientation(a, b, c);
    let o2 = orientation(a, b, d);
    let o3 = orientation(c, d, a);
    let o4 = orientation(c, d, b);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    on_segment(a, b, c) || on_segment(a, b, d) || on_segment(c, d, a) || on_segment(c, d, b)
}
