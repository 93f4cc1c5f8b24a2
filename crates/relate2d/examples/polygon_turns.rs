extern crate nalgebra as na;

use na::Point2;
use relate2d::query::{relate_segment_segment, TurnPointCollector};
use relate2d::shape::Segment;

/// Classifies every edge pair of two overlapping polygons and prints the
/// points where their boundaries meet, cross, or start overlapping.
fn main() {
    let square = [
        Point2::new(0.0, 0.0),
        Point2::new(4.0, 0.0),
        Point2::new(4.0, 4.0),
        Point2::new(0.0, 4.0),
    ];
    let quad = [
        Point2::new(2.0, 0.0),
        Point2::new(7.0, 0.0),
        Point2::new(7.0, 3.0),
        Point2::new(2.0, 3.0),
    ];

    let square_edges = edges(&square);
    let quad_edges = edges(&quad);
    let mut collector = TurnPointCollector::default();
    let mut collinear_pairs = 0;

    for (i, edge1) in square_edges.iter().enumerate() {
        for (j, edge2) in quad_edges.iter().enumerate() {
            let relation = relate_segment_segment(edge1, edge2);

            if relation.is_collinear() {
                collinear_pairs += 1;
            }

            if !relation.is_disjoint() {
                println!("square edge {} x quad edge {}: {:?}", i, j, relation);
                relation.dispatch(&mut collector);
            }
        }
    }

    println!("====================");
    println!("Found num collinear edge pairs: {}", collinear_pairs);
    println!("Found num turn points: {}", collector.points.len());
    for point in &collector.points {
        println!("({}, {})", point.x, point.y);
    }
}

fn edges(polygon: &[Point2<f32>]) -> Vec<Segment> {
    (0..polygon.len())
        .map(|i| Segment::from([polygon[i], polygon[(i + 1) % polygon.len()]]))
        .collect()
}
