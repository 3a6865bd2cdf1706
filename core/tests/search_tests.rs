use closest_pair_core::partition::Segment;
use closest_pair_core::point::{distance, Point};
use closest_pair_core::search::{closest_pair, closest_pair_full};

#[test]
fn test_distance_symmetry() {
    // Arrange
    let a = Point::new(3, 7);
    let b = Point::new(40, 2);

    // Assert
    assert_eq!(distance(a, b), distance(b, a));
}

#[test]
fn test_distance_reflexivity() {
    // Arrange
    let a = Point::new(12, 56);

    // Assert
    assert_eq!(distance(a, a), 0.0);
}

#[test]
fn test_distance_zero_for_coincident_points() {
    // Coordinate coincidence gives distance zero even for distinct entities.
    assert_eq!(distance(Point::new(5, 5), Point::new(5, 5)), 0.0);
}

#[test]
fn test_distance_known_value() {
    // Assert
    assert_eq!(distance(Point::new(0, 0), Point::new(3, 4)), 5.0);
}

#[test]
fn test_closest_pair_excludes_self_pairs() {
    // Arrange: a valid pair always exists for two or more points, so the
    // search can never fall back to comparing a point with itself.
    let points = vec![Point::new(0, 0), Point::new(10, 10)];

    // Act
    let pair = closest_pair_full(&points).unwrap();

    // Assert
    assert_ne!(pair.a, pair.b);
}

#[test]
fn test_closest_pair_coincident_points_are_distinct_entities() {
    // Arrange: two points share coordinates but are distinct entities
    let points = vec![Point::new(0, 0), Point::new(0, 0), Point::new(10, 10)];

    // Act
    let pair = closest_pair_full(&points).unwrap();

    // Assert: the search compares coordinates, not entity identity
    assert_eq!((pair.a, pair.b), (0, 1));
    assert_eq!(pair.distance, 0.0);
}

#[test]
fn test_closest_pair_segment_sees_whole_set() {
    // Arrange: the segment holds only the far points; the true closest pair
    // partner for index 2 lives outside the segment
    let points = vec![
        Point::new(0, 0),
        Point::new(1, 1),
        Point::new(50, 50),
        Point::new(51, 51),
    ];

    // Act
    let partial = closest_pair(Segment::new(2, 4), &points).unwrap();

    // Assert
    assert_eq!((partial.a, partial.b), (2, 3));
    assert!((partial.distance - 2f64.sqrt()).abs() < 1e-9);
}

#[test]
fn test_closest_pair_empty_segment_reports_none() {
    // Arrange
    let points = vec![Point::new(0, 0), Point::new(1, 1)];

    // Act + Assert
    assert!(closest_pair(Segment::new(1, 1), &points).is_none());
}

#[test]
fn test_closest_pair_single_point_set_reports_none() {
    // Arrange: the only candidate is the excluded self-pair
    let points = vec![Point::new(4, 4)];

    // Act + Assert
    assert!(closest_pair_full(&points).is_none());
}

#[test]
fn test_closest_pair_tie_break_first_in_scan_order() {
    // Arrange: both (0,1) and (2,3) sit at distance 1
    let points = vec![
        Point::new(0, 0),
        Point::new(0, 1),
        Point::new(50, 0),
        Point::new(50, 1),
    ];

    // Act
    let pair = closest_pair_full(&points).unwrap();

    // Assert: first pair reaching the minimum wins
    assert_eq!((pair.a, pair.b), (0, 1));
}
