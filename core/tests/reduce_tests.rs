use closest_pair_core::error::SearchError;
use closest_pair_core::reduce::reduce;
use closest_pair_core::search::Pair;

fn pair(a: usize, b: usize, distance: f64) -> Pair {
    Pair { a, b, distance }
}

#[test]
fn test_reduce_picks_minimum_distance() {
    // Arrange
    let partials = vec![
        Some(pair(0, 1, 5.0)),
        Some(pair(2, 3, 1.5)),
        Some(pair(4, 5, 9.0)),
    ];

    // Act
    let best = reduce(&partials).unwrap();

    // Assert
    assert_eq!((best.a, best.b), (2, 3));
}

#[test]
fn test_reduce_skips_empty_partials() {
    // Arrange
    let partials = vec![None, Some(pair(1, 2, 3.0)), None];

    // Act
    let best = reduce(&partials).unwrap();

    // Assert
    assert_eq!((best.a, best.b), (1, 2));
}

#[test]
fn test_reduce_tie_break_first_seen_wins() {
    // Arrange: equal distances in two partials
    let partials = vec![Some(pair(0, 1, 2.0)), Some(pair(5, 6, 2.0))];

    // Act
    let best = reduce(&partials).unwrap();

    // Assert
    assert_eq!((best.a, best.b), (0, 1));
}

#[test]
fn test_reduce_all_empty_is_an_error() {
    // Arrange
    let partials = vec![None, None];

    // Act
    let result = reduce(&partials);

    // Assert
    assert!(matches!(result, Err(SearchError::NoValidPair)));
}
