use combopt_challenges::max_distance::*;
use combopt_challenges::Error;

#[test]
fn test_pairwise_helpers() {
    assert_eq!(min_pairwise_distance(&[22.0, 1.0, 9.0]), Some(8.0));
    assert_eq!(min_pairwise_distance(&[1.0]), None);
    assert_eq!(total_pairwise_distance(&[22.0, 21.0, 1.0]), 42.0);
}

#[test]
fn test_verify_solution() {
    let challenge = Challenge {
        points: vec![20.0, 1.0, 1.0, 9.0, 21.0, 6.0, 22.0],
        k: None,
        min_thresh: Some(5.0),
    };
    let solution = Solution {
        indices: vec![1, 3, 6],
    };
    assert_eq!(challenge.verify_solution(&solution).unwrap(), 8.0);

    let too_close = Solution {
        indices: vec![0, 4],
    };
    assert!(challenge.verify_solution(&too_close).is_err());

    let empty = Solution { indices: vec![] };
    assert!(challenge.verify_solution(&empty).is_err());
}

#[test]
fn test_verify_solution_respects_k() {
    let challenge = Challenge {
        points: vec![0.0, 5.0, 10.0],
        k: Some(2),
        min_thresh: None,
    };
    let solution = Solution {
        indices: vec![0, 1, 2],
    };
    assert!(challenge.verify_solution(&solution).is_err());
}

#[test]
fn test_validate() {
    let challenge = Challenge {
        points: vec![0.0, 1.0],
        k: Some(3),
        min_thresh: None,
    };
    assert!(matches!(challenge.validate(), Err(Error::InvalidInput(_))));
    assert!(validate_points(&[0.0, f64::INFINITY]).is_err());
    assert!(validate_threshold(Some(f64::NAN)).is_err());
    assert!(validate_threshold(None).is_ok());
}

#[test]
fn test_generate_instance() {
    let track: Track = "n_points=15,k=4".parse().unwrap();
    let challenge = Challenge::generate_instance(&[5; 32], &track).unwrap();
    assert_eq!(challenge.points.len(), 15);
    assert_eq!(challenge.k, Some(4));
    assert!(challenge.points.iter().all(|&p| (0.0..=1000.0).contains(&p)));
    let track: Track = "n_points=3,k=4".parse().unwrap();
    assert!(Challenge::generate_instance(&[5; 32], &track).is_err());
}
