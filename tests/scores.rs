use basic_sorts::scores::{classify_with, median_with};
use basic_sorts::{classify, median, Algorithm, Classification, MedianError, Score};

#[test]
fn median_of_odd_length() {
    assert_eq!(median(&mut [3, 1, 2]), Ok(2.0));
}

#[test]
fn median_of_even_length() {
    assert_eq!(median(&mut [4, 1, 3, 2]), Ok(2.5));
}

#[test]
fn median_of_floats() {
    assert_eq!(median(&mut [0.5f32, -1.5, 2.0]), Ok(0.5));
    assert_eq!(median(&mut [1.25f64, -0.25]), Ok(0.5));
}

#[test]
fn median_of_nothing() {
    let mut empty: [i32; 0] = [];
    assert_eq!(median(&mut empty), Err(MedianError::EmptyInput));
}

#[test]
fn median_with_every_algorithm() {
    let input = [710, 455, 620, 540, 455, 800, 390, 610];

    for algorithm in Algorithm::ALL
        .into_iter()
        .chain([Algorithm::HybridMerge { threshold: 0 }])
    {
        let mut v = input;
        assert_eq!(median_with(&mut v, algorithm), Ok(575.0), "{algorithm}");
        assert!(v.windows(2).all(|w| w[0] <= w[1]), "{algorithm}");
    }
}

#[test]
fn classify_empty_population_is_both() {
    assert_eq!(
        classify(&[], Score::new(500, 500)),
        Classification::Both
    );
    assert_eq!(
        classify(&[], Score::new(i32::MIN, i32::MIN)),
        Classification::Both
    );
}

#[test]
fn classify_english_only() {
    let all_scores = [Score::new(500, 500), Score::new(600, 400)];

    // Medians are 550 and 450. Math is compared strictly, so 450 is not above.
    assert_eq!(
        classify(&all_scores, Score::new(700, 450)),
        Classification::English
    );
}

#[test]
fn classify_all_outcomes() {
    let all_scores = [
        Score::new(480, 620),
        Score::new(560, 500),
        Score::new(520, 580),
    ];

    // Medians are 520 and 580.
    let cases = [
        (Score::new(530, 590), Classification::Both),
        (Score::new(530, 580), Classification::English),
        (Score::new(520, 600), Classification::Math),
        (Score::new(400, 400), Classification::None),
    ];

    for (student, expected) in cases {
        for algorithm in Algorithm::ALL {
            assert_eq!(
                classify_with(&all_scores, student, algorithm),
                expected,
                "{student} {algorithm}"
            );
        }
    }
}

#[test]
fn classify_does_not_reorder_population() {
    let all_scores = [Score::new(700, 400), Score::new(500, 600), Score::new(600, 500)];
    let before = all_scores;

    classify(&all_scores, Score::new(650, 650));
    assert_eq!(all_scores, before);
}

#[test]
fn unconventional_scores_are_accepted() {
    let all_scores = [Score::new(-15, 1_003), Score::new(401, 7), Score::new(999, -2)];

    assert_eq!(
        classify(&all_scores, Score::new(402, 8)),
        Classification::Both
    );
}

#[test]
fn display() {
    assert_eq!(Score::new(700, 450).to_string(), "<English: 700, Math: 450>");
    assert_eq!(Classification::English.to_string(), "English");
    assert_eq!(Classification::None.to_string(), "None");
}
