use crate::rating::domain::{CreditScore, RatingBand, RatingError};

#[test]
fn new_accepts_the_full_scale_and_rejects_beyond_it() {
    assert_eq!(CreditScore::new(0).expect("0 is valid"), CreditScore::MIN);
    assert_eq!(CreditScore::new(100).expect("100 is valid"), CreditScore::MAX);

    match CreditScore::new(101) {
        Err(RatingError::ScoreOutOfRange { value }) => assert_eq!(value, 101.0),
        other => panic!("expected out-of-range error, got {other:?}"),
    }
}

#[test]
fn model_output_rounds_half_away_from_zero() {
    assert_eq!(
        CreditScore::from_model_output(71.5).expect("rounds up").points(),
        72
    );
    assert_eq!(
        CreditScore::from_model_output(72.4).expect("rounds down").points(),
        72
    );
    assert_eq!(
        CreditScore::from_model_output(-0.4).expect("rounds to zero").points(),
        0
    );
    assert_eq!(
        CreditScore::from_model_output(100.4).expect("rounds to max").points(),
        100
    );
}

#[test]
fn model_output_outside_the_scale_is_an_error() {
    for raw in [-3.0, 104.2, 100.5, -0.6] {
        match CreditScore::from_model_output(raw) {
            Err(RatingError::ScoreOutOfRange { value }) => assert_eq!(value, raw),
            other => panic!("expected out-of-range error for {raw}, got {other:?}"),
        }
    }
}

#[test]
fn non_finite_model_output_is_an_error() {
    for raw in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(
            CreditScore::from_model_output(raw),
            Err(RatingError::ScoreNotFinite { .. })
        ));
    }
}

#[test]
fn labels_parse_case_insensitively_with_surrounding_whitespace() {
    assert_eq!(RatingBand::from_label("aaa"), Some(RatingBand::AAA));
    assert_eq!(RatingBand::from_label(" aA "), Some(RatingBand::AA));
    assert_eq!(RatingBand::from_label("b"), Some(RatingBand::B));
    assert_eq!(RatingBand::from_label("D"), Some(RatingBand::D));

    for junk in ["", "A+", "BBB", "unrated", "AAAA"] {
        assert_eq!(RatingBand::from_label(junk), None, "label {junk:?}");
    }
}

#[test]
fn boundary_scores_belong_to_the_lower_band() {
    let expectations = [
        (0, RatingBand::D),
        (35, RatingBand::D),
        (36, RatingBand::C),
        (50, RatingBand::C),
        (51, RatingBand::B),
        (65, RatingBand::B),
        (66, RatingBand::A),
        (75, RatingBand::A),
        (76, RatingBand::AA),
        (85, RatingBand::AA),
        (86, RatingBand::AAA),
        (100, RatingBand::AAA),
    ];

    for (points, band) in expectations {
        let score = CreditScore::new(points).expect("valid score");
        assert_eq!(RatingBand::for_score(score), band, "score {points}");
    }
}

#[test]
fn ordered_runs_worst_to_best_and_indexes_match() {
    let ordered = RatingBand::ordered();
    assert_eq!(ordered[0], RatingBand::D);
    assert_eq!(ordered[5], RatingBand::AAA);

    for (position, band) in ordered.into_iter().enumerate() {
        assert_eq!(band.index(), position);
    }
}

#[test]
fn band_ranges_tile_the_scale_without_gaps() {
    let ordered = RatingBand::ordered();
    assert_eq!(ordered[0].score_floor(), 0);
    assert_eq!(ordered[5].score_ceiling(), 100);

    for pair in ordered.windows(2) {
        assert_eq!(pair[0].score_ceiling(), pair[1].score_floor());
    }
}
