use algolab::{binary_search, quicksort, AlgoError, SearchOutcome};

#[test]
fn finds_target_in_odd_sequence() {
    assert_eq!(binary_search(&[1, 3, 5, 7, 9], &5), Ok(SearchOutcome::Found(2)));
}

#[test]
fn reports_missing_target() {
    assert_eq!(binary_search(&[1, 3, 5, 7, 9], &4), Ok(SearchOutcome::NotFound));
}

#[test]
fn empty_input_is_an_error() {
    assert_eq!(binary_search::<i32>(&[], &4), Err(AlgoError::EmptyInput));
}

#[test]
fn unordered_input_is_an_error() {
    let err = binary_search(&[2, 1], &1).unwrap_err();
    assert_eq!(err, AlgoError::PreconditionViolation { index: 0 });
    assert_eq!(
        err.to_string(),
        "sequence is not ordered: element 0 is larger than element 1"
    );
}

#[test]
fn every_position_in_even_sequence() {
    let seq: Vec<i64> = (0..64).map(|i| i * 3).collect();
    for (i, x) in seq.iter().enumerate() {
        assert_eq!(binary_search(&seq, x), Ok(SearchOutcome::Found(i)));
        assert_eq!(binary_search(&seq, &(x + 1)), Ok(SearchOutcome::NotFound));
    }
    assert_eq!(binary_search(&seq, &-1), Ok(SearchOutcome::NotFound));
}

#[test]
fn duplicates_return_a_matching_index() {
    let seq = [1, 2, 2, 2, 3];
    let index = binary_search(&seq, &2).unwrap().index().unwrap();
    assert_eq!(seq[index], 2);
}

#[test]
fn search_after_sorting_strings() {
    let words = quicksort(&["delta", "alpha", "charlie", "bravo"]);
    assert_eq!(binary_search(&words, &"charlie"), Ok(SearchOutcome::Found(2)));
    assert_eq!(binary_search(&words, &"echo"), Ok(SearchOutcome::NotFound));
}

#[test]
fn outcome_serializes() {
    let found = serde_json::to_string(&SearchOutcome::Found(2)).unwrap();
    assert_eq!(found, r#"{"Found":2}"#);
    let missing: SearchOutcome = serde_json::from_str(r#""NotFound""#).unwrap();
    assert_eq!(missing, SearchOutcome::NotFound);
}
