//! Integration tests for batch verification.

mod common;

use common::fixtures::{
    DEFAULT_QUERY, ResultRecordBuilder, create_matching_batch, create_time_series_records,
    harvested_card,
};
use sieve::{
    MatchMethod, MismatchReason, ResultRecord, SortCheck, SortMode, Verifier, VerifierConfig,
    score, verify, verify_sort_order,
};

#[test]
fn test_exact_substring_in_title() {
    let record = ResultRecordBuilder::new().title("Breaking News Today").build();
    let text = sieve::extract(&record);

    let result = score("news", text.as_str(), 70).unwrap();

    assert!(result.is_match);
    assert_eq!(result.score, 100.0);
    assert_eq!(result.method, Some(MatchMethod::ExactSubstring));
}

#[test]
fn test_raw_card_text_is_normalized_before_scoring() {
    let result = score("news", "Breaking News Today", 70).unwrap();
    assert_eq!(result.method, Some(MatchMethod::ExactSubstring));

    let result = score("news", "Breaking NEWS.mp4 Today", 70).unwrap();
    assert_eq!(result.method, Some(MatchMethod::ExactSubstring));
}

#[test]
fn test_all_words_present_out_of_order() {
    let record = ResultRecordBuilder::new()
        .title("Results from the national election")
        .build();
    let text = sieve::extract(&record);

    let result = score(DEFAULT_QUERY, text.as_str(), 70).unwrap();

    assert!(result.is_match);
    assert_eq!(result.score, 95.0);
    assert_eq!(result.method, Some(MatchMethod::AllWordsPresent));
}

#[test]
fn test_unrelated_text_does_not_match() {
    let result = score("xyzzy", "weather update", 70).unwrap();

    assert!(!result.is_match);
    assert!(result.score < 50.0);
}

#[test]
fn test_threshold_only_affects_best_score_rule() {
    let lenient = score("xyzzy", "weather update", 0).unwrap();
    let strict = score("xyzzy", "weather update", 100).unwrap();

    assert!(lenient.is_match);
    assert!(!strict.is_match);
    assert_eq!(lenient.score, strict.score);
    assert_eq!(lenient.method, strict.method);
}

#[test]
fn test_noise_stripping_keeps_query_inside_words() {
    let records = vec![ResultRecordBuilder::new().title("The Movie Collection").build()];

    let report = verify("movie", &records, 70, 150).unwrap();

    assert_eq!(report.matched_count, 1);
    assert!(report.mismatches.is_empty());
}

#[test]
fn test_blank_record_reported_as_unreadable() {
    let report = verify("news", &[ResultRecord::default()], 70, 150).unwrap();

    assert_eq!(report.total_checked, 1);
    assert_eq!(report.matched_count, 0);
    assert_eq!(report.unreadable_count, 1);
    assert_eq!(report.mismatches.len(), 1);
    assert_eq!(report.mismatches[0].reason.to_string(), "no metadata found");
}

#[test]
fn test_batch_truncated_to_first_records() {
    let mut records = create_matching_batch("news", 140);
    records.extend(std::iter::repeat_n(ResultRecord::default(), 60));
    assert_eq!(records.len(), 200);

    let report = verify("news", &records, 70, 150).unwrap();

    assert_eq!(report.total_checked, 150);
    assert_eq!(report.matched_count, 140);
    assert_eq!(report.unreadable_count, 10);
    assert!(report.mismatches.iter().all(|m| m.index < 150));
}

#[test]
fn test_media_cards_match_despite_noise() {
    let records = create_matching_batch(DEFAULT_QUERY, 25);

    let report = verify(DEFAULT_QUERY, &records, 70, 150).unwrap();

    assert_eq!(report.total_checked, 25);
    assert!(report.all_matched());
    assert!(report.passes(100.0));
}

#[test]
fn test_typo_tolerated() {
    let records = vec![
        ResultRecordBuilder::new()
            .title("Regional elction coverage")
            .build(),
    ];

    let report = verify("election", &records, 70, 150).unwrap();

    assert_eq!(report.matched_count, 1);
}

#[test]
fn test_mixed_batch_report() {
    let records = vec![
        ResultRecordBuilder::new().title("Election results live").build(),
        ResultRecordBuilder::new().alt_text("Pho Bowl").build(),
        ResultRecord::default(),
        ResultRecordBuilder::new()
            .aria_label("Jazz Quizz")
            .data_attributes("data-kind=video")
            .build(),
    ];

    let report = verify(DEFAULT_QUERY, &records, 70, 150).unwrap();

    assert_eq!(report.total_checked, 4);
    assert_eq!(report.matched_count, 1);
    assert_eq!(report.unreadable_count, 1);
    assert_eq!(report.match_percentage, 25.0);
    assert_eq!(report.mismatches.len(), 3);
    assert_eq!(report.mismatches[0].title, "Pho Bowl");
    assert_eq!(report.mismatches[1].reason, MismatchReason::NoMetadata);
    assert_eq!(report.mismatches[2].title, "Jazz Quizz");
    assert!(!report.passes(100.0));

    let summary = report.to_string();
    assert!(summary.contains("Matched: 1 (25.0%)"));
    assert!(summary.contains("Unmatched: 3 (75.0%)"));
}

#[test]
fn test_verify_is_deterministic() {
    let records = vec![
        ResultRecordBuilder::new().title("Election night").build(),
        ResultRecordBuilder::new().description("Market update").build(),
    ];

    let first = verify(DEFAULT_QUERY, &records, 70, 150).unwrap();
    let second = verify(DEFAULT_QUERY, &records, 70, 150).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_harvested_records() {
    let records = vec![
        harvested_card("Election results 2024", "Election results 2024 03:15"),
        harvested_card("Weather", "Rain tomorrow"),
        serde_json::json!("not a record"),
    ];
    let verifier = Verifier::new(VerifierConfig::default()).unwrap();

    let report = verifier.verify_harvested(DEFAULT_QUERY, &records).unwrap();

    assert_eq!(report.total_checked, 3);
    assert_eq!(report.matched_count, 1);
    assert_eq!(report.unreadable_count, 1);
    assert!(matches!(
        report.mismatches[1].reason,
        MismatchReason::Undecodable { .. }
    ));
}

#[test]
fn test_deep_check_consults_details_dialog() {
    let records = vec![
        ResultRecordBuilder::new()
            .title("Jazz Quizz")
            .detail_text("Topics: election results, weather")
            .build(),
    ];
    let config = VerifierConfig::default().with_deep_check(true);

    let report = Verifier::new(config)
        .unwrap()
        .verify(DEFAULT_QUERY, &records)
        .unwrap();

    assert_eq!(report.matched_count, 1);
    assert_eq!(report.recovered_by_deep_check, 1);
}

#[test]
fn test_block_counting_on_page_text() {
    let page = "Election results\nLive coverage of the election results\n04:12\n1.2 GB\nSee details\nWeather";
    let verifier = Verifier::new(VerifierConfig::default()).unwrap();

    let counts = verifier.count_blocks(DEFAULT_QUERY, page).unwrap();

    assert_eq!(counts.exact, 2);
    assert_eq!(counts.total_blocks, 6);
    assert_eq!(counts.kept_blocks, 3);
    assert_eq!(counts.fuzzy, 2);
    assert_eq!(counts.count(), 2);
}

#[test]
fn test_sort_order_on_time_series() {
    let oldest_first = create_time_series_records(3600, 5);
    let mut newest_first = oldest_first.clone();
    newest_first.reverse();

    assert_eq!(
        verify_sort_order(SortMode::OldestFirst, &oldest_first),
        SortCheck::Ordered { checked: 5 }
    );
    assert_eq!(
        verify_sort_order("Date (Newest first)".parse().unwrap(), &newest_first),
        SortCheck::Ordered { checked: 5 }
    );
    assert!(!verify_sort_order(SortMode::NewestFirst, &oldest_first).is_ok());
}
