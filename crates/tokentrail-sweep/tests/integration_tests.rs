//! Integration tests for tokentrail-sweep

use tokentrail_domain::{
    Corpus, HttpRequest, HttpResponse, ResponseBody, TokenLocation, Transaction,
};
use tokentrail_sweep::{CorpusSurvey, SeedDiscoverer};

const STREAM_TOKEN: &str =
    "a1b2c3d4e5f60718293a4b5c6d7e8f9012345678.live.1700000000-AbC+/=xyz";
const PATH_TOKEN: &str = "Xk29fLq83ZpR7mT4wQ";

fn corpus() -> Corpus {
    Corpus::new(vec![
        Transaction::new(
            HttpRequest::new("GET", "https://www.example.com/index.html"),
            HttpResponse::new(200, ResponseBody::from_text("<html>welcome</html>", Some("text/html"))),
        ),
        Transaction::new(
            HttpRequest::new("GET", format!("https://api.example.com/v1/live/{}/play", PATH_TOKEN)),
            HttpResponse::new(
                200,
                ResponseBody::from_text(format!("match 1029384756 stream {}", STREAM_TOKEN), None),
            ),
        ),
    ])
}

#[test]
fn test_seeds_follow_tier_order() {
    let seeds = SeedDiscoverer::default_config().discover(&corpus());

    let values: Vec<&str> = seeds.iter().map(|s| s.value.as_str()).collect();
    assert_eq!(values, vec!["1029384756", STREAM_TOKEN, PATH_TOKEN]);

    assert!(seeds[0].classification.is("numeric_id"));
    assert!(seeds[1].classification.is("stream_token"));
    assert_eq!(seeds[2].source.location, TokenLocation::UrlPath);

    assert_eq!(seeds[0].occurrences, 1);
    // only seen in a URL, never in a body
    assert_eq!(seeds[2].occurrences, 0);
}

#[test]
fn test_ranked_by_entropy() {
    let ranked = SeedDiscoverer::default_config().ranked(&corpus());
    assert_eq!(ranked[0].value, STREAM_TOKEN);
    assert_eq!(ranked[1].value, PATH_TOKEN);
    assert!(ranked.windows(2).all(|w| w[0].entropy >= w[1].entropy));
    // the low-entropy timestamp inside the stream token is never proposed
    assert!(ranked.iter().all(|c| c.value != "1700000000"));
}

#[test]
fn test_survey_report() {
    let report = CorpusSurvey::default_config().survey(&corpus());

    assert_eq!(report.total_entries, 2);
    assert_eq!(report.api_calls, 0);
    assert_eq!(report.external_services, vec!["api.example.com"]);
    assert_eq!(report.pattern_matches.get("stream_token"), Some(&1));
    assert_eq!(report.pattern_matches.get("numeric_id"), Some(&1));
    assert_eq!(report.pattern_matches.get("timestamp"), Some(&1));

    let summary = report.summary();
    assert!(summary.contains("Total entries: 2"));
    assert!(summary.contains("External services: api.example.com"));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["total_entries"], 2);
}
