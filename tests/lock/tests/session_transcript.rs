//! Full interactive transcripts over the `small` fixture.

use degrees_harness::session::{run_session, SessionError, SessionOptions, SessionSummary};
use degrees_search::{FrontierKind, SearchPolicy};
use lock_tests::load_small;

fn transcript(input: &str, options: &SessionOptions) -> (Result<SessionSummary, SessionError>, String) {
    let store = load_small();
    let mut reader = std::io::Cursor::new(input.as_bytes().to_vec());
    let mut out = Vec::new();
    let result = run_session(&store, &mut reader, &mut out, options);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn verbose_two_rounds() {
    let (result, out) = transcript(
        "Tom Cruise\nTom Hanks\ny\nkevin bacon\nemma watson\nno\n",
        &SessionOptions::default(),
    );
    assert_eq!(
        result.unwrap(),
        SessionSummary {
            queries: 2,
            connected: 1
        }
    );
    assert_eq!(
        out,
        "Name: Name: 2 degrees of separation.\n\
         1: Tom Cruise and Kevin Bacon starred in A Few Good Men\n\
         2: Kevin Bacon and Tom Hanks starred in Apollo 13\n\
         Try again (Y/N)? \
         Name: Name: Not connected.\n\
         Try again (Y/N)? "
    );
}

#[test]
fn quiet_transcript_matches_grader_format() {
    let options = SessionOptions {
        quiet: true,
        ..SessionOptions::default()
    };
    let (result, out) = transcript("Cary Elwes\nKevin Bacon\nn\n", &options);
    assert_eq!(result.unwrap().queries, 1);
    assert_eq!(
        out,
        "Cary Elwes (ID: 144) - Kevin Bacon (ID: 102)\n\
         3 degrees of separation.\n\
         \n"
    );
}

#[test]
fn unknown_first_name_reports_person_one() {
    let (result, out) = transcript("Nobody\nTom Hanks\n", &SessionOptions::default());
    assert_eq!(result.unwrap_err().to_string(), "Person 1 not found.");
    assert_eq!(out, "Name: Name: ");
}

#[test]
fn json_transcript_carries_digest_and_policy() {
    let store = load_small();
    let options = SessionOptions {
        quiet: true,
        json: true,
        policy: SearchPolicy {
            frontier: FrontierKind::Stack,
            ..SearchPolicy::default()
        },
    };
    let mut reader = std::io::Cursor::new(b"Dustin Hoffman\nSally Field\n".to_vec());
    let mut out = Vec::new();
    run_session(&store, &mut reader, &mut out, &options).unwrap();

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["dataset_digest"], store.digest().as_str());
    assert_eq!(json["policy"]["frontier"], "stack");
    assert_eq!(json["connected"], true);
    assert!(json["degrees"].as_u64().unwrap() >= 4);
}
