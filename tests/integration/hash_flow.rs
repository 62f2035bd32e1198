use std::io::Cursor;

use favhash::cmd::hash::{HashCommandArgs, HashInput, run};
use favhash::domain::report::HashReport;
use favhash::engine::mmh3::HashOptions;

#[test]
fn hash_flow_writes_report_for_stdin() {
    let args = HashCommandArgs {
        options: HashOptions::with_seed(42),
        ..HashCommandArgs::default()
    };
    let mut output = Vec::new();
    run(&args, Cursor::new(b"abcde"), &mut output).expect("hash flow should succeed");

    let report: HashReport = serde_json::from_slice(&output).expect("report json");
    assert_eq!(report.hash, 3841889064);
    assert_eq!(report.hash_signed, -453078232);
    assert_eq!(report.length, 5);
}

#[test]
fn hash_flow_is_deterministic() {
    let args = HashCommandArgs {
        input: HashInput::Text("Hello, world!".to_string()),
        ..HashCommandArgs::default()
    };

    let mut first = Vec::new();
    run(&args, Cursor::new(b""), &mut first).expect("first run should succeed");
    let mut second = Vec::new();
    run(&args, Cursor::new(b""), &mut second).expect("second run should succeed");

    assert_eq!(first, second);
}
