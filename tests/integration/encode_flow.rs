use std::io::Cursor;

use favhash::cmd::encode::run;
use favhash::engine::encode::LINE_WIDTH;

#[test]
fn encode_flow_lines_never_exceed_width() {
    let input: Vec<u8> = (0..=255).collect();
    let mut output = Vec::new();
    run(Cursor::new(input), &mut output).expect("encode flow should succeed");

    let text = String::from_utf8(output).expect("ascii output");
    assert!(text.ends_with('\n'));
    let lines: Vec<&str> = text.lines().collect();
    // 256 bytes encode to 344 characters
    assert_eq!(lines.len(), 5);
    assert!(lines.iter().all(|line| line.len() <= LINE_WIDTH));
    assert_eq!(lines.iter().map(|line| line.len()).sum::<usize>(), 344);
}
