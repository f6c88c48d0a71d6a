use slackedit::permalink::parse_permalink;

#[test]
fn parses_full_permalink_with_microsecond_suffix() {
    let locator =
        parse_permalink("https://workspace.slack.com/archives/C01234ABCDE/p1234567890123456")
            .expect("permalink should parse");

    assert_eq!(locator.channel.0, "C01234ABCDE");
    assert_eq!(locator.ts.0, "1234567890.123456");
}

#[test]
fn eleven_digit_run_gains_a_single_fraction_digit() {
    let locator = parse_permalink("https://workspace.slack.com/archives/C0ABCDE/p12345678901")
        .expect("permalink should parse");

    assert_eq!(locator.ts.0, "1234567890.1");
}

#[test]
fn short_digit_runs_are_not_split() {
    // Runs of ten digits or fewer pass through with no separator inserted.
    // Real Slack timestamps always carry a microsecond fraction, so a locator
    // built from such a link will usually miss on the history lookup; this
    // test pins the passthrough so the behavior stays observable.
    let locator = parse_permalink("https://workspace.slack.com/archives/C0ABCDE/p123")
        .expect("permalink should parse");
    assert_eq!(locator.channel.0, "C0ABCDE");
    assert_eq!(locator.ts.0, "123");

    // Exactly ten digits sits on the boundary and is also left alone.
    let locator = parse_permalink("https://workspace.slack.com/archives/C0ABCDE/p1234567890")
        .expect("permalink should parse");
    assert_eq!(locator.ts.0, "1234567890");
}

#[test]
fn rejects_strings_without_the_archives_shape() {
    let inputs = [
        "not a url",
        "",
        "https://workspace.slack.com/archives/C0ABCDE",
        "https://workspace.slack.com/archives/C0ABCDE/x123",
        "https://workspace.slack.com/C0ABCDE/p123",
        "archives/C0ABCDE/p",
    ];

    for input in inputs {
        assert!(
            parse_permalink(input).is_none(),
            "expected no locator for {input:?}"
        );
    }
}

#[test]
fn match_is_not_anchored_to_a_well_formed_url() {
    // Any string containing the archives substring parses; the surrounding
    // text is irrelevant.
    let locator = parse_permalink("see archives/C0ABCDE/p123 for details")
        .expect("embedded substring should parse");
    assert_eq!(locator.channel.0, "C0ABCDE");

    // First occurrence wins.
    let locator = parse_permalink("archives/C1/p11 archives/C2/p22")
        .expect("first occurrence should parse");
    assert_eq!(locator.channel.0, "C1");
    assert_eq!(locator.ts.0, "11");
}

#[test]
fn trailing_query_string_is_ignored() {
    let locator = parse_permalink(
        "https://workspace.slack.com/archives/C0ABCDE/p1234567890123456?thread_ts=1234567890.123456&cid=C0ABCDE",
    )
    .expect("permalink with query should parse");

    assert_eq!(locator.channel.0, "C0ABCDE");
    assert_eq!(locator.ts.0, "1234567890.123456");
}

#[test]
fn reparsing_a_reconstructed_permalink_yields_the_same_locator() {
    let first =
        parse_permalink("https://workspace.slack.com/archives/C01234ABCDE/p1234567890123456")
            .expect("permalink should parse");

    let rebuilt = format!(
        "https://workspace.slack.com/archives/{}/p{}",
        first.channel.0,
        first.ts.0.replace('.', "")
    );
    let second = parse_permalink(&rebuilt).expect("rebuilt permalink should parse");

    assert_eq!(first, second);
}
