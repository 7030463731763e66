// Command tests: drive each exercise with in-memory input and output

use primer_cli::{commands, Outcome};
use primer_core::{
    config::InputConfig, counter::CallCounter, OutputFormat, Report, TokenReader,
};
use std::io::Cursor;

struct Run {
    outcome: Outcome,
    out: String,
    err: String,
}

fn drive<F>(input: &str, command: F) -> Run
where
    F: FnOnce(
        &mut TokenReader<Cursor<&str>>,
        &mut Vec<u8>,
        &mut Vec<u8>,
    ) -> primer_core::Result<Outcome>,
{
    let mut reader = TokenReader::new(Cursor::new(input));
    let mut out = Vec::new();
    let mut err = Vec::new();
    let outcome = command(&mut reader, &mut out, &mut err).expect("command failed");

    Run {
        outcome,
        out: String::from_utf8(out).unwrap(),
        err: String::from_utf8(err).unwrap(),
    }
}

fn bookstore(input: &str, report: Report, config: InputConfig) -> Run {
    drive(input, |r, out, err| {
        commands::bookstore::run(r, out, err, &report, &config)
    })
}

#[test]
fn test_bookstore_groups_totals() {
    let run = bookstore(
        "B1 2 10.00\nB1 3 10.00\nB2 1 10.00\n",
        Report::default(),
        InputConfig::default(),
    );

    assert_eq!(run.outcome, Outcome::Success);
    assert_eq!(run.out, "B1 5 50.00 10.00\nB2 1 10.00 10.00\n");
    assert!(run.err.is_empty());
}

#[test]
fn test_bookstore_zero_units() {
    let run = bookstore("B1 0 12.50\n", Report::default(), InputConfig::default());
    assert_eq!(run.outcome, Outcome::Success);
    assert_eq!(run.out, "B1 0 0.00 (no sales)\n");
}

#[test]
fn test_bookstore_no_data() {
    let run = bookstore("  \n", Report::default(), InputConfig::default());
    assert_eq!(run.outcome, Outcome::Failure);
    assert!(run.out.is_empty());
    assert_eq!(run.err, "No data?!\n");
}

#[test]
fn test_bookstore_malformed_flushes_pending_group() {
    let run = bookstore(
        "B1 2 10.00\nB1 x 1.00\n",
        Report::default(),
        InputConfig::default(),
    );

    assert_eq!(run.outcome, Outcome::Failure);
    assert_eq!(run.out, "B1 2 20.00 10.00\n");
    assert!(run.err.contains("units sold"));
}

#[test]
fn test_bookstore_truncated_record() {
    let run = bookstore("B1 2", Report::default(), InputConfig::default());
    assert_eq!(run.outcome, Outcome::Failure);
    assert!(run.err.contains("price"));
}

#[test]
fn test_bookstore_rejects_regrouped_when_configured() {
    let input = "B1 1 1.00\nB2 1 1.00\nB1 1 1.00\n";

    let run = bookstore(input, Report::default(), InputConfig::default());
    assert_eq!(run.outcome, Outcome::Success);
    assert_eq!(run.out.lines().count(), 3);

    let run = bookstore(
        input,
        Report::default(),
        InputConfig {
            reject_regrouped: true,
        },
    );
    assert_eq!(run.outcome, Outcome::Failure);
    assert_eq!(run.out, "B1 1 1.00 1.00\nB2 1 1.00 1.00\n");
    assert!(run.err.contains("not grouped"));
}

#[test]
fn test_bookstore_non_utf8_isbn() {
    let mut reader = TokenReader::new(Cursor::new(&b"B1 2 10.00\nB\xe92 1 4.00\n"[..]));
    let mut out = Vec::new();
    let mut err = Vec::new();

    let outcome = commands::bookstore::run(
        &mut reader,
        &mut out,
        &mut err,
        &Report::default(),
        &InputConfig::default(),
    )
    .expect("command failed");

    assert_eq!(outcome, Outcome::Failure);
    assert_eq!(String::from_utf8(out).unwrap(), "B1 2 20.00 10.00\n");
    assert!(String::from_utf8(err).unwrap().contains("not valid UTF-8"));
}

#[test]
fn test_bookstore_units_overflow() {
    let run = bookstore(
        "B1 4294967295 1 B1 1 1",
        Report::default(),
        InputConfig::default(),
    );

    assert_eq!(run.outcome, Outcome::Failure);
    assert_eq!(run.out, "B1 4294967295 4294967295.00 1.00\n");
    assert!(run.err.contains("Overflow"));
}

#[test]
fn test_bookstore_json_lines() {
    let run = bookstore(
        "B1 2 10.00\nB2 0 3.00\n",
        Report::new(OutputFormat::Json, 2),
        InputConfig::default(),
    );

    let lines: Vec<serde_json::Value> = run
        .out
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["isbn"], "B1");
    assert_eq!(lines[0]["revenue"], "20.00");
    assert_eq!(lines[0]["average_price"], "10.00");
    assert!(lines[1]["average_price"].is_null());
}

#[test]
fn test_count_isbn() {
    let run = drive("A 1 1\nA 2 2\nB 1 1\n", |r, out, err| {
        commands::count_isbn::run(r, out, err)
    });

    assert_eq!(run.outcome, Outcome::Success);
    assert_eq!(
        run.out,
        "Transaction A occurred 2 times\nTransaction B occurred 1 times\n"
    );
}

#[test]
fn test_count_isbn_empty_input() {
    let run = drive("", |r, out, err| commands::count_isbn::run(r, out, err));
    assert_eq!(run.outcome, Outcome::Failure);
    assert!(run.err.contains("grouped together"));
}

#[test]
fn test_sum_pair_same_isbn() {
    let run = drive("B1 2 10.00 B1 1 4.00", |r, out, err| {
        commands::sum_pair::run(r, out, err, &Report::default())
    });

    assert_eq!(run.outcome, Outcome::Success);
    assert_eq!(run.out, "B1 3 24.00 8.00\n");
}

#[test]
fn test_sum_pair_mismatch() {
    let run = drive("B1 2 10.00\nB2 1 4.00\n", |r, out, err| {
        commands::sum_pair::run(r, out, err, &Report::default())
    });

    assert_eq!(run.outcome, Outcome::Failure);
    assert!(run.out.is_empty());
    assert_eq!(run.err, "Data must refer to the same ISBN\n");
}

#[test]
fn test_sum_pair_units_overflow() {
    let run = drive("B1 4294967295 1 B1 1 1", |r, out, err| {
        commands::sum_pair::run(r, out, err, &Report::default())
    });

    assert_eq!(run.outcome, Outcome::Failure);
    assert!(run.out.is_empty());
    assert!(run.err.contains("Overflow"));
}

#[test]
fn test_sum_pair_needs_two() {
    let run = drive("B1 2 10.00\n", |r, out, err| {
        commands::sum_pair::run(r, out, err, &Report::default())
    });
    assert_eq!(run.outcome, Outcome::Failure);
    assert!(run.err.contains("two transactions"));
}

#[test]
fn test_runs() {
    let run = drive("42 42 42 55 55\n62 100 100 100\n", |r, out, err| {
        commands::runs::run(r, out, err)
    });

    assert_eq!(run.outcome, Outcome::Success);
    assert_eq!(
        run.out,
        "42 occurs 3 times\n55 occurs 2 times\n62 occurs 1 times\n100 occurs 3 times\n"
    );
}

#[test]
fn test_runs_empty_input_succeeds() {
    let run = drive("", |r, out, err| commands::runs::run(r, out, err));
    assert_eq!(run.outcome, Outcome::Success);
    assert!(run.out.is_empty());
}

#[test]
fn test_runs_stops_on_bad_token() {
    let run = drive("7 7 seven", |r, out, err| commands::runs::run(r, out, err));
    assert_eq!(run.outcome, Outcome::Failure);
    assert_eq!(run.out, "7 occurs 2 times\n");
    assert!(run.err.contains("seven"));
}

#[test]
fn test_aliasing() {
    let run = drive("", |_, out, _| commands::aliasing::run(out));
    assert_eq!(run.out, "3.14159 3.14159\n0 0\n0\n0 0\n");
}

#[test]
fn test_compare() {
    let run = drive("world\nhello\n", |r, out, _| commands::compare::run(r, out));
    assert_eq!(run.out, "String hello is less than world\n");

    let run = drive("same text\nsame text\n", |r, out, _| {
        commands::compare::run(r, out)
    });
    assert_eq!(run.out, "Strings same text and same text are equal.\n");
}

#[test]
fn test_compare_empty_input() {
    let run = drive("", |r, out, _| commands::compare::run(r, out));
    assert_eq!(run.out, "Strings are empty.\nStrings  and  are equal.\n");
}

#[test]
fn test_find_char() {
    let run = drive(" o\n", |r, out, err| {
        commands::find_char::run("hello world", r, out, err)
    });

    assert_eq!(run.outcome, Outcome::Success);
    assert_eq!(
        run.out,
        "Enter one character:\nFirst occurrence of o is at position: 4\no occurs 2 times.\n"
    );
}

#[test]
fn test_find_char_missing() {
    let run = drive("z", |r, out, err| {
        commands::find_char::run("hello", r, out, err)
    });
    assert_eq!(
        run.out,
        "Enter one character:\nz not found in the string\nz occurs 0 times.\n"
    );

    let run = drive("", |r, out, err| commands::find_char::run("hello", r, out, err));
    assert_eq!(run.outcome, Outcome::Failure);
}

#[test]
fn test_count_calls_keeps_state_across_rounds() {
    let counter = CallCounter::new();
    let run = drive("2 0 3", |r, out, err| {
        commands::count_calls::run(3, || counter.next(), r, out, err)
    });

    assert_eq!(run.outcome, Outcome::Success);
    assert_eq!(
        run.out,
        "Enter one integer:\nYou increased static integer 2 times\n0\n1\n\
         Enter one integer:\nYou increased static integer 0 times\n\
         Enter one integer:\nYou increased static integer 3 times\n2\n3\n4\n"
    );
    assert_eq!(counter.calls(), 5);
}

#[test]
fn test_count_calls_negative_stops() {
    let counter = CallCounter::new();
    let run = drive("1 -4 2", |r, out, err| {
        commands::count_calls::run(3, || counter.next(), r, out, err)
    });

    assert_eq!(run.outcome, Outcome::Failure);
    assert!(run.err.contains("0 or more"));
    assert_eq!(counter.calls(), 1);
}

#[test]
fn test_count_calls_eof_ends_early() {
    let counter = CallCounter::new();
    let run = drive("1", |r, out, err| {
        commands::count_calls::run(3, || counter.next(), r, out, err)
    });

    assert_eq!(run.outcome, Outcome::Success);
    assert_eq!(
        run.out,
        "Enter one integer:\nYou increased static integer 1 times\n0\nEnter one integer:\n"
    );
}
