use kitbag::{Error, Prompter};
use std::io::Cursor;

fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
    Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[test]
fn test_read_int_accepts_first_valid_token() {
    let mut p = prompter("42\n");
    assert_eq!(p.read_int("n? ").unwrap(), 42);
}

#[test]
fn test_read_int_retries_malformed_input() {
    let mut p = prompter("abc\nnot a number\n12\n");
    assert_eq!(p.read_int("n? ").unwrap(), 12);
}

#[test]
fn test_prompt_is_written_once_per_attempt() {
    let mut p = Prompter::new(Cursor::new(b"x\n5\n".to_vec()), Vec::new());
    p.read_int("n? ").unwrap();

    let (_, output) = p.into_parts();
    assert_eq!(String::from_utf8(output).unwrap(), "n? n? ");
}

#[test]
fn test_rest_of_line_is_discarded_after_first_token() {
    let mut p = prompter("7 trailing junk\n8\n");
    assert_eq!(p.read_int("n? ").unwrap(), 7);
    // Next read starts on the next line, not at "trailing"
    assert_eq!(p.read_int("n? ").unwrap(), 8);
}

#[test]
fn test_blank_lines_are_retried() {
    let mut p = prompter("\n\n9\n");
    assert_eq!(p.read_int("n? ").unwrap(), 9);
}

#[test]
fn test_read_bool_is_case_insensitive() {
    let mut p = prompter("TRUE\nFalse\n");
    assert!(p.read_bool("b? ").unwrap());
    assert!(!p.read_bool("b? ").unwrap());
}

#[test]
fn test_read_bool_rejects_non_boolean_tokens() {
    let mut p = prompter("yes\n1\ntrue\n");
    assert!(p.read_bool("b? ").unwrap());
}

#[test]
fn test_read_float() {
    let mut p = prompter("three\n3.5\n");
    assert_eq!(p.read_float("f? ").unwrap(), 3.5);
}

#[test]
fn test_negative_numbers_parse() {
    let mut p = prompter("-17\n-2.25\n");
    assert_eq!(p.read_int("n? ").unwrap(), -17);
    assert_eq!(p.read_float("f? ").unwrap(), -2.25);
}

#[test]
fn test_eof_reports_input_closed() {
    let mut p = prompter("");
    let err = p.read_int("n? ").unwrap_err();
    assert!(matches!(err, Error::InputClosed));
}

#[test]
fn test_eof_after_malformed_input_reports_input_closed() {
    let mut p = prompter("garbage\n");
    let err = p.read_int("n? ").unwrap_err();
    assert!(matches!(err, Error::InputClosed));
}

#[test]
fn test_attempt_limit_caps_retries() {
    let mut p = prompter("a\nb\nc\nd\n99\n").with_attempt_limit(2);
    let err = p.read_int("n? ").unwrap_err();
    assert!(matches!(err, Error::RetriesExhausted { attempts: 2 }));
}

#[test]
fn test_attempt_limit_allows_valid_input_before_the_cap() {
    let mut p = prompter("a\n5\n").with_attempt_limit(3);
    assert_eq!(p.read_int("n? ").unwrap(), 5);
}

#[test]
fn test_close_consumes_the_prompter() {
    let p = prompter("unused\n");
    p.close();
}
