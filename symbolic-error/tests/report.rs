use symbolic_attrs::ErrorKind;
use symbolic_error::Error;

/// A missing closing delimiter.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unclosed `{}`", self.delimiter),
    labels = ["this delimiter is not closed", "expected it to be closed here"],
    help = "add the closing delimiter",
)]
pub struct Unclosed {
    pub delimiter: char,
}

/// An error with no source location.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(message = "the computation failed", labels = ["unused"], note = "this error has no span")]
pub struct Detached;

/// Renders the report of the given error without any terminal colors.
fn render(err: &Error, input: &str) -> String {
    let mut buf = Vec::new();
    err.write_report("input", input, &mut buf).unwrap();
    String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
}

#[test]
fn message_uses_fields() {
    let err = Error::new(vec![0..1], Unclosed { delimiter: '(' });
    assert_eq!(err.message(), "unclosed `(`");
    assert_eq!(err.to_string(), "unclosed `(`");
}

#[test]
fn downcast_to_kind() {
    let err = Error::new(vec![0..1], Unclosed { delimiter: '|' });
    assert!(err.is::<Unclosed>());
    assert!(!err.is::<Detached>());
    assert_eq!(err.downcast_ref::<Unclosed>(), Some(&Unclosed { delimiter: '|' }));
}

#[test]
fn report_contains_labels_and_help() {
    let input = "(1 + 2";
    let err = Error::new(vec![0..1, 6..6], Unclosed { delimiter: '(' });
    let report = render(&err, input);
    assert!(report.contains("unclosed `(`"));
    assert!(report.contains("this delimiter is not closed"));
    assert!(report.contains("add the closing delimiter"));
}

#[test]
fn spanless_report_has_no_labels() {
    let err = Error::spanless(Detached);
    let report = render(&err, "x");
    assert!(report.contains("the computation failed"));
    assert!(report.contains("this error has no span"));
    assert!(!report.contains("unused"));
}

#[test]
fn with_spans_replaces_spans() {
    let err = Error::spanless(Detached).with_spans(vec![2..3]);
    assert_eq!(err.spans, vec![2..3]);
}
