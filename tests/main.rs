use std::cell::{Cell, RefCell};

use declopt::{InvalidCapture, OptionDefinition, OptionParser, ParseError, Parsed};
use rand::seq::SliceRandom;
use rand::thread_rng;
use rstest::rstest;

#[test]
fn builder_compiles() {
    OptionParser::new();
}

#[test]
fn flags_once_each_in_any_order() {
    let names = ["-a", "-b", "-c", "-d", "-e"];
    let counts: Vec<Cell<u32>> = names.iter().map(|_| Cell::new(0)).collect();

    for _ in 0..10 {
        counts.iter().for_each(|c| c.set(0));
        let mut tokens = names.to_vec();
        tokens.shuffle(&mut thread_rng());
        let mut parser = OptionParser::new();

        for (name, count) in names.iter().zip(counts.iter()) {
            parser = parser.on_flag(Some(*name), None, "flag", move || {
                count.set(count.get() + 1)
            });
        }

        let parsed = parser.try_parse_tokens(tokens.as_slice()).unwrap();

        assert_eq!(parsed, Parsed::Complete);
        assert!(counts.iter().all(|c| c.get() == 1), "{tokens:?}");
    }
}

#[test]
fn int_value() {
    let mut value: Option<i64> = None;
    let parsed = OptionParser::new()
        .on_int(Some("-n"), Some("--number"), "A number.", |n| {
            value.replace(n);
        })
        .try_parse_tokens(&["-n", "42"])
        .unwrap();

    assert_eq!(parsed, Parsed::Complete);
    assert_eq!(value, Some(42));
}

#[test]
fn int_value_invalid() {
    let mut value: Option<i64> = None;
    let result = OptionParser::new()
        .on_int(Some("-n"), Some("--number"), "A number.", |n| {
            value.replace(n);
        })
        .try_parse_tokens(&["-n", "abc"]);

    assert_eq!(
        result,
        Err(ParseError::InvalidValue {
            option: "-n".to_string(),
            source: InvalidCapture::InvalidConversion {
                token: "abc".to_string(),
                type_name: "i64",
            },
        })
    );
    assert_eq!(value, None);
}

#[rstest]
#[case("true", true)]
#[case("yes", true)]
#[case("1", true)]
#[case("TrUe", true)]
#[case("false", false)]
#[case("no", false)]
#[case("0", false)]
#[case("NO", false)]
fn boolean_value(#[case] token: &str, #[case] expected: bool) {
    let mut value: Option<bool> = None;
    OptionParser::new()
        .on_boolean(Some("-b"), None, "A toggle.", |b| {
            value.replace(b);
        })
        .try_parse_tokens(&["-b", token])
        .unwrap();

    assert_eq!(value, Some(expected));
}

#[rstest]
#[case("y")]
#[case("off")]
#[case("10")]
fn boolean_value_invalid(#[case] token: &str) {
    let result = OptionParser::new()
        .on_boolean(Some("-b"), None, "A toggle.", |_| {})
        .try_parse_tokens(&["-b", token]);

    assert_eq!(
        result,
        Err(ParseError::InvalidValue {
            option: "-b".to_string(),
            source: InvalidCapture::InvalidBoolean {
                token: token.to_string(),
            },
        })
    );
}

#[test]
fn usage_registration_order() {
    let parser = OptionParser::new()
        .separator("Examples:")
        .on_flag(Some("-h"), Some("--help"), "Show this help", || {});

    assert_eq!(parser.usage(), "Examples:\n-h or --help: Show this help");
    assert_eq!(parser.usage(), parser.usage());
}

#[rstest]
#[case(true)]
#[case(false)]
fn unknown_argument_skipped(#[case] warn: bool) {
    let invoked = Cell::new(false);
    let parsed = OptionParser::new()
        .warn_on_unknown_argument(warn)
        .on_flag(Some("-v"), None, "Verbose.", || invoked.set(true))
        .try_parse_tokens(&["--bogus"])
        .unwrap();

    assert_eq!(parsed, Parsed::Complete);
    assert!(!invoked.get());
}

#[test]
fn missing_trailing_value() {
    let result = OptionParser::new()
        .on_arg(Some("-f"), Some("--file"), "A file.", |_| {})
        .try_parse_tokens(&["-f"]);

    assert_eq!(
        result,
        Err(ParseError::MissingValue {
            option: "-f".to_string()
        })
    );
}

#[test]
fn gobbling_cursor() {
    let files = RefCell::new(Vec::default());
    let verbose = Cell::new(0);
    let parsed = OptionParser::new()
        .on_arg(Some("-f"), Some("--file"), "A file.", |f| {
            files.borrow_mut().push(f.to_string())
        })
        .on_flag(Some("-v"), None, "Verbose.", || {
            verbose.set(verbose.get() + 1)
        })
        .try_parse_tokens(&["-f", "x.txt", "-v"])
        .unwrap();

    assert_eq!(parsed, Parsed::Complete);
    assert_eq!(*files.borrow(), vec!["x.txt".to_string()]);
    assert_eq!(verbose.get(), 1);
}

#[test]
fn help_intercepted() {
    let invoked = Cell::new(false);
    let parsed = OptionParser::new()
        .help(Some("-h"), Some("--help"))
        .on_flag(Some("-v"), None, "Verbose.", || invoked.set(true))
        .try_parse_tokens(&["--help", "-v"])
        .unwrap();

    assert_eq!(parsed, Parsed::HelpShown);
    assert!(!invoked.get());
}

#[test]
fn add_definition() {
    let mut ratio: f64 = 0.0;
    let mut name = String::default();
    OptionParser::new()
        .add(OptionDefinition::double_arg(
            None,
            Some("--ratio"),
            "A ratio.",
            |r| ratio = r,
        ))
        .add(OptionDefinition::arg(Some("-n"), None, "A name.", |n| {
            name = n.to_string()
        }))
        .parse_tokens(&["--ratio", "0.25", "-n", "bob"])
        .unwrap();

    assert_eq!(ratio, 0.25);
    assert_eq!(name, "bob");
}
