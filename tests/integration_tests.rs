//! End-to-end tests for the file-based `parse(input, output)` entry point

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use conftoml::{ConvertError, parse};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// An input/output path pair under the system temp dir, removed on drop.
struct TempPair {
    input: PathBuf,
    output: PathBuf,
}

impl TempPair {
    fn new(name: &str, contents: &str) -> Self {
        let id = COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir();
        let stem = format!("conftoml_it_{}_{}_{}", std::process::id(), id, name);
        let pair = Self {
            input: dir.join(format!("{stem}.conf")),
            output: dir.join(format!("{stem}.toml")),
        };
        fs::write(&pair.input, contents).unwrap();
        pair
    }

    fn run(&self) -> Result<String, ConvertError> {
        parse(&self.input, &self.output)?;
        Ok(fs::read_to_string(&self.output).unwrap())
    }
}

impl Drop for TempPair {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.input);
        let _ = fs::remove_file(&self.output);
    }
}

fn convert(name: &str, source: &str) -> String {
    TempPair::new(name, source)
        .run()
        .unwrap_or_else(|e| panic!("conversion of {name} failed: {e}"))
}

#[test]
fn test_constants_produce_no_output() {
    let toml = convert(
        "constants",
        "\n// Тест констант\nPORT := 8080;\nHOST := @\"localhost\";\nOCTAL := 0o755;\nEXPRESSION := ?(+ 10 20);\n",
    );
    assert_eq!(toml, "");
}

#[test]
fn test_arrays() {
    let toml = convert(
        "arrays",
        "\nHOSTS := [ @\"host1\", @\"host2\", @\"host3\" ];\nPORTS := [ 80, 443, 8080 ];\n\n[network]\nhosts = HOSTS\nports = PORTS\n",
    );
    assert_eq!(
        toml,
        "[network]\nhosts = [\"host1\", \"host2\", \"host3\"]\nports = [80, 443, 8080]\n"
    );
}

#[test]
fn test_array_reference_from_key() {
    let toml = convert("hosts", "HOSTS := [@\"host1\", @\"host2\"];\nhosts = HOSTS\n");
    assert_eq!(toml, "hosts = [\"host1\", \"host2\"]\n");
}

#[test]
fn test_expressions() {
    let toml = convert(
        "expressions",
        "\nA := 10;\nB := 5;\nSUM := ?(+ A B);\nDIFF := ?(- A B);\nCHAR_CODE := ?(ord \"Z\");\nABS_VAL := ?(abs -15);\n\n[calculations]\nsum = SUM\ndiff = DIFF\nchar_code = CHAR_CODE\nabs_val = ABS_VAL\n",
    );
    assert_eq!(
        toml,
        "[calculations]\nsum = 15\ndiff = 5\nchar_code = 90\nabs_val = 15\n"
    );
}

#[test]
fn test_multiline_block_comment() {
    let toml = convert(
        "comments",
        "\n{-\n Этот комментарий\n должен быть полностью\n проигнорирован\n-}\nVALUE := 42;\n\n[section]\nkey = VALUE\n",
    );
    assert_eq!(toml, "[section]\nkey = 42\n");
}

#[test]
fn test_octal_literal_is_decimal_in_output() {
    let toml = convert("octal", "MODE := 0o755;\nmode = MODE\nraw = 0o17\n");
    assert_eq!(toml, "mode = 493\nraw = 15\n");
}

#[test]
fn test_booleans_and_text() {
    let toml = convert(
        "scalars",
        "[flags]\nenabled = true\ndisabled = false\nname = @\"demo app\"\nurl = http://example.com/a?b=c\n",
    );
    assert_eq!(
        toml,
        "[flags]\nenabled = true\ndisabled = false\nname = \"demo app\"\nurl = \"http://example.com/a?b=c\"\n"
    );
}

#[test]
fn test_invalid_name_writes_nothing() {
    let pair = TempPair::new("invalid_name", "[s]\nk = 1\ninvalid_name := 42;\n");
    let err = pair.run().unwrap_err();
    assert!(matches!(err.root(), ConvertError::InvalidName { name } if name == "invalid_name"));
    assert_eq!(err.line(), Some(3));
    assert!(!pair.output.exists());
}

#[test]
fn test_ord_on_empty_text_fails() {
    let pair = TempPair::new("ord_empty", "E := @\"\";\nC := ?(ord E);\n");
    let err = pair.run().unwrap_err();
    assert!(matches!(err.root(), ConvertError::EmptyString));
    assert!(!pair.output.exists());
}

#[test]
fn test_expression_errors() {
    let cases = [
        ("X := ?(* 1 2);", "unknown"),
        ("X := ?(+ 1);", "arity"),
        ("S := @\"s\";\nX := ?(+ S 1);", "mismatch"),
        ("X := ?(+ NOPE 1);", "undefined"),
    ];
    for (source, label) in cases {
        let err = TempPair::new(label, source).run().unwrap_err();
        let ok = match label {
            "unknown" => matches!(err.root(), ConvertError::UnknownOperation { .. }),
            "arity" => matches!(err.root(), ConvertError::InvalidExpression { .. }),
            "mismatch" => matches!(err.root(), ConvertError::TypeMismatch { .. }),
            _ => matches!(err.root(), ConvertError::UndefinedVariable { .. }),
        };
        assert!(ok, "{label}: unexpected error {err}");
    }
}

#[test]
fn test_string_with_embedded_quote() {
    let toml = convert("embedded_quote", "X := @\"say \"hi\"\";\nk = X\n");
    assert_eq!(toml, "k = \"say \"hi\"\"\n");

    let toml = convert("adjacent_strings", "X := @\"a\" @\"b\";\nk = X\n");
    assert_eq!(toml, "k = \"a\" @\"b\"\"\n");
}

#[test]
fn test_expression_operand_with_whitespace_is_rejected() {
    let err = TempPair::new("spaced_operand", "X := ?(ord @\"a b\");\n")
        .run()
        .unwrap_err();
    assert_eq!(err.line(), Some(1));
    match err.root() {
        ConvertError::InvalidExpression { reason, .. } => assert!(reason.contains("found 2"), "{reason}"),
        other => panic!("unexpected error {other}"),
    }

    let toml = convert("quoted_operand", "X := ?(ord @\"a\");\nk = X\n");
    assert_eq!(toml, "k = 97\n");
}

#[test]
fn test_failed_conversion_keeps_existing_output() {
    let pair = TempPair::new("keep_output", "bad_name := 1;\n");
    fs::write(&pair.output, "previous = 1\n").unwrap();
    assert!(pair.run().is_err());
    assert_eq!(fs::read_to_string(&pair.output).unwrap(), "previous = 1\n");
}

#[test]
fn test_missing_input_is_io_error() {
    let output = std::env::temp_dir().join("conftoml_it_missing_input.toml");
    let err = parse("/nonexistent/conftoml/in.conf", &output).unwrap_err();
    assert!(matches!(err, ConvertError::Io { .. }));
    assert!(err.line().is_none());
}

#[test]
fn test_unwritable_output_is_io_error() {
    let pair = TempPair::new("unwritable", "k = 1\n");
    let err = parse(&pair.input, "/nonexistent/conftoml/out.toml").unwrap_err();
    assert!(matches!(err, ConvertError::Io { .. }));
}

#[test]
fn test_output_is_overwritten() {
    let pair = TempPair::new("overwrite", "k = 2\n");
    fs::write(&pair.output, "a much longer previous document\n").unwrap();
    assert_eq!(pair.run().unwrap(), "k = 2\n");
}

#[test]
fn test_conversion_is_deterministic() {
    let source = "A := 3;\nB := ?(+ A 4);\nL := [A, B, @\"x\", true];\n[t]\nl = L\nb = B\n";
    let first = convert("determinism_a", source);
    let second = convert("determinism_b", source);
    assert_eq!(first, second);
    assert_eq!(first, "[t]\nl = [3, 7, \"x\", true]\nb = 7\n");
}
