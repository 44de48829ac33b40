#[cfg(test)]
use super::*;
#[cfg(test)]
use crate::ast::{Block, Number, Value};

#[cfg(test)]
fn parse(input: &str) -> Result<Document, ConfError> {
    Parser::new(input).parse_document()
}

#[cfg(test)]
fn parse_discard(input: &str) -> Result<Document, ConfError> {
    let options = ParseOptions { trailing: TrailingContent::Discard };
    Parser::with_options(input, options).parse_document()
}

#[test]
fn test_empty_config() {
    let doc = parse("").expect("Failed to parse empty input");
    assert_eq!(doc, Document::new());
    assert!(doc.devices.is_empty());
    assert!(doc.controller.is_none());
}

#[test]
fn test_comments_are_ignored() {
    let input = r#"
      # I = "AM NOT HERE"
      BUT = "I AM"
      "#;
    let doc = parse(input).expect("Failed to parse document");

    assert_eq!(doc.pairs.len(), 1);
    assert_eq!(doc.get("BUT"), Some(&Value::String("I AM".into())));
    assert!(doc.devices.is_empty());
}

#[test]
fn test_value_types() {
    let input = r#"
      STRING = "string"
      INT    = 12
      FLOAT  = 1.0
      BOOL_F = false
      BOOL_T = True
      NONE   = null
      NEG    = -3.25
      "#;
    let doc = parse(input).expect("Failed to parse document");

    assert_eq!(doc.get("STRING"), Some(&Value::String("string".into())));
    assert_eq!(doc.get("INT"), Some(&Value::Number(Number::Int(12))));
    assert_eq!(doc.get("FLOAT"), Some(&Value::Number(Number::Float(1.0))));
    assert_eq!(doc.get("BOOL_F"), Some(&Value::Bool(false)));
    assert_eq!(doc.get("BOOL_T"), Some(&Value::Bool(true)));
    assert_eq!(doc.get("NONE"), Some(&Value::Null));
    assert_eq!(doc.get("NEG"), Some(&Value::Number(Number::Float(-3.25))));
}

#[test]
fn test_devices_accumulate_in_order() {
    let input = r#"
      device {
        A = "B"
      }
      device {
        B = "C"
      }
      "#;
    let doc = parse(input).expect("Failed to parse document");

    assert_eq!(
        doc.devices,
        vec![Block::new().with("A", "B"), Block::new().with("B", "C")]
    );
}

#[test]
fn test_single_line_devices() {
    let doc = parse("device { A = \"B\" }\ndevice { B = \"C\" }").expect("Failed to parse");
    assert_eq!(
        doc.devices,
        vec![Block::new().with("A", "B"), Block::new().with("B", "C")]
    );
}

#[test]
fn test_parameters_in_device() {
    let input = r#"
      device {
        A = "B"
        parameters {
          AA = "BB"
        }
      }
      "#;
    let doc = parse(input).expect("Failed to parse document");

    let expected = Block::new()
        .with("A", "B")
        .with_parameters(Block::new().with("AA", "BB"));
    assert_eq!(doc.devices, vec![expected]);
}

#[test]
fn test_parameters_on_one_line() {
    let doc = parse(r#"device { A = "B" parameters { AA = "BB" } }"#).expect("Failed to parse");
    let expected = Block::new()
        .with("A", "B")
        .with_parameters(Block::new().with("AA", "BB"));
    assert_eq!(doc.devices, vec![expected]);
}

#[test]
fn test_controller_block() {
    let doc = parse("controller {\n  A = \"B\"\n}").expect("Failed to parse");
    assert_eq!(doc.controller, Some(Block::new().with("A", "B")));
    assert!(doc.devices.is_empty());
}

#[test]
fn test_last_controller_wins() {
    let input = r#"
controller {
  id = 1
}
controller {
  id = 2
}
"#;
    let doc = parse(input).expect("Failed to parse");
    assert_eq!(doc.controller, Some(Block::new().with("id", 2)));
}

#[test]
fn test_brace_on_next_line() {
    let input = "device\n{\nA = 1\n}";
    let doc = parse(input).expect("Failed to parse");
    assert_eq!(doc.devices, vec![Block::new().with("A", 1)]);
}

#[test]
fn test_text_after_closing_brace_belongs_to_outer_context() {
    let input = "device {\nA = 1\n} device {\nA = 2\n}";
    let doc = parse(input).expect("Failed to parse");
    assert_eq!(
        doc.devices,
        vec![Block::new().with("A", 1), Block::new().with("A", 2)]
    );
}

#[test]
fn test_device_node_is_a_pair() {
    let input = r#"
deviceNode = "/dev/tellstick"
device {
  id = 1
}
"#;
    let doc = parse(input).expect("Failed to parse");
    assert_eq!(doc.get("deviceNode"), Some(&Value::String("/dev/tellstick".into())));
    assert_eq!(doc.devices.len(), 1);
}

#[test]
fn test_duplicate_keys_last_wins() {
    let doc = parse("A = 1\nB = 2\nA = 3").expect("Failed to parse");
    assert_eq!(doc.get("A"), Some(&Value::from(3)));
    assert_eq!(doc.pairs.keys().collect::<Vec<_>>(), vec!["A", "B"]);
}

#[test]
fn test_keys_are_case_sensitive() {
    let doc = parse("a = 1\nA = 2").expect("Failed to parse");
    assert_eq!(doc.pairs.len(), 2);
}

#[test]
fn test_nested_parameters_are_accepted() {
    let input = r#"
device {
  parameters {
    a = 1
    parameters {
      b = 2
    }
  }
}
"#;
    let doc = parse(input).expect("Failed to parse");
    let inner = doc.devices[0]
        .parameters()
        .and_then(Block::parameters)
        .expect("inner parameters");
    assert_eq!(inner.get("b"), Some(&Value::from(2)));
}

#[test]
fn test_equals_inside_string() {
    let doc = parse(r#"url = "http://x/?a=b""#).expect("Failed to parse");
    assert_eq!(doc.get("url"), Some(&Value::String("http://x/?a=b".into())));
}

#[test]
fn test_unterminated_block() {
    let err = parse("\ndevice {\n  A = \"B\"").unwrap_err();
    match err {
        ConfError::UnterminatedBlock { block, line, .. } => {
            assert_eq!(block, "device");
            assert_eq!(line, 2);
        }
        other => panic!("Expected UnterminatedBlock, got {:?}", other),
    }
}

#[test]
fn test_unterminated_block_single_line() {
    let err = parse(r#"device { A = "B""#).unwrap_err();
    assert!(matches!(err, ConfError::UnterminatedBlock { .. }));
}

#[test]
fn test_unknown_value_type() {
    let err = parse("A = @@@").unwrap_err();
    match err {
        ConfError::UnknownValueType { value, line, .. } => {
            assert_eq!(value, "@@@");
            assert_eq!(line, 1);
        }
        other => panic!("Expected UnknownValueType, got {:?}", other),
    }
}

#[test]
fn test_expected_block_open() {
    let err = parse("device\nA = 1\n}").unwrap_err();
    assert!(matches!(
        err,
        ConfError::ExpectedBlockOpen { ref block, ref found, line: 2, .. }
            if block == "device" && found == "A = 1"
    ));

    let err = parse("controller (").unwrap_err();
    assert!(matches!(err, ConfError::ExpectedBlockOpen { line: 1, .. }));

    let err = parse("device").unwrap_err();
    assert!(matches!(
        err,
        ConfError::ExpectedBlockOpen { ref found, .. } if found == "end of input"
    ));
}

#[test]
fn test_parameters_is_reserved_inside_blocks() {
    let err = parse("device {\n parameters = 1\n}").unwrap_err();
    assert!(matches!(err, ConfError::ExpectedBlockOpen { ref block, .. } if block == "parameters"));
}

#[test]
fn test_devices_is_reserved_at_top_level() {
    let err = parse("devices = 2").unwrap_err();
    assert!(matches!(err, ConfError::ReservedKey { ref key, line: 1, .. } if key == "devices"));
}

#[test]
fn test_missing_assignment() {
    let err = parse("just words").unwrap_err();
    assert!(matches!(err, ConfError::MissingAssignment { line: 1, .. }));

    let err = parse("= 5").unwrap_err();
    assert!(matches!(err, ConfError::MissingAssignment { .. }));
}

#[test]
fn test_stray_closing_brace() {
    let err = parse("A = 1\n}").unwrap_err();
    assert!(matches!(err, ConfError::UnexpectedBlockClose { line: 2, .. }));
}

#[test]
fn test_two_assignments_on_one_line() {
    let doc = parse("A = 1 B = \"two\"").expect("Failed to parse");
    assert_eq!(doc.get("A"), Some(&Value::from(1)));
    assert_eq!(doc.get("B"), Some(&Value::from("two")));
}

#[test]
fn test_discard_mode_drops_trailing_content() {
    let doc = parse_discard("A = \"x\" B = 2\nC = 3").expect("Failed to parse");
    assert_eq!(doc.get("A"), Some(&Value::from("x")));
    assert_eq!(doc.get("B"), None);
    assert_eq!(doc.get("C"), Some(&Value::from(3)));
}

#[test]
fn test_discard_mode_swallows_closing_brace() {
    let err = parse_discard(r#"device { A = "B" }"#).unwrap_err();
    assert!(matches!(err, ConfError::UnterminatedBlock { .. }));
}

#[test]
fn test_discard_mode_takes_any_quoted_substring() {
    let doc = parse_discard(r#"A = label "inner" tail"#).expect("Failed to parse");
    assert_eq!(doc.get("A"), Some(&Value::from("inner")));
}

#[test]
fn test_realistic_tellstick_conf() {
    let input = r#"
user = "nobody"
group = "plugdev"
deviceNode = "/dev/tellstick"
ignoreControllerConfirmation = "false"
controller {
  id = 1
  # name = "unused"
  type = 2
  serial = "A501A2JQ"
}
device {
  id = 1
  name = "Example device"
  controller = 0
  protocol = "arctech"
  model = "codeswitch"
  parameters {
    house = "A"
    unit = "1"
  }
}
device {
  id = 2
  name = "Selflearning"
  protocol = "arctech"
  model = "selflearning-switch"
  parameters {
    house = "12345"
    unit = "1"
  }
}
"#;
    let doc = parse(input).expect("Failed to parse");

    assert_eq!(doc.pairs.len(), 4);
    assert_eq!(doc.get("ignoreControllerConfirmation"), Some(&Value::from("false")));

    let controller = doc.controller.as_ref().expect("controller");
    assert_eq!(controller.get("serial"), Some(&Value::from("A501A2JQ")));
    assert_eq!(controller.pairs.len(), 3);

    assert_eq!(doc.devices.len(), 2);
    assert_eq!(doc.devices[0].get("controller"), Some(&Value::from(0)));
    assert_eq!(
        doc.devices[1].parameters().and_then(|p| p.get("house")),
        Some(&Value::from("12345"))
    );
}

#[test]
fn test_block_names_cannot_be_pair_keys() {
    for input in ["device=1", "controller=1", "devices=1", "device= \"x\""] {
        let err = parse(input).unwrap_err();
        assert!(
            matches!(err, ConfError::ReservedKey { line: 1, code: Some(206), .. }),
            "{} gave {:?}",
            input,
            err
        );
    }

    let err = parse("device {\n  parameters=1\n}").unwrap_err();
    assert!(matches!(err, ConfError::ReservedKey { ref key, line: 2, .. } if key == "parameters"));
}

#[test]
fn test_block_names_inside_blocks_and_parameters_at_top_level() {
    let doc = parse("parameters=1\ndevice {\n  controller=0\n  device = 2\n}").expect("Failed to parse");
    assert_eq!(doc.get("parameters"), Some(&Value::from(1)));
    assert_eq!(doc.devices[0].get("controller"), Some(&Value::from(0)));

    let text = doc.to_string();
    assert_eq!(parse(&text).expect("Failed to parse rendered text"), doc);
}

#[test]
fn test_hash_key_after_value_is_rejected() {
    let err = parse("A = 1 #x = 2").unwrap_err();
    assert!(matches!(err, ConfError::ReservedKey { ref key, line: 1, .. } if key == "#x"));

    let err = parse("device {\n  A = 1 #x = 2\n}").unwrap_err();
    assert!(matches!(err, ConfError::ReservedKey { ref key, line: 2, .. } if key == "#x"));
}

#[test]
fn test_trailing_hash_text_depends_on_mode() {
    let input = "device {\n  name = \"Lamp\"   # not a comment\n}";

    let err = parse(input).unwrap_err();
    assert!(matches!(
        err,
        ConfError::MissingAssignment { ref content, line: 2, .. } if content == "# not a comment"
    ));

    let doc = parse_discard(input).expect("Failed to parse");
    assert_eq!(doc.devices[0].get("name"), Some(&Value::from("Lamp")));
}
