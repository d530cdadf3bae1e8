use attrlist::{AttrList, Resolution};

#[test]
fn test_skips_entries_without_equals() {
    let list = AttrList::parse("A=1,JUNK,B=2");
    assert_eq!(list.len(), 2);
    assert_eq!(list.get("A"), Some("1"));
    assert_eq!(list.get("B"), Some("2"));
    assert_eq!(list.to_string(), "A=1,B=2");
}

#[test]
fn test_skips_entries_with_empty_name() {
    let list = AttrList::parse("=5,A=1");
    assert_eq!(list.len(), 1);
    assert_eq!(list.to_string(), "A=1");
}

#[test]
fn test_ignores_stray_commas() {
    let list = AttrList::parse(",A=1,,B=2,");
    assert_eq!(list.len(), 2);
    assert_eq!(list.to_string(), "A=1,B=2");
}

#[test]
fn test_keeps_empty_values() {
    let list = AttrList::parse("A=,B=2");
    assert_eq!(list.get("A"), Some(""));
    assert_eq!(list.to_string(), "A=,B=2");
}

#[test]
fn test_splits_on_first_equals() {
    let list = AttrList::parse("A==B");
    assert_eq!(list.get("A"), Some("=B"));
    assert_eq!(list.enumerated_string("A"), Some("=B"));
}

#[test]
fn test_quoted_value_shields_commas_and_equals() {
    let list = AttrList::parse(r#"URI="next,up=5",B=2"#);
    assert_eq!(list.len(), 2);
    assert_eq!(list.quoted_string("URI"), Some("next,up=5"));
    assert_eq!(list.get("B"), Some("2"));
}

#[test]
fn test_quote_handling_applies_only_at_value_start() {
    // The quote opens mid-value, so the comma still terminates the entry.
    let list = AttrList::parse(r#"A=x"y,z""#);
    assert_eq!(list.get("A"), Some(r#"x"y"#));
    assert_eq!(list.quoted_string("A"), None);

    let list = AttrList::parse(r#"A=fo"o,B=2"#);
    assert_eq!(list.get("A"), Some(r#"fo"o"#));
    assert_eq!(list.get("B"), Some("2"));
}

#[test]
fn test_unterminated_quote_runs_to_end() {
    let list = AttrList::parse(r#"A="x,y"#);
    assert_eq!(list.len(), 1);
    assert_eq!(list.get("A"), Some(r#""x,y"#));
    assert_eq!(list.quoted_string("A"), None);
    assert_eq!(list.to_string(), r#"A="x,y"#);
}

#[test]
fn test_junk_after_closing_quote_is_kept() {
    let list = AttrList::parse(r#"A="x"y,B=2"#);
    assert_eq!(list.get("A"), Some(r#""x"y"#));
    assert_eq!(list.quoted_string("A"), None);
    assert_eq!(list.get("B"), Some("2"));
}

#[test]
fn test_reassigned_unterminated_quote_swallows_entries_on_reparse() {
    // The duplicate name lands the unterminated-quote value in slot 0, so
    // serialization emits it ahead of B and the reparse's quote scan runs
    // over everything after it.
    let first = AttrList::parse(r#"A=1,B=2,A="x"#);
    assert_eq!(first.len(), 2);
    assert_eq!(first.get("A"), Some(r#""x"#));
    assert_eq!(first.to_string(), r#"A="x,B=2"#);

    let second = AttrList::parse(&first.to_string());
    assert_eq!(second.len(), 1);
    assert_eq!(second.get("A"), Some(r#""x,B=2"#));
}

#[test]
fn test_name_lookup_is_case_insensitive() {
    let list = AttrList::parse("int=42");
    assert_eq!(list.decimal_integer_as_number("int"), Some(42.0));
    assert_eq!(list.decimal_integer_as_number("INT"), Some(42.0));
    assert_eq!(list.decimal_integer_as_number("Int"), Some(42.0));
    assert_eq!(list.to_string(), "INT=42");
}

#[test]
fn test_duplicate_names_keep_last_value_first_position() {
    let list = AttrList::parse("A=1,B=2,a=3");
    assert_eq!(list.len(), 2);
    assert_eq!(list.get("A"), Some("3"));
    assert_eq!(list.to_string(), "A=3,B=2");
}

#[test]
fn test_whitespace_is_preserved_verbatim() {
    let list = AttrList::parse("A = 1");
    assert_eq!(list.get("A "), Some(" 1"));
    assert_eq!(list.get("A"), None);
    assert_eq!(list.to_string(), "A = 1");
}

#[test]
fn test_numeric_decoders_use_leading_run() {
    let list = AttrList::parse("INT=42abc,HEX=0x2agh,FLOAT=1.5x,SIGNED=-2.5dB");
    assert_eq!(list.decimal_integer_as_number("INT"), Some(42.0));
    assert_eq!(list.decimal_integer("INT"), Some(vec![0x2a]));
    assert_eq!(list.hexadecimal_integer_as_number("HEX"), Some(42.0));
    assert_eq!(list.hexadecimal_integer("HEX"), Some(vec![0x2a]));
    assert_eq!(list.decimal_floating_point("FLOAT"), Some(1.5));
    assert_eq!(list.signed_decimal_floating_point("SIGNED"), Some(-2.5));
}

#[test]
fn test_numeric_decoders_reject_empty_runs() {
    let list = AttrList::parse("A=abc,B=xyz,C=-,D=.");
    assert_eq!(list.decimal_integer_as_number("A"), None);
    assert_eq!(list.decimal_integer("A"), None);
    assert_eq!(list.hexadecimal_integer_as_number("B"), None);
    assert_eq!(list.decimal_floating_point("C"), None);
    assert_eq!(list.signed_decimal_floating_point("C"), None);
    assert_eq!(list.decimal_floating_point("D"), None);
}

#[test]
fn test_hexadecimal_requires_prefix() {
    let list = AttrList::parse("A=42,B=0x42,C=0X42");
    assert_eq!(list.hexadecimal_integer_as_number("A"), None);
    assert_eq!(list.hexadecimal_integer("A"), None);
    assert_eq!(list.hexadecimal_integer_as_number("B"), Some(66.0));
    assert_eq!(list.hexadecimal_integer_as_number("C"), Some(66.0));
}

#[test]
fn test_float_grammar_edge_forms() {
    let list = AttrList::parse("A=.5,B=5.,C=+3,D=-42");
    assert_eq!(list.decimal_floating_point("A"), Some(0.5));
    assert_eq!(list.decimal_floating_point("B"), Some(5.0));

    // Signs only parse through the signed decoder.
    assert_eq!(list.decimal_floating_point("C"), None);
    assert_eq!(list.signed_decimal_floating_point("C"), Some(3.0));
    assert_eq!(list.decimal_floating_point("D"), None);
    assert_eq!(list.signed_decimal_floating_point("D"), Some(-42.0));
}

#[test]
fn test_resolution_requires_full_match() {
    let list = AttrList::parse("A=4x2extra,B= 4x2,C=10x20");
    assert_eq!(list.decimal_resolution("A"), None);
    assert_eq!(list.decimal_resolution("B"), None);
    assert_eq!(list.decimal_resolution("C"), Some(Resolution::new(10, 20)));

    // The split happens at the first `x`, so a hex-looking value still parses.
    let list = AttrList::parse("D=0x42");
    assert_eq!(list.decimal_resolution("D"), Some(Resolution::new(0, 42)));
}

#[test]
fn test_resolution_rejects_overflowing_sides() {
    let list = AttrList::parse("RES=99999999999999999999x2");
    assert_eq!(list.decimal_resolution("RES"), None);
}

#[test]
fn test_quoted_string_requires_both_quotes() {
    let list = AttrList::parse("A=hi");
    assert_eq!(list.quoted_string("A"), None);

    // Only an opening quote: the value runs to end of input unclosed.
    let list = AttrList::parse(r#"B="hi"#);
    assert_eq!(list.get("B"), Some(r#""hi"#));
    assert_eq!(list.quoted_string("B"), None);

    // Only a closing quote: the value never enters the quote scan.
    let list = AttrList::parse(r#"C=hi""#);
    assert_eq!(list.get("C"), Some(r#"hi""#));
    assert_eq!(list.quoted_string("C"), None);

    // Joined into one line, B's opening quote runs to the next quote and
    // captures everything between as one well-formed quoted value.
    let list = AttrList::parse(r#"A=hi,B="hi,C=hi""#);
    assert_eq!(list.len(), 2);
    assert_eq!(list.quoted_string("A"), None);
    assert_eq!(list.quoted_string("B"), Some("hi,C=hi"));
}

#[test]
fn test_parse_resolution_error_reports_input() {
    let err = "400x".parse::<Resolution>().unwrap_err();
    assert_eq!(err.input(), "400x");
    assert!(err.to_string().contains("400x"));

    assert_eq!("400x200".parse::<Resolution>(), Ok(Resolution::new(400, 200)));
}
