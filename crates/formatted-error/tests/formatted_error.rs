//! Tests for constructing and raising formatted errors.

use std::error::Error;

use formatted_error::{Argument, FormatError, FormattedError, Value, ValueKind, params};

#[test]
fn builder_formats_message() {
    let error = FormattedError::builder()
        .template("Hello {name}!")
        .params(params! { "name" => "Superman" })
        .build();
    assert_eq!(error.message(), "Hello Superman!");
    assert_eq!(error.to_string(), "Hello Superman!");
}

#[test]
fn params_default_to_empty() {
    let error = FormattedError::builder()
        .template("My name is {user.name}")
        .build();
    assert_eq!(error.message(), "My name is {user.name}");
    assert!(error.params().is_empty());
}

#[test]
fn original_and_params_are_kept() {
    let params = params! {
        "lucky" => params! { "numbers" => vec!["one", "two", "three"] }
    };
    let error = FormattedError::builder()
        .template("Lucky numbers are {lucky.numbers}")
        .params(params.clone())
        .build();
    assert_eq!(error.original(), "Lucky numbers are {lucky.numbers}");
    assert_eq!(error.params(), &params);
    assert_eq!(error.message(), "Lucky numbers are one, two, three");
}

#[test]
fn try_new_accepts_string_and_map() {
    let error = FormattedError::try_new("Hello {name}!", params! { "name" => "Superman" })
        .unwrap();
    assert_eq!(error.message(), "Hello Superman!");
}

#[test]
fn try_new_rejects_non_string_template() {
    let err = FormattedError::try_new(true, params! { "name" => "Superman" }).unwrap_err();
    assert_eq!(
        err,
        FormatError::InvalidArgument {
            argument: Argument::Template,
            expected: ValueKind::String,
            found: ValueKind::Bool,
        }
    );
}

#[test]
fn try_new_rejects_non_map_params() {
    let err = FormattedError::try_new("This is a {adjective} error.", 123).unwrap_err();
    assert_eq!(err.argument(), Argument::Params);

    let err = FormattedError::try_new("x", Value::Null).unwrap_err();
    assert_eq!(err.argument(), Argument::Params);

    let err = FormattedError::try_new("x", vec!["a"]).unwrap_err();
    assert_eq!(err.argument(), Argument::Params);
}

#[test]
fn template_is_checked_before_params() {
    let err = FormattedError::try_new(1, 2).unwrap_err();
    assert_eq!(err.argument(), Argument::Template);
}

#[test]
fn reformat_uses_same_params() {
    let error = FormattedError::builder()
        .template("{a}")
        .params(params! { "a" => "A", "b" => "B" })
        .build();
    assert_eq!(error.reformat("{b} then {a}"), "B then A");
}

#[test]
fn into_parts_returns_fields() {
    let error = FormattedError::builder()
        .template("{x}")
        .params(params! { "x" => 1 })
        .build();
    let (original, params, message) = error.into_parts();
    assert_eq!(original, "{x}");
    assert_eq!(params["x"], Value::Number(1));
    assert_eq!(message, "1");
}

fn fails() -> Result<(), Box<dyn Error>> {
    let error = FormattedError::builder()
        .template("Missing {what}")
        .params(params! { "what" => "config" })
        .build();
    Err(error.into())
}

#[test]
fn propagates_as_std_error() {
    let err = fails().unwrap_err();
    assert_eq!(err.to_string(), "Missing config");
    assert!(err.downcast_ref::<FormattedError>().is_some());
}
