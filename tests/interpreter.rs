use pretty_assertions::assert_eq;
use rootscore::error::Error;
use rootscore::token::TokenKind;
use rootscore::{BufferWriter, Interpreter};

fn run(src: &str) -> (Result<(), Error>, String) {
    let mut interpreter = Interpreter::new(BufferWriter::new());
    let result = interpreter.run(src);
    let output = interpreter.into_output().contents().to_string();
    (result, output)
}

#[test]
fn sound_of_assigned_variable() {
    let (result, output) = run(r#"roots x = "hi"; sound(x);"#);
    assert_eq!(result, Ok(()));
    assert_eq!(output, "hi\n");
}

#[test]
fn sound_of_unbound_variable_writes_empty_line() {
    let (result, output) = run("sound(y);");
    assert_eq!(result, Ok(()));
    assert_eq!(output, "\n");
}

#[test]
fn sound_of_string_literal() {
    let (result, output) = run(r#"sound("direct");"#);
    assert_eq!(result, Ok(()));
    assert_eq!(output, "direct\n");
}

#[test]
fn assignment_stores_the_value_token_text() {
    // An identifier on the right-hand side is not resolved at assignment
    // time; its text becomes the stored value.
    let (result, output) = run("roots x = y; sound(x);");
    assert_eq!(result, Ok(()));
    assert_eq!(output, "y\n");
}

#[test]
fn last_assignment_wins() {
    let (result, output) = run(r#"roots x = "a"; roots x = "b"; sound(x);"#);
    assert_eq!(result, Ok(()));
    assert_eq!(output, "b\n");
}

#[test]
fn unknown_function_is_silently_ignored() {
    let (result, output) = run(r#"unknownFunc("arg");"#);
    assert_eq!(result, Ok(()));
    assert_eq!(output, "");
}

#[test]
fn unknown_function_keeps_parsing_in_sync() {
    let (result, output) = run(r#"shout("loud"); sound("after");"#);
    assert_eq!(result, Ok(()));
    assert_eq!(output, "after\n");
}

#[test]
fn sound_of_other_token_kind_still_writes_newline() {
    let (result, output) = run("sound(=);");
    assert_eq!(result, Ok(()));
    assert_eq!(output, "\n");
}

#[test]
fn assignment_accepts_any_token_kind_for_name_and_value() {
    let (result, output) = run("roots ; = ) ;");
    assert_eq!(result, Ok(()));
    assert_eq!(output, "");
}

#[test]
fn stray_top_level_tokens_are_skipped() {
    let (result, output) = run(r#"; ) = sound("ok");"#);
    assert_eq!(result, Ok(()));
    assert_eq!(output, "ok\n");
}

#[test]
fn lone_identifier_is_a_no_op() {
    let (result, output) = run(r#"x sound("ok"); y"#);
    assert_eq!(result, Ok(()));
    assert_eq!(output, "ok\n");
}

#[test]
fn missing_semicolon_is_unexpected_end_of_input() {
    let (result, _) = run("roots x = 1");
    // `1` never tokenizes, so the statement runs out of tokens early.
    assert_eq!(result, Err(Error::UnexpectedEndOfInput));
}

#[test]
fn missing_close_paren_is_unexpected_token() {
    let (result, _) = run("sound(x;");
    assert_eq!(
        result,
        Err(Error::UnexpectedToken {
            expected: TokenKind::RightParen,
            found: TokenKind::Semicolon,
        })
    );
}

#[test]
fn missing_equals_is_unexpected_token() {
    let (result, _) = run(r#"roots x "hi";"#);
    assert_eq!(
        result,
        Err(Error::UnexpectedToken {
            expected: TokenKind::EqualsOperator,
            found: TokenKind::StringLiteral,
        })
    );
}

#[test]
fn unterminated_string_fails_before_execution() {
    let (result, output) = run(r#"sound("early"); roots x = "unterminated"#);
    assert_eq!(result, Err(Error::UnterminatedString));
    // Tokenization fails as a whole, so not even the first statement ran.
    assert_eq!(output, "");
}

#[test]
fn output_before_a_failure_is_kept() {
    let (result, output) = run(r#"sound("partial"); roots x"#);
    assert_eq!(result, Err(Error::UnexpectedEndOfInput));
    assert_eq!(output, "partial\n");
}

#[test]
fn runs_do_not_leak_variables() {
    let mut interpreter = Interpreter::new(BufferWriter::new());

    interpreter
        .run(r#"roots x = "hi"; sound(x);"#)
        .expect("first run failed");
    assert_eq!(interpreter.output().contents(), "hi\n");

    interpreter.run("sound(x);").expect("second run failed");
    assert_eq!(interpreter.output().contents(), "\n");
}

#[test]
fn run_resets_the_sink() {
    let mut interpreter = Interpreter::new(BufferWriter::new());

    interpreter
        .run(r#"sound("one");"#)
        .expect("first run failed");
    interpreter
        .run(r#"sound("two");"#)
        .expect("second run failed");
    assert_eq!(interpreter.output().contents(), "two\n");

    // A failing run still clears the sink before tokenizing.
    let result = interpreter.run(r#"roots x = "unterminated"#);
    assert_eq!(result, Err(Error::UnterminatedString));
    assert_eq!(interpreter.output().contents(), "");
}

#[test]
fn multiple_statements_append_in_order() {
    let (result, output) = run(
        r#"
        roots greeting = "one love";
        sound(greeting);
        sound("irie");
        "#,
    );
    assert_eq!(result, Ok(()));
    assert_eq!(output, "one love\nirie\n");
}
