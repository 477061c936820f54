use std::rc::Rc;

use super::prelude::{lex, char_positions, Lexer, LexicalError, LexicalErrorType, Operator, Punctuation, Token};

fn ident(name: &str) -> Token {
    Token::Identifier(Rc::from(name))
}

fn first_error(input: &str) -> LexicalError {
    for res in lex(input) {
        if let Err(err) = res {
            return err;
        }
    }

    panic!("Expected a lexical error in {input:?}")
}

#[test]
fn test_input() -> std::result::Result<(), LexicalError> {
    let input = r#"
        a = 1 + 2 * 3;
        _tmp2 = (a - 10) * -a;
    "#;

    let tokens = vec![
        ident("a"),
        Token::Operator(Operator::Assign),
        Token::Number(1),
        Token::Operator(Operator::Plus),
        Token::Number(2),
        Token::Operator(Operator::Star),
        Token::Number(3),
        Token::Punctuation(Punctuation::Semicolon),

        ident("_tmp2"),
        Token::Operator(Operator::Assign),
        Token::OpenParen,
        ident("a"),
        Token::Operator(Operator::Minus),
        Token::Number(10),
        Token::CloseParen,
        Token::Operator(Operator::Star),
        Token::Operator(Operator::Minus),
        ident("a"),
        Token::Punctuation(Punctuation::Semicolon),
    ];

    let mut lexer = lex(input);

    for (idx, token) in tokens.iter().enumerate() {
        let next_token = match lexer.next_token()? {
            Some(spanned) => spanned.token,
            None => panic!("input ended early at {token:?} ({idx})"),
        };

        assert_eq!(
            *token, next_token,
            "Next token does not match expected token ({:?}, {:?}) at {}",
            next_token, token, idx
        );
    }

    assert_eq!(lexer.next_token()?, None);
    // stays at the end
    assert_eq!(lexer.next_token()?, None);

    Ok(())
}

#[test]
fn test_numbers() -> std::result::Result<(), LexicalError> {
    let input = "0 10 019 000;0+0-0*0)9223372036854775807";

    let expected = vec![0, 10, 19, 0, 0, 0, 0, 0, 9223372036854775807];

    let numbers = lex(input)
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .filter_map(|spanned| match spanned.token {
            Token::Number(value) => Some(value),
            _ => None,
        })
        .collect::<Vec<i64>>();

    assert_eq!(expected, numbers);

    Ok(())
}

#[test]
fn test_invalid_numbers() {
    let fails = vec![
        ("007", LexicalErrorType::InvalidNumberFormat),
        ("0019", LexicalErrorType::InvalidNumberFormat),
        ("0x", LexicalErrorType::InvalidNumberFormat),
        ("0(", LexicalErrorType::InvalidNumberFormat),
        ("0=", LexicalErrorType::InvalidNumberFormat),
        ("0\r\n", LexicalErrorType::InvalidNumberFormat),
        ("9223372036854775808", LexicalErrorType::NumberTooLarge),
    ];

    for (input, fail) in fails {
        let err = first_error(input);

        assert_eq!(
            fail, err.error,
            "Unexpected error for {:?}: {:?}", input, err
        );
    }
}

#[test]
fn test_unexpected_character() {
    let err = first_error("a = 1;\nb = 2 / 3;");

    assert_eq!(err.error, LexicalErrorType::UnexpectedCharacter { ch: '/' });
    assert_eq!(err.line, 2);
    assert_eq!(err.to_string(), "unexpected character at line 2");
}

#[test]
fn test_error_messages() {
    assert_eq!(first_error("x = 007;").to_string(), "invalid number format at line 1");
    assert_eq!(first_error("\n\n\n 0a").to_string(), "invalid number format at line 4");
}

#[test]
fn test_lines() -> std::result::Result<(), LexicalError> {
    let input = "a\n\n  b \t\n\nc\n";

    let lines = lex(input)
        .map(|res| res.map(|spanned| spanned.line))
        .collect::<Result<Vec<u32>, _>>()?;

    assert_eq!(lines, vec![1, 3, 5]);

    Ok(())
}

#[test]
fn test_spans() -> std::result::Result<(), LexicalError> {
    let mut lexer = lex("ab = 12;");

    let spans = std::iter::from_fn(|| lexer.next_token().transpose())
        .map(|res| res.map(|spanned| (spanned.location.start, spanned.location.end)))
        .collect::<Result<Vec<_>, _>>()?;

    assert_eq!(spans, vec![(0, 2), (3, 4), (5, 7), (7, 8)]);

    Ok(())
}

#[test]
fn test_peek() -> std::result::Result<(), LexicalError> {
    let mut lexer = lex("x = 5;");

    let peeked = lexer.peek_token()?.cloned();
    assert_eq!(peeked.as_ref().map(|s| &s.token), Some(&ident("x")));
    // peeking again does not advance
    assert_eq!(lexer.peek_token()?.cloned(), peeked);
    assert_eq!(lexer.next_token()?, peeked);

    let next = lexer.next_token()?.map(|s| s.token);
    assert_eq!(next, Some(Token::Operator(Operator::Assign)));

    Ok(())
}

#[test]
fn test_interned_identifiers() -> std::result::Result<(), LexicalError> {
    let mut lexer = lex("foo = foo + bar * foo;");

    let names = std::iter::from_fn(|| lexer.next_token().transpose())
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .filter_map(|spanned| match spanned.token {
            Token::Identifier(name) => Some(name),
            _ => None,
        })
        .collect::<Vec<Rc<str>>>();

    assert_eq!(names.len(), 4);
    assert!(Rc::ptr_eq(&names[0], &names[1]));
    assert!(Rc::ptr_eq(&names[0], &names[3]));
    assert!(!Rc::ptr_eq(&names[0], &names[2]));

    assert_eq!(lexer.interner().len(), 2);
    assert_eq!(
        lexer.interner().listing().collect::<Vec<_>>(),
        vec![(0, "foo"), (1, "bar")]
    );

    Ok(())
}

#[test]
fn test_char_stream() -> std::result::Result<(), LexicalError> {
    let mut lexer = Lexer::new(char_positions("é = 1;".chars()));

    let first = lexer.next_token()?.expect("identifier");
    assert_eq!(first.token, ident("é"));
    assert_eq!((first.location.start, first.location.end), (0, 2));

    Ok(())
}
