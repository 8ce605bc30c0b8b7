use basic_front::lexer_tokenizer::{LexError, Token, lex_with_span, tokenize};

fn tokens_of(source: &str) -> Vec<Token> {
    lex_with_span(source).0.into_iter().map(|t| t.token).collect()
}

// ============================================================================
// Skipped input
// ============================================================================

#[test]
fn test_whitespace_and_comments_produce_nothing() {
    for source in ["", "   \t ", "# just a comment", "  \n\n # one\n\t# two\n"] {
        let (tokens, errors) = lex_with_span(source);
        assert!(tokens.is_empty(), "tokens for {:?}", source);
        assert!(errors.is_empty());
    }
}

#[test]
fn test_comment_ends_at_newline() {
    let (tokens, _) = lex_with_span("# x = 1\ny");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].token, Token::Name("y".into()));
    assert_eq!(tokens[0].line, 2);
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn test_keywords_always_win() {
    let source = "FOR i = 0 TO 10 THEN IF a ELSE FUN";
    let kinds: Vec<&str> = lex_with_span(source)
        .0
        .iter()
        .map(|t| t.token.kind())
        .collect();
    assert_eq!(
        kinds,
        vec![
            "FOR", "NAME", "=", "NUMBER", "TO", "NUMBER", "THEN", "IF", "NAME", "ELSE", "FUN"
        ]
    );
}

#[test]
fn test_keywords_are_case_sensitive() {
    assert_eq!(tokens_of("if"), vec![Token::Name("if".into())]);
}

#[test]
fn test_eqeq_is_one_token() {
    assert_eq!(
        tokens_of("a == b"),
        vec![Token::Name("a".into()), Token::EqEq, Token::Name("b".into())]
    );
}

#[test]
fn test_arrow_is_one_token() {
    assert_eq!(
        tokens_of("FUN f() -> x"),
        vec![
            Token::Fun,
            Token::Name("f".into()),
            Token::LParen,
            Token::RParen,
            Token::Arrow,
            Token::Name("x".into())
        ]
    );
}

#[test]
fn test_numbers_are_converted() {
    assert_eq!(tokens_of("007 42"), vec![Token::Number(7), Token::Number(42)]);
}

#[test]
fn test_literal_characters() {
    assert_eq!(
        tokens_of("= + - / * ( ) , ; > <"),
        vec![
            Token::Assign,
            Token::Plus,
            Token::Minus,
            Token::Slash,
            Token::Star,
            Token::LParen,
            Token::RParen,
            Token::Comma,
            Token::Semicolon,
            Token::Greater,
            Token::Less
        ]
    );
}

#[test]
fn test_spans_cover_lexemes() {
    let source = "abc == 12";
    let (tokens, _) = lex_with_span(source);
    let slices: Vec<&str> = tokens.iter().map(|t| &source[t.span.clone()]).collect();
    assert_eq!(slices, vec!["abc", "==", "12"]);
}

// ============================================================================
// Error recovery
// ============================================================================

#[test]
fn test_illegal_character_does_not_abort() {
    let (tokens, errors) = lex_with_span("a @ b");
    assert_eq!(
        tokens.iter().map(|t| t.token.clone()).collect::<Vec<_>>(),
        vec![Token::Name("a".into()), Token::Name("b".into())]
    );
    assert_eq!(
        errors,
        vec![LexError::IllegalCharacter {
            ch: '@',
            index: 2,
            line: 1
        }]
    );
}

#[test]
fn test_each_bad_character_reported_once() {
    let (tokens, errors) = lex_with_span("x $$ 1\n!");
    assert_eq!(tokens.len(), 2);
    let reported: Vec<(char, usize)> = errors
        .iter()
        .map(|e| match e {
            LexError::IllegalCharacter { ch, line, .. } => (*ch, *line),
            other => panic!("unexpected {:?}", other),
        })
        .collect();
    assert_eq!(reported, vec![('$', 1), ('$', 1), ('!', 2)]);
}

#[test]
fn test_callback_sees_errors_while_streaming() {
    let mut seen = Vec::new();
    let mut sink = |err: LexError| seen.push(err);
    let count = tokenize("1 ? 2", &mut sink).count();
    assert_eq!(count, 2);
    assert_eq!(seen.len(), 1);
}

// ============================================================================
// Restartability
// ============================================================================

#[test]
fn test_fresh_scan_per_call() {
    let source = "x = 1\ny = 2";
    let first = lex_with_span(source);
    let second = lex_with_span(source);
    assert_eq!(first, second);
    assert_eq!(lex_with_span("z").0[0].line, 1);
}
