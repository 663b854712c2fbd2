use boomslang::{
    error::LexError,
    interpreter::{
        lexer::{Lexer, Token, TokenKind, tokenize},
        source::ReaderSource,
    },
};

use TokenKind::{BeginIndent, EndIndent, Eof, Newline};

fn kinds(src: &str) -> Vec<TokenKind> {
    tokenize("<test>", src).unwrap_or_else(|e| panic!("{e}"))
                           .iter()
                           .map(|t| t.kind)
                           .collect()
}

fn lex_failure(src: &str) -> LexError {
    match tokenize("<test>", src) {
        Ok(tokens) => panic!("lexing succeeded with {} tokens:\n{src}", tokens.len()),
        Err(e) => e,
    }
}

fn lexemes(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.lexeme.as_str()).collect()
}

#[test]
fn keywords_and_words() {
    use TokenKind::*;

    assert_eq!(kinds("is the that of if otherwise otif for while true false break by returns"),
               [Is, The, That, Of, If, Otherwise, Otif, For, While, True, False, Break, By, Returns,
                Newline, Eof]);
    assert_eq!(kinds("island theme"), [Word, Word, Newline, Eof]);
}

#[test]
fn numbers_start_with_a_digit() {
    let tokens = tokenize("<test>", "42 x1 7up").unwrap();
    assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
               [TokenKind::Number, TokenKind::Word, TokenKind::Number, Newline, Eof]);
    assert_eq!(&lexemes(&tokens)[..3], ["42", "x1", "7up"]);
}

#[test]
fn any_other_characters_form_words() {
    let tokens = tokenize("<test>", "the prix€ is § + ☃!").unwrap();
    assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
               [TokenKind::The,
                TokenKind::Word,
                TokenKind::Is,
                TokenKind::Word,
                TokenKind::Word,
                TokenKind::Word,
                Newline,
                Eof]);
    assert_eq!(&lexemes(&tokens)[..6], ["the", "prix€", "is", "§", "+", "☃!"]);
}

#[test]
fn we_mean_is_one_keyword() {
    use TokenKind::*;

    assert_eq!(kinds("by square of n we mean"),
               [By, Word, Of, Word, WeMean, Newline, Eof]);
    assert_eq!(kinds("we are what we mean"), [Word, Word, Word, WeMean, Newline, Eof]);
    assert_eq!(kinds("mean we"), [Word, Word, Newline, Eof]);
}

#[test]
fn text_takes_the_rest_of_the_line() {
    let tokens = tokenize("<test>", "show text  hello   is  the world \nshow 1").unwrap();
    assert_eq!(tokens[1].kind, TokenKind::Text);
    assert_eq!(tokens[1].lexeme, "hello is the world");
    assert_eq!(tokens[2].kind, Newline);
    assert_eq!(tokens[3].lexeme, "show");

    let tokens = tokenize("<test>", "show text").unwrap();
    assert_eq!(tokens[1].kind, TokenKind::Text);
    assert_eq!(tokens[1].lexeme, "");
}

#[test]
fn spans_carry_source_and_line() {
    let tokens = tokenize("script.bs", "the x is 1\n\nshow the x").unwrap();
    let show = tokens.iter()
                     .find(|t| t.is_word("show"))
                     .expect("show is lexed");

    assert_eq!(show.span.line, 3);
    assert_eq!(&*show.span.source, "script.bs");
    assert_eq!(show.span.to_string(), "script.bs:3");
}

#[test]
fn indentation_becomes_begin_and_end() {
    use TokenKind::*;

    assert_eq!(kinds("if true\n  show 1\nshow 2"),
               [If, True, Newline, BeginIndent, Word, Number, Newline, EndIndent, Word, Number,
                Newline, Eof]);
}

#[test]
fn blank_lines_do_not_change_indentation() {
    let with_blank = kinds("if true\n  show 1\n\n   \n  show 2");
    let without = kinds("if true\n  show 1\n  show 2");
    assert_eq!(with_blank, without);
}

#[test]
fn dedenting_several_levels_at_once() {
    let kinds = kinds("if a\n  if b\n    show 1\nshow 2");
    let ends = kinds.iter().filter(|k| **k == EndIndent).count();
    let begins = kinds.iter().filter(|k| **k == BeginIndent).count();

    assert_eq!((begins, ends), (2, 2));
    assert_eq!(&kinds[kinds.len() - 6..],
               [EndIndent, EndIndent, TokenKind::Word, TokenKind::Number, Newline, Eof]);
}

#[test]
fn open_blocks_are_closed_at_end_of_input() {
    let kinds = kinds("while true\n\tif true\n\t\tbreak");
    assert_eq!(&kinds[kinds.len() - 3..], [EndIndent, EndIndent, Eof]);
}

#[test]
fn any_consistent_unit_is_accepted() {
    for unit in ["\t", "  ", "    ", "   "] {
        let src = format!("if true\n{unit}if true\n{unit}{unit}show 1\n{unit}show 2");
        let kinds = kinds(&src);
        assert_eq!(kinds.iter().filter(|k| **k == BeginIndent).count(), 2);
    }
}

#[test]
fn mixed_indentation_on_one_line() {
    assert!(matches!(lex_failure("if true\n\t  show 1"), LexError::MixedIndentation { .. }));
}

#[test]
fn switching_between_tabs_and_spaces() {
    let err = lex_failure("if true\n  show 1\nif true\n\tshow 2");
    match err {
        LexError::MixedIndentation { span } => assert_eq!(span.line, 4),
        other => panic!("expected mixed indentation, got {other}"),
    }
}

#[test]
fn indentation_must_be_a_multiple_of_the_unit() {
    let err = lex_failure("if true\n  show 1\n   show 2");
    assert!(matches!(err, LexError::InconsistentIndentation { .. }));
    assert!(err.to_string().contains("<test>:3"));
}

#[test]
fn indenting_several_levels_at_once() {
    let err = lex_failure("if true\n  if true\n      show 1");
    assert!(matches!(err, LexError::IndentJump { levels: 2, .. }));

    let err = lex_failure("show 1\n    show 2\n  show 3");
    assert!(matches!(err, LexError::InconsistentIndentation { .. }));
}

#[test]
fn reader_sources_lex_like_strings() {
    let text = "if true\r\n  show 1\r\n";
    let mut source = ReaderSource::new("<reader>", text.as_bytes());
    let tokens = Lexer::new(&mut source).lex().unwrap();

    assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
               kinds("if true\n  show 1\n"));
    assert_eq!(&*tokens[0].span.source, "<reader>");
}
