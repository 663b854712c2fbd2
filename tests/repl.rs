use boomslang::{
    interpreter::{evaluator::core::Context, streams::Streams},
    repl::{self, BANNER},
};

/// Feeds `input` to an interactive session and returns what it wrote to its
/// output and error streams.
fn session(input: &str) -> (String, String) {
    let (streams, output, errors) = Streams::captured(input);
    let mut ctx = Context::with_streams(streams);
    repl::run(&mut ctx).expect("in-memory streams do not fail");
    (output.contents(), errors.contents())
}

#[test]
fn greets_and_echoes_results() {
    let (output, errors) = session("1 plus 2\nthe x is 5\nshow the x\n");

    assert!(output.starts_with(BANNER));
    assert!(output.contains("=> 3\n"));
    assert!(output.contains("5\n"));
    assert!(!output.contains("=> nothing"));
    assert!(errors.is_empty());
}

#[test]
fn blocks_continue_until_an_empty_line() {
    let input = "the i is 0\nwhile the i smallerthan 3\n  show the i\n  the i is the i plus 1\n\nthe i\n";
    let (output, errors) = session(input);

    assert!(output.contains(". "));
    assert!(output.contains("0\n1\n2\n"));
    assert!(output.contains("=> 3"));
    assert!(errors.is_empty(), "{errors}");
}

#[test]
fn procedures_defined_in_one_chunk_are_visible_in_the_next() {
    let input = "by square of n we mean\n  returns the n multiply the n\n\nsquare of 7\n";
    let (output, errors) = session(input);

    assert!(output.contains("=> 49"));
    assert!(errors.is_empty(), "{errors}");
}

#[test]
fn errors_do_not_end_the_session() {
    let (output, errors) = session("show the missing\nif true\n\nthe x is 1\nthe x plus 1\n");

    assert!(errors.contains("'missing'"));
    assert!(errors.contains("<repl:2>"));
    assert!(output.contains("=> 2"));
}

#[test]
fn signals_at_top_level_are_reported() {
    let (_, errors) = session("break\nreturns 1\n");
    assert!(errors.contains("'break'"));
    assert!(errors.contains("'returns'"));
}
