use shork::{
    ast::Node,
    error::{Diagnostic, ErrorKind},
    frontend::{
        lexer::Lexer,
        parser::{
            Parser,
            core::{MAX_NESTING_DEPTH, parse_expression, speculate},
            cursor::TokenCursor,
            statement::parse_assignment,
        },
    },
    parse, tokenize,
};

const EXPECTED_ATOM: &str = "Expected int, float, string, identifier, '(', '[', '-' or 'NOT'";

fn ast(src: &str) -> String {
    parse(src, "<STDIN>").unwrap_or_else(|e| panic!("Parsing {src:?} failed:\n{}", e.report()))
                         .to_string()
}

fn syntax_error(src: &str) -> Diagnostic {
    let diagnostic = match parse(src, "<STDIN>") {
        Ok(node) => panic!("Parsing {src:?} succeeded but was expected to fail: {node}"),
        Err(e) => e,
    };
    assert!(matches!(diagnostic.kind, ErrorKind::SyntaxError { .. }),
            "expected a syntax error, got {diagnostic}");
    diagnostic
}

fn details(src: &str) -> String {
    syntax_error(src).message()
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(ast("1 + 2 * 3"), "([INT, 1] [PLUS] ([INT, 2] [ASTERISK] [INT, 3]))");
    assert_eq!(ast("1 * 2 + 3"), "(([INT, 1] [ASTERISK] [INT, 2]) [PLUS] [INT, 3])");
    assert_eq!(ast("7 % 4 / 2"), "(([INT, 7] [PERCENT] [INT, 4]) [SLASH] [INT, 2])");
}

#[test]
fn binary_operators_are_left_associative() {
    assert_eq!(ast("8 - 3 - 2"), "(([INT, 8] [MINUS] [INT, 3]) [MINUS] [INT, 2])");
}

#[test]
fn power_is_right_associative() {
    assert_eq!(ast("2 ^ 3 ^ 2"), "([INT, 2] [CARET] ([INT, 3] [CARET] [INT, 2]))");
    assert_eq!(ast("2 * 3 ^ 2"), "([INT, 2] [ASTERISK] ([INT, 3] [CARET] [INT, 2]))");
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(ast("(1 + 2) * 3"), "(([INT, 1] [PLUS] [INT, 2]) [ASTERISK] [INT, 3])");
    assert_eq!(ast("((x))"), "[IDENTIFIER, x]");
}

#[test]
fn unary_operators() {
    assert_eq!(ast("-2 ^ 2"), "(([MINUS] [INT, 2]) [CARET] [INT, 2])");
    assert_eq!(ast("2 ^ -1"), "([INT, 2] [CARET] ([MINUS] [INT, 1]))");
    assert_eq!(ast("- -x"), "([MINUS] ([MINUS] [IDENTIFIER, x]))");
    assert_eq!(ast("NOT a AND b"),
               "(([KEYWORD, NOT] [IDENTIFIER, a]) [KEYWORD, AND] [IDENTIFIER, b])");
}

#[test]
fn logical_and_comparison_levels() {
    assert_eq!(ast("a OR b AND c == 1"),
               "([IDENTIFIER, a] [KEYWORD, OR] ([IDENTIFIER, b] [KEYWORD, AND] ([IDENTIFIER, c] \
                [DOUBLE_EQUALS] [INT, 1])))");
    assert_eq!(ast("1 + 1 <= 3"), "(([INT, 1] [PLUS] [INT, 1]) [LESS_THAN_OR_EQUAL] [INT, 3])");
    assert_eq!(ast("a != b"), "([IDENTIFIER, a] [NOT_EQUAL] [IDENTIFIER, b])");
    assert_eq!(ast("a < b > c"),
               "(([IDENTIFIER, a] [LESS_THAN] [IDENTIFIER, b]) [GREATER_THAN] [IDENTIFIER, c])");
}

#[test]
fn literals() {
    assert_eq!(ast("2.5"), "[FLOAT, 2.5]");
    assert_eq!(ast(r#""hi\n""#), r#"[STRING, "hi\n"]"#);
    assert!(matches!(parse("42", "<STDIN>").unwrap(), Node::Number { .. }));
    assert!(matches!(parse("\"s\"", "<STDIN>").unwrap(), Node::String { .. }));
}

#[test]
fn list_literals() {
    assert_eq!(ast(r#"[1, "a", x]"#), r#"(LIST: {[INT, 1], [STRING, "a"], [IDENTIFIER, x]})"#);
    assert_eq!(ast("[[1], []]"), "(LIST: {(LIST: {[INT, 1]}), (LIST: {})})");
    assert_eq!(ast("[1 + 2]"), "(LIST: {([INT, 1] [PLUS] [INT, 2])})");

    let empty = parse("[]", "<STDIN>").unwrap();
    assert_eq!(empty.to_string(), "(LIST: {})");
    assert_eq!((empty.start().column, empty.end().column), (0, 2));
}

#[test]
fn assignments() {
    assert_eq!(ast("VAR x = 1 + 2"), "(VAR x = ([INT, 1] [PLUS] [INT, 2]))");
    assert_eq!(ast("x = 5"), "(VAR x = [INT, 5])");
    assert_eq!(ast("x == 5"), "([IDENTIFIER, x] [DOUBLE_EQUALS] [INT, 5])");
    assert_eq!(ast("x"), "[IDENTIFIER, x]");

    let node = parse("VAR total = 3", "<STDIN>").unwrap();
    let Node::VarAssign { name, value } = node else {
        panic!("expected an assignment");
    };
    assert_eq!(name.lexeme(), "total");
    assert_eq!(value.source_text(), "3");
}

#[test]
fn several_statements_become_a_list() {
    let src = "a = 1\nb = a; a + b";
    assert_eq!(ast(src),
               "(LIST: {(VAR a = [INT, 1]), (VAR b = [IDENTIFIER, a]), ([IDENTIFIER, a] [PLUS] \
                [IDENTIFIER, b])})");

    let root = parse(src, "<STDIN>").unwrap();
    assert_eq!((root.start().line, root.start().column), (0, 0));
    assert_eq!((root.end().line, root.end().column), (1, 12));
    assert_eq!(root.children().len(), 3);

    let tokens = tokenize("\n\n1\n\n\n2;;3\n", "<STDIN>").unwrap();
    let statements = Parser::new(tokens).parse_statements().unwrap();
    assert_eq!(statements.len(), 3);
}

#[test]
fn empty_program_is_an_empty_list_at_eof() {
    for src in ["", "\n\n", "# only a comment\n;"] {
        let root = parse(src, "<STDIN>").unwrap();
        assert_eq!(root.to_string(), "(LIST: {})");
        assert_eq!(root.start(), root.end());
        assert_eq!(root.start().index, src.len());
    }
}

#[test]
fn node_spans_cover_their_source() {
    let node = parse("x + 10", "<STDIN>").unwrap();
    assert_eq!((node.start().column, node.end().column), (0, 6));
    assert_eq!(node.source_text(), "x + 10");
    assert_eq!(node.children().len(), 2);

    let inner = parse("(1 + 2)", "<STDIN>").unwrap();
    assert_eq!(inner.source_text(), "1 + 2");

    let negated = parse("-(a)", "<STDIN>").unwrap();
    assert_eq!(negated.source_text(), "-(a");
}

#[test]
fn missing_operand_reports_end_of_input() {
    let diagnostic = syntax_error("1 +");
    assert_eq!(diagnostic.message(), format!("{EXPECTED_ATOM}, found end of input."));
    assert_eq!(diagnostic.start.column, 3);
    assert_eq!(diagnostic.to_string(),
               format!("Syntax Error: {EXPECTED_ATOM}, found end of input.\nFile: <STDIN>, line 1"));
}

#[test]
fn unbalanced_delimiters_are_errors() {
    assert_eq!(details("(1 + 2"), "Expected ')', found end of input.");
    assert_eq!(details("[1, 2"), "Expected ',' or ']', found end of input.");
    assert_eq!(details("[1,]"), format!("{EXPECTED_ATOM}, found ']'."));
    assert_eq!(details(")"), format!("{EXPECTED_ATOM}, found ')'."));
}

#[test]
fn statements_must_be_separated() {
    let diagnostic = syntax_error("1 2");
    assert_eq!(diagnostic.message(),
               "Expected an operator, newline or end of input, found int 2.");
    assert_eq!((diagnostic.start.column, diagnostic.end.column), (2, 3));

    assert_eq!(details("x = y = 1"),
               "Expected an operator, newline or end of input, found '='.");
}

#[test]
fn unparsed_constructs_are_errors() {
    assert_eq!(details("FUN f() -> 1"), format!("{EXPECTED_ATOM}, found keyword 'FUN'."));
    assert_eq!(details("{ }"), format!("{EXPECTED_ATOM}, found '{{'."));
    assert_eq!(details("a -> b"), "Expected an operator, newline or end of input, found '->'.");
}

#[test]
fn var_commits_to_an_assignment() {
    let diagnostic = syntax_error("VAR 5 = 1");
    assert_eq!(diagnostic.message(), "Expected identifier, found int 5.");
    assert_eq!(diagnostic.start.column, 4);

    assert_eq!(details("VAR x 1"), "Expected '=', found int 1.");
    assert_eq!(details("x = "), format!("{EXPECTED_ATOM}, found end of input."));
}

#[test]
fn speculation_backtracks_only_without_progress() {
    let tokens = Lexer::new("x + 1").make_tokens().unwrap();
    let mut cursor = TokenCursor::new(&tokens);
    assert_eq!(speculate(&mut cursor, parse_assignment).unwrap(), None);
    assert_eq!(cursor.index(), 0);
    assert!(speculate(&mut cursor, parse_expression).unwrap().is_some());
    assert_eq!(cursor.index(), 3);

    let tokens = Lexer::new("VAR 5").make_tokens().unwrap();
    let mut cursor = TokenCursor::new(&tokens);
    assert!(speculate(&mut cursor, parse_assignment).is_err());

    let tokens = Lexer::new("x = 1").make_tokens().unwrap();
    let mut cursor = TokenCursor::new(&tokens);
    let node = speculate(&mut cursor, parse_assignment).unwrap();
    assert_eq!(node.map(|n| n.to_string()).as_deref(), Some("(VAR x = [INT, 1])"));
}

#[test]
fn parser_can_run_more_than_once() {
    let parser = Parser::new(tokenize("a * (b + 1)", "<STDIN>").unwrap());
    let first = parser.parse().unwrap();
    let second = parser.parse().unwrap();
    assert_eq!(first, second);
    assert_eq!(parser.tokens().len(), 8);
}

#[test]
fn parser_without_tokens_fails_cleanly() {
    let diagnostic = Parser::new(Vec::new()).parse().unwrap_err();
    assert_eq!(diagnostic.message(), format!("{EXPECTED_ATOM}, found end of input."));
}

#[test]
fn lexical_errors_pass_through_parse() {
    let diagnostic = parse("x = \"open", "<STDIN>").unwrap_err();
    assert_eq!(diagnostic.kind, ErrorKind::UnterminatedString);
}

#[test]
fn deep_nesting_is_a_syntax_error() {
    let too_deep = format!("Expression nesting is too deep (maximum {MAX_NESTING_DEPTH} levels).");

    let parens = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    let diagnostic = syntax_error(&parens);
    assert_eq!(diagnostic.message(), too_deep);
    assert_eq!(diagnostic.start.column, MAX_NESTING_DEPTH + 1);

    let brackets = format!("{}{}", "[".repeat(10_000), "]".repeat(10_000));
    assert_eq!(details(&brackets), too_deep);

    let negations = format!("{}1", "-".repeat(10_000));
    assert_eq!(details(&negations), too_deep);

    let nots = format!("{}done", "NOT ".repeat(10_000));
    assert_eq!(details(&nots), too_deep);
}

#[test]
fn nesting_up_to_the_limit_parses() {
    let parens = format!("{}1{}", "(".repeat(MAX_NESTING_DEPTH), ")".repeat(MAX_NESTING_DEPTH));
    assert_eq!(ast(&parens), "[INT, 1]");

    let brackets = format!("{}{}", "[".repeat(MAX_NESTING_DEPTH), "]".repeat(MAX_NESTING_DEPTH));
    assert!(ast(&brackets).starts_with("(LIST: {(LIST: {"));
}
