use insta::assert_snapshot;
use wh_parser::ast::{Expr, Pred, Program, Stmt};
use wh_parser::lexer::tokenize;
use wh_parser::{Error, ParseErrorKind, Production, Source};

fn parse(source: &str) -> Program {
    let source = Source::new(source);
    match wh_parser::parse(&source) {
        Ok(program) => program,
        Err(err) => panic!("{}", wh::report(&source, &err)),
    }
}

fn parse_err(source: &str) -> Error {
    let source = Source::new(source);
    wh_parser::parse(&source).unwrap_err()
}

fn tree(source: &str) -> String {
    let source = Source::new(source);
    wh::render_tree(&source, 0).unwrap()
}

/// Variant, operator and child count of every node, in pre-order.
fn shape(program: &Program) -> Vec<String> {
    fn stmt(out: &mut Vec<String>, s: &Stmt) {
        match s {
            Stmt::Assignment(a) => {
                out.push("assign/1".to_string());
                expr(out, &a.value);
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                out.push("if/3".to_string());
                pred(out, condition);
                stmt(out, then_branch);
                stmt(out, else_branch);
            }
            Stmt::Skip => out.push("skip/0".to_string()),
            Stmt::Sequence(seq) => {
                out.push(format!("seq/{}", seq.len()));
                for s in seq.statements() {
                    stmt(out, s);
                }
            }
            Stmt::While { condition, body } => {
                out.push("while/2".to_string());
                pred(out, condition);
                stmt(out, body);
            }
        }
    }
    fn expr(out: &mut Vec<String>, e: &Expr) {
        match e {
            Expr::Literal(_) => out.push("lit/0".to_string()),
            Expr::BinaryMath { lhs, op, rhs } => {
                out.push(format!("math {}/2", op.symbol()));
                expr(out, lhs);
                expr(out, rhs);
            }
        }
    }
    fn pred(out: &mut Vec<String>, p: &Pred) {
        match p {
            Pred::BoolLiteral(_) => out.push("bool/0".to_string()),
            Pred::Not(arg) => {
                out.push("not/1".to_string());
                pred(out, arg);
            }
            Pred::BinaryBool { lhs, op, rhs } => {
                out.push(format!("bool {}/2", op.symbol()));
                pred(out, lhs);
                pred(out, rhs);
            }
            Pred::Relational { lhs, op, rhs } => {
                out.push(format!("rel {}/2", op.symbol()));
                expr(out, lhs);
                expr(out, rhs);
            }
        }
    }

    let mut out = Vec::new();
    for s in &program.statements {
        stmt(&mut out, s);
    }
    out
}

const FACTORIAL: &str = r#"
n := 5;
acc := 1;
while n > 1 do
    acc := acc * n;
    n := n - 1;
endwhile
"#;

const GCD: &str = r#"
while not a = b do
    if a > b then
        a := a - b;
    else
        b := b - a;
    endif
endwhile
"#;

#[test]
fn assignment() {
    assert_snapshot!(tree("x := 1 + 2 ;"), @r###"
    RootNode
      SequenceNode
        AssignmentNode x
          BinaryMathNode +
            LiteralNode 1
            LiteralNode 2
    "###);
}

#[test]
fn if_statement() {
    assert_snapshot!(tree("if true then skip else skip endif"), @r###"
    RootNode
      IfNode
        BoolLiteralNode true
        SkipNode
        SkipNode
    "###);
}

#[test]
fn while_statement() {
    assert_snapshot!(tree("while x < 10 do x := x + 1 ; endwhile"), @r###"
    RootNode
      WhileNode
        RelationalNode <
          LiteralNode x
          LiteralNode 10
        SequenceNode
          AssignmentNode x
            BinaryMathNode +
              LiteralNode x
              LiteralNode 1
    "###);
}

#[test]
fn factorial() {
    let program = parse(FACTORIAL);
    assert_eq!(program.statements.len(), 2);
    assert_eq!(
        shape(&program),
        vec![
            "seq/2", "assign/1", "lit/0", "assign/1", "lit/0", "while/2", "rel >/2", "lit/0",
            "lit/0", "seq/2", "assign/1", "math */2", "lit/0", "lit/0", "assign/1", "math -/2",
            "lit/0", "lit/0",
        ]
    );
}

#[test]
fn gcd() {
    assert_snapshot!(tree(GCD), @r###"
    RootNode
      WhileNode
        NotNode
          RelationalNode =
            LiteralNode a
            LiteralNode b
        IfNode
          RelationalNode >
            LiteralNode a
            LiteralNode b
          SequenceNode
            AssignmentNode a
              BinaryMathNode -
                LiteralNode a
                LiteralNode b
          SequenceNode
            AssignmentNode b
              BinaryMathNode -
                LiteralNode b
                LiteralNode a
    "###);
}

#[test]
fn top_level_statement_count() {
    let program = parse(
        r#"
        skip
        if x = 0 then skip else x := 0; endif
        a := 1; b := 2; c := 3;
        while false do skip endwhile
        skip"#,
    );
    assert_eq!(program.statements.len(), 5);
}

#[test]
fn parsing_is_structurally_deterministic() {
    for text in &[FACTORIAL, GCD] {
        assert_eq!(shape(&parse(text)), shape(&parse(text)));
        assert_eq!(parse(text), parse(text));
    }
}

#[test]
fn tokenizing_is_idempotent() {
    let source = Source::new(GCD);
    assert_eq!(tokenize(&source).unwrap(), tokenize(&source).unwrap());
}

mod errors {
    use super::*;
    use wh_parser::lexer::TokenKind;
    use wh_parser::LexError;

    #[test]
    fn truncated_assignment() {
        match parse_err("x :=") {
            Error::Parse(err) => {
                assert_eq!(err.production, Production::Assignment);
                assert_eq!(
                    err.expected,
                    vec![TokenKind::Identifier, TokenKind::Number]
                );
                assert_eq!(err.found.kind, TokenKind::EndOfFile);
                assert_eq!(err.found.kind.name(), "END_OF_FILE");
            }
            err => panic!("unexpected error {:?}", err),
        }
    }

    #[test]
    fn unknown_character() {
        match parse_err("x := 1;\nwhile x @ 2 do skip endwhile") {
            Error::Lex(err @ LexError::UnknownCharacter { .. }) => {
                assert_eq!(err.text(), "@");
                assert_eq!(err.location().line, 2);
                assert_eq!(err.location().column, 9);
            }
            err => panic!("unexpected error {:?}", err),
        }
    }

    #[test]
    fn identifier_starting_with_digit() {
        assert!(matches!(
            parse_err("x := 1y;"),
            Error::Lex(LexError::MalformedNumber { .. })
        ));
    }

    #[test]
    fn misordered_keywords() {
        match parse_err("if true else skip then skip endif") {
            Error::Parse(err) => {
                assert_eq!(err.production, Production::If);
                assert_eq!(err.expected, vec![TokenKind::Then]);
                assert_eq!(err.found.kind, TokenKind::Else);
            }
            err => panic!("unexpected error {:?}", err),
        }
    }

    #[test]
    fn deep_negation_is_rejected() {
        let text = format!("while {}true do skip endwhile", "not ".repeat(5_000));
        match parse_err(&text) {
            Error::Parse(err) => {
                assert_eq!(err.kind, ParseErrorKind::TooDeep);
                assert_eq!(err.production, Production::Predicate);
                assert_eq!(err.found.kind, TokenKind::Not);
                assert!(err.to_string().contains("nesting deeper than"));
            }
            err => panic!("unexpected error {:?}", err),
        }
    }

    #[test]
    fn deep_nesting_is_rejected() {
        let depth = 5_000;
        let text = format!(
            "{}x := 1;{}",
            "while (not (x = 1)) do if true then ".repeat(depth),
            " else skip endif endwhile".repeat(depth)
        );
        assert!(matches!(
            parse_err(&text),
            Error::Parse(err) if err.kind == ParseErrorKind::TooDeep
        ));
    }

    #[test]
    fn missing_endwhile() {
        match parse_err(FACTORIAL.trim_end().trim_end_matches("endwhile")) {
            Error::Parse(err) => {
                assert_eq!(err.production, Production::While);
                assert_eq!(err.expected, vec![TokenKind::Endwhile]);
                assert_eq!(err.found.kind, TokenKind::EndOfFile);
            }
            err => panic!("unexpected error {:?}", err),
        }
    }
}

mod loading {
    use std::fs;
    use std::path::Path;
    use wh::{load_source, LoadError};

    #[test]
    fn reads_wh_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("program.wh");
        fs::write(&path, "skip").unwrap();
        assert_eq!(load_source(&path).unwrap(), "skip");
    }

    #[test]
    fn rejects_other_extensions() {
        for name in &["program.txt", "program", ".wh", "program.wh.bak"] {
            assert!(matches!(
                load_source(Path::new(name)),
                Err(LoadError::Extension(_))
            ));
        }
    }

    #[test]
    fn reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.wh");
        assert!(matches!(load_source(&path), Err(LoadError::Io { .. })));
    }
}

mod binary {
    use std::fs;
    use std::process::Command;

    fn run(text: &str) -> std::process::Output {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("program.wh");
        fs::write(&path, text).unwrap();
        Command::new(env!("CARGO_BIN_EXE_wh"))
            .arg(&path)
            .env_remove("RUST_LOG")
            .output()
            .unwrap()
    }

    #[test]
    fn prints_tree() {
        let output = run("x := 1;");
        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.starts_with("RootNode\n"));
    }

    #[test]
    fn fails_on_parse_error() {
        let output = run("x :=");
        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains("END_OF_FILE"));
    }

    #[test]
    fn fails_on_deep_nesting() {
        let output = run(&format!("while {}true do skip endwhile", "not ".repeat(5_000)));
        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains("nesting deeper than"));
    }
}
