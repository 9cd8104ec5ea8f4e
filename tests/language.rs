use std::fs::{self};

use tilang::{
    Error, parse, run_with_output, scan,
    error::{LexError, ParseError, RuntimeError},
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, block) in extract_ti_blocks(&content).into_iter().enumerate() {
            count += 1;
            let mut out = Vec::new();
            if let Err(e) = run_with_output(&block.code, &mut out) {
                panic!("Example {} in {:?} failed:\n{}\nError: {}", i + 1, path, block.code, e);
            }
            if let Some(expected) = block.expected {
                assert_eq!(String::from_utf8_lossy(&out),
                           expected,
                           "Example {} in {:?} printed the wrong output",
                           i + 1,
                           path);
            }
        }
    }

    assert!(count > 0, "No ti examples found in book/src");
}

struct Block {
    code:     String,
    expected: Option<String>,
}

/// Collects ```ti blocks. A ```text block that directly follows one, with
/// only blank lines in between, holds the output it must print.
fn extract_ti_blocks(content: &str) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::new();
    let mut fence = None;
    let mut buf = String::new();
    let mut attachable = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        match fence {
            None if trimmed.starts_with("```ti") => {
                fence = Some("ti");
                buf.clear();
            },
            None if trimmed.starts_with("```text") => {
                fence = Some("text");
                buf.clear();
            },
            None => {
                if !trimmed.is_empty() {
                    attachable = false;
                }
            },
            Some(kind) if trimmed.starts_with("```") => {
                if kind == "ti" {
                    blocks.push(Block { code:     buf.clone(),
                                        expected: None, });
                    attachable = true;
                } else if attachable && let Some(last) = blocks.last_mut() {
                    last.expected = Some(buf.clone());
                    attachable = false;
                }
                fence = None;
            },
            Some(_) => {
                buf.push_str(line);
                buf.push('\n');
            },
        }
    }

    blocks
}

fn output_of(src: &str) -> String {
    let mut out = Vec::new();
    if let Err(e) = run_with_output(src, &mut out) {
        panic!("Script failed: {e}\n{src}");
    }
    String::from_utf8(out).expect("output is not UTF-8")
}

fn error_of(src: &str) -> Error {
    match run_with_output(src, Vec::new()) {
        Ok(_) => panic!("Script succeeded but was expected to fail:\n{src}"),
        Err(e) => e,
    }
}

fn assert_prints(src: &str, expected: &str) {
    assert_eq!(output_of(src), expected, "for script:\n{src}");
}

#[test]
fn arithmetic() {
    assert_prints("print(1 + 2);", "3\n");
    assert_prints("print(5 % 2);", "1\n");
    assert_prints("print(7 - 10);", "-3\n");
    assert_prints("print(5 / 2);", "2.5\n");
    assert_prints("print(0.1 + 0.2);", "0.30000000000000004\n");
    assert_prints("print(-5 % 3);", "1\n");
    assert_prints("print(5 % -3);", "-1\n");
}

#[test]
fn precedence() {
    assert_prints("print(1 + 2 * 3);", "7\n");
    assert_prints("print((1 + 2) * 3);", "9\n");
    assert_prints("print(10 - 4 - 3);", "3\n");
    assert_prints("print(1 + 2 < 4);", "1\n");
    assert_prints("print(1 << 2 + 1);", "8\n");
    assert_prints("print(1 | 2 ^ 3 & 1);", "3\n");
    assert_prints("print(-2 * -3);", "6\n");
    assert_prints("print(!0 == 1);", "1\n");
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let tokens = scan("1 + 2 * 3;").unwrap().tokens;
    let program = parse(&tokens).unwrap();
    assert_eq!(program.len(), 1);
    assert_eq!(program[0].to_string(), "(1 + (2 * 3));\n");
}

#[test]
fn division_by_zero_is_error() {
    assert!(matches!(error_of("print(1 / 0);"),
                     Error::Runtime(RuntimeError::DivisionByZero { line: 1 })));
    assert!(matches!(error_of("x = 3 % 0;"),
                     Error::Runtime(RuntimeError::DivisionByZero { line: 1 })));
}

#[test]
fn logical_operators_short_circuit() {
    assert_prints("0 and print('x');", "");
    assert_prints("1 or print('x');", "");
    assert_prints("1 and print('x');", "x\n");
    assert_prints("0 or print('x');", "x\n");
    assert_prints("0 && undefined;\n1 || undefined;", "");
}

#[test]
fn logical_operators_yield_numbers() {
    assert_prints("print(0 or 'yes');", "1\n");
    assert_prints("print(2 and 3);", "1\n");
    assert_prints("print('' or 0);", "0\n");
    assert_prints("print(0 and 'x');", "0\n");
}

#[test]
fn bitwise_and_is_conjunction() {
    assert_prints("print(6 & 3);", "2\n");
    assert_prints("print(6 ^ 3);", "5\n");
    assert_prints("print(6 | 3);", "7\n");
    assert_prints("print(~5);", "-6\n");
    assert_prints("print(1 << 10);", "1024\n");
    assert_prints("print(-16 >> 2);", "-4\n");
    assert_prints("print(1 << 53);", "9007199254740992\n");
    assert_prints("print(1 << 60);", "1152921504606846976\n");
    assert_prints("print(9007199254740992 | 0);", "9007199254740992\n");
}

#[test]
fn strings() {
    assert_prints("print('ab' + 'cd');", "abcd\n");
    assert_prints("print('tab\\there');", "tab\there\n");
    assert_prints("print('it\\'s');", "it's\n");
    assert_prints("print('a' < 'b', 'a' == 'a');", "1\n1\n");
    assert!(matches!(error_of("print('a' - 'b');"),
                     Error::Runtime(RuntimeError::TypeError { .. })));
    assert!(matches!(error_of("print('a' + 1);"),
                     Error::Runtime(RuntimeError::TypeError { .. })));
}

#[test]
fn unknown_escape_is_only_a_warning() {
    let scanned = scan("x = 'a\\qb';").unwrap();
    assert_eq!(scanned.warnings.len(), 1);
    assert_prints("print('a\\qb');", "a\\qb\n");
}

#[test]
fn backslash_at_end_of_line_inside_a_string() {
    let scanned = scan("print('a\\\nb');").unwrap();
    assert_eq!(scanned.warnings.len(), 1);
    assert_prints("print('a\\\nb');", "a\\\nb\n");
}

#[test]
fn unterminated_string_is_error() {
    assert!(matches!(error_of("print('oops);"),
                     Error::Lex(LexError::UnexpectedEndOfInput { line: 1 })));
}

#[test]
fn redeclaration_rebinds_instead_of_shadowing() {
    assert_prints("x = 1;\n{\n  x = 2;\n}\nprint(x);", "2\n");
    assert_prints("fun f() { return 1; }\n{ fun f() { return 2; } }\nprint(f());", "2\n");
}

#[test]
fn block_scoped_names_do_not_leak() {
    assert!(matches!(error_of("{ inner = 1; }\nprint(inner);"),
                     Error::Runtime(RuntimeError::UnknownVariable { line: 2, .. })));
}

#[test]
fn function_call_and_return() {
    assert_prints("fun add(a, b) { return a + b; }\nprint(add(2, 3));", "5\n");
    assert_prints("fun fact(n) { if n < 2 { return 1; } return n * fact(n - 1); }\nprint(fact(10));",
                  "3628800\n");
}

#[test]
fn arity_mismatch_is_error() {
    let err = error_of("fun add(a, b) { return a + b; }\nadd(1);");
    assert!(matches!(err,
                     Error::Runtime(RuntimeError::ArgumentCountMismatch { expected: 2,
                                                                          found:    1,
                                                                          line:     2, })));
    assert_eq!(err.to_string(), "Error on line 2: Arity mismatch, expected 2 arguments, got 1.");
}

#[test]
fn functions_are_values() {
    assert_prints("fun twice(f, x) { return f(f(x)); }\nfun inc(n) { return n + 1; }\nprint(twice(inc, 5));",
                  "7\n");
    assert_prints("fun id(x) { return x; }\ng = id;\nprint(g(4));", "4\n");
    assert_prints("fun pair(a, b) { return a; }\nprint(pair);", "<fun(a, b)>\n");
}

#[test]
fn scope_is_dynamic() {
    assert_prints("fun show() { print(level); }\nfun outer() { level = 'outer'; show(); }\nouter();",
                  "outer\n");
    assert!(matches!(error_of("fun show() { print(level); }\nshow();"),
                     Error::Runtime(RuntimeError::UnknownVariable { .. })));
}

#[test]
fn parameters_shadow_outer_names() {
    assert_prints("x = 1;\nfun f(x) { x = 5; return x; }\nprint(f(0));\nprint(x);",
                  "5\n1\n");
}

#[test]
fn early_return_from_loops() {
    assert_prints("fun find(limit) {\n  i = 0;\n  while 1 {\n    if i * i > limit { return i; }\n    i = i + 1;\n  }\n}\nprint(find(50));",
                  "8\n");
}

#[test]
fn while_uses_truthiness() {
    assert_prints("s = 'abc';\nn = 0;\nwhile s { s = ''; n = n + 1; }\nprint(n);", "1\n");
}

#[test]
fn void_result_cannot_be_used() {
    assert!(matches!(error_of("fun nothing() { }\nprint(nothing());"),
                     Error::Runtime(RuntimeError::MissingValue { line: 2 })));
    assert_prints("fun nothing() { }\nnothing();\nprint('ok');", "ok\n");
}

#[test]
fn print_returns_one() {
    assert_prints("x = print('a', 'b');\nprint(x);", "a\nb\n1\n");
}

#[test]
fn print_is_reserved() {
    assert!(matches!(error_of("print = 1;"),
                     Error::Parse(ParseError::IdentifierReserved { .. })));
    assert!(matches!(error_of("fun print(x) { }"),
                     Error::Parse(ParseError::IdentifierReserved { .. })));
    assert!(matches!(error_of("fun f(print) { }"),
                     Error::Parse(ParseError::IdentifierReserved { .. })));
    assert!(matches!(error_of("x = print;"),
                     Error::Runtime(RuntimeError::UnknownVariable { .. })));
}

#[test]
fn return_outside_function_is_error() {
    assert!(matches!(error_of("return 1;"),
                     Error::Parse(ParseError::ReturnOutsideFunction { line: 1 })));
    assert!(matches!(error_of("if 1 {\n  return 2;\n}"),
                     Error::Parse(ParseError::ReturnOutsideFunction { line: 2 })));
}

#[test]
fn missing_punctuation_is_reported() {
    assert!(matches!(error_of("x = 1\ny = 2;"), Error::Parse(ParseError::ExpectedToken { .. })));
    assert!(matches!(error_of("print(1;"), Error::Parse(ParseError::ExpectedToken { .. })));
    assert!(matches!(error_of("{ x = 1;"), Error::Parse(ParseError::ExpectedToken { .. })));
    assert!(matches!(error_of("x = ;"), Error::Parse(ParseError::UnexpectedToken { .. })));
}

#[test]
fn calling_a_non_function_is_error() {
    assert!(matches!(error_of("x = 1;\nx();"),
                     Error::Runtime(RuntimeError::NotCallable { line: 2, .. })));
}

#[test]
fn comments_and_unknown_characters_are_ignored() {
    assert_prints("# comment\nprint(1); # trailing\n$print(2);", "1\n2\n");
}

#[test]
fn output_before_an_error_is_kept() {
    let mut out = Vec::new();
    assert!(run_with_output("print(1);\nprint(missing);", &mut out).is_err());
    assert_eq!(out, b"1\n");
}

#[test]
fn lexemes_rescan_to_the_same_tokens() {
    let source = fs::read_to_string("tests/example.ti").expect("missing file");
    let tokens: Vec<_> = scan(&source).unwrap().tokens.into_iter().map(|(t, _)| t).collect();

    let rendered = tokens.iter().map(tilang::interpreter::lexer::Token::lexeme).collect::<Vec<_>>().join(" ");
    let rescanned: Vec<_> = scan(&rendered).unwrap().tokens.into_iter().map(|(t, _)| t).collect();

    assert_eq!(tokens, rescanned);
}

#[test]
fn rendering_is_idempotent() {
    let source = fs::read_to_string("tests/example.ti").expect("missing file");
    let render = |src: &str| {
        parse(&scan(src).unwrap().tokens).unwrap()
                                         .iter()
                                         .map(ToString::to_string)
                                         .collect::<Vec<_>>()
                                         .join("\n")
    };

    let once = render(&source);
    let twice = render(&once);
    assert_eq!(once, twice);
}

#[test]
fn rendered_program_behaves_the_same() {
    let source = fs::read_to_string("tests/example.ti").expect("missing file");
    let rendered = parse(&scan(&source).unwrap().tokens).unwrap()
                                                        .iter()
                                                        .map(ToString::to_string)
                                                        .collect::<Vec<_>>()
                                                        .join("\n");
    assert_eq!(output_of(&source), output_of(&rendered));
}

#[test]
fn test_script_file() {
    let script = fs::read_to_string("tests/example.ti").expect("missing file");
    assert_prints(&script, "55\n120\n1\n0\nfizz\n4\nbuzz\nhello, world\n16\n2\n");
}

#[test]
fn runaway_recursion_is_reported() {
    let source = "fun down(n) {\n  if n == 0 { return 0; }\n  return down(n - 1);\n}\nprint(down(900));\nprint(down(3000));";

    // Nested calls need far more than the default test thread stack.
    let outcome = std::thread::Builder::new().stack_size(64 * 1024 * 1024)
                                             .spawn(move || {
                                                 let mut out = Vec::new();
                                                 let result = run_with_output(source, &mut out);
                                                 (result, out)
                                             })
                                             .unwrap()
                                             .join()
                                             .unwrap();

    assert_eq!(outcome.1, b"0\n");
    assert!(matches!(outcome.0,
                     Err(Error::Runtime(RuntimeError::RecursionLimit { limit: 1000, line: 3 }))));
}
