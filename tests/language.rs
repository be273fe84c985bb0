use std::fs::{self};

use mint::{
    config::Config,
    error::{Error, ParseError, RuntimeError},
    get_result, interpret_line,
    interpreter::{
        evaluator::core::{Context, Outcome},
        value::Value,
    },
    run_script,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use walkdir::WalkDir;

/// Runs every script under `tests/scripts/`. A line ending in `# => text`
/// must render as `text`; every other line must simply succeed.
#[test]
fn scripts_produce_annotated_values() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "mint"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let mut context = Context::new();
        let results = run_script(&content, &mut context);

        for ((number, text), result) in content.lines().enumerate().zip(results) {
            let outcome = result.unwrap_or_else(|e| {
                                    panic!("{path:?} line {}: {text}\nError: {e}", number + 1)
                                });
            if let Some((_, expected)) = text.split_once("# =>") {
                count += 1;
                assert_eq!(outcome.to_string(),
                           expected.trim(),
                           "{path:?} line {}: {text}",
                           number + 1);
            }
        }
    }

    assert!(count > 0, "No annotated lines found in tests/scripts");
}

fn assert_success(src: &str) -> String {
    match get_result(src) {
        Ok(outcome) => outcome.map(|o| o.to_string()).unwrap_or_default(),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match get_result(src) {
        Ok(_) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e,
    }
}

fn line(context: &mut Context, source: &str) -> Result<Outcome, Error> {
    interpret_line(source, 1, context)
}

#[test]
fn addition_leaves_environment_empty() {
    let mut context = Context::new();
    assert_eq!(line(&mut context, "1 + 2").unwrap().to_string(), "(Int 3)");
    assert_eq!(context.environment.to_string(), "[]");
}

#[test]
fn assignment_uses_existing_bindings() {
    let mut context = Context::new();
    line(&mut context, "r = 15").unwrap();

    let outcome = line(&mut context, "circumference = 3.14 * 2 * r").unwrap();
    assert_eq!(outcome.to_string(), "(Assign(ID circumference)(Float 94.200000))");
    assert_eq!(context.environment.to_string(),
               "[(circumference : (Float 94.200000)), (r : (Int 15))]");
}

#[test]
fn function_definition_and_application() {
    let mut context = Context::new();
    let defined = line(&mut context, "fn f(x, y) = x * y - 0.123456").unwrap();
    assert_eq!(defined.to_string(),
               "(Fun f (Param(ID x)(Param(ID y)()))(Sub(Mult(ID x)(ID y))(Float 0.123456)))");
    let after_definition = context.environment.to_string();

    assert_eq!(line(&mut context, "f(42, 0.01)").unwrap().to_string(), "(Float 0.296544)");
    assert_eq!(context.environment.to_string(), after_definition);
}

#[test]
fn unbound_identifier_is_error() {
    let mut context = Context::new();
    let err = line(&mut context, "x").unwrap_err();
    assert_eq!(err,
               Error::Runtime(RuntimeError::UnboundIdentifier { name: "x".to_string(),
                                                                line: 1, }));
    assert_eq!(context.environment.to_string(), "[]");
}

#[test]
fn parameter_shadowing_function_name_is_error() {
    let err = assert_failure("fn f(f) = 5*f");
    assert!(matches!(err, Error::Runtime(RuntimeError::DuplicateParameter { .. })));
}

#[test]
fn fractional_power() {
    assert_eq!(assert_success("64^0.5"), "(Float 8.000000)");
}

#[test]
fn integer_arithmetic() {
    assert_eq!(assert_success("7 * 9"), "(Int 63)");
    assert_eq!(assert_success("8 - 5"), "(Int 3)");
    assert_eq!(assert_success("10 / 2"), "(Int 5)");
    assert_eq!(assert_success("2 ^ 10"), "(Int 1024)");
    assert_eq!(assert_success("1 + 2 * 3"), "(Int 7)");
    assert_eq!(assert_success("(1 + 2) * 3"), "(Int 9)");
}

#[test]
fn type_promotion() {
    assert_eq!(assert_success("7 / 2"), "(Float 3.500000)");
    assert_eq!(assert_success("1 + 0.5"), "(Float 1.500000)");
    assert_eq!(assert_success("2 ^ -1"), "(Int 0)");
    assert_eq!(assert_success("-23 - -33.5"), "(Float 10.500000)");
}

#[test]
fn comments_and_blank_lines() {
    assert_eq!(assert_success("# just a comment"), "");
    assert_eq!(assert_success("x = 4 # four\n\nx * x"), "(Int 16)");
}

#[test]
fn recursion_through_dynamic_scope() {
    let script = "fn sq(x) = x * x\nfn sumsq(a, b) = sq(a) + sq(b)\nsumsq(3, 4)";
    assert_eq!(assert_success(script), "(Int 25)");
}

#[test]
fn division_by_zero_is_error() {
    let err = assert_failure("x = 1 / 0");
    assert_eq!(err, Error::Runtime(RuntimeError::DivisionByZero { line: 1 }));
}

#[test]
fn overflow_is_error() {
    assert!(matches!(assert_failure("9223372036854775807 + 1"),
                     Error::Runtime(RuntimeError::IntegerOverflow { .. })));
    assert!(matches!(assert_failure("2 ^ 63"),
                     Error::Runtime(RuntimeError::IntegerOverflow { .. })));
    assert!(matches!(assert_failure("99999999999999999999"),
                     Error::Parse(ParseError::LiteralTooLarge { .. })));
}

#[test]
fn wrong_function_arity_is_error() {
    let err = assert_failure("fn f(x, y) = x + y\nf(3)");
    assert_eq!(err,
               Error::Runtime(RuntimeError::ArityMismatch { function: "f".to_string(),
                                                            expected: 2,
                                                            found:    1,
                                                            line:     2, }));
}

#[test]
fn duplicate_parameter_is_error() {
    assert_failure("fn g(a, b, a) = a + b");
}

#[test]
fn syntax_errors() {
    assert!(matches!(assert_failure("1 +"), Error::Parse(_)));
    assert!(matches!(assert_failure("1 2"),
                     Error::Parse(ParseError::UnexpectedTrailingTokens { .. })));
    assert!(matches!(assert_failure("2 ^ 3 ^ 2"),
                     Error::Parse(ParseError::UnexpectedTrailingTokens { .. })));
    assert!(matches!(assert_failure("fn f() = 1"), Error::Parse(_)));
    assert!(matches!(assert_failure("x = $"),
                     Error::Parse(ParseError::InvalidCharacter { .. })));
}

#[test]
fn errors_report_their_line() {
    let err = assert_failure("a = 1\nb = 2\nc = d");
    assert_eq!(err.to_string(), "Error on line 3: Unbound identifier 'd'.");
}

#[test]
fn script_continues_after_errors() {
    let mut context = Context::new();
    let results = run_script("a = 1\nb = a / 0\nc = a + 1\nc", &mut context);

    assert_eq!(results.len(), 4);
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
    assert_eq!(results[3].as_ref().unwrap().to_string(), "(Int 2)");
    assert_eq!(context.environment.to_string(), "[(c : (Int 2)), (a : (Int 1))]");
}

#[test]
fn recursion_limit_is_configurable() {
    let mut context = Context::with_config(Config { recursion_limit: 4,
                                                    ..Config::default() });
    line(&mut context, "fn down(n) = down(n - 1)").unwrap();
    let len = context.environment.len();

    let err = line(&mut context, "down(10)").unwrap_err();
    assert_eq!(err,
               Error::Runtime(RuntimeError::RecursionLimit { limit: 4,
                                                             line:  1, }));
    assert_eq!(context.environment.len(), len);
}

#[test]
fn long_lines_fail_without_aborting() {
    let mut context = Context::new();
    line(&mut context, "x = 1").unwrap();

    let sum = vec!["1"; 20_000].join("+");
    assert!(matches!(line(&mut context, &sum),
                     Err(Error::Parse(ParseError::NestingTooDeep { .. }))));

    let grouped = format!("{}1{}", "(".repeat(20_000), ")".repeat(20_000));
    assert!(matches!(line(&mut context, &grouped),
                     Err(Error::Parse(ParseError::NestingTooDeep { .. }))));

    assert_eq!(line(&mut context, "x + 1").unwrap().to_string(), "(Int 2)");
    assert_eq!(context.environment.to_string(), "[(x : (Int 1))]");
}

#[test]
fn smallest_integer_literal() {
    assert_eq!(assert_success("-9223372036854775808"), "(Int -9223372036854775808)");
    assert_eq!(assert_success("x = -9223372036854775808\nx + 1"), "(Int -9223372036854775807)");
    assert!(matches!(assert_failure("0 - -9223372036854775808"),
                     Error::Runtime(RuntimeError::IntegerOverflow { .. })));
}

#[test]
fn example_works() {
    let contents = fs::read_to_string("tests/example.mint").unwrap();
    assert_eq!(assert_success(&contents), "(Float 0.296544)");
}

proptest! {
    #[test]
    fn integer_division_promotes_only_with_remainder(a in -1_000_000_000_000_i64..1_000_000_000_000,
                                                     b in -1_000_000_i64..1_000_000) {
        prop_assume!(b != 0);
        let mut context = Context::new();
        let outcome = line(&mut context, &format!("{a} / {b}")).unwrap();

        if a % b == 0 {
            prop_assert_eq!(outcome, Outcome::Value(Value::Integer(a / b)));
        } else {
            #[allow(clippy::cast_precision_loss)]
            let expected = a as f64 / b as f64;
            prop_assert_eq!(outcome, Outcome::Value(Value::Float(expected)));
        }
    }

    #[test]
    fn calls_restore_environment_length(params in 1_usize..6, args in 1_usize..6) {
        let mut context = Context::new();
        let names: Vec<String> = (0..params).map(|i| format!("p{i}")).collect();
        let definition = format!("fn g({}) = {}", names.join(", "), names.join(" + "));
        line(&mut context, &definition).unwrap();
        let before = context.environment.len();

        let values: Vec<String> = (0..args).map(|i| i.to_string()).collect();
        let result = line(&mut context, &format!("g({})", values.join(", ")));

        prop_assert_eq!(context.environment.len(), before);
        prop_assert_eq!(result.is_ok(), params == args);
    }

    #[test]
    fn parameters_shadow_only_during_call(outer in -1000_i64..1000, inner in -1000_i64..1000) {
        let mut context = Context::new();
        line(&mut context, &format!("x = {outer}")).unwrap();
        line(&mut context, "fn id(x) = x").unwrap();

        let called = line(&mut context, &format!("id({inner})")).unwrap();
        prop_assert_eq!(called, Outcome::Value(Value::Integer(inner)));
        let after = line(&mut context, "x").unwrap();
        prop_assert_eq!(after, Outcome::Value(Value::Integer(outer)));
    }
}
