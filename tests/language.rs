use std::fs;

use aslang::{
    interpreter::{
        evaluator::core::{Context, EvalConfig},
        value::core::Value,
    },
    run_source_with,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn script_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "tree"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = fs::read_to_string(path.with_extension("out")).unwrap_or_else(|e| {
                           panic!("Missing expected output for {path:?}: {e}")
                       });
        let input = fs::read_to_string(path.with_extension("in")).unwrap_or_default();

        count += 1;
        assert_eq!(run_with_input(&source, &input), expected, "script {path:?}");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn run_with_input(source: &str, input: &str) -> String {
    let mut context = Context::new(input.as_bytes(), Vec::new());
    if let Err(e) = run_source_with(&mut context, source) {
        panic!("Script failed: {e}");
    }
    String::from_utf8(context.into_output()).expect("output is UTF-8")
}

/// Wraps statements in a program root.
fn program(statements: &[&str]) -> String {
    format!("(main (statements [{}]))", statements.join("\n"))
}

fn assert_output(statements: &[&str], expected: &str) {
    assert_eq!(run_with_input(&program(statements), ""), expected);
}

fn assert_failure(source: &str) {
    let mut context = Context::new("".as_bytes(), Vec::new());
    if run_source_with(&mut context, source).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_output(&["(assign x (number 5))",
                    "(assign x (plus (name x) (number 3)))",
                    "(print (name x))"],
                  "8\n");
    assert_output(&["(print (times (number 7) (number 9)))"], "63\n");
    assert_output(&["(print (minus (number 8) (number 5.5)))"], "2.5\n");
    assert_output(&["(print (uminus (paren (plus (number 1) (number 2)))))"], "-3\n");
}

#[test]
fn division_is_always_float() {
    assert_output(&["(print (divide (number 8) (number 2)))"], "4.0\n");
    assert_output(&["(print (divide (number 7) (number 2)))"], "3.5\n");
    assert_output(&["(print (divide (number 1) (number 0)))", "(print (string after))"],
                  "as says: Division by zero!\nafter\n");
}

#[test]
fn remainder_is_truncated() {
    assert_output(&["(print (mod (number 7) (number 3)))",
                    "(print (mod (number -7) (number 3)))",
                    "(print (mod (number 7) (number -3)))",
                    "(print (mod (number 7) (number 0)))"],
                  "1\n-1\n1\nas says: Division by zero!\n");
}

#[test]
fn powers_keep_integers_when_they_can() {
    assert_output(&["(print (pow (number 2) (number 10)))",
                    "(print (pow (number 2) (number -1)))",
                    "(print (pow (number 2.0) (number 2)))",
                    "(print (pow (number 10) (number 30)))"],
                  "1024\n0.5\n4.0\nas says: Integer overflow in '^'!\n");
}

#[test]
fn float_formatting() {
    assert_output(&["(print (number 1e20))",
                    "(print (number 0.1))",
                    "(print (times (number 1e300) (number 1e300)))",
                    "(print (number 3))"],
                  "1e+20\n0.1\ninf\n3\n");
}

#[test]
fn undefined_names_leave_the_store_unchanged() {
    let mut context = Context::new("".as_bytes(), Vec::new());
    let source = program(&["(assign y (plus (name y) (number 1)))"]);

    run_source_with(&mut context, &source).expect("script runs");

    assert!(!context.store.contains("y"));
    assert_eq!(context.into_output(), b"as says: y hasn't been defined!\n");
}

#[test]
fn failing_statements_do_not_stop_the_program() {
    assert_output(&["(print (name missing))",
                    "(print (plus (string a) (number 1)))",
                    "(print (string still-running))"],
                  "as says: missing hasn't been defined!\n\
                   as says: You can't use '+' with types 'text' and 'int'!\n\
                   still-running\n");
}

#[test]
fn missing_values_are_not_assigned() {
    let mut context = Context::new("".as_bytes(), Vec::new());
    let source = program(&["(assign x (pass))"]);

    run_source_with(&mut context, &source).expect("script runs");

    assert!(!context.store.contains("x"));
    assert_eq!(context.into_output(), b"as says: Expression produced no value!\n");
}

#[test]
fn increment_and_decrement() {
    assert_output(&["(assign i (number 1))",
                    "(inc i)",
                    "(inc i)",
                    "(dec i)",
                    "(print (name i))",
                    "(print (inc i))"],
                  "2\n3\n");
    assert_output(&["(dec z)"], "as says: z hasn't been defined!\n");
    assert_output(&["(assign s (string a))", "(inc s)"],
                  "as says: You can't use '+' with types 'text' and 'int'!\n");
}

#[test]
fn repeating_empty_values_is_immediate() {
    assert_output(&["(print (times (list []) (number 100000000000)))",
                    "(print (times (number 100000000000) (string \"\")))",
                    "(print (times (list [(number 1)]) (number 100000000000)))"],
                  "[]\n\n\
                   as says: Can't build a value with 100000000000 elements, the limit is 16777216!\n");
}

#[test]
fn array_nesting_is_bounded() {
    let mut context = Context::new("".as_bytes(), Vec::new());
    let source = program(&["(assign a (list []))",
                           "(assign i (number 0))",
                           "(while (lt (name i) (number 100)) (statements [
                               (assign a (list [(name a)]))
                               (inc i)
                           ]))",
                           "(print (equals (name a) (name a)))"]);

    run_source_with(&mut context, &source).expect("script runs");

    let Some(Value::Array(deepest)) = context.store.get("a").cloned() else {
        panic!("a should still hold an array");
    };
    assert_eq!(deepest.depth(), 64);

    let expected = format!("{}1\n",
                           "as says: Arrays can't be nested more than 64 levels deep!\n".repeat(37));
    assert_eq!(String::from_utf8(context.into_output()).expect("output is UTF-8"), expected);
}

#[test]
fn array_ranks_are_bounded() {
    let dims = vec!["(number 1)"; 65].join(" ");

    assert_output(&[format!("(assign a (array65d {dims}))").as_str(), "(print (name a))"],
                  "as says: Arrays can't be nested more than 64 levels deep!\n\
                   as says: a hasn't been defined!\n");
}

#[test]
fn text_and_list_operations() {
    assert_output(&["(print (plus (string ab) (string cd)))",
                    "(print (times (string ab) (number 3)))",
                    "(print (list [(number 1) (string a) (number 2.5)]))",
                    "(print (times (list [(number 0)]) (number 3)))",
                    "(print (plus (list [(number 1)]) (list [(number 2)])))"],
                  "abcd\nababab\n[1, 'a', 2.5]\n[0, 0, 0]\n[1, 2]\n");
}

#[test]
fn generic_indexing() {
    assert_output(&["(assign a (list [(number 1) (number 2) (number 3)]))",
                    "(print (index (name a) (number 0)))",
                    "(print (index (name a) (number -1)))",
                    "(print (index (name a) (number 5)))",
                    "(print (index (string hello) (number 1)))",
                    "(print (index (number 5) (number 0)))"],
                  "1\n3\nas says: Index 5 is out of range!\ne\n\
                   as says: Only arrays and text can be indexed, not 'int'!\n");
}

#[test]
fn comparisons_and_logic() {
    assert_output(&["(print (lt (number 2) (number 3)))",
                    "(print (gte (number 3) (number 3.0)))",
                    "(print (equals (string a) (string a)))",
                    "(print (gt (string a) (number 1)))",
                    "(print (ne (string a) (number 1)))",
                    "(print (and (number 1) (string \"\")))",
                    "(print (or (number 0) (list [(number 0)])))"],
                  "1\n1\n1\n0\n1\n0\n1\n");
}

#[test]
fn if_elif_else_picks_the_first_true_branch() {
    let branches = ["(statements [(print (string a))])",
                    "(statements [(print (string b))])",
                    "(statements [(print (string c))])"];
    let conditional = |first: &str, second: &str| {
        format!("(if-elif-else (number {first}) {} (number {second}) {} {})",
                branches[0], branches[1], branches[2])
    };

    assert_output(&[conditional("0", "1").as_str()], "b\n");
    assert_output(&[conditional("1", "1").as_str()], "a\n");
    assert_output(&[conditional("0", "0").as_str()], "c\n");
    assert_output(&["(if-elif-else (number 0) (statements [(print (string a))]) ~ ~ ~)",
                    "(print (string end))"],
                  "end\n");
}

#[test]
fn elif_condition_is_evaluated_lazily() {
    assert_output(&["(if-elif-else (number 1) (statements [(print (string then))]) \
                     (print (string elif-condition)) (statements []) ~)"],
                  "then\n");
}

#[test]
fn failing_conditions_count_as_false() {
    assert_output(&["(if-elif-else (name nope) (statements [(print (string a))]) ~ ~ \
                     (statements [(print (string b))]))"],
                  "as says: nope hasn't been defined!\nb\n");
    assert_output(&["(while (name nope) (statements [(print (string body))]))",
                    "(print (string after))"],
                  "as says: nope hasn't been defined!\nafter\n");
}

#[test]
fn while_loops_until_false() {
    assert_output(&["(assign i (number 0))",
                    "(while (lt (name i) (number 3)) (statements [(print (name i)) (inc i)]))"],
                  "0\n1\n2\n");
}

#[test]
fn break_finishes_the_current_iteration() {
    assert_output(&["(assign i (number 0))",
                    "(while (number 1) (statements [
                        (inc i)
                        (if-elif-else (equals (name i) (number 3))
                                      (statements [(break) (print (string after-break))])
                                      ~ ~ ~)
                        (print (name i))
                    ]))",
                    "(print (string done))"],
                  "1\n2\nafter-break\n3\ndone\n");
}

#[test]
fn break_outside_a_loop_is_harmless() {
    assert_output(&["(break)", "(print (string next))"], "next\n");
}

#[test]
fn break_markers_are_never_stored() {
    let mut context = Context::new("".as_bytes(), Vec::new());
    let source = program(&["(assign x (if-elif-else (number 1) (statements [(break)]) ~ ~ ~))",
                           "(assign l (list [(if-elif-else (number 1) (statements [(break)]) ~ ~ ~)]))",
                           "(assign i (number 0))",
                           "(while (lt (name i) (number 3)) (statements [(print (name i)) (inc i)]))"]);

    run_source_with(&mut context, &source).expect("script runs");

    assert!(!context.store.contains("x"));
    assert!(!context.store.contains("l"));
    assert_eq!(String::from_utf8(context.into_output()).expect("output is UTF-8"),
               "as says: Expression produced no value!\n\
                as says: Expression produced no value!\n\
                0\n1\n2\n");
}

#[test]
fn break_markers_are_not_operands() {
    assert_output(&["(print (plus (if-elif-else (number 1) (statements [(break)]) ~ ~ ~) (number 1)))",
                    "(print (if-elif-else (number 1) (statements [(break)]) ~ ~ ~))"],
                  "as says: Expression produced no value!\n\
                   as says: Expression produced no value!\n");
}

#[test]
fn two_dimensional_array_scenario() {
    assert_output(&["(assign a (array2d (number 2) (number 3)))",
                    "(array_assign2d a (number 1) (number 2) (number 7))",
                    "(print (array_access2d a (number 1) (number 2)))",
                    "(print (array_access2d a (number 0) (number 0)))",
                    "(print (name a))"],
                  "7\n0\n[[0, 0, 0], [0, 0, 7]]\n");
}

#[test]
fn higher_rank_arrays_share_one_handler() {
    assert_output(&["(assign cube (array3d (number 2) (number 2) (number 2)))",
                    "(array_assign3d cube (number 1) (number 0) (number 1) (string x))",
                    "(print (array_access3d cube (number 1) (number 0) (number 1)))",
                    "(print (array_access1d cube (number 1)))",
                    "(assign t (array5d (number 1) (number 1) (number 1) (number 1) (number 2)))",
                    "(array_assign5d t (number 0) (number 0) (number 0) (number 0) (number 1) (number 9))",
                    "(print (name t))"],
                  "x\n[[0, 'x'], [0, 0]]\n[[[[[0, 9]]]]]\n");
}

#[test]
fn arrays_are_shared_on_assignment() {
    assert_output(&["(assign a (array1d (number 2)))",
                    "(assign b (name a))",
                    "(array_assign1d b (number 0) (number 9))",
                    "(print (name a))"],
                  "[9, 0]\n");
}

#[test]
fn array_validation_errors() {
    assert_output(&["(assign a (array2d (number 2) (number 2)))",
                    "(print (array_access3d a (number 0) (number 0) (number 0)))",
                    "(print (array_access1d a (number 0.5)))",
                    "(print (array_access2d a (number 0) (number 2)))",
                    "(print (array_access1d a (number -1)))",
                    "(array_assign1d a (number 0) (number 1))",
                    "(array_assign2d a (number 0) (number 0) (name a))",
                    "(print (name a))"],
                  "as says: Too many indices for array dimension 2\n\
                   as says: Array index must be an integer, got 0.5\n\
                   as says: Index 2 is out of range for dimension 1\n\
                   as says: Index -1 is out of range for dimension 0\n\
                   as says: Too few indices: dimension 1 is an array\n\
                   as says: Array elements can't hold arrays, assign numbers or text to 'a'\n\
                   [[0, 0], [0, 0]]\n");
}

#[test]
fn array_names_must_hold_arrays() {
    assert_output(&["(print (array_access1d nothing (number 0)))",
                    "(assign n (number 4))",
                    "(array_assign1d n (number 0) (number 1))"],
                  "as says: Array 'nothing' hasn't been defined!\n\
                   as says: 'n' is not an array, it holds a value of type 'int'!\n");
}

#[test]
fn array_dimensions_are_validated() {
    assert_output(&["(assign a (array1d (number -2)))",
                    "(assign a (array1d (number 2.5)))",
                    "(assign a (array1d (string two)))",
                    "(print (array1d (number 2.0)))"],
                  "as says: Array dimension must be a positive number, got -2\n\
                   as says: Array dimension must be an integer, got 2.5\n\
                   as says: Array dimension must be a positive number, got two\n\
                   [0, 0]\n");
}

#[test]
fn input_reads_numbers_and_text() {
    let source = program(&["(assign name (input (string \"name? \")))",
                           "(assign age (input (string \"age? \")))",
                           "(print (plus (name name) (string !)))",
                           "(print (plus (name age) (number 1)))",
                           "(input (string more?))"]);

    assert_eq!(run_with_input(&source, "Ada\n36\n"),
               "name? age? Ada!\n37.0\nmore?as says: Input stream closed!\n");
}

#[test]
fn unknown_node_kinds_are_skipped() {
    assert_output(&["(lambda (number 1))", "(print (string ok))"], "ok\n");
}

#[test]
fn statement_expressions_yield_their_operand() {
    let mut context = Context::new("".as_bytes(), Vec::new());
    let tree = aslang::interpreter::parser::core::read_tree("(statement-expr (number 4))")
        .expect("tree reads");

    assert_eq!(context.evaluate(&tree).ok(), Some(Value::from(4)));
}

#[test]
fn bindings_persist_across_trees() {
    assert_eq!(run_with_input("(assign x (number 1))\n(print (name x))", ""), "1\n");
}

#[test]
fn nesting_limit_is_reported() {
    let mut tree = String::from("(number 1)");
    for _ in 0..20 {
        tree = format!("(paren {tree})");
    }
    let deep = format!("(print {tree})");
    let source = program(&[deep.as_str(), "(print (number 2))"]);
    let mut context =
        Context::with_config("".as_bytes(), Vec::new(), EvalConfig { max_depth: 8 });

    run_source_with(&mut context, &source).expect("script runs");

    assert_eq!(context.into_output(),
               b"as says: Maximum nesting depth of 8 exceeded!\n2\n");
}

#[test]
fn malformed_input_is_returned_to_the_caller() {
    assert_failure("(main (statements [(print (number 1))])");
    assert_failure("(main (statements [(assign x)]))");
    assert_failure("(main (statements [(array2d (number 1))]))");
    assert_failure("(main (statements [(number one)]))");
    assert_failure("(main (statements [(print \"bad escape \\q\")]))");
}
