//! Property-based tests for arithmetic and array semantics.
//!
//! These generate random operands, shapes and coordinates and check the
//! evaluator against Rust's own integer semantics and against the structural
//! invariants of zero-filled arrays.

use aslang::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            array::{assign_element, element_at, validate_indices},
            binary::core::eval_binary,
            core::Context,
        },
        value::{array::Array, core::Value, number::Number},
    },
    run_source_with,
};
use proptest::prelude::*;

// -- Strategies --

/// A shape of one to four dimensions, each one to four elements long.
fn shape_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1_usize..5, 1..5)
}

/// A shape together with a coordinate inside it.
fn shape_and_position() -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
    shape_strategy().prop_flat_map(|dims| {
                        let position = dims.iter().map(|&d| 0..d).collect::<Vec<_>>();
                        (Just(dims), position)
                    })
}

fn leaves(value: &Value) -> Vec<Value> {
    match value {
        Value::Array(array) => array.to_vec().iter().flat_map(leaves).collect(),
        other => vec![other.clone()],
    }
}

fn coordinates(position: &[usize]) -> Vec<Value> {
    position.iter()
            .map(|&p| Value::from(i64::try_from(p).unwrap()))
            .collect()
}

// -- Arithmetic --

proptest! {
    #[test]
    fn int_remainder_truncates_like_rust(a in any::<i64>(), b in any::<i64>()) {
        let result = eval_binary(BinaryOperator::Mod, &Value::from(a), &Value::from(b));

        match a.checked_rem(b) {
            Some(r) => prop_assert_eq!(result, Ok(Value::from(r))),
            None if b == 0 => prop_assert_eq!(result, Err(RuntimeError::DivisionByZero)),
            None => prop_assert_eq!(result, Err(RuntimeError::Overflow { op: "%" })),
        }
    }

    #[test]
    fn division_always_yields_a_float(a in -10_000_i64..10_000, b in 1_i64..10_000) {
        let result = eval_binary(BinaryOperator::Div, &Value::from(a), &Value::from(b));

        prop_assert!(matches!(result, Ok(Value::Number(Number::Float(_)))));
    }

    #[test]
    fn int_addition_is_exact_or_overflows(a in any::<i64>(), b in any::<i64>()) {
        let result = eval_binary(BinaryOperator::Add, &Value::from(a), &Value::from(b));

        match a.checked_add(b) {
            Some(sum) => prop_assert_eq!(result, Ok(Value::from(sum))),
            None => prop_assert_eq!(result, Err(RuntimeError::Overflow { op: "+" })),
        }
    }
}

// -- Arrays --

proptest! {
    #[test]
    fn zeroed_arrays_have_the_requested_size(dims in shape_strategy()) {
        let array = Array::zeroed(&dims);
        let cells = leaves(&Value::Array(array.clone()));

        prop_assert_eq!(array.depth(), dims.len());
        prop_assert_eq!(cells.len(), dims.iter().product::<usize>());
        prop_assert!(cells.iter().all(|cell| *cell == Value::from(0)));
    }

    #[test]
    fn written_elements_read_back((dims, position) in shape_and_position(), value in any::<i64>()) {
        let array = Array::zeroed(&dims);
        let positions = validate_indices(&array, &coordinates(&position)).unwrap();

        assign_element(&array, &positions, Value::from(value), "a").unwrap();

        prop_assert_eq!(element_at(&array, &positions), Some(Value::from(value)));
        let written = leaves(&Value::Array(array)).into_iter()
                                                  .filter(|cell| *cell != Value::from(0))
                                                  .count();
        prop_assert!(written <= 1);
    }

    #[test]
    fn out_of_range_writes_never_mutate(index in prop_oneof![-1_000_i64..0, 3_i64..1_000]) {
        let source = format!("(main (statements [
                                (assign a (array1d (number 3)))
                                (array_assign1d a (number {index}) (number 9))
                                (print (name a))
                              ]))");
        let mut context = Context::new("".as_bytes(), Vec::new());

        run_source_with(&mut context, &source).unwrap();

        let output = String::from_utf8(context.into_output()).unwrap();
        prop_assert_eq!(output,
                        format!("as says: Index {index} is out of range for dimension 0\n[0, 0, 0]\n"));
    }
}
