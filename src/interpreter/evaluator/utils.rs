use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Fails with a [`RuntimeError::MethodError`] unless exactly `expected`
/// arguments were passed.
///
/// Builtins are arity-checked before they run; this guards direct calls.
pub fn check_arity<T>(name: &str, args: &[T], expected: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::method(format!("'{name}' expects {expected} arguments, but got {}",
                                         args.len())).into())
    }
}

/// Extracts an integer, or fails with a [`RuntimeError::TypeError`].
///
/// # Example
/// ```
/// use boomslang::interpreter::{evaluator::utils::expect_integer, value::core::Value};
///
/// assert_eq!(expect_integer(&Value::Integer(3)).unwrap(), 3);
/// assert!(expect_integer(&Value::from("3")).is_err());
/// ```
pub fn expect_integer(value: &Value) -> EvalResult<i64> {
    match value {
        Value::Integer(n) => Ok(*n),
        other => Err(RuntimeError::type_error("number", other).into()),
    }
}

/// Extracts the two integer operands of an infix procedure.
pub fn integer_operands(name: &str, args: &[Value]) -> EvalResult<(i64, i64)> {
    check_arity(name, args, 2)?;
    Ok((expect_integer(&args[0])?, expect_integer(&args[1])?))
}
