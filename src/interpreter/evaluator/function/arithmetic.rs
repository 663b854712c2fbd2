use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{check_arity, integer_operands},
        },
        streams::Streams,
        value::core::Value,
    },
};

/// Generates an infix procedure over two integers using a checked `i64`
/// operation.
///
/// `None` from the operation (overflow, or division by zero) becomes a
/// [`RuntimeError::MethodError`] naming the operator.
macro_rules! checked_integer_op {
    ($fname:ident, $op:literal, $checked:ident) => {
        #[doc = concat!("The `", $op, "` operator word.")]
        pub fn $fname(_: &mut Streams, args: &[Value]) -> EvalResult<Value> {
            let (left, right) = integer_operands($op, args)?;
            left.$checked(right).map(Value::Integer).ok_or_else(|| {
                RuntimeError::method(format!("{left} {} {right} has no result that fits in a number", $op))
                    .into()
            })
        }
    };
}

checked_integer_op!(plus, "plus", checked_add);
checked_integer_op!(minus, "minus", checked_sub);
checked_integer_op!(multiply, "multiply", checked_mul);
checked_integer_op!(divides, "divides", checked_div);

/// The `smallerthan` operator word: `true` if the left integer is smaller.
///
/// # Example
/// ```
/// use boomslang::interpreter::{
///     evaluator::function::arithmetic::smaller_than, streams::Streams, value::core::Value,
/// };
///
/// let (mut streams, ..) = Streams::captured("");
/// let r = smaller_than(&mut streams, &[Value::Integer(2), Value::Integer(3)]).unwrap();
/// assert_eq!(r, Value::Bool(true));
/// ```
pub fn smaller_than(_: &mut Streams, args: &[Value]) -> EvalResult<Value> {
    let (left, right) = integer_operands("smallerthan", args)?;
    Ok(Value::Bool(left < right))
}

/// The `biggerthan` operator word: `true` if the left integer is bigger.
pub fn bigger_than(_: &mut Streams, args: &[Value]) -> EvalResult<Value> {
    let (left, right) = integer_operands("biggerthan", args)?;
    Ok(Value::Bool(left > right))
}

/// The `equals` operator word.
///
/// Numbers, booleans, text and `nothing` compare by value. Values of
/// different kinds are never equal. Procedures can not be compared.
///
/// # Example
/// ```
/// use boomslang::interpreter::{
///     evaluator::function::arithmetic::equals, streams::Streams, value::core::Value,
/// };
///
/// let (mut streams, ..) = Streams::captured("");
///
/// let r = equals(&mut streams, &[Value::from("a"), Value::from("a")]).unwrap();
/// assert_eq!(r, Value::Bool(true));
///
/// let r = equals(&mut streams, &[Value::Integer(1), Value::Bool(true)]).unwrap();
/// assert_eq!(r, Value::Bool(false));
/// ```
pub fn equals(_: &mut Streams, args: &[Value]) -> EvalResult<Value> {
    check_arity("equals", args, 2)?;
    Ok(Value::Bool(same_value(&args[0], &args[1])?))
}

/// The `notequals` operator word, the negation of [`equals`].
pub fn not_equals(_: &mut Streams, args: &[Value]) -> EvalResult<Value> {
    check_arity("notequals", args, 2)?;
    Ok(Value::Bool(!same_value(&args[0], &args[1])?))
}

fn same_value(left: &Value, right: &Value) -> EvalResult<bool> {
    match (left, right) {
        (Value::Function(_), _) => Err(RuntimeError::type_error("comparable value", left).into()),
        (_, Value::Function(_)) => Err(RuntimeError::type_error("comparable value", right).into()),
        _ => Ok(left == right),
    }
}
