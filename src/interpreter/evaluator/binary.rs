use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::{Calculator, EvalResult},
    operator::BinaryOperator,
};

impl Calculator {
    /// Evaluates a binary arithmetic operation on two integers.
    ///
    /// Division truncates toward zero. All four operations are checked, so an
    /// out-of-range result (including `i64::MIN / -1`) is reported instead of
    /// wrapping or panicking.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `column`: Column of the operator for error reporting.
    ///
    /// # Example
    /// ```
    /// use stackcalc::{
    ///     error::RuntimeError,
    ///     interpreter::evaluator::core::Calculator,
    ///     operator::BinaryOperator,
    /// };
    ///
    /// assert_eq!(Calculator::eval_binary(BinaryOperator::Div, -7, 2, 1), Ok(-3));
    /// assert_eq!(Calculator::eval_binary(BinaryOperator::Div, 1, 0, 3),
    ///            Err(RuntimeError::DivisionByZero { column: 3 }));
    /// assert_eq!(Calculator::eval_binary(BinaryOperator::Mul, i64::MAX, 2, 1),
    ///            Err(RuntimeError::Overflow { column: 1 }));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: i64,
                       right: i64,
                       column: usize)
                       -> EvalResult<i64> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        let result = match op {
            Add => left.checked_add(right),
            Sub => left.checked_sub(right),
            Mul => left.checked_mul(right),
            Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero { column });
                }
                left.checked_div(right)
            },
        };
        result.ok_or(RuntimeError::Overflow { column })
    }
}
