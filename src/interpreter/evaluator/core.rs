use crate::{
    collections::Stack,
    error::{Error, RuntimeError},
    interpreter::lexer::{Token, tokenize},
    operator::{BinaryOperator, Symbol, token_to_binary_operator},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Holds the state of one two-stack evaluation.
///
/// A `Calculator` is created for a single expression and consumed by
/// [`Calculator::run`]. Both stacks live inside it, so they are released on
/// every return path, including early error returns.
///
/// ## Invariants
/// - `operators` never keeps a `(` once its `)` has been processed.
/// - After a successful run `operands` held exactly one value.
pub struct Calculator {
    /// Values waiting to be combined; the top is the most recent operand.
    operands:          Stack<i64>,
    /// Pending operators and open parentheses, with their source columns.
    operators:         Stack<(Symbol, usize)>,
    /// `true` at the start, after `(` and after any operator.
    expecting_operand: bool,
}

#[allow(clippy::new_without_default)]
impl Calculator {
    #[must_use]
    pub const fn new() -> Self {
        Self { operands:          Stack::new(),
               operators:         Stack::new(),
               expecting_operand: true, }
    }

    /// Evaluates a token stream to completion.
    ///
    /// The tokens are expected to have passed the validator, but malformed
    /// streams are still rejected with a `RuntimeError` instead of panicking.
    ///
    /// # Parameters
    /// - `tokens`: `(Token, column)` pairs from the lexer.
    ///
    /// # Returns
    /// The single value left on the operand stack.
    ///
    /// # Example
    /// ```
    /// use stackcalc::interpreter::{evaluator::core::Calculator, lexer::tokenize};
    ///
    /// let tokens = tokenize("(2 + 3) * 4").unwrap();
    /// assert_eq!(Calculator::new().run(&tokens), Ok(20));
    /// ```
    pub fn run(mut self, tokens: &[(Token, usize)]) -> EvalResult<i64> {
        for &(token, column) in tokens {
            self.step(token, column)?;
        }
        self.finish()
    }

    fn step(&mut self, token: Token, column: usize) -> EvalResult<()> {
        match token {
            Token::Integer(n) => {
                self.operands.push(n);
                self.expecting_operand = false;
            },
            Token::LParen => {
                self.operators.push((Symbol::LeftParen, column));
                self.expecting_operand = true;
            },
            Token::RParen => {
                self.close_paren(column)?;
                self.expecting_operand = false;
            },
            Token::Plus | Token::Minus | Token::Star | Token::Slash => {
                if let Some(op) = token_to_binary_operator(&token) {
                    self.push_operator(op, column)?;
                }
                self.expecting_operand = true;
            },
        }
        Ok(())
    }

    /// Handles an operator token.
    ///
    /// Where an operand is expected, `-` is realised as `0 - operand`: a
    /// synthetic zero goes onto the operand stack and the `-` is pushed
    /// without reducing anything. A `+` in that position is dropped.
    fn push_operator(&mut self, op: BinaryOperator, column: usize) -> EvalResult<()> {
        match (self.expecting_operand, op) {
            (true, BinaryOperator::Sub) => {
                self.operands.push(0);
                self.operators.push((Symbol::Operator(op), column));
            },
            (true, BinaryOperator::Add) => {},
            _ => {
                while let Some(&(Symbol::Operator(top), top_column)) = self.operators.peek()
                      && top.priority() >= op.priority()
                {
                    self.operators.pop();
                    self.apply(top, top_column)?;
                }
                self.operators.push((Symbol::Operator(op), column));
            },
        }
        Ok(())
    }

    /// Applies pending operators until the matching `(` is popped.
    fn close_paren(&mut self, column: usize) -> EvalResult<()> {
        loop {
            match self.operators.pop() {
                Some((Symbol::LeftParen, _)) => return Ok(()),
                Some((Symbol::Operator(op), op_column)) => self.apply(op, op_column)?,
                None => return Err(RuntimeError::MismatchedParentheses { column }),
            }
        }
    }

    /// Pops two operands, combines them with `op` and pushes the result.
    ///
    /// The right operand is on top since it was pushed last.
    fn apply(&mut self, op: BinaryOperator, column: usize) -> EvalResult<()> {
        let (Some(rhs), Some(lhs)) = (self.operands.pop(), self.operands.pop()) else {
            return Err(RuntimeError::MissingOperand { op: op.symbol(),
                                                      column });
        };

        let result = Self::eval_binary(op, lhs, rhs, column)?;
        log::trace!("{lhs} {op} {rhs} = {result}");

        self.operands.push(result);
        Ok(())
    }

    /// Drains the operator stack and takes the final value.
    fn finish(mut self) -> EvalResult<i64> {
        while let Some((symbol, column)) = self.operators.pop() {
            match symbol {
                Symbol::Operator(op) => self.apply(op, column)?,
                Symbol::LeftParen => return Err(RuntimeError::MismatchedParentheses { column }),
            }
        }

        let operands = self.operands.len();
        if operands != 1 {
            return Err(RuntimeError::InvalidExpression { operands });
        }
        self.operands
            .pop()
            .ok_or(RuntimeError::InvalidExpression { operands: 0 })
    }
}

/// Evaluates a token stream with a fresh [`Calculator`].
///
/// # Errors
/// Any `RuntimeError` raised while applying operators or closing
/// parentheses, or `InvalidExpression` if the operands do not reduce to a
/// single value.
pub fn evaluate_tokens(tokens: &[(Token, usize)]) -> EvalResult<i64> {
    let result = Calculator::new().run(tokens);
    if let Err(e) = &result {
        log::debug!("evaluation failed: {e}");
    }
    result
}

/// Tokenizes and evaluates `source` without running the validator.
///
/// Each call builds its own stacks, so evaluating the same text twice always
/// gives the same answer.
///
/// # Errors
/// `Error::Parse` if the text cannot be tokenized, `Error::Runtime` if the
/// calculation fails.
///
/// # Example
/// ```
/// use stackcalc::{
///     error::{Error, RuntimeError},
///     interpreter::evaluator::core::evaluate,
/// };
///
/// assert_eq!(evaluate("2+3*4"), Ok(14));
/// assert_eq!(evaluate("10-2-3"), Ok(5));
/// assert_eq!(evaluate("-5+3"), Ok(-2));
/// assert_eq!(evaluate("8/0"),
///            Err(Error::Runtime(RuntimeError::DivisionByZero { column: 2 })));
/// ```
pub fn evaluate(source: &str) -> Result<i64, Error> {
    let tokens = tokenize(source)?;
    Ok(evaluate_tokens(&tokens)?)
}
