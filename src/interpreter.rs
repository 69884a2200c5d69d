/// The evaluator module computes the value of an expression.
///
/// It scans the tokens once, keeping an operand stack and an operator stack,
/// and applies operators by priority as they are resolved.
///
/// # Responsibilities
/// - Applies operator priority and left associativity.
/// - Realises unary minus through a synthetic zero operand.
/// - Reports runtime errors such as division by zero or missing operands.
pub mod evaluator;
/// The lexer module tokenizes source text for further processing.
///
/// The lexer reads the raw input and produces integer literals, operators and
/// parentheses, each tagged with the column it came from.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source columns.
/// - Skips whitespace.
/// - Reports unknown characters and oversized literals.
pub mod lexer;
/// The validator module checks the token stream before evaluation.
///
/// # Responsibilities
/// - Confirms parentheses are balanced.
/// - Rejects operators without a left operand, except unary signs.
/// - Rejects expressions that end on an operator.
pub mod validator;
