/// Owned singly-linked list.
///
/// Provides front insertion and removal in constant time, positional insert
/// and remove, search, middle lookup, and borrowing or owning traversal.
pub mod linked_list;
/// Linked LIFO stack.
///
/// A thin wrapper over the linked list whose top is the list front. The
/// evaluator keeps its operand and operator stacks in this type.
pub mod stack;

pub use linked_list::LinkedList;
pub use stack::Stack;
