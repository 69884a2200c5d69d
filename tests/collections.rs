use std::{cell::Cell, rc::Rc};

use stackcalc::{
    collections::{LinkedList, Stack},
    error::CollectionError,
};

/// Counts how many instances have been dropped.
struct Tracked(Rc<Cell<usize>>);

impl Drop for Tracked {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

fn list_of(values: &[i64]) -> LinkedList<i64> {
    values.iter().copied().collect()
}

#[test]
fn list_front_operations() {
    let mut list = LinkedList::new();
    assert!(list.is_empty());
    assert_eq!(list.pop_front(), None);

    list.push_front(2);
    list.push_front(1);
    list.push_back(3);

    assert_eq!(list.len(), 3);
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), Some(2));
    assert_eq!(list.pop_front(), Some(3));
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
}

#[test]
fn list_insert_at_positions() {
    let mut list = list_of(&[2, 4]);

    list.insert(0, 1).unwrap();
    list.insert(2, 3).unwrap();
    list.insert(4, 5).unwrap();

    assert_eq!(list, list_of(&[1, 2, 3, 4, 5]));
    assert_eq!(list.insert(7, 9),
               Err(CollectionError::IndexOutOfBounds { len: 5, found: 7 }));
    assert_eq!(list.len(), 5);
}

#[test]
fn list_remove_at_positions() {
    let mut list = list_of(&[10, 20, 30, 40]);

    assert_eq!(list.remove(1), Some(20));
    assert_eq!(list.remove(2), Some(40));
    assert_eq!(list.remove(2), None);
    assert_eq!(list.remove(0), Some(10));

    assert_eq!(list, list_of(&[30]));
    assert_eq!(list.len(), 1);
}

#[test]
fn list_search_and_get() {
    let list = list_of(&[5, 8, 13, 8]);

    assert_eq!(list.position(&8), Some(1));
    assert!(list.contains(&13));
    assert!(!list.contains(&21));
    assert_eq!(list.get(3), Some(&8));
    assert_eq!(list.get(4), None);
}

#[test]
fn list_middle() {
    assert_eq!(list_of(&[]).middle(), None);
    assert_eq!(list_of(&[1]).middle(), Some(&1));
    assert_eq!(list_of(&[1, 2]).middle(), Some(&2));
    assert_eq!(list_of(&[1, 2, 3]).middle(), Some(&2));
    assert_eq!(list_of(&[1, 2, 3, 4]).middle(), Some(&3));
    assert_eq!(list_of(&[1, 2, 3, 4, 5]).middle(), Some(&3));
}

#[test]
fn list_traversal() {
    let list = list_of(&[1, 2, 3]);

    assert_eq!(list.to_string(), "1 -> 2 -> 3");
    assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    assert_eq!(list.iter().sum::<i64>(), 6);
    assert_eq!(list.clone().into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(LinkedList::<i64>::new().to_string(), "");
}

#[test]
fn list_clear_releases_every_node() {
    let drops = Rc::new(Cell::new(0));
    let mut list: LinkedList<Tracked> = (0..4).map(|_| Tracked(Rc::clone(&drops))).collect();

    list.clear();
    assert_eq!(drops.get(), 4);
    assert!(list.is_empty());

    list.push_front(Tracked(Rc::clone(&drops)));
    drop(list);
    assert_eq!(drops.get(), 5);
}

#[test]
fn list_swap_pairs() {
    let swapped = |values: &[i64]| {
        let mut list = list_of(values);
        list.swap_pairs();
        list
    };

    assert_eq!(swapped(&[]), list_of(&[]));
    assert_eq!(swapped(&[1]), list_of(&[1]));
    assert_eq!(swapped(&[1, 2]), list_of(&[2, 1]));
    assert_eq!(swapped(&[1, 2, 3]), list_of(&[2, 1, 3]));
    assert_eq!(swapped(&[1, 2, 3, 4]), list_of(&[2, 1, 4, 3]));
    assert_eq!(swapped(&[1, 2, 3, 4, 5]), list_of(&[2, 1, 4, 3, 5]));
}

#[test]
fn list_swap_pairs_keeps_length_and_links() {
    let mut list = list_of(&[1, 2, 3, 4, 5, 6]);
    list.swap_pairs();
    list.swap_pairs();

    assert_eq!(list, list_of(&[1, 2, 3, 4, 5, 6]));
    assert_eq!(list.len(), 6);

    list.push_back(7);
    assert_eq!(list.to_string(), "1 -> 2 -> 3 -> 4 -> 5 -> 6 -> 7");
}

#[test]
fn long_list_drops_without_overflowing_the_stack() {
    let list: LinkedList<u32> = (0..1_000_000).collect();
    assert_eq!(list.len(), 1_000_000);
    drop(list);
}

#[test]
fn stack_is_last_in_first_out() {
    let mut stack = Stack::new();
    assert!(stack.is_empty());
    assert_eq!(stack.peek(), None);

    stack.push(1);
    stack.push(2);
    stack.push(3);

    assert_eq!(stack.len(), 3);
    assert_eq!(stack.peek(), Some(&3));
    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.pop(), Some(2));
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.pop(), Some(1));
    assert_eq!(stack.pop(), None);
}

#[test]
fn stack_peek_mut_and_iteration() {
    let mut stack: Stack<i64> = [1, 2, 3].into_iter().collect();

    if let Some(top) = stack.peek_mut() {
        *top *= 10;
    }

    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![30, 2, 1]);
    assert_eq!(format!("{stack:?}"), "[30, 2, 1]");
}

#[test]
fn stack_clear_and_drop_release_every_node() {
    let drops = Rc::new(Cell::new(0));

    let mut stack = Stack::new();
    for _ in 0..3 {
        stack.push(Tracked(Rc::clone(&drops)));
    }
    stack.clear();
    assert_eq!(drops.get(), 3);
    assert!(stack.is_empty());

    stack.push(Tracked(Rc::clone(&drops)));
    stack.push(Tracked(Rc::clone(&drops)));
    drop(stack);
    assert_eq!(drops.get(), 5);
}
