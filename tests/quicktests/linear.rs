use adt::{Error, LinkedList, Queue, Stack};

use std::collections::VecDeque;

use crate::ListOp;

/// Applies a set of operations to a list and a `VecDeque`, checking that every
/// return value agrees along the way.
fn do_list_ops<T>(ops: &[ListOp<T>], list: &mut LinkedList<T>, model: &mut VecDeque<T>)
where
    T: Clone + PartialEq + std::fmt::Debug,
{
    for op in ops {
        match op {
            ListOp::PushFront(value) => {
                list.push_front(value.clone());
                model.push_front(value.clone());
            }
            ListOp::PushBack(value) => {
                list.push_back(value.clone());
                model.push_back(value.clone());
            }
            ListOp::PopFront => assert_eq!(list.pop_front(), model.pop_front()),
            ListOp::PopBack => assert_eq!(list.pop_back(), model.pop_back()),
            ListOp::Insert(index, value) => {
                let len = model.len();
                let index = *index as usize % (len + 2);
                if index <= len {
                    assert_eq!(list.insert(index, value.clone()), Ok(()));
                    model.insert(index, value.clone());
                } else {
                    assert_eq!(
                        list.insert(index, value.clone()),
                        Err(Error::IndexOutOfRange { index, len })
                    );
                }
            }
            ListOp::Remove(index) => {
                let index = *index as usize % (model.len() + 1);
                assert_eq!(list.remove(index), model.remove(index));
            }
        }

        assert_eq!(list.len(), model.len());
        assert_eq!(list.front(), model.front());
        assert_eq!(list.back(), model.back());
    }
}

quickcheck::quickcheck! {
    fn list_matches_vec_deque(ops: Vec<ListOp<i8>>) -> bool {
        let mut list = LinkedList::new();
        let mut model = VecDeque::new();

        do_list_ops(&ops, &mut list, &mut model);
        list.iter().eq(model.iter())
    }
}

quickcheck::quickcheck! {
    fn search_finds_first_match(xs: Vec<i8>, needle: i8) -> bool {
        let list: LinkedList<_> = xs.iter().copied().collect();

        list.search(&needle) == xs.iter().position(|x| *x == needle)
    }
}

quickcheck::quickcheck! {
    fn stack_is_lifo(ops: Vec<ListOp<i8>>) -> bool {
        let mut stack = Stack::new();
        let mut model = Vec::new();

        for op in &ops {
            match op {
                ListOp::PushFront(value) | ListOp::PushBack(value) | ListOp::Insert(_, value) => {
                    stack.push(*value);
                    model.push(*value);
                }
                ListOp::PopFront | ListOp::PopBack | ListOp::Remove(_) => {
                    if stack.pop() != model.pop() {
                        return false;
                    }
                }
            }
            if stack.peek() != model.last() || stack.size() != model.len() {
                return false;
            }
        }

        stack.to_vec().into_iter().eq(model.into_iter().rev())
    }
}

quickcheck::quickcheck! {
    fn queue_is_fifo(ops: Vec<ListOp<i8>>) -> bool {
        let mut queue = Queue::new();
        let mut model = VecDeque::new();

        for op in &ops {
            match op {
                ListOp::PushFront(value) | ListOp::PushBack(value) | ListOp::Insert(_, value) => {
                    queue.enqueue(*value);
                    model.push_back(*value);
                }
                ListOp::PopFront | ListOp::PopBack | ListOp::Remove(_) => {
                    if queue.dequeue() != model.pop_front() {
                        return false;
                    }
                }
            }
            if queue.front() != model.front()
                || queue.rear() != model.back()
                || queue.size() != model.len()
            {
                return false;
            }
        }

        queue.to_vec() == Vec::from(model)
    }
}
