use adt::BinarySearchTree;

use std::collections::{BTreeSet, HashSet};

quickcheck::quickcheck! {
    fn in_order_is_sorted_and_deduplicated(xs: Vec<i8>) -> bool {
        let tree: BinarySearchTree<_> = xs.iter().copied().collect();
        let expected: BTreeSet<_> = xs.iter().copied().collect();

        tree.len() == expected.len() && tree.in_order().into_iter().eq(expected.iter())
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree: BinarySearchTree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: BinarySearchTree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: BinarySearchTree<_> = xs.iter().copied().collect();
        for delete in &deletes {
            tree.remove(delete);
        }

        let mut still_present = xs;
        for delete in &deletes {
            // We may have inserted the same value multiple times - delete each one.
            while let Some(pos) = still_present.iter().position(|x| x == delete) {
                still_present.swap_remove(pos);
            }
        }

        deletes.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn removing_everything_empties_the_tree(xs: Vec<i16>) -> bool {
        let mut tree: BinarySearchTree<_> = xs.iter().copied().collect();
        for x in &xs {
            tree.remove(x);
        }

        tree.is_empty() && tree.in_order().is_empty() && tree.height() == -1
    }
}

quickcheck::quickcheck! {
    fn height_is_bounded_by_len(xs: Vec<i16>) -> bool {
        let tree: BinarySearchTree<_> = xs.iter().copied().collect();
        let len = tree.len() as isize;

        // A tree of `len` nodes is at least as tall as a complete tree and at most a chain.
        let min_height = (usize::BITS - tree.len().leading_zeros()) as isize - 1;
        tree.height() <= len - 1 && tree.height() >= min_height
    }
}

#[test]
fn sorted_input_gives_a_chain() {
    let tree: BinarySearchTree<_> = (0..10_000).collect();

    assert_eq!(tree.height(), 9_999);
    assert_eq!(tree.in_order().len(), 10_000);
    assert_eq!(tree.pre_order().len(), 10_000);
    assert_eq!(tree.post_order().len(), 10_000);
    assert!(tree.contains(&9_999));
}
