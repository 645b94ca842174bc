use array_bst::{FreeSlotPolicy, Tree, TreeConfig};

use std::collections::{BTreeSet, HashSet};

use crate::common::{elements, init_logging, tree_of};

quickcheck::quickcheck! {
    fn in_order_traversal_is_strictly_increasing(xs: Vec<i16>) -> bool {
        init_logging();
        let tree = tree_of(&xs);

        elements(&tree).windows(2).all(|pair| pair[0] < pair[1])
    }
}

quickcheck::quickcheck! {
    fn len_matches_a_full_iteration(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = tree_of(&xs);
        for delete in &deletes {
            tree.remove(delete).unwrap();
        }

        tree.len() == tree.iter().count() && tree.len() == tree.iter().len()
    }
}

quickcheck::quickcheck! {
    fn duplicates_change_nothing(xs: Vec<i8>) -> bool {
        let mut tree = tree_of(&xs);
        let before = elements(&tree);

        xs.iter().all(|x| tree.insert(*x) == Ok(false)) && elements(&tree) == before
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree = tree_of(&xs);

        xs.iter().all(|x| tree.contains(x) == Ok(true))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = tree_of(&xs);
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.contains(x) == Ok(false))
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = tree_of(&xs);
        let mut model: BTreeSet<_> = xs.iter().copied().collect();
        for delete in &deletes {
            if tree.remove(delete) != Ok(model.remove(delete)) {
                return false;
            }
        }

        deletes.iter().all(|x| tree.contains(x) == Ok(false))
            && model.iter().all(|x| tree.contains(x) == Ok(true))
            && tree.iter().eq(model.iter())
    }
}

quickcheck::quickcheck! {
    fn both_free_slot_policies_agree(xs: Vec<i8>, deletes: Vec<i8>, again: Vec<i8>) -> bool {
        let build = |policy| {
            let config = TreeConfig::default()
                .with_initial_capacity(1)
                .with_free_slot_policy(policy);
            let mut tree = Tree::with_config(config).unwrap();
            for x in &xs {
                tree.insert(*x).unwrap();
            }
            for x in &deletes {
                tree.remove(x).unwrap();
            }
            for x in &again {
                tree.insert(*x).unwrap();
            }
            tree
        };

        let reuse = build(FreeSlotPolicy::Reuse);
        let append = build(FreeSlotPolicy::Append);
        reuse == append && reuse.capacity() <= append.capacity()
    }
}

quickcheck::quickcheck! {
    fn reinsertion_after_deletion_never_grows(xs: Vec<i8>) -> bool {
        let mut tree = tree_of(&xs);
        let capacity = tree.capacity();
        let present = elements(&tree);

        for x in &present {
            tree.remove(x).unwrap();
        }
        for x in &present {
            tree.insert(*x).unwrap();
        }

        tree.capacity() == capacity && elements(&tree) == present
    }
}
