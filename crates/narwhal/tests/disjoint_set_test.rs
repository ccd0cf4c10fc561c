use narwhal::data::DisjointSet;

#[test]
fn singletons_lead_themselves() {
    let mut sets = DisjointSet::new(3);
    assert_eq!(sets.len(), 3);
    assert_eq!(sets.set_count(), 3);
    for v in 0..3 {
        assert_eq!(sets.find(v), v);
        assert_eq!(sets.rank(v), 0);
    }
}

#[test]
fn union_on_rank_tie_keeps_first_leader() {
    let mut sets = DisjointSet::new(4);
    assert!(sets.union(0, 1));
    assert_eq!(sets.find(1), 0);
    assert_eq!(sets.rank(0), 1);

    // Lower rank joins higher rank regardless of argument order.
    assert!(sets.union(2, 0));
    assert_eq!(sets.find(2), 0);
    assert_eq!(sets.rank(0), 1);
    assert_eq!(sets.set_count(), 2);
}

#[test]
fn union_of_same_set_is_a_no_op() {
    let mut sets = DisjointSet::new(3);
    sets.union(0, 1);
    sets.union(1, 2);
    assert!(!sets.union(2, 0));
    assert_eq!(sets.set_count(), 1);
    assert!(sets.same_set(0, 2));
}

#[test]
fn leaders_are_consistent_after_many_unions() {
    let mut sets = DisjointSet::new(10);
    for (u, v) in [(0, 1), (2, 3), (1, 3), (4, 5), (6, 7), (5, 7), (3, 7)] {
        sets.union(u, v);
    }
    let leader = sets.find(0);
    for v in 0..8 {
        assert_eq!(sets.find(v), leader);
    }
    assert_ne!(sets.find(8), leader);
    assert_eq!(sets.set_count(), 3);
}

#[test]
fn ranks_never_decrease_across_unions() {
    let mut sets = DisjointSet::new(12);
    let mut previous: Vec<u32> = (0..sets.len()).map(|v| sets.rank(v)).collect();
    let unions = [
        (0, 1),
        (2, 3),
        (0, 2),
        (4, 5),
        (6, 7),
        (4, 6),
        (3, 7),
        (8, 9),
        (10, 11),
        (9, 11),
        (1, 10),
        (5, 8),
    ];
    for (u, v) in unions {
        sets.union(u, v);
        sets.find(u);
        sets.find(v);
        let current: Vec<u32> = (0..sets.len()).map(|x| sets.rank(x)).collect();
        for (x, (before, after)) in previous.iter().zip(&current).enumerate() {
            assert!(after >= before, "rank of {x} fell from {before} to {after}");
        }
        previous = current;
    }
    assert_eq!(sets.set_count(), 1);
    assert!(previous.iter().all(|&r| r <= 3));
}
