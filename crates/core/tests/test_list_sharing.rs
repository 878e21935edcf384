//! Structural sharing and reclamation of persistent list nodes
//!
//! These tests verify that lists sharing a suffix never observe each other,
//! and that nodes are freed exactly when the last list using them goes away.

use curio_core::List;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

/// Element that counts its own drops
#[derive(Debug)]
struct Tracked {
    id: i64,
    drops: Arc<AtomicUsize>,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}

fn tracked_list(ids: &[i64], drops: &Arc<AtomicUsize>) -> List<Tracked> {
    ids.iter()
        .map(|&id| Tracked {
            id,
            drops: Arc::clone(drops),
        })
        .collect()
}

fn ids(list: &List<Tracked>) -> Vec<i64> {
    list.iter().map(|t| t.id).collect()
}

#[test]
fn test_cons_does_not_disturb_shared_suffix() {
    let a: List<i64> = [1, 2, 3, 4].into_iter().collect();
    let before: Vec<i64> = a.iter().copied().collect();

    let b = List::cons(9, a.clone());
    let c = List::cons(8, a.clone());

    assert_eq!(b.iter().copied().collect::<Vec<_>>(), vec![9, 1, 2, 3, 4]);
    assert_eq!(c.iter().copied().collect::<Vec<_>>(), vec![8, 1, 2, 3, 4]);
    assert_eq!(a.iter().copied().collect::<Vec<_>>(), before);
    assert!(b.tail().unwrap().ptr_eq(&a));
    assert!(c.tail().unwrap().ptr_eq(&a));
}

#[test]
fn test_append_never_mutates_inputs() {
    let a: List<i64> = [1, 2].into_iter().collect();
    let b: List<i64> = [3, 4].into_iter().collect();
    let c: List<i64> = [5].into_iter().collect();

    let left = a.append(&b).append(&c);
    let right = a.append(&b.append(&c));

    assert_eq!(left, right);
    assert_eq!(a.to_vec(), vec![1, 2]);
    assert_eq!(b.to_vec(), vec![3, 4]);
    assert_eq!(c.to_vec(), vec![5]);
}

#[test]
fn test_suffix_lives_while_referenced() {
    let drops = Arc::new(AtomicUsize::new(0));
    let a = tracked_list(&[1, 2, 3], &drops);
    let b = List::cons(
        Tracked {
            id: 0,
            drops: Arc::clone(&drops),
        },
        a.clone(),
    );

    drop(a);
    assert_eq!(drops.load(Ordering::SeqCst), 0);
    assert_eq!(ids(&b), vec![0, 1, 2, 3]);

    drop(b);
    assert_eq!(drops.load(Ordering::SeqCst), 4);
}

fn shared_tracked(ids: &[i64], drops: &Arc<AtomicUsize>) -> List<Arc<Tracked>> {
    ids.iter()
        .map(|&id| {
            Arc::new(Tracked {
                id,
                drops: Arc::clone(drops),
            })
        })
        .collect()
}

fn shared_ids(list: &List<Arc<Tracked>>) -> Vec<i64> {
    list.iter().map(|t| t.id).collect()
}

#[test]
fn test_append_keeps_both_inputs_alive() {
    let drops = Arc::new(AtomicUsize::new(0));
    let front = shared_tracked(&[1, 2, 3], &drops);
    let back = shared_tracked(&[10, 11], &drops);

    let joined = front.append(&back);
    assert!(joined.get(3).is_some_and(|t| Arc::ptr_eq(t, back.head().unwrap())));

    drop(front);
    drop(back);
    assert_eq!(drops.load(Ordering::SeqCst), 0);
    assert_eq!(shared_ids(&joined), vec![1, 2, 3, 10, 11]);

    drop(joined);
    assert_eq!(drops.load(Ordering::SeqCst), 5);
}

#[test]
fn test_dropping_append_result_keeps_inputs() {
    let drops = Arc::new(AtomicUsize::new(0));
    let front = shared_tracked(&[1, 2], &drops);
    let back = shared_tracked(&[3], &drops);

    let joined = front.append(&back);
    drop(joined);
    assert_eq!(drops.load(Ordering::SeqCst), 0);
    assert_eq!(shared_ids(&front), vec![1, 2]);
    assert_eq!(shared_ids(&back), vec![3]);

    drop(front);
    assert_eq!(drops.load(Ordering::SeqCst), 2);
    drop(back);
    assert_eq!(drops.load(Ordering::SeqCst), 3);
}

#[test]
fn test_snoc_and_reverse_share_elements() {
    let drops = Arc::new(AtomicUsize::new(0));
    let base = shared_tracked(&[1, 2], &drops);
    let reversed = base.reverse();
    let extended = base.snoc(Arc::new(Tracked {
        id: 3,
        drops: Arc::clone(&drops),
    }));

    drop(base);
    assert_eq!(shared_ids(&reversed), vec![2, 1]);
    drop(reversed);
    assert_eq!(drops.load(Ordering::SeqCst), 0);
    assert_eq!(shared_ids(&extended), vec![1, 2, 3]);

    drop(extended);
    assert_eq!(drops.load(Ordering::SeqCst), 3);
}

#[test]
fn test_concurrent_readers_of_shared_list() {
    let base: List<i64> = (0..1000).collect();
    let expected: i64 = (0..1000).sum();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let local = List::cons(i, base.clone());
            thread::spawn(move || local.iter().sum::<i64>() - local.head().copied().unwrap_or(0))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
    assert_eq!(base.len(), 1000);
}
