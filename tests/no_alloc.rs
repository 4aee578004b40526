//! Hashing must not touch the heap: all sponge state is inline.
#![cfg(not(miri))]

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

use keccak256::{Hasher, sum256};

/// System allocator wrapper that counts allocations.
struct Counting;

static ALLOCATIONS: AtomicUsize = AtomicUsize::new(0);

unsafe impl GlobalAlloc for Counting {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        ALLOCATIONS.fetch_add(1, Ordering::Relaxed);
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static ALLOC: Counting = Counting;

fn allocations_during(f: impl FnOnce()) -> usize {
    let before = ALLOCATIONS.load(Ordering::Relaxed);
    f();
    ALLOCATIONS.load(Ordering::Relaxed) - before
}

#[test]
fn hashing_does_not_allocate() {
    let input: Vec<u8> = (0..10 * 1024).map(|i| i as u8).collect();

    let count = allocations_during(|| {
        std::hint::black_box(sum256(std::hint::black_box(&input)));
    });
    assert_eq!(0, count, "sum256 allocated");

    let count = allocations_during(|| {
        let mut hasher = Hasher::new();
        for chunk in input.chunks(37) {
            hasher.update(chunk);
        }
        std::hint::black_box(hasher.finalize());
    });
    assert_eq!(0, count, "streaming hasher allocated");
}
