#![no_main]

use libfuzzer_sys::fuzz_target;
use lrufreq::ds::{Linked, SegmentList, SlotArena, SlotId};

#[derive(Debug)]
struct Node {
    list: usize,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

impl Linked for Node {
    fn prev(&self) -> Option<SlotId> {
        self.prev
    }
    fn next(&self) -> Option<SlotId> {
        self.next
    }
    fn set_prev(&mut self, prev: Option<SlotId>) {
        self.prev = prev;
    }
    fn set_next(&mut self, next: Option<SlotId>) {
        self.next = next;
    }
}

// Fuzz two SegmentLists sharing one arena
//
// Nodes are pushed, popped, moved to front and transferred between lists;
// both lists must validate after every step.
fuzz_target!(|data: &[u8]| {
    let mut arena: SlotArena<Node> = SlotArena::new();
    let mut lists = [SegmentList::new(), SegmentList::new()];
    let mut live: Vec<SlotId> = Vec::new();

    for pair in data.chunks_exact(2) {
        let op = pair[0] % 4;
        let which = usize::from(pair[0] >> 7);
        match op {
            0 => {
                // allocate + push_front
                let id = arena.insert(Node {
                    list: which,
                    prev: None,
                    next: None,
                });
                lists[which].push_front(&mut arena, id);
                assert_eq!(lists[which].front(), Some(id));
                live.push(id);
            }
            1 => {
                // pop_back + free
                if let Some(id) = lists[which].pop_back(&mut arena) {
                    assert!(arena.remove(id).is_some());
                    live.retain(|&l| l != id);
                }
            }
            2 => {
                // move_to_front within its own list
                if !live.is_empty() {
                    let id = live[usize::from(pair[1]) % live.len()];
                    let owner = arena.get(id).map(|n| n.list).unwrap_or(0);
                    lists[owner].move_to_front(&mut arena, id);
                    assert_eq!(lists[owner].front(), Some(id));
                }
            }
            3 => {
                // transfer to the other list
                if !live.is_empty() {
                    let id = live[usize::from(pair[1]) % live.len()];
                    let owner = arena.get(id).map(|n| n.list).unwrap_or(0);
                    let target = 1 - owner;
                    lists[owner].detach(&mut arena, id);
                    if let Some(node) = arena.get_mut(id) {
                        node.list = target;
                    }
                    lists[target].push_front(&mut arena, id);
                }
            }
            _ => unreachable!(),
        }

        lists[0].validate(&arena, "left").unwrap();
        lists[1].validate(&arena, "right").unwrap();
        assert_eq!(lists[0].len() + lists[1].len(), arena.len());
    }
});
