use super::DigitStore;

/// one digit of the chain, linked in both directions via arena indices
#[derive(Debug)]
struct Node {
    digit: u8,
    next: Option<usize>,
    prev: Option<usize>,
}

/// doubly linked digit storage
///
/// nodes live in an index arena instead of a web of `Rc<RefCell<_>>`s, so
/// the chain stays singly owned while still being walkable in both
/// directions. `head` points at the most-significant digit, `tail` at the
/// least-significant one; neither end links back around.
#[derive(Default)]
pub struct LinkedStore {
    nodes: Vec<Node>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl std::fmt::Debug for LinkedStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter_from_head()).finish()
    }
}

impl LinkedStore {
    fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    /// walks the links of `self` and rebuilds the chain node by node,
    /// sharing nothing with the source and recomputing head and tail
    fn reconstruct(&self) -> Self {
        let mut copy = Self::default();
        let mut cursor = self.head;
        while let Some(index) = cursor {
            let node = self.node(index);
            let new_index = copy.nodes.len();
            copy.nodes.push(Node {
                digit: node.digit,
                next: None,
                prev: new_index.checked_sub(1),
            });
            if let Some(prev) = new_index.checked_sub(1) {
                copy.nodes[prev].next = Some(new_index);
            } else {
                copy.head = Some(new_index);
            }
            copy.tail = Some(new_index);
            cursor = node.next;
        }
        copy
    }
}

impl Clone for LinkedStore {
    fn clone(&self) -> Self {
        self.reconstruct()
    }
}

impl FromIterator<u8> for LinkedStore {
    /// the iter should contain the digits most-significant-first
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        let mut store = Self::default();
        let digits = iter.into_iter().collect::<Vec<_>>();
        for digit in digits.into_iter().rev() {
            store.push_head(digit);
        }
        store
    }
}

impl DigitStore for LinkedStore {
    fn push_head(&mut self, digit: u8) {
        super::assert_digit(digit);
        let index = self.nodes.len();
        self.nodes.push(Node {
            digit,
            next: self.head,
            prev: None,
        });
        if let Some(old_head) = self.head {
            self.nodes[old_head].prev = Some(index);
        }
        self.head = Some(index);
        if self.tail.is_none() {
            self.tail = Some(index);
        }
    }

    fn iter_from_tail(&self) -> impl Iterator<Item = u8> + '_ {
        let mut cursor = self.tail;
        std::iter::from_fn(move || {
            let node = self.node(cursor?);
            cursor = node.prev;
            Some(node.digit)
        })
    }
    fn iter_from_head(&self) -> impl Iterator<Item = u8> + '_ {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            let node = self.node(cursor?);
            cursor = node.next;
            Some(node.digit)
        })
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}
