use std::fmt;
use tracing::trace;

use crate::render::RenderStyle;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    data: T,
    next: Link<T>,
}

/// Singly linked list.
///
/// Every cell is owned by exactly one link: the list's `head` for the first
/// cell, the predecessor's `next` for the rest. Splicing moves boxes between
/// links, it never copies them, so a cell can't be reachable twice.
///
/// `len` is kept in step with the chain by every mutating method and is never
/// recomputed.
pub struct SeqList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> SeqList<T> {
    pub fn new() -> SeqList<T> {
        SeqList { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.data)
    }

    /// O(1)
    pub fn push_front(&mut self, data: T) {
        let new_node = Box::new(Node {
            data,
            next: self.head.take(),
        });

        self.head = Some(new_node);
        self.len += 1;
        trace!(len = self.len, "push_front");
    }

    /// Walks to the last cell and hangs the new one off it. O(n)
    pub fn push_back(&mut self, data: T) {
        let new_node = Box::new(Node { data, next: None });

        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(new_node);

        self.len += 1;
        trace!(len = self.len, "push_back");
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let node = *node;
            self.head = node.next;
            self.len -= 1;
            trace!(len = self.len, "pop_front");
            node.data
        })
    }

    /// Drops every cell and resets the count. The list stays usable.
    pub fn clear(&mut self) {
        self.release();
        self.len = 0;
        trace!("clear");
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn render(&self) -> Vec<String>
    where
        T: fmt::Display,
    {
        self.render_with(&RenderStyle::default())
    }

    /// Elements in list order with `style.delimiter` tokens between them, or a
    /// lone `style.empty` token when there is nothing to show.
    pub fn render_with(&self, style: &RenderStyle) -> Vec<String>
    where
        T: fmt::Display,
    {
        if self.is_empty() {
            return vec![style.empty.clone()];
        }

        let mut tokens = Vec::with_capacity(self.len * 2 - 1);
        for (i, data) in self.iter().enumerate() {
            if i > 0 {
                tokens.push(style.delimiter.clone());
            }
            tokens.push(data.to_string());
        }
        tokens
    }

    // Unlinks cells one at a time so a long chain doesn't recurse through
    // nested `Box` drops.
    fn release(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: PartialEq> SeqList<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|data| data == value)
    }

    /// Removes the first cell equal to `value`. Later duplicates stay put.
    /// Returns `false` and leaves the list untouched when nothing matches.
    pub fn remove_first(&mut self, value: &T) -> bool {
        let mut link = &mut self.head;
        loop {
            match link {
                None => return false,
                Some(node) if node.data == *value => break,
                Some(node) => link = &mut node.next,
            }
        }

        match link.take() {
            Some(node) => {
                *link = node.next;
                self.len -= 1;
                trace!(len = self.len, "remove_first");
                true
            }
            None => false,
        }
    }
}

impl<T> Default for SeqList<T> {
    fn default() -> SeqList<T> {
        SeqList::new()
    }
}

impl<T> Drop for SeqList<T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T: fmt::Display> fmt::Display for SeqList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in self.render() {
            f.write_str(&token)?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for SeqList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.data
        })
    }
}

impl<'a, T> IntoIterator for &'a SeqList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
