//! Bounded FIFO queue
//!
//! A fixed-capacity circular buffer used as the traversal frontier during
//! component labeling. Storage is allocated once at construction and never
//! grows; head and tail indices wrap modulo the capacity.
//!
//! The labeler sizes the queue so overflow cannot happen (each cell is
//! enqueued at most once), which makes [`RegionError::QueueFull`] an
//! invariant check rather than an expected runtime path.

use crate::error::{RegionError, RegionResult};

/// Fixed-capacity circular FIFO.
#[derive(Debug)]
pub struct BoundedQueue<T> {
    slots: Vec<Option<T>>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> BoundedQueue<T> {
    /// Create a queue holding at most `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::ZeroCapacity`] if `capacity` is 0.
    pub fn new(capacity: usize) -> RegionResult<Self> {
        if capacity == 0 {
            return Err(RegionError::ZeroCapacity);
        }
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Ok(Self {
            slots,
            head: 0,
            tail: 0,
            len: 0,
        })
    }

    /// Number of elements currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Maximum number of elements.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Check whether the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check whether the queue holds `capacity` elements.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Insert an element at the tail.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::QueueFull`] if the queue is at capacity.
    pub fn enqueue(&mut self, item: T) -> RegionResult<()> {
        if self.is_full() {
            return Err(RegionError::QueueFull {
                capacity: self.slots.len(),
            });
        }
        self.slots[self.tail] = Some(item);
        self.tail = (self.tail + 1) % self.slots.len();
        self.len += 1;
        Ok(())
    }

    /// Remove and return the head element.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::QueueEmpty`] if the queue holds no elements.
    pub fn dequeue(&mut self) -> RegionResult<T> {
        if self.is_empty() {
            return Err(RegionError::QueueEmpty);
        }
        // The slot at head is always occupied when len > 0.
        let item = self.slots[self.head]
            .take()
            .ok_or(RegionError::QueueEmpty)?;
        self.head = (self.head + 1) % self.slots.len();
        self.len -= 1;
        Ok(item)
    }

    /// Drop all elements, keeping the allocation.
    ///
    /// Lets one queue be reused across successive traversals within a
    /// single labeling run.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }
}
