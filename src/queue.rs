use crate::error::{QueueError, Result};
use crate::message::{Message, MessageMeta};

fn parent(i: usize) -> usize {
    (i - 1) / 2
}

fn left(i: usize) -> usize {
    2 * i + 1
}

fn right(i: usize) -> usize {
    2 * i + 2
}

/// Binary min-heap of owned messages keyed on `priority`.
///
/// The message with the smallest priority value is always at the root. Messages
/// sharing a priority come out in no particular order; callers must not rely on
/// FIFO among equals.
///
/// The queue does no locking. Wrap it in a mutex to share it between threads.
#[derive(Debug)]
pub struct PriorityMessageQueue {
    slots: Vec<Message>,
    capacity: usize,
}

impl PriorityMessageQueue {
    pub fn new(initial_capacity: usize) -> Result<PriorityMessageQueue> {
        if initial_capacity == 0 {
            return Err(QueueError::InvalidCapacity);
        }

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(initial_capacity)
            .map_err(|_| QueueError::OutOfMemory {
                requested: initial_capacity,
            })?;

        Ok(PriorityMessageQueue {
            slots,
            capacity: initial_capacity,
        })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Live messages in heap order, which is not priority order past the root.
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.slots.iter()
    }

    /// Copies `payload` into a new record and inserts it, growing storage if full.
    pub fn enqueue(
        &mut self,
        id: u32,
        command: u8,
        priority: u8,
        error_code: u8,
        payload: &[u8],
    ) -> Result<()> {
        let meta = MessageMeta {
            id,
            command,
            priority,
            error_code,
        };
        self.push(meta, payload)
    }

    pub fn push(&mut self, meta: MessageMeta, payload: &[u8]) -> Result<()> {
        let message = Message::new(meta, payload)?;

        if self.slots.len() == self.capacity {
            self.grow()?;
        }

        self.slots.push(message);
        self.sift_up(self.slots.len() - 1);

        Ok(())
    }

    pub fn peek(&self) -> Result<&Message> {
        self.slots.first().ok_or(QueueError::EmptyQueue)
    }

    /// Removes the root, copying its payload into `out`.
    ///
    /// Returns the removed message's metadata and the number of bytes written.
    /// When `out` is too short nothing is removed.
    pub fn pop(&mut self, out: &mut [u8]) -> Result<(MessageMeta, usize)> {
        let top = self.peek()?;
        let needed = top.payload_size();
        if out.len() < needed {
            log::warn!(
                "Not popping message {}: buffer holds {} of {} bytes",
                top.id(),
                out.len(),
                needed
            );
            return Err(QueueError::BufferTooSmall {
                needed,
                available: out.len(),
            });
        }

        let message = self.remove_root();
        out[..needed].copy_from_slice(message.payload());

        Ok((message.meta(), needed))
    }

    /// Removes and returns the root record.
    pub fn pop_message(&mut self) -> Result<Message> {
        if self.slots.is_empty() {
            return Err(QueueError::EmptyQueue);
        }

        Ok(self.remove_root())
    }

    /// Releases every remaining message and the backing storage.
    pub fn destroy(mut self) {
        for message in self.slots.drain(..).rev() {
            log::debug!(
                "Releasing message {} ({} bytes)",
                message.id(),
                message.payload_size()
            );
        }
    }

    fn remove_root(&mut self) -> Message {
        // Moves the last live element into slot 0.
        let message = self.slots.swap_remove(0);
        if !self.slots.is_empty() {
            self.sift_down(0);
        }
        message
    }

    fn grow(&mut self) -> Result<()> {
        let requested = if self.capacity == 0 {
            1
        } else {
            self.capacity
                .checked_mul(2)
                .ok_or(QueueError::OutOfMemory {
                    requested: usize::MAX,
                })?
        };

        self.slots
            .try_reserve_exact(requested - self.slots.len())
            .map_err(|_| {
                log::error!("Failed to grow queue from {} to {} slots", self.capacity, requested);
                QueueError::OutOfMemory { requested }
            })?;

        log::debug!("Grew queue from {} to {} slots", self.capacity, requested);
        self.capacity = requested;

        Ok(())
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = parent(i);
            if self.slots[i].priority() >= self.slots[p].priority() {
                break;
            }
            log::trace!("sift up {} -> {}", i, p);
            self.slots.swap(i, p);
            i = p;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let count = self.slots.len();
        loop {
            let l = left(i);
            if l >= count {
                break;
            }

            let r = right(i);
            let child = if r < count && self.slots[r].priority() < self.slots[l].priority() {
                r
            } else {
                l
            };

            if self.slots[i].priority() <= self.slots[child].priority() {
                break;
            }
            log::trace!("sift down {} -> {}", i, child);
            self.slots.swap(i, child);
            i = child;
        }
    }
}

impl Drop for PriorityMessageQueue {
    fn drop(&mut self) {
        if !self.slots.is_empty() {
            log::debug!("Dropping queue with {} messages", self.slots.len());
        }
    }
}
