use tandem_core::{NO_ORDER, OrderId};

/// Monotonic client order ids, shared by resting and hedge orders
///
/// Starts at 1; zero is reserved for order-independent errors.
#[derive(Debug, Clone)]
pub struct OrderIdGenerator {
    next: OrderId,
}

impl OrderIdGenerator {
    pub fn new() -> Self {
        Self { next: NO_ORDER + 1 }
    }

    /// Take the next id
    pub fn next_id(&mut self) -> OrderId {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for OrderIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
