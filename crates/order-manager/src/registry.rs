//! Order Registry
//!
//! Every resting order we believe is still live at the venue, keyed by client
//! order id. An entry is added on submission and removed when the venue
//! reports zero remaining volume or rejects the order. Cancelled orders stay
//! registered until that confirmation arrives, since they can still fill.

use std::collections::HashMap;
use tandem_core::{Lifespan, OrderId, Price, Side, Volume};

/// A submitted order, as far as we know its state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestingOrder {
    pub client_order_id: OrderId,
    pub side: Side,
    pub price: Price,
    pub volume: Volume,
    /// Volume not yet reported filled or removed
    pub remaining: Volume,
    pub lifespan: Lifespan,
}

impl RestingOrder {
    pub fn new(
        client_order_id: OrderId,
        side: Side,
        price: Price,
        volume: Volume,
        lifespan: Lifespan,
    ) -> Self {
        Self {
            client_order_id,
            side,
            price,
            volume,
            remaining: volume,
            lifespan,
        }
    }
}

/// Live orders partitioned by side
#[derive(Debug, Default)]
pub struct OrderRegistry {
    orders: HashMap<OrderId, RestingOrder>,
}

impl OrderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, order: RestingOrder) {
        self.orders.insert(order.client_order_id, order);
    }

    pub fn remove(&mut self, id: OrderId) -> Option<RestingOrder> {
        self.orders.remove(&id)
    }

    pub fn get(&self, id: OrderId) -> Option<&RestingOrder> {
        self.orders.get(&id)
    }

    pub fn contains(&self, id: OrderId) -> bool {
        self.orders.contains_key(&id)
    }

    /// Which side a known order was placed on
    pub fn side_of(&self, id: OrderId) -> Option<Side> {
        self.orders.get(&id).map(|o| o.side)
    }

    /// Reduce remaining volume after a fill
    pub fn apply_fill(&mut self, id: OrderId, volume: Volume) {
        if let Some(order) = self.orders.get_mut(&id) {
            order.remaining = order.remaining.saturating_sub(volume);
        }
    }

    /// Overwrite remaining volume from a status report
    pub fn apply_status(&mut self, id: OrderId, remaining: Volume) {
        if let Some(order) = self.orders.get_mut(&id) {
            order.remaining = remaining;
        }
    }

    /// Volume that could still trade on one side
    pub fn pending_volume(&self, side: Side) -> Volume {
        self.orders
            .values()
            .filter(|o| o.side == side)
            .map(|o| o.remaining)
            .sum()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ioc(id: OrderId, side: Side) -> RestingOrder {
        RestingOrder::new(id, side, 10000, 10, Lifespan::ImmediateOrCancel)
    }

    #[test]
    fn test_classifies_by_side() {
        let mut registry = OrderRegistry::new();
        registry.insert(ioc(1, Side::Buy));
        registry.insert(ioc(2, Side::Sell));
        registry.insert(ioc(3, Side::Buy));

        assert_eq!(registry.side_of(1), Some(Side::Buy));
        assert_eq!(registry.side_of(2), Some(Side::Sell));
        assert_eq!(registry.side_of(99), None);
        assert_eq!(registry.pending_volume(Side::Buy), 20);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_pending_volume_tracks_fills_and_status() {
        let mut registry = OrderRegistry::new();
        registry.insert(ioc(1, Side::Buy));
        registry.insert(ioc(2, Side::Buy));
        assert_eq!(registry.pending_volume(Side::Buy), 20);
        assert_eq!(registry.pending_volume(Side::Sell), 0);

        registry.apply_fill(1, 4);
        assert_eq!(registry.pending_volume(Side::Buy), 16);

        registry.apply_status(2, 3);
        assert_eq!(registry.pending_volume(Side::Buy), 9);

        // Overfill never underflows
        registry.apply_fill(1, 50);
        assert_eq!(registry.get(1).unwrap().remaining, 0);
    }

    #[test]
    fn test_remove() {
        let mut registry = OrderRegistry::new();
        registry.insert(ioc(5, Side::Sell));
        assert!(registry.contains(5));

        let removed = registry.remove(5).unwrap();
        assert_eq!(removed.client_order_id, 5);
        assert!(registry.is_empty());
        assert!(registry.remove(5).is_none());
    }
}
