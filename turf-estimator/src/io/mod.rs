mod export;

/// External (serializable) representations of estimator results.
pub mod ext_repr;

pub use export::export;
pub use export::to_cart_line_item;
