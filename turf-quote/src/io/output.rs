use serde::{Deserialize, Serialize};
use turf_estimator::io::ext_repr::{ExtCartLineItem, ExtProjectEstimate};
use turf_estimator::util::EstimatorConfig;

/// Everything a quote run produces, written as a single JSON document.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct QuoteOutput {
    pub config: EstimatorConfig,
    pub estimate: ExtProjectEstimate,
    /// The shape checkout stores as metadata on the order line
    pub cart_line_item: ExtCartLineItem,
}
