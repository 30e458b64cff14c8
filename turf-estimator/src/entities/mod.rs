mod cut;
mod dimensions;
mod estimate;

#[doc(inline)]
pub use cut::Cut;
#[doc(inline)]
pub use dimensions::ProjectDimensions;
#[doc(inline)]
pub use estimate::EstimateOptions;
#[doc(inline)]
pub use estimate::InfillPlan;
#[doc(inline)]
pub use estimate::ProjectEstimate;
#[doc(inline)]
pub use estimate::SeamingPlan;
#[doc(inline)]
pub use estimate::TurfOrder;
