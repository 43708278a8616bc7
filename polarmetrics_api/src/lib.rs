//! HTTP clients for the upstream sources PolarMetrics reconciles: the civic
//! lookup service and the Congress.gov v3 API.

mod civic;
mod client;
mod congress;
mod errors;
mod query;
pub mod types;
pub use self::civic::CivicClient;
pub use self::client::DEFAULT_TIMEOUT;
pub use self::congress::CongressClient;
pub use self::errors::Error;
pub use self::query::{
    BillQuery, MemberQuery, PagedQuery, Query, QueryCommon, RepresentativeQuery, SortDirection,
    VoteQuery, MAX_LIMIT,
};
