mod common;
pub use self::common::{PagedQuery, Query, QueryCommon, SortDirection, MAX_LIMIT};

mod representative;
pub use self::representative::RepresentativeQuery;

mod member;
pub use self::member::MemberQuery;

mod bill;
pub use self::bill::BillQuery;

mod vote;
pub use self::vote::VoteQuery;
