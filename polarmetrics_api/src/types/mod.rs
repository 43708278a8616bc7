mod civic;
pub use self::civic::{CivicResponse, NormalizedInput, Office, Official};

mod chamber;
pub use self::chamber::Chamber;
