mod aggregated_book;
mod md_entry_type;
mod md_update_type;
mod security_id_source;
mod session_route;
mod subscription_request_type;

pub use aggregated_book::AggregatedBook;
pub use md_entry_type::MdEntryType;
pub use md_update_type::MdUpdateType;
pub use security_id_source::SecurityIdSource;
pub use session_route::{SessionId, SessionRoute};
pub use subscription_request_type::SubscriptionRequestType;
