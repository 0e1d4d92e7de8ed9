mod birthday;
mod clock;
mod error;
mod http_mapping;
mod requests;
mod types;
mod validation;

pub use birthday::{birthday_message, days_until_birthday, observed_birthday};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ErrorKind, UserError};
pub use http_mapping::{error_kind_to_status_code, user_error_to_status_code};
pub use requests::{ErrorResponse, ReadUserResponse, UpsertUserRequest};
pub use types::User;
pub use validation::{parse_date_of_birth, validate_username, MAX_AGE_YEARS};
