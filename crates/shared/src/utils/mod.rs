mod errors;
mod logger;
mod parsetime;
mod telemetry;
mod token;
mod validation;

pub use self::errors::{AppError, CONNECTIVITY_MESSAGE};
pub use self::logger::init_logger;
pub use self::parsetime::{format_timestamp, parse_datetime};
pub use self::telemetry::{Method, Status, TracingContext};
pub use self::token::decode_identity;
pub use self::validation::{
    FieldErrors, NAME_MAX_CHARS, PASSWORD_MAX_CHARS, REQUIRED_CODE, UPI_REGEX, field_errors,
    name_max, password_max, required, rule_error, upi,
};
