//! Macro for implementing Display and FromStr for status-like enums
//!
//! Reservation statuses, rejection reasons and scan orders all travel as
//! lowercase snake_case strings between the booking UI, the document store
//! and this crate. The macro generates both directions of that conversion
//! from a single variant table.
//!
//! # Example
//!
//! ```rust
//! use fleetbook_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum PayoutStatus {
//!     Scheduled,
//!     Paid,
//! }
//!
//! impl_domain_status_conversions!(PayoutStatus {
//!     Scheduled => "scheduled",
//!     Paid => "paid",
//! });
//!
//! assert_eq!(PayoutStatus::Paid.to_string(), "paid");
//! assert_eq!("SCHEDULED".parse::<PayoutStatus>(), Ok(PayoutStatus::Scheduled));
//! ```

/// Implements Display and FromStr traits for status enums
///
/// - Display writes the mapped string
/// - FromStr parses case-insensitively and trims surrounding whitespace
///
/// The `FromStr` error is a `String` naming the enum and the rejected input.
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
