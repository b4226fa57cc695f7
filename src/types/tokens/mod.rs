//! Strong types for token-related values
//!
//! # Type Relationships
//!
//! ```text
//! "12.5" (user input)
//!     |
//!     | codec::to_base_units(TokenDecimals)
//!     ↓
//! TokenAmount (U256, base units)
//!     |
//!     | codec::to_decimal_display(TokenDecimals)
//!     ↓
//! "12.5" (display)
//! ```

mod amount;
mod decimals;
mod descriptor;

pub use amount::TokenAmount;
pub use decimals::TokenDecimals;
pub use descriptor::TokenDescriptor;
