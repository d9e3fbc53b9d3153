//! Wire-shaped entity records for the shop's tables.
//!
//! Field names match the hosted tables' column names (snake_case on the
//! wire), so these types serialize both for the data service and for the
//! public REST surface.

pub mod banner;
pub mod order;
pub mod product;
pub mod promotion;
pub mod settings;
pub mod user;

pub use banner::Banner;
pub use order::{Order, OrderCustomer};
pub use product::Product;
pub use promotion::Promotion;
pub use settings::{SettingRow, SettingsMap, map_to_rows, rows_to_map};
pub use user::{StoreUser, UserSummary};
