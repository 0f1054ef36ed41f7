//! Domain modules. Each one follows the same layout: `router` wires the
//! endpoints, `controller` holds the handlers, `service` the queries and
//! business rules, `model` the row and payload types.

pub mod admin;
pub mod auth;
pub mod cart;
pub mod categories;
pub mod customers;
pub mod discounts;
pub mod orders;
pub mod payments;
pub mod products;
pub mod reviews;
pub mod shipping;
