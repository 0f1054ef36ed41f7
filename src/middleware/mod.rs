//! Middleware and extractors for cross-cutting request concerns.
//!
//! - [`auth`]: per-request context resolution ([`auth::CurrentUser`],
//!   [`auth::MaybeUser`])
//! - [`role`]: admin gating on top of the resolved principal
//!
//! # Authentication flow
//!
//! 1. Client sends `Authorization: Bearer <token>` (issued by Supabase)
//! 2. The resolver introspects the token and derives the role
//! 3. `CurrentUser` / `require_admin` reject requests the resolver left
//!    unauthenticated

pub mod auth;
pub mod role;
