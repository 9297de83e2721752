//! Typed reads, one `impl Session` block per entity kind.
//!
//! Single entities go through the session's loader, lists go straight to the
//! fetch executor.

mod categories;
mod games;
mod leaderboards;
mod levels;
mod runs;
mod taxonomy;
mod users;
mod variables;
