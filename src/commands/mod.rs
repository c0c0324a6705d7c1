//! CLI commands for casebase

pub mod dispatch;
pub mod list;
pub mod recommend;
pub mod score;
