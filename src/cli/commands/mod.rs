pub mod add;
pub mod clear;
pub mod config;
pub mod history;
pub mod init;
pub mod log;
pub mod punch;
pub mod remind;
pub mod session;

use crate::config::Config;
use crate::models::{SessionType, SubVariant};

/// Half requested on the command line, else the configured default.
pub(crate) fn resolve_half(
    kind: SessionType,
    half: Option<SubVariant>,
    cfg: &Config,
) -> Option<SubVariant> {
    kind.has_sub_variant()
        .then(|| half.unwrap_or(cfg.default_sub_variant))
}
