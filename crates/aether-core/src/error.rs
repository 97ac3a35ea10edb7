use crate::constants::{MAX_PARTICLE_COUNT, MIN_PARTICLE_COUNT};

/// Rejected configuration values. Frontends log these and keep the default.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("particle count {0} outside {min}..={max}", min = MIN_PARTICLE_COUNT, max = MAX_PARTICLE_COUNT)]
    ParticleCount(usize),
    #[error("unknown shape `{0}`")]
    UnknownShape(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
    #[error("unknown option `{0}`")]
    UnknownKey(String),
    #[error("timeline needs at least two keyframes, got {0}")]
    TimelineTooShort(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    #[error("no drawable surface")]
    NoSurface,
    #[error("surface `{0}` is already mounted")]
    AlreadyMounted(String),
}
