use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("'*' at position {position} has nothing to repeat")]
    DanglingStar { position: usize },

    #[error("'*' at position {position} cannot repeat the '^' anchor")]
    StarAfterAnchor { position: usize },

    #[error("'*' at position {position} follows another '*'")]
    RepeatedStar { position: usize },

    #[error("pattern is {len} bytes long, the limit is {max}")]
    TooLong { len: usize, max: usize },
}
