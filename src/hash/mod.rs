use crate::error::CliError;

pub const MIN_COST: u32 = 4;
pub const MAX_COST: u32 = 17;
pub const DEFAULT_COST: u32 = 5;

/// bcrypt work factor, limited to the range this tool accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cost(u32);

impl Cost {
    /// Accepts any integer the operator typed so out-of-range values,
    /// negative ones included, are reported with the same message.
    pub fn new(cost: i64) -> Result<Self, CliError> {
        match u32::try_from(cost) {
            Ok(cost) if (MIN_COST..=MAX_COST).contains(&cost) => Ok(Self(cost)),
            _ => Err(CliError::InvalidCost(cost)),
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self(DEFAULT_COST)
    }
}

/// Hash `secret` with a fresh random salt.
///
/// The result is the modular-crypt string, e.g. `$2b$05$...`.
pub fn hash_secret(secret: &str, cost: Cost) -> Result<String, CliError> {
    Ok(bcrypt::hash(secret, cost.get())?)
}
