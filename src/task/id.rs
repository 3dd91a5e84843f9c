//! Task id assignment.
//!
//! Ids are either assigned by the server or derived on the client from
//! the task name with 32-bit FNV-1a, written as decimal text. Callers go
//! through [`IdStrategy`] so either scheme can be used.

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a over the UTF-8 bytes of `input`.
pub fn fnv1a_32(input: &str) -> u32 {
    input.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Decides the id sent with a new task.
pub trait IdStrategy {
    /// Id for a task named `name`.
    fn assign(&self, name: &str) -> String;
}

/// Client-side ids: FNV-1a of the name, decimal.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashedIds;

impl IdStrategy for HashedIds {
    fn assign(&self, name: &str) -> String {
        fnv1a_32(name).to_string()
    }
}

/// Leaves the id empty for the server to fill in.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerAssigned;

impl IdStrategy for ServerAssigned {
    fn assign(&self, _name: &str) -> String {
        String::new()
    }
}
