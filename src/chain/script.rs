//! Minimal transaction script encoding
//!
//! Covers exactly what coinbase and pay-to-pubkey outputs need: raw data
//! pushes, script-number pushes, and OP_CHECKSIG. There is no interpreter.

use serde::{Deserialize, Serialize};

/// OP_0, the empty push
pub const OP_0: u8 = 0x00;
/// OP_PUSHDATA1: next byte is the push length
pub const OP_PUSHDATA1: u8 = 0x4c;
/// OP_PUSHDATA2: next two bytes (little-endian) are the push length
pub const OP_PUSHDATA2: u8 = 0x4d;
/// OP_PUSHDATA4: next four bytes (little-endian) are the push length
pub const OP_PUSHDATA4: u8 = 0x4e;
/// OP_1NEGATE, pushes -1
pub const OP_1NEGATE: u8 = 0x4f;
/// OP_1, pushes 1 (OP_2..OP_16 follow consecutively)
pub const OP_1: u8 = 0x51;
/// OP_CHECKSIG
pub const OP_CHECKSIG: u8 = 0xac;

/// Serialized script bytes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script(Vec<u8>);

impl Script {
    /// Create an empty script
    pub fn new() -> Self {
        Script(Vec::new())
    }

    /// Append a bare opcode
    pub fn push_opcode(&mut self, op: u8) {
        self.0.push(op);
    }

    /// Append a data push using the shortest push prefix
    pub fn push_slice(&mut self, data: &[u8]) {
        match data.len() {
            n if n < OP_PUSHDATA1 as usize => self.0.push(n as u8),
            n if n <= 0xff => {
                self.0.push(OP_PUSHDATA1);
                self.0.push(n as u8);
            }
            n if n <= 0xffff => {
                self.0.push(OP_PUSHDATA2);
                self.0.extend_from_slice(&(n as u16).to_le_bytes());
            }
            n => {
                self.0.push(OP_PUSHDATA4);
                self.0.extend_from_slice(&(n as u32).to_le_bytes());
            }
        }
        self.0.extend_from_slice(data);
    }

    /// Append an integer. -1 and 1..=16 use the dedicated opcodes,
    /// zero is OP_0, anything else is pushed as a minimal script number.
    pub fn push_int(&mut self, n: i64) {
        if n == 0 {
            self.0.push(OP_0);
        } else if n == -1 || (1..=16).contains(&n) {
            self.0.push((n + (OP_1 as i64 - 1)) as u8);
        } else {
            self.push_slice(&script_num(n));
        }
    }

    /// Get the raw script bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Script length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the script has no bytes
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as hex
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

/// Minimal signed-magnitude little-endian script-number serialization.
/// Zero serializes to no bytes; a set high bit on the top byte forces an
/// extra sign byte.
pub fn script_num(value: i64) -> Vec<u8> {
    if value == 0 {
        return Vec::new();
    }

    let negative = value < 0;
    let mut abs = value.unsigned_abs();
    let mut result = Vec::new();
    while abs > 0 {
        result.push((abs & 0xff) as u8);
        abs >>= 8;
    }

    if result.last().is_some_and(|b| b & 0x80 != 0) {
        result.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        let last = result.last_mut().unwrap();
        *last |= 0x80;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_push_uses_length_byte() {
        let mut script = Script::new();
        script.push_slice(&[0xaa; 75]);
        assert_eq!(script.as_bytes()[0], 75);
        assert_eq!(script.len(), 76);
    }

    #[test]
    fn test_pushdata1_boundary() {
        let mut script = Script::new();
        script.push_slice(&[0xaa; 76]);
        assert_eq!(script.as_bytes()[0], OP_PUSHDATA1);
        assert_eq!(script.as_bytes()[1], 76);
        assert_eq!(script.len(), 78);
    }

    #[test]
    fn test_pushdata2_boundary() {
        let mut script = Script::new();
        script.push_slice(&[0xaa; 256]);
        assert_eq!(script.as_bytes()[0], OP_PUSHDATA2);
        assert_eq!(&script.as_bytes()[1..3], &[0x00, 0x01]);
    }

    #[test]
    fn test_push_int_small_values() {
        let mut script = Script::new();
        script.push_int(0);
        script.push_int(4);
        script.push_int(16);
        script.push_int(-1);
        assert_eq!(script.as_bytes(), &[OP_0, 0x54, 0x60, OP_1NEGATE]);
    }

    #[test]
    fn test_push_int_large_value() {
        // 486604799 = 0x1d00ffff, the classic coinbase prefix
        let mut script = Script::new();
        script.push_int(486_604_799);
        assert_eq!(script.as_bytes(), &[0x04, 0xff, 0xff, 0x00, 0x1d]);
    }

    #[test]
    fn test_script_num_encoding() {
        assert!(script_num(0).is_empty());
        assert_eq!(script_num(4), vec![0x04]);
        assert_eq!(script_num(127), vec![0x7f]);
        assert_eq!(script_num(128), vec![0x80, 0x00]);
        assert_eq!(script_num(-4), vec![0x84]);
        assert_eq!(script_num(255), vec![0xff, 0x00]);
        assert_eq!(script_num(486_604_799), vec![0xff, 0xff, 0x00, 0x1d]);
    }

    #[test]
    fn test_pay_to_pubkey_shape() {
        let key = [0x04u8; 65];
        let mut script = Script::new();
        script.push_slice(&key);
        script.push_opcode(OP_CHECKSIG);
        assert_eq!(script.len(), 67);
        assert_eq!(script.as_bytes()[0], 65);
        assert_eq!(*script.as_bytes().last().unwrap(), OP_CHECKSIG);
    }
}
