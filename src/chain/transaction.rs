//! Transaction structures and consensus serialization

use super::Script;
use crate::crypto::{sha256d, Hash256};
use serde::{Deserialize, Serialize};

/// Sequence value marking an input final
pub const SEQUENCE_FINAL: u32 = 0xffff_ffff;

/// Reference to a previous transaction output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutPoint {
    /// Id of the transaction holding the output
    pub txid: Hash256,
    /// Output index within that transaction
    pub vout: u32,
}

impl OutPoint {
    /// The null outpoint spent by coinbase inputs
    pub fn null() -> Self {
        OutPoint {
            txid: Hash256::zero(),
            vout: u32::MAX,
        }
    }

    /// True for the coinbase null outpoint
    pub fn is_null(&self) -> bool {
        self.txid.is_zero() && self.vout == u32::MAX
    }
}

/// Transaction input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxIn {
    pub prev_out: OutPoint,
    pub script_sig: Script,
    pub sequence: u32,
}

/// Transaction output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOut {
    /// Amount in base units
    pub value: i64,
    pub script_pubkey: Script,
}

/// A transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
    pub lock_time: u32,
}

impl Transaction {
    /// Serialize in consensus wire format
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&self.version.to_le_bytes());
        write_var_int(&mut bytes, self.inputs.len() as u64);
        for input in &self.inputs {
            bytes.extend_from_slice(&input.prev_out.txid.0);
            bytes.extend_from_slice(&input.prev_out.vout.to_le_bytes());
            write_var_bytes(&mut bytes, input.script_sig.as_bytes());
            bytes.extend_from_slice(&input.sequence.to_le_bytes());
        }
        write_var_int(&mut bytes, self.outputs.len() as u64);
        for output in &self.outputs {
            bytes.extend_from_slice(&output.value.to_le_bytes());
            write_var_bytes(&mut bytes, output.script_pubkey.as_bytes());
        }
        bytes.extend_from_slice(&self.lock_time.to_le_bytes());
        bytes
    }

    /// Transaction id: double SHA-256 of the wire serialization
    pub fn txid(&self) -> Hash256 {
        sha256d(&self.to_bytes())
    }

    /// True when the sole input spends the null outpoint
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].prev_out.is_null()
    }
}

/// Append a Bitcoin-style variable-length integer
pub(crate) fn write_var_int(bytes: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => bytes.push(n as u8),
        0xfd..=0xffff => {
            bytes.push(0xfd);
            bytes.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            bytes.push(0xfe);
            bytes.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            bytes.push(0xff);
            bytes.extend_from_slice(&n.to_le_bytes());
        }
    }
}

fn write_var_bytes(bytes: &mut Vec<u8>, data: &[u8]) {
    write_var_int(bytes, data.len() as u64);
    bytes.extend_from_slice(data);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var_int(n: u64) -> Vec<u8> {
        let mut bytes = Vec::new();
        write_var_int(&mut bytes, n);
        bytes
    }

    #[test]
    fn test_var_int_boundaries() {
        assert_eq!(var_int(0), vec![0x00]);
        assert_eq!(var_int(0xfc), vec![0xfc]);
        assert_eq!(var_int(0xfd), vec![0xfd, 0xfd, 0x00]);
        assert_eq!(var_int(0xffff), vec![0xfd, 0xff, 0xff]);
        assert_eq!(var_int(0x1_0000), vec![0xfe, 0x00, 0x00, 0x01, 0x00]);
        assert_eq!(
            var_int(0x1_0000_0000),
            vec![0xff, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn test_null_outpoint() {
        let null = OutPoint::null();
        assert!(null.is_null());
        assert!(!OutPoint { txid: Hash256::zero(), vout: 0 }.is_null());
    }

    #[test]
    fn test_coinbase_detection() {
        let coinbase = Transaction {
            version: 1,
            inputs: vec![TxIn {
                prev_out: OutPoint::null(),
                script_sig: Script::new(),
                sequence: SEQUENCE_FINAL,
            }],
            outputs: vec![],
            lock_time: 0,
        };
        assert!(coinbase.is_coinbase());

        let spend = Transaction {
            version: 1,
            inputs: vec![TxIn {
                prev_out: OutPoint { txid: sha256d(b"prev"), vout: 0 },
                script_sig: Script::new(),
                sequence: SEQUENCE_FINAL,
            }],
            outputs: vec![],
            lock_time: 0,
        };
        assert!(!spend.is_coinbase());
    }

    #[test]
    fn test_empty_tx_layout() {
        // version + two zero counts + lock time
        let tx = Transaction {
            version: 1,
            inputs: vec![],
            outputs: vec![],
            lock_time: 0,
        };
        let bytes = tx.to_bytes();
        assert_eq!(bytes.len(), 4 + 1 + 1 + 4);
        assert_eq!(&bytes[..4], &[1, 0, 0, 0]);
    }

    #[test]
    fn test_txid_deterministic() {
        let tx = Transaction {
            version: 1,
            inputs: vec![TxIn {
                prev_out: OutPoint::null(),
                script_sig: Script::new(),
                sequence: SEQUENCE_FINAL,
            }],
            outputs: vec![TxOut { value: 50, script_pubkey: Script::new() }],
            lock_time: 0,
        };
        assert_eq!(tx.txid(), tx.txid());
        assert_eq!(tx.to_bytes(), tx.clone().to_bytes());
    }
}
