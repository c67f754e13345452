//! Encryption that records the state after every round transformation.
//!
//! A [`Trace`] holds eleven [`Round`]s: round 0 is key whitening (AddRoundKey
//! only), rounds 1 to 9 run SubBytes, ShiftRows, MixColumns and AddRoundKey,
//! and round 10 drops MixColumns. Every [`Operation`] owns a copy of the state
//! taken right after its step, so a trace never changes once built.

use serde::Serialize;
use tracing::{debug, trace};

use crate::block::Block;
use crate::cipher::expand_key;
use crate::error::{Error, Input, Result};
use crate::key::{Aes128Key, RoundKeys, ROUND_KEY_COUNT};
use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};

const FINAL_ROUND: usize = ROUND_KEY_COUNT - 1;

/// One of the four AES round transformations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Step {
    /// Byte-wise S-box substitution.
    SubBytes,
    /// Cyclic left shift of row `r` by `r` positions.
    ShiftRows,
    /// Column-wise multiplication by the fixed MixColumns matrix.
    MixColumns,
    /// XOR with the round key.
    AddRoundKey,
}

impl Step {
    /// Name of the step as it appears in FIPS-197.
    pub fn name(self) -> &'static str {
        match self {
            Step::SubBytes => "SubBytes",
            Step::ShiftRows => "ShiftRows",
            Step::MixColumns => "MixColumns",
            Step::AddRoundKey => "AddRoundKey",
        }
    }

    /// Short explanation of what the step does to the state.
    pub fn description(self) -> &'static str {
        match self {
            Step::SubBytes => "Each byte is replaced with its S-box substitution",
            Step::ShiftRows => "Row r of the state is rotated left by r positions",
            Step::MixColumns => {
                "Each column is multiplied by the fixed polynomial matrix over GF(2^8)"
            }
            Step::AddRoundKey => "The state is XORed with the round key",
        }
    }
}

const WHITENING_DESCRIPTION: &str =
    "Key whitening: the plaintext is XORed with the cipher key (round key 0)";

/// A single recorded transformation and the state it produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(rename = "name")]
    step: Step,
    description: &'static str,
    state: Block,
    #[serde(skip_serializing_if = "Option::is_none")]
    round_key: Option<Block>,
}

impl Operation {
    /// Transformation that was applied.
    pub fn step(&self) -> Step {
        self.step
    }

    /// Step name, e.g. `"MixColumns"`.
    pub fn name(&self) -> &'static str {
        self.step.name()
    }

    /// Explanation suitable for display.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// State immediately after the step.
    pub fn state(&self) -> &Block {
        &self.state
    }

    /// Round key consumed; only set for AddRoundKey.
    pub fn round_key(&self) -> Option<&Block> {
        self.round_key.as_ref()
    }
}

/// All operations performed in one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Round {
    round: usize,
    operations: Vec<Operation>,
}

impl Round {
    /// Round index, 0..=10.
    pub fn index(&self) -> usize {
        self.round
    }

    /// Operations in the order they were applied.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// State at the end of the round.
    pub fn output(&self) -> Option<&Block> {
        self.operations.last().map(Operation::state)
    }

    /// Display heading for the round.
    pub fn title(&self) -> String {
        match self.round {
            0 => "Initial Round".to_string(),
            n => format!("Round {n}"),
        }
    }

    /// One-line summary of what sets the round apart.
    pub fn summary(&self) -> &'static str {
        match self.round {
            0 => "Key whitening before main rounds",
            FINAL_ROUND => "Final round omits MixColumns",
            _ => "Core AES transformations",
        }
    }
}

/// Complete record of one block encryption.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trace {
    cipher_state: Block,
    rounds: Vec<Round>,
    round_keys: RoundKeys,
}

impl Trace {
    /// The ciphertext block.
    pub fn cipher_state(&self) -> &Block {
        &self.cipher_state
    }

    /// All eleven rounds, indexed by round number.
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Round `index`, or `None` past round 10.
    pub fn round(&self, index: usize) -> Option<&Round> {
        self.rounds.get(index)
    }

    /// The key schedule used for the encryption.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Every operation across all rounds, in execution order.
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.rounds.iter().flat_map(|round| round.operations.iter())
    }

    /// Total number of recorded operations (40 for AES-128).
    pub fn operation_count(&self) -> usize {
        self.rounds.iter().map(|round| round.operations.len()).sum()
    }
}

/// Working state plus the rounds recorded so far.
struct Recorder<'a> {
    state: Block,
    round_keys: &'a RoundKeys,
    rounds: Vec<Round>,
}

impl<'a> Recorder<'a> {
    fn new(plaintext: &Block, round_keys: &'a RoundKeys) -> Self {
        Self {
            state: *plaintext,
            round_keys,
            rounds: Vec::with_capacity(ROUND_KEY_COUNT),
        }
    }

    fn run_round(&mut self, round: usize, steps: &[Step]) {
        let mut operations = Vec::with_capacity(steps.len());
        for &step in steps {
            let round_key = match step {
                Step::SubBytes => {
                    sub_bytes(&mut self.state);
                    None
                }
                Step::ShiftRows => {
                    shift_rows(&mut self.state);
                    None
                }
                Step::MixColumns => {
                    mix_columns(&mut self.state);
                    None
                }
                Step::AddRoundKey => {
                    let key = *self.round_keys.get(round);
                    add_round_key(&mut self.state, &key);
                    Some(key)
                }
            };
            let description = if round == 0 {
                WHITENING_DESCRIPTION
            } else {
                step.description()
            };
            operations.push(Operation {
                step,
                description,
                state: self.state,
                round_key,
            });
        }
        trace!(round, operations = operations.len(), "recorded round");
        self.rounds.push(Round { round, operations });
    }

    fn finish(self) -> Trace {
        Trace {
            cipher_state: self.state,
            rounds: self.rounds,
            round_keys: *self.round_keys,
        }
    }
}

/// Encrypts `plaintext` under `key`, recording every intermediate state.
pub fn trace_block(plaintext: &Block, key: &Aes128Key) -> Trace {
    use Step::*;

    let round_keys = expand_key(key);
    let mut recorder = Recorder::new(plaintext, &round_keys);

    recorder.run_round(0, &[AddRoundKey]);
    for round in 1..FINAL_ROUND {
        recorder.run_round(round, &[SubBytes, ShiftRows, MixColumns, AddRoundKey]);
    }
    recorder.run_round(FINAL_ROUND, &[SubBytes, ShiftRows, AddRoundKey]);

    let trace = recorder.finish();
    debug!(operations = trace.operation_count(), "block trace complete");
    trace
}

/// Validates both inputs as 16-byte blocks, then runs [`trace_block`].
///
/// Fails with [`Error::InvalidInputLength`] before any round executes if either
/// slice has the wrong length.
pub fn encrypt_with_trace(plaintext: &[u8], key: &[u8]) -> Result<Trace> {
    let block: Block = plaintext
        .try_into()
        .map_err(|_| Error::InvalidInputLength {
            input: Input::Plaintext,
            len: plaintext.len(),
        })?;
    let key = Aes128Key::try_from(key)?;
    Ok(trace_block(&block, &key))
}
